//! Counter percent formatting.

/// Format progress in `[0, 1]` as the zero-padded percent the counter shows.
///
/// Out-of-range input is clamped, so a stale or garbage progress source can
/// never render a nonsense numeral.
pub fn format_percent(progress: f32) -> String {
    let clamped = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let percent = (clamped * 100.0).round() as u32;
    format!("{:02}", percent)
}
