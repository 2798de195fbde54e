//! Loader visual surface seam.

use async_trait::async_trait;

use crate::schedule::LoaderTuning;

/// Size-dependent measurements taken after the loader becomes visible.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TravelMetrics {
    /// Vertical distance the counter travels across the full sequence, in rem.
    pub travel_rem: f32,
}

impl TravelMetrics {
    /// Create metrics from a travel distance.
    pub fn new(travel_rem: f32) -> Self {
        Self { travel_rem }
    }

    /// Counter offset for `progress` in `[0, 1]`, in rem.
    ///
    /// The counter rides upward, so the offset is non-positive.
    pub fn offset_for(&self, progress: f32) -> f32 {
        -(self.travel_rem * progress)
    }
}

/// Visual surface of the loader, supplied by the embedder.
///
/// The sequencer owns ordering and progress; the stage owns pixels. A stage
/// reporting `is_present() == false` turns the whole sequence into a no-op:
/// the loader markup is optional per page.
#[async_trait(?Send)]
pub trait LoaderStage {
    /// Whether the loader markup exists on this page.
    fn is_present(&self) -> bool;

    /// Make the loader visually present.
    fn show(&self);

    /// Measure travel. Only called while the loader is visible; measuring a
    /// hidden loader reads zero-height layout.
    fn measure(&self) -> TravelMetrics;

    /// Move the counter to `offset_rem`.
    fn set_counter_offset(&self, offset_rem: f32);

    /// Swap the numeral to `percent` and resolve once the swap has settled.
    async fn settle(&self, percent: u32, tuning: &LoaderTuning);

    /// Fade the loader to transparent.
    async fn fade_out(&self, tuning: &LoaderTuning);

    /// Remove the loader from flow.
    fn hide(&self);
}

/// Stage for pages without loader markup; every call is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct AbsentStage;

#[async_trait(?Send)]
impl LoaderStage for AbsentStage {
    fn is_present(&self) -> bool {
        false
    }

    fn show(&self) {}

    fn measure(&self) -> TravelMetrics {
        TravelMetrics::default()
    }

    fn set_counter_offset(&self, _offset_rem: f32) {}

    async fn settle(&self, _percent: u32, _tuning: &LoaderTuning) {}

    async fn fade_out(&self, _tuning: &LoaderTuning) {}

    fn hide(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_scales_with_progress() {
        let metrics = TravelMetrics::new(10.0);

        assert_eq!(metrics.offset_for(0.0), 0.0);
        assert_eq!(metrics.offset_for(0.5), -5.0);
        assert_eq!(metrics.offset_for(1.0), -10.0);
    }
}
