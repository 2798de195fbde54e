//! Navigation interception policy.

use http::Uri;

/// Properties of the element that originated a navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSource {
    /// The raw `href`, exactly as authored.
    pub href: Option<String>,
    /// Whether the link opens a new browsing context (`target="_blank"`).
    pub opens_new_context: bool,
    /// Whether the element carries the explicit opt-out marker.
    pub opt_out: bool,
}

impl LinkSource {
    /// A plain link with an href.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Default::default()
        }
    }

    /// A link-like element without an href.
    pub fn without_href() -> Self {
        Self::default()
    }

    /// Mark the link as opening a new browsing context.
    pub fn with_new_context(mut self) -> Self {
        self.opens_new_context = true;
        self
    }

    /// Mark the link as explicitly opted out of interception.
    pub fn with_opt_out(mut self) -> Self {
        self.opt_out = true;
        self
    }
}

/// Why a navigation was left to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassReason {
    /// The element carries the explicit opt-out marker.
    OptOut,
    /// The link opens a new browsing context.
    NewContext,
    /// Same-document fragment link.
    Fragment,
    /// Non-HTTP scheme such as `mailto:` or `tel:`.
    NonHttpScheme(String),
    /// Absolute link to a different origin.
    ForeignOrigin,
}

/// Outcome of evaluating one candidate navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterceptDecision {
    /// Glide takes over; the click becomes a transition request.
    Intercept,
    /// The browser handles it natively.
    Pass(PassReason),
}

impl InterceptDecision {
    /// Whether the navigation is intercepted.
    pub fn is_intercept(&self) -> bool {
        matches!(self, Self::Intercept)
    }
}

/// Origin the current document was served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    scheme: String,
    host: String,
    port: u16,
}

impl Origin {
    /// Parse the origin out of an absolute URL.
    ///
    /// Returns `None` for relative references or URLs without a host.
    pub fn parse(url: &str) -> Option<Self> {
        let uri: Uri = url.trim().parse().ok()?;
        let scheme = uri.scheme_str()?.to_ascii_lowercase();
        let host = uri.host()?.to_ascii_lowercase();
        let port = uri.port_u16().or_else(|| default_port(&scheme))?;
        Some(Self { scheme, host, port })
    }
}

fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}

/// Decides which link clicks become transitions.
///
/// A navigation is excluded when the element opts out, opens a new browsing
/// context, targets a fragment, uses a non-HTTP scheme, or resolves to a
/// foreign origin. Everything else, including relative links, is taken over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptPolicy {
    origin: Origin,
}

impl InterceptPolicy {
    /// Policy for a document served from `origin`.
    pub fn new(origin: Origin) -> Self {
        Self { origin }
    }

    /// Policy from the current document URL.
    pub fn for_site(document_url: &str) -> Option<Self> {
        Origin::parse(document_url).map(Self::new)
    }

    /// Evaluate one candidate navigation.
    pub fn evaluate(&self, link: &LinkSource) -> InterceptDecision {
        if link.opt_out {
            return InterceptDecision::Pass(PassReason::OptOut);
        }
        if link.opens_new_context {
            return InterceptDecision::Pass(PassReason::NewContext);
        }

        // An element without an href is not navigable; there is nothing to
        // exclude it from.
        let href = match link.href.as_deref() {
            Some(href) if !href.is_empty() => href,
            _ => return InterceptDecision::Intercept,
        };

        if href.starts_with('#') {
            return InterceptDecision::Pass(PassReason::Fragment);
        }

        if let Some(scheme) = scheme_of(href) {
            if scheme != "http" && scheme != "https" {
                return InterceptDecision::Pass(PassReason::NonHttpScheme(scheme));
            }
            // Unparseable absolute hrefs fall through to interception; the
            // transition layer is no worse at handling them than the browser.
            if let Some(origin) = Origin::parse(href) {
                if origin != self.origin {
                    return InterceptDecision::Pass(PassReason::ForeignOrigin);
                }
            }
        }

        InterceptDecision::Intercept
    }
}

/// The RFC 3986 scheme of `href`, lowercased, if it has one.
fn scheme_of(href: &str) -> Option<String> {
    let colon = href.find(':')?;
    let candidate = &href[..colon];
    let mut chars = candidate.chars();
    if !chars.next()?.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-')) {
        return None;
    }
    Some(candidate.to_ascii_lowercase())
}
