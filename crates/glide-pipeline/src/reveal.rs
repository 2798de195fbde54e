//! Typed reveal configuration and load-reveal planning.

use std::cmp::Ordering;
use std::collections::HashMap;

use glide_core::ViewContext;
use serde::{Deserialize, Serialize};

/// Default interval between successive reveal elements, in seconds.
pub const STAGGER_DEFAULT: f32 = 0.075;

/// Extra delay applied to the whole plan when a view is reached through
/// navigation, leaving the enter animation a head start.
pub const NAVIGATION_BASE_DELAY: f32 = 0.15;

/// Which view kinds an element's reveal applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealWhen {
    /// First load and navigation alike.
    #[default]
    Both,
    /// Only on the very first page load.
    First,
    /// Only on views reached through navigation.
    Nav,
}

impl RevealWhen {
    /// Parse the attribute value; anything unrecognized means `Both`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|r| r.trim().to_ascii_lowercase()).as_deref() {
            Some("first") => Self::First,
            Some("nav") => Self::Nav,
            _ => Self::Both,
        }
    }

    /// Whether an element gated this way runs for the given view.
    pub fn applies(&self, ctx: &ViewContext) -> bool {
        match self {
            Self::Both => true,
            Self::First => ctx.is_first_load,
            Self::Nav => ctx.is_navigation,
        }
    }
}

/// Attribute lookup on one reveal element.
pub trait AttrSource {
    /// The raw attribute value, if present.
    fn attr(&self, name: &str) -> Option<&str>;
}

impl AttrSource for HashMap<String, String> {
    fn attr(&self, name: &str) -> Option<&str> {
        self.get(name).map(|v| v.as_str())
    }
}

/// Parsed per-element reveal parameters.
///
/// Parsed once per element; malformed numbers fall back to defaults here
/// rather than being re-interpreted at animation time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Explicit position in the reveal order; unordered elements follow all
    /// ordered ones.
    pub order: Option<f32>,
    /// Extra delay for this element, in seconds.
    pub delay: f32,
    /// Override of the stage's default duration, in seconds.
    pub duration: Option<f32>,
    /// Override of the stage's default easing name.
    pub ease: Option<String>,
    /// Which view kinds this reveal applies to.
    pub when: RevealWhen,
}

impl RevealConfig {
    /// Parse from `data-reveal-*` attributes.
    pub fn parse(attrs: &dyn AttrSource) -> Self {
        Self {
            order: attrs.attr("data-reveal-order").and_then(parse_f32),
            delay: attrs
                .attr("data-reveal-delay")
                .and_then(parse_f32)
                .unwrap_or(0.0),
            duration: attrs.attr("data-reveal-duration").and_then(parse_f32),
            ease: attrs
                .attr("data-reveal-ease")
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
            when: RevealWhen::parse(attrs.attr("data-reveal-on")),
        }
    }
}

fn parse_f32(raw: &str) -> Option<f32> {
    raw.trim().parse().ok()
}

/// One element eligible for the on-load reveal.
#[derive(Debug, Clone)]
pub struct RevealElement {
    /// Identifier the stage uses to locate the element.
    pub id: String,
    /// Its parsed configuration.
    pub config: RevealConfig,
}

impl RevealElement {
    /// Create a reveal element.
    pub fn new(id: impl Into<String>, config: RevealConfig) -> Self {
        Self {
            id: id.into(),
            config,
        }
    }
}

/// One scheduled entry of a reveal plan.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealEntry {
    /// Element identifier.
    pub id: String,
    /// Start offset within the plan, in seconds.
    pub start: f32,
    /// Per-element duration override.
    pub duration: Option<f32>,
    /// Per-element easing override.
    pub ease: Option<String>,
}

/// Ordered reveal timeline handed to the stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealPlan {
    /// Delay before the whole plan starts, in seconds.
    pub base_delay: f32,
    /// Entries in play order.
    pub entries: Vec<RevealEntry>,
}

impl RevealPlan {
    /// Whether the plan schedules anything.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the on-load reveal plan for one view.
///
/// Elements gated away from this view kind are dropped; elements with an
/// explicit order come first (ascending), the rest keep document order; each
/// kept element starts at `delay + index * stagger`.
pub fn plan_load_reveals(
    elements: &[RevealElement],
    ctx: &ViewContext,
    stagger: f32,
) -> RevealPlan {
    let mut kept: Vec<&RevealElement> = elements
        .iter()
        .filter(|e| e.config.when.applies(ctx))
        .collect();
    kept.sort_by(|a, b| order_cmp(a.config.order, b.config.order));

    let base_delay = if ctx.is_navigation {
        NAVIGATION_BASE_DELAY
    } else {
        0.0
    };

    RevealPlan {
        base_delay,
        entries: kept
            .iter()
            .enumerate()
            .map(|(index, e)| RevealEntry {
                id: e.id.clone(),
                start: e.config.delay + index as f32 * stagger,
                duration: e.config.duration,
                ease: e.config.ease.clone(),
            })
            .collect(),
    }
}

/// Explicit orders ascending, ordered elements before unordered, otherwise
/// stable.
pub(crate) fn order_cmp(a: Option<f32>, b: Option<f32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
