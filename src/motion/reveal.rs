//! One-shot entrance reveals.

use std::collections::HashSet;

use super::MotionConfig;

/// Identifiers of elements that have entered the viewport at least once.
/// Insert-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    seen: HashSet<String>,
}

impl VisibilitySet {
    /// Returns `true` the first time `id` is seen.
    pub fn on_element_intersect(&mut self, id: &str) -> bool {
        if self.seen.contains(id) {
            return false;
        }
        self.seen.insert(id.to_string())
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Intersection policy for reveal observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    /// The observed region stops this many px above the viewport bottom.
    pub bottom_inset: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_inset: 100.0,
        }
    }
}

impl From<&MotionConfig> for RevealOptions {
    fn from(config: &MotionConfig) -> Self {
        Self {
            threshold: config.reveal_threshold.clamp(0.0, 1.0),
            bottom_inset: config.reveal_bottom_inset,
        }
    }
}

impl RevealOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_inset)
    }

    pub fn intersects(&self, visible_ratio: f64) -> bool {
        visible_ratio > 0.0 && visible_ratio >= self.threshold
    }
}

/// Whether an element should still wear its pre-entrance classes.
///
/// Markup rendered before the client takes over (server output, or a page
/// whose script never loads) is always shown in its revealed state.
pub fn is_concealed(hydrated: bool, shown: bool) -> bool {
    hydrated && !shown
}
