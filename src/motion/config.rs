use serde::{Deserialize, Serialize};

/// Tunable constants for every animated effect on the page.
///
/// Loaded from the `motion` object of the embedded content file; any field
/// left out keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Scroll distance in px that the intro sequence stays pinned for.
    pub pin_span: f64,
    /// Zoom focal point, in percent of the image box.
    pub focal_x: f64,
    pub focal_y: f64,
    pub max_scale: f64,
    /// Starting downward offset in px of the revealed intro content.
    pub content_offset: f64,
    pub typing_ms: u64,
    pub deleting_ms: u64,
    pub pause_ms: u64,
    pub counter_steps: u32,
    pub counter_duration_ms: u64,
    pub particle_count: usize,
    pub particle_tick_ms: u64,
    /// `None` disables deck autoplay.
    pub deck_autoplay_ms: Option<u64>,
    /// Distance in px below the viewport top used to pick the active section.
    pub section_probe: f64,
    pub reveal_threshold: f64,
    pub reveal_bottom_inset: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            pin_span: 2000.0,
            focal_x: 60.0,
            focal_y: 42.0,
            max_scale: 15.0,
            content_offset: 40.0,
            typing_ms: 100,
            deleting_ms: 50,
            pause_ms: 2000,
            counter_steps: 60,
            counter_duration_ms: 2000,
            particle_count: 50,
            particle_tick_ms: 50,
            deck_autoplay_ms: Some(6000),
            section_probe: 100.0,
            reveal_threshold: 0.1,
            reveal_bottom_inset: 100.0,
        }
    }
}

impl MotionConfig {
    /// Interval between counter steps, never zero.
    pub fn counter_step_ms(&self) -> u64 {
        (self.counter_duration_ms / u64::from(self.counter_steps.max(1))).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let cfg: MotionConfig =
            serde_json::from_str(r#"{ "pin_span": 1500, "deck_autoplay_ms": null }"#)
                .expect("valid config");
        assert_eq!(cfg.pin_span, 1500.0);
        assert_eq!(cfg.deck_autoplay_ms, None);
        assert_eq!(cfg.max_scale, 15.0);
        assert_eq!(cfg.typing_ms, 100);
    }

    #[test]
    fn test_counter_step_interval() {
        let cfg = MotionConfig::default();
        assert_eq!(cfg.counter_step_ms(), 33);

        let cfg = MotionConfig {
            counter_steps: 0,
            counter_duration_ms: 0,
            ..Default::default()
        };
        assert_eq!(cfg.counter_step_ms(), 1);
    }
}
