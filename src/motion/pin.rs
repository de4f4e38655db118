//! Scroll-pinned intro sequence: the photo zooms in, fades out, an overlay
//! fades in and the welcome content slides into place.
//!
//! Progress through the sequence is a pure function of how far the page has
//! scrolled into a fixed-size trigger window. The window is anchored at the
//! moment the container's top edge meets the viewport top, so it is only
//! valid for the layout it was measured against; every layout change
//! replaces it.

use super::{MotionConfig, MotionError};

/// Easing curves used by the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out.
    Power1Out,
    /// Cubic ease-out.
    Power2Out,
    /// Cubic ease-in-out.
    Power2InOut,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// One eased segment on the sequence timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    /// Eased completion of this segment at timeline time `time`, in [0,1].
    pub fn sample(&self, time: f64) -> f64 {
        if self.duration <= 0.0 {
            return if time >= self.start { 1.0 } else { 0.0 };
        }
        self.ease.apply((time - self.start) / self.duration)
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Appends segments back to back, optionally pulling each one earlier so it
/// overlaps the tail of what came before.
#[derive(Debug, Default)]
struct TimelineBuilder {
    end: f64,
}

impl TimelineBuilder {
    fn push(&mut self, overlap: f64, duration: f64, ease: Ease) -> Tween {
        let start = (self.end - overlap).max(0.0);
        let tween = Tween {
            start,
            duration,
            ease,
        };
        self.end = self.end.max(tween.end());
        tween
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinTimeline {
    pub zoom: Tween,
    pub image_fade: Tween,
    pub overlay_fade: Tween,
    pub content_reveal: Tween,
    pub total: f64,
}

impl Default for PinTimeline {
    fn default() -> Self {
        let mut b = TimelineBuilder::default();
        let zoom = b.push(0.0, 1.0, Ease::Power2InOut);
        let image_fade = b.push(0.3, 0.3, Ease::Power1Out);
        let overlay_fade = b.push(0.3, 0.4, Ease::Power1Out);
        let content_reveal = b.push(0.2, 0.5, Ease::Power2Out);
        Self {
            zoom,
            image_fade,
            overlay_fade,
            content_reveal,
            total: b.end,
        }
    }
}

/// Resolved styles for every layer of the intro at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinFrame {
    pub image_scale: f64,
    pub image_opacity: f64,
    pub overlay_opacity: f64,
    pub content_opacity: f64,
    pub content_offset_y: f64,
    pub focal_x: f64,
    pub focal_y: f64,
}

impl PinFrame {
    pub fn at(progress: f64, timeline: &PinTimeline, config: &MotionConfig) -> Self {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let time = progress * timeline.total;
        let zoom = timeline.zoom.sample(time);
        let reveal = timeline.content_reveal.sample(time);
        Self {
            image_scale: 1.0 + (config.max_scale - 1.0) * zoom,
            image_opacity: 1.0 - timeline.image_fade.sample(time),
            overlay_opacity: timeline.overlay_fade.sample(time),
            content_opacity: reveal,
            content_offset_y: config.content_offset * (1.0 - reveal),
            focal_x: config.focal_x,
            focal_y: config.focal_y,
        }
    }

    /// Non-animated presentation: photo at rest with the welcome content on
    /// top of it.
    pub fn static_fallback(config: &MotionConfig) -> Self {
        Self {
            image_scale: 1.0,
            image_opacity: 1.0,
            overlay_opacity: 0.0,
            content_opacity: 1.0,
            content_offset_y: 0.0,
            focal_x: config.focal_x,
            focal_y: config.focal_y,
        }
    }

    pub fn image_style(&self) -> String {
        format!(
            "transform: scale({:.4}); transform-origin: {}% {}%; opacity: {:.4}; will-change: transform, opacity;",
            self.image_scale, self.focal_x, self.focal_y, self.image_opacity
        )
    }

    pub fn overlay_style(&self) -> String {
        format!("opacity: {:.4}; will-change: opacity;", self.overlay_opacity)
    }

    pub fn content_style(&self) -> String {
        format!(
            "opacity: {:.4}; transform: translateY({:.2}px); will-change: transform, opacity;",
            self.content_opacity, self.content_offset_y
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinState {
    Idle,
    PinnedAnimating,
    Released,
}

/// Absolute scroll range during which the intro is pinned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerWindow {
    pub start: f64,
    pub span: f64,
}

impl TriggerWindow {
    /// Window opening when the page has scrolled to the trigger's top edge.
    pub fn anchored(trigger_top: f64, span: f64) -> Result<Self, MotionError> {
        if span <= 0.0 || !span.is_finite() {
            return Err(MotionError::InvalidSpan(span));
        }
        Ok(Self {
            start: trigger_top,
            span,
        })
    }

    pub fn end(&self) -> f64 {
        self.start + self.span
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        if scroll_y.is_nan() {
            return 0.0;
        }
        ((scroll_y - self.start) / self.span).clamp(0.0, 1.0)
    }

    pub fn state(&self, scroll_y: f64) -> PinState {
        if scroll_y < self.start {
            PinState::Idle
        } else if scroll_y >= self.end() {
            PinState::Released
        } else {
            PinState::PinnedAnimating
        }
    }
}

/// Whether the scroll-linked animation can be driven at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Readiness {
    #[default]
    NotReady,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerId(u64);

/// Live scroll triggers, each owning the window it was built for.
#[derive(Debug, Default)]
pub struct TriggerRegistry {
    next_id: u64,
    live: Vec<(TriggerId, TriggerWindow)>,
}

impl TriggerRegistry {
    pub fn register(&mut self, window: TriggerWindow) -> TriggerId {
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.live.push((id, window));
        id
    }

    pub fn kill(&mut self, id: TriggerId) -> bool {
        let before = self.live.len();
        self.live.retain(|(live_id, _)| *live_id != id);
        self.live.len() != before
    }

    pub fn kill_all(&mut self) {
        self.live.clear();
    }

    pub fn get(&self, id: TriggerId) -> Option<TriggerWindow> {
        self.live
            .iter()
            .find(|(live_id, _)| *live_id == id)
            .map(|(_, w)| *w)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

/// Drives the intro sequence from scroll position.
///
/// No trigger exists until the controller is marked ready and has been given
/// a layout measurement. Until then every frame is the static fallback.
#[derive(Debug)]
pub struct PinController {
    config: MotionConfig,
    timeline: PinTimeline,
    readiness: Readiness,
    triggers: TriggerRegistry,
    current: Option<TriggerId>,
}

impl PinController {
    pub fn new(config: MotionConfig) -> Result<Self, MotionError> {
        if config.pin_span <= 0.0 || !config.pin_span.is_finite() {
            return Err(MotionError::InvalidSpan(config.pin_span));
        }
        Ok(Self {
            config,
            timeline: PinTimeline::default(),
            readiness: Readiness::NotReady,
            triggers: TriggerRegistry::default(),
            current: None,
        })
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    pub fn mark_ready(&mut self) {
        self.readiness = Readiness::Ready;
    }

    /// Animation capability lost or never available: drop every trigger and
    /// fall back to the static frame.
    pub fn mark_unavailable(&mut self) {
        if self.readiness == Readiness::Ready {
            log::warn!("scroll animation unavailable, showing static intro");
        }
        self.readiness = Readiness::NotReady;
        self.teardown();
    }

    /// Rebuild the trigger for a fresh measurement of the container's
    /// absolute top. Any previous trigger is killed first.
    pub fn layout(&mut self, trigger_top: f64) -> Option<TriggerId> {
        if self.readiness != Readiness::Ready {
            return None;
        }
        if let Some(stale) = self.current.take() {
            self.triggers.kill(stale);
            log::debug!("rebuilding intro trigger at {trigger_top}");
        }
        let window = TriggerWindow::anchored(trigger_top, self.config.pin_span).ok()?;
        let id = self.triggers.register(window);
        self.current = Some(id);
        Some(id)
    }

    pub fn teardown(&mut self) {
        self.triggers.kill_all();
        self.current = None;
    }

    pub fn window(&self) -> Option<TriggerWindow> {
        self.current.and_then(|id| self.triggers.get(id))
    }

    pub fn live_triggers(&self) -> usize {
        self.triggers.live_count()
    }

    pub fn state(&self, scroll_y: f64) -> PinState {
        self.window()
            .map_or(PinState::Idle, |w| w.state(scroll_y))
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        self.window().map_or(0.0, |w| w.progress(scroll_y))
    }

    pub fn frame(&self, scroll_y: f64) -> PinFrame {
        match self.window() {
            Some(w) => PinFrame::at(w.progress(scroll_y), &self.timeline, &self.config),
            None => PinFrame::static_fallback(&self.config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_controller(top: f64) -> PinController {
        let mut c = PinController::new(MotionConfig::default()).expect("valid config");
        c.mark_ready();
        c.layout(top);
        c
    }

    #[test]
    fn test_timeline_offsets() {
        let tl = PinTimeline::default();
        assert_eq!(tl.zoom.start, 0.0);
        assert!((tl.image_fade.start - 0.7).abs() < 1e-9);
        assert!((tl.overlay_fade.start - 0.7).abs() < 1e-9);
        assert!((tl.content_reveal.start - 0.9).abs() < 1e-9);
        assert!((tl.total - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_progress_linear_in_distance() {
        let c = ready_controller(800.0);
        assert_eq!(c.progress(800.0), 0.0);
        assert_eq!(c.progress(1800.0), 0.5);
        assert_eq!(c.progress(2800.0), 1.0);
        assert_eq!(c.progress(5000.0), 1.0);
        assert_eq!(c.progress(0.0), 0.0);
    }

    #[test]
    fn test_states() {
        let c = ready_controller(800.0);
        assert_eq!(c.state(100.0), PinState::Idle);
        assert_eq!(c.state(800.0), PinState::PinnedAnimating);
        assert_eq!(c.state(2799.0), PinState::PinnedAnimating);
        assert_eq!(c.state(2800.0), PinState::Released);
    }

    #[test]
    fn test_frame_endpoints() {
        let c = ready_controller(0.0);
        let start = c.frame(0.0);
        assert_eq!(start.image_scale, 1.0);
        assert_eq!(start.image_opacity, 1.0);
        assert_eq!(start.overlay_opacity, 0.0);
        assert_eq!(start.content_opacity, 0.0);
        assert_eq!(start.content_offset_y, 40.0);

        let end = c.frame(2000.0);
        assert_eq!(end.image_scale, 15.0);
        assert_eq!(end.image_opacity, 0.0);
        assert_eq!(end.overlay_opacity, 1.0);
        assert_eq!(end.content_opacity, 1.0);
        assert_eq!(end.content_offset_y, 0.0);
    }

    #[test]
    fn test_phases_cross_fade() {
        let c = ready_controller(0.0);
        // t = 0.63: zoom still running, fades not started
        let f = c.frame(900.0);
        assert!(f.image_scale > 1.0 && f.image_scale < 15.0);
        assert_eq!(f.image_opacity, 1.0);
        assert_eq!(f.overlay_opacity, 0.0);
        assert_eq!(f.content_opacity, 0.0);

        // t = 1.05: zoom and image fade done, overlay and content mid-way
        let f = c.frame(1500.0);
        assert_eq!(f.image_scale, 15.0);
        assert_eq!(f.image_opacity, 0.0);
        assert!(f.overlay_opacity > 0.0 && f.overlay_opacity < 1.0);
        assert!(f.content_opacity > 0.0 && f.content_opacity < 1.0);
    }

    #[test]
    fn test_zoom_monotonic() {
        let c = ready_controller(0.0);
        let mut prev = c.frame(0.0).image_scale;
        for y in (0..=2000).step_by(25) {
            let scale = c.frame(f64::from(y)).image_scale;
            assert!(scale >= prev);
            prev = scale;
        }
    }

    #[test]
    fn test_not_ready_is_static() {
        let mut c = PinController::new(MotionConfig::default()).expect("valid config");
        assert_eq!(c.layout(500.0), None);
        assert_eq!(c.live_triggers(), 0);
        assert_eq!(
            c.frame(900.0),
            PinFrame::static_fallback(&MotionConfig::default())
        );
        assert_eq!(c.state(900.0), PinState::Idle);
    }

    #[test]
    fn test_resize_replaces_trigger() {
        let mut c = ready_controller(800.0);
        let first = c.window().expect("trigger built");
        c.layout(950.0);
        c.layout(1020.0);
        assert_eq!(c.live_triggers(), 1);
        let rebuilt = c.window().expect("trigger rebuilt");
        assert_ne!(first, rebuilt);
        assert_eq!(rebuilt.start, 1020.0);
        assert_eq!(c.progress(2020.0), 0.5);
    }

    #[test]
    fn test_unavailable_tears_down() {
        let mut c = ready_controller(0.0);
        c.mark_unavailable();
        assert_eq!(c.readiness(), Readiness::NotReady);
        assert_eq!(c.live_triggers(), 0);
        assert_eq!(c.frame(1000.0).content_opacity, 1.0);
    }

    #[test]
    fn test_invalid_span() {
        let cfg = MotionConfig {
            pin_span: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            PinController::new(cfg),
            Err(MotionError::InvalidSpan(_))
        ));
        assert!(TriggerWindow::anchored(0.0, -5.0).is_err());
    }

    #[test]
    fn test_easing_endpoints() {
        for ease in [Ease::Linear, Ease::Power1Out, Ease::Power2Out, Ease::Power2InOut] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
            assert_eq!(ease.apply(-3.0), 0.0);
        }
        assert_eq!(Ease::Power2InOut.apply(0.5), 0.5);
    }
}
