//! Raw input signals and the small derivations that sit directly on them.

/// Page sections tracked by the navigation, in document order.
pub const SECTIONS: [&str; 5] = ["hero", "about", "skills", "projects", "contact"];

/// One sample of the window's scroll geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Scroll position as a percentage of the scrollable range, in [0,100].
    ///
    /// A page that fits in one viewport has no scrollable range and reports 0.
    pub fn progress(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if range <= 0.0 || !range.is_finite() || !self.offset.is_finite() {
            return 0.0;
        }
        (self.offset / range * 100.0).clamp(0.0, 100.0)
    }
}

/// Latest pointer sample in viewport pixels. Most recent sample wins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Soft cyan glow centred on the pointer.
    pub fn highlight_css(&self) -> String {
        format!(
            "radial-gradient(600px circle at {:.0}px {:.0}px, rgba(34, 211, 238, 0.06), transparent 40%)",
            self.x, self.y
        )
    }
}

/// Coalesces bursts of high-frequency events into one update per frame.
///
/// `request` answers whether a new frame callback has to be scheduled; the
/// callback calls `complete` once it has sampled the latest input.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Viewport-relative vertical extent of a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub bottom: f64,
}

/// First section straddling the probe line, if any.
pub fn active_section<'a>(sections: &[SectionBounds<'a>], probe: f64) -> Option<&'a str> {
    sections
        .iter()
        .find(|s| s.top <= probe && s.bottom >= probe)
        .map(|s| s.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_linear() {
        let m = ScrollMetrics {
            offset: 500.0,
            document_height: 3000.0,
            viewport_height: 1000.0,
        };
        assert_eq!(m.progress(), 25.0);
    }

    #[test]
    fn test_progress_short_page_is_zero() {
        let fits = ScrollMetrics {
            offset: 0.0,
            document_height: 800.0,
            viewport_height: 800.0,
        };
        assert_eq!(fits.progress(), 0.0);

        let shorter = ScrollMetrics {
            offset: 10.0,
            document_height: 600.0,
            viewport_height: 800.0,
        };
        assert_eq!(shorter.progress(), 0.0);
    }

    #[test]
    fn test_progress_clamps_overscroll() {
        let bounce = ScrollMetrics {
            offset: -40.0,
            document_height: 2000.0,
            viewport_height: 1000.0,
        };
        assert_eq!(bounce.progress(), 0.0);

        let past_end = ScrollMetrics {
            offset: 1200.0,
            document_height: 2000.0,
            viewport_height: 1000.0,
        };
        assert_eq!(past_end.progress(), 100.0);
    }

    #[test]
    fn test_frame_gate_coalesces() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());
        gate.complete();
        assert!(gate.request());
    }

    #[test]
    fn test_active_section() {
        let sections = [
            SectionBounds {
                id: "hero",
                top: -900.0,
                bottom: 50.0,
            },
            SectionBounds {
                id: "about",
                top: 50.0,
                bottom: 1200.0,
            },
            SectionBounds {
                id: "skills",
                top: 1200.0,
                bottom: 2000.0,
            },
        ];
        assert_eq!(active_section(&sections, 100.0), Some("about"));
        assert_eq!(active_section(&sections, 3000.0), None);
        // shared edge goes to the earlier section
        assert_eq!(active_section(&sections, 1200.0), Some("about"));
    }

    #[test]
    fn test_highlight_css() {
        let p = PointerPosition { x: 12.4, y: 300.6 };
        assert_eq!(
            p.highlight_css(),
            "radial-gradient(600px circle at 12px 301px, rgba(34, 211, 238, 0.06), transparent 40%)"
        );
    }
}
