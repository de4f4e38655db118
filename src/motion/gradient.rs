//! Scroll-linked background gradient.

use serde::{Deserialize, Serialize};

use super::MotionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Per-channel linear blend, rounded to the nearest integer.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }

    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.0, self.1, self.2)
    }
}

/// Colour triple pinned to a scroll-progress checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorKeyframe {
    pub position: f64,
    pub from: Rgb,
    pub via: Rgb,
    pub to: Rgb,
}

/// Ordered keyframes: first at 0, last at 100, positions strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColorKeyframe>", into = "Vec<ColorKeyframe>")]
pub struct Keyframes(Vec<ColorKeyframe>);

impl Keyframes {
    pub fn new(frames: Vec<ColorKeyframe>) -> Result<Self, MotionError> {
        if frames.len() < 2 {
            return Err(MotionError::TooFewKeyframes);
        }
        let starts_at_zero = frames.first().is_some_and(|k| k.position == 0.0);
        let ends_at_hundred = frames.last().is_some_and(|k| k.position == 100.0);
        let increasing = frames.windows(2).all(|w| w[0].position < w[1].position);
        if !(starts_at_zero && ends_at_hundred && increasing) {
            return Err(MotionError::UnorderedKeyframes);
        }
        Ok(Self(frames))
    }

    pub fn as_slice(&self) -> &[ColorKeyframe] {
        &self.0
    }
}

impl TryFrom<Vec<ColorKeyframe>> for Keyframes {
    type Error = MotionError;

    fn try_from(frames: Vec<ColorKeyframe>) -> Result<Self, Self::Error> {
        Self::new(frames)
    }
}

impl From<Keyframes> for Vec<ColorKeyframe> {
    fn from(k: Keyframes) -> Self {
        k.0
    }
}

impl Default for Keyframes {
    /// Deep navy at the top of the page drifting to teal and blue at the bottom.
    fn default() -> Self {
        Self(vec![
            ColorKeyframe {
                position: 0.0,
                from: Rgb(2, 6, 23),
                via: Rgb(15, 23, 42),
                to: Rgb(2, 6, 23),
            },
            ColorKeyframe {
                position: 33.0,
                from: Rgb(15, 23, 42),
                via: Rgb(23, 37, 84),
                to: Rgb(15, 23, 42),
            },
            ColorKeyframe {
                position: 66.0,
                from: Rgb(23, 37, 84),
                via: Rgb(8, 51, 68),
                to: Rgb(23, 37, 84),
            },
            ColorKeyframe {
                position: 100.0,
                from: Rgb(8, 51, 68),
                via: Rgb(22, 78, 99),
                to: Rgb(30, 58, 138),
            },
        ])
    }
}

/// Three-stop diagonal gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientSpec {
    pub from: Rgb,
    pub via: Rgb,
    pub to: Rgb,
}

impl GradientSpec {
    pub fn css(&self) -> String {
        format!(
            "linear-gradient(to bottom right, {}, {}, {})",
            self.from.css(),
            self.via.css(),
            self.to.css()
        )
    }
}

/// Blend the keyframe pair bracketing `progress`.
///
/// Out-of-range (or NaN) progress clamps to the nearest end of the list.
pub fn resolve_gradient(progress: f64, keyframes: &Keyframes) -> GradientSpec {
    let frames = keyframes.as_slice();
    let first = frames[0];
    let last = frames[frames.len() - 1];

    let progress = if progress.is_nan() {
        first.position
    } else {
        progress.clamp(first.position, last.position)
    };

    let (start, end) = frames
        .windows(2)
        .find(|w| w[0].position <= progress && progress <= w[1].position)
        .map(|w| (w[0], w[1]))
        .unwrap_or_else(|| {
            if progress < first.position {
                (frames[0], frames[1])
            } else {
                (frames[frames.len() - 2], last)
            }
        });

    let range = end.position - start.position;
    let factor = if range == 0.0 {
        0.0
    } else {
        (progress - start.position) / range
    };

    GradientSpec {
        from: start.from.lerp(end.from, factor),
        via: start.via.lerp(end.via, factor),
        to: start.to.lerp(end.to, factor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(g: &GradientSpec) -> [u8; 9] {
        [
            g.from.0, g.from.1, g.from.2, g.via.0, g.via.1, g.via.2, g.to.0, g.to.1, g.to.2,
        ]
    }

    #[test]
    fn test_boundaries_are_exact() {
        let kf = Keyframes::default();
        let first = kf.as_slice()[0];
        let last = kf.as_slice()[3];

        let top = resolve_gradient(0.0, &kf);
        assert_eq!((top.from, top.via, top.to), (first.from, first.via, first.to));

        let bottom = resolve_gradient(100.0, &kf);
        assert_eq!(
            (bottom.from, bottom.via, bottom.to),
            (last.from, last.via, last.to)
        );
    }

    #[test]
    fn test_midpoint_blend() {
        let kf = Keyframes::new(vec![
            ColorKeyframe {
                position: 0.0,
                from: Rgb(0, 0, 0),
                via: Rgb(0, 100, 200),
                to: Rgb(255, 255, 255),
            },
            ColorKeyframe {
                position: 100.0,
                from: Rgb(100, 200, 255),
                via: Rgb(0, 0, 0),
                to: Rgb(255, 255, 255),
            },
        ])
        .expect("valid keyframes");
        let g = resolve_gradient(50.0, &kf);
        assert_eq!(g.from, Rgb(50, 100, 128));
        assert_eq!(g.via, Rgb(0, 50, 100));
        assert_eq!(g.to, Rgb(255, 255, 255));
    }

    #[test]
    fn test_continuous_and_in_range() {
        let kf = Keyframes::default();
        let mut prev = channels(&resolve_gradient(0.0, &kf));
        for step in 1..=1000 {
            let p = f64::from(step) / 10.0;
            let cur = channels(&resolve_gradient(p, &kf));
            for (a, b) in prev.iter().zip(cur.iter()) {
                assert!(a.abs_diff(*b) <= 1, "jump at progress {p}");
            }
            prev = cur;
        }
    }

    #[test]
    fn test_out_of_range_clamps() {
        let kf = Keyframes::default();
        assert_eq!(resolve_gradient(-25.0, &kf), resolve_gradient(0.0, &kf));
        assert_eq!(resolve_gradient(140.0, &kf), resolve_gradient(100.0, &kf));
        assert_eq!(resolve_gradient(f64::NAN, &kf), resolve_gradient(0.0, &kf));
        assert_eq!(
            resolve_gradient(f64::INFINITY, &kf),
            resolve_gradient(100.0, &kf)
        );
    }

    #[test]
    fn test_shared_boundary_uses_first_pair() {
        let kf = Keyframes::default();
        let at = resolve_gradient(33.0, &kf);
        let k = kf.as_slice()[1];
        assert_eq!((at.from, at.via, at.to), (k.from, k.via, k.to));
    }

    #[test]
    fn test_keyframe_validation() {
        let k = |position| ColorKeyframe {
            position,
            from: Rgb(0, 0, 0),
            via: Rgb(0, 0, 0),
            to: Rgb(0, 0, 0),
        };
        assert_eq!(
            Keyframes::new(vec![k(0.0)]),
            Err(MotionError::TooFewKeyframes)
        );
        assert_eq!(
            Keyframes::new(vec![k(0.0), k(50.0), k(50.0), k(100.0)]),
            Err(MotionError::UnorderedKeyframes)
        );
        assert_eq!(
            Keyframes::new(vec![k(10.0), k(100.0)]),
            Err(MotionError::UnorderedKeyframes)
        );
        assert!(Keyframes::new(vec![k(0.0), k(100.0)]).is_ok());
    }

    #[test]
    fn test_deserialize_rejects_bad_order() {
        let ok = r#"[
            {"position": 0, "from": [0,0,0], "via": [1,1,1], "to": [2,2,2]},
            {"position": 100, "from": [9,9,9], "via": [8,8,8], "to": [7,7,7]}
        ]"#;
        let kf: Keyframes = serde_json::from_str(ok).expect("ordered keyframes parse");
        assert_eq!(kf.as_slice().len(), 2);

        let bad = r#"[
            {"position": 100, "from": [0,0,0], "via": [1,1,1], "to": [2,2,2]},
            {"position": 0, "from": [9,9,9], "via": [8,8,8], "to": [7,7,7]}
        ]"#;
        assert!(serde_json::from_str::<Keyframes>(bad).is_err());
    }

    #[test]
    fn test_css() {
        let g = resolve_gradient(0.0, &Keyframes::default());
        assert_eq!(
            g.css(),
            "linear-gradient(to bottom right, rgb(2,6,23), rgb(15,23,42), rgb(2,6,23))"
        );
    }
}
