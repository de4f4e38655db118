//! Drifting background particles.

use rand::{rngs::SmallRng, Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: usize,
    /// Position in percent of the viewport.
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; width: {:.2}px; height: {:.2}px; opacity: {:.2}; box-shadow: 0 0 {:.2}px rgba(34, 211, 238, 0.5); transition: all 0.05s linear;",
            self.x,
            self.y,
            self.size,
            self.size,
            self.opacity,
            self.size * 2.0
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|id| Particle {
                id,
                x: rng.random_range(0.0..100.0),
                y: rng.random_range(0.0..100.0),
                size: rng.random_range(1.0..4.0),
                speed_x: rng.random_range(-0.25..0.25),
                speed_y: rng.random_range(-0.25..0.25),
                opacity: rng.random_range(0.2..0.7),
            })
            .collect();
        Self { particles }
    }

    pub fn seeded(count: usize, seed: u64) -> Self {
        Self::generate(count, &mut SmallRng::seed_from_u64(seed))
    }

    /// Drift every particle by its velocity, wrapping at the viewport edges.
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.x = (p.x + p.speed_x).rem_euclid(100.0);
            p.y = (p.y + p.speed_y).rem_euclid(100.0);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ranges() {
        let field = ParticleField::seeded(50, 7);
        assert_eq!(field.particles().len(), 50);
        for p in field.particles() {
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((1.0..4.0).contains(&p.size));
            assert!(p.speed_x.abs() <= 0.25 && p.speed_y.abs() <= 0.25);
            assert!((0.2..0.7).contains(&p.opacity));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        assert_eq!(ParticleField::seeded(10, 42), ParticleField::seeded(10, 42));
    }

    #[test]
    fn test_advance_wraps() {
        let mut field = ParticleField {
            particles: vec![Particle {
                id: 0,
                x: 99.9,
                y: 0.1,
                size: 2.0,
                speed_x: 0.2,
                speed_y: -0.2,
                opacity: 0.5,
            }],
        };
        field.advance();
        let p = field.particles()[0];
        assert!((p.x - 0.1).abs() < 1e-9);
        assert!((p.y - 99.9).abs() < 1e-9);
    }

    #[test]
    fn test_stays_in_bounds_over_time() {
        let mut field = ParticleField::seeded(20, 3);
        for _ in 0..2000 {
            field.advance();
        }
        for p in field.particles() {
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
        }
    }
}
