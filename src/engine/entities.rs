use rand::Rng;

use crate::{
    foundation::{
        core::{Point, Vec2, Viewport},
        math::lerp,
    },
    render::backend::Ring,
};

const BLOB_RADIUS_MIN: f64 = 200.0;
const BLOB_RADIUS_SPAN: f64 = 300.0;
const BLOB_VELOCITY_SPAN: f64 = 0.5;
const BLOB_HUE_VARIANCE: f64 = 40.0;
const BLOB_HUE_SWING: f64 = 20.0;
const BLOB_HUE_RATE: f64 = 0.5;

/// Soft radial glow drifting inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Blob {
    /// Centre.
    pub position: Point,
    /// Glow radius.
    pub radius: f64,
    /// Unscaled velocity per frame.
    pub velocity: Vec2,
    /// Fixed per-blob hue offset, degrees.
    pub hue_offset: f64,
}

impl Blob {
    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        Self {
            position: Point::new(
                rng.random::<f64>() * viewport.width_f64(),
                rng.random::<f64>() * viewport.height_f64(),
            ),
            radius: rng.random::<f64>() * BLOB_RADIUS_SPAN + BLOB_RADIUS_MIN,
            velocity: Vec2::new(
                (rng.random::<f64>() - 0.5) * BLOB_VELOCITY_SPAN,
                (rng.random::<f64>() - 0.5) * BLOB_VELOCITY_SPAN,
            ),
            hue_offset: rng.random::<f64>() * BLOB_HUE_VARIANCE,
        }
    }

    /// Move by `velocity * step`, then reflect any axis that left `[-radius, side + radius]`.
    pub fn advance(&mut self, step: f64, viewport: Viewport) {
        self.position += self.velocity * step;

        let r = self.radius;
        if self.position.x < -r {
            self.velocity.x = self.velocity.x.abs();
        }
        if self.position.x > viewport.width_f64() + r {
            self.velocity.x = -self.velocity.x.abs();
        }
        if self.position.y < -r {
            self.velocity.y = self.velocity.y.abs();
        }
        if self.position.y > viewport.height_f64() + r {
            self.velocity.y = -self.velocity.y.abs();
        }
    }

    /// Hue oscillating around `base` with a per-index phase, in [0, 360).
    pub fn hue(&self, base: f64, time: f64, index: usize) -> f64 {
        let swing = (time * BLOB_HUE_RATE + index as f64).sin() * BLOB_HUE_SWING;
        (base + swing + self.hue_offset).rem_euclid(360.0)
    }
}

/// Horizontally drifting haze band.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FogLayer {
    /// Band centre as a fraction of the viewport height.
    pub vertical_fraction: f64,
    /// Offset advance per frame.
    pub drift_speed: f64,
    /// Relative haze density.
    pub density: f64,
    /// Accumulated horizontal offset.
    pub offset: f64,
}

impl FogLayer {
    /// The three layers created at start.
    pub fn initial_set() -> [FogLayer; 3] {
        [
            FogLayer {
                vertical_fraction: 0.2,
                drift_speed: 0.05,
                density: 0.4,
                offset: 0.0,
            },
            FogLayer {
                vertical_fraction: 0.5,
                drift_speed: 0.03,
                density: 0.3,
                offset: 100.0,
            },
            FogLayer {
                vertical_fraction: 0.8,
                drift_speed: 0.07,
                density: 0.2,
                offset: 200.0,
            },
        ]
    }

    pub(crate) fn drift(&mut self, factor: f64) {
        self.offset += self.drift_speed * factor;
    }
}

/// Expanding, fading ring spawned by a pointer press.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shockwave {
    /// Centre.
    pub position: Point,
    /// Current radius.
    pub radius: f64,
    /// Current alpha.
    pub alpha: f64,
}

impl Shockwave {
    // Absorbs the rounding left after subtracting a decimal decay step repeatedly.
    const ALPHA_EPSILON: f64 = 1e-9;

    /// Fresh ring at `position`: radius 0, alpha 1.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            radius: 0.0,
            alpha: 1.0,
        }
    }

    /// Grow and fade by one frame. Returns `false` once the ring is spent.
    pub fn step(&mut self, growth: f64, decay: f64) -> bool {
        self.radius += growth;
        self.alpha -= decay;
        self.alpha > Self::ALPHA_EPSILON
    }

    pub(crate) fn ring(&self) -> Ring {
        Ring {
            center: self.position,
            radius: self.radius,
            alpha: self.alpha,
        }
    }
}

/// Cursor glow position: displayed position chasing the pointer target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cursor {
    /// Displayed position.
    pub position: Point,
    /// Last pointer position.
    pub target: Point,
}

impl Default for Cursor {
    fn default() -> Self {
        let offscreen = Point::new(-100.0, -100.0);
        Self {
            position: offscreen,
            target: offscreen,
        }
    }
}

impl Cursor {
    /// Exponential approach toward the target.
    pub fn follow(&mut self, t: f64) {
        self.position = Point::new(
            lerp(self.position.x, self.target.x, t),
            lerp(self.position.y, self.target.y, t),
        );
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(1024, 768)
    }

    #[test]
    fn random_blob_respects_generation_ranges() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(9);
        for _ in 0..200 {
            let b = Blob::random(&mut rng, viewport());
            assert!((0.0..1024.0).contains(&b.position.x));
            assert!((0.0..768.0).contains(&b.position.y));
            assert!((200.0..500.0).contains(&b.radius));
            assert!(b.velocity.x.abs() <= 0.25 && b.velocity.y.abs() <= 0.25);
            assert!((0.0..40.0).contains(&b.hue_offset));
        }
    }

    #[test]
    fn blob_reflects_when_leaving_the_soft_region() {
        let mut b = Blob {
            position: Point::new(1024.0 + 299.0, 100.0),
            radius: 300.0,
            velocity: Vec2::new(0.2, -0.1),
            hue_offset: 0.0,
        };
        b.advance(10.0, viewport());
        assert!(b.position.x > 1024.0 + 300.0);
        assert!(b.velocity.x < 0.0);
        assert!(b.velocity.y < 0.0);

        let mut b = Blob {
            position: Point::new(10.0, -299.5),
            radius: 300.0,
            velocity: Vec2::new(0.0, -0.2),
            hue_offset: 0.0,
        };
        b.advance(10.0, viewport());
        assert!(b.velocity.y > 0.0);
    }

    #[test]
    fn blob_inside_keeps_its_velocity() {
        let mut b = Blob {
            position: Point::new(500.0, 400.0),
            radius: 250.0,
            velocity: Vec2::new(-0.2, 0.1),
            hue_offset: 0.0,
        };
        b.advance(0.2, viewport());
        assert_eq!(b.velocity, Vec2::new(-0.2, 0.1));
        assert!((b.position.x - (500.0 - 0.04)).abs() < 1e-12);
    }

    #[test]
    fn hue_wraps_into_degrees() {
        let b = Blob {
            position: Point::ORIGIN,
            radius: 200.0,
            velocity: Vec2::ZERO,
            hue_offset: 0.0,
        };
        let h = b.hue(0.0, 0.0, 4);
        assert!((0.0..360.0).contains(&h));
        assert!(h > 340.0);
    }

    #[test]
    fn shockwave_is_spent_after_fifty_default_steps() {
        let mut w = Shockwave::new(Point::new(100.0, 100.0));
        for i in 1..50 {
            assert!(w.step(5.0, 0.02), "spent early at step {i}");
        }
        assert!(!w.step(5.0, 0.02));
        assert_eq!(w.radius, 250.0);
    }

    #[test]
    fn cursor_approaches_target_exponentially() {
        let mut c = Cursor {
            target: Point::new(100.0, 100.0),
            ..Cursor::default()
        };
        c.follow(0.15);
        assert!((c.position.x - (-100.0 + 200.0 * 0.15)).abs() < 1e-12);
        for _ in 0..200 {
            c.follow(0.15);
        }
        assert!((c.position.x - 100.0).abs() < 1e-6);
    }

    #[test]
    fn fog_layers_drift_by_their_speed() {
        let mut layers = FogLayer::initial_set();
        layers[0].drift(1.0);
        layers[2].drift(0.5);
        assert!((layers[0].offset - 0.05).abs() < 1e-12);
        assert!((layers[2].offset - 200.035).abs() < 1e-12);
    }
}
