//! Radial (two-circle) gradient projection.
//!
//! Precomputed constants captured at construction let per-pixel evaluation
//! stay a handful of dot products and at most one square root.

use raster_math::Vec2;

/// Derived constants for a two-circle radial gradient, computed once when
/// the gradient is built or re-centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialParams {
    c1: Vec2,
    r1: f32,
    cd: Vec2,
    dr: f32,
    min_dr: f32,
    a: f32,
    inv_a: Option<f32>,
}

impl RadialParams {
    /// Derives the projection constants from raw inner/outer circles.
    /// Negative radii are clamped to `0`.
    pub fn new(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> Self {
        let r1 = r1.max(0.0);
        let r2 = r2.max(0.0);
        let cd = c2 - c1;
        let dr = r2 - r1;
        let min_dr = -r1;
        let a = cd.dot(cd) - dr * dr;
        let inv_a = if a != 0.0 { Some(1.0 / a) } else { None };
        Self { c1, r1, cd, dr, min_dr, a, inv_a }
    }

    /// Inner radius (post-clamp).
    pub fn r1(&self) -> f32 {
        self.r1
    }

    /// Outer radius (post-clamp): `r1 + dr`.
    pub fn r2(&self) -> f32 {
        self.r1 + self.dr
    }

    /// Computes the offset of point `p`, or `-1.0` if `p` falls outside
    /// both circles' swept cone.
    pub fn offset(&self, p: Vec2) -> f32 {
        if self.r1 == 0.0 && self.r2() == 0.0 {
            return -1.0;
        }
        let pd = p - self.c1;
        let b = pd.dot(self.cd) + self.r1 * self.dr;
        let c = pd.dot(pd) - self.r1 * self.r1;

        let Some(inv_a) = self.inv_a else {
            // A == 0: linear (degenerate quadratic) case.
            if b == 0.0 {
                return -1.0;
            }
            let t = 0.5 * c / b;
            return if t * self.dr >= self.min_dr { t.clamp(0.0, 1.0) } else { -1.0 };
        };

        let discriminant = b * b - self.a * c;
        if discriminant < 0.0 {
            return -1.0;
        }
        let sqrt_d = discriminant.sqrt();
        let t0 = (b + sqrt_d) * inv_a;
        let t1 = (b - sqrt_d) * inv_a;
        for t in [t0, t1] {
            if t * self.dr >= self.min_dr {
                return t.clamp(0.0, 1.0);
            }
        }
        -1.0
    }
}
