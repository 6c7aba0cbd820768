use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;

/// Planar vector in arena units. `y` grows downwards, towards the surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean norm.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned playing field `[0, width] x [0, height]` with a flat surface
/// line at `surface_y`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
    pub surface_y: f64,
}

impl Arena {
    /// # Errors
    ///
    /// Returns [`PhysicsError::DegenerateArena`] when either extent is not a
    /// positive finite number, or when the surface line lies outside
    /// `(0, height]`.
    pub fn new(width: f64, height: f64, surface_y: f64) -> Result<Self, PhysicsError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(width) || !positive(height) {
            return Err(PhysicsError::DegenerateArena { width, height });
        }
        if !surface_y.is_finite() || surface_y <= 0.0 || surface_y > height {
            return Err(PhysicsError::SurfaceOutsideArena { surface_y, height });
        }
        Ok(Self {
            width,
            height,
            surface_y,
        })
    }

    /// Inclusive containment; points on the border are still inside.
    #[must_use]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    #[must_use]
    pub fn touches_surface(&self, p: Vec2) -> bool {
        p.y >= self.surface_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn length_is_euclidean() {
        assert_relative_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
        assert_relative_eq!(Vec2::new(1.0, 1.0).distance(Vec2::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn arena_border_counts_as_inside() {
        let arena = Arena::new(800.0, 600.0, 500.0).unwrap();
        assert!(arena.contains(Vec2::new(0.0, 0.0)));
        assert!(arena.contains(Vec2::new(800.0, 600.0)));
        assert!(!arena.contains(Vec2::new(-0.001, 10.0)));
        assert!(!arena.contains(Vec2::new(10.0, 600.001)));
    }

    #[test]
    fn zero_size_arena_is_rejected() {
        assert!(matches!(
            Arena::new(0.0, 600.0, 500.0),
            Err(PhysicsError::DegenerateArena { .. })
        ));
        assert!(matches!(
            Arena::new(800.0, f64::NAN, 500.0),
            Err(PhysicsError::DegenerateArena { .. })
        ));
        assert!(matches!(
            Arena::new(800.0, 600.0, 700.0),
            Err(PhysicsError::SurfaceOutsideArena { .. })
        ));
    }
}
