//! World-space 2D vector.

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A 2D floating-point vector in world units. +Y points down the screen.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    /// Heading angle in radians with +Y up, so that `(1, 0)` is 0 and
    /// `(0, -1)` (up the screen) is π/2.
    #[inline]
    pub fn heading(self) -> f32 {
        (-self.y).atan2(self.x)
    }

    /// Unit vector for a heading produced by [`heading`](Self::heading).
    #[inline]
    pub fn from_heading(angle: f32) -> Self {
        Self::new(angle.cos(), -angle.sin())
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn heading_round_trip() {
        let up = Vec2::new(0.0, -2.0);
        let h = up.heading();
        assert!((h - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        let dir = Vec2::from_heading(h);
        assert!((dir.x - 0.0).abs() < 1e-6);
        assert!((dir.y + 1.0).abs() < 1e-6);
    }
}
