//! Two-component vector.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::parse::{ParseVectorError, parse_components};
use crate::vector::Vector;

/// A two-component `f64` vector `(x, y)`.
///
/// Serialised as the component array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Vec2d {
    x: f64,
    y: f64,
}

impl Vec2d {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a vector from its components. Values are stored unchanged,
    /// including NaN and infinities.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a vector from single precision components, widened exactly.
    #[must_use]
    pub fn from_f32(x: f32, y: f32) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }

    /// Returns the x component.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y component.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Components as an array in declaration order.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Vector for Vec2d {
    const DIM: usize = 2;
    const TYPE_NAME: &'static str = "vec2d";
    const ZERO: Self = Vec2d::ZERO;

    fn to_vec(&self) -> Vec<f64> {
        self.to_array().to_vec()
    }

    fn from_components(components: &[f64]) -> Option<Self> {
        match *components {
            [x, y] => Some(Self::new(x, y)),
            _ => None,
        }
    }
}

impl From<[f64; 2]> for Vec2d {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for Vec2d {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::from_f32(x, y)
    }
}

impl From<Vec2d> for [f64; 2] {
    fn from(v: Vec2d) -> Self {
        v.to_array()
    }
}

impl From<DVec2> for Vec2d {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2d> for DVec2 {
    fn from(v: Vec2d) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl fmt::Display for Vec2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl FromStr for Vec2d {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = parse_components(s)?;
        Self::from_components(&components).ok_or(ParseVectorError::Arity {
            expected: Self::DIM,
            found: components.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_exposes_components() {
        let v = Vec2d::new(1.0, 2.0);
        assert!((v.x() - 1.0).abs() < 1e-5);
        assert!((v.y() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_default_is_zero() {
        let v = Vec2d::default();
        assert_eq!(v.x(), 0.0);
        assert_eq!(v.y(), 0.0);
        assert_eq!(v, Vec2d::ZERO);
    }

    #[test]
    fn test_non_finite_stored_unchanged() {
        let v = Vec2d::new(f64::NAN, f64::NEG_INFINITY);
        assert!(v.x().is_nan());
        assert_eq!(v.y(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_from_f32_widens_exactly() {
        let v = Vec2d::from_f32(0.1, -2.5);
        assert_eq!(v.x(), f64::from(0.1_f32));
        assert_eq!(v.y(), -2.5);
    }

    #[test]
    fn test_glam_conversion() {
        let v = Vec2d::new(3.0, -4.0);
        let g: DVec2 = v.into();
        assert_eq!(g.length(), 5.0);
        assert_eq!(Vec2d::from(g), v);
    }

    #[test]
    fn test_from_components_wrong_arity() {
        assert!(Vec2d::from_components(&[1.0]).is_none());
        assert!(Vec2d::from_components(&[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn test_display_and_parse() {
        let v = Vec2d::new(1.5, -2.0);
        assert_eq!(v.to_string(), "1.5 -2");
        assert_eq!("1.5 -2".parse::<Vec2d>().unwrap(), v);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let v = Vec2d::new(1.0, 2.0);
        let bytes = rmp_serde::to_vec(&v).unwrap();
        let restored: Vec2d = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(v, restored);
    }
}
