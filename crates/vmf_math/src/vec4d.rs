//! Four-component vector.

use std::fmt;
use std::str::FromStr;

use glam::DVec4;
use serde::{Deserialize, Serialize};

use crate::parse::{ParseVectorError, parse_components};
use crate::vector::Vector;

/// A four-component `f64` vector `(x, y, z, w)`.
///
/// Serialised as the component array `[x, y, z, w]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Vec4d {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

impl Vec4d {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a vector from its components. Values are stored unchanged,
    /// including NaN and infinities.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Create a vector from single precision components, widened exactly.
    #[must_use]
    pub fn from_f32(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::new(f64::from(x), f64::from(y), f64::from(z), f64::from(w))
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

    /// Returns the z component.
    #[must_use]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns the w component.
    #[must_use]
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// Components as an array in declaration order.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl Vector for Vec4d {
    const DIM: usize = 4;
    const TYPE_NAME: &'static str = "vec4d";
    const ZERO: Self = Vec4d::ZERO;

    fn to_vec(&self) -> Vec<f64> {
        self.to_array().to_vec()
    }

    fn from_components(components: &[f64]) -> Option<Self> {
        match *components {
            [x, y, z, w] => Some(Self::new(x, y, z, w)),
            _ => None,
        }
    }
}

impl From<[f64; 4]> for Vec4d {
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<[f32; 4]> for Vec4d {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::from_f32(x, y, z, w)
    }
}

impl From<Vec4d> for [f64; 4] {
    fn from(v: Vec4d) -> Self {
        v.to_array()
    }
}

impl From<DVec4> for Vec4d {
    fn from(v: DVec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vec4d> for DVec4 {
    fn from(v: Vec4d) -> Self {
        DVec4::new(v.x, v.y, v.z, v.w)
    }
}

impl fmt::Display for Vec4d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.z, self.w)
    }
}

impl FromStr for Vec4d {
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
        let v = Vec4d::new(1.0, 2.0, 3.0, 4.0);
        assert!((v.x() - 1.0).abs() < 1e-5);
        assert!((v.y() - 2.0).abs() < 1e-5);
        assert!((v.z() - 3.0).abs() < 1e-5);
        assert!((v.w() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_default_is_zero() {
        let v = Vec4d::default();
        assert_eq!(v.x(), 0.0);
        assert_eq!(v.y(), 0.0);
        assert_eq!(v.z(), 0.0);
        assert_eq!(v.w(), 0.0);
    }

    #[test]
    fn test_from_f32_array() {
        let v = Vec4d::from([1.0_f32, 2.0, 3.0, 4.0]);
        assert_eq!(v, Vec4d::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_values_are_send_and_sync() {
        let v = Vec4d::new(1.0, 2.0, 3.0, 4.0);
        let handle = std::thread::spawn(move || v.w());
        assert_eq!(handle.join().unwrap(), 4.0);
    }

    #[test]
    fn test_display() {
        let v = Vec4d::new(1.0, 2.0, 3.0, f64::INFINITY);
        assert_eq!(v.to_string(), "1 2 3 inf");
        let parsed: Vec4d = v.to_string().parse().unwrap();
        assert_eq!(parsed, v);
    }

    #[test]
    fn test_serialization_rejects_wrong_dimension() {
        let bytes = rmp_serde::to_vec(&[1.0_f64, 2.0, 3.0]).unwrap();
        let result: Result<Vec4d, _> = rmp_serde::from_slice(&bytes);
        assert!(result.is_err());
    }
}
