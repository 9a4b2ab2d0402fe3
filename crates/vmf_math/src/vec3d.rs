//! Three-component vector.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::parse::{ParseVectorError, parse_components};
use crate::vector::Vector;

/// A three-component `f64` vector `(x, y, z)`.
///
/// Serialised as the component array `[x, y, z]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vec3d {
    x: f64,
    y: f64,
    z: f64,
}

impl Vec3d {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from its components. Values are stored unchanged,
    /// including NaN and infinities.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a vector from single precision components, widened exactly.
    #[must_use]
    pub fn from_f32(x: f32, y: f32, z: f32) -> Self {
        Self::new(f64::from(x), f64::from(y), f64::from(z))
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

    /// Components as an array in declaration order.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Vector for Vec3d {
    const DIM: usize = 3;
    const TYPE_NAME: &'static str = "vec3d";
    const ZERO: Self = Vec3d::ZERO;

    fn to_vec(&self) -> Vec<f64> {
        self.to_array().to_vec()
    }

    fn from_components(components: &[f64]) -> Option<Self> {
        match *components {
            [x, y, z] => Some(Self::new(x, y, z)),
            _ => None,
        }
    }
}

impl From<[f64; 3]> for Vec3d {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f32; 3]> for Vec3d {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::from_f32(x, y, z)
    }
}

impl From<Vec3d> for [f64; 3] {
    fn from(v: Vec3d) -> Self {
        v.to_array()
    }
}

impl From<DVec3> for Vec3d {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3d> for DVec3 {
    fn from(v: Vec3d) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Vec3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

impl FromStr for Vec3d {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = parse_components(s)?;
        Self::from_components(&components).ok_or(ParseVectorError::Arity {
            expected: Self::DIM,
            found: components.len(),
        })
    }
}
