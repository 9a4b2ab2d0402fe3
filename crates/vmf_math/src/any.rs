//! [`AnyVector`], a vector whose dimension is decided at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parse::{ParseVectorError, parse_components};
use crate::vector::{Vector, VectorTypeId};
use crate::{Vec2d, Vec3d, Vec4d};

/// One of the fixed-dimension vector types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnyVector {
    Vec2(Vec2d),
    Vec3(Vec3d),
    Vec4(Vec4d),
}

impl AnyVector {
    /// Pick the variant by the number of components.
    ///
    /// Returns `None` for any length other than 2, 3 or 4.
    #[must_use]
    pub fn from_components(components: &[f64]) -> Option<Self> {
        match components.len() {
            2 => Vec2d::from_components(components).map(Self::Vec2),
            3 => Vec3d::from_components(components).map(Self::Vec3),
            4 => Vec4d::from_components(components).map(Self::Vec4),
            _ => None,
        }
    }

    /// Number of components.
    #[must_use]
    pub const fn dim(&self) -> usize {
        match self {
            Self::Vec2(_) => Vec2d::DIM,
            Self::Vec3(_) => Vec3d::DIM,
            Self::Vec4(_) => Vec4d::DIM,
        }
    }

    /// Canonical type name of the held vector, e.g. `"vec3d"`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Vec2(_) => Vec2d::TYPE_NAME,
            Self::Vec3(_) => Vec3d::TYPE_NAME,
            Self::Vec4(_) => Vec4d::TYPE_NAME,
        }
    }

    /// Returns the [`VectorTypeId`] of the held vector.
    #[must_use]
    pub fn vector_type_id(&self) -> VectorTypeId {
        VectorTypeId::from_name(self.type_name())
    }

    /// Components in declaration order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Self::Vec2(v) => v.to_vec(),
            Self::Vec3(v) => v.to_vec(),
            Self::Vec4(v) => v.to_vec(),
        }
    }
}

impl From<Vec2d> for AnyVector {
    fn from(v: Vec2d) -> Self {
        Self::Vec2(v)
    }
}

impl From<Vec3d> for AnyVector {
    fn from(v: Vec3d) -> Self {
        Self::Vec3(v)
    }
}

impl From<Vec4d> for AnyVector {
    fn from(v: Vec4d) -> Self {
        Self::Vec4(v)
    }
}

impl fmt::Display for AnyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vec2(v) => fmt::Display::fmt(v, f),
            Self::Vec3(v) => fmt::Display::fmt(v, f),
            Self::Vec4(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl FromStr for AnyVector {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = parse_components(s)?;
        Self::from_components(&components).ok_or(ParseVectorError::ArityRange {
            min: Vec2d::DIM,
            max: Vec4d::DIM,
            found: components.len(),
        })
    }
}
