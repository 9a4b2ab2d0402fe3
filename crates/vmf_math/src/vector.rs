//! The [`Vector`] trait shared by [`Vec2d`](crate::Vec2d),
//! [`Vec3d`](crate::Vec3d) and [`Vec4d`](crate::Vec4d).
//!
//! ## Type identity
//!
//! [`VectorTypeId`] is derived from the vector type's **string name**
//! (`"vec2d"`, `"vec3d"`, `"vec4d"`) using the FNV-1a 64-bit hash. The value
//! is deterministic and language-neutral, so tagged records written by one
//! implementation can be read by any other.

use serde::{Deserialize, Serialize};

/// Absolute per-component tolerance used by [`Vector::approx_eq`].
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// A unique identifier for a vector type, derived from its name with
/// FNV-1a 64-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VectorTypeId(pub u64);

impl VectorTypeId {
    /// FNV-1a 64-bit offset basis.
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

    /// FNV-1a 64-bit prime.
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    /// Compute the identifier for a type name.
    ///
    /// ```text
    /// hash = 0xcbf29ce484222325
    /// for each byte in name.as_bytes():
    ///     hash = hash XOR byte
    ///     hash = hash * 0x00000100000001b3
    /// ```
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = Self::FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(Self::FNV_PRIME);
            i += 1;
        }
        Self(hash)
    }

    /// The identifier for a Rust vector type `V`.
    #[must_use]
    pub const fn of<V: Vector>() -> Self {
        Self::from_name(V::TYPE_NAME)
    }
}

/// The contract every fixed-dimension vector satisfies.
///
/// Implementors are plain `Copy` values: construction stores the given
/// components bit for bit and accessors hand them back unchanged.
pub trait Vector: Copy + Send + Sync + 'static {
    /// Number of components.
    const DIM: usize;

    /// Canonical lower-case type name, e.g. `"vec3d"`.
    const TYPE_NAME: &'static str;

    /// The all-zero vector.
    const ZERO: Self;

    /// Components in declaration order (x, y, z, w).
    fn to_vec(&self) -> Vec<f64>;

    /// Build a vector from components in declaration order.
    ///
    /// Returns `None` when `components.len() != Self::DIM`.
    fn from_components(components: &[f64]) -> Option<Self>;

    /// Returns the [`VectorTypeId`] of this vector type.
    fn vector_type_id() -> VectorTypeId {
        VectorTypeId::from_name(Self::TYPE_NAME)
    }

    /// Component-wise comparison within an absolute tolerance.
    ///
    /// Identical components always match, so equal infinities compare equal
    /// and NaN matches NaN.
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.to_vec()
            .iter()
            .zip(other.to_vec())
            .all(|(&a, b)| a == b || (a.is_nan() && b.is_nan()) || (a - b).abs() <= epsilon)
    }

    /// [`Vector::abs_diff_eq`] with [`DEFAULT_EPSILON`].
    fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, DEFAULT_EPSILON)
    }

    /// Returns `true` if every component is finite.
    fn is_finite(&self) -> bool {
        self.to_vec().iter().all(|c| c.is_finite())
    }
}
