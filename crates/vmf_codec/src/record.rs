//! Tagged vector records.
//!
//! A bare component array does not say which vector type it came from. A
//! [`VectorRecord`] pairs the components with the [`VectorTypeId`] so the
//! reader can check or recover the dimension.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vmf_math::{AnyVector, Vec2d, Vec3d, Vec4d, Vector, VectorTypeId};

use crate::error::CodecError;

/// A vector tagged with its type id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorRecord {
    /// FNV-1a id of the vector type name.
    pub type_id: VectorTypeId,
    /// Components in declaration order.
    pub components: Vec<f64>,
}

impl VectorRecord {
    /// Tag a concrete vector.
    #[must_use]
    pub fn from_vector<V: Vector>(value: &V) -> Self {
        Self {
            type_id: V::vector_type_id(),
            components: value.to_vec(),
        }
    }

    /// Tag a vector of runtime dimension.
    #[must_use]
    pub fn from_any(value: &AnyVector) -> Self {
        Self {
            type_id: value.vector_type_id(),
            components: value.to_vec(),
        }
    }

    /// Recover a concrete vector type.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::TypeMismatch`] if the record holds another type
    /// and [`CodecError::Arity`] if the component count is inconsistent.
    pub fn into_vector<V: Vector>(self) -> Result<V, CodecError> {
        if self.type_id != V::vector_type_id() {
            return Err(CodecError::TypeMismatch {
                expected: V::TYPE_NAME,
                found: self.type_id.0,
            });
        }
        V::from_components(&self.components).ok_or(CodecError::Arity(self.components.len()))
    }

    /// Recover the vector by looking up the type id.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownType`] for an id that names no vector
    /// type and [`CodecError::Arity`] if the component count is inconsistent.
    pub fn into_any(self) -> Result<AnyVector, CodecError> {
        let id = self.type_id;
        debug!(type_id = id.0, len = self.components.len(), "resolving vector record");
        if id == Vec2d::vector_type_id() {
            self.into_vector::<Vec2d>().map(AnyVector::Vec2)
        } else if id == Vec3d::vector_type_id() {
            self.into_vector::<Vec3d>().map(AnyVector::Vec3)
        } else if id == Vec4d::vector_type_id() {
            self.into_vector::<Vec4d>().map(AnyVector::Vec4)
        } else {
            Err(CodecError::UnknownType(id.0))
        }
    }
}
