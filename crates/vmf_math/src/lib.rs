//! # vmf_math
//!
//! Fixed-dimension vector value types for the video metadata framework.
//!
//! The family is deliberately small: [`Vec2d`], [`Vec3d`] and [`Vec4d`] hold
//! two, three or four `f64` components, are constructed either from explicit
//! components or as the zero vector, and expose read-only accessors. There is
//! no arithmetic; callers that need linear algebra convert into [`glam`]'s
//! `DVec*` types.
//!
//! - [`Vector`]: the contract shared by the family (dimension, type name,
//!   component slices, tolerance comparison).
//! - [`VectorTypeId`]: deterministic FNV-1a identifier of a vector type.
//! - [`AnyVector`]: a vector whose dimension is only known at runtime.

pub mod any;
pub mod parse;
pub mod vec2d;
pub mod vec3d;
pub mod vec4d;
pub mod vector;

// Re-export glam's double precision types for convenience.
pub use glam::{DVec2, DVec3, DVec4};

pub use any::AnyVector;
pub use parse::ParseVectorError;
pub use vec2d::Vec2d;
pub use vec3d::Vec3d;
pub use vec4d::Vec4d;
pub use vector::{DEFAULT_EPSILON, Vector, VectorTypeId};
