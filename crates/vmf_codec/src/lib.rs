//! # vmf_codec
//!
//! Serialisation for the vmf vector types.
//!
//! - [`codec`]: MessagePack and JSON encode/decode helpers.
//! - [`record`]: [`VectorRecord`], a vector tagged with its type id.
//! - [`error`]: codec error types.

pub mod codec;
pub mod error;
pub mod record;

pub use codec::{decode, decode_any, decode_json, encode, encode_json};
pub use error::CodecError;
pub use record::VectorRecord;
