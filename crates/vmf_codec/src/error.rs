//! Codec error types.

/// Errors that can occur while encoding or decoding vectors.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Failed to encode to MessagePack.
    #[error("failed to encode vector: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// Failed to decode from MessagePack.
    #[error("failed to decode vector: {0}")]
    Decode(#[from] rmp_serde::decode::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON has no representation for NaN or infinities.
    #[error("cannot write non-finite {0} as JSON")]
    NonFinite(&'static str),

    /// A tagged record carried a different vector type than requested.
    #[error("type mismatch: expected {expected}, found {found:#018x}")]
    TypeMismatch { expected: &'static str, found: u64 },

    /// A tagged record carried an unknown type id.
    #[error("unknown vector type id {0:#018x}")]
    UnknownType(u64),

    /// The number of components does not match any vector dimension.
    #[error("unsupported component count {0}")]
    Arity(usize),
}
