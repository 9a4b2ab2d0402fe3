//! Framework lifecycle errors.

use vmf_codec::CodecError;

/// Errors surfaced by the framework lifecycle and its facilities.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The framework could not be initialised.
    #[error("framework initialisation failed: {0}")]
    Init(String),

    /// A facility was used after the owning framework terminated.
    #[error("framework is not initialised")]
    NotInitialized,

    /// Encoding or decoding through the framework failed.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
