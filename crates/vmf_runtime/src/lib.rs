//! # vmf_runtime
//!
//! Lifecycle of the video metadata framework.
//!
//! Instead of a pair of global `initialize()` / `terminate()` functions, the
//! framework is an owned value:
//!
//! 1. [`Framework::initialize`] validates a [`FrameworkConfig`] and opens a
//!    session.
//! 2. Collaborators receive [`FrameworkHandle`]s and use its facilities.
//! 3. [`Framework::terminate`] (or dropping the framework) closes the session;
//!    any handle used afterwards fails with
//!    [`FrameworkError::NotInitialized`].
//!
//! The vector types in `vmf_math` do not depend on this crate and can be
//! used at any time.
//!
//! ## Usage
//!
//! ```rust
//! use vmf_math::Vec3d;
//! use vmf_runtime::{Framework, FrameworkConfig, FrameworkError};
//!
//! let decoded = Framework::scoped(FrameworkConfig::default(), |framework| {
//!     let handle = framework.handle();
//!     let bytes = handle.encode(&Vec3d::new(1.0, 2.0, 3.0))?;
//!     handle.decode::<Vec3d>(&bytes)
//! })?;
//! assert_eq!(decoded.z(), 3.0);
//! # Ok::<(), FrameworkError>(())
//! ```

pub mod config;
pub mod error;
pub mod framework;
pub mod handle;

pub use config::FrameworkConfig;
pub use error::FrameworkError;
pub use framework::Framework;
pub use handle::FrameworkHandle;
