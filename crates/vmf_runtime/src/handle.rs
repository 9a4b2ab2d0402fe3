//! Handles through which collaborators use an initialised framework.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;
use vmf_codec::VectorRecord;
use vmf_math::{AnyVector, Vector};

use crate::error::FrameworkError;
use crate::framework::Session;

/// A cheap, cloneable view of a [`Framework`](crate::Framework).
///
/// Every facility checks that the owning framework is still initialised and
/// fails with [`FrameworkError::NotInitialized`] otherwise. Handles are
/// `Send + Sync` and may be used from any thread.
#[derive(Debug, Clone)]
pub struct FrameworkHandle {
    session: Arc<Session>,
}

impl FrameworkHandle {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Returns `true` while the owning framework has not terminated.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.open.load(Ordering::Acquire)
    }

    /// # Errors
    ///
    /// Returns [`FrameworkError::NotInitialized`] after termination.
    pub fn ensure_open(&self) -> Result<(), FrameworkError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(FrameworkError::NotInitialized)
        }
    }

    /// Returns the session id of the owning framework.
    ///
    /// # Errors
    ///
    /// Returns [`FrameworkError::NotInitialized`] after termination.
    pub fn session_id(&self) -> Result<Uuid, FrameworkError> {
        self.ensure_open()?;
        Ok(self.session.id)
    }

    /// Compare two vectors with the framework's configured tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`FrameworkError::NotInitialized`] after termination.
    pub fn approx_eq<V: Vector>(&self, a: &V, b: &V) -> Result<bool, FrameworkError> {
        self.ensure_open()?;
        Ok(a.abs_diff_eq(b, self.session.config.epsilon))
    }

    /// Encode a vector as a MessagePack component array.
    ///
    /// # Errors
    ///
    /// Returns [`FrameworkError::NotInitialized`] after termination, or a
    /// codec error.
    pub fn encode<V: Vector + Serialize>(&self, value: &V) -> Result<Vec<u8>, FrameworkError> {
        self.ensure_open()?;
        let bytes = vmf_codec::encode(value)?;
        debug!(
            session_id = %self.session.id,
            type_name = V::TYPE_NAME,
            len = bytes.len(),
            "encoded vector"
        );
        Ok(bytes)
    }

    /// Decode a vector from a MessagePack component array.
    ///
    /// # Errors
    ///
    /// Returns [`FrameworkError::NotInitialized`] after termination, or a
    /// codec error.
    pub fn decode<V>(&self, bytes: &[u8]) -> Result<V, FrameworkError>
    where
        V: Vector + DeserializeOwned,
    {
        self.ensure_open()?;
        Ok(vmf_codec::decode(bytes)?)
    }

    /// Encode a vector as a tagged [`VectorRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`FrameworkError::NotInitialized`] after termination, or a
    /// codec error.
    pub fn encode_record(&self, value: &AnyVector) -> Result<Vec<u8>, FrameworkError> {
        self.ensure_open()?;
        Ok(vmf_codec::encode(&VectorRecord::from_any(value))?)
    }

    /// Decode a tagged [`VectorRecord`] into a vector of any dimension.
    ///
    /// # Errors
    ///
    /// Returns [`FrameworkError::NotInitialized`] after termination, or a
    /// codec error.
    pub fn decode_record(&self, bytes: &[u8]) -> Result<AnyVector, FrameworkError> {
        self.ensure_open()?;
        let record: VectorRecord = vmf_codec::decode(bytes)?;
        Ok(record.into_any()?)
    }
}

#[cfg(test)]
mod tests {
    use vmf_math::{Vec2d, Vec3d};

    use super::*;
    use crate::{Framework, FrameworkConfig};

    #[test]
    fn test_handle_encode_decode() {
        let framework = Framework::initialize(FrameworkConfig::default()).unwrap();
        let handle = framework.handle();
        let v = Vec3d::new(1.0, 2.0, 3.0);
        let bytes = handle.encode(&v).unwrap();
        assert_eq!(handle.decode::<Vec3d>(&bytes).unwrap(), v);
        framework.terminate();
    }

    #[test]
    fn test_handle_fails_after_terminate() {
        let framework = Framework::initialize(FrameworkConfig::default()).unwrap();
        let handle = framework.handle();
        framework.terminate();
        assert!(matches!(
            handle.encode(&Vec2d::ZERO),
            Err(FrameworkError::NotInitialized)
        ));
        assert!(matches!(
            handle.session_id(),
            Err(FrameworkError::NotInitialized)
        ));
    }

    #[test]
    fn test_approx_eq_uses_configured_epsilon() {
        let framework =
            Framework::initialize(FrameworkConfig::new("loose").with_epsilon(0.1)).unwrap();
        let handle = framework.handle();
        let a = Vec2d::new(1.0, 2.0);
        let b = Vec2d::new(1.05, 1.95);
        assert!(handle.approx_eq(&a, &b).unwrap());
        assert!(!a.approx_eq(&b));
    }

    #[test]
    fn test_record_roundtrip() {
        let framework = Framework::initialize(FrameworkConfig::default()).unwrap();
        let handle = framework.handle();
        let v = AnyVector::Vec2(Vec2d::new(-1.0, 0.5));
        let bytes = handle.encode_record(&v).unwrap();
        assert_eq!(handle.decode_record(&bytes).unwrap(), v);
    }

    #[test]
    fn test_handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FrameworkHandle>();
    }
}
