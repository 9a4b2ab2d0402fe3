//! The framework lifecycle.
//!
//! A [`Framework`] is opened with [`Framework::initialize`] and closed with
//! [`Framework::terminate`], or by dropping it. There is no process-wide
//! state: every initialised framework is independent and owns its own
//! session.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};
use uuid::Uuid;

use crate::config::FrameworkConfig;
use crate::error::FrameworkError;
use crate::handle::FrameworkHandle;

/// State shared between a [`Framework`] and its handles.
#[derive(Debug)]
pub(crate) struct Session {
    pub(crate) id: Uuid,
    pub(crate) config: FrameworkConfig,
    pub(crate) open: AtomicBool,
}

/// An initialised framework.
///
/// Facilities are reached through [`FrameworkHandle`]s obtained from
/// [`Framework::handle`]. Once the framework terminates every handle reports
/// [`FrameworkError::NotInitialized`].
#[derive(Debug)]
pub struct Framework {
    session: Arc<Session>,
}

impl Framework {
    /// Initialise a framework.
    ///
    /// # Errors
    ///
    /// Returns [`FrameworkError::Init`] if the config is invalid.
    pub fn initialize(config: FrameworkConfig) -> Result<Self, FrameworkError> {
        config.validate()?;
        let session = Session {
            id: Uuid::new_v4(),
            config,
            open: AtomicBool::new(true),
        };
        info!(
            framework = session.config.name,
            session_id = %session.id,
            epsilon = session.config.epsilon,
            "framework initialised"
        );
        Ok(Self {
            session: Arc::new(session),
        })
    }

    /// Run `f` with a freshly initialised framework and terminate it
    /// afterwards, whether `f` succeeds, fails or panics.
    ///
    /// # Errors
    ///
    /// Returns the initialisation error converted into `E`, or whatever `f`
    /// returns.
    pub fn scoped<T, E, F>(config: FrameworkConfig, f: F) -> Result<T, E>
    where
        F: FnOnce(&Framework) -> Result<T, E>,
        E: From<FrameworkError>,
    {
        let framework = Self::initialize(config)?;
        let result = f(&framework);
        framework.terminate();
        result
    }

    /// Returns a handle to this framework's facilities.
    #[must_use]
    pub fn handle(&self) -> FrameworkHandle {
        FrameworkHandle::new(Arc::clone(&self.session))
    }

    /// Returns the unique session id of this framework.
    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.session.id
    }

    /// Returns the configuration this framework was initialised with.
    #[must_use]
    pub fn config(&self) -> &FrameworkConfig {
        &self.session.config
    }

    /// Terminate the framework. Handles still held by collaborators stop
    /// working immediately.
    pub fn terminate(mut self) {
        self.release(true);
    }

    fn release(&mut self, explicit: bool) {
        if !self.session.open.swap(false, Ordering::AcqRel) {
            return;
        }
        let handles = Arc::strong_count(&self.session) - 1;
        if explicit {
            info!(
                framework = self.session.config.name,
                session_id = %self.session.id,
                handles,
                "framework terminated"
            );
        } else {
            warn!(
                framework = self.session.config.name,
                session_id = %self.session.id,
                handles,
                "framework dropped without terminate"
            );
        }
    }
}

impl Drop for Framework {
    fn drop(&mut self) {
        self.release(false);
    }
}
