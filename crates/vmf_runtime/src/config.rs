//! Framework configuration.

use vmf_math::DEFAULT_EPSILON;

use crate::error::FrameworkError;

/// Default framework name.
pub const DEFAULT_NAME: &str = "vmf";

/// The environment variable used to override the framework name.
pub const NAME_ENV: &str = "VMF_NAME";

/// The environment variable used to override the comparison tolerance.
pub const EPSILON_ENV: &str = "VMF_EPSILON";

/// Configuration for a [`Framework`](crate::Framework).
#[derive(Debug, Clone, PartialEq)]
pub struct FrameworkConfig {
    /// Human-readable name used in log output.
    pub name: String,
    /// Absolute per-component tolerance for
    /// [`FrameworkHandle::approx_eq`](crate::FrameworkHandle::approx_eq).
    pub epsilon: f64,
}

impl FrameworkConfig {
    /// Create a config with the given name and the default tolerance.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Override the comparison tolerance.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Build a config from `VMF_NAME` and `VMF_EPSILON`, falling back to
    /// [`DEFAULT_NAME`] and [`DEFAULT_EPSILON`].
    ///
    /// # Errors
    ///
    /// Returns [`FrameworkError::Init`] if `VMF_EPSILON` is set but is not a
    /// number.
    pub fn from_env() -> Result<Self, FrameworkError> {
        let name = std::env::var(NAME_ENV).unwrap_or_else(|_| DEFAULT_NAME.to_string());
        let mut config = Self::new(name);
        if let Ok(raw) = std::env::var(EPSILON_ENV) {
            config.epsilon = raw.trim().parse().map_err(|_| {
                FrameworkError::Init(format!("{EPSILON_ENV}={raw:?} is not a number"))
            })?;
        }
        Ok(config)
    }

    /// Check the config before a framework is opened with it.
    ///
    /// # Errors
    ///
    /// Returns [`FrameworkError::Init`] for an empty name or a tolerance that
    /// is negative or not finite.
    pub fn validate(&self) -> Result<(), FrameworkError> {
        if self.name.trim().is_empty() {
            return Err(FrameworkError::Init("framework name is empty".to_string()));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(FrameworkError::Init(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FrameworkConfig::default();
        assert_eq!(config.name, "vmf");
        assert_eq!(config.epsilon, 1e-5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_epsilon() {
        let config = FrameworkConfig::new("test").with_epsilon(0.5);
        assert_eq!(config.epsilon, 0.5);
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let config = FrameworkConfig::new("  ");
        assert!(matches!(config.validate(), Err(FrameworkError::Init(_))));
    }

    #[test]
    fn test_validate_rejects_bad_epsilon() {
        for epsilon in [-1.0, f64::NAN, f64::INFINITY] {
            let config = FrameworkConfig::new("test").with_epsilon(epsilon);
            assert!(config.validate().is_err());
        }
    }
}
