//! Configuration types for Excepto try/catch/finally cycles.
//!
//! Provides per-cycle settings for trace capture, panic reporting, and the
//! policies applied to unmatched exceptions and duplicate default handlers.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::intercept::InterceptSettings;
use serde::{Deserialize, Serialize};

/// What happens to an exception that no handler matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnmatchedPolicy {
    /// Drop it silently once the finalizer has run.
    #[default]
    Discard,
    /// Re-raise it to the enclosing interceptor once the finalizer has run.
    Propagate,
}

/// How a chain with more than one default handler is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DefaultHandlerPolicy {
    /// Accept the chain; only the first-registered default can run.
    #[default]
    FirstWins,
    /// Refuse to run the chain.
    Reject,
}

/// Settings for one try/catch/finally cycle.
///
/// # Examples
/// ```rust
/// use exc_core::config::{HarnessConfig, UnmatchedPolicy};
///
/// // Re-raise anything no handler claims
/// let strict = HarnessConfig::new().with_unmatched(UnmatchedPolicy::Propagate);
/// assert!(strict.is_strict());
///
/// // Quiet, trace-free cycles for hot paths
/// let prod = HarnessConfig::for_production();
/// assert!(!prod.capture_trace);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Capture a diagnostic trace for intercepted faults.
    ///
    /// Default: `true`
    pub capture_trace: bool,

    /// Suppress the default panic report for intercepted faults.
    ///
    /// Default: `true`
    pub quiet_panics: bool,

    /// Policy for exceptions no handler matched.
    ///
    /// Default: `UnmatchedPolicy::Discard`
    pub unmatched: UnmatchedPolicy,

    /// Policy for chains with several default handlers.
    ///
    /// Default: `DefaultHandlerPolicy::FirstWins`
    pub default_handlers: DefaultHandlerPolicy,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            capture_trace: true,
            quiet_panics: true,
            unmatched: UnmatchedPolicy::Discard,
            default_handlers: DefaultHandlerPolicy::FirstWins,
        }
    }
}

impl HarnessConfig {
    /// Create a configuration with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for development: traces on and panic reports left visible.
    #[must_use]
    pub fn for_development() -> Self {
        Self::default().with_capture_trace(true).with_quiet_panics(false)
    }

    /// Configuration for production: no trace capture, quiet panics.
    #[must_use]
    pub fn for_production() -> Self {
        Self::default().with_capture_trace(false).with_quiet_panics(true)
    }

    /// Set trace capture.
    #[must_use]
    pub fn with_capture_trace(mut self, enabled: bool) -> Self {
        self.capture_trace = enabled;
        self
    }

    /// Set panic report suppression.
    #[must_use]
    pub fn with_quiet_panics(mut self, quiet: bool) -> Self {
        self.quiet_panics = quiet;
        self
    }

    /// Set the unmatched-exception policy.
    #[must_use]
    pub fn with_unmatched(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched = policy;
        self
    }

    /// Set the duplicate-default policy.
    #[must_use]
    pub fn with_default_handlers(mut self, policy: DefaultHandlerPolicy) -> Self {
        self.default_handlers = policy;
        self
    }

    /// Whether unmatched exceptions are re-raised.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.unmatched == UnmatchedPolicy::Propagate
    }

    /// Interception settings derived from this configuration.
    #[must_use]
    pub fn intercept_settings(&self) -> InterceptSettings {
        InterceptSettings { capture_trace: self.capture_trace, quiet: self.quiet_panics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::new();
        assert!(config.capture_trace);
        assert!(config.quiet_panics);
        assert_eq!(config.unmatched, UnmatchedPolicy::Discard);
        assert_eq!(config.default_handlers, DefaultHandlerPolicy::FirstWins);
        assert!(!config.is_strict());
    }

    #[test]
    fn test_presets() {
        let dev = HarnessConfig::for_development();
        assert!(dev.capture_trace);
        assert!(!dev.quiet_panics);

        let prod = HarnessConfig::for_production();
        assert!(!prod.capture_trace);
        assert!(prod.quiet_panics);
    }

    #[test]
    fn test_builder() {
        let config = HarnessConfig::new()
            .with_unmatched(UnmatchedPolicy::Propagate)
            .with_default_handlers(DefaultHandlerPolicy::Reject)
            .with_capture_trace(false);
        assert!(config.is_strict());
        assert_eq!(config.default_handlers, DefaultHandlerPolicy::Reject);
        assert_eq!(
            config.intercept_settings(),
            InterceptSettings { capture_trace: false, quiet: true }
        );
    }
}
