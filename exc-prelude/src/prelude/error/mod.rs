//! Error Handling Module
//!
//! Errors reported by the harness itself, as opposed to the [`Exception`]
//! values it transports.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::prelude::Exception;
use thiserror::Error;

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Errors raised by the exception harness.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// A payload did not match the `Message::…||Exception::…` form.
    #[error("Malformed exception payload: {0}")]
    MalformedPayload(String),

    /// More than one default handler was registered under a rejecting policy.
    #[error("Multiple default handlers registered: {count}")]
    MultipleDefaultHandlers {
        /// Number of default handlers found.
        count: usize,
    },

    /// An exception matched no handler and the cycle was configured to surface it.
    #[error("Unhandled exception: {0}")]
    Unhandled(Exception),
}

impl HarnessError {
    /// The exception carried by [`HarnessError::Unhandled`], if any.
    #[must_use]
    pub fn exception(&self) -> Option<&Exception> {
        match self {
            HarnessError::Unhandled(exception) => Some(exception),
            HarnessError::MalformedPayload(_) | HarnessError::MultipleDefaultHandlers { .. } => {
                None
            }
        }
    }
}

impl From<Exception> for HarnessError {
    fn from(exception: Exception) -> Self {
        HarnessError::Unhandled(exception)
    }
}
