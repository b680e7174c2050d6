//! Exception Record
//!
//! An [`Exception`] is a kind tag, a human-readable message and an optional
//! diagnostic trace. Values are immutable once built; the trace is written
//! at most once, by the decode step that reconstructs a captured fault.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::prelude::codec;
use crate::prelude::{ExceptionKind, KindRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Typed, message-bearing exception value.
///
/// # Examples
/// ```rust
/// use exc_prelude::prelude::{Exception, ExceptionKind};
///
/// let missing = Exception::with_message(ExceptionKind::LOOKUP, "Email doesn't exist");
/// assert_eq!(missing.kind(), &ExceptionKind::LOOKUP);
/// assert_eq!(missing.to_string(), "LookupError: Email doesn't exist");
///
/// let custom = Exception::new(ExceptionKind::new("CustomException"));
/// assert_eq!(custom.message(), "CustomException");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(from = "ExceptionRecord")]
#[error("{kind}: {message}")]
pub struct Exception {
    kind: ExceptionKind,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<String>,
}

/// Wire shape of an [`Exception`]; deserialized values are rebuilt through the
/// registry so an empty or missing message gets the default description.
#[derive(Deserialize)]
struct ExceptionRecord {
    kind: ExceptionKind,
    #[serde(default)]
    message: String,
    #[serde(default)]
    trace: Option<String>,
}

impl From<ExceptionRecord> for Exception {
    fn from(record: ExceptionRecord) -> Self {
        let exception = KindRegistry::builtin().construct(record.kind, Some(record.message));
        match record.trace {
            Some(trace) => exception.attach_trace(trace),
            None => exception,
        }
    }
}

impl Exception {
    /// Construct an exception whose message is the kind's default description.
    ///
    /// Built-in kinds use the built-in registry; other kinds use their own
    /// identifier as the message.
    #[must_use]
    pub fn new(kind: ExceptionKind) -> Self {
        KindRegistry::builtin().construct(kind, None::<&str>)
    }

    /// Construct an exception with an explicit message.
    ///
    /// An empty message is treated as absent.
    #[must_use]
    pub fn with_message(kind: ExceptionKind, message: impl fmt::Display) -> Self {
        KindRegistry::builtin().construct(kind, Some(message))
    }

    pub(crate) fn from_parts(kind: ExceptionKind, message: String) -> Self {
        Self { kind, message, trace: None }
    }

    /// Kind tag.
    #[must_use]
    pub fn kind(&self) -> &ExceptionKind {
        &self.kind
    }

    /// Human-readable message; never empty.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Diagnostic trace, present only on captured exceptions.
    #[must_use]
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    /// Whether this exception is of `kind`.
    #[must_use]
    pub fn is(&self, kind: &ExceptionKind) -> bool {
        &self.kind == kind
    }

    /// Attach a diagnostic trace.
    ///
    /// The trace is write-once: an exception that already carries one keeps it.
    #[must_use]
    pub fn attach_trace(mut self, trace: impl Into<String>) -> Self {
        if self.trace.is_none() {
            self.trace = Some(trace.into());
        }
        self
    }

    /// Textual payload form, `Message::<message>||Exception::<kind>`.
    #[must_use]
    pub fn encode(&self) -> String {
        codec::encode(self)
    }

    /// Split into kind and message, dropping the trace.
    #[must_use]
    pub fn into_parts(self) -> (ExceptionKind, String) {
        (self.kind, self.message)
    }
}
