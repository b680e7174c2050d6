//! Exception Kind Identifiers
//!
//! Kinds are open-ended: the built-in set is a list of associated constants,
//! and any caller may mint its own kind with [`ExceptionKind::new`]. Two kinds
//! are equal when their identifiers are equal.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Classification tag of an [`Exception`](crate::Exception).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExceptionKind(Cow<'static, str>);

impl ExceptionKind {
    /// Unclassified failure.
    pub const UNKNOWN: Self = Self::from_static("UnknownError");
    /// Index out of bounds.
    pub const INDEX: Self = Self::from_static("IndexError");
    /// Generic runtime failure; foreign faults are coerced to this kind.
    pub const RUNTIME: Self = Self::from_static("RuntimeError");
    /// Value in the wrong format.
    pub const VALUE: Self = Self::from_static("ValueError");
    /// Network failure.
    pub const NETWORK: Self = Self::from_static("NetworkError");
    /// Syntax failure.
    pub const SYNTAX: Self = Self::from_static("SyntaxError");
    /// Permission denied.
    pub const PERMISSION: Self = Self::from_static("PermissionError");
    /// Operation timed out.
    pub const TIMEOUT: Self = Self::from_static("TimeoutError");
    /// Unexpected type.
    pub const TYPE: Self = Self::from_static("TypeError");
    /// Assertion failure.
    pub const ASSERTION: Self = Self::from_static("AssertionError");
    /// Connection failure.
    pub const CONNECTION: Self = Self::from_static("ConnectionError");
    /// Invalid reference.
    pub const REFERENCE: Self = Self::from_static("ReferenceError");
    /// Unexpected end of input.
    pub const EOF: Self = Self::from_static("EOFError");
    /// Missing key in a map.
    pub const LOOKUP: Self = Self::from_static("LookupError");

    /// Every built-in kind, in declaration order.
    pub const BUILTINS: [Self; 14] = [
        Self::UNKNOWN,
        Self::INDEX,
        Self::RUNTIME,
        Self::VALUE,
        Self::NETWORK,
        Self::SYNTAX,
        Self::PERMISSION,
        Self::TIMEOUT,
        Self::TYPE,
        Self::ASSERTION,
        Self::CONNECTION,
        Self::REFERENCE,
        Self::EOF,
        Self::LOOKUP,
    ];

    /// Create a caller-defined kind.
    ///
    /// Passing a built-in identifier (e.g. `"LookupError"`) yields a kind equal
    /// to the matching constant.
    #[must_use]
    pub fn new(identifier: impl Into<Cow<'static, str>>) -> Self {
        Self(identifier.into())
    }

    /// Create a kind from a static identifier in const context.
    #[must_use]
    pub const fn from_static(identifier: &'static str) -> Self {
        Self(Cow::Borrowed(identifier))
    }

    /// The identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this kind is one of [`ExceptionKind::BUILTINS`].
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        Self::BUILTINS.iter().any(|builtin| builtin == self)
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ExceptionKind {
    fn from(identifier: &'static str) -> Self {
        Self::from_static(identifier)
    }
}

impl From<String> for ExceptionKind {
    fn from(identifier: String) -> Self {
        Self(Cow::Owned(identifier))
    }
}

impl AsRef<str> for ExceptionKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
