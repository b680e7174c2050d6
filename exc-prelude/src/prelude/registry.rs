//! Kind Registry
//!
//! Default human-readable descriptions per kind. The registry is consulted
//! only when an exception is constructed without an explicit message.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::prelude::{Exception, ExceptionKind};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Built-in descriptions, one per built-in kind.
const BUILTIN_DESCRIPTIONS: [(ExceptionKind, &str); 14] = [
    (ExceptionKind::UNKNOWN, "Unknown Error"),
    (ExceptionKind::INDEX, "Index Error"),
    (ExceptionKind::RUNTIME, "Runtime Error"),
    (ExceptionKind::VALUE, "Value Error"),
    (ExceptionKind::NETWORK, "Network Error"),
    (ExceptionKind::SYNTAX, "Syntax Error"),
    (ExceptionKind::PERMISSION, "Permission Error"),
    (ExceptionKind::TIMEOUT, "Timeout Error"),
    (ExceptionKind::TYPE, "Type Error"),
    (ExceptionKind::ASSERTION, "Assertion Error"),
    (ExceptionKind::CONNECTION, "Connection Error"),
    (ExceptionKind::REFERENCE, "Reference Error"),
    (ExceptionKind::EOF, "EOF Error"),
    (ExceptionKind::LOOKUP, "Lookup Error"),
];

/// Mapping from kind to default description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindRegistry {
    descriptions: HashMap<ExceptionKind, Cow<'static, str>>,
}

impl KindRegistry {
    /// Create a registry with no descriptions at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create an owned registry pre-filled with the built-in descriptions.
    #[must_use]
    pub fn with_builtins() -> Self {
        let descriptions = BUILTIN_DESCRIPTIONS
            .into_iter()
            .map(|(kind, text)| (kind, Cow::Borrowed(text)))
            .collect();
        Self { descriptions }
    }

    /// The process-wide built-in registry used by [`Exception::new`].
    pub fn builtin() -> &'static KindRegistry {
        static INSTANCE: OnceLock<KindRegistry> = OnceLock::new();
        INSTANCE.get_or_init(KindRegistry::with_builtins)
    }

    /// Register (or replace) the description of `kind`.
    #[must_use]
    pub fn describe(mut self, kind: ExceptionKind, text: impl Into<Cow<'static, str>>) -> Self {
        self.descriptions.insert(kind, text.into());
        self
    }

    /// Look up the registered description of `kind`.
    #[must_use]
    pub fn lookup(&self, kind: &ExceptionKind) -> Option<&str> {
        self.descriptions.get(kind).map(|text| &**text)
    }

    /// Description of `kind`, falling back to the kind identifier itself.
    ///
    /// Never empty: a kind with an empty identifier and no description gets
    /// the `UnknownError` description, or the `UnknownError` identifier when
    /// this registry has none.
    #[must_use]
    pub fn default_message(&self, kind: &ExceptionKind) -> String {
        let unknown = ExceptionKind::UNKNOWN;
        self.lookup(kind)
            .filter(|text| !text.is_empty())
            .or_else(|| Some(kind.as_str()).filter(|identifier| !identifier.is_empty()))
            .or_else(|| self.lookup(&unknown).filter(|text| !text.is_empty()))
            .unwrap_or(unknown.as_str())
            .to_string()
    }

    /// Construct an exception, resolving the message against this registry.
    ///
    /// An explicit message is stringified with `Display`. When it is absent,
    /// or stringifies to nothing, the registry description is used instead.
    #[must_use]
    pub fn construct<M: fmt::Display>(&self, kind: ExceptionKind, message: Option<M>) -> Exception {
        let explicit = message.map(|m| m.to_string()).filter(|m| !m.is_empty());
        let message = match explicit {
            Some(message) => message,
            None => self.default_message(&kind),
        };
        Exception::from_parts(kind, message)
    }

    /// Number of registered descriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    /// Whether the registry has no descriptions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_is_described() {
        let registry = KindRegistry::builtin();
        assert_eq!(registry.len(), ExceptionKind::BUILTINS.len());
        for kind in ExceptionKind::BUILTINS {
            assert!(registry.lookup(&kind).is_some(), "{kind} has no description");
        }
    }

    #[test]
    fn test_default_message_falls_back_to_identifier() {
        let registry = KindRegistry::builtin();
        assert_eq!(registry.default_message(&ExceptionKind::TIMEOUT), "Timeout Error");
        assert_eq!(registry.default_message(&ExceptionKind::new("QuotaExceeded")), "QuotaExceeded");
    }

    #[test]
    fn test_custom_description() {
        let registry = KindRegistry::with_builtins()
            .describe(ExceptionKind::new("QuotaExceeded"), "Quota exceeded");
        let exception = registry.construct(ExceptionKind::new("QuotaExceeded"), None::<&str>);
        assert_eq!(exception.message(), "Quota exceeded");
        // The shared registry is untouched
        assert!(KindRegistry::builtin().lookup(&ExceptionKind::new("QuotaExceeded")).is_none());
    }

    #[test]
    fn test_construct_explicit_message_wins() {
        let exception =
            KindRegistry::builtin().construct(ExceptionKind::LOOKUP, Some("Email doesn't exist"));
        assert_eq!(exception.message(), "Email doesn't exist");
        assert_eq!(exception.kind(), &ExceptionKind::LOOKUP);
    }

    #[test]
    fn test_construct_empty_message_uses_description() {
        let exception = KindRegistry::builtin().construct(ExceptionKind::INDEX, Some(""));
        assert_eq!(exception.message(), "Index Error");
    }

    #[test]
    fn test_empty_registry() {
        let registry = KindRegistry::empty();
        assert!(registry.is_empty());
        assert_eq!(registry.default_message(&ExceptionKind::LOOKUP), "LookupError");
        assert_eq!(registry.default_message(&ExceptionKind::new("")), "UnknownError");
    }

    #[test]
    fn test_empty_identifier_uses_unknown_description() {
        let exception = Exception::new(ExceptionKind::new(""));
        assert_eq!(exception.message(), "Unknown Error");

        let registry = KindRegistry::with_builtins().describe(ExceptionKind::new("Blank"), "");
        assert_eq!(registry.default_message(&ExceptionKind::new("Blank")), "Blank");
    }
}
