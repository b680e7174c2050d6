//! Property-Based Testing using Proptest
//!
//! Invariants of the value model and the codec that must hold for every
//! input: default messages, round trips through the text form, and the
//! classification of foreign payloads.

#![deny(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

#[cfg(test)]
use proptest::prelude::*;

#[cfg(test)]
use crate::prelude::{codec, Exception, ExceptionKind, KindRegistry};

/// Strategy for built-in kinds.
#[cfg(test)]
fn arb_builtin_kind() -> impl Strategy<Value = ExceptionKind> {
    prop::sample::select(ExceptionKind::BUILTINS.to_vec())
}

/// Strategy for caller-defined kinds that never collide with a built-in.
#[cfg(test)]
fn arb_custom_kind() -> impl Strategy<Value = ExceptionKind> {
    prop::string::string_regex("Custom[A-Za-z0-9_]{0,24}")
        .expect("valid regex pattern for custom kinds")
        .prop_map(ExceptionKind::new)
}

#[cfg(test)]
fn arb_kind() -> impl Strategy<Value = ExceptionKind> {
    prop_oneof![arb_builtin_kind(), arb_custom_kind()]
}

// Property: construct without a message uses the registry, else the identifier
#[cfg(test)]
proptest! {
    #[test]
    fn prop_default_message_for_builtin(kind in arb_builtin_kind()) {
        let exception = Exception::new(kind.clone());
        let expected = KindRegistry::builtin().lookup(&kind).expect("built-ins are described");
        prop_assert_eq!(exception.message(), expected);
    }

    #[test]
    fn prop_default_message_for_custom(kind in arb_custom_kind()) {
        let exception = Exception::new(kind.clone());
        prop_assert_eq!(exception.message(), kind.as_str());
        prop_assert!(!kind.is_builtin());
    }
}

// Property: decode(encode(e)) preserves kind and message
#[cfg(test)]
proptest! {
    #[test]
    fn prop_codec_round_trip(kind in arb_kind(), message in "\\PC{1,64}") {
        let exception = Exception::with_message(kind, message);
        let decoded = codec::decode_str(&exception.encode());
        prop_assert_eq!(decoded.kind(), exception.kind());
        prop_assert_eq!(decoded.message(), exception.message());
    }
}

// Property: text without the separator is a RuntimeError carrying the text
#[cfg(test)]
proptest! {
    #[test]
    fn prop_foreign_text_is_runtime(text in "[^|]{1,80}") {
        let decoded = codec::decode_str(&text);
        prop_assert_eq!(decoded.kind(), &ExceptionKind::RUNTIME);
        prop_assert_eq!(decoded.message(), text.as_str());
    }

    #[test]
    fn prop_decode_is_total(text in "\\PC{0,128}") {
        let decoded = codec::decode_str(&text);
        prop_assert!(!decoded.message().is_empty());
        prop_assert!(decoded.trace().is_none());
    }
}
