//! Orchestrator Integration Tests
//!
//! End-to-end try/catch/finally cycles through the public API:
//! - Handler selection order and default fallback
//! - Foreign panic classification
//! - Finalizer guarantees
//! - Nested cycles
//! - Strict mode and duplicate-default rejection

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::redundant_clone,
    clippy::useless_vec
)]

use exc_core::config::{DefaultHandlerPolicy, HarnessConfig, UnmatchedPolicy};
use exc_core::{interest_set, raise, raise_encoded, InterestSet, Outcome, Try};
use exc_prelude::prelude::{builtin, Exception, ExceptionKind, HarnessError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

fn quiet() -> HarnessConfig {
    HarnessConfig::new().with_quiet_panics(true)
}

// ============================================================================
// Dispatch Tests
// ============================================================================

#[test]
fn test_lookup_scenario() {
    let caught: RefCell<Option<(ExceptionKind, String, &str)>> = RefCell::new(None);
    Try::new(|| {
        let user: HashMap<&str, &str> = HashMap::from([("name", "John Doe")]);
        if !user.contains_key("email") {
            raise(builtin::lookup_error_with("Email doesn't exist"));
        }
    })
    .catch(interest_set![ExceptionKind::LOOKUP], |e| {
        *caught.borrow_mut() = Some((e.kind().clone(), e.message().to_string(), "LookupHandler"));
    })
    .catch(interest_set![ExceptionKind::REFERENCE, ExceptionKind::INDEX], |e| {
        *caught.borrow_mut() = Some((e.kind().clone(), e.message().to_string(), "ReferenceHandler"));
    })
    .catch_all(|e| {
        *caught.borrow_mut() = Some((e.kind().clone(), e.message().to_string(), "DefaultHandler"));
    })
    .with_config(quiet())
    .run();

    let (kind, message, handler) = caught.into_inner().expect("a handler ran");
    assert_eq!(kind, ExceptionKind::LOOKUP);
    assert_eq!(message, "Email doesn't exist");
    assert_eq!(handler, "LookupHandler");
}

#[test]
fn test_unmatched_goes_to_default() {
    let caught = RefCell::new(None);
    Try::new(|| raise(builtin::unknown_error_with("Unknown Error")))
        .catch(interest_set![ExceptionKind::LOOKUP], |_| *caught.borrow_mut() = Some("Lookup"))
        .catch(interest_set![ExceptionKind::REFERENCE, ExceptionKind::INDEX], |_| {
            *caught.borrow_mut() = Some("Reference")
        })
        .catch_all(|e| {
            assert_eq!(e.kind(), &ExceptionKind::UNKNOWN);
            *caught.borrow_mut() = Some("Default");
        })
        .with_config(quiet())
        .run();
    assert_eq!(caught.into_inner(), Some("Default"));
}

#[test]
fn test_catch_all_receives_raised_kind() {
    let kind = RefCell::new(None);
    Try::new(|| raise(builtin::reference_error_with("Dummy error text")))
        .catch_all(|e| *kind.borrow_mut() = Some(e.kind().clone()))
        .with_config(quiet())
        .run();
    assert_eq!(kind.into_inner(), Some(ExceptionKind::REFERENCE));
}

#[test]
fn test_no_match_no_default_returns_normally() {
    let ran = Cell::new(false);
    Try::new(|| raise(Exception::new(ExceptionKind::new("B"))))
        .catch(InterestSet::of(["A"]), |_| ran.set(true))
        .with_config(quiet())
        .run();
    assert!(!ran.get());
}

#[test]
fn test_no_handlers_at_all() {
    let finalized = Cell::new(false);
    Try::new(|| raise(builtin::runtime_error()))
        .finally(|| finalized.set(true))
        .with_config(quiet())
        .run();
    assert!(finalized.get());
}

// ============================================================================
// Foreign Fault Tests
// ============================================================================

#[test]
fn test_bare_panic_is_runtime_error() {
    let caught = RefCell::new(None);
    Try::new(|| panic!("Something went very wrong!"))
        .catch_all(|e| *caught.borrow_mut() = Some(e.clone()))
        .with_config(quiet())
        .run();
    let caught = caught.into_inner().expect("default ran");
    assert_eq!(caught.kind(), &ExceptionKind::RUNTIME);
    assert_eq!(caught.message(), "Something went very wrong!");
}

#[test]
fn test_std_fault_is_runtime_error() {
    let caught = RefCell::new(None);
    Try::new(|| {
        let values: Vec<u8> = Vec::new();
        let index = values.len() + 3;
        let _ = values[index];
    })
    .catch(interest_set![ExceptionKind::RUNTIME], |e| *caught.borrow_mut() = Some(e.clone()))
    .with_config(quiet())
    .run();
    let caught = caught.into_inner().expect("runtime handler ran");
    assert!(caught.message().contains("index out of bounds"));
}

#[test]
fn test_encoded_string_payload_is_classified() {
    let caught = RefCell::new(None);
    Try::new(|| raise_encoded(&builtin::timeout_error_with("slow")))
        .catch(interest_set![ExceptionKind::TIMEOUT], |e| *caught.borrow_mut() = Some(e.clone()))
        .with_config(quiet())
        .run();
    assert_eq!(caught.into_inner().map(|e| e.message().to_string()), Some("slow".to_string()));
}

#[test]
fn test_captured_exception_has_trace() {
    let caught = RefCell::new(None);
    Try::new(|| raise(builtin::index_error()))
        .catch_all(|e| *caught.borrow_mut() = Some(e.clone()))
        .with_config(quiet().with_capture_trace(true))
        .run();
    let caught = caught.into_inner().expect("default ran");
    assert!(caught.trace().is_some());
}

#[test]
fn test_trace_capture_can_be_disabled() {
    let caught = RefCell::new(None);
    Try::new(|| raise(builtin::index_error()))
        .catch_all(|e| *caught.borrow_mut() = Some(e.clone()))
        .with_config(HarnessConfig::for_production())
        .run();
    assert!(caught.into_inner().expect("default ran").trace().is_none());
}

// ============================================================================
// Finalizer Tests
// ============================================================================

#[test]
fn test_finally_runs_without_fault() {
    let finalized = Cell::new(0);
    Try::new(|| {}).finally(|| finalized.set(finalized.get() + 1)).run();
    assert_eq!(finalized.get(), 1);
}

#[test]
fn test_finally_runs_with_catch_all() {
    let finalized = Cell::new(0);
    Try::new(|| raise(builtin::network_error()))
        .catch_all(|_| {})
        .finally(|| finalized.set(finalized.get() + 1))
        .with_config(quiet())
        .run();
    assert_eq!(finalized.get(), 1);
}

#[test]
fn test_finally_fault_reaches_enclosing_cycle() {
    let caught = RefCell::new(None);
    Try::new(|| {
        Try::new(|| {}).finally(|| raise(builtin::permission_error())).run();
    })
    .catch(interest_set![ExceptionKind::PERMISSION], |e| *caught.borrow_mut() = Some(e.clone()))
    .with_config(quiet())
    .run();
    assert!(caught.into_inner().is_some());
}

// ============================================================================
// Nesting Tests
// ============================================================================

#[test]
fn test_nested_cycle_in_handler() {
    let custom = ExceptionKind::new("CustomException");
    let first = RefCell::new(None);
    let second = RefCell::new(None);

    Try::new(|| raise(builtin::reference_error_with("Dummy error text")))
        .catch_all(|outer| {
            Try::new(|| raise(Exception::with_message(custom.clone(), "Custom Error Message")))
                .catch(interest_set![custom.clone()], |inner| {
                    *first.borrow_mut() = Some(outer.kind().clone());
                    *second.borrow_mut() = Some(inner.kind().clone());
                })
                .with_config(quiet())
                .run();
        })
        .with_config(quiet())
        .run();

    assert_eq!(first.into_inner(), Some(ExceptionKind::REFERENCE));
    assert_eq!(second.into_inner(), Some(ExceptionKind::new("CustomException")));
}

#[test]
fn test_nested_cycle_in_block_is_isolated() {
    let inner_seen = RefCell::new(None);
    let outer_seen = RefCell::new(None);
    Try::new(|| {
        Try::new(|| raise(builtin::eof_error()))
            .catch_all(|e| *inner_seen.borrow_mut() = Some(e.kind().clone()))
            .with_config(quiet())
            .run();
        raise(builtin::syntax_error());
    })
    .catch_all(|e| *outer_seen.borrow_mut() = Some(e.kind().clone()))
    .with_config(quiet())
    .run();
    assert_eq!(inner_seen.into_inner(), Some(ExceptionKind::EOF));
    assert_eq!(outer_seen.into_inner(), Some(ExceptionKind::SYNTAX));
}

#[test]
fn test_reraise_from_handler_is_new_fault() {
    let outer = RefCell::new(None);
    Try::new(|| {
        Try::new(|| raise(builtin::value_error()))
            .catch(interest_set![ExceptionKind::VALUE], |e| raise(e.clone()))
            .with_config(quiet())
            .run();
    })
    .catch(interest_set![ExceptionKind::VALUE], |e| *outer.borrow_mut() = Some(e.clone()))
    .with_config(quiet())
    .run();
    let outer = outer.into_inner().expect("outer handler ran");
    assert_eq!(outer.kind(), &ExceptionKind::VALUE);
    // The re-raised value still carries the trace captured by the inner cycle
    assert!(outer.trace().is_some());
}

// ============================================================================
// Policy Tests
// ============================================================================

#[test]
fn test_strict_mode_outcome() {
    let result = Try::new(|| raise(builtin::type_error()))
        .catch(interest_set![ExceptionKind::VALUE], |_| {})
        .with_config(quiet().with_unmatched(UnmatchedPolicy::Propagate))
        .try_run();
    assert_eq!(result.map_err(|e| e.exception().map(|e| e.kind().clone())), Err(Some(ExceptionKind::TYPE)));
}

#[test]
fn test_lenient_mode_outcome() {
    let outcome = Try::new(|| raise(builtin::type_error()))
        .catch(interest_set![ExceptionKind::VALUE], |_| {})
        .with_config(quiet())
        .try_run()
        .expect("lenient");
    assert!(matches!(outcome, Outcome::Unhandled(_)));
}

#[test]
fn test_reject_policy_skips_cycle() {
    let ran = Cell::new(false);
    Try::new(|| ran.set(true))
        .catch_all(|_| {})
        .catch(InterestSet::any(), |_| {})
        .finally(|| ran.set(true))
        .with_config(quiet().with_default_handlers(DefaultHandlerPolicy::Reject))
        .run();
    assert!(!ran.get());

    let result = Try::new(|| {})
        .catch_all(|_| {})
        .catch_all(|_| {})
        .with_config(quiet().with_default_handlers(DefaultHandlerPolicy::Reject))
        .try_run();
    assert!(matches!(result, Err(HarnessError::MultipleDefaultHandlers { count: 2 })));
}

#[test]
fn test_reject_policy_accepts_single_default() {
    let outcome = Try::new(|| raise(builtin::value_error()))
        .catch_all(|_| {})
        .with_config(quiet().with_default_handlers(DefaultHandlerPolicy::Reject))
        .try_run()
        .expect("single default is fine");
    assert!(outcome.is_handled());
}
