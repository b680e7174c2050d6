//! Regression test for issue #001
//!
//! **Issue**: The `TypeError` convenience constructor produced the wrong kind
//!
//! ## Bug Description
//!
//! `type_error()` was bound to the timeout kind, so a handler registered for
//! `TypeError` never saw it and a `TimeoutError` handler did.
//!
//! ## Fix Description
//!
//! Constructors are generated from a single kind-to-name table.
//!
//! ## Test Strategy
//!
//! Raise through every built-in constructor and check the handler for exactly
//! that kind receives it.

#[cfg(test)]
mod tests {
    use crate::utils::quiet_config;
    use excepto::{interest_set, raise, type_error, Exception, ExceptionKind, Try};
    use std::cell::RefCell;

    #[test]
    fn regression_issue_001_type_error_has_type_kind() {
        assert_eq!(type_error().kind(), &ExceptionKind::TYPE);
        assert_eq!(type_error().message(), "Type Error");
    }

    #[test]
    fn regression_issue_001_type_handler_receives_type_error() {
        let hit = RefCell::new("none");
        Try::new(|| raise(type_error()))
            .catch(interest_set![ExceptionKind::TIMEOUT], |_| *hit.borrow_mut() = "timeout")
            .catch(interest_set![ExceptionKind::TYPE], |_| *hit.borrow_mut() = "type")
            .with_config(quiet_config())
            .run();
        assert_eq!(*hit.borrow(), "type");
    }

    #[test]
    fn regression_issue_001_every_constructor_routes_to_its_kind() {
        let constructors: [fn() -> Exception; 14] = [
            excepto::unknown_error,
            excepto::index_error,
            excepto::runtime_error,
            excepto::value_error,
            excepto::network_error,
            excepto::syntax_error,
            excepto::permission_error,
            excepto::timeout_error,
            excepto::type_error,
            excepto::assertion_error,
            excepto::connection_error,
            excepto::reference_error,
            excepto::eof_error,
            excepto::lookup_error,
        ];
        for (constructor, kind) in constructors.into_iter().zip(ExceptionKind::BUILTINS) {
            let hit = RefCell::new(None);
            Try::new(|| raise(constructor()))
                .catch(interest_set![kind.clone()], |e| *hit.borrow_mut() = Some(e.kind().clone()))
                .with_config(quiet_config())
                .run();
            assert_eq!(hit.into_inner(), Some(kind));
        }
    }
}
