#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Excepto - Structured Exceptions for Rust
//!
//! Typed try/catch/finally on top of panics. A protected block runs under
//! interception; anything that unwinds out of it becomes an [`Exception`]
//! with a kind and a message, is routed to the first handler interested in
//! that kind (or to a default handler), and a finalizer runs no matter what.
//!
//! ## Basic Usage
//!
//! ```rust
//! use excepto::{interest_set, lookup_error_with, raise, ExceptionKind, Try};
//!
//! let mut message = String::new();
//! Try::new(|| raise(lookup_error_with("Email doesn't exist")))
//!     .catch(interest_set![ExceptionKind::LOOKUP], |e| message = e.message().to_string())
//!     .run();
//! assert_eq!(message, "Email doesn't exist");
//! ```
//!
//! ## Custom Kinds
//!
//! Kinds are open-ended. Any identifier works, and built-in identifiers
//! compare equal to the matching constants:
//!
//! ```rust
//! use excepto::{interest_set, raise, Exception, ExceptionKind, Try};
//!
//! let quota = ExceptionKind::new("QuotaExceeded");
//! let mut handled = false;
//! Try::new(|| raise(Exception::new(quota.clone())))
//!     .catch(interest_set![quota.clone()], |e| handled = e.message() == "QuotaExceeded")
//!     .run();
//! assert!(handled);
//! ```
//!
//! ## Foreign Panics
//!
//! Panics that did not come from [`raise`] are captured too, as `RuntimeError`:
//!
//! ```rust
//! use excepto::{ExceptionKind, Try};
//!
//! let mut kind = None;
//! Try::new(|| panic!("Something went very wrong!"))
//!     .catch_all(|e| kind = Some(e.kind().clone()))
//!     .run();
//! assert_eq!(kind, Some(ExceptionKind::RUNTIME));
//! ```
//!
//! ## Strict Mode
//!
//! By default an exception that no handler matches is dropped after the
//! finalizer runs. [`UnmatchedPolicy::Propagate`] re-raises it instead:
//!
//! ```rust
//! use excepto::{interest_set, raise, timeout_error, ExceptionKind, HarnessConfig, HarnessError, Try, UnmatchedPolicy};
//!
//! let result = Try::new(|| raise(timeout_error()))
//!     .catch(interest_set![ExceptionKind::NETWORK], |_| {})
//!     .with_config(HarnessConfig::new().with_unmatched(UnmatchedPolicy::Propagate))
//!     .try_run();
//! assert!(matches!(result, Err(HarnessError::Unhandled(_))));
//! ```

pub use exc_core as core;
pub use exc_prelude as prelude;

pub use exc_prelude::prelude::builtin::*;
pub use exc_prelude::prelude::{codec, Exception, ExceptionKind, HarnessError, KindRegistry, Result};

pub use exc_core::{
    // Orchestration
    try_block,
    Outcome,
    Stage,
    Try,
    // Handlers
    HandlerChain,
    HandlerEntry,
    InterestSet,
    MatchKind,
    Selection,
    // Raising and capture
    decode_payload,
    intercept,
    raise,
    raise_encoded,
    InterceptSettings,
    Raise,
    // Configuration
    DefaultHandlerPolicy,
    HarnessConfig,
    UnmatchedPolicy,
};

pub use exc_core::interest_set;
pub use exc_core::logging::init_tracing;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
