//! # Excepto Core
//!
//! Runtime half of the Excepto exception harness: turning panics into typed
//! [`Exception`](exc_prelude::Exception) values and dispatching them through a
//! try/catch/finally cycle.
//!
//! ## Key Features
//!
//! - **Typed raise**: [`raise`] unwinds with the exception itself as payload
//! - **Total capture**: any panic payload, foreign or not, decodes to an exception
//! - **Ordered dispatch**: first matching handler wins, with one default fallback
//! - **Guaranteed finalizer**: runs whether or not anything faulted or matched
//! - **Strict mode**: optionally re-raise exceptions nothing handled
//!
//! ## Quick Start
//!
//! ```rust
//! use exc_core::{interest_set, raise, Try};
//! use exc_prelude::prelude::{builtin, ExceptionKind};
//!
//! let mut seen = None;
//! Try::new(|| raise(builtin::timeout_error()))
//!     .catch(interest_set![ExceptionKind::TIMEOUT, ExceptionKind::NETWORK], |e| {
//!         seen = Some(e.kind().clone());
//!     })
//!     .catch_all(|_| {})
//!     .run();
//! assert_eq!(seen, Some(ExceptionKind::TIMEOUT));
//! ```
//!
//! ## Threads
//!
//! A cycle intercepts only faults unwound on the thread that runs it. Distinct
//! threads must use distinct [`Try`] values; nothing is shared between cycles.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Per-cycle configuration.
pub mod config;
/// Handler chain and interest sets.
pub mod handler;
/// Panic interception and payload decoding.
pub mod intercept;
/// Tracing subscriber setup.
pub mod logging;
/// The try/catch/finally orchestrator.
pub mod orchestrator;

pub use config::{DefaultHandlerPolicy, HarnessConfig, UnmatchedPolicy};
pub use handler::{HandlerChain, HandlerEntry, InterestSet, MatchKind, Selection};
pub use intercept::{decode_payload, intercept, raise, raise_encoded, InterceptSettings, Raise};
pub use orchestrator::{try_block, Outcome, Stage, Try};
