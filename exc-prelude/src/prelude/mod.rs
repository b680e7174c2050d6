//! Excepto Prelude Module
//!
//! Exception kinds, values, default descriptions and the payload codec.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Named constructors for every built-in kind.
pub mod builtin;
/// Encoding and decoding of the textual exception payload.
pub mod codec;
/// Harness error types.
pub mod error;
/// The exception record.
pub mod exception;
/// Exception kind identifiers.
pub mod kind;
/// Property-based tests for the value model and codec.
pub mod property_based_testing;
/// Default descriptions per kind.
pub mod registry;

pub use error::{HarnessError, Result};
pub use exception::Exception;
pub use kind::ExceptionKind;
pub use registry::KindRegistry;
