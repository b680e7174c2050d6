//! Excepto Prelude Crate
//!
//! This crate provides the exception value model shared by every Excepto
//! component: kinds, the exception record itself, the default-message
//! registry and the payload codec.
//!
//! # Overview
//!
//! The prelude is purely data. It never unwinds and never touches the panic
//! machinery; interception and dispatch live in `exc-core`.
//!
//! # Key Components
//!
//! - **Kinds**: open-ended [`ExceptionKind`] identifiers with built-in constants
//! - **Exceptions**: the immutable [`Exception`] record
//! - **Registry**: default descriptions looked up when no message is supplied
//! - **Codec**: the `Message::<m>||Exception::<k>` text form and its total decoder
//!
//! # Example
//!
//! ```rust
//! use exc_prelude::prelude::{Exception, ExceptionKind};
//!
//! let exception = Exception::new(ExceptionKind::LOOKUP);
//! assert_eq!(exception.message(), "Lookup Error");
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Prelude module containing the exception value model.
pub mod prelude;

pub use prelude::*;
