//! Built-in Exception Constructors
//!
//! One pair of constructors per built-in kind: `<kind>_error()` uses the
//! kind's default description, `<kind>_error_with(message)` an explicit one.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::prelude::{Exception, ExceptionKind};
use std::fmt;

macro_rules! builtin_constructors {
    ($($kind:ident => $plain:ident, $with:ident, $what:literal;)+) => {
        $(
            #[doc = concat!("Exception indicating ", $what, ", with the default description.")]
            #[must_use]
            pub fn $plain() -> Exception {
                Exception::new(ExceptionKind::$kind)
            }

            #[doc = concat!("Exception indicating ", $what, ", with an explicit message.")]
            #[must_use]
            pub fn $with(message: impl fmt::Display) -> Exception {
                Exception::with_message(ExceptionKind::$kind, message)
            }
        )+
    };
}

builtin_constructors! {
    UNKNOWN => unknown_error, unknown_error_with, "an unclassified failure";
    INDEX => index_error, index_error_with, "an out-of-bounds index";
    RUNTIME => runtime_error, runtime_error_with, "a generic runtime failure";
    VALUE => value_error, value_error_with, "a value in the wrong format";
    NETWORK => network_error, network_error_with, "a network failure";
    SYNTAX => syntax_error, syntax_error_with, "a syntax failure";
    PERMISSION => permission_error, permission_error_with, "a permission failure";
    TIMEOUT => timeout_error, timeout_error_with, "a timeout";
    TYPE => type_error, type_error_with, "an unexpected type";
    ASSERTION => assertion_error, assertion_error_with, "an assertion failure";
    CONNECTION => connection_error, connection_error_with, "a connection failure";
    REFERENCE => reference_error, reference_error_with, "an invalid reference";
    EOF => eof_error, eof_error_with, "an unexpected end of input";
    LOOKUP => lookup_error, lookup_error_with, "a key missing from a map";
}
