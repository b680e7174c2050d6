//! Exception Payload Codec
//!
//! Text form of an exception, as carried by a string fault payload:
//!
//! ```text
//! Message::<message>||Exception::<kind>
//! ```
//!
//! Encoding always writes the `Message` and `Exception` labels. Decoding only
//! requires the `<label>::<value>` shape on both sides of the last `||`.
//!
//! [`parse_encoded`] is strict and reports malformed input. [`decode_str`] is
//! total: anything that does not parse is treated as a foreign fault and
//! becomes a `RuntimeError` whose message is the whole text.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::prelude::error::{HarnessError, Result};
use crate::prelude::{Exception, ExceptionKind};

/// Separator between the message and kind segments.
pub const SEGMENT_SEPARATOR: &str = "||";
/// Separator between a segment label and its value.
pub const LABEL_SEPARATOR: &str = "::";
/// Label of the message segment.
pub const MESSAGE_LABEL: &str = "Message";
/// Label of the kind segment.
pub const KIND_LABEL: &str = "Exception";

/// Encode an exception into its text form.
#[must_use]
pub fn encode(exception: &Exception) -> String {
    format!(
        "{MESSAGE_LABEL}{LABEL_SEPARATOR}{}{SEGMENT_SEPARATOR}{KIND_LABEL}{LABEL_SEPARATOR}{}",
        exception.message(),
        exception.kind()
    )
}

/// Parse the text form into kind and message.
///
/// The text is split at its last `||`. Both sides must have the
/// `<label>::<value>` shape with a non-empty label; the labels themselves are
/// not checked, so payloads written with other labels still parse. The value
/// runs from the first `::` to the end of its segment, so messages containing
/// `||` or `::` survive a round trip.
///
/// # Errors
/// Returns [`HarnessError::MalformedPayload`] when the separator is missing,
/// either segment lacks a label, or the kind value is empty.
pub fn parse_encoded(text: &str) -> Result<(ExceptionKind, String)> {
    let (message_segment, kind_segment) = text.rsplit_once(SEGMENT_SEPARATOR).ok_or_else(|| {
        HarnessError::MalformedPayload(format!("missing `{SEGMENT_SEPARATOR}` separator"))
    })?;
    let kind = labelled_value(kind_segment).ok_or_else(|| {
        HarnessError::MalformedPayload(format!("kind segment `{kind_segment}` is not labelled"))
    })?;
    let message = labelled_value(message_segment).ok_or_else(|| {
        HarnessError::MalformedPayload(format!("message segment `{message_segment}` is not labelled"))
    })?;
    if kind.is_empty() {
        return Err(HarnessError::MalformedPayload("empty kind segment".to_string()));
    }

    Ok((ExceptionKind::new(kind.to_string()), message.to_string()))
}

/// Value of a `<label>::<value>` segment.
fn labelled_value(segment: &str) -> Option<&str> {
    segment
        .split_once(LABEL_SEPARATOR)
        .filter(|(label, _)| !label.is_empty())
        .map(|(_, value)| value)
}

/// Decode arbitrary payload text into an exception. Never fails.
#[must_use]
pub fn decode_str(text: &str) -> Exception {
    match parse_encoded(text) {
        Ok((kind, message)) => Exception::with_message(kind, message),
        Err(_) => Exception::with_message(ExceptionKind::RUNTIME, text),
    }
}

/// Whether `text` is in the encoded form.
#[must_use]
pub fn is_encoded(text: &str) -> bool {
    parse_encoded(text).is_ok()
}
