#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for payload decoding
//!
//! Decoding must be total: any text yields an exception with a non-empty
//! message, and well-formed payloads round-trip.

use exc_prelude::prelude::{codec, ExceptionKind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let decoded = codec::decode_str(&text);
    assert!(!decoded.message().is_empty());

    match codec::parse_encoded(&text) {
        Ok((kind, _)) => assert_eq!(decoded.kind(), &kind),
        Err(_) => assert_eq!(decoded.kind(), &ExceptionKind::RUNTIME),
    }

    // Re-encoding a decoded value is stable
    let again = codec::decode_str(&decoded.encode());
    assert_eq!(again.kind(), decoded.kind());
    assert_eq!(again.message(), decoded.message());
});
