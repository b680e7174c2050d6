//! Regression test for issue #002
//!
//! **Issue**: Messages containing `||` or `::` were truncated
//!
//! ## Bug Description
//!
//! The text payload was split on every `||` and `::`, so a message such as
//! `"retry || abort"` came back as `"retry "` and lost its kind.
//!
//! ## Fix Description
//!
//! The decoder splits once, at the last `||`, and takes each value from the
//! first `::` of its segment to the segment's end.
//!
//! ## Test Strategy
//!
//! Round-trip awkward messages through both the structured and the text payload.
