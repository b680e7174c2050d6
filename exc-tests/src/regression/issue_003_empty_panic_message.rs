//! Regression test for issue #003
//!
//! **Issue**: A panic with an empty message reached handlers with an empty message
//!
//! ## Bug Description
//!
//! A foreign `String::new()` payload was classified as `RuntimeError` but its
//! message stayed empty, breaking the rule that exception messages are never
//! empty.
//!
//! ## Fix Description
//!
//! Capture is tracked as `Option<Exception>` rather than by message length,
//! and an empty foreign message falls back to the `RuntimeError` description.
//!
//! ## Test Strategy
//!
//! Panic with an empty string and check the default handler sees a
//! non-empty `RuntimeError`.
