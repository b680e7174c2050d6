//! Payload Format Stability Tests
//!
//! Text payloads written by one version must decode in the next.
