//! API Stability Tests
//!
//! This module ensures backward compatibility across Excepto versions.
//!
//! ## Test Categories
//!
//! - **Payload Format**: The `Message::…||Exception::…` text form
//! - **Kinds**: Built-in identifiers and default descriptions
//!
//! ## Purpose
//!
//! Encoded payloads may cross process or version boundaries (logs, string
//! panics forwarded by other libraries). These tests catch accidental
//! format changes before release.

pub mod kinds;
pub mod payload_format;
