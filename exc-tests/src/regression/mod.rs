//! Regression Tests
//!
//! This module contains tests that prevent reintroduction of fixed bugs.
//! Each test file corresponds to a specific bug that was fixed.
//!
//! ## File Naming Convention
//!
//! `issue_NNN_short_description.rs`

pub mod issue_001_type_error_kind;
pub mod issue_002_separator_in_message;
pub mod issue_003_empty_panic_message;
