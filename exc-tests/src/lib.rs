//! # exc-tests
//!
//! Cross-crate test suite for Excepto providing:
//!
//! - **Regression Tests**: Prevent reintroduction of fixed bugs
//! - **API Stability Tests**: Keep kind identifiers, descriptions and the payload format stable
//! - **Concurrency Tests**: Verify independent cycles on independent threads
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all tests
//! cargo test -p exc-tests
//!
//! # Run specific category
//! cargo test -p exc-tests regression
//! cargo test -p exc-tests api_stability
//! cargo test -p exc-tests concurrency
//! ```
//!
//! ## Test Naming Convention
//!
//! - Regression: `regression_issue_NNN_description`
//! - API Stability: `api_stability_<aspect>_<test>`
//! - Concurrency: `concurrent_<operation>_<scenario>`

#![allow(clippy::expect_used)] // Tests use expect for clarity

pub mod api_stability;
pub mod concurrency;
pub mod regression;

/// Shared test utilities
pub mod utils {
    use excepto::HarnessConfig;

    /// Configuration for tests: quiet panics, no trace capture.
    #[must_use]
    pub fn quiet_config() -> HarnessConfig {
        HarnessConfig::for_production()
    }
}
