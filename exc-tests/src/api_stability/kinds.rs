//! Kind Identifier Stability Tests
//!
//! Built-in identifiers and descriptions are matched by callers as strings;
//! changing them is a breaking change.
