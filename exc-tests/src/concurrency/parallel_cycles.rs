//! Parallel Cycle Tests
//!
//! Each thread builds its own `Try`; the panic hook and interception frames
//! are per thread, so concurrent cycles must never see each other's faults.
