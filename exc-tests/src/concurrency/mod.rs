//! Concurrency Tests
//!
//! Verifies that cycles on different threads stay independent.
//!
//! ## Test Categories
//!
//! - **Parallel Cycles**: Many threads, one cycle each, no cross-talk
//! - **Thread Boundaries**: Faults on spawned threads are outside a cycle's scope

pub mod parallel_cycles;
pub mod thread_boundaries;
