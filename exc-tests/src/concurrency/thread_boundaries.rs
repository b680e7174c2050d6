//! Thread Boundary Tests
//!
//! A cycle intercepts only faults unwound on its own thread.
