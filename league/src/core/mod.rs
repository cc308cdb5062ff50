//! Deterministic, pure logic shared by the league store.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! standings and return deterministic outputs suitable for tests.

pub mod invariants;
pub mod league;
