//! I/O helpers for the league store and its binaries.

pub mod config;
pub mod player_store;
