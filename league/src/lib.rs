//! Poker league win tracking.
//!
//! The crate keeps a durable league table of player wins and the pieces that
//! feed it:
//!
//! - **[`core`]**: Pure league model (lookup, win increments, ordering) and
//!   its invariants. No I/O.
//! - **[`io`]**: The file-backed [`io::player_store::PlayerStore`] and the
//!   TOML configuration.
//!
//! [`game`] and [`play`] implement the interactive mode that reports a
//! winner into the store.

pub mod core;
pub mod exit_codes;
pub mod game;
pub mod io;
pub mod logging;
pub mod play;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
