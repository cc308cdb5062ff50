//! Stable exit codes for the `league` CLI.

/// Command succeeded (including a play session rejected for a bad player count).
pub const OK: i32 = 0;
/// Command failed due to invalid config, a malformed league file or an I/O error.
pub const INVALID: i32 = 1;
