//! Diagnostics for the `league` CLI.
//!
//! The store logs each league load and rewrite (path, player count) at
//! `debug`, and the game logs start and finish at `info`. Everything goes to
//! stderr: stdout carries the interactive prompt and the `table`/`score`
//! output, which scripts and tests read verbatim.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Call once, first thing in `main`.
///
/// `RUST_LOG` selects the filter; without it only warnings are shown, so a
/// play session prints nothing but the prompt.
///
/// ```bash
/// RUST_LOG=league::io=debug league record Chris
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
