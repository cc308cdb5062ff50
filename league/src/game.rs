//! The game capability driven by the interactive play loop.

use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::io::player_store::PlayerStore;

/// A single game of poker, from dealing to a declared winner.
pub trait Game {
    /// Begin a game for `number_of_players`. Alerts for the table go to `alerts`.
    ///
    /// The count arrives as typed by the user and may be zero or negative.
    fn start(&self, number_of_players: i64, alerts: &mut dyn Write) -> Result<()>;

    /// End the game and credit `winner`.
    fn finish(&self, winner: &str) -> Result<()>;
}

/// [`Game`] that records the winner in a [`PlayerStore`].
pub struct LeagueGame<S> {
    store: S,
}

impl<S: PlayerStore> LeagueGame<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: PlayerStore> Game for LeagueGame<S> {
    fn start(&self, number_of_players: i64, _alerts: &mut dyn Write) -> Result<()> {
        info!(number_of_players, "game started");
        Ok(())
    }

    fn finish(&self, winner: &str) -> Result<()> {
        self.store.record_win(winner)?;
        info!(winner, "game finished");
        Ok(())
    }
}
