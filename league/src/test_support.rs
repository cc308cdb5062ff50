//! Test doubles for the store and game seams.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};

use crate::core::league::{League, Player};
use crate::game::Game;
use crate::io::player_store::PlayerStore;

/// In-memory [`PlayerStore`] with canned scores and a log of recorded wins.
#[derive(Debug, Default)]
pub struct StubPlayerStore {
    scores: HashMap<String, u64>,
    win_calls: Mutex<Vec<String>>,
    league: League,
}

impl StubPlayerStore {
    pub fn with_scores(scores: &[(&str, u64)]) -> Self {
        Self {
            scores: scores
                .iter()
                .map(|(name, wins)| ((*name).to_string(), *wins))
                .collect(),
            ..Self::default()
        }
    }

    pub fn with_league(league: League) -> Self {
        Self {
            league,
            ..Self::default()
        }
    }

    /// Names passed to `record_win`, in call order.
    pub fn win_calls(&self) -> Vec<String> {
        self.win_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl PlayerStore for StubPlayerStore {
    fn league(&self) -> Result<League> {
        Ok(self.league.clone())
    }

    fn find_player(&self, name: &str) -> Result<Option<Player>> {
        Ok(self
            .scores
            .get(name)
            .map(|wins| Player::new(name, *wins)))
    }

    fn record_win(&self, name: &str) -> Result<()> {
        self.win_calls
            .lock()
            .map_err(|_| anyhow!("win calls lock poisoned"))?
            .push(name.to_string());
        Ok(())
    }
}

/// [`Game`] that remembers how it was started and finished.
#[derive(Debug, Default)]
pub struct GameSpy {
    start_called_with: RefCell<Option<i64>>,
    finish_called_with: RefCell<Option<String>>,
}

impl GameSpy {
    pub fn start_called_with(&self) -> Option<i64> {
        *self.start_called_with.borrow()
    }

    pub fn finish_called_with(&self) -> Option<String> {
        self.finish_called_with.borrow().clone()
    }
}

impl Game for GameSpy {
    fn start(&self, number_of_players: i64, _alerts: &mut dyn Write) -> Result<()> {
        *self.start_called_with.borrow_mut() = Some(number_of_players);
        Ok(())
    }

    fn finish(&self, winner: &str) -> Result<()> {
        *self.finish_called_with.borrow_mut() = Some(winner.to_string());
        Ok(())
    }
}

/// Input reader yielding each of `lines` terminated by a newline.
pub fn user_sends(lines: &[&str]) -> Cursor<String> {
    let mut input = lines.join("\n");
    if !lines.is_empty() {
        input.push('\n');
    }
    Cursor::new(input)
}

/// Write `contents` verbatim to `game.db.json` under `dir`, returning its path.
pub fn write_database(dir: &Path, contents: &str) -> Result<PathBuf> {
    let path = dir.join("game.db.json");
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
