//! Line-based interactive mode: ask for the table size, start the game,
//! then read who won.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::game::Game;

pub const PLAYER_PROMPT: &str = "Please enter the number of players: ";
pub const BAD_PLAYER_INPUT_ERR_MSG: &str =
    "Bad value received for number of players, please try again with a number";

const WINNER_SUFFIX: &str = " wins";

/// How a play session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The player count was not a number; the game never started.
    BadPlayerCount,
    Finished { winner: String },
}

/// Drives one game over a line-oriented input and an output sink.
pub struct PlayLoop<R, W, G> {
    input: R,
    output: W,
    game: G,
}

impl<R: BufRead, W: Write, G: Game> PlayLoop<R, W, G> {
    pub fn new(input: R, output: W, game: G) -> Self {
        Self {
            input,
            output,
            game,
        }
    }

    pub fn play(&mut self) -> Result<PlayOutcome> {
        write!(self.output, "{PLAYER_PROMPT}").context("write player prompt")?;
        self.output.flush().context("flush player prompt")?;

        let line = self.read_line()?;
        let Ok(number_of_players) = line.parse::<i64>() else {
            debug!(input = %line, "rejected player count");
            write!(self.output, "{BAD_PLAYER_INPUT_ERR_MSG}").context("write error message")?;
            self.output.flush().context("flush error message")?;
            return Ok(PlayOutcome::BadPlayerCount);
        };

        self.game
            .start(number_of_players, &mut self.output)
            .context("start game")?;

        let winner = extract_winner(&self.read_line()?).to_string();
        self.game.finish(&winner).context("finish game")?;
        Ok(PlayOutcome::Finished { winner })
    }

    pub fn into_parts(self) -> (R, W, G) {
        (self.input, self.output, self.game)
    }

    /// Next line without its terminator. EOF reads as an empty line.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line).context("read input line")?;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Strip one trailing `" wins"`; other input passes through unchanged.
pub fn extract_winner(input: &str) -> &str {
    input.strip_suffix(WINNER_SUFFIX).unwrap_or(input)
}
