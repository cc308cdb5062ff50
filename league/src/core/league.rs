use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// One row of the league table. Field names match the durable record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Wins")]
    pub wins: u64,
}

impl Player {
    pub fn new(name: impl Into<String>, wins: u64) -> Self {
        Self {
            name: name.into(),
            wins,
        }
    }
}

/// Ordered player standings, serialized as a bare JSON array.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct League(Vec<Player>);

impl League {
    pub fn new(players: Vec<Player>) -> Self {
        Self(players)
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.0.iter().find(|player| player.name == name)
    }

    /// Increment an existing player or append a new one with a single win.
    ///
    /// Returns the player's win count after the update. A player already at
    /// `u64::MAX` is an error and leaves the league unchanged.
    pub fn record_win(&mut self, name: &str) -> Result<u64> {
        if let Some(player) = self.0.iter_mut().find(|player| player.name == name) {
            player.wins = player
                .wins
                .checked_add(1)
                .ok_or_else(|| anyhow!("win count for {name} is at its maximum"))?;
            return Ok(player.wins);
        }
        self.0.push(Player::new(name, 1));
        Ok(1)
    }

    /// Standings by wins descending. Ties keep their storage order.
    pub fn sorted(&self) -> League {
        let mut players = self.0.clone();
        players.sort_by(|a, b| b.wins.cmp(&a.wins));
        League(players)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a League {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
