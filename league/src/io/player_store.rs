//! Durable win-count storage backed by a JSON file.
//!
//! The file holds the whole league as a JSON array of `{"Name", "Wins"}`
//! objects. It is parsed once on open and rewritten in full (temp file +
//! rename) after every recorded win.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::core::invariants::validate_invariants;
use crate::core::league::{League, Player};

const LEAGUE_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/schemas/league.schema.json"
));

/// Read/query/mutate access to player standings.
///
/// Adapters depend on this trait only, so tests can swap in a stub.
pub trait PlayerStore: Send + Sync {
    /// Current standings, wins descending.
    fn league(&self) -> Result<League>;

    /// Exact-name lookup. `None` for players that never won.
    fn find_player(&self, name: &str) -> Result<Option<Player>>;

    /// Record one win, creating the player on first win.
    fn record_win(&self, name: &str) -> Result<()>;

    /// Win count for `name`; unknown players score zero.
    fn player_score(&self, name: &str) -> Result<u64> {
        Ok(self.find_player(name)?.map_or(0, |player| player.wins))
    }
}

/// [`PlayerStore`] persisting to a single JSON file.
#[derive(Debug)]
pub struct FileSystemPlayerStore {
    path: PathBuf,
    league: Mutex<League>,
}

impl FileSystemPlayerStore {
    /// Open the store at `path`.
    ///
    /// A missing or blank file is an empty league. Anything else must parse,
    /// match the league schema and hold unique player names.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let league = load_league(&path)?;
        Ok(Self {
            path,
            league: Mutex::new(league),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, League>> {
        self.league
            .lock()
            .map_err(|_| anyhow!("player store lock poisoned"))
    }
}

impl PlayerStore for FileSystemPlayerStore {
    fn league(&self) -> Result<League> {
        Ok(self.lock()?.sorted())
    }

    fn find_player(&self, name: &str) -> Result<Option<Player>> {
        Ok(self.lock()?.find(name).cloned())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn record_win(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            bail!("player name must not be empty");
        }
        // Held across the rewrite so concurrent wins cannot overwrite each other.
        let mut league = self.lock()?;
        let mut updated = league.clone();
        let wins = updated.record_win(name)?;
        write_league(&self.path, &updated)?;
        *league = updated;
        debug!(wins, "win recorded");
        Ok(())
    }
}

/// Load and validate a league from disk (schema + invariants).
pub fn load_league(path: &Path) -> Result<League> {
    debug!(path = %path.display(), "loading league");
    if !path.exists() {
        debug!(path = %path.display(), "league file missing, starting empty");
        return Ok(League::default());
    }
    let contents =
        fs::read_to_string(path).with_context(|| format!("read league {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(League::default());
    }
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse league {}", path.display()))?;
    validate_schema(&value).with_context(|| format!("validate league {}", path.display()))?;
    let league: League = serde_json::from_value(value)
        .with_context(|| format!("deserialize league {}", path.display()))?;
    let errors = validate_invariants(&league);
    if !errors.is_empty() {
        bail!(
            "league invariants failed for {}: {}",
            path.display(),
            errors.join("; ")
        );
    }
    debug!(players = league.len(), "league loaded");
    Ok(league)
}

/// Atomically replace the league file (temp file + rename).
pub fn write_league(path: &Path, league: &League) -> Result<()> {
    debug!(path = %path.display(), players = league.len(), "writing league");
    let mut buf = serde_json::to_string_pretty(league).context("serialize league")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp league {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace league {}", path.display()))?;
    Ok(())
}

fn validate_schema(league: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(LEAGUE_SCHEMA).context("parse league schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    let messages: Vec<String> = compiled
        .iter_errors(league)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        bail!("league schema validation failed: {}", messages.join("; "));
    }
    Ok(())
}
