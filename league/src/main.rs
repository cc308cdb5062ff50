//! Poker league command line.
//!
//! Plays an interactive game that records its winner, and reads or updates
//! the league table stored in the configured JSON file.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use league::exit_codes;
use league::game::LeagueGame;
use league::io::config::{DEFAULT_CONFIG_PATH, LeagueConfig, load_config, write_config};
use league::io::player_store::{FileSystemPlayerStore, PlayerStore};
use league::logging;
use league::play::PlayLoop;
use tracing::debug;

#[derive(Parser)]
#[command(name = "league", version, about = "Poker league win tracker")]
struct Cli {
    /// Config file (TOML). Defaults apply when it does not exist.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// League file to use instead of the configured `database_path`.
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a game on stdin/stdout and record the winner.
    Play,
    /// Print the league table, most wins first.
    Table,
    /// Print a player's win count (0 for unknown players).
    Score { name: String },
    /// Record one win for a player.
    Record { name: String },
    /// Write a default config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let Cli {
        config,
        database,
        command,
    } = Cli::parse();
    match command {
        Command::Play => cmd_play(open_store(&config, database)?),
        Command::Table => cmd_table(&open_store(&config, database)?),
        Command::Score { name } => cmd_score(&open_store(&config, database)?, &name),
        Command::Record { name } => open_store(&config, database)?.record_win(&name),
        Command::InitConfig { force } => cmd_init_config(&config, force),
    }
}

/// Open the league named by `--database`, falling back to the config file.
fn open_store(config: &Path, database: Option<PathBuf>) -> Result<FileSystemPlayerStore> {
    let database = match database {
        Some(path) => path,
        None => load_config(config)?.database_path,
    };
    debug!(database = %database.display(), "opening league");
    FileSystemPlayerStore::open(database)
}

fn cmd_play(store: FileSystemPlayerStore) -> Result<()> {
    let stdin = io::stdin();
    let mut play_loop = PlayLoop::new(stdin.lock(), io::stdout(), LeagueGame::new(store));
    let outcome = play_loop.play()?;
    debug!(?outcome, "play session ended");
    Ok(())
}

fn cmd_table(store: &impl PlayerStore) -> Result<()> {
    let mut out = io::stdout().lock();
    for player in &store.league()? {
        writeln!(out, "{} {}", player.name, player.wins).context("write league table")?;
    }
    Ok(())
}

fn cmd_score(store: &impl PlayerStore, name: &str) -> Result<()> {
    println!("{}", store.player_score(name)?);
    Ok(())
}

fn cmd_init_config(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &LeagueConfig::default())
}
