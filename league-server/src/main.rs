//! League server - HTTP API over the poker league table.

mod routes;
mod state;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use league::io::config::{DEFAULT_CONFIG_PATH, load_config};
use league::io::player_store::FileSystemPlayerStore;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "league-server")]
#[command(about = "HTTP API for player scores and the league table")]
struct Args {
    /// Config file (TOML). Defaults apply when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// League file (overrides `database_path` from the config)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Address to bind the server to (overrides `server.bind`)
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on (overrides `server.port`)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("league_server=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let cfg = load_config(&args.config)?;

    let database = args.database.unwrap_or(cfg.database_path);
    info!(database = %database.display(), "opening league");
    let state = AppState::new(FileSystemPlayerStore::open(database)?);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::api_router().layer(cors).with_state(state);

    let addr = listen_addr(
        &args.bind.unwrap_or(cfg.server.bind),
        args.port.unwrap_or(cfg.server.port),
    )?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Combine a bare IP (v4 or v6) with the port.
fn listen_addr(bind: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let ip: IpAddr = bind
        .parse()
        .with_context(|| format!("invalid bind address {bind}"))?;
    Ok(SocketAddr::new(ip, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_overrides() {
        let args = Args::parse_from(["league-server", "--port", "8080", "--database", "db.json"]);
        assert_eq!(args.port, Some(8080));
        assert_eq!(args.database, Some(PathBuf::from("db.json")));
        assert_eq!(args.bind, None);
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn listen_addr_accepts_ipv4_and_ipv6() {
        assert_eq!(
            listen_addr("127.0.0.1", 5000).expect("ipv4").to_string(),
            "127.0.0.1:5000"
        );
        assert_eq!(listen_addr("::1", 5000).expect("ipv6").to_string(), "[::1]:5000");
        assert!(listen_addr("localhost", 5000).is_err());
    }
}
