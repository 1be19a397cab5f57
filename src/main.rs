use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swiss_tracker::api::state::AppState;
use swiss_tracker::config::AppConfig;
use swiss_tracker::storage::Database;
use swiss_tracker::swiss::{compute_standings, generate_pairings};

#[derive(Parser)]
#[command(name = "swiss-tracker")]
#[command(about = "Swiss-system tournament tracker")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Database file path (overrides config)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new player
    Register {
        /// Player's full name
        name: String,
    },

    /// Record the outcome of a single match
    Report {
        /// Winning player's id
        winner: i64,

        /// Losing player's id
        loser: i64,
    },

    /// Show the current standings table
    Standings {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show next-round pairings
    Pairings {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the number of registered players
    Count,

    /// Delete all recorded data
    Reset {
        /// Only delete matches, keep players registered
        #[arg(long)]
        matches_only: bool,
    },

    /// Start the API server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    // Load config if present, fall back to defaults
    let config_path = PathBuf::from(&cli.config);
    let config = if config_path.exists() {
        AppConfig::from_file(&config_path)?
    } else {
        AppConfig::default()
    };
    let db_path = cli.db.unwrap_or_else(|| config.db_path.clone());

    match cli.command {
        Commands::Register { name } => {
            let db = Database::open(&db_path)?;
            let player = db.register_player(name.trim())?;
            println!("Registered player #{}: {}", player.id, player.name);
        }
        Commands::Report { winner, loser } => {
            let db = Database::open(&db_path)?;
            let record = db.report_match(winner, loser)?;
            println!(
                "Recorded match #{}: {} beat {}",
                record.id, record.winner_id, record.loser_id
            );
        }
        Commands::Standings { json } => {
            let mut db = Database::open(&db_path)?;
            let snapshot = db.snapshot()?;
            let standings = compute_standings(&snapshot.players, &snapshot.matches);

            if json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
            } else {
                println!("=== Standings ({} players) ===", standings.len());
                for (rank, entry) in standings.iter().enumerate() {
                    println!(
                        "  #{:<3} {:<24} {} wins / {} played",
                        rank + 1,
                        entry.name,
                        entry.wins,
                        entry.matches_played
                    );
                }
            }
        }
        Commands::Pairings { json } => {
            let mut db = Database::open(&db_path)?;
            let snapshot = db.snapshot()?;
            let standings = compute_standings(&snapshot.players, &snapshot.matches);
            let pairings = generate_pairings(&standings)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&pairings)?);
            } else {
                println!("=== Round Pairings ({} tables) ===", pairings.len());
                for pairing in &pairings {
                    println!(
                        "  {} (#{}) vs {} (#{})",
                        pairing.player1_name,
                        pairing.player1_id,
                        pairing.player2_name,
                        pairing.player2_id
                    );
                }
            }
        }
        Commands::Count => {
            let db = Database::open(&db_path)?;
            println!("{}", db.count_players()?);
        }
        Commands::Reset { matches_only } => {
            let mut db = Database::open(&db_path)?;
            if matches_only {
                let deleted = db.delete_matches()?;
                println!("Deleted {} matches.", deleted);
            } else {
                db.reset()?;
                println!("Deleted all matches and players.");
            }
        }
        Commands::Serve { host, port } => {
            let db = Database::open(&db_path)?;
            let state = AppState::new(db);
            let app = swiss_tracker::api::build_router(state);

            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
