use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use wanderwise_common::{logger, AppConfig};
use wanderwise_server::{spawn_seeding, AppState};
use wanderwise_vector::SearchFilter;

/// Find project root by looking for a .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            return None;
        }
    }
}

/// Load .env from the project root, else from the working directory
fn load_dotenv() {
    match find_project_root().map(|root| root.join(".env")) {
        Some(env_path) if env_path.exists() => {
            dotenv::from_path(&env_path).ok();
        }
        _ => {
            dotenv::dotenv().ok();
        }
    }
}

#[derive(Parser)]
#[command(name = "wanderwise")]
#[command(about = "WanderWise - retrieval-backed travel assistant for Mauritius", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Search the demo documents and print ranked results as JSON
    Search {
        /// Query text
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 3)]
        k: usize,

        /// Place name or region (north, south, east, west)
        #[arg(long)]
        location: Option<String>,

        /// Category, e.g. hotel or attraction
        #[arg(long)]
        category: Option<String>,

        /// Exact document type
        #[arg(long = "type")]
        kind: Option<String>,

        /// Activity key, repeatable (beach, hiking, culture, food, shopping, wildlife)
        #[arg(long = "activity")]
        activities: Vec<String>,

        /// Only accessible places
        #[arg(long)]
        accessible: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    load_dotenv();

    let mut config = AppConfig::from_env()?;

    match cli.command.unwrap_or(Commands::Serve { host: None, port: None }) {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server_host = host;
            }
            if let Some(port) = port {
                config.server_port = port;
            }
            config.validate()?;

            logger::init_logging(&config)?;
            tracing::info!("WanderWise starting...");
            tracing::info!("  Bind address: {}", config.server_bind_address());
            let embeddings = if config.has_api_key() {
                config.embedding_model.as_str()
            } else {
                "disabled"
            };
            tracing::info!("  Embeddings: {}", embeddings);
            tracing::info!("  Seed demo data: {}", config.seed_demo_data);

            println!("Server listening on http://{}", config.server_bind_address());
            wanderwise_server::start_server(config).await?;
        }
        Commands::Search {
            query,
            k,
            location,
            category,
            kind,
            activities,
            accessible,
        } => {
            logger::setup_console_logging("warn")?;

            let state = Arc::new(AppState::new(config)?);
            spawn_seeding(&state).await?;

            let filter = SearchFilter {
                location,
                activity_types: activities,
                category,
                kind,
                accessible,
            };
            let results = state.vector_search.search(&query, k, Some(&filter)).await;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}
