/// Atlas Server - user records with address geocoding
use anyhow::Context;
use atlas_core::{Geocoder, UserRepository};
use atlas_geocoding::MapboxGeocoder;
use atlas_server::{
    config::{ServerConfig, StorageBackend},
    create_router,
    state::AppState,
};
use atlas_storage::{MemoryUserRepository, SqliteUserRepository};
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "atlas-server")]
#[command(about = "Atlas user records server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "ATLAS_CONFIG")]
        config: Option<PathBuf>,
    },
    /// List all users
    ListUsers {
        /// Configuration file path
        #[arg(short, long, env = "ATLAS_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atlas_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::ListUsers { config } => {
            list_users(config).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load_from(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn open_repository(config: &ServerConfig) -> anyhow::Result<Arc<dyn UserRepository>> {
    match config.storage.backend {
        StorageBackend::Sqlite => {
            let pool = atlas_storage::create_pool(&config.storage.database_url)
                .await
                .with_context(|| {
                    format!("Failed to open database {}", config.storage.database_url)
                })?;
            atlas_storage::run_migrations(&pool).await?;
            tracing::info!("Database connected");
            Ok(Arc::new(SqliteUserRepository::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; records are lost on shutdown");
            Ok(Arc::new(MemoryUserRepository::new()))
        }
    }
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting Atlas Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let repository = open_repository(&config).await?;

    let geocoder: Arc<dyn Geocoder> = Arc::new(MapboxGeocoder::new(config.mapbox_config())?);
    tracing::info!("Geocoding provider: {}", config.geocoding.base_url);

    let app = create_router(AppState::new(repository, geocoder));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_users(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let repository = open_repository(&config).await?;

    let users = repository.list().await?;

    println!("Users:");
    for user in users {
        println!(
            "  {} - {}",
            user.id,
            user.fields.name.as_deref().unwrap_or("(unnamed)")
        );
    }

    Ok(())
}
