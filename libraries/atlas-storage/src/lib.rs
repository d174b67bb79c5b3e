//! Atlas Storage
//!
//! Persistence collection for user records.
//!
//! Two backends implement [`atlas_core::UserRepository`]:
//!
//! - **`SQLite`** ([`SqliteUserRepository`]): durable storage through `sqlx`,
//!   with embedded migrations
//! - **Memory** ([`MemoryUserRepository`]): process-local storage, used by
//!   tests and for throwaway instances
//!
//! # Example
//!
//! ```rust,no_run
//! use atlas_core::{UserFields, UserRepository};
//! use atlas_storage::{create_pool, run_migrations, SqliteUserRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://atlas.db").await?;
//! run_migrations(&pool).await?;
//!
//! let users = SqliteUserRepository::new(pool);
//! let created = users.create(UserFields::default()).await?;
//! assert!(users.find_by_id(&created.id).await?.is_some());
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod memory;

// Vertical slices
pub mod users;

pub use context::SqliteUserRepository;
pub use error::StorageError;
pub use memory::MemoryUserRepository;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    tracing::debug!("Migrations applied");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// The database file and any missing parent directories are created on first
/// use.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://atlas.db>`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;
    use std::time::Duration;

    tracing::debug!(url = %database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(30));

    let in_memory = database_url.contains(":memory:");

    if !in_memory {
        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
    }

    // Every connection to `:memory:` opens its own database, so keep exactly one alive.
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options.connect_with(options).await?;

    tracing::debug!("SQLite pool created");

    Ok(pool)
}
