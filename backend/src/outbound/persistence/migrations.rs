//! Embedded schema migrations run at startup.
//!
//! Migrations execute over a synchronous connection on a blocking thread;
//! the async pool is only built once the schema is in place. The unique
//! constraints created here are the authoritative duplicate-geometry guard.

use diesel::{Connection, PgConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

/// All migrations bundled into the binary at compile time.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while bringing the schema up to date.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// Could not open the migration connection.
    #[error("failed to connect for migrations: {0}")]
    Connect(#[from] diesel::ConnectionError),
    /// A migration failed part-way.
    #[error("failed to run migrations: {0}")]
    Run(String),
}

/// Run all pending migrations against the given database.
///
/// Blocking; callers on an async runtime should wrap this in
/// `spawn_blocking`.
///
/// # Errors
///
/// Returns [`MigrationError`] if the connection cannot be opened or a
/// migration fails.
pub fn run_pending(database_url: &str) -> Result<(), MigrationError> {
    let mut conn = PgConnection::establish(database_url)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Run(err.to_string()))?;
    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(())
}
