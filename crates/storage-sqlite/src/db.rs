//! Database initialization and connection pooling.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel::{sql_query, RunQueryDsl};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::StorageError;
use cambio_core::errors::{DatabaseError, Result};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Ensure the database file exists and return its path.
pub fn init(db_path: &str) -> Result<String> {
    if db_path != ":memory:" && !Path::new(db_path).exists() {
        create_db_file(db_path)?;
    }
    Ok(db_path.to_string())
}

/// Build the r2d2 connection pool.
pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = Pool::builder()
        .build(manager)
        .map_err(StorageError::PoolError)?;
    Ok(Arc::new(pool))
}

/// Run pending embedded migrations.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get().map_err(StorageError::PoolError)?;
    sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .map_err(StorageError::QueryFailed)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;
    Ok(())
}

/// Check out a connection from the pool.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    Ok(pool.get().map_err(StorageError::PoolError)?)
}

fn create_db_file(db_path: &str) -> Result<()> {
    if let Some(db_dir) = Path::new(db_path).parent() {
        if !db_dir.exists() {
            fs::create_dir_all(db_dir).map_err(|e| {
                DatabaseError::ConnectionFailed(format!(
                    "Failed to create {}: {}",
                    db_dir.display(),
                    e
                ))
            })?;
        }
    }
    fs::File::create(db_path).map_err(|e| {
        DatabaseError::ConnectionFailed(format!("Failed to create {}: {}", db_path, e))
    })?;
    Ok(())
}
