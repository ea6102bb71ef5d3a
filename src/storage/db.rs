use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

use crate::config::DatabaseConfig;

/// Sequence for naming in-memory databases, so concurrent tests never share
/// one shared-cache database by accident.
static MEMDB_SEQ: AtomicU64 = AtomicU64::new(0);

/// Handle to the employee database.
///
/// Cheap to clone; every clone shares the same connection pool. Calls are
/// stateless between each other, so a single handle is safe to use from
/// concurrent tasks.
#[derive(Clone)]
pub struct Storage {
    pub(crate) conn: DatabaseConnection,
}

impl Storage {
    /// Connect using the given database configuration and bootstrap the schema.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ConnectOptions::new(config.url.as_str());
        options
            .max_connections(config.max_connections)
            .min_connections(1);

        let conn = Database::connect(options).await?;

        let storage = Storage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Open a fresh in-memory database.
    ///
    /// Shared-cache mode keeps the database visible across the pool's
    /// connections; the unique name keeps separate handles isolated.
    pub async fn in_memory() -> Result<Self> {
        let seq = MEMDB_SEQ.fetch_add(1, Ordering::Relaxed);
        Self::connect(&DatabaseConfig {
            url: format!("sqlite:file:staffdir_memdb_{seq}?mode=memory&cache=shared"),
            ..DatabaseConfig::default()
        })
        .await
    }

    /// The underlying connection, for repository calls.
    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Initialize database schema
    pub(crate) async fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_unprepared(
                r"
                CREATE TABLE IF NOT EXISTS employee (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    first_name TEXT NOT NULL,
                    last_name TEXT,
                    birth_date TEXT
                )
                ",
            )
            .await?;

        Ok(())
    }
}
