use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::errors::InternalError;

/// Owns the connection pool and hands out per-request transactions
#[derive(Debug, Clone)]
pub struct DatabaseHandle {
    connection: DatabaseConnection,
}

impl DatabaseHandle {
    /// Connect to the database. Does NOT run migrations - call `migrate` separately.
    pub async fn connect(database_url: &str) -> Result<Self, InternalError> {
        let mut options = ConnectOptions::new(database_url);
        // Every pooled connection to `:memory:` would open its own empty database
        if database_url.contains(":memory:") {
            options.max_connections(1).min_connections(1);
        }

        let connection = Database::connect(options)
            .await
            .map_err(|e| InternalError::database("connect_database", e))?;

        tracing::debug!("Connected to database: {}", database_url);

        Ok(Self { connection })
    }

    /// Apply all pending migrations
    pub async fn migrate(&self) -> Result<(), InternalError> {
        Migrator::up(&self.connection, None)
            .await
            .map_err(|e| InternalError::database("run_migrations", e))?;

        tracing::debug!("Database migrations completed");
        Ok(())
    }

    pub async fn begin(&self) -> Result<DatabaseTransaction, InternalError> {
        self.connection
            .begin()
            .await
            .map_err(InternalError::transaction_begin)
    }

    pub async fn commit(txn: DatabaseTransaction) -> Result<(), InternalError> {
        txn.commit().await.map_err(InternalError::transaction_commit)
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}
