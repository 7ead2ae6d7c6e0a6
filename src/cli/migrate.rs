use crate::app_data::AppData;
use crate::errors::InternalError;

/// Run all pending migrations against the configured database
pub async fn run_migrations(app_data: &AppData) -> Result<(), InternalError> {
    tracing::info!("Running database migrations...");
    app_data.database.migrate().await?;
    tracing::info!("All migrations completed successfully");
    Ok(())
}
