//! Migrate command - applies and inspects the users schema.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Serve auto-migrates on startup; this command exists for manual
    // control, so connect without touching the schema.
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await.map_err(AppError::from)?;
            tracing::info!("Schema is up to date");
        }
        MigrateAction::Down => {
            db.rollback_migration().await.map_err(AppError::from)?;
            tracing::info!("Rolled back the last migration");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await.map_err(AppError::from)? {
                tracing::info!(migration = %name, applied, "migration status");
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-running migrations");
            db.fresh_migrations().await.map_err(AppError::from)?;
            tracing::info!("Schema rebuilt from scratch");
        }
    }

    Ok(())
}
