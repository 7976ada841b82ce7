//! Test utilities for database testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations for testing purposes.

use anyhow::Result;
use employee_api::server::{AppState, create_app};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the full application router over a fresh in-memory database.
pub async fn setup_test_app() -> Result<(AppState, axum::Router)> {
    let db = setup_test_db().await?;
    let state = AppState::new(db);
    let app = create_app(state.clone());

    Ok((state, app))
}
