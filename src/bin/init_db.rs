//! Creates the `cobrancas` schema by applying the migrations in `migrations/`.
//!
//! Run once per deployment, before the HTTP service starts. Reads
//! `DATABASE_URL` from the environment or a `.env` file.

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL")
        .context("DATABASE_URL environment variable is required")?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;

    tracing::info!("Database schema initialized");
    Ok(())
}
