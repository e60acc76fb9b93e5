use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use super::{Charge, ChargeStore, NewCharge};
use crate::config::Config;

const SELECT_COLUMNS: &str = "id, nome_cliente, telefone, descricao, valor, total_parcelas, \
     parcelas_pagas, frequencia, data_inicio";

/// PostgreSQL-backed charge store
///
/// Holds a connection pool; each operation checks a connection out for a
/// single statement and returns it to the pool when the statement completes.
#[derive(Debug, Clone)]
pub struct PgChargeStore {
    pool: PgPool,
}

impl PgChargeStore {
    /// Connect to the database named by `DATABASE_URL`
    ///
    /// The schema is not created here; run the `init-db` binary once per
    /// deployment before starting the service.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&config.database_url)
            .await
            .context("Failed to connect to PostgreSQL")?;

        tracing::info!("Successfully connected to PostgreSQL");

        Ok(Self::new(pool))
    }

    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChargeStore for PgChargeStore {
    async fn list_by_start_date(&self) -> Result<Vec<Charge>> {
        // "C" collation compares bytes, so dates sort as strings regardless of the server locale
        let query = format!(
            "SELECT {} FROM cobrancas ORDER BY data_inicio COLLATE \"C\" ASC, id ASC",
            SELECT_COLUMNS
        );

        let charges = sqlx::query_as::<_, Charge>(&query)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list charges")?;

        tracing::debug!("Listed {} charges", charges.len());
        Ok(charges)
    }

    async fn insert(&self, charge: NewCharge) -> Result<i32> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO cobrancas \
             (nome_cliente, telefone, descricao, valor, total_parcelas, parcelas_pagas, frequencia, data_inicio) \
             VALUES ($1, $2, $3, $4, $5, 0, $6, $7) \
             RETURNING id",
        )
        .bind(&charge.client_name)
        .bind(&charge.phone)
        .bind(&charge.description)
        .bind(charge.value)
        .bind(charge.total_installments)
        .bind(&charge.frequency)
        .bind(&charge.start_date)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert charge")?;

        tracing::debug!("Inserted charge with id: {}", id);
        Ok(id)
    }

    async fn mark_installment_paid(&self, id: i32) -> Result<Option<i32>> {
        let paid: Option<i32> = sqlx::query_scalar(
            "UPDATE cobrancas SET parcelas_pagas = parcelas_pagas + 1 \
             WHERE id = $1 \
             RETURNING parcelas_pagas",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to mark installment as paid")?;

        match paid {
            Some(paid) => tracing::debug!("Charge {} now has {} paid installments", id, paid),
            None => tracing::debug!("Charge not found with id: {}", id),
        }
        Ok(paid)
    }

    async fn health_check(&self) -> Result<()> {
        let one: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("Failed to execute health check query")?;

        if one == 1 {
            tracing::debug!("Health check query succeeded");
            Ok(())
        } else {
            Err(anyhow::anyhow!("Health check query returned {}", one))
        }
    }
}
