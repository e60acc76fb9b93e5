mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgChargeStore;

use anyhow::Result;
use async_trait::async_trait;

/// A charge row as stored in the `cobrancas` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Charge {
    pub id: i32,
    #[sqlx(rename = "nome_cliente")]
    pub client_name: String,
    #[sqlx(rename = "telefone")]
    pub phone: Option<String>,
    #[sqlx(rename = "descricao")]
    pub description: Option<String>,
    #[sqlx(rename = "valor")]
    pub value: f32,
    #[sqlx(rename = "total_parcelas")]
    pub total_installments: i32,
    #[sqlx(rename = "parcelas_pagas")]
    pub paid_installments: i32,
    #[sqlx(rename = "frequencia")]
    pub frequency: String,
    #[sqlx(rename = "data_inicio")]
    pub start_date: String,
}

/// Fields supplied by the client when a charge is created
#[derive(Debug, Clone, PartialEq)]
pub struct NewCharge {
    pub client_name: String,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub value: f32,
    pub total_installments: i32,
    pub frequency: String,
    pub start_date: String,
}

/// Persistence seam for charges
///
/// Every method is a single statement against the store; implementations must
/// not keep per-request state.
#[async_trait]
pub trait ChargeStore: Send + Sync + 'static {
    /// All charges ordered by `start_date` compared as plain strings, then by id
    async fn list_by_start_date(&self) -> Result<Vec<Charge>>;

    /// Insert a charge with zero paid installments and return its id
    async fn insert(&self, charge: NewCharge) -> Result<i32>;

    /// Atomically add one paid installment
    ///
    /// # Returns
    /// * `Ok(Some(paid))` - the new paid installment count
    /// * `Ok(None)` - no charge with this id
    async fn mark_installment_paid(&self, id: i32) -> Result<Option<i32>>;

    async fn health_check(&self) -> Result<()>;
}
