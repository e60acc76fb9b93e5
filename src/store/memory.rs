use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Charge, ChargeStore, NewCharge};

/// In-process charge store used to drive the HTTP handlers in tests
#[derive(Default)]
pub struct MemoryChargeStore {
    charges: RwLock<Vec<Charge>>,
}

impl MemoryChargeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.charges.read().await.len()
    }
}

#[async_trait]
impl ChargeStore for MemoryChargeStore {
    async fn list_by_start_date(&self) -> Result<Vec<Charge>> {
        let mut charges = self.charges.read().await.clone();
        charges.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)));
        Ok(charges)
    }

    async fn insert(&self, charge: NewCharge) -> Result<i32> {
        let mut charges = self.charges.write().await;
        let id = charges.last().map_or(1, |last| last.id + 1);
        charges.push(Charge {
            id,
            client_name: charge.client_name,
            phone: charge.phone,
            description: charge.description,
            value: charge.value,
            total_installments: charge.total_installments,
            paid_installments: 0,
            frequency: charge.frequency,
            start_date: charge.start_date,
        });
        Ok(id)
    }

    async fn mark_installment_paid(&self, id: i32) -> Result<Option<i32>> {
        let mut charges = self.charges.write().await;
        Ok(charges.iter_mut().find(|c| c.id == id).map(|charge| {
            charge.paid_installments += 1;
            charge.paid_installments
        }))
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_charge(start_date: &str) -> NewCharge {
        NewCharge {
            client_name: "Ana".to_string(),
            phone: None,
            description: None,
            value: 10.0,
            total_installments: 1,
            frequency: "monthly".to_string(),
            start_date: start_date.to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let store = MemoryChargeStore::new();
        assert_eq!(store.insert(new_charge("2024-01-01")).await.unwrap(), 1);
        assert_eq!(store.insert(new_charge("2024-01-01")).await.unwrap(), 2);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn test_list_sorts_by_string_then_id() {
        let store = MemoryChargeStore::new();
        store.insert(new_charge("2024-2-1")).await.unwrap();
        store.insert(new_charge("2024-10-1")).await.unwrap();
        store.insert(new_charge("2024-10-1")).await.unwrap();

        let ids: Vec<i32> = store
            .list_by_start_date()
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
