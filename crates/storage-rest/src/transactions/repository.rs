use async_trait::async_trait;
use std::sync::Arc;

use digibank_core::transactions::{Transaction, TransactionRepositoryTrait};
use digibank_core::Result;

use crate::client::RestClient;

pub struct TransactionRepository {
    client: Arc<RestClient>,
}

impl TransactionRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        TransactionRepository { client }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    async fn get_by_id(&self, transaction_id: &str) -> Result<Transaction> {
        let path = format!("/transactions/{}", transaction_id);
        Ok(self.client.get_json(&path, &[]).await?)
    }

    async fn list(
        &self,
        account_id: Option<&str>,
        transaction_type: Option<&str>,
    ) -> Result<Vec<Transaction>> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(account_id) = account_id {
            query.push(("accountId", account_id));
        }
        if let Some(transaction_type) = transaction_type {
            query.push(("type", transaction_type));
        }
        Ok(self.client.get_json("/transactions", &query).await?)
    }

    async fn create(&self, transaction: Transaction) -> Result<Transaction> {
        Ok(self.client.post_json("/transactions", &transaction).await?)
    }

    async fn update(&self, transaction: Transaction) -> Result<Transaction> {
        let path = format!("/transactions/{}", transaction.id);
        Ok(self.client.put_json(&path, &transaction).await?)
    }

    async fn delete(&self, transaction_id: &str) -> Result<()> {
        let path = format!("/transactions/{}", transaction_id);
        Ok(self.client.delete(&path).await?)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use digibank_core::transactions::Transaction;

    #[test]
    fn test_decodes_store_payload() {
        // Shape the mock JSON store actually returns: camelCase keys,
        // float amounts, optional fields simply absent.
        let payload = r#"{
            "id": "tx-1",
            "accountId": "acc-1",
            "type": "WITHDRAWAL",
            "amount": 49.9,
            "date": "2024-03-01T12:00:00+00:00",
            "description": "groceries",
            "goalId": "goal-1"
        }"#;

        let transaction: Transaction = serde_json::from_str(payload).unwrap();
        assert_eq!(transaction.account_id, "acc-1");
        assert_eq!(transaction.transaction_type, "WITHDRAWAL");
        assert_eq!(transaction.amount, dec!(49.9));
        assert_eq!(transaction.goal_id.as_deref(), Some("goal-1"));
        assert!(transaction.attachment_path.is_none());
        assert!(transaction.investment_id.is_none());
    }

    #[test]
    fn test_decodes_date_only_rows() {
        let payload = r#"{
            "id": "tx-2",
            "accountId": "acc-1",
            "type": "DEPOSIT",
            "amount": 100,
            "date": "2024-03-01"
        }"#;

        let transaction: Transaction = serde_json::from_str(payload).unwrap();
        assert_eq!(transaction.amount, dec!(100));
    }
}
