use async_trait::async_trait;
use std::sync::Arc;

use digibank_core::accounts::{Account, AccountRepositoryTrait, AccountUpdate};
use digibank_core::errors::StoreError;
use digibank_core::Result;

use crate::client::RestClient;

pub struct AccountRepository {
    client: Arc<RestClient>,
}

impl AccountRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        AccountRepository { client }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    /// The store answers account lookups with an array wrapper even for a
    /// single match.
    async fn get_by_id(&self, account_id: &str) -> Result<Account> {
        let matches: Vec<Account> = self
            .client
            .get_json("/accounts", &[("id", account_id)])
            .await?;
        matches
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("account {}", account_id)).into())
    }

    async fn list(&self) -> Result<Vec<Account>> {
        Ok(self.client.get_json("/accounts", &[]).await?)
    }

    async fn update(&self, account_update: AccountUpdate) -> Result<Account> {
        let path = format!("/accounts/{}", account_update.id);
        Ok(self.client.put_json(&path, &account_update).await?)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use digibank_core::accounts::{Account, AccountUpdate};

    #[test]
    fn test_decodes_array_wrapped_lookup() {
        let payload = r#"[{"id": "acc-1", "name": "Checking", "balance": 1000.5}]"#;
        let matches: Vec<Account> = serde_json::from_str(payload).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].balance, dec!(1000.5));
    }

    #[test]
    fn test_update_body_serializes_balance_as_float() {
        let update = AccountUpdate {
            id: "acc-1".to_string(),
            name: "Checking".to_string(),
            balance: dec!(900.25),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json["balance"].is_f64());
        assert_eq!(json["name"], "Checking");
    }
}
