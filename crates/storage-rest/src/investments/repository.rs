use async_trait::async_trait;
use std::sync::Arc;

use digibank_core::investments::{Investment, InvestmentRepositoryTrait};
use digibank_core::Result;

use crate::client::RestClient;

pub struct InvestmentRepository {
    client: Arc<RestClient>,
}

impl InvestmentRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        InvestmentRepository { client }
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InvestmentRepository {
    async fn get_by_id(&self, investment_id: &str) -> Result<Investment> {
        let path = format!("/investments/{}", investment_id);
        Ok(self.client.get_json(&path, &[]).await?)
    }

    async fn list(&self, account_id: Option<&str>) -> Result<Vec<Investment>> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(account_id) = account_id {
            query.push(("accountId", account_id));
        }
        Ok(self.client.get_json("/investments", &query).await?)
    }

    async fn create(&self, investment: Investment) -> Result<Investment> {
        Ok(self.client.post_json("/investments", &investment).await?)
    }

    async fn delete(&self, investment_id: &str) -> Result<()> {
        let path = format!("/investments/{}", investment_id);
        Ok(self.client.delete(&path).await?)
    }
}
