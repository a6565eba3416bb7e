use async_trait::async_trait;
use std::sync::Arc;

use digibank_core::goals::{Goal, GoalRepositoryTrait};
use digibank_core::Result;

use crate::client::RestClient;

pub struct GoalRepository {
    client: Arc<RestClient>,
}

impl GoalRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        GoalRepository { client }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    async fn get_by_id(&self, goal_id: &str) -> Result<Goal> {
        let path = format!("/goals/{}", goal_id);
        Ok(self.client.get_json(&path, &[]).await?)
    }

    async fn list(&self, account_id: Option<&str>) -> Result<Vec<Goal>> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(account_id) = account_id {
            query.push(("accountId", account_id));
        }
        Ok(self.client.get_json("/goals", &query).await?)
    }

    async fn create(&self, goal: Goal) -> Result<Goal> {
        Ok(self.client.post_json("/goals", &goal).await?)
    }

    /// Goal rows are patched with the full body; the store merges it over
    /// the existing record.
    async fn update(&self, goal: Goal) -> Result<Goal> {
        let path = format!("/goals/{}", goal.id);
        Ok(self.client.patch_json(&path, &goal).await?)
    }

    async fn delete(&self, goal_id: &str) -> Result<()> {
        let path = format!("/goals/{}", goal_id);
        Ok(self.client.delete(&path).await?)
    }
}
