use async_trait::async_trait;
use rust_decimal::Decimal;

use super::goals_model::{Goal, NewGoal};
use crate::Result;

/// Trait defining the contract for goal record-store operations.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    async fn get_by_id(&self, goal_id: &str) -> Result<Goal>;
    async fn list(&self, account_id: Option<&str>) -> Result<Vec<Goal>>;
    async fn create(&self, goal: Goal) -> Result<Goal>;
    async fn update(&self, goal: Goal) -> Result<Goal>;
    async fn delete(&self, goal_id: &str) -> Result<()>;
}

/// Trait defining the contract for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    async fn get_goals(&self, account_id: Option<&str>) -> Result<Vec<Goal>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal: Goal) -> Result<Goal>;

    /// Moves `amount` from the owning account's liquid balance into the
    /// goal's `assigned` total, recording a GOAL transaction.
    async fn assign_to_goal(&self, goal_id: &str, amount: Decimal) -> Result<Goal>;
}
