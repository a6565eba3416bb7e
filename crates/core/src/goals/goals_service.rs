use chrono::Utc;
use log::{error, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::goals_errors::GoalError;
use super::goals_model::{Goal, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::accounts::AccountServiceTrait;
use crate::errors::{Result, ValidationError};
use crate::transactions::{NewTransaction, TransactionServiceTrait, TRANSACTION_TYPE_GOAL};

/// Service for managing savings goals.
pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
    account_service: Arc<dyn AccountServiceTrait>,
    transaction_service: Arc<dyn TransactionServiceTrait>,
}

impl GoalService {
    /// Creates a new GoalService instance with injected dependencies
    pub fn new(
        repository: Arc<dyn GoalRepositoryTrait>,
        account_service: Arc<dyn AccountServiceTrait>,
        transaction_service: Arc<dyn TransactionServiceTrait>,
    ) -> Self {
        Self {
            repository,
            account_service,
            transaction_service,
        }
    }
}

#[async_trait::async_trait]
impl GoalServiceTrait for GoalService {
    async fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.repository.get_by_id(goal_id).await
    }

    async fn get_goals(&self, account_id: Option<&str>) -> Result<Vec<Goal>> {
        self.repository.list(account_id).await
    }

    /// Creates a new goal with nothing assigned yet
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        self.repository.create(new_goal.into_goal()).await
    }

    /// Updates an existing goal
    async fn update_goal(&self, goal: Goal) -> Result<Goal> {
        self.repository.update(goal).await
    }

    /// Parks `amount` of the owning account's balance against the goal.
    ///
    /// The balance check happens here, before anything is written; the
    /// store does not re-validate it atomically. The goal update is
    /// persisted first and rolled back if recording the GOAL transaction
    /// (which debits the balance) fails, so `assigned` and the balance
    /// only move together.
    async fn assign_to_goal(&self, goal_id: &str, amount: Decimal) -> Result<Goal> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Assignment amount must be greater than zero".to_string(),
            )
            .into());
        }

        let goal = self.repository.get_by_id(goal_id).await?;
        let account = self.account_service.get_account(&goal.account_id).await?;
        if account.balance < amount {
            warn!(
                "Rejecting assignment of {} to goal {}: balance is {}",
                amount, goal_id, account.balance
            );
            return Err(GoalError::InsufficientFunds {
                requested: amount,
                available: account.balance,
            }
            .into());
        }

        let mut updated = goal.clone();
        updated.assigned += amount;
        let persisted = self.repository.update(updated).await?;

        let deposit = NewTransaction {
            id: None,
            account_id: goal.account_id.clone(),
            transaction_type: TRANSACTION_TYPE_GOAL.to_string(),
            amount,
            date: Utc::now().to_rfc3339(),
            description: Some(format!("Assigned to goal {}", goal.name)),
            goal_id: Some(goal.id.clone()),
            investment_id: None,
        };

        match self.transaction_service.add_transaction(deposit, None).await {
            Ok(_) => Ok(persisted),
            Err(e) => {
                // Put the goal back the way we found it before surfacing
                // the failure; otherwise `assigned` would claim funds the
                // balance never gave up.
                if let Err(rollback_err) = self.repository.update(goal).await {
                    error!(
                        "Failed to roll back goal {} after transaction failure: {}",
                        goal_id, rollback_err
                    );
                }
                Err(e)
            }
        }
    }
}
