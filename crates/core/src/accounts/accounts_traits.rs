use async_trait::async_trait;
use rust_decimal::Decimal;

use super::accounts_model::{Account, AccountUpdate};
use crate::Result;

/// Trait defining the contract for account record-store operations.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    async fn get_by_id(&self, account_id: &str) -> Result<Account>;
    async fn list(&self) -> Result<Vec<Account>>;
    async fn update(&self, account_update: AccountUpdate) -> Result<Account>;
}

/// Trait defining the contract for account service operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn get_account(&self, account_id: &str) -> Result<Account>;
    async fn get_all_accounts(&self) -> Result<Vec<Account>>;
    async fn update_account(&self, account_update: AccountUpdate) -> Result<Account>;

    /// Applies a signed delta to the account balance and persists the
    /// result. This is the single balance-mutation chokepoint; every
    /// transaction, goal, and investment operation funnels through it.
    async fn apply_balance_delta(&self, account_id: &str, delta: Decimal) -> Result<Account>;
}
