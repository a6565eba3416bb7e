use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::accounts_model::{Account, AccountUpdate};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::constants::BALANCE_DECIMAL_PRECISION;
use crate::errors::Result;

/// Service for managing accounts and their balances.
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
    /// Serializes balance read-modify-write cycles within this process.
    ///
    /// The record store itself offers no compare-and-swap, so two separate
    /// processes can still interleave a get-then-put and lose an update;
    /// this gate only guarantees that mutations issued through one service
    /// instance are applied one at a time.
    balance_gate: Mutex<()>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self {
            repository,
            balance_gate: Mutex::new(()),
        }
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    /// Retrieves an account by its ID
    async fn get_account(&self, account_id: &str) -> Result<Account> {
        self.repository.get_by_id(account_id).await
    }

    /// Lists all accounts
    async fn get_all_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list().await
    }

    /// Updates an existing account
    async fn update_account(&self, account_update: AccountUpdate) -> Result<Account> {
        account_update.validate()?;
        self.repository.update(account_update).await
    }

    async fn apply_balance_delta(&self, account_id: &str, delta: Decimal) -> Result<Account> {
        let _guard = self.balance_gate.lock().await;

        let account = self.repository.get_by_id(account_id).await?;
        let new_balance = (account.balance + delta).round_dp(BALANCE_DECIMAL_PRECISION);
        debug!(
            "Applying balance delta {} to account {}: {} -> {}",
            delta, account_id, account.balance, new_balance
        );

        self.repository
            .update(AccountUpdate {
                id: account.id,
                name: account.name,
                balance: new_balance,
            })
            .await
    }
}
