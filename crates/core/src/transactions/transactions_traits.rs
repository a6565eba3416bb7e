use async_trait::async_trait;
use rust_decimal::Decimal;

use super::transactions_model::{
    DeleteOutcome, NewTransaction, Transaction, TransactionUpdate,
};
use crate::attachments::AttachmentFile;
use crate::Result;

/// Trait defining the contract for transaction record-store operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    async fn get_by_id(&self, transaction_id: &str) -> Result<Transaction>;
    /// Lists transactions, optionally filtered by owning account and type.
    async fn list(
        &self,
        account_id: Option<&str>,
        transaction_type: Option<&str>,
    ) -> Result<Vec<Transaction>>;
    async fn create(&self, transaction: Transaction) -> Result<Transaction>;
    async fn update(&self, transaction: Transaction) -> Result<Transaction>;
    async fn delete(&self, transaction_id: &str) -> Result<()>;
}

/// Trait defining the contract for transaction mutation operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    async fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;
    async fn get_transactions(&self, account_id: &str) -> Result<Vec<Transaction>>;
    async fn get_transactions_by_type(
        &self,
        account_id: &str,
        transaction_type: &str,
    ) -> Result<Vec<Transaction>>;

    async fn add_transaction(
        &self,
        new_transaction: NewTransaction,
        attachment: Option<AttachmentFile>,
    ) -> Result<Transaction>;
    async fn update_transaction(
        &self,
        update: TransactionUpdate,
        attachment: Option<AttachmentFile>,
    ) -> Result<Transaction>;
    async fn delete_transaction(&self, transaction_id: &str) -> DeleteOutcome;

    async fn delete_goal_transactions(
        &self,
        goal_id: &str,
        account_id: Option<&str>,
    ) -> Result<usize>;
    async fn delete_goal_and_transactions(
        &self,
        goal_id: &str,
        account_id: &str,
    ) -> DeleteOutcome;

    async fn delete_investment_transaction(
        &self,
        transaction_id: &str,
        logged_account_id: &str,
    ) -> DeleteOutcome;
    async fn redeem_all_investments(&self, account_id: &str) -> Result<Decimal>;
}
