use async_trait::async_trait;
use rust_decimal::Decimal;

use super::investments_model::{Investment, NewInvestment};
use crate::transactions::{DeleteOutcome, Transaction};
use crate::Result;

/// Trait defining the contract for investment record-store operations.
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    async fn get_by_id(&self, investment_id: &str) -> Result<Investment>;
    async fn list(&self, account_id: Option<&str>) -> Result<Vec<Investment>>;
    async fn create(&self, investment: Investment) -> Result<Investment>;
    async fn delete(&self, investment_id: &str) -> Result<()>;
}

/// Trait defining the contract for investment service operations.
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    async fn get_investments(&self, account_id: Option<&str>) -> Result<Vec<Investment>>;

    /// Creates the investment position and the INVESTMENT transaction
    /// that debits the liquid balance for it.
    async fn create_investment(
        &self,
        new_investment: NewInvestment,
    ) -> Result<(Investment, Transaction)>;

    /// Reverses a single investment via its linked transaction.
    async fn redeem_investment(
        &self,
        transaction_id: &str,
        logged_account_id: &str,
    ) -> DeleteOutcome;

    /// Reverses every investment owned by the account; returns the total
    /// amount credited back.
    async fn redeem_all(&self, account_id: &str) -> Result<Decimal>;
}
