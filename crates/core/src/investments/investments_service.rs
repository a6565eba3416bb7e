use log::warn;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::investments_model::{Investment, NewInvestment};
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::errors::Result;
use crate::transactions::{
    DeleteOutcome, NewTransaction, Transaction, TransactionServiceTrait,
    TRANSACTION_TYPE_INVESTMENT,
};

/// Service for managing investment positions and redemptions.
pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
    transaction_service: Arc<dyn TransactionServiceTrait>,
}

impl InvestmentService {
    /// Creates a new InvestmentService instance with injected dependencies
    pub fn new(
        repository: Arc<dyn InvestmentRepositoryTrait>,
        transaction_service: Arc<dyn TransactionServiceTrait>,
    ) -> Self {
        Self {
            repository,
            transaction_service,
        }
    }
}

#[async_trait::async_trait]
impl InvestmentServiceTrait for InvestmentService {
    async fn get_investments(&self, account_id: Option<&str>) -> Result<Vec<Investment>> {
        self.repository.list(account_id).await
    }

    /// Creates the position first, then the linked INVESTMENT transaction.
    ///
    /// If recording the transaction fails the position is removed again so
    /// the account is not left holding an investment its balance never
    /// paid for.
    async fn create_investment(
        &self,
        new_investment: NewInvestment,
    ) -> Result<(Investment, Transaction)> {
        new_investment.validate()?;
        let investment = new_investment.into_investment()?;
        let investment = self.repository.create(investment).await?;

        let debit = NewTransaction {
            id: None,
            account_id: investment.account_id.clone(),
            transaction_type: TRANSACTION_TYPE_INVESTMENT.to_string(),
            amount: investment.amount,
            date: investment.date.to_rfc3339(),
            description: investment.description.clone(),
            goal_id: investment.goal_id.clone(),
            investment_id: Some(investment.id.clone()),
        };

        match self.transaction_service.add_transaction(debit, None).await {
            Ok(transaction) => Ok((investment, transaction)),
            Err(e) => {
                if let Err(cleanup_err) = self.repository.delete(&investment.id).await {
                    warn!(
                        "Failed to remove investment {} after transaction failure: {}",
                        investment.id, cleanup_err
                    );
                }
                Err(e)
            }
        }
    }

    async fn redeem_investment(
        &self,
        transaction_id: &str,
        logged_account_id: &str,
    ) -> DeleteOutcome {
        self.transaction_service
            .delete_investment_transaction(transaction_id, logged_account_id)
            .await
    }

    async fn redeem_all(&self, account_id: &str) -> Result<Decimal> {
        self.transaction_service
            .redeem_all_investments(account_id)
            .await
    }
}
