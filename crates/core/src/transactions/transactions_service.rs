use log::{debug, error, warn};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

use super::transactions_constants::{TRANSACTION_TYPE_GOAL, TRANSACTION_TYPE_INVESTMENT};
use super::transactions_errors::TransactionError;
use super::transactions_model::{
    DeleteOutcome, NewTransaction, Transaction, TransactionType, TransactionUpdate,
};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::accounts::AccountServiceTrait;
use crate::attachments::{AttachmentError, AttachmentFile, AttachmentRepositoryTrait};
use crate::errors::Result;
use crate::goals::GoalRepositoryTrait;
use crate::investments::InvestmentRepositoryTrait;

/// Service orchestrating transaction mutations.
///
/// Every create, edit, and delete keeps three things mutually consistent:
/// the transaction record, the owning account's balance, and - for GOAL
/// and INVESTMENT rows - the linked goal or investment record. The record
/// stores offer no transactions, so the ordering of the individual writes
/// is what carries the consistency guarantees; see the per-method docs.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
    account_service: Arc<dyn AccountServiceTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    attachment_repository: Arc<dyn AttachmentRepositoryTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance with injected dependencies
    pub fn new(
        repository: Arc<dyn TransactionRepositoryTrait>,
        account_service: Arc<dyn AccountServiceTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        attachment_repository: Arc<dyn AttachmentRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            account_service,
            goal_repository,
            investment_repository,
            attachment_repository,
        }
    }

    async fn upload_attachment(
        &self,
        file: AttachmentFile,
        transaction_type: &str,
    ) -> Result<String> {
        let stored = self
            .attachment_repository
            .upload(file, transaction_type)
            .await
            .map_err(|e| AttachmentError::UploadFailed(e.to_string()))?;
        Ok(stored.file_path)
    }

    /// Best-effort removal of a stored attachment; failures are logged,
    /// never surfaced.
    async fn discard_attachment(&self, attachment_path: &str) {
        let file_name = attachment_path
            .rsplit('/')
            .next()
            .unwrap_or(attachment_path);
        if let Err(e) = self.attachment_repository.delete(file_name).await {
            warn!("Failed to delete attachment {}: {}", file_name, e);
        }
    }

    /// Credits the balance and unwinds the linked goal's `assigned` total
    /// for a GOAL transaction about to be deleted. The money was parked,
    /// not spent, so deletion returns it to the liquid balance.
    async fn unwind_goal_transaction(&self, transaction: &Transaction) -> Result<()> {
        self.account_service
            .apply_balance_delta(&transaction.account_id, transaction.amount)
            .await?;

        if let Some(goal_id) = &transaction.goal_id {
            match self.goal_repository.get_by_id(goal_id).await {
                Ok(mut goal) => {
                    goal.assigned = (goal.assigned - transaction.amount).max(Decimal::ZERO);
                    self.goal_repository.update(goal).await?;
                }
                Err(e) if e.is_not_found() => {
                    // The goal is already gone (e.g. mid-cascade); the
                    // balance credit above is still correct.
                    debug!(
                        "Goal {} not found while deleting transaction {}",
                        goal_id, transaction.id
                    );
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.repository.get_by_id(transaction_id).await
    }

    async fn get_transactions(&self, account_id: &str) -> Result<Vec<Transaction>> {
        self.repository.list(Some(account_id), None).await
    }

    async fn get_transactions_by_type(
        &self,
        account_id: &str,
        transaction_type: &str,
    ) -> Result<Vec<Transaction>> {
        self.repository
            .list(Some(account_id), Some(transaction_type))
            .await
    }

    /// Creates a transaction and applies its balance effect.
    ///
    /// The attachment is uploaded first: an upload failure aborts before
    /// any record exists. The inverse is not rolled back - if the record
    /// write fails after a successful upload, the file is left behind on
    /// the attachment store.
    async fn add_transaction(
        &self,
        new_transaction: NewTransaction,
        attachment: Option<AttachmentFile>,
    ) -> Result<Transaction> {
        new_transaction.validate()?;

        let attachment_path = match attachment {
            Some(file) => Some(
                self.upload_attachment(file, &new_transaction.transaction_type)
                    .await?,
            ),
            None => None,
        };

        let transaction = new_transaction.into_transaction(attachment_path)?;
        if let Err(e) = self.repository.create(transaction.clone()).await {
            if let Some(path) = &transaction.attachment_path {
                warn!(
                    "Transaction create failed after upload; orphaned attachment at {}",
                    path
                );
            }
            return Err(e);
        }

        let effect = transaction.signed_effect()?;
        if let Err(e) = self
            .account_service
            .apply_balance_delta(&transaction.account_id, effect)
            .await
        {
            // The record is committed at this point; the balance is left
            // for reconciliation rather than deleting the record again.
            error!(
                "Balance update failed after creating transaction {}: {}",
                transaction.id, e
            );
            return Err(e);
        }

        debug!(
            "Created {} transaction {} for account {}",
            transaction.transaction_type, transaction.id, transaction.account_id
        );
        Ok(transaction)
    }

    /// Edits a transaction in place and applies the net balance change.
    ///
    /// The net change is `new_effect - old_effect`, both signed by type:
    /// editing a DEPOSIT of 100 into a WITHDRAWAL of 100 moves the balance
    /// by -200. The delta always lands on the transaction's original
    /// account; edits do not re-home transactions.
    async fn update_transaction(
        &self,
        update: TransactionUpdate,
        attachment: Option<AttachmentFile>,
    ) -> Result<Transaction> {
        let existing = match self.repository.get_by_id(&update.id).await {
            Ok(t) => t,
            Err(e) if e.is_not_found() => {
                return Err(TransactionError::NotFound(update.id.clone()).into())
            }
            Err(e) => return Err(e),
        };
        update.validate()?;

        let mut attachment_path = existing.attachment_path.clone();
        if let Some(file) = attachment {
            let new_path = self
                .upload_attachment(file, &update.transaction_type)
                .await?;
            if let Some(old_path) = &existing.attachment_path {
                self.discard_attachment(old_path).await;
            }
            attachment_path = Some(new_path);
        }

        let updated = Transaction {
            id: existing.id.clone(),
            account_id: existing.account_id.clone(),
            transaction_type: update.transaction_type,
            amount: update.amount,
            date: super::transactions_model::parse_transaction_date(&update.date)?,
            description: update.description,
            attachment_path,
            goal_id: update.goal_id,
            investment_id: update.investment_id,
        };

        let old_effect = existing.signed_effect()?;
        let new_effect = updated.signed_effect()?;
        let net_change = new_effect - old_effect;
        if !net_change.is_zero() {
            self.account_service
                .apply_balance_delta(&existing.account_id, net_change)
                .await?;
        }

        self.repository.update(updated).await
    }

    /// Removes a transaction, reversing its balance effect first.
    ///
    /// This path never fails the caller: whatever happens, the UI gets a
    /// `DeleteOutcome` to render. GOAL rows additionally return the parked
    /// amount from the linked goal's `assigned` total. The record itself
    /// is deleted last, so a failure there leaves the balance consistent
    /// and only the record orphaned.
    async fn delete_transaction(&self, transaction_id: &str) -> DeleteOutcome {
        let transaction = match self.repository.get_by_id(transaction_id).await {
            Ok(t) => t,
            Err(e) if e.is_not_found() => return DeleteOutcome::AlreadyGone,
            Err(e) => return DeleteOutcome::Failed(e.to_string()),
        };

        let kind = match TransactionType::from_str(&transaction.transaction_type) {
            Ok(k) => k,
            Err(e) => return DeleteOutcome::Failed(e),
        };

        let adjustment = if kind == TransactionType::Goal {
            self.unwind_goal_transaction(&transaction).await
        } else {
            self.account_service
                .apply_balance_delta(&transaction.account_id, -kind.signed_effect(transaction.amount))
                .await
                .map(|_| ())
        };
        if let Err(e) = adjustment {
            warn!(
                "Balance adjustment failed while deleting transaction {}: {}",
                transaction_id, e
            );
            return DeleteOutcome::Failed(e.to_string());
        }

        if let Some(path) = &transaction.attachment_path {
            self.discard_attachment(path).await;
        }

        match self.repository.delete(transaction_id).await {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) => {
                warn!(
                    "Record deletion failed for transaction {} (balance already adjusted): {}",
                    transaction_id, e
                );
                DeleteOutcome::Failed(e.to_string())
            }
        }
    }

    /// Deletes every GOAL transaction referencing `goal_id`, reusing the
    /// single-transaction path so balance and goal bookkeeping apply per
    /// row. Returns how many rows were actually removed.
    async fn delete_goal_transactions(
        &self,
        goal_id: &str,
        account_id: Option<&str>,
    ) -> Result<usize> {
        let goal_transactions = self
            .repository
            .list(account_id, Some(TRANSACTION_TYPE_GOAL))
            .await?;

        let mut deleted = 0;
        for transaction in goal_transactions
            .into_iter()
            .filter(|t| t.goal_id.as_deref() == Some(goal_id))
        {
            match self.delete_transaction(&transaction.id).await {
                DeleteOutcome::Deleted => deleted += 1,
                outcome => warn!(
                    "Skipped goal transaction {} during cascade: {:?}",
                    transaction.id, outcome
                ),
            }
        }
        Ok(deleted)
    }

    /// Cascades the goal's transactions, refunds whatever `assigned`
    /// remains on the row, and removes the goal record. Any failure
    /// returns `Failed` without attempting partial-state repair.
    async fn delete_goal_and_transactions(
        &self,
        goal_id: &str,
        account_id: &str,
    ) -> DeleteOutcome {
        if let Err(e) = self
            .delete_goal_transactions(goal_id, Some(account_id))
            .await
        {
            return DeleteOutcome::Failed(e.to_string());
        }

        // The cascade decremented `assigned` per transaction; anything
        // left over (drift between the total and its transactions) is
        // still the account's money.
        match self.goal_repository.get_by_id(goal_id).await {
            Ok(goal) => {
                if goal.assigned > Decimal::ZERO {
                    if let Err(e) = self
                        .account_service
                        .apply_balance_delta(account_id, goal.assigned)
                        .await
                    {
                        return DeleteOutcome::Failed(e.to_string());
                    }
                }
            }
            Err(e) if e.is_not_found() => return DeleteOutcome::AlreadyGone,
            Err(e) => return DeleteOutcome::Failed(e.to_string()),
        }

        match self.goal_repository.delete(goal_id).await {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) => DeleteOutcome::Failed(e.to_string()),
        }
    }

    /// Redeems one investment through its transaction.
    ///
    /// Only INVESTMENT rows with a linked investment id, owned by the
    /// calling account, qualify; anything else is `Rejected` rather than
    /// an error. The investment record is removed before the balance is
    /// credited - investment-gone is the precondition for the credit.
    async fn delete_investment_transaction(
        &self,
        transaction_id: &str,
        logged_account_id: &str,
    ) -> DeleteOutcome {
        let transaction = match self.repository.get_by_id(transaction_id).await {
            Ok(t) => t,
            Err(e) if e.is_not_found() => return DeleteOutcome::AlreadyGone,
            Err(e) => return DeleteOutcome::Failed(e.to_string()),
        };

        if transaction.transaction_type != TRANSACTION_TYPE_INVESTMENT {
            return DeleteOutcome::Rejected(format!(
                "Transaction {} is not an investment transaction",
                transaction_id
            ));
        }
        let investment_id = match &transaction.investment_id {
            Some(id) => id.clone(),
            None => {
                return DeleteOutcome::Rejected(format!(
                    "Transaction {} has no linked investment",
                    transaction_id
                ))
            }
        };
        if transaction.account_id != logged_account_id {
            return DeleteOutcome::Rejected(format!(
                "Transaction {} does not belong to account {}",
                transaction_id, logged_account_id
            ));
        }

        if let Err(e) = self.investment_repository.delete(&investment_id).await {
            warn!(
                "Investment {} removal failed; aborting redemption of {}: {}",
                investment_id, transaction_id, e
            );
            return DeleteOutcome::Failed(e.to_string());
        }

        if let Err(e) = self
            .account_service
            .apply_balance_delta(&transaction.account_id, transaction.amount)
            .await
        {
            warn!(
                "Balance credit failed after removing investment {}: {}",
                investment_id, e
            );
            return DeleteOutcome::Failed(e.to_string());
        }

        if let Some(path) = &transaction.attachment_path {
            self.discard_attachment(path).await;
        }

        match self.repository.delete(transaction_id).await {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) => DeleteOutcome::Failed(e.to_string()),
        }
    }

    /// Redeems every investment the account holds. Each redemption is
    /// independent; the returned total reflects only the ones that
    /// succeeded.
    async fn redeem_all_investments(&self, account_id: &str) -> Result<Decimal> {
        let investment_transactions = self
            .repository
            .list(Some(account_id), Some(TRANSACTION_TYPE_INVESTMENT))
            .await?;

        let mut total = Decimal::ZERO;
        for transaction in investment_transactions {
            match self
                .delete_investment_transaction(&transaction.id, account_id)
                .await
            {
                DeleteOutcome::Deleted => total += transaction.amount,
                outcome => warn!(
                    "Skipped investment transaction {} during redeem-all: {:?}",
                    transaction.id, outcome
                ),
            }
        }
        Ok(total)
    }
}
