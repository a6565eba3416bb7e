#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use crate::attachments::AttachmentFile;
    use crate::errors::{Error, Result, StoreError};
    use crate::investments::{
        Investment, InvestmentRepositoryTrait, InvestmentService, InvestmentServiceTrait,
        NewInvestment, INVESTMENT_TYPE_FUNDS,
    };
    use crate::transactions::{
        DeleteOutcome, NewTransaction, Transaction, TransactionServiceTrait, TransactionUpdate,
        TRANSACTION_TYPE_INVESTMENT,
    };

    fn not_found(what: &str) -> Error {
        Error::Store(StoreError::NotFound(what.to_string()))
    }

    // --- Mock InvestmentRepository ---
    #[derive(Clone)]
    struct MockInvestmentRepository {
        investments: Arc<Mutex<HashMap<String, Investment>>>,
    }

    impl MockInvestmentRepository {
        fn new() -> Self {
            Self {
                investments: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        fn count(&self) -> usize {
            self.investments.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl InvestmentRepositoryTrait for MockInvestmentRepository {
        async fn get_by_id(&self, investment_id: &str) -> Result<Investment> {
            self.investments
                .lock()
                .unwrap()
                .get(investment_id)
                .cloned()
                .ok_or_else(|| not_found(investment_id))
        }

        async fn list(&self, account_id: Option<&str>) -> Result<Vec<Investment>> {
            Ok(self
                .investments
                .lock()
                .unwrap()
                .values()
                .filter(|i| account_id.is_none_or(|id| i.account_id == id))
                .cloned()
                .collect())
        }

        async fn create(&self, investment: Investment) -> Result<Investment> {
            self.investments
                .lock()
                .unwrap()
                .insert(investment.id.clone(), investment.clone());
            Ok(investment)
        }

        async fn delete(&self, investment_id: &str) -> Result<()> {
            self.investments
                .lock()
                .unwrap()
                .remove(investment_id)
                .map(|_| ())
                .ok_or_else(|| not_found(investment_id))
        }
    }

    // --- Mock TransactionService ---
    #[derive(Clone)]
    struct MockTransactionService {
        recorded: Arc<Mutex<Vec<NewTransaction>>>,
        fail_add: Arc<AtomicBool>,
    }

    impl MockTransactionService {
        fn new() -> Self {
            Self {
                recorded: Arc::new(Mutex::new(Vec::new())),
                fail_add: Arc::new(AtomicBool::new(false)),
            }
        }

        fn recorded_transactions(&self) -> Vec<NewTransaction> {
            self.recorded.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TransactionServiceTrait for MockTransactionService {
        async fn get_transaction(&self, _transaction_id: &str) -> Result<Transaction> {
            unimplemented!()
        }

        async fn get_transactions(&self, _account_id: &str) -> Result<Vec<Transaction>> {
            unimplemented!()
        }

        async fn get_transactions_by_type(
            &self,
            _account_id: &str,
            _transaction_type: &str,
        ) -> Result<Vec<Transaction>> {
            unimplemented!()
        }

        async fn add_transaction(
            &self,
            new_transaction: NewTransaction,
            _attachment: Option<AttachmentFile>,
        ) -> Result<Transaction> {
            if self.fail_add.load(Ordering::SeqCst) {
                return Err(Error::Store(StoreError::Unavailable(
                    "store down".to_string(),
                )));
            }
            self.recorded.lock().unwrap().push(new_transaction.clone());
            new_transaction.into_transaction(None)
        }

        async fn update_transaction(
            &self,
            _update: TransactionUpdate,
            _attachment: Option<AttachmentFile>,
        ) -> Result<Transaction> {
            unimplemented!()
        }

        async fn delete_transaction(&self, _transaction_id: &str) -> DeleteOutcome {
            unimplemented!()
        }

        async fn delete_goal_transactions(
            &self,
            _goal_id: &str,
            _account_id: Option<&str>,
        ) -> Result<usize> {
            unimplemented!()
        }

        async fn delete_goal_and_transactions(
            &self,
            _goal_id: &str,
            _account_id: &str,
        ) -> DeleteOutcome {
            unimplemented!()
        }

        async fn delete_investment_transaction(
            &self,
            _transaction_id: &str,
            _logged_account_id: &str,
        ) -> DeleteOutcome {
            DeleteOutcome::Deleted
        }

        async fn redeem_all_investments(&self, _account_id: &str) -> Result<Decimal> {
            Ok(dec!(0))
        }
    }

    fn setup() -> (
        InvestmentService,
        MockInvestmentRepository,
        MockTransactionService,
    ) {
        let repository = MockInvestmentRepository::new();
        let transactions = MockTransactionService::new();
        let service = InvestmentService::new(
            Arc::new(repository.clone()),
            Arc::new(transactions.clone()),
        );
        (service, repository, transactions)
    }

    fn new_investment(amount: Decimal) -> NewInvestment {
        NewInvestment {
            id: None,
            account_id: "acc-1".to_string(),
            investment_type: INVESTMENT_TYPE_FUNDS.to_string(),
            amount,
            date: "2024-03-01".to_string(),
            description: Some("index fund".to_string()),
            goal_id: None,
            expected_return: Some(dec!(0.07)),
            risk_level: Some("LOW".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_investment_links_debit_transaction() {
        let (service, repository, transactions) = setup();

        let (investment, transaction) =
            service.create_investment(new_investment(dec!(300))).await.unwrap();

        assert_eq!(repository.count(), 1);
        assert_eq!(transaction.transaction_type, TRANSACTION_TYPE_INVESTMENT);
        assert_eq!(transaction.amount, dec!(300));
        assert_eq!(
            transaction.investment_id.as_deref(),
            Some(investment.id.as_str())
        );

        let recorded = transactions.recorded_transactions();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].account_id, "acc-1");
    }

    #[tokio::test]
    async fn test_create_investment_validates_input() {
        let (service, repository, _) = setup();

        let mut bad_type = new_investment(dec!(300));
        bad_type.investment_type = "CRYPTO".to_string();
        assert!(service.create_investment(bad_type).await.is_err());

        assert!(service
            .create_investment(new_investment(dec!(0)))
            .await
            .is_err());
        assert_eq!(repository.count(), 0);
    }

    #[tokio::test]
    async fn test_create_investment_unwinds_position_when_debit_fails() {
        let (service, repository, transactions) = setup();
        transactions.fail_add.store(true, Ordering::SeqCst);

        let result = service.create_investment(new_investment(dec!(300))).await;

        assert!(result.is_err());
        assert_eq!(repository.count(), 0);
    }

    #[tokio::test]
    async fn test_redeem_all_delegates_to_transaction_service() {
        let (service, _, _) = setup();
        assert_eq!(service.redeem_all("acc-1").await.unwrap(), dec!(0));
    }
}
