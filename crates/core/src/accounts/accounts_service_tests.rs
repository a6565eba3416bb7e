#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use crate::accounts::{
        Account, AccountRepositoryTrait, AccountService, AccountServiceTrait, AccountUpdate,
    };
    use crate::errors::{Error, Result, StoreError};

    // --- Mock AccountRepository ---
    #[derive(Clone)]
    struct MockAccountRepository {
        accounts: Arc<Mutex<HashMap<String, Account>>>,
    }

    impl MockAccountRepository {
        fn new() -> Self {
            Self {
                accounts: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        fn add_account(&self, account: Account) {
            self.accounts
                .lock()
                .unwrap()
                .insert(account.id.clone(), account);
        }
    }

    #[async_trait]
    impl AccountRepositoryTrait for MockAccountRepository {
        async fn get_by_id(&self, account_id: &str) -> Result<Account> {
            self.accounts
                .lock()
                .unwrap()
                .get(account_id)
                .cloned()
                .ok_or_else(|| Error::Store(StoreError::NotFound(account_id.to_string())))
        }

        async fn list(&self) -> Result<Vec<Account>> {
            Ok(self.accounts.lock().unwrap().values().cloned().collect())
        }

        async fn update(&self, account_update: AccountUpdate) -> Result<Account> {
            let mut accounts = self.accounts.lock().unwrap();
            if !accounts.contains_key(&account_update.id) {
                return Err(Error::Store(StoreError::NotFound(account_update.id)));
            }
            let account = Account {
                id: account_update.id.clone(),
                name: account_update.name,
                balance: account_update.balance,
            };
            accounts.insert(account_update.id, account.clone());
            Ok(account)
        }
    }

    fn checking_account() -> Account {
        Account {
            id: "acc-1".to_string(),
            name: "Checking".to_string(),
            balance: dec!(1000),
        }
    }

    #[tokio::test]
    async fn test_apply_balance_delta_credits_and_debits() {
        let repository = Arc::new(MockAccountRepository::new());
        repository.add_account(checking_account());
        let service = AccountService::new(repository.clone());

        let account = service.apply_balance_delta("acc-1", dec!(200)).await.unwrap();
        assert_eq!(account.balance, dec!(1200));

        let account = service.apply_balance_delta("acc-1", dec!(-300)).await.unwrap();
        assert_eq!(account.balance, dec!(900));
    }

    #[tokio::test]
    async fn test_apply_balance_delta_rounds_to_cents() {
        let repository = Arc::new(MockAccountRepository::new());
        repository.add_account(checking_account());
        let service = AccountService::new(repository);

        let account = service
            .apply_balance_delta("acc-1", dec!(0.005))
            .await
            .unwrap();
        assert_eq!(account.balance, dec!(1000.00));
    }

    #[tokio::test]
    async fn test_apply_balance_delta_missing_account() {
        let repository = Arc::new(MockAccountRepository::new());
        let service = AccountService::new(repository);

        let result = service.apply_balance_delta("ghost", dec!(10)).await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_concurrent_deltas_are_serialized() {
        let repository = Arc::new(MockAccountRepository::new());
        repository.add_account(checking_account());
        let service = Arc::new(AccountService::new(repository));

        let mut handles = Vec::new();
        for _ in 0..10 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.apply_balance_delta("acc-1", dec!(10)).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let account = service.get_account("acc-1").await.unwrap();
        assert_eq!(account.balance, dec!(1100));
    }

    #[tokio::test]
    async fn test_update_account_validates_input() {
        let repository = Arc::new(MockAccountRepository::new());
        repository.add_account(checking_account());
        let service = AccountService::new(repository);

        let result = service
            .update_account(AccountUpdate {
                id: "acc-1".to_string(),
                name: "  ".to_string(),
                balance: dec!(1),
            })
            .await;
        assert!(matches!(result.unwrap_err(), Error::Validation(_)));
    }
}
