//! Service assembly over the REST record stores.
//!
//! Frontends hold one `RestServiceContext` and call the core service
//! traits; all repository wiring lives here.

use std::sync::Arc;

use digibank_core::accounts::{AccountService, AccountServiceTrait};
use digibank_core::goals::{GoalService, GoalServiceTrait};
use digibank_core::investments::{InvestmentService, InvestmentServiceTrait};
use digibank_core::transactions::{TransactionService, TransactionServiceTrait};

use crate::accounts::AccountRepository;
use crate::attachments::AttachmentRepository;
use crate::client::RestClient;
use crate::config::RestStoreConfig;
use crate::goals::GoalRepository;
use crate::investments::InvestmentRepository;
use crate::transactions::TransactionRepository;

pub struct RestServiceContext {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub investment_service: Arc<dyn InvestmentServiceTrait>,
}

impl RestServiceContext {
    pub fn new(config: RestStoreConfig) -> Self {
        let client = Arc::new(RestClient::new(&config));

        let account_repository = Arc::new(AccountRepository::new(client.clone()));
        let transaction_repository = Arc::new(TransactionRepository::new(client.clone()));
        let goal_repository = Arc::new(GoalRepository::new(client.clone()));
        let investment_repository = Arc::new(InvestmentRepository::new(client.clone()));
        let attachment_repository = Arc::new(AttachmentRepository::new(client));

        let account_service: Arc<dyn AccountServiceTrait> =
            Arc::new(AccountService::new(account_repository));

        let transaction_service: Arc<dyn TransactionServiceTrait> =
            Arc::new(TransactionService::new(
                transaction_repository,
                account_service.clone(),
                goal_repository.clone(),
                investment_repository.clone(),
                attachment_repository,
            ));

        let goal_service: Arc<dyn GoalServiceTrait> = Arc::new(GoalService::new(
            goal_repository,
            account_service.clone(),
            transaction_service.clone(),
        ));

        let investment_service: Arc<dyn InvestmentServiceTrait> = Arc::new(
            InvestmentService::new(investment_repository, transaction_service.clone()),
        );

        Self {
            account_service,
            transaction_service,
            goal_service,
            investment_service,
        }
    }

    /// Assembles the context from environment configuration.
    pub fn from_env() -> Self {
        Self::new(RestStoreConfig::from_env())
    }
}
