use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Domain model representing an account in the system.
///
/// The balance is the running sum of all income-type transaction amounts
/// minus all expense-type amounts, maintained incrementally by the
/// services rather than recomputed from the statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub balance: Decimal,
}

/// Input model for updating an existing account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub id: String,
    pub name: String,
    pub balance: Decimal,
}

impl AccountUpdate {
    /// Validates the account update data
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

impl From<Account> for AccountUpdate {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            balance: account.balance,
        }
    }
}
