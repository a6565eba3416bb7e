use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::transactions::transactions_errors::TransactionError;

/// Domain model representing a transaction in the system
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    /// The store names this field `type`; Rust cannot.
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub amount: Decimal,
    #[serde(with = "timestamp_format")]
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment_id: Option<String>,
}

impl Transaction {
    /// The signed effect this transaction has on its account balance.
    pub fn signed_effect(&self) -> crate::Result<Decimal> {
        let kind = TransactionType::from_str(&self.transaction_type)
            .map_err(|_| TransactionError::UnknownType(self.transaction_type.clone()))?;
        Ok(kind.signed_effect(self.amount))
    }
}

/// Input model for creating a new transaction
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub id: Option<String>,
    pub account_id: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub amount: Decimal,
    pub date: String,
    pub description: Option<String>,
    pub goal_id: Option<String>,
    pub investment_id: Option<String>,
}

impl NewTransaction {
    /// Validates the new transaction data
    pub fn validate(&self) -> crate::Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(ValidationError::MissingField("accountId".to_string()).into());
        }
        TransactionType::from_str(&self.transaction_type)
            .map_err(|_| TransactionError::UnknownType(self.transaction_type.clone()))?;
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Transaction amount must be greater than zero".to_string(),
            )
            .into());
        }
        parse_transaction_date(&self.date)?;
        Ok(())
    }

    /// Builds the persistable record, stamping a fresh id when none was
    /// supplied and resolving the date string.
    pub fn into_transaction(self, attachment_path: Option<String>) -> crate::Result<Transaction> {
        let date = parse_transaction_date(&self.date)?;
        Ok(Transaction {
            id: self
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            account_id: self.account_id,
            transaction_type: self.transaction_type,
            amount: self.amount,
            date,
            description: self.description,
            attachment_path,
            goal_id: self.goal_id,
            investment_id: self.investment_id,
        })
    }
}

/// Input model for updating an existing transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub amount: Decimal,
    pub date: String,
    pub description: Option<String>,
    pub goal_id: Option<String>,
    pub investment_id: Option<String>,
}

impl TransactionUpdate {
    /// Validates the transaction update data
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        TransactionType::from_str(&self.transaction_type)
            .map_err(|_| TransactionError::UnknownType(self.transaction_type.clone()))?;
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Transaction amount must be greater than zero".to_string(),
            )
            .into());
        }
        parse_transaction_date(&self.date)?;
        Ok(())
    }
}

/// Outcome of a delete-style operation.
///
/// Delete paths never surface an `Err`; the caller always gets a stable
/// state to render, but can still distinguish "already gone" from a
/// transient failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record was removed and its balance effect reversed.
    Deleted,
    /// The record did not exist in the first place.
    AlreadyGone,
    /// The record exists but the caller may not remove it.
    Rejected(String),
    /// The removal was attempted and failed.
    Failed(String),
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

/// Enum representing different types of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
    Payment,
    Investment,
    Goal,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        use crate::transactions::transactions_constants::*;
        match self {
            TransactionType::Deposit => TRANSACTION_TYPE_DEPOSIT,
            TransactionType::Withdrawal => TRANSACTION_TYPE_WITHDRAWAL,
            TransactionType::Transfer => TRANSACTION_TYPE_TRANSFER,
            TransactionType::Payment => TRANSACTION_TYPE_PAYMENT,
            TransactionType::Investment => TRANSACTION_TYPE_INVESTMENT,
            TransactionType::Goal => TRANSACTION_TYPE_GOAL,
        }
    }

    /// DEPOSIT is the only income type; everything else drains the
    /// liquid balance, including INVESTMENT and GOAL.
    pub fn is_income(&self) -> bool {
        matches!(self, TransactionType::Deposit)
    }

    pub fn is_expense(&self) -> bool {
        !self.is_income()
    }

    /// The signed delta this type applies to an account balance for a
    /// given (positive) amount.
    pub fn signed_effect(&self, amount: Decimal) -> Decimal {
        if self.is_income() {
            amount
        } else {
            -amount
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use crate::transactions::transactions_constants::*;
        match s {
            s if s == TRANSACTION_TYPE_DEPOSIT => Ok(TransactionType::Deposit),
            s if s == TRANSACTION_TYPE_WITHDRAWAL => Ok(TransactionType::Withdrawal),
            s if s == TRANSACTION_TYPE_TRANSFER => Ok(TransactionType::Transfer),
            s if s == TRANSACTION_TYPE_PAYMENT => Ok(TransactionType::Payment),
            s if s == TRANSACTION_TYPE_INVESTMENT => Ok(TransactionType::Investment),
            s if s == TRANSACTION_TYPE_GOAL => Ok(TransactionType::Goal),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

/// Parses the date formats accepted on transaction input.
pub(crate) fn parse_transaction_date(raw: &str) -> crate::Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        // Use noon UTC for date-only values
        return Ok(DateTime::from_naive_utc_and_offset(
            date.and_hms_opt(12, 0, 0).unwrap_or_default(),
            Utc,
        ));
    }
    Err(ValidationError::InvalidInput(format!(
        "Invalid date format: {}. Expected ISO 8601/RFC3339 or YYYY-MM-DD",
        raw
    ))
    .into())
}

// Custom serialization for timestamps to ensure consistent ISO 8601 formatting
pub(crate) mod timestamp_format {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
            return Ok(dt.with_timezone(&Utc));
        }

        if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            return Ok(Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap_or_default()));
        }

        Err(serde::de::Error::custom(format!(
            "Invalid timestamp format: {}. Expected ISO 8601/RFC3339 or YYYY-MM-DD",
            s
        )))
    }
}
