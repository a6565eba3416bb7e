use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::investments_errors::InvestmentError;
use crate::errors::ValidationError;
use crate::transactions::{parse_transaction_date, timestamp_format};

/// Domain model representing an investment position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub account_id: String,
    /// The store names this field `type`; Rust cannot.
    #[serde(rename = "type")]
    pub investment_type: String,
    pub amount: Decimal,
    #[serde(with = "timestamp_format")]
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redeemed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_return: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
}

/// Input model for creating a new investment
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub id: Option<String>,
    pub account_id: String,
    #[serde(rename = "type")]
    pub investment_type: String,
    pub amount: Decimal,
    pub date: String,
    pub description: Option<String>,
    pub goal_id: Option<String>,
    pub expected_return: Option<Decimal>,
    pub risk_level: Option<String>,
}

impl NewInvestment {
    /// Validates the new investment data
    pub fn validate(&self) -> crate::Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(ValidationError::MissingField("accountId".to_string()).into());
        }
        InvestmentType::from_str(&self.investment_type)
            .map_err(|_| InvestmentError::UnknownType(self.investment_type.clone()))?;
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Investment amount must be greater than zero".to_string(),
            )
            .into());
        }
        parse_transaction_date(&self.date)?;
        Ok(())
    }

    /// Builds the persistable record, stamping a fresh id when none was
    /// supplied and resolving the date string.
    pub fn into_investment(self) -> crate::Result<Investment> {
        let date = parse_transaction_date(&self.date)?;
        Ok(Investment {
            id: self
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            account_id: self.account_id,
            investment_type: self.investment_type,
            amount: self.amount,
            date,
            description: self.description,
            goal_id: self.goal_id,
            redeemed: None,
            expected_return: self.expected_return,
            risk_level: self.risk_level,
        })
    }
}

/// Enum representing different types of investment products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvestmentType {
    Funds,
    Treasury,
    Pension,
    Stocks,
}

impl InvestmentType {
    pub fn as_str(&self) -> &'static str {
        use crate::investments::investments_constants::*;
        match self {
            InvestmentType::Funds => INVESTMENT_TYPE_FUNDS,
            InvestmentType::Treasury => INVESTMENT_TYPE_TREASURY,
            InvestmentType::Pension => INVESTMENT_TYPE_PENSION,
            InvestmentType::Stocks => INVESTMENT_TYPE_STOCKS,
        }
    }
}

impl FromStr for InvestmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use crate::investments::investments_constants::*;
        match s {
            s if s == INVESTMENT_TYPE_FUNDS => Ok(InvestmentType::Funds),
            s if s == INVESTMENT_TYPE_TREASURY => Ok(InvestmentType::Treasury),
            s if s == INVESTMENT_TYPE_PENSION => Ok(InvestmentType::Pension),
            s if s == INVESTMENT_TYPE_STOCKS => Ok(InvestmentType::Stocks),
            _ => Err(format!("Unknown investment type: {}", s)),
        }
    }
}
