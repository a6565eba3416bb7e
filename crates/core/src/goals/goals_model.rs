use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::transactions::timestamp_format;

/// Domain model representing a savings goal.
///
/// `assigned` is the running total parked against the goal so far. The
/// store does not cap it at `target_amount`; "achieved" is a derived
/// display notion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub account_id: String,
    pub name: String,
    /// The store calls the target amount `value`.
    #[serde(rename = "value")]
    pub target_amount: Decimal,
    pub assigned: Decimal,
    #[serde(with = "timestamp_format")]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl Goal {
    pub fn is_achieved(&self) -> bool {
        self.assigned >= self.target_amount
    }
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub id: Option<String>,
    pub account_id: String,
    pub name: String,
    #[serde(rename = "value")]
    pub target_amount: Decimal,
    pub deadline: Option<String>,
}

impl NewGoal {
    /// Validates the new goal data
    pub fn validate(&self) -> crate::Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(ValidationError::MissingField("accountId".to_string()).into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidInput(
                "Goal name cannot be empty".to_string(),
            )
            .into());
        }
        if self.target_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Goal target amount must be greater than zero".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Builds the persistable record, stamping a fresh id when none was
    /// supplied. New goals start with nothing assigned.
    pub fn into_goal(self) -> Goal {
        Goal {
            id: self
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            account_id: self.account_id,
            name: self.name,
            target_amount: self.target_amount,
            assigned: Decimal::ZERO,
            created_at: Utc::now(),
            deadline: self.deadline,
        }
    }
}
