//! Expense model
//!
//! A single recorded outlay with a unique integer id, a unique name, an
//! amount, an optional category and creation/update timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned sequentially starting at 1
    pub id: u64,

    /// Name, unique across all expenses
    pub name: String,

    /// Amount in cents
    pub amount: Money,

    /// Category (may be empty)
    #[serde(default)]
    pub category: String,

    /// When the expense was recorded
    pub created: DateTime<Utc>,

    /// When the expense was last updated, if ever
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Expense {
    /// Create a new expense, stamping `created` with the current time
    pub fn new(id: u64, name: impl Into<String>, amount: Money, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            category: category.into(),
            created: Utc::now(),
            updated: None,
        }
    }
}

/// A partial update to an expense; only supplied fields are overwritten
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
}

impl ExpensePatch {
    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.amount.is_none() && self.category.is_none()
    }
}
