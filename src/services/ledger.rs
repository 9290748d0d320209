//! Budget ledger
//!
//! The rules that keep budget entries consistent as expenses change. An
//! expense recorded in month `m` is charged against the entry for month `m`
//! and against the yearly entry, if either exists. No entry's remaining
//! amount may ever be driven below zero; an operation that would do so is
//! rejected as a whole and nothing is modified.

use crate::error::{SpeseError, SpeseResult};
use crate::models::{BudgetEntry, BudgetPeriod, Money};
use crate::storage::BudgetRepository;

/// Ledger over the persisted budget entries
pub struct BudgetLedger<'a> {
    budget: &'a mut BudgetRepository,
}

impl<'a> BudgetLedger<'a> {
    /// Create a new ledger over a budget repository
    pub fn new(budget: &'a mut BudgetRepository) -> Self {
        Self { budget }
    }

    /// Set (upsert) the ceiling for a month or for the year
    pub fn set(&mut self, period: BudgetPeriod, amount: Money) -> SpeseResult<BudgetEntry> {
        if amount.is_negative() {
            return Err(SpeseError::Validation(format!(
                "Budget amount must not be negative: {}",
                amount
            )));
        }
        Ok(self.budget.upsert(period, amount).clone())
    }

    /// Check that every entry covering `month` can absorb `amount`.
    ///
    /// The comparison is the literal `remaining < amount` per entry, not a
    /// cumulative total across entries.
    pub fn check_capacity(&self, month: u32, amount: Money) -> SpeseResult<()> {
        for entry in self.budget.all() {
            if entry.period.matches_month(month) && entry.remaining < amount {
                return Err(SpeseError::BudgetExceeded {
                    period: entry.period.to_string(),
                    remaining: entry.remaining.to_string(),
                    needed: amount.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Subtract `delta` from every entry covering `month`.
    ///
    /// A negative `delta` restores budget. Verified against all matching
    /// entries before any is touched, so a failure modifies nothing.
    pub fn apply(&mut self, month: u32, delta: Money) -> SpeseResult<()> {
        for entry in self.budget.all() {
            if entry.period.matches_month(month)
                && entry.remaining.checked_sub_to_zero(delta).is_none()
            {
                return Err(SpeseError::BudgetExceeded {
                    period: entry.period.to_string(),
                    remaining: entry.remaining.to_string(),
                    needed: delta.to_string(),
                });
            }
        }

        for entry in self.budget.all_mut() {
            if entry.period.matches_month(month) {
                entry.remaining -= delta;
            }
        }
        Ok(())
    }

    /// Add `amount` back to every entry covering `month` (delete path)
    pub fn restore(&mut self, month: u32, amount: Money) -> SpeseResult<()> {
        self.apply(month, -amount)
    }
}
