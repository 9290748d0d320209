//! Expense service
//!
//! Ties expense CRUD to the budget ledger. Each operation mutates both
//! repositories in memory and persists them together at the end, so a
//! rejected operation leaves nothing on disk.

use chrono::Datelike;

use crate::error::SpeseResult;
use crate::models::{Expense, ExpensePatch, Money};
use crate::services::BudgetLedger;
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense, charging it against the budget.
    ///
    /// Fails with DuplicateName if the name is taken and with BudgetExceeded
    /// if any budget entry for the current month or the year cannot absorb
    /// the amount.
    pub fn add(&mut self, name: &str, amount: Money, category: &str) -> SpeseResult<Expense> {
        let month = chrono::Utc::now().month();

        let mut ledger = BudgetLedger::new(&mut self.storage.budget);
        ledger.check_capacity(month, amount)?;

        let expense = self.storage.expenses.add(name, amount, category)?;

        let mut ledger = BudgetLedger::new(&mut self.storage.budget);
        ledger.apply(month, amount)?;

        self.storage.save_all()?;
        Ok(expense)
    }

    /// Update an expense; an amount change moves the difference through the
    /// budget entries of the month the expense was recorded in.
    pub fn update(&mut self, id: u64, patch: ExpensePatch) -> SpeseResult<Expense> {
        let old_amount = patch.amount.map(|_| {
            self.storage.expenses.get(id).map(|e| (e.amount, e.created.month()))
        });

        let expense = self.storage.expenses.update(id, patch)?;

        // Charge or refund the amount difference
        if let Some(Some((old, month))) = old_amount {
            let delta = expense.amount - old;
            if !delta.is_zero() {
                let mut ledger = BudgetLedger::new(&mut self.storage.budget);
                ledger.apply(month, delta)?;
            }
        }

        self.storage.save_all()?;
        Ok(expense)
    }

    /// Delete an expense, restoring its amount to the budget
    pub fn delete(&mut self, id: u64) -> SpeseResult<Expense> {
        let expense = self.storage.expenses.delete(id)?;

        let mut ledger = BudgetLedger::new(&mut self.storage.budget);
        ledger.restore(expense.created.month(), expense.amount)?;

        self.storage.save_all()?;
        Ok(expense)
    }
}
