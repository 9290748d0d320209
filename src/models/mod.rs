//! Core data models for spese

pub mod budget;
pub mod expense;
pub mod money;

pub use budget::{BudgetEntry, BudgetPeriod};
pub use expense::{Expense, ExpensePatch};
pub use money::Money;
