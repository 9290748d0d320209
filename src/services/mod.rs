//! Business logic layer for spese

pub mod expense;
pub mod ledger;

pub use expense::ExpenseService;
pub use ledger::BudgetLedger;
