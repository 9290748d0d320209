//! Terminal display formatting

pub mod expense;

pub use expense::{format_expense_line, format_expense_table};
