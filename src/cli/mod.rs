//! CLI command handlers
//!
//! One handler per command; each loads nothing itself, works against an
//! already-loaded [`Storage`](crate::storage::Storage) and prints its result.

pub mod budget;
pub mod expense;
pub mod list;

pub use budget::{handle_budget_command, BudgetArgs};
pub use expense::{handle_add_command, handle_delete_command, handle_update_command};
pub use list::{handle_list_command, ListArgs};
