//! Expense CLI commands (add, update, delete)

use crate::display::format_expense_line;
use crate::error::{SpeseError, SpeseResult};
use crate::models::{ExpensePatch, Money};
use crate::services::ExpenseService;
use crate::storage::Storage;

fn parse_amount(s: &str) -> SpeseResult<Money> {
    Money::parse(s).map_err(|e| SpeseError::Validation(e.to_string()))
}

/// Handle `spese add <name> <amount> [category]`
pub fn handle_add_command(
    storage: &mut Storage,
    name: &str,
    amount: &str,
    category: Option<&str>,
) -> SpeseResult<()> {
    let amount = parse_amount(amount)?;

    let mut service = ExpenseService::new(storage);
    let expense = service.add(name, amount, category.unwrap_or(""))?;

    println!("Expense added: {}", format_expense_line(&expense));
    Ok(())
}

/// Handle `spese update <id> --n <name> --a <amount> --c <category>`
pub fn handle_update_command(
    storage: &mut Storage,
    id: u64,
    name: Option<String>,
    amount: Option<String>,
    category: Option<String>,
) -> SpeseResult<()> {
    let patch = ExpensePatch {
        name,
        amount: amount.as_deref().map(parse_amount).transpose()?,
        category,
    };

    let mut service = ExpenseService::new(storage);
    let expense = service.update(id, patch)?;

    println!("Expense updated: {}", format_expense_line(&expense));
    Ok(())
}

/// Handle `spese delete <id>`
pub fn handle_delete_command(storage: &mut Storage, id: u64) -> SpeseResult<()> {
    let mut service = ExpenseService::new(storage);
    service.delete(id)?;

    println!("Expense deleted with id: {}", id);
    Ok(())
}
