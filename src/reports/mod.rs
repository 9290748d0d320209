//! Reporting over the expense list
//!
//! Pure filtering and aggregation; rendering lives in `display`.

use chrono::Datelike;

use crate::error::{SpeseError, SpeseResult};
use crate::models::{Expense, Money};

/// Sum of all expense amounts
pub fn summary(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of amounts for expenses recorded in the given calendar month and year.
///
/// Fails with a validation error if `month` is outside 1-12; no aggregation
/// is performed in that case.
pub fn by_month(expenses: &[Expense], month: u32, year: i32) -> SpeseResult<Money> {
    if !(1..=12).contains(&month) {
        return Err(SpeseError::Validation(format!(
            "Please provide a valid month (1-12), got {}",
            month
        )));
    }

    Ok(expenses
        .iter()
        .filter(|e| e.created.month() == month && e.created.year() == year)
        .map(|e| e.amount)
        .sum())
}

/// Expenses whose category matches, case-insensitively
pub fn by_category<'a>(expenses: &'a [Expense], category: &str) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| e.category.eq_ignore_ascii_case(category))
        .collect()
}
