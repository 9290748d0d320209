//! Expense display formatting
//!
//! Renders expenses as a table for the `list` views. Money picks up its
//! currency symbol here, at the presentation boundary.

use tabled::{Table, Tabled};

use crate::models::Expense;

/// One row of the expense table
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Id")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            name: expense.name.clone(),
            amount: expense.amount.to_string(),
            category: expense.category.clone(),
            created: expense.created.format("%Y-%m-%d").to_string(),
            updated: expense
                .updated
                .map(|u| u.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Format a set of expenses as a table
pub fn format_expense_table<'a, I>(expenses: I) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let rows: Vec<ExpenseRow> = expenses.into_iter().map(ExpenseRow::from).collect();
    if rows.is_empty() {
        return "No expenses found.".to_string();
    }
    Table::new(rows).to_string()
}

/// Format a single expense on one line (add/update/delete confirmations)
pub fn format_expense_line(expense: &Expense) -> String {
    let category = if expense.category.is_empty() {
        String::new()
    } else {
        format!(" [{}]", expense.category)
    };
    format!(
        "#{} {} {}{}",
        expense.id, expense.name, expense.amount, category
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_empty_table() {
        let empty: Vec<Expense> = Vec::new();
        assert_eq!(format_expense_table(&empty), "No expenses found.");
    }

    #[test]
    fn test_table_contains_fields() {
        let expense = Expense::new(1, "coffee", Money::from_cents(500), "food");
        let table = format_expense_table([&expense]);

        assert!(table.contains("coffee"));
        assert!(table.contains("$5.00"));
        assert!(table.contains("food"));
        assert!(table.contains("Amount"));
    }

    #[test]
    fn test_expense_line() {
        let expense = Expense::new(3, "coffee", Money::from_cents(500), "food");
        assert_eq!(format_expense_line(&expense), "#3 coffee $5.00 [food]");

        let plain = Expense::new(4, "bus", Money::from_cents(250), "");
        assert_eq!(format_expense_line(&plain), "#4 bus $2.50");
    }
}
