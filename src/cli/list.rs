//! List CLI command
//!
//! `spese list` supports several views that may be combined in one call;
//! each supplied flag produces its own output. With no flags the full table
//! is shown.

use chrono::Datelike;
use clap::Args;

use crate::display::format_expense_table;
use crate::error::SpeseResult;
use crate::reports;
use crate::storage::Storage;

/// Arguments for the `list` command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// View all expenses
    #[arg(long)]
    pub all: bool,

    /// Print the sum of all expense amounts
    #[arg(long)]
    pub summary: bool,

    /// Sum of expenses for the given month (1-12)
    #[arg(long)]
    pub month: Option<u32>,

    /// Year for --month (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// View expenses in the given category (case-insensitive)
    #[arg(long)]
    pub category: Option<String>,
}

impl ListArgs {
    fn no_view_selected(&self) -> bool {
        !self.all && !self.summary && self.month.is_none() && self.category.is_none()
    }
}

/// Handle `spese list`
pub fn handle_list_command(storage: &Storage, args: &ListArgs) -> SpeseResult<()> {
    let expenses = storage.expenses.all();

    if args.summary {
        println!("Summary: {}", reports::summary(expenses));
    }

    if args.all || args.no_view_selected() {
        println!("{}", format_expense_table(expenses));
    }

    if let Some(month) = args.month {
        let year = args.year.unwrap_or_else(|| chrono::Utc::now().year());
        let total = reports::by_month(expenses, month, year)?;
        println!("Expenses for month {} of {}: {}", month, year, total);
    }

    if let Some(category) = &args.category {
        let matched = reports::by_category(expenses, category);
        println!("{}", format_expense_table(matched));
    }

    Ok(())
}
