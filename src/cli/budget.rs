//! Budget CLI command
//!
//! `spese budget --amount <a> [--month <m>]` upserts the ceiling for one
//! month, or for the whole year when `--month` is omitted.

use clap::Args;

use crate::error::{SpeseError, SpeseResult};
use crate::models::{BudgetPeriod, Money};
use crate::services::BudgetLedger;
use crate::storage::Storage;

/// Arguments for the `budget` command
#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Month (1-12) the ceiling applies to; omit for the yearly ceiling
    #[arg(long)]
    pub month: Option<u32>,

    /// Ceiling amount
    #[arg(long)]
    pub amount: String,
}

/// Handle `spese budget`
pub fn handle_budget_command(storage: &mut Storage, args: &BudgetArgs) -> SpeseResult<()> {
    let period = match args.month {
        Some(month) => BudgetPeriod::month(month)
            .map_err(|e| SpeseError::Validation(e.to_string()))?,
        None => BudgetPeriod::Year,
    };

    let amount =
        Money::parse(&args.amount).map_err(|e| SpeseError::Validation(e.to_string()))?;

    let mut ledger = BudgetLedger::new(&mut storage.budget);
    let entry = ledger.set(period, amount)?;
    storage.budget.save()?;

    println!("Budget set for {}: {}", entry.period, entry.remaining);
    Ok(())
}
