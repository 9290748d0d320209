use anyhow::Result;
use clap::{Parser, Subcommand};

use spese_cli::cli::{
    handle_add_command, handle_budget_command, handle_delete_command, handle_list_command,
    handle_update_command, BudgetArgs, ListArgs,
};
use spese_cli::config::paths::SpesePaths;
use spese_cli::error::SpeseError;
use spese_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spese",
    version,
    about = "Personal expense tracker for the command line",
    long_about = "spese records expenses to a local JSON file, lists and \
                  summarizes them by month, year or category, and can track \
                  per-month and yearly budget ceilings that are decremented \
                  as expenses are recorded."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense; name and amount are required
    Add {
        /// Expense name, unique across all expenses
        name: String,
        /// Amount (e.g., "5" or "5.50")
        amount: String,
        /// Category
        category: Option<String>,
    },

    /// Update an existing expense
    Update {
        /// Expense id
        id: u64,
        /// New name
        #[arg(long = "n", value_name = "NAME")]
        name: Option<String>,
        /// New amount
        #[arg(long = "a", value_name = "AMOUNT")]
        amount: Option<String>,
        /// New category
        #[arg(long = "c", value_name = "CATEGORY")]
        category: Option<String>,
    },

    /// Delete an existing expense
    Delete {
        /// Expense id
        id: u64,
    },

    /// View expenses
    List(ListArgs),

    /// Set a budget ceiling for a month or for the year
    Budget(BudgetArgs),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpesePaths::new()?;
    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Commands::Add {
            name,
            amount,
            category,
        } => handle_add_command(&mut storage, &name, &amount, category.as_deref())?,
        Commands::Update {
            id,
            name,
            amount,
            category,
        } => handle_update_command(&mut storage, id, name, amount, category)?,
        Commands::Delete { id } => handle_delete_command(&mut storage, id)?,
        Commands::List(args) => handle_list_command(&storage, &args)?,
        Commands::Budget(args) => handle_budget_command(&mut storage, &args)?,
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        let code = err
            .downcast_ref::<SpeseError>()
            .map(SpeseError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
