//! Storage layer for spese
//!
//! Provides JSON file storage with atomic writes. The two data files are
//! rewritten in full on every mutating command; they are not transactionally
//! linked.

pub mod budget;
pub mod expenses;
pub mod file_io;

pub use budget::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::SpesePaths;
use crate::error::SpeseResult;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    pub expenses: ExpenseRepository,
    pub budget: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SpesePaths) -> SpeseResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            budget: BudgetRepository::new(paths.budget_file()),
        })
    }

    /// Load both data files from disk
    pub fn load_all(&mut self) -> SpeseResult<()> {
        self.expenses.load()?;
        self.budget.load()?;
        Ok(())
    }

    /// Save both data files to disk
    pub fn save_all(&self) -> SpeseResult<()> {
        self.expenses.save()?;
        self.budget.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpesePaths::with_base_dir(temp_dir.path().join("spese"));
        let mut storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("spese").exists());
        storage.load_all().unwrap();
        assert_eq!(storage.expenses.count(), 0);
        assert_eq!(storage.budget.count(), 0);
    }
}
