//! Budget repository for JSON storage
//!
//! Manages loading and saving budget entries to budget.json. Entries keep
//! their insertion order across invocations.

use std::path::PathBuf;

use crate::error::SpeseResult;
use crate::models::{BudgetEntry, BudgetPeriod, Money};

use super::file_io::{read_json, write_json_atomic};

/// Repository for budget entry persistence
pub struct BudgetRepository {
    path: PathBuf,
    entries: Vec<BudgetEntry>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: Vec::new(),
        }
    }

    /// Load budget entries from disk; a missing file is an empty list
    pub fn load(&mut self) -> SpeseResult<()> {
        self.entries = read_json(&self.path)?;
        Ok(())
    }

    /// Save budget entries to disk
    pub fn save(&self) -> SpeseResult<()> {
        write_json_atomic(&self.path, &self.entries)
    }

    /// All entries in storage order
    pub fn all(&self) -> &[BudgetEntry] {
        &self.entries
    }

    /// Mutable access for the ledger
    pub fn all_mut(&mut self) -> &mut [BudgetEntry] {
        &mut self.entries
    }

    /// Get the entry for a period
    pub fn get(&self, period: BudgetPeriod) -> Option<&BudgetEntry> {
        self.entries.iter().find(|e| e.period == period)
    }

    /// Insert or replace the entry for a period
    pub fn upsert(&mut self, period: BudgetPeriod, remaining: Money) -> &BudgetEntry {
        match self.entries.iter().position(|e| e.period == period) {
            Some(index) => {
                self.entries[index].remaining = remaining;
                &self.entries[index]
            }
            None => {
                self.entries.push(BudgetEntry::new(period, remaining));
                self.entries.last().expect("entry just pushed")
            }
        }
    }

    /// Count entries
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
