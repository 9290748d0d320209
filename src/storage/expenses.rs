//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense list to expenses.json. Expenses
//! are kept in storage order; ids are assigned sequentially.

use std::path::PathBuf;

use crate::error::{SpeseError, SpeseResult};
use crate::models::{Expense, ExpensePatch, Money};

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: Vec::new(),
        }
    }

    /// Load expenses from disk; a missing file is an empty list
    pub fn load(&mut self) -> SpeseResult<()> {
        self.expenses = read_json(&self.path)?;
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> SpeseResult<()> {
        write_json_atomic(&self.path, &self.expenses)
    }

    /// All expenses in storage order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Get an expense by id
    pub fn get(&self, id: u64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Find an expense by exact name
    pub fn find_by_name(&self, name: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.name == name)
    }

    /// The id the next added expense will receive
    pub fn next_id(&self) -> u64 {
        self.expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    /// Add a new expense, rejecting duplicate names
    pub fn add(
        &mut self,
        name: &str,
        amount: Money,
        category: &str,
    ) -> SpeseResult<Expense> {
        if self.find_by_name(name).is_some() {
            return Err(SpeseError::DuplicateName(name.to_string()));
        }

        let expense = Expense::new(self.next_id(), name, amount, category);
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Apply a patch to an expense, stamping `updated`
    ///
    /// Only supplied fields are overwritten. A name change colliding with
    /// another expense's name is rejected.
    pub fn update(&mut self, id: u64, patch: ExpensePatch) -> SpeseResult<Expense> {
        if let Some(new_name) = &patch.name {
            if self.expenses.iter().any(|e| e.id != id && &e.name == new_name) {
                return Err(SpeseError::DuplicateName(new_name.clone()));
            }
        }

        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(SpeseError::NotFound(id))?;

        if let Some(name) = patch.name {
            expense.name = name;
        }
        if let Some(amount) = patch.amount {
            expense.amount = amount;
        }
        if let Some(category) = patch.category {
            expense.category = category;
        }
        expense.updated = Some(chrono::Utc::now());

        Ok(expense.clone())
    }

    /// Remove the expense with the given id
    pub fn delete(&mut self, id: u64) -> SpeseResult<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(SpeseError::NotFound(id))?;

        Ok(self.expenses.remove(index))
    }

    /// Count expenses
    pub fn count(&self) -> usize {
        self.expenses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let mut repo = ExpenseRepository::new(path);
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_sequential_ids() {
        let (_temp_dir, mut repo) = create_test_repo();

        let a = repo.add("coffee", Money::from_cents(500), "food").unwrap();
        let b = repo.add("bus", Money::from_cents(250), "").unwrap();
        let c = repo.add("book", Money::from_cents(1200), "leisure").unwrap();

        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    }

    #[test]
    fn test_ids_continue_after_delete() {
        let (_temp_dir, mut repo) = create_test_repo();

        repo.add("a", Money::from_cents(100), "").unwrap();
        repo.add("b", Money::from_cents(100), "").unwrap();
        repo.delete(2).unwrap();

        let c = repo.add("c", Money::from_cents(100), "").unwrap();
        assert_eq!(c.id, 2);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let (_temp_dir, mut repo) = create_test_repo();

        repo.add("coffee", Money::from_cents(500), "food").unwrap();
        let result = repo.add("coffee", Money::from_cents(300), "");

        assert!(matches!(result, Err(SpeseError::DuplicateName(_))));
        assert_eq!(repo.count(), 1);
        assert_eq!(repo.find_by_name("coffee").unwrap().amount.cents(), 500);
    }

    #[test]
    fn test_update_patches_only_supplied_fields() {
        let (_temp_dir, mut repo) = create_test_repo();

        repo.add("coffee", Money::from_cents(500), "food").unwrap();
        let updated = repo
            .update(
                1,
                ExpensePatch {
                    amount: Some(Money::from_cents(600)),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "coffee");
        assert_eq!(updated.category, "food");
        assert_eq!(updated.amount.cents(), 600);
        assert!(updated.updated.is_some());
    }

    #[test]
    fn test_update_nonexistent_id_leaves_storage_unchanged() {
        let (_temp_dir, mut repo) = create_test_repo();

        repo.add("coffee", Money::from_cents(500), "food").unwrap();
        let result = repo.update(
            99,
            ExpensePatch {
                amount: Some(Money::from_cents(600)),
                ..Default::default()
            },
        );

        assert!(matches!(result, Err(SpeseError::NotFound(99))));
        assert_eq!(repo.get(1).unwrap().amount.cents(), 500);
    }

    #[test]
    fn test_update_rejects_name_collision() {
        let (_temp_dir, mut repo) = create_test_repo();

        repo.add("coffee", Money::from_cents(500), "").unwrap();
        repo.add("tea", Money::from_cents(300), "").unwrap();

        let result = repo.update(
            2,
            ExpensePatch {
                name: Some("coffee".into()),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(SpeseError::DuplicateName(_))));
        assert_eq!(repo.get(2).unwrap().name, "tea");
    }

    #[test]
    fn test_delete_removes_matching_entry() {
        let (temp_dir, mut repo) = create_test_repo();

        repo.add("coffee", Money::from_cents(500), "").unwrap();
        repo.delete(1).unwrap();
        assert_eq!(repo.count(), 0);
        repo.save().unwrap();

        // Reload from disk: the persisted list must be empty too
        let mut repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.count(), 0);
    }

    #[test]
    fn test_delete_nonexistent() {
        let (_temp_dir, mut repo) = create_test_repo();
        assert!(matches!(repo.delete(1), Err(SpeseError::NotFound(1))));
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, mut repo) = create_test_repo();

        repo.add("coffee", Money::from_cents(500), "food").unwrap();
        repo.add("bus", Money::from_cents(250), "transport").unwrap();
        repo.save().unwrap();

        let mut repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.count(), 2);
        assert_eq!(repo2.all()[0].name, "coffee");
        assert_eq!(repo2.all()[1].name, "bus");
        assert_eq!(repo2.next_id(), 3);
    }
}
