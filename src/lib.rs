//! spese - Personal expense tracker for the command line
//!
//! Records expenses, updates or deletes them, lists and summarizes them by
//! month, year or category, and tracks per-month and yearly budget ceilings
//! that are decremented as expenses are recorded.
//!
//! # Architecture
//!
//! - `config`: path management (where the two data files live)
//! - `error`: custom error types with per-kind exit codes
//! - `models`: core data models (expense, budget entry, money)
//! - `storage`: JSON file storage with atomic writes
//! - `services`: business logic (expense CRUD, budget ledger)
//! - `reports`: filtering and aggregation
//! - `display`: table rendering
//! - `cli`: command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpeseError, SpeseResult};
