//! Consolidated trial balance generation.
//!
//! This module reduces raw ledger entries into per-account opening, period,
//! and closing balances, links accounts into a forest (one tree per
//! company, or a merged cross-company forest), optionally rolls child
//! totals into ancestors, nets debit/credit presentation pairs, prunes
//! all-zero subtrees, and reduces root totals into a grand total.

pub mod aggregate;
pub mod error;
pub mod prune;
pub mod rollup;
pub mod service;
pub mod totals;
pub mod tree;
pub mod types;
pub mod validation;


pub use error::{ReportError, ValidationError};
pub use service::TrialBalanceService;
pub use types::*;
