//! Core business logic for Tally.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. The ledger store, the account hierarchy, and fiscal year
//! records are reached through narrow read traits; everything after those
//! reads is in-memory computation.
//!
//! # Modules
//!
//! - `ledger` - Raw ledger entry rows and the external read contracts
//! - `hierarchy` - Chart of accounts rows
//! - `fiscal` - Fiscal year bounds
//! - `reports` - Trial balance aggregation, tree rollup, and totals
//! - `amount` - Reporting-currency decimal normalization

pub mod amount;
pub mod fiscal;
pub mod hierarchy;
pub mod ledger;
pub mod reports;
