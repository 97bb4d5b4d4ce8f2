//! Shared value types for Tally.
//!
//! This crate provides the common types used across all other crates:
//! - Typed identifiers for accounts, companies, and fiscal years
//! - The `DrCr` debit/credit pair with netting

pub mod types;
