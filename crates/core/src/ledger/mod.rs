//! Ledger input contracts.
//!
//! The engine does not own ledger storage. This module defines:
//! - The raw ledger entry row shape
//! - The read traits the surrounding system implements
//! - Errors surfaced by those reads

pub mod entry;
pub mod error;
pub mod source;

pub use entry::LedgerEntry;
pub use error::SourceError;
pub use source::{FiscalYearSource, HierarchySource, LedgerSource, PostingRange};
