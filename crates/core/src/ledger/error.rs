//! Errors surfaced by the external read contracts.

use tally_shared::types::FiscalYearId;
use thiserror::Error;

/// Errors from the ledger, hierarchy, or fiscal-year sources.
///
/// Read failures propagate to the caller unchanged. Retry policy belongs
/// to the store and its caller, not this engine.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Fiscal year record not found.
    #[error("Fiscal year not found: {0}")]
    FiscalYearNotFound(FiscalYearId),

    /// The ledger store failed or returned malformed data.
    #[error("Ledger read failed: {0}")]
    Ledger(String),

    /// The account hierarchy store failed or returned malformed data.
    #[error("Account hierarchy read failed: {0}")]
    Hierarchy(String),
}
