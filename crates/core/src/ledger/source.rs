//! Read contracts for the external stores.
//!
//! The engine issues exactly three kinds of reads: ledger entries for a
//! company set and posting range, the account hierarchy for a company set,
//! and fiscal year bounds. The surrounding system implements these against
//! its storage. The two data reads are independent of each other and may
//! be issued concurrently by an implementor; the engine never retries a
//! failed read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tally_shared::types::{CompanyId, FiscalYearId};

use super::entry::LedgerEntry;
use super::error::SourceError;
use crate::fiscal::FiscalYear;
use crate::hierarchy::Account;

/// Posting-date range for a ledger read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostingRange {
    /// Every posting strictly earlier than the date, unbounded below.
    /// Used for opening balances.
    Before(NaiveDate),
    /// Postings between the two dates, inclusive on both ends.
    /// Used for period movement.
    Between(NaiveDate, NaiveDate),
}

impl PostingRange {
    /// Returns true if a posting date falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Before(end) => date < end,
            Self::Between(from, to) => date >= from && date <= to,
        }
    }
}

/// Read access to the general ledger.
pub trait LedgerSource {
    /// Fetches non-cancelled entries for the companies within the range.
    fn entries(
        &self,
        companies: &[CompanyId],
        range: &PostingRange,
    ) -> Result<Vec<LedgerEntry>, SourceError>;
}

/// Read access to the chart of accounts hierarchy.
pub trait HierarchySource {
    /// Fetches the account rows for the companies.
    ///
    /// Order is expected to be stable and to represent display order
    /// (company, then hierarchy left index); the engine re-sorts by that
    /// key anyway so a store without ordering guarantees still works.
    fn accounts(&self, companies: &[CompanyId]) -> Result<Vec<Account>, SourceError>;
}

/// Read access to fiscal year records.
pub trait FiscalYearSource {
    /// Resolves a fiscal year to its bounds.
    fn resolve(&self, fiscal_year: &FiscalYearId) -> Result<FiscalYear, SourceError>;
}
