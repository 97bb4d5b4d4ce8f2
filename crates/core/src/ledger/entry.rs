//! Raw ledger entry rows.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{AccountId, CompanyId};

/// A dated general-ledger row as returned by the ledger store.
///
/// Debit and credit are non-negative amounts in the single reporting
/// currency. Cancelled rows never participate in balance aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The account this row posts to.
    pub account: AccountId,
    /// The company the row was posted under.
    pub company: CompanyId,
    /// Posting date.
    pub posting_date: NaiveDate,
    /// Debit amount (non-negative).
    pub debit: Decimal,
    /// Credit amount (non-negative).
    pub credit: Decimal,
    /// Whether the row has been cancelled.
    pub is_cancelled: bool,
}

impl LedgerEntry {
    /// Returns the signed amount (positive for net debit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.debit - self.credit
    }
}
