//! Balance aggregation over raw ledger entries.
//!
//! Two passes, both keyed by account and company: a signed opening net
//! over postings strictly before the window, and separate debit/credit
//! totals over postings inside the window (inclusive on both ends). A key
//! with no postings never materializes a record; absence is the zero
//! sentinel for every downstream consumer.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{BalanceKey, BalanceRecord};
use crate::amount;
use crate::ledger::LedgerEntry;

/// Period debit/credit totals for one key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodTotals {
    /// Debit sum over the window.
    pub debit: Decimal,
    /// Credit sum over the window.
    pub credit: Decimal,
}

/// Sums signed postings strictly before `from_date` per key.
///
/// Cancelled rows are skipped. Sums are normalized to reporting precision
/// after accumulation.
#[must_use]
pub fn opening_balances(
    entries: &[LedgerEntry],
    from_date: NaiveDate,
) -> HashMap<BalanceKey, Decimal> {
    let mut totals: HashMap<BalanceKey, Decimal> = HashMap::new();
    for entry in entries {
        if entry.is_cancelled || entry.posting_date >= from_date {
            continue;
        }
        *totals.entry(key_of(entry)).or_default() += entry.signed_amount();
    }
    for value in totals.values_mut() {
        *value = amount::normalize(*value);
    }
    totals
}

/// Sums debit and credit separately over the inclusive window per key.
///
/// Debit and credit are deliberately not netted here; the period columns
/// of the report show gross movement.
#[must_use]
pub fn period_movement(
    entries: &[LedgerEntry],
    from_date: NaiveDate,
    to_date: NaiveDate,
) -> HashMap<BalanceKey, PeriodTotals> {
    let mut totals: HashMap<BalanceKey, PeriodTotals> = HashMap::new();
    for entry in entries {
        if entry.is_cancelled || entry.posting_date < from_date || entry.posting_date > to_date {
            continue;
        }
        let slot = totals.entry(key_of(entry)).or_default();
        slot.debit += entry.debit;
        slot.credit += entry.credit;
    }
    for slot in totals.values_mut() {
        slot.debit = amount::normalize(slot.debit);
        slot.credit = amount::normalize(slot.credit);
    }
    totals
}

/// Merges the two passes into at most one record per key.
#[must_use]
pub fn balance_records(
    opening: HashMap<BalanceKey, Decimal>,
    period: HashMap<BalanceKey, PeriodTotals>,
) -> HashMap<BalanceKey, BalanceRecord> {
    let mut records: HashMap<BalanceKey, BalanceRecord> =
        HashMap::with_capacity(opening.len().max(period.len()));
    for (key, opening_balance) in opening {
        let mut record = BalanceRecord::zero(key.clone());
        record.opening = opening_balance;
        records.insert(key, record);
    }
    for (key, totals) in period {
        let record = records
            .entry(key.clone())
            .or_insert_with(|| BalanceRecord::zero(key));
        record.period_debit = totals.debit;
        record.period_credit = totals.credit;
    }
    records
}

fn key_of(entry: &LedgerEntry) -> BalanceKey {
    BalanceKey::new(entry.account.clone(), entry.company.clone())
}
