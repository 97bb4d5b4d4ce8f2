//! Links accounts into report forests.
//!
//! Accounts are ordered by company and hierarchy left index; that order
//! determines row order in flat output and children iteration order in
//! trees. Every account appears in the output even without ledger
//! activity, so ancestor totals can be computed; pruning decides later
//! what survives.
//!
//! The hierarchy snapshot is assumed acyclic (a true forest per company,
//! maintained by the source system); no cycle guard runs here.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::warn;

use tally_shared::types::DrCr;

use super::types::{BalanceKey, BalanceRecord, Forest, ReportNode};
use crate::hierarchy::Account;

/// Builds one node carrying the account's own balances.
///
/// An account without a balance record had no postings and is zero-filled.
/// Opening and closing are split into Dr/Cr sides; the period columns stay
/// gross.
#[must_use]
pub fn make_node(account: &Account, balances: &HashMap<BalanceKey, BalanceRecord>) -> ReportNode {
    let key = BalanceKey::new(account.id.clone(), account.company.clone());
    let (opening, period_debit, period_credit, closing) = match balances.get(&key) {
        Some(record) => (
            record.opening,
            record.period_debit,
            record.period_credit,
            record.closing(),
        ),
        None => (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
    };

    let opening = DrCr::from_signed(opening);
    let closing = DrCr::from_signed(closing);

    ReportNode {
        account: account.id.clone(),
        parent_account: account.parent.clone(),
        company: account.company.clone(),
        indent: account.indent,
        opening_dr: opening.dr,
        opening_cr: opening.cr,
        debit: period_debit,
        credit: period_credit,
        closing_dr: closing.dr,
        closing_cr: closing.cr,
        children: Vec::new(),
    }
}

/// Builds childless display rows in hierarchy order, skipping rows with
/// no values.
#[must_use]
pub fn build_rows(
    accounts: &[Account],
    balances: &HashMap<BalanceKey, BalanceRecord>,
) -> Vec<ReportNode> {
    ordered(accounts)
        .into_iter()
        .map(|account| make_node(account, balances))
        .filter(ReportNode::has_values)
        .collect()
}

/// Links nodes into a forest keyed by account and company.
///
/// A node attaches as a child of the node matching its declared parent
/// within the same company. A node with no parent, or whose declared
/// parent is absent from the snapshot, becomes a root; hierarchy
/// corruption degrades to extra roots rather than failing the report.
#[must_use]
pub fn build_forest(
    accounts: &[Account],
    balances: &HashMap<BalanceKey, BalanceRecord>,
) -> Forest {
    let ordered = ordered(accounts);

    let mut index: HashMap<BalanceKey, usize> = HashMap::with_capacity(ordered.len());
    for (slot, account) in ordered.iter().enumerate() {
        index.insert(
            BalanceKey::new(account.id.clone(), account.company.clone()),
            slot,
        );
    }

    let mut children_of: Vec<Vec<usize>> = vec![Vec::new(); ordered.len()];
    let mut roots: Vec<usize> = Vec::new();
    for (slot, account) in ordered.iter().enumerate() {
        match parent_slot(account, &index) {
            Some(parent) => children_of[parent].push(slot),
            None => roots.push(slot),
        }
    }

    let mut slots: Vec<Option<ReportNode>> = ordered
        .iter()
        .map(|account| Some(make_node(account, balances)))
        .collect();

    roots
        .into_iter()
        .filter_map(|root| assemble(root, &mut slots, &children_of))
        .collect()
}

/// Accounts in display order: company, then hierarchy left index.
fn ordered(accounts: &[Account]) -> Vec<&Account> {
    let mut ordered: Vec<&Account> = accounts.iter().collect();
    ordered.sort_by(|a, b| (&a.company, a.lft).cmp(&(&b.company, b.lft)));
    ordered
}

/// Resolves the slot of an account's parent, if the parent is present in
/// the snapshot.
fn parent_slot(account: &Account, index: &HashMap<BalanceKey, usize>) -> Option<usize> {
    let parent = account.parent.as_ref()?;
    let key = BalanceKey::new(parent.clone(), account.company.clone());
    let slot = index.get(&key).copied();
    if slot.is_none() {
        warn!(
            account = %account.id,
            parent = %parent,
            company = %account.company,
            "declared parent missing from hierarchy snapshot, treating account as root"
        );
    }
    slot
}

/// Moves a node out of its slot and attaches its subtree, children in
/// sibling order. Each slot is visited at most once; an already-taken
/// slot yields nothing.
fn assemble(
    slot: usize,
    slots: &mut [Option<ReportNode>],
    children_of: &[Vec<usize>],
) -> Option<ReportNode> {
    let mut node = slots[slot].take()?;
    for &child in &children_of[slot] {
        if let Some(child_node) = assemble(child, slots, children_of) {
            node.children.push(child_node);
        }
    }
    Some(node)
}
