//! Trial balance computation service.
//!
//! One pipeline, parameterized by [`ReportMode`]: validate filters,
//! resolve the fiscal year, read ledger postings and the account
//! hierarchy, aggregate balances, then shape the output. Everything after
//! the reads is pure computation.

use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;
use tracing::debug;

use tally_shared::types::CompanyId;

use super::aggregate;
use super::error::ReportError;
use super::prune;
use super::rollup;
use super::totals;
use super::tree;
use super::types::{
    BalanceKey, BalanceRecord, Forest, ReportBody, ReportMode, TrialBalanceReport,
    TrialBalanceRequest,
};
use super::validation;
use crate::hierarchy::Account;
use crate::ledger::{FiscalYearSource, HierarchySource, LedgerSource, PostingRange};

/// Service computing consolidated trial balances.
pub struct TrialBalanceService;

impl TrialBalanceService {
    /// Computes a trial balance for the requested window, companies, and
    /// shape.
    ///
    /// Filters are validated before any data read; the presence checks
    /// even run before the fiscal year is resolved. The ledger and
    /// hierarchy reads are independent of each other, and both complete
    /// before aggregation begins.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Validation`] for filter violations and
    /// [`ReportError::Source`] when an external read fails. Read failures
    /// propagate unchanged; the engine never retries them.
    pub fn compute<L, H, F>(
        request: &TrialBalanceRequest,
        ledger: &L,
        hierarchy: &H,
        fiscal_years: &F,
    ) -> Result<TrialBalanceReport, ReportError>
    where
        L: LedgerSource,
        H: HierarchySource,
        F: FiscalYearSource,
    {
        let window = validation::require_filters(request)?;
        let fiscal_year = fiscal_years.resolve(&window.fiscal_year)?;
        validation::validate_window(&window, &fiscal_year)?;

        let companies = &request.companies;
        let opening_entries =
            ledger.entries(companies, &PostingRange::Before(window.from_date))?;
        let period_entries = ledger.entries(
            companies,
            &PostingRange::Between(window.from_date, window.to_date),
        )?;
        let accounts = hierarchy.accounts(companies)?;

        debug!(
            opening_rows = opening_entries.len(),
            period_rows = period_entries.len(),
            accounts = accounts.len(),
            mode = ?request.mode,
            "computing trial balance"
        );

        let balances = aggregate::balance_records(
            aggregate::opening_balances(&opening_entries, window.from_date),
            aggregate::period_movement(&period_entries, window.from_date, window.to_date),
        );

        let body = match request.mode {
            ReportMode::Flat => ReportBody::Flat(tree::build_rows(&accounts, &balances)),
            ReportMode::Tree => {
                let mut forest = tree::build_forest(&accounts, &balances);
                prune::prune(&mut forest);
                ReportBody::Forest(forest)
            }
            ReportMode::TreeRolledUp => {
                let mut forest = tree::build_forest(&accounts, &balances);
                rollup::roll_up(&mut forest);
                prune::prune(&mut forest);
                ReportBody::Forest(forest)
            }
            ReportMode::TreePerCompany => {
                ReportBody::PerCompany(per_company_forests(companies, &accounts, &balances))
            }
        };

        let grand_total = request
            .include_grand_total
            .then(|| totals::grand_total(body.roots()));

        Ok(TrialBalanceReport {
            fiscal_year: window.fiscal_year,
            from_date: window.from_date,
            to_date: window.to_date,
            companies: companies.clone(),
            mode: request.mode,
            body,
            grand_total,
        })
    }
}

/// Builds one rolled-up, pruned forest per requested company, in
/// parallel.
///
/// Each company's sub-computation touches only that company's accounts
/// and balance records, so the fan-out shares no mutable state and needs
/// no locking. A company with no accounts yields an empty forest.
fn per_company_forests(
    companies: &[CompanyId],
    accounts: &[Account],
    balances: &HashMap<BalanceKey, BalanceRecord>,
) -> BTreeMap<CompanyId, Forest> {
    companies
        .par_iter()
        .map(|company| {
            let company_accounts: Vec<Account> = accounts
                .iter()
                .filter(|account| account.company == *company)
                .cloned()
                .collect();
            let mut forest = tree::build_forest(&company_accounts, balances);
            rollup::roll_up(&mut forest);
            prune::prune(&mut forest);
            (company.clone(), forest)
        })
        .collect()
}
