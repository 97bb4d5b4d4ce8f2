//! Trial balance report types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{AccountId, CompanyId, DrCr, FiscalYearId};

/// Identity under which balances are aggregated and nodes are merged.
///
/// At most one aggregated balance exists per key. Company is always part
/// of the identity, so same-named accounts in different companies are
/// distinct and never share parentage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BalanceKey {
    /// Account identifier.
    pub account: AccountId,
    /// Company identifier.
    pub company: CompanyId,
}

impl BalanceKey {
    /// Creates a key.
    #[must_use]
    pub const fn new(account: AccountId, company: CompanyId) -> Self {
        Self { account, company }
    }
}

/// Aggregated balances for one account/company pair.
///
/// Immutable once computed; keys without ledger activity have no record,
/// and downstream consumers treat absence as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRecord {
    /// The key this record aggregates.
    pub key: BalanceKey,
    /// Signed opening balance (positive = net debit).
    pub opening: Decimal,
    /// Debit total over the report window.
    pub period_debit: Decimal,
    /// Credit total over the report window.
    pub period_credit: Decimal,
}

impl BalanceRecord {
    /// Creates a record with all balances zero.
    #[must_use]
    pub const fn zero(key: BalanceKey) -> Self {
        Self {
            key,
            opening: Decimal::ZERO,
            period_debit: Decimal::ZERO,
            period_credit: Decimal::ZERO,
        }
    }

    /// Signed closing balance.
    #[must_use]
    pub fn closing(&self) -> Decimal {
        self.opening + self.period_debit - self.period_credit
    }
}

/// One row of the trial balance output.
///
/// Created with empty children by the tree builder, linked into a forest,
/// mutated in place by rollup (children strictly before parents), and
/// read-only after netting and pruning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportNode {
    /// Account identifier.
    pub account: AccountId,
    /// Declared parent account, if any.
    pub parent_account: Option<AccountId>,
    /// Owning company.
    pub company: CompanyId,
    /// Depth in the hierarchy, for display.
    pub indent: u32,
    /// Opening balance, debit side.
    pub opening_dr: Decimal,
    /// Opening balance, credit side.
    pub opening_cr: Decimal,
    /// Period debit total.
    pub debit: Decimal,
    /// Period credit total.
    pub credit: Decimal,
    /// Closing balance, debit side.
    pub closing_dr: Decimal,
    /// Closing balance, credit side.
    pub closing_cr: Decimal,
    /// Child rows, in hierarchy sibling order.
    pub children: Vec<ReportNode>,
}

impl ReportNode {
    /// Returns true if any of the six value columns is nonzero.
    #[must_use]
    pub fn has_values(&self) -> bool {
        ValueField::ALL.iter().any(|field| !field.get(self).is_zero())
    }

    /// The opening pair.
    #[must_use]
    pub fn opening(&self) -> DrCr {
        DrCr::new(self.opening_dr, self.opening_cr)
    }

    /// The closing pair.
    #[must_use]
    pub fn closing(&self) -> DrCr {
        DrCr::new(self.closing_dr, self.closing_cr)
    }

    /// Nets the opening and closing pairs in place so at most one side of
    /// each is nonzero.
    pub fn net_pairs(&mut self) {
        let opening = self.opening().net();
        self.opening_dr = opening.dr;
        self.opening_cr = opening.cr;
        let closing = self.closing().net();
        self.closing_dr = closing.dr;
        self.closing_cr = closing.cr;
    }
}

/// The six numeric report columns.
///
/// Rollup and the grand-total reducer fold a fixed list of these rather
/// than hardcoding field accesses, so the folded set stays declarative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueField {
    /// Opening balance, debit side.
    OpeningDr,
    /// Opening balance, credit side.
    OpeningCr,
    /// Period debit total.
    Debit,
    /// Period credit total.
    Credit,
    /// Closing balance, debit side.
    ClosingDr,
    /// Closing balance, credit side.
    ClosingCr,
}

impl ValueField {
    /// All six columns in display order.
    pub const ALL: [Self; 6] = [
        Self::OpeningDr,
        Self::OpeningCr,
        Self::Debit,
        Self::Credit,
        Self::ClosingDr,
        Self::ClosingCr,
    ];

    /// Reads the column from a node.
    #[must_use]
    pub fn get(self, node: &ReportNode) -> Decimal {
        match self {
            Self::OpeningDr => node.opening_dr,
            Self::OpeningCr => node.opening_cr,
            Self::Debit => node.debit,
            Self::Credit => node.credit,
            Self::ClosingDr => node.closing_dr,
            Self::ClosingCr => node.closing_cr,
        }
    }

    /// Mutable access to the column on a node.
    pub fn get_mut(self, node: &mut ReportNode) -> &mut Decimal {
        match self {
            Self::OpeningDr => &mut node.opening_dr,
            Self::OpeningCr => &mut node.opening_cr,
            Self::Debit => &mut node.debit,
            Self::Credit => &mut node.credit,
            Self::ClosingDr => &mut node.closing_dr,
            Self::ClosingCr => &mut node.closing_cr,
        }
    }
}

/// Ordered sequence of root report nodes.
pub type Forest = Vec<ReportNode>;

/// Which shape of report to compute.
///
/// One parameterized dispatch instead of separate near-duplicate
/// pipelines per shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Childless rows in display order, all-zero rows skipped.
    Flat,
    /// Merged cross-company forest without rollup; each node carries only
    /// its own balances.
    Tree,
    /// Merged cross-company forest with child totals rolled into
    /// ancestors.
    TreeRolledUp,
    /// One rolled-up forest per company.
    TreePerCompany,
}

impl ReportMode {
    /// Returns true if the mode folds child totals into ancestors.
    #[must_use]
    pub const fn rolls_up(self) -> bool {
        matches!(self, Self::TreeRolledUp | Self::TreePerCompany)
    }
}

/// Raw report filters as supplied by the caller.
///
/// Dates and the fiscal year are optional here because the filter shape
/// mirrors what arrives from a report UI; validation turns them into a
/// [`ReportWindow`] or rejects the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceRequest {
    /// Fiscal year to report under (required by validation).
    pub fiscal_year: Option<FiscalYearId>,
    /// Period start (required by validation, inside the fiscal year).
    pub from_date: Option<NaiveDate>,
    /// Period end (required by validation, inside the fiscal year).
    pub to_date: Option<NaiveDate>,
    /// Companies to include.
    pub companies: Vec<CompanyId>,
    /// Report shape.
    pub mode: ReportMode,
    /// Whether to compute the grand total record.
    pub include_grand_total: bool,
}

/// Validated report window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    /// Fiscal year the window lies in.
    pub fiscal_year: FiscalYearId,
    /// Period start.
    pub from_date: NaiveDate,
    /// Period end.
    pub to_date: NaiveDate,
}

/// Report body, shaped by the requested mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportBody {
    /// Childless rows in display order.
    Flat(Vec<ReportNode>),
    /// Merged cross-company forest.
    Forest(Forest),
    /// One forest per company, in company order.
    PerCompany(BTreeMap<CompanyId, Forest>),
}

impl ReportBody {
    /// Root rows of the body: every row in flat shape, the forest roots
    /// otherwise.
    #[must_use]
    pub fn roots(&self) -> Vec<&ReportNode> {
        match self {
            Self::Flat(rows) => rows.iter().collect(),
            Self::Forest(forest) => forest.iter().collect(),
            Self::PerCompany(forests) => forests.values().flatten().collect(),
        }
    }
}

/// Grand total across all root rows, netted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrandTotal {
    /// Opening total, debit side.
    pub opening_dr: Decimal,
    /// Opening total, credit side.
    pub opening_cr: Decimal,
    /// Period debit total.
    pub debit: Decimal,
    /// Period credit total.
    pub credit: Decimal,
    /// Closing total, debit side.
    pub closing_dr: Decimal,
    /// Closing total, credit side.
    pub closing_cr: Decimal,
    /// Whether period debits equal period credits across the report.
    pub is_balanced: bool,
}

/// A computed consolidated trial balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Fiscal year the report was computed under.
    pub fiscal_year: FiscalYearId,
    /// Period start.
    pub from_date: NaiveDate,
    /// Period end.
    pub to_date: NaiveDate,
    /// Companies included.
    pub companies: Vec<CompanyId>,
    /// Report shape.
    pub mode: ReportMode,
    /// The report rows.
    pub body: ReportBody,
    /// Grand total, when requested.
    pub grand_total: Option<GrandTotal>,
}
