//! Chart of accounts hierarchy rows.
//!
//! The account hierarchy is owned by an external store; the engine only
//! consumes a snapshot of it. Each row names its parent within the same
//! company. Parents never cross companies.

use serde::{Deserialize, Serialize};
use tally_shared::types::{AccountId, CompanyId};

/// A chart of accounts row as returned by the hierarchy store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier.
    pub id: AccountId,
    /// Parent account within the same company, if any.
    pub parent: Option<AccountId>,
    /// Owning company.
    pub company: CompanyId,
    /// Depth in the hierarchy, for display.
    pub indent: u32,
    /// Hierarchy left index; the stable sibling order key.
    pub lft: i64,
}

impl Account {
    /// Returns true if the row declares no parent.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
