//! Fiscal year types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tally_shared::types::FiscalYearId;

/// Fiscal year definition, as resolved by the external fiscal-year store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiscalYear {
    /// Unique identifier (e.g. "2025-2026").
    pub id: FiscalYearId,
    /// Start date of the fiscal year.
    pub start_date: NaiveDate,
    /// End date of the fiscal year.
    pub end_date: NaiveDate,
}

impl FiscalYear {
    /// Returns true if the given date falls within this fiscal year.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year() -> FiscalYear {
        FiscalYear {
            id: FiscalYearId::new("2025-2026"),
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
        }
    }

    #[test]
    fn test_contains_bounds_inclusive() {
        let fy = year();
        assert!(fy.contains(fy.start_date));
        assert!(fy.contains(fy.end_date));
        assert!(fy.contains(NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()));
    }

    #[test]
    fn test_contains_rejects_outside_dates() {
        let fy = year();
        assert!(!fy.contains(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()));
        assert!(!fy.contains(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
    }
}
