//! Report filter validation.
//!
//! Checks run short-circuit in a fixed order, presence before range: a
//! missing fiscal year or date fails before the fiscal year record is
//! even resolved, and every check passes before any ledger or hierarchy
//! read is issued.

use super::error::ValidationError;
use super::types::{ReportWindow, TrialBalanceRequest};
use crate::fiscal::FiscalYear;

/// Checks that the required filters are present.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFiscalYear`] or
/// [`ValidationError::MissingDateRange`], in that order.
pub fn require_filters(request: &TrialBalanceRequest) -> Result<ReportWindow, ValidationError> {
    let Some(fiscal_year) = request.fiscal_year.clone() else {
        return Err(ValidationError::MissingFiscalYear);
    };
    let (Some(from_date), Some(to_date)) = (request.from_date, request.to_date) else {
        return Err(ValidationError::MissingDateRange);
    };
    Ok(ReportWindow {
        fiscal_year,
        from_date,
        to_date,
    })
}

/// Checks that the window lies inside the fiscal year and is not inverted.
///
/// # Errors
///
/// Returns the first violated check: start bound, then end bound, then
/// inversion.
pub fn validate_window(
    window: &ReportWindow,
    fiscal_year: &FiscalYear,
) -> Result<(), ValidationError> {
    if window.from_date < fiscal_year.start_date {
        return Err(ValidationError::FromBeforeFiscalYear {
            from_date: window.from_date,
            year_start: fiscal_year.start_date,
        });
    }
    if window.to_date > fiscal_year.end_date {
        return Err(ValidationError::ToAfterFiscalYear {
            to_date: window.to_date,
            year_end: fiscal_year.end_date,
        });
    }
    if window.from_date > window.to_date {
        return Err(ValidationError::InvertedDateRange {
            from_date: window.from_date,
            to_date: window.to_date,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::types::ReportMode;
    use chrono::NaiveDate;
    use rstest::rstest;
    use tally_shared::types::FiscalYearId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fiscal_year() -> FiscalYear {
        FiscalYear {
            id: FiscalYearId::new("2025-2026"),
            start_date: date(2025, 4, 1),
            end_date: date(2026, 3, 31),
        }
    }

    fn request(
        fiscal_year: Option<&str>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> TrialBalanceRequest {
        TrialBalanceRequest {
            fiscal_year: fiscal_year.map(FiscalYearId::new),
            from_date: from,
            to_date: to,
            companies: vec!["Acme West".into()],
            mode: ReportMode::Flat,
            include_grand_total: false,
        }
    }

    #[test]
    fn test_missing_fiscal_year_fails_first() {
        // Missing dates too, but the fiscal year check runs first.
        let result = require_filters(&request(None, None, None));
        assert_eq!(result, Err(ValidationError::MissingFiscalYear));
    }

    #[rstest]
    #[case(Some(date(2025, 4, 1)), None)]
    #[case(None, Some(date(2025, 6, 30)))]
    #[case(None, None)]
    fn test_missing_dates(#[case] from: Option<NaiveDate>, #[case] to: Option<NaiveDate>) {
        let result = require_filters(&request(Some("2025-2026"), from, to));
        assert_eq!(result, Err(ValidationError::MissingDateRange));
    }

    #[test]
    fn test_present_filters_build_window() {
        let window = require_filters(&request(
            Some("2025-2026"),
            Some(date(2025, 4, 1)),
            Some(date(2025, 6, 30)),
        ))
        .unwrap();
        assert_eq!(window.fiscal_year, FiscalYearId::new("2025-2026"));
        assert_eq!(window.from_date, date(2025, 4, 1));
        assert_eq!(window.to_date, date(2025, 6, 30));
    }

    fn window(from: NaiveDate, to: NaiveDate) -> ReportWindow {
        ReportWindow {
            fiscal_year: FiscalYearId::new("2025-2026"),
            from_date: from,
            to_date: to,
        }
    }

    #[test]
    fn test_from_before_year_start() {
        let result = validate_window(&window(date(2025, 3, 1), date(2025, 6, 30)), &fiscal_year());
        assert!(matches!(
            result,
            Err(ValidationError::FromBeforeFiscalYear { .. })
        ));
    }

    #[test]
    fn test_to_after_year_end() {
        let result = validate_window(&window(date(2025, 4, 1), date(2026, 4, 30)), &fiscal_year());
        assert!(matches!(
            result,
            Err(ValidationError::ToAfterFiscalYear { .. })
        ));
    }

    #[test]
    fn test_inverted_range() {
        let result = validate_window(&window(date(2025, 9, 1), date(2025, 5, 1)), &fiscal_year());
        assert!(matches!(
            result,
            Err(ValidationError::InvertedDateRange { .. })
        ));
    }

    #[rstest]
    #[case(date(2025, 4, 1), date(2026, 3, 31))] // whole year
    #[case(date(2025, 4, 1), date(2025, 4, 1))] // single day
    #[case(date(2025, 7, 1), date(2025, 9, 30))] // interior quarter
    fn test_valid_windows(#[case] from: NaiveDate, #[case] to: NaiveDate) {
        assert!(validate_window(&window(from, to), &fiscal_year()).is_ok());
    }
}
