//! Trial balance error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::ledger::SourceError;

/// Report filter validation failures.
///
/// User-correctable; surfaced verbatim to the caller, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Fiscal year filter is missing.
    #[error("Fiscal Year is required")]
    MissingFiscalYear,

    /// From/To date filter is missing.
    #[error("From Date and To Date are required")]
    MissingDateRange,

    /// From date falls before the fiscal year starts.
    #[error("From Date {from_date} is before the fiscal year start {year_start}")]
    FromBeforeFiscalYear {
        /// The requested period start.
        from_date: NaiveDate,
        /// The fiscal year start.
        year_start: NaiveDate,
    },

    /// To date falls after the fiscal year ends.
    #[error("To Date {to_date} is after the fiscal year end {year_end}")]
    ToAfterFiscalYear {
        /// The requested period end.
        to_date: NaiveDate,
        /// The fiscal year end.
        year_end: NaiveDate,
    },

    /// The date range is inverted.
    #[error("From Date {from_date} cannot be after To Date {to_date}")]
    InvertedDateRange {
        /// The requested period start.
        from_date: NaiveDate,
        /// The requested period end.
        to_date: NaiveDate,
    },
}

/// Errors that can occur while computing a trial balance.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filter validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An external read failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl ReportError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::MissingFiscalYear) => "MISSING_FISCAL_YEAR",
            Self::Validation(ValidationError::MissingDateRange) => "MISSING_DATE_RANGE",
            Self::Validation(ValidationError::FromBeforeFiscalYear { .. }) => {
                "FROM_BEFORE_FISCAL_YEAR"
            }
            Self::Validation(ValidationError::ToAfterFiscalYear { .. }) => "TO_AFTER_FISCAL_YEAR",
            Self::Validation(ValidationError::InvertedDateRange { .. }) => "INVERTED_DATE_RANGE",
            Self::Source(SourceError::FiscalYearNotFound(_)) => "FISCAL_YEAR_NOT_FOUND",
            Self::Source(SourceError::Ledger(_)) => "LEDGER_READ_FAILED",
            Self::Source(SourceError::Hierarchy(_)) => "HIERARCHY_READ_FAILED",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - filter validation errors
            Self::Validation(_) => 400,

            // 404 Not Found
            Self::Source(SourceError::FiscalYearNotFound(_)) => 404,

            // 500 Internal Server Error - upstream store failures
            Self::Source(SourceError::Ledger(_) | SourceError::Hierarchy(_)) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_shared::types::FiscalYearId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ReportError::from(ValidationError::MissingFiscalYear).error_code(),
            "MISSING_FISCAL_YEAR"
        );
        assert_eq!(
            ReportError::from(ValidationError::InvertedDateRange {
                from_date: date(2025, 6, 1),
                to_date: date(2025, 5, 1),
            })
            .error_code(),
            "INVERTED_DATE_RANGE"
        );
        assert_eq!(
            ReportError::from(SourceError::Ledger("down".to_string())).error_code(),
            "LEDGER_READ_FAILED"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(
            ReportError::from(ValidationError::MissingDateRange).http_status_code(),
            400
        );
        assert_eq!(
            ReportError::from(SourceError::FiscalYearNotFound(FiscalYearId::new("2030")))
                .http_status_code(),
            404
        );
        assert_eq!(
            ReportError::from(SourceError::Hierarchy("timeout".to_string())).http_status_code(),
            500
        );
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::FromBeforeFiscalYear {
            from_date: date(2025, 1, 1),
            year_start: date(2025, 4, 1),
        };
        assert_eq!(
            err.to_string(),
            "From Date 2025-01-01 is before the fiscal year start 2025-04-01"
        );
    }
}
