//! Fiscal year bounds.

pub mod year;

pub use year::FiscalYear;
