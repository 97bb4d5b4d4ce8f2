//! Typed identifiers for type-safe entity references.
//!
//! The source systems key accounts, companies, and fiscal years by name, so
//! these wrap `String` rather than a numeric key. Using typed wrappers
//! prevents accidentally passing a `CompanyId` where an `AccountId` is
//! expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed name-key wrappers.
macro_rules! typed_name {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates an identifier from any string-like value.
            #[must_use]
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the identifier and returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

typed_name!(AccountId, "Unique identifier for a chart of accounts entry.");
typed_name!(CompanyId, "Unique identifier for a legal entity (company).");
typed_name!(FiscalYearId, "Unique identifier for a fiscal year.");
