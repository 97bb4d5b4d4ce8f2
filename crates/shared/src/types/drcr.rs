//! Debit/credit pair arithmetic.
//!
//! Trial balance columns present a signed balance as two non-negative
//! sides where at most one is nonzero. `DrCr` carries that pair together
//! with the netting operation that restores the presentation invariant
//! after aggregation.
//!
//! CRITICAL: Never use floating-point for money calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A debit/credit amount pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrCr {
    /// Debit-side amount.
    pub dr: Decimal,
    /// Credit-side amount.
    pub cr: Decimal,
}

impl DrCr {
    /// A pair with both sides zero.
    pub const ZERO: Self = Self {
        dr: Decimal::ZERO,
        cr: Decimal::ZERO,
    };

    /// Creates a pair from explicit sides.
    #[must_use]
    pub const fn new(dr: Decimal, cr: Decimal) -> Self {
        Self { dr, cr }
    }

    /// Splits a signed balance into sides.
    ///
    /// A strictly positive value is a debit balance, a strictly negative
    /// value a credit balance (absolute magnitude), and zero leaves both
    /// sides empty.
    #[must_use]
    pub fn from_signed(value: Decimal) -> Self {
        if value > Decimal::ZERO {
            Self {
                dr: value,
                cr: Decimal::ZERO,
            }
        } else if value < Decimal::ZERO {
            Self {
                dr: Decimal::ZERO,
                cr: -value,
            }
        } else {
            Self::ZERO
        }
    }

    /// Nets the pair so at most one side is nonzero.
    ///
    /// Preserves `dr - cr` and is idempotent: netting an already netted
    /// pair returns it unchanged.
    #[must_use]
    pub fn net(self) -> Self {
        if self.dr >= self.cr {
            Self {
                dr: self.dr - self.cr,
                cr: Decimal::ZERO,
            }
        } else {
            Self {
                dr: Decimal::ZERO,
                cr: self.cr - self.dr,
            }
        }
    }

    /// Returns the signed value of the pair (positive = net debit).
    #[must_use]
    pub fn signed(self) -> Decimal {
        self.dr - self.cr
    }

    /// Returns true if both sides are zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.dr.is_zero() && self.cr.is_zero()
    }
}
