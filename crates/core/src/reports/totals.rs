//! Grand total reduction across root rows.

use rust_decimal::Decimal;

use tally_shared::types::DrCr;

use super::types::{GrandTotal, ReportNode, ValueField};

/// Sums the six columns across root rows, then nets the opening and
/// closing pairs.
///
/// Roots must already carry their full subtree totals (rollup mode) or be
/// a complete flat row set; summing partial roots yields a partial total.
/// That precondition is the caller's, not checked here.
#[must_use]
pub fn grand_total<'a, I>(roots: I) -> GrandTotal
where
    I: IntoIterator<Item = &'a ReportNode>,
{
    let mut sums = [Decimal::ZERO; 6];
    for node in roots {
        for (slot, field) in sums.iter_mut().zip(ValueField::ALL) {
            *slot += field.get(node);
        }
    }
    let [opening_dr, opening_cr, debit, credit, closing_dr, closing_cr] = sums;

    let opening = DrCr::new(opening_dr, opening_cr).net();
    let closing = DrCr::new(closing_dr, closing_cr).net();

    GrandTotal {
        opening_dr: opening.dr,
        opening_cr: opening.cr,
        debit,
        credit,
        closing_dr: closing.dr,
        closing_cr: closing.cr,
        is_balanced: debit == credit,
    }
}
