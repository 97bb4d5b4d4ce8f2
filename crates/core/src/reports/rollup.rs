//! Post-order rollup of child totals into ancestors.
//!
//! Rollup is a mode the caller selects, not a separate engine: without it
//! every node keeps only its own balances and this module is never
//! invoked. Termination is guaranteed by the forest's finite depth; the
//! hierarchy source maintains acyclicity.

use super::types::{ReportNode, ValueField};

/// Folds every child's columns into its parent, post-order, then nets the
/// opening and closing pair of each node.
pub fn roll_up(forest: &mut [ReportNode]) {
    roll_up_fields(forest, &ValueField::ALL);
}

/// Folds the given columns child-into-parent, post-order.
///
/// Children are processed fully (recursively) before their values fold
/// into the parent, and they fold in sibling order. The fold is a plain
/// sum per column, so sibling order cannot change the numeric result; it
/// would only matter for a future order-sensitive column.
pub fn roll_up_fields(forest: &mut [ReportNode], fields: &[ValueField]) {
    for node in forest {
        roll_node(node, fields);
    }
}

fn roll_node(node: &mut ReportNode, fields: &[ValueField]) {
    // Children are detached during the fold so the parent's columns can be
    // updated while they are borrowed.
    let mut children = std::mem::take(&mut node.children);
    for child in &mut children {
        roll_node(child, fields);
        for &field in fields {
            *field.get_mut(node) += field.get(child);
        }
    }
    node.children = children;

    node.net_pairs();
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn leaf(account: &str, opening_dr: Decimal, debit: Decimal) -> ReportNode {
        ReportNode {
            account: account.into(),
            parent_account: None,
            company: "West".into(),
            indent: 1,
            opening_dr,
            opening_cr: Decimal::ZERO,
            debit,
            credit: Decimal::ZERO,
            closing_dr: opening_dr + debit,
            closing_cr: Decimal::ZERO,
            children: Vec::new(),
        }
    }

    fn parent(account: &str, children: Vec<ReportNode>) -> ReportNode {
        ReportNode {
            account: account.into(),
            parent_account: None,
            company: "West".into(),
            indent: 0,
            opening_dr: Decimal::ZERO,
            opening_cr: Decimal::ZERO,
            debit: Decimal::ZERO,
            credit: Decimal::ZERO,
            closing_dr: Decimal::ZERO,
            closing_cr: Decimal::ZERO,
            children,
        }
    }

    #[test]
    fn test_children_fold_into_parent() {
        let mut forest = vec![parent(
            "Assets",
            vec![leaf("Cash", dec!(0), dec!(10)), leaf("Bank", dec!(0), dec!(5))],
        )];
        roll_up(&mut forest);

        assert_eq!(forest[0].debit, dec!(15));
        assert_eq!(forest[0].closing_dr, dec!(15));
        // Children keep their own totals.
        assert_eq!(forest[0].children[0].debit, dec!(10));
        assert_eq!(forest[0].children[1].debit, dec!(5));
    }

    #[test]
    fn test_rollup_is_recursive() {
        let grandchild = leaf("Petty Cash", dec!(3), dec!(0));
        let child = parent("Cash", vec![grandchild]);
        let mut forest = vec![parent("Assets", vec![child])];
        roll_up(&mut forest);

        assert_eq!(forest[0].opening_dr, dec!(3));
        assert_eq!(forest[0].children[0].opening_dr, dec!(3));
    }

    #[test]
    fn test_rollup_nets_mixed_openings() {
        // Debit-opening child and larger credit-opening child: the parent
        // pair nets to the credit side.
        let debit_child = leaf("Cash", dec!(30), dec!(0));
        let mut credit_child = leaf("Payables", dec!(0), dec!(0));
        credit_child.opening_cr = dec!(50);
        credit_child.closing_cr = dec!(50);

        let mut forest = vec![parent("Net", vec![debit_child, credit_child])];
        roll_up(&mut forest);

        assert_eq!(forest[0].opening_dr, dec!(0));
        assert_eq!(forest[0].opening_cr, dec!(20));
    }

    #[test]
    fn test_partial_field_list_folds_only_those() {
        let mut forest = vec![parent(
            "Assets",
            vec![leaf("Cash", dec!(7), dec!(10))],
        )];
        roll_up_fields(&mut forest, &[ValueField::Debit, ValueField::Credit]);

        assert_eq!(forest[0].debit, dec!(10));
        // Opening columns were not in the fold list.
        assert_eq!(forest[0].opening_dr, dec!(0));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Permuting sibling order does not change the parent's totals.
        #[test]
        fn prop_rollup_order_independent(
            amounts in prop::collection::vec((0i64..1_000_000, 0i64..1_000_000), 2..8),
            rotate in 0usize..8,
        ) {
            let children: Vec<ReportNode> = amounts
                .iter()
                .enumerate()
                .map(|(i, &(opening, debit))| {
                    leaf(&format!("A{i}"), Decimal::new(opening, 2), Decimal::new(debit, 2))
                })
                .collect();

            let mut permuted = children.clone();
            let permuted_len = permuted.len();
            permuted.rotate_left(rotate % permuted_len);

            let mut first = vec![parent("P", children)];
            let mut second = vec![parent("P", permuted)];
            roll_up(&mut first);
            roll_up(&mut second);

            for field in ValueField::ALL {
                prop_assert_eq!(field.get(&first[0]), field.get(&second[0]));
            }
        }

        /// After rollup, every node's opening and closing pairs are netted.
        #[test]
        fn prop_rollup_leaves_netted_pairs(
            amounts in prop::collection::vec((-1_000_000i64..1_000_000, 0i64..1_000_000), 1..6),
        ) {
            let children: Vec<ReportNode> = amounts
                .iter()
                .enumerate()
                .map(|(i, &(opening, debit))| {
                    let mut node = leaf(&format!("A{i}"), Decimal::ZERO, Decimal::new(debit, 2));
                    let opening = Decimal::new(opening, 2);
                    if opening >= Decimal::ZERO {
                        node.opening_dr = opening;
                    } else {
                        node.opening_cr = -opening;
                    }
                    node
                })
                .collect();

            let mut forest = vec![parent("P", children)];
            roll_up(&mut forest);

            let root = &forest[0];
            prop_assert_eq!(root.opening_dr.min(root.opening_cr), Decimal::ZERO);
            prop_assert_eq!(root.closing_dr.min(root.closing_cr), Decimal::ZERO);
        }
    }
}
