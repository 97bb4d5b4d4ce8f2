//! Removes subtrees that carry no information.

use super::types::{Forest, ReportNode};

/// Prunes the forest in place, post-order.
///
/// A node is removed once its own children have been pruned iff it has no
/// surviving child and all six value columns are zero. Values are never
/// mutated, only tree shape. Zero-valued childless roots drop from the
/// forest like any other node.
pub fn prune(forest: &mut Forest) {
    forest.retain_mut(keep_node);
}

fn keep_node(node: &mut ReportNode) -> bool {
    node.children.retain_mut(keep_node);
    node.has_values() || !node.children.is_empty()
}
