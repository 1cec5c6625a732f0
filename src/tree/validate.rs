//! Structural predicates used by tests and diagnostics.

use super::{LevelOrder, Node, balance};

/// Returns `true` if every key lies strictly inside the open interval
/// inherited from its ancestors.
///
/// Bounds start out absent rather than at a sentinel value, so keys at the
/// extremes of their type validate correctly. Equal keys are rejected, so a
/// tree holding duplicates never validates.
///
/// # Examples
///
/// ```rust
/// use balanced_tree::{BalancedTree, is_valid_bst};
///
/// let tree: BalancedTree<i32> = [i32::MIN, 0, i32::MAX].into_iter().collect();
/// assert!(is_valid_bst(tree.root()));
/// assert!(is_valid_bst::<i32>(None));
/// ```
#[must_use]
pub fn is_valid_bst<K: Ord>(root: Option<&Node<K>>) -> bool {
    is_within(root, None, None)
}

fn is_within<K: Ord>(node: Option<&Node<K>>, lower: Option<&K>, upper: Option<&K>) -> bool {
    let Some(node) = node else {
        return true;
    };
    let key = node.key();

    lower.is_none_or(|lower| lower < key)
        && upper.is_none_or(|upper| key < upper)
        && is_within(node.left(), lower, Some(key))
        && is_within(node.right(), Some(key), upper)
}

/// Returns `true` if every node reachable from `root` has a balance factor
/// in `{-1, 0, 1}`.
#[must_use]
pub fn is_height_balanced<K>(root: Option<&Node<K>>) -> bool {
    LevelOrder::from_root(root).all(|node| node.balance_factor().abs() <= 1)
}

/// Returns `true` if every cached height equals
/// `1 + max(height(left), height(right))`.
#[must_use]
pub fn has_consistent_heights<K>(root: Option<&Node<K>>) -> bool {
    LevelOrder::from_root(root).all(|node| {
        node.height() == 1 + balance::height(&node.left).max(balance::height(&node.right))
    })
}

/// Upper bound on the height of an AVL tree holding `len` keys,
/// `1.45 * log2(len + 2) - 0.5`.
///
/// # Examples
///
/// ```rust
/// use balanced_tree::{BalancedTree, avl_height_bound};
///
/// let tree: BalancedTree<u32> = (0..10_000).collect();
/// assert!(f64::from(tree.height()) <= avl_height_bound(tree.len()));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn avl_height_bound(len: usize) -> f64 {
    1.45f64.mul_add((len as f64 + 2.0).log2(), -0.5)
}

// =============================================================================
// Tests
// =============================================================================
