//! Order-statistics helpers over a borrowed subtree.
//!
//! These are free functions so they can run against any subtree root, e.g.
//! the one returned by [`BalancedTree::root`](super::BalancedTree::root).

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::ptr;

use super::Node;

/// Returns the leftmost (smallest) node reachable from `root`.
///
/// # Examples
///
/// ```rust
/// use balanced_tree::{BalancedTree, find_min};
///
/// let tree: BalancedTree<i32> = [8, 3, 10, 1].into_iter().collect();
/// assert_eq!(find_min(tree.root()).map(|node| *node.key()), Some(1));
/// assert!(find_min::<i32>(None).is_none());
/// ```
#[must_use]
pub fn find_min<K>(root: Option<&Node<K>>) -> Option<&Node<K>> {
    let mut current = root?;
    while let Some(left) = current.left() {
        current = left;
    }
    Some(current)
}

/// Returns the rightmost (largest) node reachable from `root`.
#[must_use]
pub fn find_max<K>(root: Option<&Node<K>>) -> Option<&Node<K>> {
    let mut current = root?;
    while let Some(right) = current.right() {
        current = right;
    }
    Some(current)
}

/// Locates the first node on the search path whose key equals `key`.
fn find_node<'a, K, Q>(root: Option<&'a Node<K>>, key: &Q) -> Option<&'a Node<K>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let node = root?;
    match key.cmp(node.key().borrow()) {
        Ordering::Equal => Some(node),
        Ordering::Less => find_node(node.left(), key),
        Ordering::Greater => find_node(node.right(), key),
    }
}

/// Returns the node holding the next larger key after `key`.
///
/// Returns `None` when `key` is not in the tree or is already the largest.
///
/// # Examples
///
/// ```rust
/// use balanced_tree::{BalancedTree, in_order_successor};
///
/// let tree: BalancedTree<i32> = [10, 20, 30, 40, 50].into_iter().collect();
/// assert_eq!(in_order_successor(tree.root(), &30).map(|node| *node.key()), Some(40));
/// assert!(in_order_successor(tree.root(), &50).is_none());
/// assert!(in_order_successor(tree.root(), &35).is_none());
/// ```
#[must_use]
pub fn in_order_successor<'a, K, Q>(root: Option<&'a Node<K>>, key: &Q) -> Option<&'a Node<K>>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    let target = find_node(root, key)?;
    if let Some(right) = target.right() {
        return find_min(Some(right));
    }

    // No right subtree: the answer is the deepest ancestor we leave to the left.
    let mut successor = None;
    let mut ancestor = root;
    while let Some(node) = ancestor {
        if ptr::eq(node, target) {
            break;
        }
        if target.key() < node.key() {
            successor = Some(node);
            ancestor = node.left();
        } else {
            ancestor = node.right();
        }
    }
    successor
}

/// Returns the node holding the next smaller key before `key`.
///
/// Returns `None` when `key` is not in the tree or is already the smallest.
///
/// # Examples
///
/// ```rust
/// use balanced_tree::{BalancedTree, in_order_predecessor};
///
/// let tree: BalancedTree<i32> = [10, 20, 30, 40, 50].into_iter().collect();
/// assert_eq!(in_order_predecessor(tree.root(), &30).map(|node| *node.key()), Some(20));
/// assert!(in_order_predecessor(tree.root(), &10).is_none());
/// ```
#[must_use]
pub fn in_order_predecessor<'a, K, Q>(root: Option<&'a Node<K>>, key: &Q) -> Option<&'a Node<K>>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    let target = find_node(root, key)?;
    if let Some(left) = target.left() {
        return find_max(Some(left));
    }

    let mut predecessor = None;
    let mut ancestor = root;
    while let Some(node) = ancestor {
        if ptr::eq(node, target) {
            break;
        }
        if target.key() > node.key() {
            predecessor = Some(node);
            ancestor = node.right();
        } else {
            ancestor = node.left();
        }
    }
    predecessor
}

// =============================================================================
// Tests
// =============================================================================
