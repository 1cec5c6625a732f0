//! Scenario tests for BalancedTree.
//!
//! Each test builds a small tree with a known insertion order and checks the
//! exact shape the rebalance policy produces.

use balanced_tree::prelude::*;
use rstest::rstest;

fn build(keys: &[i32]) -> BalancedTree<i32> {
    keys.iter().copied().collect()
}

fn level_keys(tree: &BalancedTree<i32>) -> Vec<i32> {
    tree.level_order().map(|node| *node.key()).collect()
}

fn sorted_keys(tree: &BalancedTree<i32>) -> Vec<i32> {
    tree.keys().copied().collect()
}

fn assert_avl(tree: &BalancedTree<i32>) {
    assert!(is_height_balanced(tree.root()), "balance violated: {tree:?}");
    assert!(has_consistent_heights(tree.root()), "stale height: {tree:?}");
    assert!(is_valid_bst(tree.root()), "order violated: {tree:?}");
}

// =============================================================================
// Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_tree() {
    let tree: BalancedTree<i32> = BalancedTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.root().is_none());
}

#[rstest]
fn test_default_creates_empty_tree() {
    let tree: BalancedTree<i32> = BalancedTree::default();
    assert!(tree.is_empty());
}

// =============================================================================
// Rotation Scenarios
// =============================================================================

#[rstest]
fn test_ascending_three_keys_rotate_left_once() {
    let tree = build(&[1, 2, 3]);
    let root = tree.root().unwrap();

    assert_eq!(*root.key(), 2);
    assert_eq!(root.height(), 1);
    assert_eq!(root.left().map(|node| *node.key()), Some(1));
    assert_eq!(root.right().map(|node| *node.key()), Some(3));
    assert!(root.left().unwrap().is_leaf());
    assert!(root.right().unwrap().is_leaf());
}

#[rstest]
fn test_already_balanced_tree_is_untouched() {
    let tree = build(&[20, 10, 30]);
    assert_eq!(level_keys(&tree), vec![20, 10, 30]);
}

#[rstest]
#[case::left_left(&[30, 20, 10], vec![20, 10, 30])]
#[case::right_right(&[10, 20, 30], vec![20, 10, 30])]
#[case::left_right(&[30, 10, 20], vec![20, 10, 30])]
#[case::right_left(&[10, 30, 20], vec![20, 10, 30])]
fn test_four_rotation_cases(#[case] keys: &[i32], #[case] expected: Vec<i32>) {
    let tree = build(keys);
    assert_eq!(level_keys(&tree), expected);
    assert_avl(&tree);
}

#[rstest]
fn test_rotation_below_the_root() {
    // 40 and 50 unbalance node 30, which rotates without touching the root
    let tree = build(&[20, 10, 30, 40, 50]);
    assert_eq!(level_keys(&tree), vec![20, 10, 40, 30, 50]);
    assert_avl(&tree);
}

#[rstest]
fn test_double_rotation_moves_inner_grandchild_to_root() {
    let tree = build(&[50, 20, 80, 10, 30, 25]);
    assert_eq!(level_keys(&tree), vec![30, 20, 50, 10, 25, 80]);
    assert_avl(&tree);
}

// =============================================================================
// Remove Scenarios
// =============================================================================

#[rstest]
fn test_insert_then_remove_leaves_no_trace() {
    let mut tree = build(&[8, 4, 12, 2, 6]);
    tree.insert(5);
    assert!(tree.contains(&5));
    assert!(tree.remove(&5));
    assert!(!tree.contains(&5));
    assert_avl(&tree);
}

#[rstest]
fn test_remove_root_until_empty() {
    let mut tree = build(&(1..=15).collect::<Vec<_>>());
    while let Some(root) = tree.root().map(|node| *node.key()) {
        assert!(tree.remove(&root));
        assert!(!tree.contains(&root));
        assert_avl(&tree);
    }
    assert!(tree.is_empty());
}

#[rstest]
fn test_remove_absent_key_keeps_shape() {
    let mut tree = build(&[5, 2, 8, 1, 3, 7, 9]);
    let before = level_keys(&tree);
    assert!(!tree.remove(&4));
    assert!(!tree.remove(&100));
    assert_eq!(level_keys(&tree), before);
    assert_eq!(tree.len(), 7);
}

#[rstest]
fn test_remove_rebalances_every_ancestor() {
    // Removing 3 leaves the root right-heavy by two, which rotates it left.
    let mut tree = build(&[4, 2, 6, 1, 3, 5, 7, 8]);
    assert!(tree.remove(&1));
    assert!(tree.remove(&3));
    assert!(tree.remove(&2));
    assert_eq!(level_keys(&tree), vec![6, 4, 7, 5, 8]);
    assert_avl(&tree);
}

// =============================================================================
// Query Scenarios
// =============================================================================

#[rstest]
fn test_successor_and_predecessor_of_decades() {
    let tree = build(&[10, 20, 30, 40, 50]);
    let root = tree.root();

    assert_eq!(in_order_successor(root, &30).map(|node| *node.key()), Some(40));
    assert_eq!(in_order_predecessor(root, &30).map(|node| *node.key()), Some(20));
    assert!(in_order_successor(root, &50).is_none());
    assert!(in_order_predecessor(root, &10).is_none());
}

#[rstest]
fn test_queries_on_empty_tree() {
    let tree: BalancedTree<i32> = BalancedTree::new();
    assert!(!tree.contains(&1));
    assert!(find_min(tree.root()).is_none());
    assert!(find_max(tree.root()).is_none());
    assert!(in_order_successor(tree.root(), &1).is_none());
    assert!(in_order_predecessor(tree.root(), &1).is_none());
}

#[rstest]
fn test_string_keys_borrow_lookup() {
    let mut tree: BalancedTree<String> = ["pear", "apple", "fig"]
        .into_iter()
        .map(String::from)
        .collect();

    assert!(tree.contains("fig"));
    assert_eq!(tree.min().map(String::as_str), Some("apple"));
    assert_eq!(
        in_order_successor(tree.root(), "fig").map(|node| node.key().as_str()),
        Some("pear")
    );
    assert!(tree.remove("apple"));
    assert_eq!(tree.min().map(String::as_str), Some("fig"));
}

// =============================================================================
// Traversal Scenarios
// =============================================================================

#[rstest]
fn test_in_order_yields_non_decreasing_multiset() {
    let tree = build(&[5, 1, 5, 3, 1, 9]);
    assert_eq!(sorted_keys(&tree), vec![1, 1, 3, 5, 5, 9]);
}

#[rstest]
fn test_level_order_visits_each_node_once() {
    let tree = build(&(0..100).collect::<Vec<_>>());
    let mut seen = Vec::new();
    tree.traverse_level_order(|node| seen.push(*node.key()));
    seen.sort_unstable();
    assert_eq!(seen, (0..100).collect::<Vec<_>>());
}

#[rstest]
fn test_extend_and_display() {
    let mut tree = build(&[3]);
    tree.extend([1, 2]);
    assert_eq!(tree.to_string(), "{1, 2, 3}");
}
