//! # balanced-tree
//!
//! A self-balancing AVL binary search tree.
//!
//! ## Overview
//!
//! [`BalancedTree`] is an ordered container of keys. Every insert and remove
//! walks back up the search path and restores the AVL invariant with
//! rotations, so the height of the tree stays within `O(log N)`:
//!
//! - **Mutation**: [`BalancedTree::insert`], [`BalancedTree::remove`]
//! - **Lookup**: [`BalancedTree::contains`], [`BalancedTree::min`], [`BalancedTree::max`]
//! - **Traversal**: lazy in-order and level-order iterators, plus visitor forms
//! - **Order statistics**: [`in_order_successor`], [`in_order_predecessor`],
//!   [`find_min`], [`find_max`]
//! - **Validation**: [`is_valid_bst`], [`is_height_balanced`], [`has_consistent_heights`]
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`BalancedTree`] as a sorted sequence
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use balanced_tree::prelude::*;
//!
//! let mut tree: BalancedTree<i32> = [1, 2, 3].into_iter().collect();
//!
//! // Inserting 1, 2, 3 in order triggers a single left rotation
//! let root = tree.root().unwrap();
//! assert_eq!(*root.key(), 2);
//! assert_eq!(root.height(), 1);
//!
//! tree.remove(&2);
//! assert!(!tree.contains(&2));
//! assert!(is_valid_bst(tree.root()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use balanced_tree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::tree::*;
}

pub mod tree;

pub use tree::{
    BalancedTree, InOrder, LevelOrder, Node, Rotation, avl_height_bound, find_max, find_min,
    has_consistent_heights, in_order_predecessor, in_order_successor, is_height_balanced,
    is_valid_bst,
};

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn prelude_exposes_tree_and_helpers() {
        let tree: BalancedTree<i32> = [10, 20, 30].into_iter().collect();
        assert!(is_valid_bst(tree.root()));
        assert_eq!(in_order_successor(tree.root(), &20).map(Node::key), Some(&30));
    }
}
