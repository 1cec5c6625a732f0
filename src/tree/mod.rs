//! Self-balancing AVL binary search tree.
//!
//! This module provides [`BalancedTree`], an ordered container of keys that
//! restores the AVL height-balance invariant after every insert and remove.
//!
//! # Overview
//!
//! - O(log N) insert
//! - O(log N) remove
//! - O(log N) contains
//! - O(log N) min/max
//! - O(N) in-order and level-order traversal
//! - O(1) len and `is_empty`
//!
//! # Examples
//!
//! ```rust
//! use balanced_tree::BalancedTree;
//!
//! let mut tree = BalancedTree::new();
//! tree.insert(3);
//! tree.insert(1);
//! tree.insert(2);
//!
//! // Keys always come out in sorted order
//! let keys: Vec<&i32> = tree.keys().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//!
//! // Level order reflects the balanced shape
//! let levels: Vec<i32> = tree.level_order().map(|node| *node.key()).collect();
//! assert_eq!(levels, vec![2, 1, 3]);
//! ```
//!
//! # Internal Structure
//!
//! Every node caches the height of the subtree rooted at it (a leaf has
//! height 0, an absent child counts as -1). The tree maintains:
//! 1. `height == 1 + max(height(left), height(right))` at every node
//! 2. `|height(left) - height(right)| <= 1` at every node
//! 3. Keys in the left subtree are `<=` the node's key, keys in the right
//!    subtree are `>` it
//!
//! Equal keys are routed left on insert and stored as separate nodes.

mod balance;
mod query;
mod traverse;
mod validate;

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

pub use balance::Rotation;
pub use query::{find_max, find_min, in_order_predecessor, in_order_successor};
pub use traverse::{InOrder, LevelOrder};
pub use validate::{avl_height_bound, has_consistent_heights, is_height_balanced, is_valid_bst};

/// Owning link to an optional child subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

// =============================================================================
// Node Definition
// =============================================================================

/// A single stored key together with its cached subtree height.
///
/// Nodes are only ever handed out by shared reference, so the structure of a
/// [`BalancedTree`] cannot be changed from the outside.
#[derive(Clone)]
pub struct Node<K> {
    key: K,
    height: i32,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    /// Creates a new leaf node with height 0.
    pub(crate) const fn leaf(key: K) -> Self {
        Self {
            key,
            height: 0,
            left: None,
            right: None,
        }
    }

    /// Returns the key stored in this node.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the cached height of the subtree rooted at this node.
    ///
    /// A leaf has height 0.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns the left child, if any.
    #[inline]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child, if any.
    #[inline]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns `height(left) - height(right)`, with an absent child counting as -1.
    #[inline]
    pub fn balance_factor(&self) -> i32 {
        balance::height(&self.left) - balance::height(&self.right)
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<K: fmt::Debug> fmt::Debug for Node<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Node")
            .field("key", &self.key)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

// =============================================================================
// BalancedTree Definition
// =============================================================================

/// An ordered container of keys kept height-balanced with AVL rotations.
///
/// Keys must implement `Ord`. Duplicate keys are allowed; each one occupies
/// its own node and is placed to the left of an equal key on insert.
///
/// # Time Complexity
///
/// | Operation     | Complexity |
/// |---------------|------------|
/// | `new`         | O(1)       |
/// | `insert`      | O(log N)   |
/// | `remove`      | O(log N)   |
/// | `contains`    | O(log N)   |
/// | `min`/`max`   | O(log N)   |
/// | `iter`        | O(N)       |
/// | `level_order` | O(N)       |
/// | `len`         | O(1)       |
///
/// # Examples
///
/// ```rust
/// use balanced_tree::BalancedTree;
///
/// let mut tree: BalancedTree<i32> = (1..=7).collect();
/// assert_eq!(tree.len(), 7);
/// assert_eq!(tree.height(), 2);
///
/// assert!(tree.remove(&4));
/// assert!(!tree.remove(&4)); // absent keys are a no-op
/// assert!(!tree.contains(&4));
/// ```
#[derive(Clone)]
pub struct BalancedTree<K> {
    /// Root node of the tree
    root: Link<K>,
    /// Number of stored keys, duplicates included
    length: usize,
}

static_assertions::assert_impl_all!(BalancedTree<i32>: Send, Sync);
static_assertions::assert_impl_all!(Node<String>: Send, Sync);

impl<K> BalancedTree<K> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_tree::BalancedTree;
    ///
    /// let tree: BalancedTree<i32> = BalancedTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of keys in the tree.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree holds no keys.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the height of the tree: -1 when empty, 0 for a single key.
    #[inline]
    #[must_use]
    pub fn height(&self) -> i32 {
        balance::height(&self.root)
    }

    /// Returns a read-only view of the root node.
    ///
    /// Intended for diagnostics and for the free functions in this module
    /// such as [`is_valid_bst`] and [`in_order_successor`].
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Removes every key, releasing all nodes.
    pub fn clear(&mut self) {
        self.root = None;
        self.length = 0;
    }

    /// Returns the smallest key, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_tree::BalancedTree;
    ///
    /// let tree: BalancedTree<i32> = [5, 3, 9].into_iter().collect();
    /// assert_eq!(tree.min(), Some(&3));
    /// assert_eq!(tree.max(), Some(&9));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&K> {
        find_min(self.root()).map(Node::key)
    }

    /// Returns the largest key, or `None` if the tree is empty.
    #[must_use]
    pub fn max(&self) -> Option<&K> {
        find_max(self.root()).map(Node::key)
    }
}

impl<K: Ord> BalancedTree<K> {
    /// Inserts a key, rebalancing every node on the path back to the root.
    ///
    /// Insertion always succeeds. A key equal to one already present is
    /// stored as an additional node.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_tree::BalancedTree;
    ///
    /// let mut tree = BalancedTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(*root.key(), 2);
    /// assert_eq!(root.left().map(|node| *node.key()), Some(1));
    /// assert_eq!(root.right().map(|node| *node.key()), Some(3));
    /// ```
    pub fn insert(&mut self, key: K) {
        self.root = Some(Self::insert_into_node(self.root.take(), key));
        self.length += 1;
    }

    /// Recursive helper for insert.
    fn insert_into_node(link: Link<K>, key: K) -> Box<Node<K>> {
        let Some(mut node) = link else {
            return Box::new(Node::leaf(key));
        };

        if key <= node.key {
            node.left = Some(Self::insert_into_node(node.left.take(), key));
        } else {
            node.right = Some(Self::insert_into_node(node.right.take(), key));
        }

        balance::rebalance(node)
    }

    /// Removes one occurrence of `key`, returning `true` if a node was removed.
    ///
    /// Removing a key that is not present leaves the tree untouched.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_tree::BalancedTree;
    ///
    /// let mut tree: BalancedTree<i32> = [10, 20, 30].into_iter().collect();
    /// assert!(tree.remove(&20));
    /// assert!(!tree.remove(&99));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (new_root, removed) = Self::remove_from_node(self.root.take(), key);
        self.root = new_root;
        if removed {
            self.length -= 1;
        } else {
            tracing::trace!("remove found no matching key");
        }
        removed
    }

    /// Recursive helper for remove.
    /// Returns (`new_subtree`, `was_removed`).
    fn remove_from_node<Q>(link: Link<K>, key: &Q) -> (Link<K>, bool)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(mut node) = link else {
            return (None, false);
        };

        match key.cmp(node.key.borrow()) {
            Ordering::Greater => {
                let (new_right, removed) = Self::remove_from_node(node.right.take(), key);
                node.right = new_right;
                (Some(balance::rebalance(node)), removed)
            }
            Ordering::Less => {
                let (new_left, removed) = Self::remove_from_node(node.left.take(), key);
                node.left = new_left;
                (Some(balance::rebalance(node)), removed)
            }
            Ordering::Equal => (Self::unlink(node), true),
        }
    }

    /// Detaches `node` from the tree and returns the subtree that replaces it.
    fn unlink(mut node: Box<Node<K>>) -> Link<K> {
        match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(right),
            (Some(left), Some(right)) => {
                // The in-order successor has no left child, so detaching it
                // is always one of the simple cases above.
                let (rest, successor) = Self::take_min(right);
                node.key = successor.key;
                node.left = Some(left);
                node.right = rest;
                Some(balance::rebalance(node))
            }
        }
    }

    /// Detaches the leftmost node of a subtree, rebalancing on the way up.
    /// Returns (`remaining_subtree`, `leftmost_node`).
    fn take_min(mut node: Box<Node<K>>) -> (Link<K>, Box<Node<K>>) {
        match node.left.take() {
            None => {
                let rest = node.right.take();
                (rest, node)
            }
            Some(left) => {
                let (rest, minimum) = Self::take_min(left);
                node.left = rest;
                (Some(balance::rebalance(node)), minimum)
            }
        }
    }

    /// Returns `true` if the tree holds a key equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_tree::BalancedTree;
    ///
    /// let tree: BalancedTree<String> = ["b".to_string(), "a".to_string()].into_iter().collect();
    ///
    /// // Can use &str to look up String keys
    /// assert!(tree.contains("a"));
    /// assert!(!tree.contains("c"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::contains_in_node(self.root(), key)
    }

    /// Recursive helper for contains.
    fn contains_in_node<Q>(node: Option<&Node<K>>, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node.is_some_and(|node_ref| match key.cmp(node_ref.key.borrow()) {
            Ordering::Equal => true,
            Ordering::Less => Self::contains_in_node(node_ref.left(), key),
            Ordering::Greater => Self::contains_in_node(node_ref.right(), key),
        })
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K> Default for BalancedTree<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for BalancedTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for BalancedTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a BalancedTree<K> {
    type Item = &'a Node<K>;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq> PartialEq for BalancedTree<K> {
    /// Two trees are equal when they hold the same keys in the same order,
    /// regardless of shape.
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.keys().eq(other.keys())
    }
}

impl<K: Eq> Eq for BalancedTree<K> {}

impl<K: fmt::Debug> fmt::Debug for BalancedTree<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.keys()).finish()
    }
}

impl<K: fmt::Display> fmt::Display for BalancedTree<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for key in self.keys() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize> serde::Serialize for BalancedTree<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.keys())
    }
}

#[cfg(feature = "serde")]
struct BalancedTreeVisitor<K> {
    marker: std::marker::PhantomData<K>,
}

#[cfg(feature = "serde")]
impl<'de, K> serde::de::Visitor<'de> for BalancedTreeVisitor<K>
where
    K: serde::Deserialize<'de> + Ord,
{
    type Value = BalancedTree<K>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of keys")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut tree = BalancedTree::new();
        while let Some(key) = access.next_element()? {
            tree.insert(key);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::Deserialize<'de> for BalancedTree<K>
where
    K: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(BalancedTreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
