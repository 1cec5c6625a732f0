//! Lazy in-order and level-order traversals.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::{BalancedTree, Node};

// =============================================================================
// Traversal Entry Points
// =============================================================================

impl<K> BalancedTree<K> {
    /// Returns an iterator over the nodes in ascending key order.
    ///
    /// The iterator is lazy: it holds a stack of at most `height + 1` nodes
    /// and descends only as far as needed to produce the next node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_tree::BalancedTree;
    ///
    /// let tree: BalancedTree<i32> = [30, 10, 20].into_iter().collect();
    /// let keys: Vec<i32> = tree.iter().map(|node| *node.key()).collect();
    /// assert_eq!(keys, vec![10, 20, 30]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> InOrder<'_, K> {
        InOrder::new(self.root(), self.length)
    }

    /// Alias for [`BalancedTree::iter`].
    #[inline]
    #[must_use]
    pub fn in_order(&self) -> InOrder<'_, K> {
        self.iter()
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(Node::key)
    }

    /// Returns a breadth-first iterator over the nodes.
    ///
    /// All nodes at depth `d` are produced before any node at depth `d + 1`,
    /// and within a level the left child comes before the right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use balanced_tree::BalancedTree;
    ///
    /// let tree: BalancedTree<i32> = [20, 10, 30].into_iter().collect();
    /// let levels: Vec<i32> = tree.level_order().map(|node| *node.key()).collect();
    /// assert_eq!(levels, vec![20, 10, 30]);
    /// ```
    #[must_use]
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root(), self.length)
    }

    /// Calls `visit` on every node in ascending key order.
    pub fn traverse_in_order<F>(&self, visit: F)
    where
        F: FnMut(&Node<K>),
    {
        self.iter().for_each(visit);
    }

    /// Calls `visit` on every node in breadth-first order.
    pub fn traverse_level_order<F>(&self, visit: F)
    where
        F: FnMut(&Node<K>),
    {
        self.level_order().for_each(visit);
    }
}

// =============================================================================
// In-Order Iterator
// =============================================================================

/// An in-order iterator over the nodes of a [`BalancedTree`].
pub struct InOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> InOrder<'a, K> {
    fn new(root: Option<&'a Node<K>>, length: usize) -> Self {
        let capacity = root.map_or(0, |node| usize::try_from(node.height + 1).unwrap_or(0));
        let mut iterator = Self {
            stack: Vec::with_capacity(capacity),
            remaining: length,
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for InOrder<'_, K> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K> FusedIterator for InOrder<'_, K> {}

impl<K> Clone for InOrder<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// Level-Order Iterator
// =============================================================================

/// A breadth-first iterator over the nodes of a [`BalancedTree`].
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
    /// Known only when the walk covers a whole tree
    remaining: Option<usize>,
}

impl<'a, K> LevelOrder<'a, K> {
    fn new(root: Option<&'a Node<K>>, length: usize) -> Self {
        let mut iterator = Self::from_root(root);
        iterator.remaining = Some(length);
        iterator
    }

    /// Starts a breadth-first walk from an arbitrary subtree root.
    ///
    /// The subtree size is not known up front, so the size hint is only a
    /// lower bound.
    #[must_use]
    pub fn from_root(root: Option<&'a Node<K>>) -> Self {
        let mut queue = VecDeque::new();
        queue.extend(root);
        Self {
            queue,
            remaining: None,
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining
            .map_or((self.queue.len(), None), |remaining| (remaining, Some(remaining)))
    }
}

impl<K> FusedIterator for LevelOrder<'_, K> {}

// =============================================================================
// Tests
// =============================================================================
