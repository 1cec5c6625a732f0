//! Height bookkeeping, rotations and the AVL rebalance policy.
//!
//! Every function here takes ownership of a boxed subtree and returns the
//! (possibly new) root of that subtree. The caller writes the result back
//! into its own child slot, so no aliased mutable borrow is ever needed.

use std::fmt;

use super::{Link, Node};

// =============================================================================
// Height Primitives
// =============================================================================

/// Height of an optional subtree. An absent subtree has height `-1`.
#[inline]
pub(crate) fn height<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

impl<K> Node<K> {
    /// Recomputes the cached height from the current children.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

// =============================================================================
// Rotation Definition
// =============================================================================

/// A restructuring chosen by the rebalance policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Single left rotation around a right-heavy node.
    Left,
    /// Single right rotation around a left-heavy node.
    Right,
    /// Left rotation on the left child, then right rotation on the node.
    LeftRight,
    /// Right rotation on the right child, then left rotation on the node.
    RightLeft,
}

impl fmt::Display for Rotation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::LeftRight => "left-right",
            Self::RightLeft => "right-left",
        })
    }
}

// =============================================================================
// Primitive Rotations
// =============================================================================

/// Right rotation around `node`, promoting its left child.
///
/// The left child's right subtree moves over to become `node`'s left subtree.
/// Heights are updated bottom-up: `node` first, then the promoted child.
pub(crate) fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Left rotation around `node`, promoting its right child.
pub(crate) fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

// =============================================================================
// Rebalance Policy
// =============================================================================

/// Decides which rotation, if any, `node` needs.
///
/// Assumes the cached height of `node` is current. A double rotation is only
/// chosen when the inner grandchild subtree is strictly taller than the outer
/// one; equal heights take the single rotation.
pub(crate) fn classify<K>(node: &Node<K>) -> Option<Rotation> {
    let balance = node.balance_factor();

    if balance < -1 {
        let right = node.right.as_deref()?;
        if height(&right.left) <= height(&right.right) {
            Some(Rotation::Left)
        } else {
            Some(Rotation::RightLeft)
        }
    } else if balance > 1 {
        let left = node.left.as_deref()?;
        if height(&left.left) >= height(&left.right) {
            Some(Rotation::Right)
        } else {
            Some(Rotation::LeftRight)
        }
    } else {
        None
    }
}

/// Restores the AVL invariant at `node` after one of its subtrees changed.
///
/// The children of `node` must already be balanced. Returns the new root of
/// the subtree, which is `node` itself when no rotation was needed.
pub(crate) fn rebalance<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    node.update_height();

    let Some(rotation) = classify(&node) else {
        return node;
    };
    tracing::trace!(%rotation, balance = node.balance_factor(), "rotating subtree");

    match rotation {
        Rotation::Left => rotate_left(node),
        Rotation::Right => rotate_right(node),
        Rotation::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
        Rotation::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
