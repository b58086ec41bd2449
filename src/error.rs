//! Error types.

use thiserror::Error;

use crate::tree::Key;

/// A mutation that didn't change the tree, as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The key was already in the tree.
    #[error("attempted to insert duplicate key {0}")]
    DuplicateKey(Key),

    /// The key wasn't in the tree.
    #[error("node with key {0} not found")]
    KeyNotFound(Key),

    /// There was nothing to delete from.
    #[error("the tree is empty")]
    EmptyTree,
}

/// The first broken invariant found while validating a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A key is on the wrong side of one of its ancestors.
    #[error("key {key} is out of order (allowed range {lower:?}..{upper:?})")]
    OutOfOrder {
        /// The misplaced key.
        key: Key,
        /// Exclusive lower bound imposed by its ancestors.
        lower: Option<Key>,
        /// Exclusive upper bound imposed by its ancestors.
        upper: Option<Key>,
    },

    /// A cached AVL height doesn't match the subtree.
    #[error("node {key} caches height {cached} but its subtree has height {actual}")]
    StaleHeight {
        /// The node's key.
        key: Key,
        /// The height stored in the node.
        cached: i32,
        /// The height recomputed from its children.
        actual: i32,
    },

    /// An AVL node's children differ in height by more than one.
    #[error("node {key} has balance factor {balance}")]
    Unbalanced {
        /// The node's key.
        key: Key,
        /// Left height minus right height.
        balance: i32,
    },

    /// The red-black root is red.
    #[error("root {0} is red")]
    RedRoot(Key),

    /// The red-black sentinel was colored red.
    #[error("the sentinel is red")]
    RedSentinel,

    /// A red node has a red child.
    #[error("red node {parent} has red child {child}")]
    RedChildOfRed {
        /// The red parent.
        parent: Key,
        /// The red child.
        child: Key,
    },

    /// Two paths below a node cross different numbers of black nodes.
    #[error("node {key} has black-height {left} on the left but {right} on the right")]
    BlackHeightMismatch {
        /// The node's key.
        key: Key,
        /// Black-height through the left child.
        left: usize,
        /// Black-height through the right child.
        right: usize,
    },

    /// A child's parent link doesn't point back at its parent.
    #[error("node {child} doesn't link back to its parent {parent}")]
    BrokenParentLink {
        /// The parent's key.
        parent: Key,
        /// The child's key.
        child: Key,
    },

    /// The number of reachable nodes doesn't match the tree's length.
    #[error("tree reports {expected} nodes but {found} are reachable")]
    LengthMismatch {
        /// The stored length.
        expected: usize,
        /// The number of nodes reached from the root.
        found: usize,
    },
}

/// Why a tree couldn't be printed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintError {
    /// The tree has more levels than the printer allows.
    #[error("max level of the binary tree that can be printed is {max}, current level is {actual}")]
    TooDeep {
        /// The configured maximum.
        max: usize,
        /// The tree's number of levels.
        actual: usize,
    },

    /// A key doesn't fit in the configured width.
    #[error("the key of the node must be >= 0 and <= {max}, found {key}")]
    KeyOutOfRange {
        /// The offending key.
        key: Key,
        /// The largest printable key.
        max: Key,
    },
}
