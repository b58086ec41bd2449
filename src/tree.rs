//! The contract shared by both engines: what a key is, what a node handle exposes and what a
//! search tree can do.

use crate::error::TreeError;
use crate::traversal::{self, Order};

/// The key type stored in every tree.
pub type Key = i32;

/// A read-only view of one node in a tree. Handles borrow the tree they came from so they can't
/// outlive a mutation of it.
pub trait NodeHandle: Copy {
    /// The key stored in this node.
    fn key(&self) -> Key;

    /// The left child, if there is one.
    fn left(&self) -> Option<Self>;

    /// The right child, if there is one.
    fn right(&self) -> Option<Self>;

    /// Whether this node is colored red. Trees without colors never have red nodes.
    fn is_red(&self) -> bool {
        false
    }
}

/// What happened during an insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// The key was added to the tree.
    Inserted,
    /// The key was already present so the tree is unchanged.
    Duplicate(Key),
}

impl Insertion {
    /// Whether the key was actually added.
    pub fn is_inserted(self) -> bool {
        self == Self::Inserted
    }

    /// Turns a duplicate into an error for callers that want to use `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{avl::Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.insert(1).into_result(), Ok(()));
    /// assert_eq!(tree.insert(1).into_result(), Err(TreeError::DuplicateKey(1)));
    /// ```
    pub fn into_result(self) -> Result<(), TreeError> {
        match self {
            Self::Inserted => Ok(()),
            Self::Duplicate(key) => Err(TreeError::DuplicateKey(key)),
        }
    }
}

/// What happened during a deletion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deletion {
    /// The key was removed from the tree.
    Deleted,
    /// The tree had nodes but none with this key.
    NotFound(Key),
    /// The tree had no nodes at all.
    EmptyTree,
}

impl Deletion {
    /// Whether a key was actually removed.
    pub fn is_deleted(self) -> bool {
        self == Self::Deleted
    }

    /// Turns a missing key (or an empty tree) into an error for callers that want to use `?`.
    pub fn into_result(self) -> Result<(), TreeError> {
        match self {
            Self::Deleted => Ok(()),
            Self::NotFound(key) => Err(TreeError::KeyNotFound(key)),
            Self::EmptyTree => Err(TreeError::EmptyTree),
        }
    }
}

/// A self-balancing binary search tree over unique [`Key`]s.
///
/// Both [`avl::Tree`][crate::avl::Tree] and [`red_black::Tree`][crate::red_black::Tree] implement
/// this so collaborators (printing, traversals, the demo driver) only need to be written once.
pub trait SearchTree: Default {
    /// The handle type returned by [`search`][SearchTree::search] and [`root`][SearchTree::root].
    type Node<'a>: NodeHandle
    where
        Self: 'a;

    /// Inserts the key. Inserting a key that's already present leaves the tree unchanged.
    fn insert(&mut self, key: Key) -> Insertion;

    /// Deletes the key if it's present.
    fn delete(&mut self, key: Key) -> Deletion;

    /// Finds the node holding the key.
    fn search(&self, key: Key) -> Option<Self::Node<'_>>;

    /// The root node, or `None` for an empty tree.
    fn root(&self) -> Option<Self::Node<'_>>;

    /// How many keys are in the tree.
    fn len(&self) -> usize;

    /// Whether the tree has no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the key is in the tree.
    fn contains(&self, key: Key) -> bool {
        self.search(key).is_some()
    }

    /// All keys in ascending order.
    fn keys(&self) -> Vec<Key> {
        traversal::keys(self.root(), Order::InOrder)
    }
}
