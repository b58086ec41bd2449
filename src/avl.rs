//! An AVL tree. Every node caches the height of its subtree and, after each insert or delete,
//! every ancestor of the changed node checks that its children's heights differ by at most one.
//! When they don't, one or two rotations restore the balance.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::avl::Tree;
//! use balanced_bst::{Deletion, Insertion};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(1).is_none());
//!
//! assert_eq!(tree.insert(1), Insertion::Inserted);
//! assert_eq!(tree.search(1).map(|n| n.key()), Some(1));
//!
//! // Keys are unique so inserting again changes nothing.
//! assert_eq!(tree.insert(1), Insertion::Duplicate(1));
//! assert_eq!(tree.len(), 1);
//!
//! assert_eq!(tree.delete(1), Deletion::Deleted);
//! assert!(tree.search(1).is_none());
//! assert_eq!(tree.delete(1), Deletion::EmptyTree);
//! ```

use std::cmp::Ordering;

use log::{debug, info, trace};

use crate::error::InvariantViolation;
use crate::tree::{Deletion, Insertion, Key, NodeHandle, SearchTree};

/// The height of an empty subtree. A leaf has height 0.
const EMPTY_HEIGHT: i32 = -1;

type Link = Option<Box<Node>>;

/// A height-balanced Binary Search Tree.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    root: Link,
    len: usize,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// How many keys are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The height of the tree: `-1` when empty, `0` for a single node.
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Finds the node holding `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(1).map(|n| n.key()), Some(1));
    /// assert!(tree.search(42).is_none());
    /// ```
    pub fn search(&self, key: Key) -> Option<&Node> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            trace!("search for {key} visiting {}", node.key);
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref(),
            };
        }

        None
    }

    /// Inserts `key` and rebalances every ancestor of the new node. Inserting a key that's
    /// already present is reported as [`Insertion::Duplicate`] and leaves the tree untouched.
    pub fn insert(&mut self, key: Key) -> Insertion {
        let mut outcome = Insertion::Inserted;
        self.root = Some(Node::insert(self.root.take(), key, &mut outcome));

        match outcome {
            Insertion::Inserted => self.len += 1,
            Insertion::Duplicate(_) => info!("attempted to insert duplicate key {key}"),
        }
        outcome
    }

    /// Deletes `key` if present, rebalancing every ancestor of the removed node.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::avl::Tree;
    /// use balanced_bst::Deletion;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.delete(1), Deletion::Deleted);
    /// assert_eq!(tree.delete(1), Deletion::NotFound(1));
    /// assert_eq!(tree.search(2).map(|n| n.key()), Some(2));
    /// ```
    pub fn delete(&mut self, key: Key) -> Deletion {
        if self.root.is_none() {
            info!("the tree is empty, nothing to delete");
            return Deletion::EmptyTree;
        }

        let mut outcome = Deletion::NotFound(key);
        self.root = Node::delete(self.root.take(), key, &mut outcome);

        match outcome {
            Deletion::Deleted => self.len -= 1,
            _ => info!("node with key {key} not found"),
        }
        outcome
    }

    /// Checks every AVL invariant: BST ordering, cached heights and balance factors.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let found = validate_subtree(&self.root, None, None)?.1;
        if found != self.len {
            return Err(InvariantViolation::LengthMismatch {
                expected: self.len,
                found,
            });
        }
        Ok(())
    }
}

impl SearchTree for Tree {
    type Node<'a> = &'a Node;

    fn insert(&mut self, key: Key) -> Insertion {
        Tree::insert(self, key)
    }

    fn delete(&mut self, key: Key) -> Deletion {
        Tree::delete(self, key)
    }

    fn search(&self, key: Key) -> Option<&Node> {
        Tree::search(self, key)
    }

    fn root(&self) -> Option<&Node> {
        Tree::root(self)
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// A node of an AVL [`Tree`]. It exclusively owns its children.
#[derive(Clone, Debug)]
pub struct Node {
    key: Key,
    left: Link,
    right: Link,

    /// How many edges are on the longest path down to a leaf. A node with no children has a
    /// height of 0.
    height: i32,
}

impl<'a> NodeHandle for &'a Node {
    fn key(&self) -> Key {
        self.key
    }

    fn left(&self) -> Option<Self> {
        let node: &'a Node = self;
        node.left.as_deref()
    }

    fn right(&self) -> Option<Self> {
        let node: &'a Node = self;
        node.right.as_deref()
    }
}

impl Node {
    fn new_boxed(key: Key) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 0,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> Key {
        self.key
    }

    /// The left child.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The right child.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// The cached height of the subtree rooted here.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Height of the left subtree minus height of the right subtree.
    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// Inserts `key` into the subtree at `link` and returns the (possibly new) subtree root.
    fn insert(link: Link, key: Key, outcome: &mut Insertion) -> Box<Self> {
        let Some(mut node) = link else {
            return Self::new_boxed(key);
        };

        match key.cmp(&node.key) {
            Ordering::Less => node.left = Some(Self::insert(node.left.take(), key, outcome)),
            Ordering::Greater => node.right = Some(Self::insert(node.right.take(), key, outcome)),
            Ordering::Equal => {
                *outcome = Insertion::Duplicate(key);
                return node;
            }
        }

        node.fix_height();
        node.rebalance_after_insert(key)
    }

    /// Restores balance after `key` was inserted below `self`. The side of the child's key that
    /// `key` landed on tells a single rotation apart from a double one.
    fn rebalance_after_insert(self: Box<Self>, key: Key) -> Box<Self> {
        let balance = self.balance_factor();
        let rebalanced = if balance > 1 {
            let left_key = self.left.as_ref().map_or(key, |n| n.key);
            if key < left_key {
                self.rotate_right()
            } else {
                self.rotate_left_right()
            }
        } else if balance < -1 {
            let right_key = self.right.as_ref().map_or(key, |n| n.key);
            if key > right_key {
                self.rotate_left()
            } else {
                self.rotate_right_left()
            }
        } else {
            return self;
        };

        rebalanced.debug_assert_balanced();
        rebalanced
    }

    /// Deletes `key` from the subtree at `link` and returns the (possibly empty) new subtree.
    fn delete(link: Link, key: Key, outcome: &mut Deletion) -> Link {
        let mut node = link?;

        match key.cmp(&node.key) {
            Ordering::Less => node.left = Self::delete(node.left.take(), key, outcome),
            Ordering::Greater => node.right = Self::delete(node.right.take(), key, outcome),
            Ordering::Equal => {
                *outcome = Deletion::Deleted;
                match (node.left.take(), node.right.take()) {
                    (None, only) | (only, None) => return only,
                    (left, Some(right)) => {
                        // Take over the successor's key and remove the successor instead.
                        let successor = right.min_key();
                        node.key = successor;
                        node.left = left;
                        node.right = Self::delete(Some(right), successor, outcome);
                    }
                }
            }
        }

        node.fix_height();
        Some(node.rebalance_after_delete())
    }

    /// Restores balance after a removal below `self`. Unlike insertion the balance of the taller
    /// child decides between a single and a double rotation.
    fn rebalance_after_delete(self: Box<Self>) -> Box<Self> {
        let balance = self.balance_factor();
        let rebalanced = if balance > 1 {
            if balance_factor(&self.left) >= 0 {
                self.rotate_right()
            } else {
                self.rotate_left_right()
            }
        } else if balance < -1 {
            if balance_factor(&self.right) <= 0 {
                self.rotate_left()
            } else {
                self.rotate_right_left()
            }
        } else {
            return self;
        };

        rebalanced.debug_assert_balanced();
        rebalanced
    }

    /// The smallest key in the subtree rooted here.
    fn min_key(&self) -> Key {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node.key
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically. Used to rebalance the tree when the left child is too tall.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      old_root                  new_root
    ///      /     \                   /     \
    ///  new_root   z     rotate ->   x    old_root
    ///   /  \                               /  \
    ///  x    y                             y    z
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = self.left.take().expect("Rotate right => left child");
        debug!("rotating {} right under {}", self.key, new_root.key);

        self.left = new_root.right.take();
        self.fix_height();

        new_root.right = Some(self);
        new_root.fix_height();
        new_root
    }

    /// The mirror image of [`rotate_right`][Node::rotate_right].
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = self.right.take().expect("Rotate left => right child");
        debug!("rotating {} left under {}", self.key, new_root.key);

        self.right = new_root.left.take();
        self.fix_height();

        new_root.left = Some(self);
        new_root.fix_height();
        new_root
    }

    fn rotate_left_right(mut self: Box<Self>) -> Box<Self> {
        self.left = self.left.take().map(Self::rotate_left);
        self.rotate_right()
    }

    fn rotate_right_left(mut self: Box<Self>) -> Box<Self> {
        self.right = self.right.take().map(Self::rotate_right);
        self.rotate_left()
    }

    /// After rebalancing, assert that we've restored the AVL invariant at this node.
    fn debug_assert_balanced(&self) {
        if cfg!(debug_assertions) {
            let left_height = height(&self.left);
            let right_height = height(&self.right);
            assert_eq!(self.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
    }
}

fn height(link: &Link) -> i32 {
    link.as_ref().map_or(EMPTY_HEIGHT, |n| n.height)
}

fn balance_factor(link: &Link) -> i32 {
    link.as_ref().map_or(0, |n| n.balance_factor())
}

/// Returns the recomputed height and node count of the subtree, checking that every key lies
/// strictly between `lower` and `upper`.
fn validate_subtree(
    link: &Link,
    lower: Option<Key>,
    upper: Option<Key>,
) -> Result<(i32, usize), InvariantViolation> {
    let Some(node) = link else {
        return Ok((EMPTY_HEIGHT, 0));
    };

    if lower.map_or(false, |l| node.key <= l) || upper.map_or(false, |u| node.key >= u) {
        return Err(InvariantViolation::OutOfOrder {
            key: node.key,
            lower,
            upper,
        });
    }

    let (left_height, left_count) = validate_subtree(&node.left, lower, Some(node.key))?;
    let (right_height, right_count) = validate_subtree(&node.right, Some(node.key), upper)?;

    let actual = left_height.max(right_height) + 1;
    if node.height != actual {
        return Err(InvariantViolation::StaleHeight {
            key: node.key,
            cached: node.height,
            actual,
        });
    }

    let balance = left_height - right_height;
    if balance.abs() > 1 {
        return Err(InvariantViolation::Unbalanced {
            key: node.key,
            balance,
        });
    }

    Ok((actual, left_count + right_count + 1))
}
