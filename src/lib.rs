//! This crate exposes two self-balancing Binary Search Trees (BSTs) over integer keys, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` (where `height` is the longest path from the root `Node` to a
//! leaf `Node`). Inserting keys in ascending order into a plain BST makes that height `O(N)`.
//! The trees here repair their shape after every insert and delete so the height stays
//! `O(lg N)`:
//!
//! - [`avl::Tree`] keeps the heights of every node's two subtrees within one of each other.
//! - [`red_black::Tree`] colors nodes red or black and keeps every root-to-leaf path at the
//!   same number of black nodes.
//!
//! Both implement [`SearchTree`], and the [`traversal`] and [`print`] modules work with either
//! through [`NodeHandle`].
//!
//! ```
//! use balanced_bst::{avl, red_black, SearchTree};
//!
//! fn fill<T: SearchTree>(mut tree: T) -> Vec<i32> {
//!     for key in [3, 1, 2, 1] {
//!         tree.insert(key);
//!     }
//!     tree.delete(3);
//!     tree.keys()
//! }
//!
//! assert_eq!(fill(avl::Tree::new()), vec![1, 2]);
//! assert_eq!(fill(red_black::Tree::new()), vec![1, 2]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod error;
pub mod print;
pub mod red_black;
pub mod traversal;
mod tree;

#[cfg(test)]
mod test;

pub use error::{InvariantViolation, PrintError, TreeError};
pub use tree::{Deletion, Insertion, Key, NodeHandle, SearchTree};
