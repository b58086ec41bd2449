//! Ways to walk a tree through its [`NodeHandle`]s. Depth-first orders come in an iterative and a
//! recursive flavour; breadth-first is always iterative.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::red_black::Tree;
//! use balanced_bst::traversal::{keys, Order};
//!
//! let mut tree = Tree::new();
//! for key in [2, 1, 3] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(keys(tree.root(), Order::PreOrder), vec![2, 1, 3]);
//! assert_eq!(keys(tree.root(), Order::InOrder), vec![1, 2, 3]);
//! assert_eq!(keys(tree.root(), Order::PostOrder), vec![1, 3, 2]);
//! assert_eq!(keys(tree.root(), Order::BreadthFirst), vec![2, 1, 3]);
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::tree::{Key, NodeHandle};

/// The order nodes are visited in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree. Yields keys in ascending order.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
    /// Level by level, left to right.
    BreadthFirst,
}

impl Order {
    /// Every order, in the sequence the demo prints them.
    pub const ALL: [Order; 4] = [
        Order::PreOrder,
        Order::InOrder,
        Order::PostOrder,
        Order::BreadthFirst,
    ];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::PreOrder => "Pre-order",
            Order::InOrder => "In-order",
            Order::PostOrder => "Post-order",
            Order::BreadthFirst => "Breadth-first",
        };
        f.write_str(name)
    }
}

/// Whether a depth-first traversal uses the call stack or an explicit one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Keeps pending nodes on a `Vec` used as a stack.
    #[default]
    Iterative,
    /// Recurses once per level.
    Recursive,
}

/// Calls `visit` on every node under `root` in the given order.
pub fn traverse<N, F>(root: Option<N>, order: Order, strategy: Strategy, mut visit: F)
where
    N: NodeHandle,
    F: FnMut(N),
{
    let Some(root) = root else {
        return;
    };

    match (order, strategy) {
        (Order::BreadthFirst, _) => breadth_first(root, &mut visit),
        (Order::PreOrder, Strategy::Iterative) => pre_order_iterative(root, &mut visit),
        (Order::InOrder, Strategy::Iterative) => in_order_iterative(root, &mut visit),
        (Order::PostOrder, Strategy::Iterative) => post_order_iterative(root, &mut visit),
        (Order::PreOrder | Order::InOrder | Order::PostOrder, Strategy::Recursive) => {
            depth_first_recursive(Some(root), order, &mut visit)
        }
    }
}

/// Collects the keys under `root` in the given order.
pub fn keys<N: NodeHandle>(root: Option<N>, order: Order) -> Vec<Key> {
    let mut keys = Vec::new();
    traverse(root, order, Strategy::Iterative, |n| keys.push(n.key()));
    keys
}

fn depth_first_recursive<N, F>(node: Option<N>, order: Order, visit: &mut F)
where
    N: NodeHandle,
    F: FnMut(N),
{
    let Some(node) = node else {
        return;
    };

    if order == Order::PreOrder {
        visit(node);
    }
    depth_first_recursive(node.left(), order, visit);
    if order == Order::InOrder {
        visit(node);
    }
    depth_first_recursive(node.right(), order, visit);
    if order == Order::PostOrder {
        visit(node);
    }
}

fn pre_order_iterative<N: NodeHandle, F: FnMut(N)>(root: N, visit: &mut F) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        visit(node);
        // Push right first so the left subtree is visited first.
        stack.extend(node.right());
        stack.extend(node.left());
    }
}

fn in_order_iterative<N: NodeHandle, F: FnMut(N)>(root: N, visit: &mut F) {
    let mut stack = Vec::new();
    let mut current = Some(root);
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        let Some(node) = stack.pop() else {
            return;
        };
        visit(node);
        current = node.right();
    }
}

fn post_order_iterative<N: NodeHandle, F: FnMut(N)>(root: N, visit: &mut F) {
    // A reversed node-right-left walk is left-right-node.
    let mut stack = vec![root];
    let mut reversed = Vec::new();
    while let Some(node) = stack.pop() {
        reversed.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }
    reversed.into_iter().rev().for_each(visit);
}

fn breadth_first<N: NodeHandle, F: FnMut(N)>(root: N, visit: &mut F) {
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        visit(node);
        queue.extend(node.left());
        queue.extend(node.right());
    }
}
