//! A Red-Black tree. Every node is colored red or black and the tree keeps four properties:
//!
//! 1. Every node is red or black and the sentinel is black.
//! 2. The root is black.
//! 3. A red node never has a red child.
//! 4. Every path from a node down to the sentinel crosses the same number of black nodes.
//!
//! Together these keep the height below `2 * lg(n + 1)`.
//!
//! Nodes live in an arena and refer to each other by index. Index 0 is the sentinel: it stands
//! in for every missing child and for the root's parent. Like any other slot it has a parent
//! link, which deletion uses to find its way back up from an empty position.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::red_black::{Color, Tree};
//! use balanced_bst::{Deletion, Insertion};
//!
//! let mut tree = Tree::new();
//! for key in [20, 7, 9, 2, 40, 22, 70, 70, 25] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.len(), 8);
//! assert_eq!(tree.root().map(|n| n.color()), Some(Color::Black));
//!
//! assert_eq!(tree.delete(20), Deletion::Deleted);
//! assert!(tree.search(20).is_none());
//! assert_eq!(tree.delete(20), Deletion::NotFound(20));
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, info, trace};

use crate::error::InvariantViolation;
use crate::tree::{Deletion, Insertion, Key, NodeHandle, SearchTree};

type NodeId = usize;

/// The sentinel's slot in the arena.
const NIL: NodeId = 0;

/// The color of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// A red node. Its children are both black.
    Red,
    /// A black node. Counted by the black-height.
    Black,
}

#[derive(Clone, Debug)]
struct Slot {
    key: Key,
    color: Color,
    left: NodeId,
    right: NodeId,
    parent: NodeId,
}

impl Slot {
    fn sentinel() -> Self {
        Self {
            key: 0,
            color: Color::Black,
            left: NIL,
            right: NIL,
            parent: NIL,
        }
    }

    fn new(key: Key) -> Self {
        Self {
            key,
            color: Color::Red,
            left: NIL,
            right: NIL,
            parent: NIL,
        }
    }
}

/// A color-balanced Binary Search Tree.
#[derive(Clone)]
pub struct Tree {
    nodes: Vec<Slot>,
    root: NodeId,
    /// Slots released by deletions, reused by later insertions.
    free: Vec<NodeId>,
    len: usize,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: vec![Slot::sentinel()],
            root: NIL,
            free: Vec::new(),
            len: 0,
        }
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.handle(self.root)
    }

    /// How many keys are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    /// The number of edges on the longest path from the root down to a node: `-1` when empty.
    pub fn height(&self) -> i32 {
        let mut height = -1;
        let mut level = vec![self.root];
        while level.iter().any(|&id| id != NIL) {
            height += 1;
            level = level
                .into_iter()
                .filter(|&id| id != NIL)
                .flat_map(|id| [self.nodes[id].left, self.nodes[id].right])
                .collect();
        }
        height
    }

    /// Finds the node holding `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::red_black::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(70);
    ///
    /// assert_eq!(tree.search(70).map(|n| n.key()), Some(70));
    /// assert!(tree.search(44).is_none());
    /// ```
    pub fn search(&self, key: Key) -> Option<NodeRef<'_>> {
        self.handle(self.find(key))
    }

    /// Inserts `key` as a red leaf and recolors/rotates until no red node has a red parent.
    /// Inserting a key that's already present is reported as [`Insertion::Duplicate`] and leaves
    /// the tree untouched.
    pub fn insert(&mut self, key: Key) -> Insertion {
        let mut parent = NIL;
        let mut current = self.root;
        while current != NIL {
            parent = current;
            current = match key.cmp(&self.nodes[current].key) {
                Ordering::Less => self.nodes[current].left,
                Ordering::Greater => self.nodes[current].right,
                Ordering::Equal => {
                    info!("attempted to insert duplicate key {key}");
                    return Insertion::Duplicate(key);
                }
            };
        }

        let id = self.allocate(key);
        self.nodes[id].parent = parent;
        if parent == NIL {
            self.root = id;
        } else if key < self.nodes[parent].key {
            self.nodes[parent].left = id;
        } else {
            self.nodes[parent].right = id;
        }
        self.len += 1;

        self.fix_insert(id);
        Insertion::Inserted
    }

    /// Deletes `key` if present. Removing a black node leaves one path a black node short, which
    /// [`fix_delete`][Tree::fix_delete] repairs.
    pub fn delete(&mut self, key: Key) -> Deletion {
        if self.root == NIL {
            info!("the tree is empty, nothing to delete");
            return Deletion::EmptyTree;
        }

        let target = self.find(key);
        if target == NIL {
            info!("node with key {key} not found");
            return Deletion::NotFound(key);
        }

        let Slot {
            left,
            right,
            color,
            ..
        } = self.nodes[target];

        let (removed_color, replacement) = if left == NIL {
            self.transplant(target, right);
            (color, right)
        } else if right == NIL {
            self.transplant(target, left);
            (color, left)
        } else {
            let successor = self.minimum(right);
            let successor_color = self.nodes[successor].color;
            // The node that ends up in the successor's old position.
            let replacement = self.nodes[successor].right;

            if self.nodes[successor].parent != target {
                self.transplant(successor, replacement);
                self.nodes[successor].right = right;
            }
            // When the successor is `target`'s right child and has no right child, this points
            // the sentinel back at the successor so `fix_delete` can climb from there.
            let successor_right = self.nodes[successor].right;
            self.nodes[successor_right].parent = successor;

            self.transplant(target, successor);
            self.nodes[successor].left = left;
            self.nodes[left].parent = successor;
            self.nodes[successor].color = color;

            (successor_color, replacement)
        };

        self.release(target);
        self.len -= 1;

        if removed_color == Color::Black {
            self.fix_delete(replacement);
        }
        Deletion::Deleted
    }

    /// Checks every Red-Black invariant along with BST ordering and parent links.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if self.nodes[NIL].color == Color::Red {
            return Err(InvariantViolation::RedSentinel);
        }
        if self.root != NIL && self.nodes[self.root].color == Color::Red {
            return Err(InvariantViolation::RedRoot(self.nodes[self.root].key));
        }

        let (_, found) = self.validate_subtree(self.root, None, None)?;
        if found != self.len {
            return Err(InvariantViolation::LengthMismatch {
                expected: self.len,
                found,
            });
        }
        Ok(())
    }

    /// Returns the black-height and node count below `id`.
    fn validate_subtree(
        &self,
        id: NodeId,
        lower: Option<Key>,
        upper: Option<Key>,
    ) -> Result<(usize, usize), InvariantViolation> {
        if id == NIL {
            return Ok((0, 0));
        }

        let node = &self.nodes[id];
        if lower.map_or(false, |l| node.key <= l) || upper.map_or(false, |u| node.key >= u) {
            return Err(InvariantViolation::OutOfOrder {
                key: node.key,
                lower,
                upper,
            });
        }

        for child in [node.left, node.right] {
            if child == NIL {
                continue;
            }
            let child_node = &self.nodes[child];
            if child_node.parent != id {
                return Err(InvariantViolation::BrokenParentLink {
                    parent: node.key,
                    child: child_node.key,
                });
            }
            if node.color == Color::Red && child_node.color == Color::Red {
                return Err(InvariantViolation::RedChildOfRed {
                    parent: node.key,
                    child: child_node.key,
                });
            }
        }

        let (left, left_count) = self.validate_subtree(node.left, lower, Some(node.key))?;
        let (right, right_count) = self.validate_subtree(node.right, Some(node.key), upper)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch {
                key: node.key,
                left,
                right,
            });
        }

        let own = usize::from(node.color == Color::Black);
        Ok((left + own, left_count + right_count + 1))
    }

    fn handle(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id != NIL).then_some(NodeRef { tree: self, id })
    }

    /// Returns the slot holding `key`, or [`NIL`].
    fn find(&self, key: Key) -> NodeId {
        let mut current = self.root;
        while current != NIL {
            let node = &self.nodes[current];
            trace!("search for {key} visiting {}", node.key);
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return current,
                Ordering::Greater => node.right,
            };
        }
        NIL
    }

    fn minimum(&self, mut id: NodeId) -> NodeId {
        while self.nodes[id].left != NIL {
            id = self.nodes[id].left;
        }
        id
    }

    fn allocate(&mut self, key: Key) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Slot::new(key);
                id
            }
            None => {
                self.nodes.push(Slot::new(key));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        self.nodes[id] = Slot::sentinel();
        self.free.push(id);
    }

    fn parent(&self, id: NodeId) -> NodeId {
        self.nodes[id].parent
    }

    fn left(&self, id: NodeId) -> NodeId {
        self.nodes[id].left
    }

    fn right(&self, id: NodeId) -> NodeId {
        self.nodes[id].right
    }

    fn is_red(&self, id: NodeId) -> bool {
        self.nodes[id].color == Color::Red
    }

    fn is_black(&self, id: NodeId) -> bool {
        self.nodes[id].color == Color::Black
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        debug_assert!(
            id != NIL || color == Color::Black,
            "the sentinel must stay black"
        );
        self.nodes[id].color = color;
    }

    /// Repairs a red node (`current`) sitting under a red parent.
    fn fix_insert(&mut self, mut current: NodeId) {
        // The root's parent is the sentinel, which is black, so this stops at the root.
        while self.is_red(self.parent(current)) {
            let parent = self.parent(current);
            let grandparent = self.parent(parent);

            if parent == self.left(grandparent) {
                let uncle = self.right(grandparent);
                if self.is_red(uncle) {
                    debug!("insert fixup at {}: red uncle", self.nodes[current].key);
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    current = grandparent;
                } else {
                    if current == self.right(parent) {
                        // Inner grandchild: straighten the zig-zag first.
                        current = parent;
                        self.rotate_left(current);
                    }
                    let parent = self.parent(current);
                    let grandparent = self.parent(parent);
                    debug!("insert fixup at {}: black uncle", self.nodes[current].key);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.left(grandparent);
                if self.is_red(uncle) {
                    debug!("insert fixup at {}: red uncle", self.nodes[current].key);
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    current = grandparent;
                } else {
                    if current == self.left(parent) {
                        current = parent;
                        self.rotate_right(current);
                    }
                    let parent = self.parent(current);
                    let grandparent = self.parent(parent);
                    debug!("insert fixup at {}: black uncle", self.nodes[current].key);
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_left(grandparent);
                }
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Repairs the missing black on every path through `current`, which took the place of a
    /// removed black node. `current` may be the sentinel, whose parent link was pointed at the
    /// right node by the deletion.
    fn fix_delete(&mut self, mut current: NodeId) {
        while current != self.root && self.is_black(current) {
            let parent = self.parent(current);

            if current == self.left(parent) {
                let mut sibling = self.right(parent);
                if self.is_red(sibling) {
                    debug!("delete fixup under {}: red sibling", self.nodes[parent].key);
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_left(parent);
                    sibling = self.right(self.parent(current));
                }

                if self.is_black(self.left(sibling)) && self.is_black(self.right(sibling)) {
                    self.set_color(sibling, Color::Red);
                    current = self.parent(current);
                } else {
                    if self.is_black(self.right(sibling)) {
                        let near = self.left(sibling);
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_right(sibling);
                        sibling = self.right(self.parent(current));
                    }

                    let parent = self.parent(current);
                    let far = self.right(sibling);
                    self.nodes[sibling].color = self.nodes[parent].color;
                    self.set_color(parent, Color::Black);
                    self.set_color(far, Color::Black);
                    self.rotate_left(parent);
                    current = self.root;
                }
            } else {
                let mut sibling = self.left(parent);
                if self.is_red(sibling) {
                    debug!("delete fixup under {}: red sibling", self.nodes[parent].key);
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate_right(parent);
                    sibling = self.left(self.parent(current));
                }

                if self.is_black(self.right(sibling)) && self.is_black(self.left(sibling)) {
                    self.set_color(sibling, Color::Red);
                    current = self.parent(current);
                } else {
                    if self.is_black(self.left(sibling)) {
                        let near = self.right(sibling);
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_left(sibling);
                        sibling = self.left(self.parent(current));
                    }

                    let parent = self.parent(current);
                    let far = self.left(sibling);
                    self.nodes[sibling].color = self.nodes[parent].color;
                    self.set_color(parent, Color::Black);
                    self.set_color(far, Color::Black);
                    self.rotate_right(parent);
                    current = self.root;
                }
            }
        }

        self.set_color(current, Color::Black);
    }

    /// Puts `replacement` where `target` hangs from its parent (or at the root). The
    /// replacement's parent link is written even when it is the sentinel.
    fn transplant(&mut self, target: NodeId, replacement: NodeId) {
        let parent = self.parent(target);
        if parent == NIL {
            self.root = replacement;
        } else if target == self.left(parent) {
            self.nodes[parent].left = replacement;
        } else {
            self.nodes[parent].right = replacement;
        }
        self.nodes[replacement].parent = parent;
    }

    /// Rotate `old_root` to the left. Its right child takes its place and the right child's left
    /// subtree moves across to become `old_root`'s right subtree.
    ///
    /// # Diagram
    ///
    /// ```text
    ///    old_root                 new_root
    ///    /     \                  /     \
    ///   x    new_root  rotate -> old_root  z
    ///         /  \               /  \
    ///        y    z             x    y
    /// ```
    fn rotate_left(&mut self, old_root: NodeId) {
        let new_root = self.right(old_root);
        debug_assert!(new_root != NIL, "Rotate left => right child");
        let moved = self.left(new_root);

        self.nodes[old_root].right = moved;
        // The sentinel's parent may be in use by `fix_delete` so leave it alone.
        if moved != NIL {
            self.nodes[moved].parent = old_root;
        }

        let parent = self.parent(old_root);
        self.nodes[new_root].parent = parent;
        if parent == NIL {
            self.root = new_root;
        } else if old_root == self.left(parent) {
            self.nodes[parent].left = new_root;
        } else {
            self.nodes[parent].right = new_root;
        }

        self.nodes[new_root].left = old_root;
        self.nodes[old_root].parent = new_root;
    }

    /// The mirror image of [`rotate_left`][Tree::rotate_left].
    fn rotate_right(&mut self, old_root: NodeId) {
        let new_root = self.left(old_root);
        debug_assert!(new_root != NIL, "Rotate right => left child");
        let moved = self.right(new_root);

        self.nodes[old_root].left = moved;
        if moved != NIL {
            self.nodes[moved].parent = old_root;
        }

        let parent = self.parent(old_root);
        self.nodes[new_root].parent = parent;
        if parent == NIL {
            self.root = new_root;
        } else if old_root == self.right(parent) {
            self.nodes[parent].right = new_root;
        } else {
            self.nodes[parent].left = new_root;
        }

        self.nodes[new_root].right = old_root;
        self.nodes[old_root].parent = new_root;
    }
}

impl SearchTree for Tree {
    type Node<'a> = NodeRef<'a>;

    fn insert(&mut self, key: Key) -> Insertion {
        Tree::insert(self, key)
    }

    fn delete(&mut self, key: Key) -> Deletion {
        Tree::delete(self, key)
    }

    fn search(&self, key: Key) -> Option<NodeRef<'_>> {
        Tree::search(self, key)
    }

    fn root(&self) -> Option<NodeRef<'_>> {
        Tree::root(self)
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// A read-only handle to a node of a Red-Black [`Tree`]. Children backed by the sentinel come
/// back as `None`.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn slot(&self) -> &'a Slot {
        &self.tree.nodes[self.id]
    }

    /// The key stored in this node.
    pub fn key(&self) -> Key {
        self.slot().key
    }

    /// The color of this node.
    pub fn color(&self) -> Color {
        self.slot().color
    }

    /// The left child.
    pub fn left(&self) -> Option<NodeRef<'a>> {
        self.tree.handle(self.slot().left)
    }

    /// The right child.
    pub fn right(&self) -> Option<NodeRef<'a>> {
        self.tree.handle(self.slot().right)
    }
}

impl<'a> NodeHandle for NodeRef<'a> {
    fn key(&self) -> Key {
        NodeRef::key(self)
    }

    fn left(&self) -> Option<Self> {
        NodeRef::left(self)
    }

    fn right(&self) -> Option<Self> {
        NodeRef::right(self)
    }

    fn is_red(&self) -> bool {
        self.color() == Color::Red
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key())
            .field("color", &self.color())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(tree: &Tree) -> Vec<Key> {
        SearchTree::keys(tree)
    }

    fn color_of(tree: &Tree, key: Key) -> Option<Color> {
        tree.search(key).map(|n| n.color())
    }

    fn demo_tree() -> Tree {
        let mut tree = Tree::new();
        for key in [20, 7, 9, 2, 40, 22, 70, 70, 25] {
            tree.insert(key);
        }
        tree
    }

    #[test]
    fn first_insert_becomes_black_root() {
        let mut tree = Tree::new();
        assert_eq!(tree.insert(1), Insertion::Inserted);

        assert_eq!(tree.root().map(|n| n.key()), Some(1));
        assert_eq!(color_of(&tree, 1), Some(Color::Black));
        tree.validate().unwrap();
    }

    #[test]
    fn red_uncle_recolors() {
        let mut tree = Tree::new();
        tree.insert(2);
        tree.insert(1);
        tree.insert(3);
        tree.insert(4);

        // 4's uncle 1 was red so 1 and 3 turn black and 2 stays the (black) root.
        assert_eq!(color_of(&tree, 1), Some(Color::Black));
        assert_eq!(color_of(&tree, 3), Some(Color::Black));
        assert_eq!(color_of(&tree, 4), Some(Color::Red));
        assert_eq!(color_of(&tree, 2), Some(Color::Black));
        tree.validate().unwrap();
    }

    #[test]
    fn outer_grandchild_rotates_grandparent() {
        let mut tree = Tree::new();
        tree.insert(1);
        tree.insert(2);
        tree.insert(3);

        let root = tree.root().unwrap();
        assert_eq!(root.key(), 2);
        assert_eq!(root.left().map(|n| n.color()), Some(Color::Red));
        assert_eq!(root.right().map(|n| n.color()), Some(Color::Red));
        tree.validate().unwrap();
    }

    #[test]
    fn inner_grandchild_rotates_twice() {
        let mut tree = Tree::new();
        tree.insert(3);
        tree.insert(1);
        tree.insert(2);

        assert_eq!(tree.root().map(|n| n.key()), Some(2));
        assert_eq!(keys(&tree), vec![1, 2, 3]);
        tree.validate().unwrap();
    }

    #[test]
    fn duplicate_insert_changes_nothing() {
        let mut tree = demo_tree();

        assert_eq!(tree.len(), 8);
        assert_eq!(tree.insert(70), Insertion::Duplicate(70));
        assert_eq!(tree.len(), 8);
        assert_eq!(keys(&tree), vec![2, 7, 9, 20, 22, 25, 40, 70]);
        tree.validate().unwrap();
    }

    #[test]
    fn demo_deletions_keep_invariants() {
        let mut tree = demo_tree();
        let expected: [&[Key]; 4] = [
            &[2, 7, 9, 22, 25, 40, 70],
            &[2, 7, 9, 22, 25, 70],
            &[7, 9, 22, 25, 70],
            &[9, 22, 25, 70],
        ];

        for (key, expected) in [20, 40, 2, 7].into_iter().zip(expected) {
            assert_eq!(tree.delete(key), Deletion::Deleted);
            tree.validate().unwrap();
            assert_eq!(keys(&tree), expected);
        }

        assert!(tree.search(70).is_some());
        assert!(tree.search(44).is_none());
    }

    #[test]
    fn delete_missing_and_empty() {
        let mut tree = Tree::new();
        assert_eq!(tree.delete(1), Deletion::EmptyTree);

        tree.insert(1);
        assert_eq!(tree.delete(2), Deletion::NotFound(2));
        assert_eq!(tree.delete(1), Deletion::Deleted);
        assert!(tree.is_empty());
        assert_eq!(tree.delete(1), Deletion::EmptyTree);
        tree.validate().unwrap();
    }

    #[test]
    fn delete_black_leaf_with_red_sibling() {
        let mut tree = Tree::new();
        for key in 1..=6 {
            tree.insert(key);
        }
        // 2 over (1, 4 over (3, 5 over (_, 6))) with 4 red.
        assert_eq!(color_of(&tree, 4), Some(Color::Red));

        assert_eq!(tree.delete(1), Deletion::Deleted);
        tree.validate().unwrap();
        assert_eq!(keys(&tree), vec![2, 3, 4, 5, 6]);
        assert_eq!(tree.root().map(|n| n.key()), Some(4));
    }

    #[test]
    fn delete_successor_that_is_direct_child() {
        let mut tree = Tree::new();
        for key in [10, 5, 15, 20, 12] {
            tree.insert(key);
        }

        // 15's successor is its right child 20, which has no children.
        assert_eq!(tree.delete(15), Deletion::Deleted);
        tree.validate().unwrap();
        assert_eq!(keys(&tree), vec![5, 10, 12, 20]);
        assert_eq!(tree.search(20).and_then(|n| n.left()).map(|n| n.key()), Some(12));
    }

    #[test]
    fn deleting_everything_empties_the_tree() {
        let mut tree = Tree::new();
        for key in 0..32 {
            tree.insert(key);
        }
        for key in (0..32).rev().step_by(2).chain((0..32).step_by(2)) {
            assert_eq!(tree.delete(key), Deletion::Deleted);
            tree.validate().unwrap();
        }

        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.height(), -1);
    }

    #[test]
    fn released_slots_are_reused() {
        let mut tree = Tree::new();
        for key in 0..8 {
            tree.insert(key);
        }
        for key in 0..4 {
            tree.delete(key);
        }
        for key in 10..14 {
            tree.insert(key);
        }

        // One sentinel slot plus eight node slots.
        assert_eq!(tree.nodes.len(), 9);
        tree.validate().unwrap();
    }

    #[test]
    fn validate_reports_red_root() {
        let mut tree = Tree::new();
        tree.insert(1);
        let root = tree.root;
        tree.nodes[root].color = Color::Red;

        assert_eq!(tree.validate(), Err(InvariantViolation::RedRoot(1)));
    }

    #[test]
    fn validate_reports_black_height_mismatch() {
        let mut tree = Tree::new();
        for key in [2, 1, 3] {
            tree.insert(key);
        }
        let left = tree.find(1);
        tree.nodes[left].color = Color::Black;

        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::BlackHeightMismatch {
                key: 2,
                left: 1,
                right: 0
            })
        );
    }
}
