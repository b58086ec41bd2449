//! Draws a tree as ASCII art, one row per level with `/` and `\` edges in between.
//!
//! Every level is laid out as if the tree were complete, so the output gets twice as wide with
//! every level. That's why the printer refuses trees deeper than
//! [`PrintOptions::max_level`] and keys wider than [`PrintOptions::key_width`].
//!
//! # Examples
//!
//! ```
//! use balanced_bst::avl::Tree;
//! use balanced_bst::print::{render, PrintOptions};
//!
//! let mut tree = Tree::new();
//! for key in [1, 2, 3] {
//!     tree.insert(key);
//! }
//!
//! let drawing = render(tree.root(), &PrintOptions::default()).unwrap();
//! assert_eq!(drawing, "    2\n   / \\\n  1   3\n");
//! ```

use std::collections::VecDeque;

use crate::error::PrintError;
use crate::tree::{Key, NodeHandle};

const ANSI_RED: &str = "\u{1b}[31m";
const ANSI_RESET: &str = "\u{1b}[0m";

/// How many columns each key takes up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyWidth {
    /// Keys from 0 to 99.
    #[default]
    Two,
    /// Keys from 0 to 999.
    Three,
    /// Keys from 0 to 9999.
    Four,
}

impl KeyWidth {
    fn columns(self) -> usize {
        match self {
            KeyWidth::Two => 2,
            KeyWidth::Three => 3,
            KeyWidth::Four => 4,
        }
    }

    /// The largest key that fits.
    pub fn max_key(self) -> Key {
        match self {
            KeyWidth::Two => 99,
            KeyWidth::Three => 999,
            KeyWidth::Four => 9999,
        }
    }
}

/// Printer settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    /// Columns per key.
    pub key_width: KeyWidth,
    /// The deepest tree (counted in levels) that will be drawn.
    pub max_level: usize,
    /// Whether red nodes are wrapped in ANSI color codes.
    pub colors: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            key_width: KeyWidth::Two,
            max_level: 6,
            colors: false,
        }
    }
}

/// A node placed on the grid: its level and its slot within that level as if the tree were
/// complete.
struct Placed<N> {
    node: N,
    level: usize,
    slot: usize,
}

/// Draws the tree under `root`.
pub fn render<N: NodeHandle>(root: Option<N>, options: &PrintOptions) -> Result<String, PrintError> {
    let Some(root) = root else {
        return Ok("The tree is empty.\n".to_string());
    };

    let levels = count_levels(Some(root));
    if levels > options.max_level {
        return Err(PrintError::TooDeep {
            max: options.max_level,
            actual: levels,
        });
    }

    let placed = place(root);
    let max = options.key_width.max_key();
    if let Some(p) = placed.iter().find(|p| !(0..=max).contains(&p.node.key())) {
        return Err(PrintError::KeyOutOfRange {
            key: p.node.key(),
            max,
        });
    }

    let columns = options.key_width.columns();
    // Width of one slot at the given level. Leaves on the last level get a key plus a gap.
    let slot_width = |level: usize| 2 * columns << (levels - 1 - level);

    let mut out = String::new();
    for level in 0..levels {
        let row: Vec<&Placed<N>> = placed.iter().filter(|p| p.level == level).collect();
        let width = slot_width(level);

        let mut line = String::new();
        let mut cursor = 0;
        for p in &row {
            let start = p.slot * width + (width - columns) / 2;
            line.push_str(&" ".repeat(start - cursor));
            let text = format!("{:>columns$}", p.node.key());
            if options.colors && p.node.is_red() {
                line.push_str(ANSI_RED);
                line.push_str(&text);
                line.push_str(ANSI_RESET);
            } else {
                line.push_str(&text);
            }
            cursor = start + columns;
        }
        push_line(&mut out, &line);

        if level + 1 < levels {
            let mut edges = String::new();
            let mut cursor = 0;
            for p in &row {
                let base = p.slot * width;
                for (child, column, glyph) in [
                    (p.node.left(), base + 3 * width / 8, '/'),
                    (p.node.right(), base + 5 * width / 8, '\\'),
                ] {
                    if child.is_some() {
                        edges.push_str(&" ".repeat(column - cursor));
                        edges.push(glyph);
                        cursor = column + 1;
                    }
                }
            }
            push_line(&mut out, &edges);
        }
    }

    Ok(out)
}

/// Draws the tree under `root` to standard output.
pub fn print<N: NodeHandle>(root: Option<N>, options: &PrintOptions) -> Result<(), PrintError> {
    print!("{}", render(root, options)?);
    Ok(())
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

fn count_levels<N: NodeHandle>(node: Option<N>) -> usize {
    node.map_or(0, |n| count_levels(n.left()).max(count_levels(n.right())) + 1)
}

/// Lists every node level by level, left to right.
fn place<N: NodeHandle>(root: N) -> Vec<Placed<N>> {
    let mut placed = Vec::new();
    let mut queue = VecDeque::from([(root, 0, 0)]);
    while let Some((node, level, slot)) = queue.pop_front() {
        if let Some(left) = node.left() {
            queue.push_back((left, level + 1, 2 * slot));
        }
        if let Some(right) = node.right() {
            queue.push_back((right, level + 1, 2 * slot + 1));
        }
        placed.push(Placed { node, level, slot });
    }
    placed
}
