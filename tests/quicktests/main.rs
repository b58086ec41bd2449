//! Property tests run against every tree. The properties themselves are written once against
//! [`SearchTree`]; each engine's module wraps them and adds checks of its own invariants.

use std::collections::BTreeSet;

use balanced_bst::{Deletion, Key, SearchTree};
use quickcheck::{Arbitrary, Gen};

mod avl;
mod red_black;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op {
    /// Insert the key into the data structure
    Insert(Key),
    /// Remove the key from the data structure
    Remove(Key),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        let key = Key::from(i8::arbitrary(g));
        if bool::arbitrary(g) {
            Op::Insert(key)
        } else {
            Op::Remove(key)
        }
    }
}

fn keys(xs: &[i8]) -> Vec<Key> {
    xs.iter().copied().map(Key::from).collect()
}

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
pub fn same_keys_as_set<T: SearchTree>(tree: &mut T, ops: &[Op]) -> bool {
    let mut set = BTreeSet::new();
    for op in ops {
        match *op {
            Op::Insert(k) => {
                tree.insert(k);
                set.insert(k);
            }
            Op::Remove(k) => {
                tree.delete(k);
                set.remove(&k);
            }
        }
    }

    tree.len() == set.len() && tree.keys().into_iter().eq(set)
}

/// Inserted keys are found and keys never inserted aren't.
pub fn contains<T: SearchTree>(tree: &mut T, xs: &[i8], nots: &[i8]) -> bool {
    let xs = keys(xs);
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(*x))
        && keys(nots)
            .iter()
            .all(|x| xs.contains(x) || !tree.contains(*x))
}

/// Inserting every key a second time changes nothing.
pub fn duplicate_insert_is_idempotent<T: SearchTree>(tree: &mut T, xs: &[i8]) -> bool {
    let xs = keys(xs);
    for x in &xs {
        tree.insert(*x);
    }
    let before = tree.keys();

    xs.iter().all(|x| !tree.insert(*x).is_inserted()) && tree.keys() == before
}

/// Deleted keys are gone, deleting them again is a no-op, and everything else is still there.
pub fn with_deletions<T: SearchTree>(tree: &mut T, xs: &[i8], deletes: &[i8]) -> bool {
    let xs = keys(xs);
    let deletes = keys(deletes);
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.delete(*delete);
    }

    let again_is_noop = deletes
        .iter()
        .all(|x| tree.delete(*x) != Deletion::Deleted);
    let mut still_present = xs.iter().filter(|x| !deletes.contains(x));

    again_is_noop
        && deletes.iter().all(|x| tree.search(*x).is_none())
        && still_present.all(|x| tree.search(*x).is_some())
}
