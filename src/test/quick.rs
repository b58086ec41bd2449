use quickcheck::{Arbitrary, Gen};

use crate::tree::Key;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Insert the key into the data structure
    Insert(Key),
    /// Remove the key from the data structure
    Remove(Key),
    /// Look the key up
    Search(Key),
    /// Compare iterators
    Iter,
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation. Keys come from an `i8` so the same
    /// key shows up often enough to exercise duplicates and deletes that hit.
    fn arbitrary(g: &mut Gen) -> Self {
        let key = Key::from(i8::arbitrary(g));
        match g.choose(&[0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(key),
            1 => Op::Remove(key),
            2 => Op::Search(key),
            3 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
