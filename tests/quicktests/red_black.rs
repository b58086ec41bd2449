use balanced_bst::red_black::{Color, Tree};
use quickcheck_macros::quickcheck;

use crate::Op;

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    crate::same_keys_as_set(&mut tree, &ops) && tree.validate().is_ok()
}

#[quickcheck]
fn contains(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    crate::contains(&mut Tree::new(), &xs, &nots)
}

#[quickcheck]
fn duplicate_insert_is_idempotent(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    crate::duplicate_insert_is_idempotent(&mut tree, &xs) && tree.validate().is_ok()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    crate::with_deletions(&mut tree, &xs, &deletes) && tree.validate().is_ok()
}

#[quickcheck]
fn root_is_black(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    crate::same_keys_as_set(&mut tree, &ops);

    tree.root().map_or(true, |root| root.color() == Color::Black)
}
