use ordered_tree::OrderedTree;

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::{init_tracing, Op};

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of elements in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                tree.remove(x);
                set.remove(x);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_tracing();
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    set.iter().all(|x| tree.find(x) == Some(x)) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    init_tracing();
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn size_changes_by_exactly_one(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: OrderedTree<_> = xs.into_iter().collect();
    let before = tree.iter().count();

    let inserted = tree.insert(x);
    let after_insert = tree.iter().count();
    let removed = tree.remove(&x);
    let after_remove = tree.iter().count();

    removed
        && after_insert == before + usize::from(inserted)
        && after_remove == after_insert - 1
}

#[quickcheck]
fn rejected_operations_leave_the_shape_alone(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: OrderedTree<_> = xs.into_iter().collect();
    tree.insert(x);
    let snapshot = tree.clone();

    let duplicate_rejected = !tree.insert(x);
    let unchanged_after_insert = tree.structural_equals(&snapshot);

    tree.remove(&x);
    let snapshot = tree.clone();
    let missing_rejected = !tree.remove(&x);

    duplicate_rejected && unchanged_after_insert && missing_rejected && tree == snapshot
}

#[quickcheck]
fn same_insertion_order_means_equal(xs: Vec<i8>) -> bool {
    let first: OrderedTree<_> = xs.iter().copied().collect();
    let second: OrderedTree<_> = xs.iter().copied().collect();

    first.structural_equals(&second) && first.clone() == second
}

#[quickcheck]
fn clear_forgets_everything(xs: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    tree.clear();

    tree.is_empty() && xs.iter().all(|x| tree.find(x).is_none())
}
