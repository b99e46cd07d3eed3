use avl::{AvlTree, Node, TreeError};
use quickcheck::{Arbitrary, Gen};

use crate::{init_logger, Op};

/// Checks every node: the cached height matches the children, and the children's heights differ by
/// at most one. Returns the height of `node`.
fn check_avl<T>(node: &Node<T>) -> isize {
    let left = node.left().map_or(-1, check_avl);
    let right = node.right().map_or(-1, check_avl);
    assert_eq!(node.height() as isize, left.max(right) + 1);
    assert!(
        (right - left).abs() <= 1,
        "balance factor {} out of range",
        right - left
    );
    left.max(right) + 1
}

fn assert_balanced<T>(tree: &AvlTree<T>) {
    if let Some(root) = tree.root() {
        check_avl(root);
    }
}

fn is_sorted<T: Ord>(values: &[&T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Applies a set of operations to a tree and a sorted `Vec`, checking the AVL invariant after
/// every mutation.
fn do_ops(ops: &[Op<i8>], tree: &mut AvlTree<i8>, model: &mut Vec<i8>) {
    for op in ops {
        match op {
            Op::Add(x) => {
                tree.add(*x).unwrap();
                let pos = model.partition_point(|y| y <= x);
                model.insert(pos, *x);
            }
            Op::Remove(x) => {
                let expected = match model.binary_search(x) {
                    Ok(pos) => {
                        model.remove(pos);
                        true
                    }
                    Err(_) => false,
                };
                assert_eq!(tree.remove(x), expected);
            }
        }
        assert_balanced(tree);
    }
}

#[test]
fn long_random_sequence_stays_balanced() {
    init_logger();
    let mut g = Gen::new(100);
    let ops: Vec<Op<i8>> = (0..5_000).map(|_| Op::arbitrary(&mut g)).collect();

    let mut tree = AvlTree::new();
    let mut model = Vec::new();
    do_ops(&ops, &mut tree, &mut model);

    assert_eq!(tree.inorder().cloned(), model);
    assert_eq!(tree.len(), model.len());
}

#[test]
fn height_stays_within_avl_bound() {
    let mut tree = AvlTree::<u32>::new();
    for n in 1..=4_096u32 {
        // Ascending input is the worst case for an unbalanced tree.
        tree.add(n).unwrap();

        let bound = 1.44 * f64::from(n + 2).log2() - 0.328;
        assert!(tree.height() as f64 <= bound);
    }
    assert_balanced(&tree);
}

#[test]
fn remove_two_children_round_trip() {
    init_logger();
    let mut tree: AvlTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

    assert!(tree.remove(&5));

    assert_eq!(tree.inorder().cloned(), [1, 3, 4, 7, 8, 9]);
    assert_eq!(tree.to_string(), "[1, 3, 4, 7, 8, 9]");
    assert_balanced(&tree);
}

#[test]
fn ascending_three_rotates_once() {
    let tree: AvlTree<i32> = [1, 2, 3].into_iter().collect();

    let root = tree.root().unwrap();
    assert_eq!(*root.value(), 2);
    assert_eq!(root.left().map(Node::value), Some(&1));
    assert_eq!(root.right().map(Node::value), Some(&3));
    assert_eq!(tree.height(), 1);
}

#[test]
fn empty_tree_errors() {
    let tree = AvlTree::<i32>::new();
    assert_eq!(tree.min(), Err(TreeError::EmptyTree));
    assert_eq!(tree.max(), Err(TreeError::EmptyTree));

    let mut tree = AvlTree::<i32>::new();
    let nothing: Option<i32> = None;
    assert_eq!(tree.add(nothing), Err(TreeError::NullValue));
}

#[test]
fn remove_missing_from_ten() {
    let mut tree: AvlTree<i32> = (1..=10).collect();
    let before = tree.inorder().cloned();

    assert!(!tree.remove(&11));
    assert_eq!(tree.inorder().cloned(), before);
    assert_eq!(tree.len(), 10);
}

#[test]
fn search_view_reads_live_nodes() {
    let tree: AvlTree<i32> = (1..=15).collect();

    let view = tree.search(&12).unwrap();
    assert_eq!(view.to_string(), "[9, 10, 11, 12, 13, 14, 15]");
    assert_eq!(view.root().map(Node::value), Some(&12));
    assert_eq!(view.preorder().cloned(), [12, 10, 9, 11, 14, 13, 15]);
    assert_eq!(view.postorder().cloned(), [9, 11, 10, 13, 15, 14, 12]);
}

quickcheck::quickcheck! {
    fn inorder_is_sorted(xs: Vec<i16>) -> bool {
        let tree: AvlTree<i16> = xs.into_iter().collect();
        is_sorted(&tree.inorder())
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations(ops: Vec<Op<i8>>) -> bool {
        let mut tree = AvlTree::new();
        let mut model = Vec::new();

        do_ops(&ops, &mut tree, &mut model);
        tree.inorder().cloned() == model
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: AvlTree<i8> = xs.iter().copied().collect();
        for delete in &deletes {
            // Delete every occurrence.
            while tree.remove(delete) {}
        }
        assert_balanced(&tree);

        deletes.iter().all(|x| !tree.contains(x))
            && xs.iter().filter(|x| !deletes.contains(*x)).all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn search_view_matches_tree(xs: Vec<i8>, target: i8) -> bool {
        let tree: AvlTree<i8> = xs.iter().copied().collect();
        let view = tree.search(&target).unwrap();

        match view.root() {
            Some(node) => *node.value() == target && is_sorted(&view.inorder()),
            None => !xs.contains(&target),
        }
    }
}
