use avl::{BinarySearchTree, TreeError};

use crate::{init_logger, Op};

fn do_ops(ops: &[Op<i8>], tree: &mut BinarySearchTree<i8>, model: &mut Vec<i8>) {
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
    }
}

#[test]
fn ascending_input_is_a_list() {
    init_logger();
    let n = 1_000;
    let tree: BinarySearchTree<i32> = (0..n).collect();

    assert_eq!(tree.height(), n as usize - 1);
    assert_eq!(tree.min(), Ok(&0));
    assert_eq!(tree.max(), Ok(&(n - 1)));
}

#[test]
fn empty_tree_errors() {
    let tree = BinarySearchTree::<String>::new();
    assert_eq!(tree.min(), Err(TreeError::EmptyTree));
    assert_eq!(tree.max(), Err(TreeError::EmptyTree));
    assert_eq!(tree.search(None::<&String>).unwrap_err(), TreeError::NullValue);
}

#[test]
fn strings() {
    let mut tree = BinarySearchTree::<String>::new();
    for word in ["pear", "apple", "fig", "banana"] {
        tree.add(word.to_string()).unwrap();
    }

    assert_eq!(tree.to_string(), "[apple, banana, fig, pear]");
    assert_eq!(tree.preorder().to_string(), "[pear, apple, fig, banana]");
    assert!(tree.remove(&"apple".to_string()));
    assert_eq!(tree.min().map(String::as_str), Ok("banana"));
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations(ops: Vec<Op<i8>>) -> bool {
        let mut tree = BinarySearchTree::new();
        let mut model = Vec::new();

        do_ops(&ops, &mut tree, &mut model);
        tree.inorder().cloned() == model
    }
}

quickcheck::quickcheck! {
    fn clear_empties(xs: Vec<i8>) -> bool {
        let mut tree: BinarySearchTree<i8> = xs.into_iter().collect();
        tree.clear();
        tree.is_empty() && tree.height() == 0 && tree.to_string() == "[]"
    }
}
