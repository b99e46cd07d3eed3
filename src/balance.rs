//! Balancing policies. A [`Tree`][crate::Tree] runs its policy on every node along the unwind
//! path of an insert or delete, bottom-up, so each node sees children that are already final.

use crate::node::Node;

/// What happens to a node on the way back up from an insert or delete.
pub trait Balance {
    /// Restores this policy's invariant at `node`, given that both of its subtrees already satisfy
    /// it, and returns the new root of the subtree.
    fn rebalance<T>(node: Box<Node<T>>) -> Box<Node<T>>;
}

/// No balancing at all: a plain Binary Search Tree. The height is still recomputed so the cached
/// value never goes stale, but the shape is entirely decided by insertion order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unbalanced;

impl Balance for Unbalanced {
    fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
        node.fix_height();
        node
    }
}

/// AVL balancing: after every mutation the heights of the two subtrees of any node differ by at
/// most one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Avl;

impl Balance for Avl {
    fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
        // See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
        node.fix_height();
        let left_factor = node.left().map(Node::balance_factor);
        let right_factor = node.right().map(Node::balance_factor);
        let node = match (node.balance_factor(), left_factor, right_factor) {
            (factor, Some(left), _) if factor < -1 => {
                if left <= 0 {
                    node.rotate_right()
                } else {
                    node.rotate_left_right()
                }
            }
            (factor, _, Some(right)) if factor > 1 => {
                if right >= 0 {
                    node.rotate_left()
                } else {
                    node.rotate_right_left()
                }
            }
            _ => node,
        };

        // After balancing, assert that we've restored/maintained the AVL invariant.
        if cfg!(debug_assertions) {
            let left_height = node.left().map_or(-1, |n| n.height() as isize);
            let right_height = node.right().map_or(-1, |n| n.height() as isize);
            assert_eq!(node.height() as isize, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        node
    }
}
