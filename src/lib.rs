//! This crate exposes a Binary Search Tree (BST) and a self-balancing AVL tree built on the same
//! node structure.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored values. BSTs are defined recursively using the notion of a [`Node`]. A `Node` stores a
//! value and sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a value less than its
//!    own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a value greater than or
//!    equal to its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the number of
//! edges on the longest path from the root `Node` to a leaf `Node`). Inserting values in sorted
//! order into a [`BinarySearchTree`] gives a tree whose height is `N - 1`. An [`AvlTree`] limits
//! its height to `O(lg N)` by rotating nodes after every insert and delete. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then the right
//! subtree.
//!
//! # Examples
//!
//! ```
//! use avl::{AvlTree, TreeError};
//!
//! let mut tree = AvlTree::<i32>::new();
//! assert_eq!(tree.min(), Err(TreeError::EmptyTree));
//!
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.add(x)?;
//! }
//! assert_eq!(tree.to_string(), "[1, 3, 4, 5, 7, 8, 9]");
//!
//! // Removing a node with two children pulls its in-order successor up.
//! assert!(tree.remove(&5));
//! assert_eq!(tree.root().map(|n| *n.value()), Some(7));
//!
//! // Removing something that isn't there is not an error.
//! assert!(!tree.remove(&5));
//! # Ok::<(), TreeError>(())
//! ```
//!
//! ## Features
//!
//! * `logging`: emit `log` records for inserts, removals, rotations and clears.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

#[macro_use]
mod util;

mod balance;
mod error;
mod node;
mod tree;
mod view;


pub use balance::{Avl, Balance, Unbalanced};
pub use error::TreeError;
pub use node::Node;
pub use tree::{AvlTree, BinarySearchTree, Tree};
pub use view::{Subtree, Traversal};
