//! Read-only views over a tree.
//!
//! Everything that only inspects a tree lives here so the same code serves a whole
//! [`Tree`][crate::Tree] and the subtree returned by a search.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use crate::error::TreeError;
use crate::node::Node;

/// A borrowed, read-only view of the subtree rooted at some node. It is obtained from
/// [`Tree::view`][crate::Tree::view] or [`Tree::search`][crate::Tree::search] and aliases the
/// nodes of the tree it came from, so the tree can't be mutated while the view is alive.
///
/// # Examples
///
/// ```
/// use avl::AvlTree;
///
/// let tree: AvlTree<i32> = [4, 2, 6, 1, 3].into_iter().collect();
///
/// let two = tree.search(&2).unwrap();
/// assert_eq!(two.to_string(), "[1, 2, 3]");
/// assert_eq!(two.height(), 1);
///
/// // A miss is an empty view, not an error.
/// assert!(tree.search(&5).unwrap().is_empty());
/// ```
pub struct Subtree<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<T> Clone for Subtree<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Subtree<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Subtree<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subtree").field("root", &self.root).finish()
    }
}

impl<'a, T> Subtree<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self { root }
    }

    /// The node this view is rooted at, if any.
    pub fn root(&self) -> Option<&'a Node<T>> {
        self.root
    }

    /// Whether the view has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of edges on the longest path from the root down to a leaf. Computed by walking
    /// the subtree. An empty view and a single node both have a height of 0.
    pub fn height(&self) -> usize {
        fn walk<T>(node: &Node<T>) -> isize {
            let left = node.left().map_or(-1, walk);
            let right = node.right().map_or(-1, walk);
            left.max(right) + 1
        }

        self.root.map_or(0, |root| walk(root) as usize)
    }

    /// The number of values in the view.
    pub fn len(&self) -> usize {
        fn walk<T>(node: &Node<T>) -> usize {
            1 + node.left().map_or(0, walk) + node.right().map_or(0, walk)
        }

        self.root.map_or(0, walk)
    }

    /// The smallest value, found by following left children to the end.
    pub fn min(&self) -> Result<&'a T, TreeError> {
        let mut current = self.root.ok_or(TreeError::EmptyTree)?;
        while let Some(left) = current.left() {
            current = left;
        }
        Ok(current.value())
    }

    /// The largest value, found by following right children to the end.
    pub fn max(&self) -> Result<&'a T, TreeError> {
        let mut current = self.root.ok_or(TreeError::EmptyTree)?;
        while let Some(right) = current.right() {
            current = right;
        }
        Ok(current.value())
    }

    /// Returns a view rooted at the first node on the search path whose value equals `value`,
    /// or an empty view if there is none. Fails with [`TreeError::NullValue`] if `value` is
    /// `None`.
    pub fn search<'q>(&self, value: impl Into<Option<&'q T>>) -> Result<Self, TreeError>
    where
        T: Ord + 'q,
    {
        let value = value.into().ok_or(TreeError::NullValue)?;
        let mut current = self.root;
        while let Some(node) = current {
            current = match value.cmp(node.value()) {
                Ordering::Less => node.left(),
                Ordering::Equal => break,
                Ordering::Greater => node.right(),
            };
        }
        Ok(Self::new(current))
    }

    /// Whether some node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search(value).map_or(false, |found| !found.is_empty())
    }

    /// Values in preorder: a node, then its left subtree, then its right subtree.
    pub fn preorder(&self) -> Traversal<'a, T> {
        fn walk<'a, T>(node: &'a Node<T>, out: &mut Vec<&'a T>) {
            out.push(node.value());
            if let Some(left) = node.left() {
                walk(left, out);
            }
            if let Some(right) = node.right() {
                walk(right, out);
            }
        }

        self.collect(walk)
    }

    /// Values in order: the left subtree, then a node, then its right subtree. For a search tree
    /// this is ascending order.
    pub fn inorder(&self) -> Traversal<'a, T> {
        fn walk<'a, T>(node: &'a Node<T>, out: &mut Vec<&'a T>) {
            if let Some(left) = node.left() {
                walk(left, out);
            }
            out.push(node.value());
            if let Some(right) = node.right() {
                walk(right, out);
            }
        }

        self.collect(walk)
    }

    /// Values in postorder: both subtrees, then the node itself.
    pub fn postorder(&self) -> Traversal<'a, T> {
        fn walk<'a, T>(node: &'a Node<T>, out: &mut Vec<&'a T>) {
            if let Some(left) = node.left() {
                walk(left, out);
            }
            if let Some(right) = node.right() {
                walk(right, out);
            }
            out.push(node.value());
        }

        self.collect(walk)
    }

    fn collect(&self, walk: fn(&'a Node<T>, &mut Vec<&'a T>)) -> Traversal<'a, T> {
        let mut values = Vec::new();
        if let Some(root) = self.root {
            walk(root, &mut values);
        }
        Traversal(values)
    }
}

/// Renders the inorder traversal, e.g. `[1, 2, 3]`.
impl<T: fmt::Display> fmt::Display for Subtree<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inorder(), f)
    }
}

/// The values of a tree in one of the traversal orders.
///
/// Displays as a bracketed, comma separated list such as `[1, 2, 3]`, or `[]` when empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Traversal<'a, T>(Vec<&'a T>);

impl<T: Clone> Traversal<'_, T> {
    /// Copies the values out of the tree.
    pub fn cloned(&self) -> Vec<T> {
        self.0.iter().map(|&value| value.clone()).collect()
    }
}

impl<'a, T> Deref for Traversal<'a, T> {
    type Target = [&'a T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, T> IntoIterator for Traversal<'a, T> {
    type Item = &'a T;
    type IntoIter = std::vec::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for Traversal<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
