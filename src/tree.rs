//! A Binary Search Tree whose balancing is chosen at construction time.
//!
//! [`BinarySearchTree`] never restructures itself so its shape depends entirely on insertion
//! order. [`AvlTree`] rebalances every node on the way back up from an insert or delete so its
//! height stays `O(lg N)`. Both share everything else: search, `min`/`max`, traversals and height.
//!
//! # Examples
//!
//! ```
//! use avl::{AvlTree, BinarySearchTree};
//!
//! let mut bst = BinarySearchTree::<i32>::new();
//! let mut avl = AvlTree::<i32>::new();
//! for x in 1..=7 {
//!     bst.add(x).unwrap();
//!     avl.add(x).unwrap();
//! }
//!
//! // Same values, very different shapes.
//! assert_eq!(bst.to_string(), avl.to_string());
//! assert_eq!(bst.height(), 6);
//! assert_eq!(avl.height(), 2);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::balance::{Avl, Balance, Unbalanced};
use crate::error::TreeError;
use crate::node::{Link, Node};
use crate::util::DeleteResult;
use crate::view::{Subtree, Traversal};

/// A Binary Search Tree. Values smaller than a node go to its left and values greater than or
/// equal to it go to its right. `B` decides what happens on the way back up from a mutation. See
/// [`Balance`].
pub struct Tree<T, B = Avl> {
    root: Link<T>,
    balance: PhantomData<B>,
}

/// A plain Binary Search Tree with no balancing.
pub type BinarySearchTree<T> = Tree<T, Unbalanced>;

/// A self-balancing Binary Search Tree (specifically, an AVL tree).
pub type AvlTree<T> = Tree<T, Avl>;

impl<T, B> Default for Tree<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> Drop for Tree<T, B> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, B> Clone for Tree<T, B> {
    // TODO stack based Clone
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            balance: PhantomData,
        }
    }
}

impl<T: fmt::Debug, B> fmt::Debug for Tree<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

/// Renders the inorder traversal, e.g. `[1, 2, 3]`.
impl<T: fmt::Display, B> fmt::Display for Tree<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}

/// Two trees are equal when they have the same shape and the same values in the same places.
impl<T: PartialEq, B> PartialEq for Tree<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<T: Eq, B> Eq for Tree<T, B> {}

impl<T: Ord, B: Balance> FromIterator<T> for Tree<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord, B: Balance> Extend<T> for Tree<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, B> Tree<T, B> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            balance: PhantomData,
        }
    }

    /// Generates a tree holding a single value.
    pub fn with_root(value: T) -> Self {
        Self {
            root: Some(Box::new(Node::new(value))),
            balance: PhantomData,
        }
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// A read-only view of the whole tree.
    pub fn view(&self) -> Subtree<'_, T> {
        Subtree::new(self.root())
    }

    /// Whether the tree has no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.view().len()
    }

    /// The number of edges on the longest path from the root to a leaf. Both an empty tree and a
    /// tree with a single value have a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::<i32>::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.add(1).unwrap();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.add(2).unwrap();
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> usize {
        self.view().height()
    }

    /// Removes every value. Calling this on an empty tree does nothing.
    pub fn clear(&mut self) {
        // Nodes are released from an explicit stack so a degenerate (list shaped) tree can't
        // overflow the call stack.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        let mut released = 0usize;
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_children());
            released += 1;
        }
        if released > 0 {
            debug!("cleared {} nodes", released);
        }
    }

    /// Values in preorder: a node, then its left subtree, then its right subtree.
    pub fn preorder(&self) -> Traversal<'_, T> {
        self.view().preorder()
    }

    /// Values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let tree: AvlTree<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.inorder().cloned(), [1, 2, 3]);
    /// assert_eq!(tree.inorder().to_string(), "[1, 2, 3]");
    /// ```
    pub fn inorder(&self) -> Traversal<'_, T> {
        self.view().inorder()
    }

    /// Values in postorder: both subtrees, then the node itself.
    pub fn postorder(&self) -> Traversal<'_, T> {
        self.view().postorder()
    }

    /// The smallest value in the tree. Fails with [`TreeError::EmptyTree`] if there is none.
    pub fn min(&self) -> Result<&T, TreeError> {
        self.view().min()
    }

    /// The largest value in the tree. Fails with [`TreeError::EmptyTree`] if there is none.
    pub fn max(&self) -> Result<&T, TreeError> {
        self.view().max()
    }

    /// Finds the node holding `value` and returns a read-only view of the subtree rooted there.
    /// If no node holds `value` the view is empty. Fails with [`TreeError::NullValue`] if `value`
    /// is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::{AvlTree, TreeError};
    ///
    /// let tree: AvlTree<i32> = (1..=7).collect();
    ///
    /// assert_eq!(tree.search(&2).unwrap().to_string(), "[1, 2, 3]");
    /// assert!(tree.search(&42).unwrap().is_empty());
    /// assert_eq!(tree.search(None::<&i32>).unwrap_err(), TreeError::NullValue);
    /// ```
    pub fn search<'q>(&self, value: impl Into<Option<&'q T>>) -> Result<Subtree<'_, T>, TreeError>
    where
        T: Ord + 'q,
    {
        self.view().search(value)
    }

    /// Whether some node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.view().contains(value)
    }
}

impl<T: Ord, B: Balance> Tree<T, B> {
    /// Adds `value` to the tree. Values equal to ones already in the tree are kept as well. Fails
    /// with [`TreeError::NullValue`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::{AvlTree, TreeError};
    ///
    /// let mut tree = AvlTree::<i32>::new();
    /// tree.add(2).unwrap();
    /// tree.add(2).unwrap();
    /// assert_eq!(tree.to_string(), "[2, 2]");
    ///
    /// let nothing: Option<i32> = None;
    /// assert_eq!(tree.add(nothing), Err(TreeError::NullValue));
    /// ```
    pub fn add(&mut self, value: impl Into<Option<T>>) -> Result<(), TreeError> {
        let value = value.into().ok_or(TreeError::NullValue)?;
        self.insert(value);
        Ok(())
    }

    fn insert(&mut self, value: T) {
        let root = Node::insert::<B>(self.root.take(), value);
        trace!("inserted value, tree height is now {}", root.height());
        self.root = Some(root);
    }

    /// Removes one occurrence of `value` from the tree. Returns whether anything was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree: AvlTree<i32> = (1..=3).collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.to_string(), "[1, 3]");
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(root) = self.root.take() else {
            return false;
        };
        match Node::remove::<B>(root, value) {
            DeleteResult::NotFound(root) => {
                debug!("value to remove was not found");
                self.root = Some(root);
                false
            }
            DeleteResult::Deleted(root) => {
                trace!("removed value");
                self.root = root;
                true
            }
        }
    }
}
