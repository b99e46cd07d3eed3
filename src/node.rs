//! The owned node structure every tree is built from.
//!
//! Each `Node` exclusively owns its two children. There are no parent pointers: every mutating
//! operation takes ownership of a subtree and hands back the (possibly restructured) new subtree
//! root, which the caller reattaches.

use std::cmp::Ordering;

use crate::balance::Balance;
use crate::util::DeleteResult;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Height of an optional subtree. An absent subtree has a height of -1 so that a leaf has a height
/// of 0.
pub(crate) fn link_height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(-1, |n| n.height as isize)
}

/// A single node of a tree. It always stores a value and may have a left and right child.
///
/// Nodes can only be inspected. They are reached through [`Tree::root`][crate::Tree::root] or a
/// [`Subtree`][crate::Subtree] view.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,

    /// Edge count of the longest path from this node down to a leaf. A node with no children has
    /// a height of 0.
    height: usize,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The cached height of the subtree rooted here. A leaf has a height of 0.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The difference in height between the right and left subtrees. See [the Wikipedia
    /// page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub fn balance_factor(&self) -> isize {
        link_height(&self.right) - link_height(&self.left)
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        // The max is at least -1 so this is never negative.
        self.height = (link_height(&self.left).max(link_height(&self.right)) + 1) as usize;
    }

    /// Detaches both children, leaving `self` a leaf.
    pub(crate) fn take_children(&mut self) -> impl Iterator<Item = Box<Self>> {
        self.height = 0;
        self.left.take().into_iter().chain(self.right.take())
    }

    #[cfg(test)]
    pub(crate) fn set_left(&mut self, left: Self) {
        self.left = Some(Box::new(left));
        self.fix_height();
    }

    /// Rotate self to the left. This moves the right child up vertically and self down vertically.
    /// Used to rebalance the tree when the right child is too tall. Without a right child there is
    /// nothing to rotate and `self` is returned as is.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   old_root                     new_root
    ///    /    \                      /     \
    ///   x   new_root   rotate ->  old_root  z
    ///         /  \                 /  \
    ///        y    z               x    y
    /// ```
    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.right.take() else {
            return self;
        };
        self.right = new_root.left.take();
        self.fix_height();

        new_root.left = Some(self);
        new_root.fix_height();
        record(Rotation::Left);
        new_root
    }

    /// Rotate self to the right. This moves the left child up vertically and self down vertically.
    /// Used to rebalance the tree when the left child is too tall. Without a left child there is
    /// nothing to rotate and `self` is returned as is.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      old_root                new_root
    ///       /    \                 /     \
    ///   new_root  z   rotate ->   x    old_root
    ///    /  \                             /  \
    ///   x    y                           y    z
    /// ```
    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.left.take() else {
            return self;
        };
        self.left = new_root.right.take();
        self.fix_height();

        new_root.right = Some(self);
        new_root.fix_height();
        record(Rotation::Right);
        new_root
    }

    pub(crate) fn rotate_left_right(mut self: Box<Self>) -> Box<Self> {
        self.left = self.left.take().map(Self::rotate_left);
        self.rotate_right()
    }

    pub(crate) fn rotate_right_left(mut self: Box<Self>) -> Box<Self> {
        self.right = self.right.take().map(Self::rotate_right);
        self.rotate_left()
    }
}

impl<T: Ord> Node<T> {
    /// Inserts `value` into the subtree and returns its new root. Equal values go right.
    pub(crate) fn insert<B: Balance>(link: Link<T>, value: T) -> Box<Self> {
        let Some(mut node) = link else {
            return Box::new(Self::new(value));
        };
        if value < node.value {
            node.left = Some(Self::insert::<B>(node.left.take(), value));
        } else {
            node.right = Some(Self::insert::<B>(node.right.take(), value));
        }
        B::rebalance(node)
    }

    /// Deletes the first node with the given `value` found on the search path. See the
    /// documentation on [`DeleteResult`] to see what the return values mean.
    pub(crate) fn remove<B: Balance>(mut node: Box<Self>, value: &T) -> DeleteResult<T> {
        match value.cmp(&node.value) {
            Ordering::Less => match node.left.take() {
                None => DeleteResult::NotFound(node),
                Some(left) => match Self::remove::<B>(left, value) {
                    DeleteResult::NotFound(left) => {
                        node.left = Some(left);
                        DeleteResult::NotFound(node)
                    }
                    DeleteResult::Deleted(left) => {
                        node.left = left;
                        DeleteResult::Deleted(Some(B::rebalance(node)))
                    }
                },
            },
            Ordering::Greater => match node.right.take() {
                None => DeleteResult::NotFound(node),
                Some(right) => match Self::remove::<B>(right, value) {
                    DeleteResult::NotFound(right) => {
                        node.right = Some(right);
                        DeleteResult::NotFound(node)
                    }
                    DeleteResult::Deleted(right) => {
                        node.right = right;
                        DeleteResult::Deleted(Some(B::rebalance(node)))
                    }
                },
            },
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => DeleteResult::Deleted(right),
                (left, None) => DeleteResult::Deleted(left),
                // With two children the in-order successor (the smallest value of the right
                // subtree) takes this node's place. It has no left child so unlinking it is a
                // zero or one child case.
                (Some(left), Some(right)) => {
                    let (successor, right) = Self::take_min::<B>(right);
                    node.value = successor;
                    node.left = Some(left);
                    node.right = right;
                    DeleteResult::Deleted(Some(B::rebalance(node)))
                }
            },
        }
    }

    /// Unlinks the leftmost node of the subtree, returning its value and the new subtree root.
    fn take_min<B: Balance>(mut node: Box<Self>) -> (T, Link<T>) {
        match node.left.take() {
            None => {
                let Node { value, right, .. } = *node;
                (value, right)
            }
            Some(left) => {
                let (min, left) = Self::take_min::<B>(left);
                node.left = left;
                (min, Some(B::rebalance(node)))
            }
        }
    }
}

/// A single rotation primitive. Double rotations show up as two of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rotation {
    Left,
    Right,
}

#[cfg(test)]
thread_local! {
    static ROTATIONS: std::cell::RefCell<Vec<Rotation>> = const { std::cell::RefCell::new(Vec::new()) };
}

fn record(rotation: Rotation) {
    trace!("rotated {:?}", rotation);
    #[cfg(test)]
    ROTATIONS.with(|rotations| rotations.borrow_mut().push(rotation));
    #[cfg(not(test))]
    let _ = rotation;
}

/// Drains the rotations performed on this thread since the last call.
#[cfg(test)]
pub(crate) fn take_rotations() -> Vec<Rotation> {
    ROTATIONS.with(|rotations| std::mem::take(&mut *rotations.borrow_mut()))
}
