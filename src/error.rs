//! Errors returned by tree operations whose preconditions weren't met.
//!
//! A value that simply isn't in the tree is never an error: [`remove`][crate::Tree::remove]
//! returns `false` and [`search`][crate::Tree::search] returns an empty view.

use std::fmt;

/// The ways a tree operation can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeError {
    /// An absent value was passed to [`add`][crate::Tree::add] or
    /// [`search`][crate::Tree::search].
    NullValue,
    /// [`min`][crate::Tree::min] or [`max`][crate::Tree::max] was called on a tree with no
    /// nodes.
    EmptyTree,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::NullValue => write!(f, "value must be present"),
            TreeError::EmptyTree => write!(f, "tree is empty"),
        }
    }
}

impl std::error::Error for TreeError {}
