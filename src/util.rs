use crate::node::{Link, Node};

/// Logs at `trace` level when the `logging` feature is enabled. Expands to nothing otherwise.
#[cfg(feature = "logging")]
macro_rules! trace {
    ($($arg:tt)*) => { ::log::trace!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// Logs at `debug` level when the `logging` feature is enabled. Expands to nothing otherwise.
#[cfg(feature = "logging")]
macro_rules! debug {
    ($($arg:tt)*) => { ::log::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

pub(crate) enum DeleteResult<T> {
    /// The value wasn't found so nothing was deleted. The untouched subtree is handed back so the
    /// parent can reattach it.
    NotFound(Box<Node<T>>),
    /// A node was deleted. This is the (possibly empty, possibly rotated) new subtree root.
    Deleted(Link<T>),
}
