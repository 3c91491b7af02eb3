//! A sorted integer container with three independent traversal orders:
//! ascending, side-cross (alternating lowest and highest remaining) and
//! prime-only.
//!
//! ```
//! use magical::{MagicalContainer, MagicalIter};
//!
//! let mut container = MagicalContainer::new();
//! for element in vec![4, 1, 7, 2, 5] {
//!     container.add_element(element);
//! }
//!
//! assert_eq!(vec![1, 2, 4, 5, 7], container.ascending().walk().collect::<Vec<_>>());
//! assert_eq!(vec![1, 7, 2, 5, 4], container.side_cross().walk().collect::<Vec<_>>());
//! assert_eq!(vec![2, 5, 7], container.prime().walk().collect::<Vec<_>>());
//!
//! let mut it = container.prime();
//! let end = it.end();
//! while it != end {
//!     assert!(magical::prime::is_prime(it.get().unwrap()));
//!     it.advance().unwrap();
//! }
//! ```

use std::iter::FusedIterator;

pub mod ascending;
pub mod container;
pub mod prime;
pub mod side_cross;

pub use crate::ascending::AscendingIter;
pub use crate::container::MagicalContainer;
pub use crate::prime::PrimeIter;
pub use crate::side_cross::SideCrossIter;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("element {0} not found in the container")]
    NotFound(i32),

    #[error("index {index} out of range for container of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("cannot advance beyond the end")]
    IteratorExhausted,

    #[error("cannot combine iterators over different containers")]
    IncompatibleContainer,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Cursor-style traversal over a borrowed [`MagicalContainer`].
///
/// Cursors are not themselves iterators; [`walk`](MagicalIter::walk) turns one
/// into an [`Iterator`] yielding from its current position up to
/// [`end`](MagicalIter::end). Equality and ordering compare positions and are
/// only defined between cursors over the same container instance: across
/// containers `==` is always false and `partial_cmp` is `None`.
pub trait MagicalIter<'a>: Clone {
    fn container(&self) -> &'a MagicalContainer;

    /// A fresh cursor at the first element of this traversal order.
    fn begin(&self) -> Self;

    /// The past-the-end cursor.
    fn end(&self) -> Self;

    fn is_end(&self) -> bool;

    /// Moves to the next element, failing with [`Error::IteratorExhausted`] at the end.
    fn advance(&mut self) -> Result<()>;

    /// The element under the cursor, failing with [`Error::IndexOutOfRange`] at the end.
    fn get(&self) -> Result<i32>;

    /// Bounds on the number of elements left before the end.
    fn remaining(&self) -> (usize, Option<usize>);

    fn walk(self) -> Walk<Self> {
        Walk { cursor: self }
    }

    fn same_container(&self, other: &Self) -> bool {
        std::ptr::eq(self.container(), other.container())
    }

    /// Copies the state of `other` into `self`, provided both traverse the same container.
    fn assign(&mut self, other: &Self) -> Result<()> {
        if !self.same_container(other) {
            log::debug!("rejected assignment across containers");
            return Err(Error::IncompatibleContainer);
        }
        *self = other.clone();
        Ok(())
    }
}

/// Iterator over the elements of a [`MagicalIter`] cursor, from its position to the end.
#[derive(Clone, Debug)]
pub struct Walk<I> {
    cursor: I,
}

impl<I> Walk<I> {
    pub fn cursor(&self) -> &I {
        &self.cursor
    }

    pub fn into_cursor(self) -> I {
        self.cursor
    }
}

impl<'a, I: MagicalIter<'a>> Iterator for Walk<I> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let element = self.cursor.get().ok()?;
        self.cursor.advance().ok().map(|_| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.remaining()
    }
}

impl<'a, I: MagicalIter<'a>> FusedIterator for Walk<I> {}
