use crate::{Error, MagicalContainer, MagicalIter, Result, Walk};
use std::cmp::Ordering;

/// Alternates between the lowest and the highest unvisited elements, so that
/// `[a, b, c, d, e]` is traversed as `a, e, b, d, c`.
///
/// Once the two sides cross, the cursor collapses into the canonical end state
/// `(left: 0, right: size, from_left: true)`, which is exactly what
/// [`end`](MagicalIter::end) constructs.
#[derive(Clone, Debug)]
pub struct SideCrossIter<'a> {
    container: &'a MagicalContainer,
    left: usize,
    right: usize,
    from_left: bool, // whether the next dereference reads `left` (otherwise `right`)
}

impl<'a> SideCrossIter<'a> {
    pub fn new(container: &'a MagicalContainer) -> Self {
        match container.size() {
            0 => Self::terminal(container),
            size => Self {
                container,
                left: 0,
                right: size - 1,
                from_left: true,
            },
        }
    }

    fn terminal(container: &'a MagicalContainer) -> Self {
        Self {
            container,
            left: 0,
            right: container.size(),
            from_left: true,
        }
    }

    /// The number of elements already visited; `size` once exhausted.
    pub fn steps(&self) -> usize {
        let size = self.container.size();
        match self.is_end() {
            true => size,
            false => self.left + (size - 1 - self.right),
        }
    }
}

impl<'a> MagicalIter<'a> for SideCrossIter<'a> {
    fn container(&self) -> &'a MagicalContainer {
        self.container
    }

    fn begin(&self) -> Self {
        Self::new(self.container)
    }

    fn end(&self) -> Self {
        Self::terminal(self.container)
    }

    fn is_end(&self) -> bool {
        self.right >= self.container.size()
    }

    fn advance(&mut self) -> Result<()> {
        if self.is_end() {
            log::debug!("side-cross iterator exhausted");
            return Err(Error::IteratorExhausted);
        }

        if self.from_left {
            self.left += 1;
        } else {
            // right >= left >= 1 on the right side's turn, so this cannot underflow
            self.right -= 1;
        }
        self.from_left = !self.from_left;

        if self.right < self.left {
            log::trace!("sides crossed at left {}, right {}", self.left, self.right);
            *self = Self::terminal(self.container);
        }
        Ok(())
    }

    fn get(&self) -> Result<i32> {
        if self.is_end() {
            return Err(Error::IndexOutOfRange {
                index: self.right,
                size: self.container.size(),
            });
        }
        match self.from_left {
            true => self.container.element_at(self.left),
            false => self.container.element_at(self.right),
        }
    }

    fn remaining(&self) -> (usize, Option<usize>) {
        let remaining = self.container.size() - self.steps();
        (remaining, Some(remaining))
    }
}

impl PartialEq for SideCrossIter<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_container(other)
            && self.left == other.left
            && self.right == other.right
            && self.from_left == other.from_left
    }
}

impl PartialOrd for SideCrossIter<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.same_container(other) {
            true => Some(self.steps().cmp(&other.steps())),
            false => None,
        }
    }
}

impl ExactSizeIterator for Walk<SideCrossIter<'_>> {}
