use crate::{Error, MagicalContainer, MagicalIter, Result, Walk};
use std::cmp::Ordering;

/// Walks the container in its stored (ascending) order.
#[derive(Clone, Debug)]
pub struct AscendingIter<'a> {
    container: &'a MagicalContainer,
    position: usize,
}

impl<'a> AscendingIter<'a> {
    pub fn new(container: &'a MagicalContainer) -> Self {
        Self::at(container, 0)
    }

    fn at(container: &'a MagicalContainer, position: usize) -> Self {
        Self { container, position }
    }

    pub fn index(&self) -> usize {
        self.position
    }
}

impl<'a> MagicalIter<'a> for AscendingIter<'a> {
    fn container(&self) -> &'a MagicalContainer {
        self.container
    }

    fn begin(&self) -> Self {
        Self::new(self.container)
    }

    fn end(&self) -> Self {
        Self::at(self.container, self.container.size())
    }

    fn is_end(&self) -> bool {
        self.position >= self.container.size()
    }

    fn advance(&mut self) -> Result<()> {
        if self.is_end() {
            log::debug!("ascending iterator exhausted at {}", self.position);
            return Err(Error::IteratorExhausted);
        }
        self.position += 1;
        Ok(())
    }

    fn get(&self) -> Result<i32> {
        self.container.element_at(self.position)
    }

    fn remaining(&self) -> (usize, Option<usize>) {
        let remaining = self.container.size().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl PartialEq for AscendingIter<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_container(other) && self.position == other.position
    }
}

impl PartialOrd for AscendingIter<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.same_container(other) {
            true => Some(self.position.cmp(&other.position)),
            false => None,
        }
    }
}

impl ExactSizeIterator for Walk<AscendingIter<'_>> {}
