use crate::{AscendingIter, Error, MagicalIter, PrimeIter, Result, SideCrossIter, Walk};
use std::iter::FromIterator;

/// An ascending, duplicate-free sequence of integers.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MagicalContainer {
    elements: Vec<i32>
}

impl From<Vec<i32>> for MagicalContainer {
    fn from(v: Vec<i32>) -> Self {
        let mut elements = v;
        elements.sort_unstable();
        elements.dedup();
        Self { elements }
    }
}

impl FromIterator<i32> for MagicalContainer {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::from(Vec::from_iter(iter))
    }
}

impl Extend<i32> for MagicalContainer {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for element in iter {
            self.add_element(element);
        }
    }
}

impl<'a> IntoIterator for &'a MagicalContainer {
    type Item = i32;
    type IntoIter = Walk<AscendingIter<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ascending().walk()
    }
}

impl MagicalContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { elements: Vec::with_capacity(capacity) }
    }

    /// Inserts `element` at its sorted position. Adding a value that is
    /// already present leaves the container unchanged.
    pub fn add_element(&mut self, element: i32) {
        match self.elements.binary_search(&element) {
            Ok(_) => {
                log::trace!("skipping {}, already present", element);
            }
            Err(pos) => {
                log::trace!("inserting {} at {}", element, pos);
                self.elements.insert(pos, element);
            }
        }
    }

    /// Removes every occurrence of `element`, or fails with [`Error::NotFound`]
    /// without touching the container.
    pub fn remove_element(&mut self, element: i32) -> Result<()> {
        if !self.contains(element) {
            log::debug!("cannot remove {}, not found", element);
            return Err(Error::NotFound(element));
        }
        self.elements.retain(|&e| e != element);
        log::trace!("removed {}, {} remaining", element, self.elements.len());
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element_at(&self, index: usize) -> Result<i32> {
        match self.elements.get(index) {
            Some(&element) => Ok(element),
            None => Err(Error::IndexOutOfRange { index, size: self.elements.len() })
        }
    }

    pub fn contains(&self, element: i32) -> bool {
        self.elements.binary_search(&element).is_ok()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.elements
    }

    pub fn elements(&self) -> Vec<i32> {
        self.elements.clone()
    }

    pub fn ascending(&self) -> AscendingIter<'_> {
        AscendingIter::new(self)
    }

    pub fn side_cross(&self) -> SideCrossIter<'_> {
        SideCrossIter::new(self)
    }

    pub fn prime(&self) -> PrimeIter<'_> {
        PrimeIter::new(self)
    }
}
