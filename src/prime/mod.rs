use crate::{Error, MagicalContainer, MagicalIter, Result};
use std::cmp::Ordering;

/// Primality by trial division over odd divisors up to `floor(sqrt(number))`.
pub fn is_prime(number: i32) -> bool {
    if number < 2 {
        return false;
    }
    if number < 4 {
        return true;
    }
    if number % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    while divisor <= number / divisor {
        if number % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Walks the prime-valued elements of the container in ascending order.
///
/// The cursor always rests either on a prime slot or on `size` (the end).
#[derive(Clone, Debug)]
pub struct PrimeIter<'a> {
    container: &'a MagicalContainer,
    position: usize,
}

impl<'a> PrimeIter<'a> {
    pub fn new(container: &'a MagicalContainer) -> Self {
        Self::at(container, 0)
    }

    fn at(container: &'a MagicalContainer, position: usize) -> Self {
        let mut it = Self { container, position };
        it.skip_composites();
        it
    }

    fn skip_composites(&mut self) {
        let elements = self.container.as_slice();
        while self.position < elements.len() && !is_prime(elements[self.position]) {
            self.position += 1;
        }
    }

    pub fn index(&self) -> usize {
        self.position
    }
}

impl<'a> MagicalIter<'a> for PrimeIter<'a> {
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
            log::debug!("prime iterator exhausted at {}", self.position);
            return Err(Error::IteratorExhausted);
        }
        self.position += 1;
        self.skip_composites();
        Ok(())
    }

    fn get(&self) -> Result<i32> {
        self.container.element_at(self.position)
    }

    fn remaining(&self) -> (usize, Option<usize>) {
        (0, Some(self.container.size().saturating_sub(self.position)))
    }
}

impl PartialEq for PrimeIter<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_container(other) && self.position == other.position
    }
}

impl PartialOrd for PrimeIter<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.same_container(other) {
            true => Some(self.position.cmp(&other.position)),
            false => None,
        }
    }
}
