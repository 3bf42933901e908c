//! Generic draw box: append, iterate in insertion order, draw at random
//!
//! Items leave the box only through [`Container::draw`]. A drawn item is
//! removed for good, so it can never be drawn or iterated again.

use crate::errors::{RaffleError, RaffleResult};
use rand::Rng;
use std::slice;

/// Ordered store of items supporting random, without-replacement removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<T> {
    items: Vec<T>,
}

impl<T> Container<T> {
    /// Create an empty container
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item. Equal items are kept as separate entries.
    pub fn put(&mut self, item: T) {
        self.items.push(item);
        tracing::trace!(size = self.items.len(), "item added to container");
    }

    /// Items currently held, oldest first
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Remove and return one item chosen uniformly at random.
    ///
    /// The remaining items keep their relative insertion order.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> RaffleResult<T> {
        if self.items.is_empty() {
            return Err(RaffleError::EmptyContainer);
        }

        let index = rng.gen_range(0..self.items.len());
        let item = self.items.remove(index);
        tracing::trace!(index, remaining = self.items.len(), "item drawn from container");
        Ok(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Container<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.put(item);
        }
    }
}
