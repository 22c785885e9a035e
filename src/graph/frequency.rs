//! Counting set used for adjacency entries
//!
//! Parallel edges and undirected self-loops connect the same pair more than
//! once; the set remembers how many times each element was added and only
//! forgets it when every occurrence is removed.

use indexmap::IndexMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub(crate) struct FrequencySet<T> {
    counts: IndexMap<T, usize>,
}

impl<T: Hash + Eq> FrequencySet<T> {
    pub(crate) fn new() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }

    /// Add one occurrence; true if the element was not present before
    pub(crate) fn insert(&mut self, element: T) -> bool {
        let count = self.counts.entry(element).or_insert(0);
        *count += 1;
        *count == 1
    }

    /// Remove one occurrence; true if the element is now gone entirely
    pub(crate) fn remove(&mut self, element: &T) -> bool {
        match self.counts.get_mut(element) {
            Some(count) if *count > 1 => {
                *count -= 1;
                false
            }
            Some(_) => {
                self.counts.swap_remove(element);
                true
            }
            None => false,
        }
    }

    pub(crate) fn frequency_of(&self, element: &T) -> usize {
        self.counts.get(element).copied().unwrap_or(0)
    }

    pub(crate) fn contains(&self, element: &T) -> bool {
        self.counts.contains_key(element)
    }

    /// Number of distinct elements
    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.counts.keys()
    }
}
