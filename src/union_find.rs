//! Disjoint-set (union-find) structures
//!
//! Used by connectivity and spanning-tree algorithms to track which vertices
//! already belong to the same component.

use indexmap::IndexSet;
use std::collections::HashMap;
use std::hash::Hash;
use thiserror::Error;

/// Errors from union-find operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnionFindError {
    #[error("element was never registered with make_set")]
    Unregistered,
}

/// A partition of registered elements into disjoint sets
pub trait UnionFind<T> {
    /// Register `x` in a singleton set; no-op if already registered
    fn make_set(&mut self, x: T);

    /// The set currently holding `x`
    fn find_set(&self, x: &T) -> Result<&IndexSet<T>, UnionFindError>;

    /// Merge the set holding `b` into the set holding `a`
    ///
    /// No-op when both are already in the same set.
    fn union(&mut self, a: &T, b: &T) -> Result<(), UnionFindError>;

    /// Every non-empty set
    fn disjoint_sets(&self) -> Vec<&IndexSet<T>>;
}

/// Union-find without rank balancing or path compression
///
/// Each member maps straight to its set; a union moves every member of the
/// absorbed set. Absorbed sets stay behind empty and are skipped by
/// `disjoint_sets`.
#[derive(Debug, Clone)]
pub struct NaiveUnionFind<T> {
    members: HashMap<T, usize>,
    sets: Vec<IndexSet<T>>,
}

impl<T: Hash + Eq + Clone> NaiveUnionFind<T> {
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
            sets: Vec::new(),
        }
    }

    /// Whether `x` has been registered
    pub fn contains(&self, x: &T) -> bool {
        self.members.contains_key(x)
    }

    /// Number of non-empty sets
    pub fn set_count(&self) -> usize {
        self.sets.iter().filter(|set| !set.is_empty()).count()
    }

    /// Whether `a` and `b` are in the same set
    pub fn same_set(&self, a: &T, b: &T) -> Result<bool, UnionFindError> {
        Ok(self.slot_of(a)? == self.slot_of(b)?)
    }

    fn slot_of(&self, x: &T) -> Result<usize, UnionFindError> {
        self.members
            .get(x)
            .copied()
            .ok_or(UnionFindError::Unregistered)
    }
}

impl<T: Hash + Eq + Clone> Default for NaiveUnionFind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone> UnionFind<T> for NaiveUnionFind<T> {
    fn make_set(&mut self, x: T) {
        if self.members.contains_key(&x) {
            return;
        }
        let slot = self.sets.len();
        let mut set = IndexSet::new();
        set.insert(x.clone());
        self.sets.push(set);
        self.members.insert(x, slot);
    }

    fn find_set(&self, x: &T) -> Result<&IndexSet<T>, UnionFindError> {
        let slot = self.slot_of(x)?;
        self.sets.get(slot).ok_or(UnionFindError::Unregistered)
    }

    fn union(&mut self, a: &T, b: &T) -> Result<(), UnionFindError> {
        let into = self.slot_of(a)?;
        let from = self.slot_of(b)?;
        if into == from {
            return Ok(());
        }

        let absorbed = std::mem::take(&mut self.sets[from]);
        for member in &absorbed {
            self.members.insert(member.clone(), into);
        }
        self.sets[into].extend(absorbed);
        Ok(())
    }

    fn disjoint_sets(&self) -> Vec<&IndexSet<T>> {
        self.sets.iter().filter(|set| !set.is_empty()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registered(items: &[&'static str]) -> NaiveUnionFind<&'static str> {
        let mut uf = NaiveUnionFind::new();
        for item in items {
            uf.make_set(*item);
        }
        uf
    }

    #[test]
    fn test_make_set_creates_singletons() {
        let uf = registered(&["a", "b", "c"]);
        assert_eq!(uf.set_count(), 3);
        let set = uf.find_set(&"a").unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains("a"));
    }

    #[test]
    fn test_make_set_twice_is_noop() {
        let mut uf = registered(&["a", "b"]);
        uf.union(&"a", &"b").unwrap();
        uf.make_set("a");
        assert_eq!(uf.set_count(), 1);
        assert_eq!(uf.find_set(&"a").unwrap().len(), 2);
    }

    #[test]
    fn test_union_merges_into_first() {
        let mut uf = registered(&["a", "b", "c", "d"]);
        uf.union(&"a", &"b").unwrap();
        uf.union(&"c", &"d").unwrap();
        uf.union(&"b", &"d").unwrap();

        let set = uf.find_set(&"c").unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(uf.find_set(&"a").unwrap(), set);
        assert_eq!(uf.set_count(), 1);
        assert_eq!(uf.disjoint_sets().len(), 1);
    }

    #[test]
    fn test_union_within_same_set_keeps_members() {
        let mut uf = registered(&["a", "b"]);
        uf.union(&"a", &"b").unwrap();
        uf.union(&"b", &"a").unwrap();
        uf.union(&"a", &"a").unwrap();

        assert_eq!(uf.find_set(&"a").unwrap().len(), 2);
        assert!(uf.same_set(&"a", &"b").unwrap());
    }

    #[test]
    fn test_unregistered_element_is_an_error() {
        let mut uf = registered(&["a"]);
        assert_eq!(uf.find_set(&"z"), Err(UnionFindError::Unregistered));
        assert_eq!(uf.union(&"a", &"z"), Err(UnionFindError::Unregistered));
        assert_eq!(uf.union(&"z", &"a"), Err(UnionFindError::Unregistered));
        assert!(!uf.contains(&"z"));
        // failed unions leave the structure untouched
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn test_sets_stay_disjoint_and_cover_members() {
        let mut uf = registered(&["a", "b", "c", "d", "e"]);
        uf.union(&"a", &"c").unwrap();
        uf.union(&"e", &"d").unwrap();

        let sets = uf.disjoint_sets();
        assert_eq!(sets.len(), 3);
        let total: usize = sets.iter().map(|set| set.len()).sum();
        assert_eq!(total, 5);
        for member in ["a", "b", "c", "d", "e"] {
            assert_eq!(sets.iter().filter(|set| set.contains(member)).count(), 1);
        }
    }
}
