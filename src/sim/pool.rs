//! Ordered entity pools with deferred removal
//!
//! A visiting pass never removes in place. Entities flagged during
//! [`EntityPool::for_each_mut`] are compacted out after the pass, so every
//! sibling is visited exactly once.

use serde::{Deserialize, Serialize};

/// What a visitor wants done with the entity it just saw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Keep,
    Remove,
}

impl Visit {
    /// `Remove` when `cond` holds
    #[inline]
    pub fn remove_if(cond: bool) -> Self {
        if cond { Visit::Remove } else { Visit::Keep }
    }
}

/// Live entities of one kind, in insertion order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityPool<T> {
    items: Vec<T>,
}

impl<T> Default for EntityPool<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> EntityPool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the entity at `index`; later entities shift down by one.
    /// Out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Visit every entity once, in order, then drop the ones the visitor
    /// flagged. Returns how many were removed.
    pub fn for_each_mut<F>(&mut self, mut visit: F) -> usize
    where
        F: FnMut(&mut T) -> Visit,
    {
        let mut doomed = Vec::new();
        for (idx, item) in self.items.iter_mut().enumerate() {
            if visit(item) == Visit::Remove {
                doomed.push(idx);
            }
        }
        self.compact(&doomed)
    }

    /// Drop the entities at the given ascending indices
    fn compact(&mut self, doomed: &[usize]) -> usize {
        if doomed.is_empty() {
            return 0;
        }
        let mut idx = 0;
        let mut next = doomed.iter().peekable();
        self.items.retain(|_| {
            let drop = next.next_if_eq(&&idx).is_some();
            idx += 1;
            !drop
        });
        doomed.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a EntityPool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for EntityPool<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_adjacent_removals_skip_nothing() {
        let mut pool: EntityPool<u32> = (0..6).collect();
        let mut seen = Vec::new();
        let removed = pool.for_each_mut(|v| {
            seen.push(*v);
            Visit::remove_if(*v == 1 || *v == 2)
        });
        assert_eq!(removed, 2);
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(pool.as_slice(), &[0, 3, 4, 5]);
    }

    #[test]
    fn test_remove_at_shifts_and_ignores_out_of_range() {
        let mut pool: EntityPool<char> = "abc".chars().collect();
        assert_eq!(pool.remove_at(1), Some('b'));
        assert_eq!(pool.as_slice(), &['a', 'c']);
        assert_eq!(pool.remove_at(2), None);
        assert_eq!(pool.as_slice(), &['a', 'c']);
    }

    #[test]
    fn test_mutation_survives_pass() {
        let mut pool: EntityPool<i32> = vec![1, 2, 3].into_iter().collect();
        pool.for_each_mut(|v| {
            *v *= 10;
            Visit::Keep
        });
        assert_eq!(pool.as_slice(), &[10, 20, 30]);
    }

    proptest! {
        #[test]
        fn prop_for_each_mut_matches_filter(
            items in prop::collection::vec(0u32..100, 0..64),
            cutoff in 0u32..100,
        ) {
            let mut pool: EntityPool<u32> = items.iter().copied().collect();
            let mut visits = 0;
            pool.for_each_mut(|v| {
                visits += 1;
                Visit::remove_if(*v < cutoff)
            });
            let expected: Vec<u32> = items.iter().copied().filter(|v| *v >= cutoff).collect();
            prop_assert_eq!(visits, items.len());
            prop_assert_eq!(pool.as_slice(), expected.as_slice());
        }

        #[test]
        fn prop_repeated_remove_at_past_end_is_inert(
            items in prop::collection::vec(any::<u16>(), 0..32),
            extra in 0usize..8,
        ) {
            let mut pool: EntityPool<u16> = items.iter().copied().collect();
            prop_assert!(pool.remove_at(items.len() + extra).is_none());
            prop_assert_eq!(pool.as_slice(), items.as_slice());
        }
    }
}
