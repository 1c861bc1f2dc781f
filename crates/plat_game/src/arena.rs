//! Index-stable storage with deferred removal.
//!
//! Interaction rules run while entities are being visited, and a rule may kill
//! the very entity it is looking at. Instead of erasing in place, a removal
//! only marks the slot; marked slots are skipped by every iterator and
//! `compact()` drops them once per frame, after all rules have run. Indices
//! are stable between two compactions and must not be held across one.

#[derive(Debug, Clone)]
pub struct Arena<T> {
    items: Vec<T>,
    removed: Vec<bool>,
    pending: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            removed: Vec::new(),
            pending: 0,
        }
    }

    pub fn insert(&mut self, item: T) -> usize {
        self.items.push(item);
        self.removed.push(false);
        self.items.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if self.is_removed(index) {
            return None;
        }
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if self.is_removed(index) {
            return None;
        }
        self.items.get_mut(index)
    }

    /// Returns false if the slot was already marked or does not exist.
    pub fn mark_removed(&mut self, index: usize) -> bool {
        match self.removed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                self.pending += 1;
                true
            }
            _ => false,
        }
    }

    pub fn is_removed(&self, index: usize) -> bool {
        self.removed.get(index).copied().unwrap_or(true)
    }

    pub fn live_count(&self) -> usize {
        self.items.len() - self.pending
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.removed[*i])
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        let removed = &self.removed;
        self.items
            .iter_mut()
            .enumerate()
            .filter(move |(i, _)| !removed[*i])
    }

    /// Drops every marked slot. Returns how many were dropped.
    pub fn compact(&mut self) -> usize {
        if self.pending == 0 {
            return 0;
        }
        let removed = std::mem::take(&mut self.removed);
        let mut flags = removed.iter();
        self.items.retain(|_| !*flags.next().unwrap_or(&false));
        self.removed = vec![false; self.items.len()];
        let dropped = self.pending;
        self.pending = 0;
        dropped
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Arena<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arena = Arena::new();
        for item in iter {
            arena.insert(item);
        }
        arena
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_items_are_hidden_until_compaction() {
        let mut arena: Arena<&str> = ["a", "b", "c"].into_iter().collect();
        assert!(arena.mark_removed(1));
        assert_eq!(arena.get(1), None);
        assert_eq!(arena.get(2), Some(&"c"));
        assert_eq!(arena.live_count(), 2);
        let live: Vec<_> = arena.iter().map(|(_, v)| *v).collect();
        assert_eq!(live, vec!["a", "c"]);
    }

    #[test]
    fn double_mark_is_rejected() {
        let mut arena: Arena<u32> = [1, 2].into_iter().collect();
        assert!(arena.mark_removed(0));
        assert!(!arena.mark_removed(0));
        assert!(!arena.mark_removed(9));
        assert_eq!(arena.live_count(), 1);
    }

    #[test]
    fn compact_drops_marked_and_keeps_order() {
        let mut arena: Arena<u32> = (0..6).collect();
        arena.mark_removed(0);
        arena.mark_removed(3);
        arena.mark_removed(5);
        assert_eq!(arena.compact(), 3);
        let live: Vec<_> = arena.iter().map(|(i, v)| (i, *v)).collect();
        assert_eq!(live, vec![(0, 1), (1, 2), (2, 4)]);
        assert_eq!(arena.compact(), 0);
    }

    #[test]
    fn insert_during_frame_is_visible_immediately() {
        let mut arena: Arena<u32> = Arena::new();
        let a = arena.insert(10);
        arena.mark_removed(a);
        let b = arena.insert(20);
        assert_eq!(arena.get(b), Some(&20));
        arena.compact();
        assert_eq!(arena.get(0), Some(&20));
    }

    #[test]
    fn iter_mut_skips_marked() {
        let mut arena: Arena<u32> = (0..4).collect();
        arena.mark_removed(2);
        for (_, v) in arena.iter_mut() {
            *v += 100;
        }
        arena.compact();
        let live: Vec<_> = arena.iter().map(|(_, v)| *v).collect();
        assert_eq!(live, vec![100, 101, 103]);
    }
}
