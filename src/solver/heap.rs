use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

use fnv::FnvHashMap;

use crate::solver::node::{NodeId, SearchNode};

/// Something the heap can track by identity.
pub trait Keyed {
    type Key: Copy + Eq + Hash + Debug;

    fn key(&self) -> Self::Key;
}

impl<'a> Keyed for &'a SearchNode<'a> {
    type Key = NodeId;

    fn key(&self) -> NodeId {
        self.id
    }
}

/// Binary min-heap with a side table from each item's key to its current index,
/// so items can be found and re-prioritized in place.
///
/// Items with equal priorities come out in an order that depends on the heap's shape,
/// not in insertion order.
pub struct IndexedHeap<T: Keyed> {
    entries: Vec<(u32, T)>,
    location: FnvHashMap<T::Key, usize>,
}

impl<T: Keyed> IndexedHeap<T> {
    pub fn new() -> Self {
        IndexedHeap {
            entries: Vec::new(),
            location: FnvHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: T::Key) -> bool {
        self.location.contains_key(&key)
    }

    /// Current index of the item in the backing array.
    pub fn position(&self, key: T::Key) -> Option<usize> {
        self.location.get(&key).cloned()
    }

    pub fn priority(&self, key: T::Key) -> Option<u32> {
        self.position(key).map(|i| self.entries[i].0)
    }

    /// Panics if an item with the same key is already in the heap.
    pub fn push(&mut self, item: T, priority: u32) {
        let key = item.key();
        assert!(
            !self.location.contains_key(&key),
            "{:?} is already in the heap",
            key
        );

        self.entries.push((priority, item));
        let last = self.entries.len() - 1;
        self.location.insert(key, last);
        self.sift_up(last);
    }

    pub fn peek(&self) -> Option<(u32, &T)> {
        self.entries.first().map(|(priority, item)| (*priority, item))
    }

    /// Removes an item with the lowest priority.
    pub fn pop(&mut self) -> Option<(u32, T)> {
        if self.entries.is_empty() {
            return None;
        }

        let (priority, item) = self.entries.swap_remove(0);
        self.location.remove(&item.key());
        if !self.entries.is_empty() {
            self.location.insert(self.entries[0].1.key(), 0);
            self.sift_down(0);
        }
        Some((priority, item))
    }

    /// Changes the priority of a tracked item and restores the heap order.
    /// Returns false if the key is not in the heap.
    pub fn update_priority(&mut self, key: T::Key, priority: u32) -> bool {
        let index = match self.position(key) {
            Some(index) => index,
            None => return false,
        };

        let old = self.entries[index].0;
        self.entries[index].0 = priority;
        if priority < old {
            self.sift_up(index);
        } else if priority > old {
            self.sift_down(index);
        }
        true
    }

    fn sift_up(&mut self, mut cur: usize) -> usize {
        while cur > 0 {
            let parent = (cur - 1) / 2;
            if self.entries[cur].0 >= self.entries[parent].0 {
                break;
            }
            self.swap(cur, parent);
            cur = parent;
        }
        cur
    }

    fn sift_down(&mut self, mut cur: usize) -> usize {
        loop {
            let left = 2 * cur + 1;
            let right = left + 1;
            if left >= self.entries.len() {
                break;
            }

            let smaller =
                if right < self.entries.len() && self.entries[right].0 < self.entries[left].0 {
                    right
                } else {
                    left
                };
            if self.entries[smaller].0 >= self.entries[cur].0 {
                break;
            }
            self.swap(cur, smaller);
            cur = smaller;
        }
        cur
    }

    /// Swaps two entries, keeping the side table in sync.
    fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        self.location.insert(self.entries[i].1.key(), i);
        self.location.insert(self.entries[j].1.key(), j);
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        assert_eq!(self.entries.len(), self.location.len());
        for (i, (priority, item)) in self.entries.iter().enumerate() {
            assert_eq!(self.location[&item.key()], i);
            if i > 0 {
                assert!(self.entries[(i - 1) / 2].0 <= *priority);
            }
        }
    }
}

impl<T: Keyed> Default for IndexedHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> Debug for IndexedHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(priority, item)| (priority, item.key())))
            .finish()
    }
}
