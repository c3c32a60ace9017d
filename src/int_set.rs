use std::fmt;

use log::{debug, trace};

use crate::error::{Result, SetError};

pub const DEFAULT_CAPACITY: usize = 5;

/// Unordered set of unique integers over a fixed-length backing array.
///
/// Slots `[0, count)` hold the live values. Slots `[count, capacity)` are
/// `None`. Storage doubles when full and never shrinks.
pub struct IntSet {
    storage: Vec<Option<i64>>,
    count: usize,
}

impl IntSet {
    pub fn new() -> Self {
        Self {
            storage: vec![None; DEFAULT_CAPACITY],
            count: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SetError::InvalidArgument { capacity });
        }
        Ok(Self {
            storage: vec![None; capacity],
            count: 0,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.index_of(value).is_some()
    }

    /// Inserts `value`. Returns false if it was already present.
    pub fn add(&mut self, value: i64) -> bool {
        if self.contains(value) {
            return false;
        }
        if self.is_full() {
            self.grow();
        }
        trace!("add {} at slot {}", value, self.count);
        self.storage[self.count] = Some(value);
        self.count += 1;
        true
    }

    /// Removes `value` by moving the last live element into its slot.
    /// Returns false if it was not present.
    pub fn remove(&mut self, value: i64) -> bool {
        let idx = match self.index_of(value) {
            Some(i) => i,
            None => return false,
        };
        self.count -= 1;
        trace!("remove {} from slot {}, refilled from slot {}", value, idx, self.count);
        self.storage[idx] = self.storage[self.count];
        self.storage[self.count] = None;
        true
    }

    fn index_of(&self, value: i64) -> Option<usize> {
        self.storage[..self.count]
            .iter()
            .position(|slot| *slot == Some(value))
    }

    fn is_full(&self) -> bool {
        self.count == self.storage.len()
    }

    fn grow(&mut self) {
        let old = self.storage.len();
        let mut larger = vec![None; old * 2];
        larger[..self.count].copy_from_slice(&self.storage[..self.count]);
        self.storage = larger;
        debug!("grew storage from {} to {} slots", old, self.storage.len());
    }
}

impl Default for IntSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let live: Vec<i64> = self.storage[..self.count].iter().flatten().copied().collect();
        f.debug_struct("IntSet")
            .field("elements", &live)
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(set: &IntSet) -> &[Option<i64>] {
        &set.storage[..set.count]
    }

    #[test]
    fn new_uses_default_capacity() {
        let set = IntSet::new();
        assert_eq!(set.capacity(), DEFAULT_CAPACITY);
        assert!(set.storage.iter().all(Option::is_none));
        assert_eq!(IntSet::default().capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(
            IntSet::with_capacity(0).unwrap_err(),
            SetError::InvalidArgument { capacity: 0 }
        );
    }

    #[test]
    fn grow_doubles_and_keeps_order() {
        let mut set = IntSet::with_capacity(2).unwrap();
        set.add(7);
        set.add(8);
        assert_eq!(set.capacity(), 2);

        set.add(9);
        assert_eq!(set.capacity(), 4);
        assert_eq!(live(&set), &[Some(7), Some(8), Some(9)]);
        assert_eq!(set.storage[3], None);
    }

    #[test]
    fn remove_moves_last_into_hole() {
        let mut set = IntSet::new();
        for v in [10, 20, 30, 40] {
            set.add(v);
        }
        assert!(set.remove(20));
        assert_eq!(live(&set), &[Some(10), Some(40), Some(30)]);
        assert_eq!(set.storage[3], None);
    }

    #[test]
    fn remove_last_element_clears_slot() {
        let mut set = IntSet::new();
        set.add(1);
        set.add(2);
        assert!(set.remove(2));
        assert_eq!(live(&set), &[Some(1)]);
        assert_eq!(set.storage[1], None);
    }

    #[test]
    fn capacity_never_shrinks() {
        let mut set = IntSet::with_capacity(1).unwrap();
        for v in 0..5 {
            set.add(v);
        }
        assert_eq!(set.capacity(), 8);
        for v in 0..5 {
            set.remove(v);
        }
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 8);
        assert!(set.storage.iter().all(Option::is_none));
    }

    #[test]
    fn debug_shows_live_elements_only() {
        let mut set = IntSet::with_capacity(4).unwrap();
        set.add(3);
        set.add(-1);
        assert_eq!(
            format!("{:?}", set),
            "IntSet { elements: [3, -1], capacity: 4 }"
        );
    }
}
