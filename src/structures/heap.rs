//! d-ary heap priority queue with addressable entries.
//!
//! This module provides [`DHeap`], a min-heap generalizing the binary heap to `d`
//! children per node, and [`HeapHandle`], the handle returned by
//! [`DHeap::insert`] that later locates the entry for [`DHeap::delete`],
//! [`DHeap::decrease_key`] and [`DHeap::increase_key`].
//!
//! # Position Tracking
//!
//! Entries live directly in the heap array. Every entry remembers the slot that
//! its handle points to, and every slot remembers the current array position of
//! its entry. Both are updated on every swap, so a handle resolves to its entry
//! in O(1) and key updates only pay for the sift itself.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `insert`, `decrease_key` | O(log_d n) |
//! | `find_min`, `peek_min` | O(1) |
//! | `delete_min`, `delete`, `increase_key` | O(d log_d n) |
//!
//! # Examples
//!
//! ```rust
//! use graphkit::structures::DHeap;
//!
//! let mut heap: DHeap<u32, &str> = DHeap::new();
//! heap.insert(5, "five");
//! let three = heap.insert(3, "three");
//! heap.insert(7, "seven");
//!
//! assert_eq!(heap.find_min(), Some(&"three"));
//!
//! heap.increase_key(three, 9);
//! assert_eq!(heap.delete_min(), Some((5, "five")));
//! assert_eq!(heap.delete_min(), Some((7, "seven")));
//! assert_eq!(heap.delete_min(), Some((9, "three")));
//! assert!(heap.is_empty());
//! ```

use std::fmt;

use crate::{Error, Result};

/// Fan-out used by [`DHeap::new`].
pub const DEFAULT_ARITY: usize = 4;

/// Handle to an entry of a [`DHeap`].
///
/// A handle stays valid until its entry is removed by [`DHeap::delete`] or
/// [`DHeap::delete_min`]. After that, operations on the handle are no-ops, even if
/// a later insertion reuses the same internal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapHandle {
    slot: usize,
    generation: u32,
}

/// A heap entry: key, payload, and the slot its handle refers to.
#[derive(Debug, Clone)]
struct Entry<K, T> {
    key: K,
    data: T,
    slot: usize,
}

/// Indirection from a handle to the current heap position of its entry.
#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    position: Option<usize>,
}

/// A min-heap with `d` children per node and addressable entries.
///
/// Keys only need [`PartialOrd`], so `f64` distances can be used directly.
/// Incomparable keys (NaN) must not be inserted: they compare as neither smaller
/// nor larger and would leave the heap order unspecified.
///
/// # Invariants
///
/// - For every non-root entry, `key(entry) >= key(parent(entry))`
/// - Every slot of a live handle records the entry's current array position
///
/// [`check_invariants`](DHeap::check_invariants) verifies both.
#[derive(Debug, Clone)]
pub struct DHeap<K, T> {
    arity: usize,
    entries: Vec<Entry<K, T>>,
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl<K: PartialOrd, T> Default for DHeap<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialOrd, T> DHeap<K, T> {
    /// Creates an empty heap with the default arity of 4.
    #[must_use]
    pub fn new() -> Self {
        DHeap {
            arity: DEFAULT_ARITY,
            entries: Vec::new(),
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Creates an empty heap with `arity` children per node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArity`] if `arity < 2`.
    pub fn with_arity(arity: usize) -> Result<Self> {
        if arity < 2 {
            return Err(Error::InvalidArity(arity));
        }
        Ok(DHeap {
            arity,
            ..Self::new()
        })
    }

    /// Returns the number of children per node.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the heap holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `data` with priority `key` and returns a handle to the new entry.
    pub fn insert(&mut self, key: K, data: T) -> HeapHandle {
        let position = self.entries.len();
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot].position = Some(position);
                slot
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    position: Some(position),
                });
                self.slots.len() - 1
            }
        };

        self.entries.push(Entry { key, data, slot });
        self.sift_up(position);

        HeapHandle {
            slot,
            generation: self.slots[slot].generation,
        }
    }

    /// Returns the payload with the minimal key, or `None` if the heap is empty.
    #[must_use]
    pub fn find_min(&self) -> Option<&T> {
        self.entries.first().map(|entry| &entry.data)
    }

    /// Returns the minimal key and its payload, or `None` if the heap is empty.
    #[must_use]
    pub fn peek_min(&self) -> Option<(&K, &T)> {
        self.entries.first().map(|entry| (&entry.key, &entry.data))
    }

    /// Removes and returns the entry with the minimal key.
    pub fn delete_min(&mut self) -> Option<(K, T)> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.remove_at(0))
    }

    /// Removes the entry behind `handle` and returns its key and payload.
    ///
    /// The last entry takes the freed position and is sifted in whichever
    /// direction restores the heap order. A stale handle is a no-op.
    pub fn delete(&mut self, handle: HeapHandle) -> Option<(K, T)> {
        let position = self.position(handle)?;
        Some(self.remove_at(position))
    }

    /// Lowers the key of the entry behind `handle` to `new_key`.
    ///
    /// # Returns
    ///
    /// `true` if the key was lowered. A `new_key` that is not strictly smaller
    /// than the current key, or a stale handle, is rejected and leaves the heap
    /// unchanged.
    pub fn decrease_key(&mut self, handle: HeapHandle, new_key: K) -> bool {
        let Some(position) = self.position(handle) else {
            return false;
        };
        if !(new_key < self.entries[position].key) {
            return false;
        }
        self.entries[position].key = new_key;
        self.sift_up(position);
        true
    }

    /// Raises the key of the entry behind `handle` to `new_key`.
    ///
    /// # Returns
    ///
    /// `true` if the key was raised. A `new_key` that is not strictly greater
    /// than the current key, or a stale handle, is rejected and leaves the heap
    /// unchanged.
    pub fn increase_key(&mut self, handle: HeapHandle, new_key: K) -> bool {
        let Some(position) = self.position(handle) else {
            return false;
        };
        if !(new_key > self.entries[position].key) {
            return false;
        }
        self.entries[position].key = new_key;
        self.sift_down(position);
        true
    }

    /// Returns the key of the entry behind `handle`.
    #[must_use]
    pub fn key(&self, handle: HeapHandle) -> Option<&K> {
        self.position(handle)
            .map(|position| &self.entries[position].key)
    }

    /// Returns the payload of the entry behind `handle`.
    #[must_use]
    pub fn data(&self, handle: HeapHandle) -> Option<&T> {
        self.position(handle)
            .map(|position| &self.entries[position].data)
    }

    /// Returns `true` if `handle` refers to an entry still in the heap.
    #[must_use]
    pub fn contains(&self, handle: HeapHandle) -> bool {
        self.position(handle).is_some()
    }

    /// Removes every entry. Outstanding handles become stale.
    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            let slot = &mut self.slots[entry.slot];
            slot.position = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(entry.slot);
        }
    }

    /// Checks the heap order and the position bookkeeping. O(n).
    ///
    /// Intended for tests and fuzzing.
    #[must_use]
    pub fn check_invariants(&self) -> bool {
        let ordered = (1..self.entries.len()).all(|i| {
            let parent = (i - 1) / self.arity;
            !(self.entries[i].key < self.entries[parent].key)
        });
        let tracked = self
            .entries
            .iter()
            .enumerate()
            .all(|(i, entry)| self.slots[entry.slot].position == Some(i));
        let live = self.slots.iter().filter(|s| s.position.is_some()).count();
        ordered && tracked && live == self.entries.len()
    }

    fn position(&self, handle: HeapHandle) -> Option<usize> {
        let slot = self.slots.get(handle.slot)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.position
    }

    fn remove_at(&mut self, position: usize) -> (K, T) {
        let last = self.entries.len() - 1;
        self.swap(position, last);
        let removed = self.entries.swap_remove(last);

        let slot = &mut self.slots[removed.slot];
        slot.position = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(removed.slot);

        if position < self.entries.len() {
            let position = self.sift_up(position);
            self.sift_down(position);
        }
        (removed.key, removed.data)
    }

    fn sift_up(&mut self, mut position: usize) -> usize {
        while position > 0 {
            let parent = (position - 1) / self.arity;
            if self.entries[position].key < self.entries[parent].key {
                self.swap(position, parent);
                position = parent;
            } else {
                break;
            }
        }
        position
    }

    fn sift_down(&mut self, mut position: usize) -> usize {
        loop {
            let Some(first) = self.first_child(position) else {
                break;
            };
            let end = first.saturating_add(self.arity).min(self.entries.len());
            let mut min = first;
            for child in first + 1..end {
                if self.entries[child].key < self.entries[min].key {
                    min = child;
                }
            }
            if self.entries[min].key < self.entries[position].key {
                self.swap(position, min);
                position = min;
            } else {
                break;
            }
        }
        position
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.slots[self.entries[a].slot].position = Some(a);
        self.slots[self.entries[b].slot].position = Some(b);
    }
}

impl<K, T> DHeap<K, T> {
    /// Position of the first child of `position`, `None` for leaves.
    fn first_child(&self, position: usize) -> Option<usize> {
        let first = self.arity.checked_mul(position)?.checked_add(1)?;
        (first < self.entries.len()).then_some(first)
    }
}

impl<K: fmt::Display, T: fmt::Display> fmt::Display for DHeap<K, T> {
    /// Renders the heap as a tree, one `key - data` line per entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.entries.first() else {
            return Ok(());
        };
        writeln!(f, "{} - {}", root.key, root.data)?;
        let end = self.arity.saturating_add(1).min(self.entries.len());
        for child in 1..end {
            self.fmt_subtree(f, child, "")?;
        }
        Ok(())
    }
}

impl<K: fmt::Display, T: fmt::Display> DHeap<K, T> {
    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, index: usize, prefix: &str) -> fmt::Result {
        let Some(entry) = self.entries.get(index) else {
            return Ok(());
        };
        // The last child of a group sits at a multiple of the arity
        let has_sibling = index + 1 < self.entries.len() && index % self.arity != 0;
        let (branch, indent) = if has_sibling {
            ("├─", "│ ")
        } else {
            ("└─", "  ")
        };
        writeln!(f, "{prefix}{branch} {} - {}", entry.key, entry.data)?;

        let nested = format!("{prefix}{indent}");
        if let Some(first) = self.first_child(index) {
            let end = first.saturating_add(self.arity).min(self.entries.len());
            for child in first..end {
                self.fmt_subtree(f, child, &nested)?;
            }
        }
        Ok(())
    }
}
