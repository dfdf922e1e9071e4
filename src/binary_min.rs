//! Binary min-heap of patients
//!
//! An array-backed binary heap using 1-based index arithmetic: slot 0 is never
//! occupied, the children of slot `i` are `2i` and `2i + 1`, and its parent is
//! `i / 2`. The `len()` live entries occupy slots `1..=len()`.
//!
//! Storage starts at [`QueueConfig::initial_capacity`] slots and doubles whenever
//! an insertion would fill the last slot. Growth copies entries to the same
//! indices and never rebalances. [`clear`](PriorityQueue::clear) drops back to
//! the initial capacity.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `enqueue`         | O(log n)*  |
//! | `dequeue`         | O(log n)   |
//! | `peek`            | O(1)       |
//! | `change_priority` | O(n)       |
//! | `clear`           | O(n)       |
//!
//! *Amortized; a growing insertion copies all live entries.
//!
//! `change_priority` finds its target with a linear scan; there is no
//! name-to-slot index.
//!
//! # Example
//!
//! ```rust
//! use patient_queue::PriorityQueue;
//! use patient_queue::binary_min::BinaryMinHeap;
//!
//! let mut heap = BinaryMinHeap::new();
//! heap.enqueue("Anat", 4);
//! heap.enqueue("Rein", 6);
//! heap.enqueue("Bo", 4);
//! assert_eq!(heap.to_string(), "{Anat (4), Rein (6), Bo (4)}");
//!
//! heap.change_priority("Rein", 1);
//! assert_eq!(heap.peek(), Ok("Rein"));
//!
//! assert_eq!(heap.dequeue().as_deref(), Ok("Rein"));
//! assert_eq!(heap.dequeue().as_deref(), Ok("Anat"));
//! assert_eq!(heap.dequeue().as_deref(), Ok("Bo"));
//! assert!(heap.dequeue().is_err());
//! ```

use crate::config::QueueConfig;
use crate::patient::Patient;
use crate::traits::{PriorityQueue, QueueError};
use std::cmp::Ordering;
use std::fmt;

/// A binary min-heap of [`Patient`]s ordered by priority, then name
#[derive(Debug, Clone)]
pub struct BinaryMinHeap {
    /// One entry per allocated slot; `slots.len()` is the capacity
    slots: Vec<Option<Patient>>,
    /// Number of live entries, stored in `slots[1..=count]`
    count: usize,
    initial_capacity: usize,
}

impl BinaryMinHeap {
    /// Creates an empty heap with the configured initial capacity
    ///
    /// A config built by hand without validation is raised to the two-slot
    /// minimum.
    pub fn with_config(config: QueueConfig) -> Self {
        let initial_capacity = config.initial_capacity.max(2);
        Self {
            slots: empty_slots(initial_capacity),
            count: 0,
            initial_capacity,
        }
    }

    /// Number of allocated slots, including the unused slot 0
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the minimum patient without removing it
    pub fn peek_patient(&self) -> Option<&Patient> {
        self.slots.get(1).and_then(Option::as_ref)
    }

    /// Iterates over live entries in storage order
    ///
    /// Only the first item is guaranteed to be the minimum; the rest follow
    /// heap layout, not sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Patient> + '_ {
        self.slots[1..=self.count].iter().flatten()
    }

    /// Doubles the slot count, keeping every live entry at its index
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        self.slots.resize_with(new_capacity, || None);
        log::debug!(
            "Patient heap grown from {} to {} slots with {} entries.",
            old_capacity,
            new_capacity,
            self.count
        );
    }

    // Comparisons below are on `Option<Patient>`. Every slot in `1..=count`
    // is `Some`, so they reduce to the patient ordering.

    /// Move entry at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 1 {
            let parent = index / 2;
            if self.slots[index] < self.slots[parent] {
                self.slots.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move entry at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        debug_assert!(self.count < self.capacity());
        loop {
            let left = 2 * index;
            let right = left + 1;
            if left > self.count {
                break;
            }

            // Children equal in both priority and name are interchangeable;
            // the left one wins.
            let smaller = if right <= self.count && self.slots[right] < self.slots[left] {
                right
            } else {
                left
            };

            if self.slots[smaller] < self.slots[index] {
                self.slots.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }
}

fn empty_slots(capacity: usize) -> Vec<Option<Patient>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

impl PriorityQueue for BinaryMinHeap {
    fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn len(&self) -> usize {
        self.count
    }

    fn enqueue(&mut self, name: impl Into<String>, priority: i32) {
        if self.count + 1 >= self.capacity() {
            self.grow();
        }
        self.count += 1;
        self.slots[self.count] = Some(Patient::new(name, priority));
        self.sift_up(self.count);
    }

    fn dequeue(&mut self) -> Result<String, QueueError> {
        if self.count == 0 {
            return Err(QueueError::EmptyStructure);
        }

        let last = self.count;
        self.slots.swap(1, last);
        let removed = self.slots[last].take();
        self.count -= 1;
        self.sift_down(1);

        removed
            .map(|patient| patient.name)
            .ok_or(QueueError::EmptyStructure)
    }

    fn peek(&self) -> Result<&str, QueueError> {
        self.peek_patient()
            .map(|patient| patient.name.as_str())
            .ok_or(QueueError::EmptyStructure)
    }

    fn peek_priority(&self) -> Result<i32, QueueError> {
        self.peek_patient()
            .map(|patient| patient.priority)
            .ok_or(QueueError::EmptyStructure)
    }

    fn change_priority(&mut self, name: &str, new_priority: i32) {
        let found = (1..=self.count)
            .find(|&i| matches!(&self.slots[i], Some(patient) if patient.name == name));
        let Some(index) = found else {
            log::trace!("No patient named {:?} to reprioritize.", name);
            return;
        };
        let Some(patient) = self.slots[index].as_mut() else {
            return;
        };

        let old_priority = std::mem::replace(&mut patient.priority, new_priority);
        match new_priority.cmp(&old_priority) {
            Ordering::Less => self.sift_up(index),
            Ordering::Greater => self.sift_down(index),
            Ordering::Equal => {}
        }
    }

    fn clear(&mut self) {
        log::debug!(
            "Patient heap cleared, dropping {} entries and {} slots.",
            self.count,
            self.capacity()
        );
        self.slots = empty_slots(self.initial_capacity);
        self.count = 0;
    }
}

impl Default for BinaryMinHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Patient> for BinaryMinHeap {
    fn extend<I: IntoIterator<Item = Patient>>(&mut self, iter: I) {
        for patient in iter {
            self.enqueue(patient.name, patient.priority);
        }
    }
}

impl FromIterator<Patient> for BinaryMinHeap {
    fn from_iter<I: IntoIterator<Item = Patient>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl fmt::Display for BinaryMinHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, patient) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", patient)?;
        }
        f.write_str("}")
    }
}
