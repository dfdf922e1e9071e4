//! Patient queue front end
//!
//! [`PatientQueue`] wraps a [`BinaryMinHeap`] and forwards every operation to it.
//! It adds [`enqueue_patient`](PatientQueue::enqueue_patient) for callers that
//! already hold a [`Patient`].
//!
//! # Example
//!
//! ```rust
//! use patient_queue::{Patient, PatientQueue, PriorityQueue};
//!
//! let mut queue = PatientQueue::new();
//! queue.enqueue("Rein", 6);
//! queue.enqueue_patient(Patient::new("Anat", 4));
//!
//! assert_eq!(queue.to_string(), "{Anat (4), Rein (6)}");
//! assert_eq!(queue.dequeue().as_deref(), Ok("Anat"));
//! assert_eq!(queue.size(), 1);
//! ```

use crate::binary_min::BinaryMinHeap;
use crate::config::QueueConfig;
use crate::patient::Patient;
use crate::traits::{PriorityQueue, QueueError};
use std::fmt;

/// A priority queue of patients, lowest priority served first
#[derive(Debug, Clone, Default)]
pub struct PatientQueue {
    heap: BinaryMinHeap,
}

impl PatientQueue {
    /// Creates an empty queue with the configured initial capacity
    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            heap: BinaryMinHeap::with_config(config),
        }
    }

    /// Adds a pre-built patient to the queue
    pub fn enqueue_patient(&mut self, patient: Patient) {
        self.heap.enqueue(patient.name, patient.priority);
    }

    /// Returns the number of patients waiting
    ///
    /// Same as [`len`](PriorityQueue::len).
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    /// Iterates over waiting patients in storage order
    pub fn iter(&self) -> impl Iterator<Item = &Patient> + '_ {
        self.heap.iter()
    }
}

impl PriorityQueue for PatientQueue {
    fn new() -> Self {
        Self {
            heap: BinaryMinHeap::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn enqueue(&mut self, name: impl Into<String>, priority: i32) {
        self.heap.enqueue(name, priority)
    }

    fn dequeue(&mut self) -> Result<String, QueueError> {
        self.heap.dequeue()
    }

    fn peek(&self) -> Result<&str, QueueError> {
        self.heap.peek()
    }

    fn peek_priority(&self) -> Result<i32, QueueError> {
        self.heap.peek_priority()
    }

    fn change_priority(&mut self, name: &str, new_priority: i32) {
        self.heap.change_priority(name, new_priority)
    }

    fn clear(&mut self) {
        self.heap.clear()
    }
}

impl Extend<Patient> for PatientQueue {
    fn extend<I: IntoIterator<Item = Patient>>(&mut self, iter: I) {
        self.heap.extend(iter)
    }
}

impl FromIterator<Patient> for PatientQueue {
    fn from_iter<I: IntoIterator<Item = Patient>>(iter: I) -> Self {
        Self {
            heap: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for PatientQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.heap, f)
    }
}
