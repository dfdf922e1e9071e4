//! Common trait and error type for patient priority queues
//!
//! [`PriorityQueue`] is the surface shared by the heap itself
//! ([`BinaryMinHeap`](crate::binary_min::BinaryMinHeap)) and the delegating
//! [`PatientQueue`](crate::queue::PatientQueue). Generic code and tests can be
//! written once against the trait and run over either.

use thiserror::Error;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Removal or peek was attempted on a queue with no live entries
    #[error("the queue is empty")]
    EmptyStructure,
}

/// Base trait for patient priority queues
///
/// Entries are `(name, priority)` pairs. The minimum is the entry with the
/// lowest priority; equal priorities are ordered by name, alphabetically.
///
/// Unlike [`std::collections::BinaryHeap`], removal only hands back the name:
/// callers that need the priority must call [`peek_priority`](Self::peek_priority)
/// first.
///
/// # Example
///
/// ```rust
/// use patient_queue::PriorityQueue;
/// use patient_queue::binary_min::BinaryMinHeap;
///
/// let mut queue = BinaryMinHeap::new();
/// queue.enqueue("Rein", 6);
/// queue.enqueue("Anat", 4);
///
/// assert_eq!(queue.peek(), Ok("Anat"));
/// assert_eq!(queue.peek_priority(), Ok(4));
/// assert_eq!(queue.dequeue().as_deref(), Ok("Anat"));
/// ```
pub trait PriorityQueue {
    /// Creates a new empty queue with the default initial capacity
    fn new() -> Self;

    /// Returns true if the queue holds no entries
    fn is_empty(&self) -> bool;

    /// Returns the number of live entries
    fn len(&self) -> usize;

    /// Inserts a patient with the given priority
    ///
    /// Any name is accepted, including the empty string and names already
    /// present. Any `i32` priority is accepted.
    ///
    /// # Time Complexity
    /// O(log n), plus O(n) when the storage has to grow.
    fn enqueue(&mut self, name: impl Into<String>, priority: i32);

    /// Removes the minimum entry and returns its name
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyStructure`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn dequeue(&mut self) -> Result<String, QueueError>;

    /// Returns the name of the minimum entry without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyStructure`] if the queue is empty.
    fn peek(&self) -> Result<&str, QueueError>;

    /// Returns the priority of the minimum entry without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyStructure`] if the queue is empty.
    fn peek_priority(&self) -> Result<i32, QueueError>;

    /// Sets the priority of the first entry named `name`
    ///
    /// Entries are scanned in storage order and only the first match is
    /// updated. An unknown name leaves the queue untouched.
    ///
    /// # Time Complexity
    /// O(n) for the scan, O(log n) for the rebalance.
    fn change_priority(&mut self, name: &str, new_priority: i32);

    /// Removes every entry and resets the storage to its initial capacity
    fn clear(&mut self);
}
