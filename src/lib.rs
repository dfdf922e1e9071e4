//! Patient priority queue
//!
//! This crate provides a priority queue of named patients backed by a binary
//! min-heap. Patients with the lowest priority value are served first; patients
//! with equal priority are served in alphabetical order of their names.
//!
//! # Features
//!
//! - **Binary Min-Heap**: 1-based array heap with doubling growth; O(log n) insert and
//!   remove-min, O(1) peek
//! - **Priority updates**: `change_priority` by name, O(n) lookup then O(log n) rebalance
//! - **Duplicates**: identical names and priorities are kept side by side, never merged
//! - **Configuration**: initial capacity from code or TOML, validated on load
//!
//! # Example
//!
//! ```rust
//! use patient_queue::{PatientQueue, PriorityQueue};
//!
//! let mut queue = PatientQueue::new();
//! queue.enqueue("Anat", 4);
//! queue.enqueue("Rein", 6);
//! queue.enqueue("Bo", 4);
//!
//! assert_eq!(queue.dequeue().as_deref(), Ok("Anat"));
//! assert_eq!(queue.dequeue().as_deref(), Ok("Bo"));
//! assert_eq!(queue.dequeue().as_deref(), Ok("Rein"));
//! assert!(queue.is_empty());
//! ```

pub mod binary_min;
pub mod config;
pub mod patient;
pub mod queue;
pub mod traits;

// Re-export the main types for convenience
pub use binary_min::BinaryMinHeap;
pub use config::{ConfigError, QueueConfig};
pub use patient::Patient;
pub use queue::PatientQueue;
pub use traits::{PriorityQueue, QueueError};
