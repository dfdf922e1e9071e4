//! The name/priority pair stored in every queue

use std::cmp::Ordering;
use std::fmt;

/// A patient waiting in the queue
///
/// Patients are ordered by priority, lowest first, and then by name in
/// ascending `str` order. Two patients with the same name and priority
/// compare equal; nothing else breaks the tie.
///
/// # Example
///
/// ```rust
/// use patient_queue::Patient;
///
/// let anat = Patient::new("Anat", 4);
/// let bo = Patient::new("Bo", 4);
/// let rein = Patient::new("Rein", 6);
///
/// assert!(anat < bo);
/// assert!(bo < rein);
/// assert_eq!(anat.to_string(), "Anat (4)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Patient {
    pub name: String,
    pub priority: i32,
}

impl Patient {
    pub fn new(name: impl Into<String>, priority: i32) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }
}

impl Ord for Patient {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Patient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.priority)
    }
}
