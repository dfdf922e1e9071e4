//! Stress tests that push the queues through large operation volumes
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use patient_queue::{BinaryMinHeap, PatientQueue, PriorityQueue, QueueError};

fn name(i: i32) -> String {
    format!("patient{i:05}")
}

/// Test massive numbers of enqueues and dequeues
fn test_massive_operations<Q: PriorityQueue>() {
    let mut queue = Q::new();

    for i in 0..5000 {
        queue.enqueue(name(i), i);
    }
    assert_eq!(queue.len(), 5000);

    for i in 0..5000 {
        assert_eq!(queue.dequeue(), Ok(name(i)));
    }
    assert!(queue.is_empty());
}

/// Reverse insertion forces every entry to sift all the way up
fn test_reverse_insertion<Q: PriorityQueue>() {
    let mut queue = Q::new();

    for i in (0..3000).rev() {
        queue.enqueue(name(i), i);
        assert_eq!(queue.peek_priority(), Ok(i));
    }

    for i in 0..3000 {
        assert_eq!(queue.dequeue(), Ok(name(i)));
    }
}

/// Test many change_priority calls moving everything to the front in turn
fn test_many_priority_changes<Q: PriorityQueue>() {
    let mut queue = Q::new();

    for i in 0..500 {
        queue.enqueue(name(i), 10_000 + i);
    }

    // Reverse the order: the last patient ends up first
    for i in 0..500 {
        queue.change_priority(&name(i), 500 - i);
        assert_eq!(queue.peek(), Ok(name(i).as_str()));
    }

    for i in (0..500).rev() {
        assert_eq!(queue.dequeue(), Ok(name(i)));
    }
}

/// Test alternating enqueue and dequeue around a growing core
fn test_alternating_ops<Q: PriorityQueue>() {
    let mut queue = Q::new();

    for i in 0..1000 {
        queue.enqueue(name(i * 2), i * 2);
        queue.enqueue(name(i * 2 + 1), i * 2 + 1);
        assert!(queue.dequeue().is_ok());
    }
    assert_eq!(queue.len(), 1000);

    let mut last = i32::MIN;
    while !queue.is_empty() {
        let priority = queue.peek_priority().unwrap();
        assert!(priority >= last);
        last = priority;
        queue.dequeue().unwrap();
    }
}

/// All patients tied on priority; names alone decide the order
fn test_all_same_priority<Q: PriorityQueue>() {
    let mut queue = Q::new();

    // Interleave so insertion order differs from name order
    for i in 0..1000 {
        let k = (i * 7919) % 1000;
        queue.enqueue(name(k), 1);
    }

    for i in 0..1000 {
        assert_eq!(queue.dequeue(), Ok(name(i)));
    }
}

/// Repeated fill and clear cycles
fn test_clear_cycles<Q: PriorityQueue>() {
    let mut queue = Q::new();

    for round in 0..20 {
        for i in 0..(round * 50) {
            queue.enqueue(name(i), -i);
        }
        assert_eq!(queue.len(), (round * 50) as usize);
        queue.clear();
        assert_eq!(queue.dequeue(), Err(QueueError::EmptyStructure));
    }
}

#[test]
fn test_binary_min_massive_operations() {
    test_massive_operations::<BinaryMinHeap>();
}

#[test]
fn test_patient_queue_massive_operations() {
    test_massive_operations::<PatientQueue>();
}

#[test]
fn test_binary_min_reverse_insertion() {
    test_reverse_insertion::<BinaryMinHeap>();
}

#[test]
fn test_binary_min_many_priority_changes() {
    test_many_priority_changes::<BinaryMinHeap>();
}

#[test]
fn test_patient_queue_many_priority_changes() {
    test_many_priority_changes::<PatientQueue>();
}

#[test]
fn test_binary_min_alternating_ops() {
    test_alternating_ops::<BinaryMinHeap>();
}

#[test]
fn test_binary_min_all_same_priority() {
    test_all_same_priority::<BinaryMinHeap>();
}

#[test]
fn test_patient_queue_clear_cycles() {
    test_clear_cycles::<PatientQueue>();
}

#[test]
fn test_growth_doubles_capacity() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut heap = BinaryMinHeap::new();
    let mut capacities = vec![heap.capacity()];
    for i in 0..1000 {
        heap.enqueue(name(i), i);
        if heap.capacity() != *capacities.last().unwrap() {
            capacities.push(heap.capacity());
        }
    }

    assert_eq!(capacities, [10, 20, 40, 80, 160, 320, 640, 1280]);
}
