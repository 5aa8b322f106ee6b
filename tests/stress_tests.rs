//! Stress tests that push the heap through large workloads
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load. Set
//! `RUST_LOG=power_of_two_heap=trace` to watch the sift routines.

use power_of_two_heap::{HeapError, MaxHeap, PowerOfTwoMaxHeap};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Simple deterministic generator so failures reproduce
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next_i32(&mut self) -> i32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 33) as i32
    }
}

/// Test massive numbers of inserts and pops
fn test_massive_operations<H: MaxHeap>(mut heap: H) {
    for i in 0..10_000 {
        heap.push(i);
    }

    assert_eq!(heap.len(), 10_000);

    for i in (0..10_000).rev() {
        assert_eq!(heap.pop_max(), Ok(i));
    }

    assert!(heap.is_empty());
    assert_eq!(heap.pop_max(), Err(HeapError::EmptyState));
}

/// Test alternating insert and pop
fn test_alternating_ops<H: MaxHeap>(mut heap: H) {
    // Push two, pop one: the heap grows by one per round and the popped
    // value is always the larger of everything present.
    for i in 0..2_000 {
        heap.push(i * 2);
        heap.push(i * 2 + 1);
        assert_eq!(heap.pop_max(), Ok(i * 2 + 1));
    }

    assert_eq!(heap.len(), 2_000);
    for i in (0..2_000).rev() {
        assert_eq!(heap.pop_max(), Ok(i * 2));
    }
}

/// Test random values against a sorted reference
fn test_random_against_reference<H: MaxHeap>(mut heap: H, seed: u64) {
    let mut rng = Lcg::new(seed);
    let mut reference = Vec::new();

    for _ in 0..5_000 {
        let value = rng.next_i32() % 1_000;
        heap.push(value);
        reference.push(value);
    }
    reference.sort_unstable();

    while let Some(expected) = reference.pop() {
        assert_eq!(heap.pop_max(), Ok(expected));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_massive_operations_all_exponents() {
    init_logging();
    for x in 1..=6 {
        test_massive_operations(PowerOfTwoMaxHeap::new(x).unwrap());
    }
}

#[test]
fn test_massive_operations_single_child() {
    init_logging();
    // A list-shaped heap sifts through every element, so keep it small.
    let mut heap = PowerOfTwoMaxHeap::new(0).unwrap();
    for i in 0..500 {
        heap.insert(i);
    }
    for i in (0..500).rev() {
        assert_eq!(heap.pop_max(), Ok(i));
    }
}

#[test]
fn test_alternating_ops_all_exponents() {
    init_logging();
    for x in 1..=6 {
        test_alternating_ops(PowerOfTwoMaxHeap::new(x).unwrap());
    }
}

#[test]
fn test_random_against_reference_all_exponents() {
    init_logging();
    for x in 0..=6 {
        test_random_against_reference(PowerOfTwoMaxHeap::new(x).unwrap(), 0x5eed + x as u64);
    }
}

#[test]
fn test_heap_property_under_mixed_load() {
    init_logging();
    let mut rng = Lcg::new(42);
    for x in 0..=4 {
        let mut heap = PowerOfTwoMaxHeap::with_capacity(x, 1_024).unwrap();
        let mut expected_len = 0usize;
        for step in 0..3_000 {
            // Two inserts precede every pop, so the pop always succeeds.
            if step % 3 == 2 {
                assert!(heap.pop_max().is_ok());
                expected_len -= 1;
            } else {
                heap.insert(rng.next_i32() % 64);
                expected_len += 1;
            }
            assert_eq!(heap.len(), expected_len);
        }
        assert!(heap.is_heap());
        assert_eq!(heap.len(), 1_000);
    }
}
