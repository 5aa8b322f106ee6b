//! Common traits for max-heap data structures
//!
//! This module provides the error type shared by every fallible heap
//! operation and the [`MaxHeap`] trait, which lets test helpers and
//! benchmarks be written once against any max-heap.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The branch-factor exponent is negative, or `2^x` does not fit in a `usize`
    InvalidArgument,
    /// `pop_max` was called on a heap holding no elements
    EmptyState,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidArgument => {
                write!(f, "branch factor exponent must be in 0..usize::BITS")
            }
            HeapError::EmptyState => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for integer max-heaps
///
/// The API follows Rust's `BinaryHeap` naming, except that removing the
/// maximum is fallible: popping an empty heap is reported as
/// [`HeapError::EmptyState`] instead of `None`, and the heap is left
/// untouched.
///
/// # Example
///
/// ```rust
/// use power_of_two_heap::{HeapError, MaxHeap, PowerOfTwoMaxHeap};
///
/// let mut heap = PowerOfTwoMaxHeap::new(2).unwrap();
/// heap.push(3);
/// heap.push(7);
///
/// assert_eq!(heap.peek(), Some(7));
/// assert_eq!(heap.pop_max(), Ok(7));
/// assert_eq!(heap.pop_max(), Ok(3));
/// assert_eq!(heap.pop_max(), Err(HeapError::EmptyState));
/// ```
pub trait MaxHeap {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a value
    ///
    /// # Time Complexity
    /// O(log_d n) amortized, where d is the branch factor.
    fn push(&mut self, value: i32);

    /// Returns the maximum value without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<i32>;

    /// Removes and returns the maximum value
    ///
    /// # Errors
    /// Returns `HeapError::EmptyState` if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(d log_d n), where d is the branch factor.
    fn pop_max(&mut self) -> Result<i32, HeapError>;
}
