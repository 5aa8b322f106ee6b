//! Power-of-Two d-ary Max-Heap for Rust
//!
//! This crate provides an integer max-heap whose branching factor is a
//! configurable power of two. A node has `2^x` children, with `x` fixed at
//! construction time: `x = 1` is the classic binary heap, larger exponents give
//! wider and shallower trees that trade cheaper inserts for more comparisons
//! per level on removal.
//!
//! # Features
//!
//! - **PowerOfTwoMaxHeap**: O(log_d n) insert; O(d log_d n) pop-max; O(1) peek and len
//! - **MaxHeap trait**: a small common interface for writing generic helpers
//! - **HeapError**: `InvalidArgument` for bad exponents, `EmptyState` for popping an empty heap
//!
//! The crate logs through the [`log`] facade and never installs a logger itself.
//!
//! # Example
//!
//! ```rust
//! use power_of_two_heap::{HeapError, PowerOfTwoMaxHeap};
//!
//! let mut heap = PowerOfTwoMaxHeap::new(1).unwrap();
//! for value in [5, 3, 8, 1, 9, 2] {
//!     heap.insert(value);
//! }
//! assert_eq!(heap.size(), 6);
//! assert_eq!(heap.pop_max(), Ok(9));
//! assert_eq!(heap.pop_max(), Ok(8));
//!
//! assert_eq!(PowerOfTwoMaxHeap::new(-1).unwrap_err(), HeapError::InvalidArgument);
//! ```

pub mod power_of_two;
pub mod traits;

// Re-export the main types for convenience
pub use power_of_two::PowerOfTwoMaxHeap;
pub use traits::{HeapError, MaxHeap};
