//! Power-of-two d-ary max-heap
//!
//! An implicit max-heap stored in a flat `Vec<i32>`, where every node has up
//! to `d = 2^x` children. The exponent `x` is chosen at construction time and
//! never changes afterwards.
//!
//! For index `i` the parent lives at `(i - 1) / d` and the children occupy
//! `d*i + 1 ..= d*i + d`. Wider trees are shallower, so `insert` gets cheaper
//! as `d` grows while `pop_max` has to scan more children per level.
//!
//! `x = 0` is accepted and yields `d = 1`: every node has a single child and
//! the heap degenerates into a sorted list. It is slow but correct. Large
//! exponents waste width without breaking anything; only exponents whose
//! branch factor does not fit in a `usize` are rejected.
//!
//! # Time Complexity
//!
//! | Operation | Complexity      |
//! |-----------|-----------------|
//! | `insert`  | O(log_d n)      |
//! | `pop_max` | O(d · log_d n)  |
//! | `peek`    | O(1)            |
//! | `len`     | O(1)            |
//!
//! # Example
//!
//! ```rust
//! use power_of_two_heap::PowerOfTwoMaxHeap;
//!
//! let mut heap = PowerOfTwoMaxHeap::new(2).unwrap(); // four children per node
//! heap.insert(5);
//! heap.insert(9);
//! heap.insert(1);
//!
//! assert_eq!(heap.branch_factor(), 4);
//! assert_eq!(heap.pop_max(), Ok(9));
//! assert_eq!(heap.pop_max(), Ok(5));
//! assert_eq!(heap.pop_max(), Ok(1));
//! assert!(heap.pop_max().is_err());
//! ```

use std::ops::Range;

use log::{debug, trace};

use crate::traits::{HeapError, MaxHeap};

/// A max-heap whose nodes have `2^x` children
///
/// Callers only ever see values, never positions in the backing storage.
/// The type does no internal synchronisation; share it across threads only
/// behind a lock.
#[derive(Debug, Clone)]
pub struct PowerOfTwoMaxHeap {
    /// Implicit tree, root at index 0
    storage: Vec<i32>,
    branch_factor: usize,
    exponent: u32,
}

impl PowerOfTwoMaxHeap {
    /// Creates an empty heap with branch factor `2^x`
    ///
    /// # Errors
    /// Returns `HeapError::InvalidArgument` if `x` is negative or if `2^x`
    /// overflows a `usize`.
    pub fn new(x: i32) -> Result<Self, HeapError> {
        Self::with_capacity(x, 0)
    }

    /// Creates an empty heap with branch factor `2^x` and room for at least
    /// `capacity` elements before reallocating
    ///
    /// # Errors
    /// Same as [`PowerOfTwoMaxHeap::new`].
    pub fn with_capacity(x: i32, capacity: usize) -> Result<Self, HeapError> {
        let (exponent, branch_factor) = branch_factor_for(x)?;
        debug!(
            "new heap: exponent {}, branch factor {}, capacity {}",
            exponent, branch_factor, capacity
        );
        Ok(Self {
            storage: Vec::with_capacity(capacity),
            branch_factor,
            exponent,
        })
    }

    /// Number of children per node
    pub fn branch_factor(&self) -> usize {
        self.branch_factor
    }

    /// The `x` in `2^x`
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Number of elements in the heap
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Alias of [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the maximum without removing it
    pub fn peek(&self) -> Option<i32> {
        self.storage.first().copied()
    }

    /// Inserts a value, sifting it up past every strictly smaller ancestor
    pub fn insert(&mut self, value: i32) {
        self.storage.push(value);
        self.sift_up(self.storage.len() - 1);
    }

    /// Removes and returns the maximum
    ///
    /// # Errors
    /// Returns `HeapError::EmptyState` if the heap is empty. The heap is not
    /// modified in that case.
    pub fn pop_max(&mut self) -> Result<i32, HeapError> {
        if self.storage.is_empty() {
            return Err(HeapError::EmptyState);
        }

        // Moves the last element into the root slot.
        let max = self.storage.swap_remove(0);

        if !self.storage.is_empty() {
            self.sift_down(0);
        }

        Ok(max)
    }

    /// Removes every element, keeping the branch factor
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Checks that every node is `>=` each of its children
    pub fn is_heap(&self) -> bool {
        (1..self.storage.len())
            .all(|i| self.storage[self.parent(i)] >= self.storage[i])
    }

    /// Drains the heap into a vector in non-increasing order
    pub fn into_sorted_vec(mut self) -> Vec<i32> {
        let mut sorted = Vec::with_capacity(self.storage.len());
        while let Ok(value) = self.pop_max() {
            sorted.push(value);
        }
        sorted
    }

    fn parent(&self, index: usize) -> usize {
        (index - 1) / self.branch_factor
    }

    /// Indices of the children of `index` that exist in a heap of `len`
    /// elements, or `None` for a leaf
    fn children(&self, index: usize, len: usize) -> Option<Range<usize>> {
        // An overflowing first child can never be a valid index.
        let first = index.checked_mul(self.branch_factor)?.checked_add(1)?;
        if first >= len {
            return None;
        }
        Some(first..first.saturating_add(self.branch_factor).min(len))
    }

    /// Move element at index up while it is strictly greater than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = self.parent(index);
            if self.storage[index] > self.storage[parent] {
                self.storage.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        trace!("sift_up settled {} at index {}", self.storage[index], index);
    }

    /// Move element at index down while some child is strictly greater
    ///
    /// The largest child wins; among equal children the leftmost one does,
    /// and the node itself beats children equal to it.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.storage.len();
        while let Some(children) = self.children(index, len) {
            let mut largest = index;
            for child in children {
                if self.storage[child] > self.storage[largest] {
                    largest = child;
                }
            }

            if largest == index {
                break;
            }
            self.storage.swap(index, largest);
            index = largest;
        }
        trace!("sift_down settled {} at index {}", self.storage[index], index);
    }
}

/// Validates `x` and computes `2^x`
fn branch_factor_for(x: i32) -> Result<(u32, usize), HeapError> {
    let exponent = u32::try_from(x).map_err(|_| {
        debug!("rejecting negative branch factor exponent {}", x);
        HeapError::InvalidArgument
    })?;
    let branch_factor = 1usize.checked_shl(exponent).ok_or_else(|| {
        debug!(
            "rejecting exponent {}: 2^{} does not fit in usize",
            exponent, exponent
        );
        HeapError::InvalidArgument
    })?;
    Ok((exponent, branch_factor))
}

impl MaxHeap for PowerOfTwoMaxHeap {
    fn is_empty(&self) -> bool {
        PowerOfTwoMaxHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        PowerOfTwoMaxHeap::len(self)
    }

    fn push(&mut self, value: i32) {
        self.insert(value);
    }

    fn peek(&self) -> Option<i32> {
        PowerOfTwoMaxHeap::peek(self)
    }

    fn pop_max(&mut self) -> Result<i32, HeapError> {
        PowerOfTwoMaxHeap::pop_max(self)
    }
}

impl Default for PowerOfTwoMaxHeap {
    /// A binary heap (`x = 1`)
    fn default() -> Self {
        Self {
            storage: Vec::new(),
            branch_factor: 2,
            exponent: 1,
        }
    }
}

impl Extend<i32> for PowerOfTwoMaxHeap {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.storage.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}
