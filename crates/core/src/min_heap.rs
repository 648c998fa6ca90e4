//! Binary min-heap ordered by a caller-supplied comparator.
//!
//! `std::collections::BinaryHeap` orders by the element's own `Ord`, which
//! leaves no room for a pluggable tie-break. This heap takes the ordering as
//! a closure instead, so the tree builder can consult a [`TieBreakPolicy`]
//! without wrapping every node in a newtype.
//!
//! Layout is the usual implicit tree over a `Vec`: the children of slot `i`
//! live at `2i + 1` and `2i + 2`.
//!
//! [`TieBreakPolicy`]: crate::tie_break::TieBreakPolicy

use std::cmp::Ordering;

/// A min-heap whose order is defined by `cmp`.
///
/// # Invariants
/// - for every slot `i > 0`, `cmp(elements[parent(i)], elements[i]) != Greater`
#[derive(Debug, Clone)]
pub struct MinHeap<T, F> {
    elements: Vec<T>,
    cmp: F,
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Create an empty heap.
    pub fn new(cmp: F) -> Self {
        Self {
            elements: Vec::new(),
            cmp,
        }
    }

    /// Build a heap from an arbitrary vector in O(n).
    pub fn build(source: Vec<T>, cmp: F) -> Self {
        let mut heap = Self {
            elements: source,
            cmp,
        };
        let n = heap.elements.len();
        for i in (0..n / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Number of elements in the heap.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The smallest element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Insert an element in O(log n).
    pub fn push(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Remove and return the smallest element in O(log n).
    pub fn pop(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.pop();
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        min
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.cmp)(&self.elements[a], &self.elements[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.elements.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.elements.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            if left < n && self.less(left, smallest) {
                smallest = left;
            }
            if right < n && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == i {
                return;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.elements.len()).all(|i| !self.less(i, (i - 1) / 2))
    }
}
