//! Binary max-heap engine over an implicit tree embedded in a slice.
//!
//! Node `i` has children `left(i)` and `right(i)` and parent `parent(i)`. A slice is
//! a max-heap when no node compares `Less` than either of its children.
//!
//! The engine is built from two pieces:
//! - **Sift-down** ([`max_heapify`]): restores the invariant at one node whose
//!   subtrees are already heaps.
//! - **Bottom-up build** ([`build_max_heap`]): sifts every internal node from the
//!   last parent back to the root, which satisfies the sift-down precondition at
//!   every step.
//!
//! [`heap_sort`] combines them. Every exchange and comparison goes through the same
//! instrumentation as the other algorithms in [`crate::algo`].

use crate::core::{Comparator, SortStats, Tracker};
use std::cmp::Ordering;

/// Index of the parent of `idx`. The root is its own parent.
#[inline(always)]
pub const fn parent(idx: usize) -> usize {
    if idx > 0 { (idx - 1) >> 1 } else { 0 }
}

/// Index of the left child of `idx`. May be past the end of the heap.
#[inline(always)]
pub const fn left(idx: usize) -> usize {
    (idx << 1) + 1
}

/// Index of the right child of `idx`. May be past the end of the heap.
#[inline(always)]
pub const fn right(idx: usize) -> usize {
    (idx << 1) + 2
}

/// Returns `true` if `heap` satisfies the max-heap invariant.
///
/// Empty and single-element slices are always heaps.
///
/// # Examples
///
/// ```
/// use heapsort_kit::heap::is_max_heap;
///
/// let heap = [15, 11, 10, 8, 7, 9];
/// assert!(is_max_heap(&heap, i32::cmp));
/// assert!(!is_max_heap(&heap[3..], i32::cmp));
/// ```
pub fn is_max_heap<T, C: Comparator<T>>(heap: &[T], mut cmp: C) -> bool {
    let len = heap.len();

    // check while at least a left child exists
    let mut i = 0;
    while left(i) < len {
        if cmp.compare(&heap[i], &heap[left(i)]) == Ordering::Less {
            return false;
        }
        if right(i) < len && cmp.compare(&heap[i], &heap[right(i)]) == Ordering::Less {
            return false;
        }
        i += 1;
    }
    true
}

/// Recursive form of [`is_max_heap`], checking each subtree from the root down.
pub fn is_max_heap_recursive<T, C: Comparator<T>>(heap: &[T], mut cmp: C) -> bool {
    subtree_is_max_heap(heap, 0, &mut cmp)
}

fn subtree_is_max_heap<T, C: Comparator<T>>(heap: &[T], idx: usize, cmp: &mut C) -> bool {
    let len = heap.len();
    if idx >= len {
        return true;
    }

    [left(idx), right(idx)].into_iter().all(|child| {
        child >= len
            || (cmp.compare(&heap[idx], &heap[child]) != Ordering::Less
                && subtree_is_max_heap(heap, child, cmp))
    })
}

/// Sifts the element at `idx` down until the subtree rooted there is a max-heap.
///
/// The subtrees rooted at `left(idx)` and `right(idx)` must already be max-heaps.
/// `idx` past the end of `heap` is a no-op. To operate on a heap prefix, pass the
/// prefix slice.
///
/// # Examples
///
/// ```
/// use heapsort_kit::heap::max_heapify;
///
/// let mut data = [11, 15, 18, 16, 7, 5];
/// max_heapify(&mut data, 0, i32::cmp);
/// assert_eq!(data, [18, 15, 11, 16, 7, 5]);
/// ```
pub fn max_heapify<T, C: Comparator<T>>(heap: &mut [T], idx: usize, cmp: C) -> SortStats {
    let mut tracker = Tracker::new(cmp);
    sift_down(heap, idx, &mut tracker);
    tracker.stats()
}

/// Recursive form of [`max_heapify`] with identical results and counts.
pub fn max_heapify_recursive<T, C: Comparator<T>>(
    heap: &mut [T],
    idx: usize,
    cmp: C,
) -> SortStats {
    let mut tracker = Tracker::new(cmp);
    sift_down_recursive(heap, idx, &mut tracker);
    tracker.stats()
}

/// Rearranges `heap` into a max-heap in O(n).
pub fn build_max_heap<T, C: Comparator<T>>(heap: &mut [T], cmp: C) -> SortStats {
    let mut tracker = Tracker::new(cmp);
    build(heap, &mut tracker);
    tracker.stats()
}

/// Sorts `data` in ascending order using a max-heap.
///
/// In-place, O(n log n), not stable.
///
/// # Examples
///
/// ```
/// use heapsort_kit::heap::heap_sort;
///
/// let mut data = [11, 9, 18, 15, 7, 5, 3, 22, 4];
/// heap_sort(&mut data, i32::cmp);
/// assert_eq!(data, [3, 4, 5, 7, 9, 11, 15, 18, 22]);
/// ```
pub fn heap_sort<T, C: Comparator<T>>(data: &mut [T], cmp: C) -> SortStats {
    let mut tracker = Tracker::new(cmp);
    sort_with(data, &mut tracker);
    tracker.stats()
}

pub(crate) fn sort_with<T, C: Comparator<T>>(data: &mut [T], tracker: &mut Tracker<C>) {
    let len = data.len();
    if len == 0 {
        return;
    }

    build(data, tracker);

    // Move the current maximum behind the shrinking heap prefix.
    for end in (1..len).rev() {
        tracker.swap(data, 0, end);
        sift_down(&mut data[..end], 0, tracker);
    }
}

fn build<T, C: Comparator<T>>(heap: &mut [T], tracker: &mut Tracker<C>) {
    let len = heap.len();
    if len == 0 {
        return;
    }

    tracing::trace!(len, last_parent = parent(len - 1), "building max-heap");

    for idx in (0..=parent(len - 1)).rev() {
        sift_down(heap, idx, tracker);
    }
}

fn sift_down<T, C: Comparator<T>>(heap: &mut [T], idx: usize, tracker: &mut Tracker<C>) {
    let len = heap.len();
    if idx >= len {
        return;
    }

    let mut i = idx;
    while left(i) < len {
        let largest = largest_of_family(heap, i, tracker);
        if largest == i {
            return;
        }
        tracker.swap(heap, i, largest);
        i = largest;
    }
}

fn sift_down_recursive<T, C: Comparator<T>>(
    heap: &mut [T],
    idx: usize,
    tracker: &mut Tracker<C>,
) {
    if idx >= heap.len() || left(idx) >= heap.len() {
        return;
    }

    let largest = largest_of_family(heap, idx, tracker);
    if largest != idx {
        tracker.swap(heap, idx, largest);
        sift_down_recursive(heap, largest, tracker);
    }
}

/// Picks the largest of `i` and its existing children. Ties keep the parent,
/// then the left child. The caller guarantees the left child exists.
#[inline(always)]
fn largest_of_family<T, C: Comparator<T>>(
    heap: &[T],
    i: usize,
    tracker: &mut Tracker<C>,
) -> usize {
    let mut largest = i;
    if tracker.compare_at(heap, i, left(i)) == Ordering::Less {
        largest = left(i);
    }
    if right(i) < heap.len() && tracker.compare_at(heap, largest, right(i)) == Ordering::Less {
        largest = right(i);
    }
    largest
}
