//! # heapsort-kit
//!
//! `heapsort-kit` is a small collection of in-place, comparator-driven sorting algorithms
//! built around an instrumented binary max-heap engine.
//!
//! Every routine sorts any `&mut [T]` through one three-way [`Comparator`] and reports
//! how much work it did as [`SortStats`] (comparator calls and element swaps), which
//! makes the algorithms directly comparable on the same input.
//!
//! ## Key Features
//!
//! - **Six strategies**: bubble, insertion, selection, merge, heap, and the standard
//!   library's quicksort, selected through [`Algorithm`].
//! - **Heap engine**: the [`heap`] module exposes the implicit-tree index functions,
//!   the max-heap predicate, sift-down, bottom-up heap construction and heap sort
//!   as separate operations.
//! - **Uniform instrumentation**: comparisons and swaps are counted the same way for
//!   every algorithm and returned per call. There is no global state.
//! - **Fallible scratch space**: merge sort reserves its buffer up front and reports
//!   [`SortError::ScratchAlloc`] instead of aborting, leaving the input untouched.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use heapsort_kit::{Algorithm, sort};
//!
//! let mut data = vec![11, 9, 18, 15, 7, 5, 3, 22, 4];
//! let stats = sort(&mut data, Algorithm::Heap).unwrap();
//!
//! assert_eq!(data, vec![3, 4, 5, 7, 9, 11, 15, 18, 22]);
//! assert!(stats.comparisons > 0);
//! ```
//!
//! ### Custom Comparators
//!
//! Any `FnMut(&T, &T) -> Ordering` is a comparator.
//!
//! ```rust
//! use heapsort_kit::{Algorithm, sort_by};
//!
//! let mut words = vec!["ccc", "a", "bb"];
//! sort_by(&mut words, Algorithm::Merge, |a: &&str, b: &&str| b.len().cmp(&a.len())).unwrap();
//!
//! assert_eq!(words, vec!["ccc", "bb", "a"]);
//! ```
//!
//! ### Fixed-Width Lines
//!
//! ```rust
//! use heapsort_kit::line::{Line, compare_lines};
//! use heapsort_kit::{SortRequest, sort_by};
//!
//! let request: SortRequest = "bq".parse().unwrap();
//! let mut lines: Vec<Line> = ["pear\n", "apple\n", "fig\n"].into_iter().map(Line::from).collect();
//!
//! let stats = sort_by(&mut lines, request.algorithm, |a: &Line, b: &Line| {
//!     compare_lines(a.as_bytes(), b.as_bytes())
//! })
//! .unwrap();
//!
//! assert_eq!(lines[0].as_bytes(), b"apple\n");
//! assert!(request.quiet);
//! println!("{stats}");
//! ```
//!
//! ## Complexity
//!
//! | Algorithm | Time | Extra space | Stable |
//! |---|---|---|---|
//! | bubble, insertion, selection | O(N²) | O(1) | bubble, insertion |
//! | merge | O(N log N) | O(N) | yes |
//! | heap | O(N log N) | O(1) | no |
//! | quick | O(N log N) | O(log N) | no |

pub mod algo;
pub mod core;
pub mod heap;
pub mod line;
pub use algo::{Algorithm, SortRequest, sort, sort_by};
pub use core::{Comparator, SortError, SortStats};

pub mod prelude {
    pub use crate::algo::{Algorithm, SortRequest, sort, sort_by};
    pub use crate::core::{Comparator, SortError, SortStats};
    pub use crate::heap::{build_max_heap, heap_sort, is_max_heap, max_heapify};
    pub use crate::line::{Line, compare_lines};
}
