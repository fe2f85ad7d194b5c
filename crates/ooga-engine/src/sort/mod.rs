//! Scratch-buffer sorts for fixed-size records.
//!
//! Both sorts are stable and take a caller-provided scratch slice of the same
//! length as the input, so a caller that sorts every frame can keep one
//! scratch buffer alive and never allocate here.

mod merge;
mod radix;

pub use merge::merge_sort_by;
pub use radix::{key_bits_for_range, radix_sort, radix_sort_by_key, MAX_Z, Z_SORT_BITS};
