//! Integer helpers measured by the foo benchmark suite.
//!
//! Both functions are pure and total: they wrap on overflow instead of
//! panicking, so a benchmark body calling them can never fail.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Signature shared by [`add_two`] and [`sub_two`].
pub type BinaryOp = fn(i32, i32) -> i32;

/// Returns `a + b`, wrapping at the `i32` boundary.
#[inline]
pub fn add_two(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Returns `a - b`, wrapping at the `i32` boundary.
#[inline]
pub fn sub_two(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}
