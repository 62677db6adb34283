//! The standard case set: `add_two`, `sub_two` and `vector_push_back`.

use crate::barrier::{clobber, escape, observe};
use crate::case::BenchCase;

/// Case name for the addition benchmark.
pub const ADD_TWO: &str = "add_two";
/// Case name for the subtraction benchmark.
pub const SUB_TWO: &str = "sub_two";
/// Case name for the vector append benchmark.
pub const VECTOR_PUSH_BACK: &str = "vector_push_back";

/// Operands passed to the addition op on every iteration.
pub const ADD_TWO_OPERANDS: (i32, i32) = (1, 2);
/// Operands passed to the subtraction op on every iteration.
pub const SUB_TWO_OPERANDS: (i32, i32) = (2, 1);

/// Capacity reserved before the append.
pub const RESERVED_CAPACITY: usize = 1;
/// Value appended by [`vector_push_back`].
pub const PUSHED_VALUE: i32 = 42;

/// Build the `add_two` case around `op`.
pub fn add_two_case<F>(op: F) -> BenchCase
where
    F: FnMut(i32, i32) -> i32 + 'static,
{
    binary_op_case(ADD_TWO, op, ADD_TWO_OPERANDS)
}

/// Build the `sub_two` case around `op`.
pub fn sub_two_case<F>(op: F) -> BenchCase
where
    F: FnMut(i32, i32) -> i32 + 'static,
{
    binary_op_case(SUB_TWO, op, SUB_TWO_OPERANDS)
}

fn binary_op_case<F>(name: &str, mut op: F, (a, b): (i32, i32)) -> BenchCase
where
    F: FnMut(i32, i32) -> i32 + 'static,
{
    BenchCase::new(name, move || {
        observe(op(observe(a), observe(b)));
    })
}

/// Build the `vector_push_back` case.
///
/// Every iteration allocates, appends and drops its own vector.
pub fn vector_push_back_case() -> BenchCase {
    BenchCase::new(VECTOR_PUSH_BACK, || drop(vector_push_back()))
}

/// One iteration of the `vector_push_back` body.
///
/// Combines [`reserved_vector`] and [`push_reserved`]. The vector is
/// returned so callers can inspect it; the benchmark body drops it
/// immediately.
#[inline]
pub fn vector_push_back() -> Vec<i32> {
    let mut v = reserved_vector();
    push_reserved(&mut v);
    v
}

/// Fresh empty vector with exactly [`RESERVED_CAPACITY`] slots allocated.
///
/// Uses `reserve_exact`: plain `reserve` rounds small requests up to
/// several elements, which would measure a larger allocation.
#[inline]
pub fn reserved_vector() -> Vec<i32> {
    let mut v: Vec<i32> = Vec::new();
    v.reserve_exact(RESERVED_CAPACITY);
    v
}

/// Publish the backing storage of `v` to the optimizer, append
/// [`PUSHED_VALUE`] and clobber memory.
///
/// `v` must have spare capacity so the append never reallocates.
#[inline]
pub fn push_reserved(v: &mut Vec<i32>) {
    escape(v.as_ptr());
    v.push(PUSHED_VALUE);
    clobber();
}
