//! Optimization barriers for timed bodies.
//!
//! None of these perform I/O. They only force the compiler to treat values
//! as used and memory as modified, so benchmarked work stays inside the
//! timed region.

use std::hint::black_box;
use std::sync::atomic::{compiler_fence, Ordering};

/// Marks `value` as externally observed and hands it back.
///
/// Wrap both operands and results of pure calls: opaque operands stop
/// constant folding, an opaque result stops dead-code elimination.
#[inline(always)]
pub fn observe<T>(value: T) -> T {
    black_box(value)
}

/// Marks the memory behind `ptr` as reachable from outside the optimizer's
/// view, so writes through it cannot be proven dead.
#[inline(always)]
pub fn escape<T>(ptr: *const T) {
    black_box(ptr);
}

/// Full compiler-level memory clobber.
///
/// Pending writes may not be sunk past this point and later reads may not
/// be hoisted above it. Emits no instruction.
#[inline(always)]
pub fn clobber() {
    compiler_fence(Ordering::SeqCst);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_is_identity() {
        assert_eq!(observe(7), 7);
        assert_eq!(observe("foo"), "foo");
    }

    #[test]
    fn escape_and_clobber_leave_memory_untouched() {
        let mut v = vec![1, 2, 3];
        escape(v.as_ptr());
        v.push(4);
        clobber();
        assert_eq!(v, [1, 2, 3, 4]);
    }
}
