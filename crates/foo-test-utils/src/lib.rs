//! Counting stubs for testing the foo benchmark harness.
//!
//! - [`CallCounter`] — shared hit counter for arbitrary timed bodies.
//! - [`CountingOp`] — wraps a binary op, counting calls and recording the
//!   operands of the most recent one.
//!
//! Counters use atomics so fixtures stay `Send + Sync`, like the rest of
//! the workspace's test doubles.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use foo_core::BinaryOp;

/// Cheap, cloneable hit counter. Clones share the same count.
#[derive(Clone, Debug, Default)]
pub struct CallCounter {
    hits: Arc<AtomicU64>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one hit.
    pub fn hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Hits recorded so far.
    pub fn get(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Reset the count to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }

    /// Wrap `body` so every call records a hit before running it.
    pub fn wrap<F: FnMut()>(&self, mut body: F) -> impl FnMut() {
        let counter = self.clone();
        move || {
            counter.hit();
            body();
        }
    }
}

/// A binary op that counts its calls.
///
/// Hand [`CountingOp::as_fn`] to code under test, keep the `CountingOp`
/// for assertions.
#[derive(Clone, Debug)]
pub struct CountingOp {
    op: BinaryOp,
    calls: CallCounter,
    last: Arc<Mutex<Option<(i32, i32)>>>,
}

impl CountingOp {
    pub fn new(op: BinaryOp) -> Self {
        Self {
            op,
            calls: CallCounter::new(),
            last: Arc::new(Mutex::new(None)),
        }
    }

    /// Counting wrapper around [`foo_core::add_two`].
    pub fn add_two() -> Self {
        Self::new(foo_core::add_two)
    }

    /// Counting wrapper around [`foo_core::sub_two`].
    pub fn sub_two() -> Self {
        Self::new(foo_core::sub_two)
    }

    /// Closure that forwards to the wrapped op and records the call.
    pub fn as_fn(&self) -> impl FnMut(i32, i32) -> i32 + 'static {
        let this = self.clone();
        move |a, b| this.call(a, b)
    }

    /// Invoke the wrapped op and record the call.
    pub fn call(&self, a: i32, b: i32) -> i32 {
        self.calls.hit();
        *self.last.lock().unwrap_or_else(|e| e.into_inner()) = Some((a, b));
        (self.op)(a, b)
    }

    /// How many times the op has been called.
    pub fn calls(&self) -> u64 {
        self.calls.get()
    }

    /// Operands of the most recent call.
    pub fn last_operands(&self) -> Option<(i32, i32)> {
        *self.last.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Forget all recorded calls.
    pub fn reset(&self) {
        self.calls.reset();
        *self.last.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}
