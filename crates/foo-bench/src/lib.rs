//! Benchmark registry and runner for the foo integer helpers.
//!
//! A [`Registry`] owns named [`BenchCase`]s. Each case is a zero-argument
//! timed body that runs once per iteration while an
//! [`IterationController`] says more iterations remain.
//!
//! Two drivers exist:
//!
//! - [`Registry::bench_all`] hands every case to Criterion, which calibrates
//!   iteration counts and reports statistics (used by `benches/foo_ops.rs`).
//! - [`Registry::run`] executes every case a fixed number of times with
//!   [`FixedIterations`] and returns a [`CaseReport`] per case.
//!
//! Bodies route their work through the [`barrier`] helpers so the optimizer
//! cannot drop calls whose results are otherwise unused.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod barrier;
pub mod case;
pub mod cases;
pub mod config;
pub mod controller;
pub mod error;
pub mod registry;
pub mod report;

pub use case::BenchCase;
pub use config::RunConfig;
pub use controller::{drive, FixedIterations, IterationController};
pub use error::RegistryError;
pub use registry::Registry;
pub use report::CaseReport;
