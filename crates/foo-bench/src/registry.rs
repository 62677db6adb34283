//! Case registry and its two drivers: Criterion and fixed-count.

use std::time::Instant;

use criterion::measurement::Measurement;
use criterion::{Criterion, Throughput};
use tracing::{debug, info};

use crate::case::BenchCase;
use crate::cases;
use crate::config::RunConfig;
use crate::controller::{drive, FixedIterations, IterationController};
use crate::error::RegistryError;
use crate::report::CaseReport;

/// Criterion group every registered case is reported under.
pub const GROUP_NAME: &str = "foo";

/// Ordered set of uniquely named benchmark cases.
///
/// Cases run in registration order, one at a time, on the calling thread.
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<BenchCase>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The three standard cases measured against [`foo_core::add_two`] and
    /// [`foo_core::sub_two`].
    pub fn standard() -> Self {
        Self::with_ops(foo_core::add_two, foo_core::sub_two)
    }

    /// The three standard cases, with the arithmetic cases calling `add`
    /// and `sub` instead of the real functions.
    pub fn with_ops<A, S>(add: A, sub: S) -> Self
    where
        A: FnMut(i32, i32) -> i32 + 'static,
        S: FnMut(i32, i32) -> i32 + 'static,
    {
        Self {
            cases: vec![
                cases::add_two_case(add),
                cases::sub_two_case(sub),
                cases::vector_push_back_case(),
            ],
        }
    }

    /// Add a case. Names must be non-empty and unique.
    pub fn register(&mut self, case: BenchCase) -> Result<(), RegistryError> {
        if case.name().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.position(case.name()).is_some() {
            return Err(RegistryError::DuplicateName {
                name: case.name().to_owned(),
            });
        }
        debug!(case = case.name(), "registered benchmark case");
        self.cases.push(case);
        Ok(())
    }

    /// Names of all cases, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(BenchCase::name)
    }

    /// Number of registered cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether no cases are registered.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.cases.iter().position(|c| c.name() == name)
    }

    /// Register every case with Criterion under [`GROUP_NAME`].
    ///
    /// Criterion's `Bencher` controls the iteration count and applies its
    /// own command-line filter. Each iteration counts as one element, so
    /// reports include throughput next to time per iteration.
    pub fn bench_all<M: Measurement + 'static>(&mut self, c: &mut Criterion<M>) {
        let mut group = c.benchmark_group(GROUP_NAME);
        group.throughput(Throughput::Elements(1));
        for case in &mut self.cases {
            let name = case.name().to_owned();
            group.bench_function(name, |b| b.iter(|| case.run_once()));
        }
        group.finish();
    }

    /// Run every case selected by `config` for a fixed iteration count.
    ///
    /// Returns one report per selected case, in registration order.
    pub fn run(&mut self, config: &RunConfig) -> Vec<CaseReport> {
        self.cases
            .iter_mut()
            .filter(|case| config.selects(case.name()))
            .map(|case| measure(case, config))
            .collect()
    }

    /// Run the case called `name`, ignoring the config's filter.
    pub fn run_case(
        &mut self,
        name: &str,
        config: &RunConfig,
    ) -> Result<CaseReport, RegistryError> {
        let idx = self
            .position(name)
            .ok_or_else(|| RegistryError::UnknownCase {
                name: name.to_owned(),
            })?;
        Ok(measure(&mut self.cases[idx], config))
    }
}

fn measure(case: &mut BenchCase, config: &RunConfig) -> CaseReport {
    debug!(
        case = case.name(),
        iterations = config.iterations,
        warm_up_rounds = config.warm_up_rounds,
        "running benchmark case"
    );

    for _ in 0..config.warm_up_rounds {
        drive(&mut FixedIterations::new(config.iterations), || case.run_once());
    }

    let mut controller = FixedIterations::new(config.iterations);
    let start = Instant::now();
    drive(&mut controller, || case.run_once());
    let elapsed = start.elapsed();

    let report = CaseReport {
        name: case.name().to_owned(),
        iterations: controller.completed(),
        elapsed,
    };
    info!(
        case = %report.name,
        iterations = report.iterations,
        elapsed_ns = u64::try_from(report.elapsed.as_nanos()).unwrap_or(u64::MAX),
        "benchmark case finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::{ADD_TWO, SUB_TWO, VECTOR_PUSH_BACK};
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_case(name: &str) -> (BenchCase, Rc<Cell<u64>>) {
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        (BenchCase::new(name, move || seen.set(seen.get() + 1)), hits)
    }

    #[test]
    fn standard_registers_three_cases_in_order() {
        let registry = Registry::standard();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, [ADD_TWO, SUB_TWO, VECTOR_PUSH_BACK]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn new_registry_is_empty() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.run(&RunConfig::default()).is_empty());
    }

    #[test]
    fn rejects_empty_name() {
        let mut registry = Registry::new();
        let err = registry.register(BenchCase::new("", || {})).unwrap_err();
        assert_eq!(err, RegistryError::EmptyName);
    }

    #[test]
    fn rejects_duplicate_name() {
        let mut registry = Registry::standard();
        let err = registry
            .register(BenchCase::new(ADD_TWO, || {}))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateName {
                name: ADD_TWO.into()
            }
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn run_case_counts_iterations() {
        let (case, hits) = counting_case("tick");
        let mut registry = Registry::new();
        registry.register(case).unwrap();

        let report = registry.run_case("tick", &RunConfig::new(17)).unwrap();
        assert_eq!(report.iterations, 17);
        assert_eq!(hits.get(), 17);
    }

    #[test]
    fn run_case_unknown_name() {
        let mut registry = Registry::new();
        let err = registry
            .run_case("missing", &RunConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownCase {
                name: "missing".into()
            }
        );
    }

    #[test]
    fn run_honours_filter() {
        let (a, a_hits) = counting_case("alpha");
        let (b, b_hits) = counting_case("beta");
        let mut registry = Registry::new();
        registry.register(a).unwrap();
        registry.register(b).unwrap();

        let reports = registry.run(&RunConfig::new(5).with_filter("bet"));
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].name, "beta");
        assert_eq!(a_hits.get(), 0);
        assert_eq!(b_hits.get(), 5);
    }

    #[test]
    fn warm_up_rounds_do_not_change_report() {
        let (case, hits) = counting_case("tick");
        let mut registry = Registry::new();
        registry.register(case).unwrap();

        let config = RunConfig::new(10).with_warm_up_rounds(2);
        let report = registry.run_case("tick", &config).unwrap();
        assert_eq!(report.iterations, 10);
        assert_eq!(hits.get(), 30);
    }
}
