//! Iteration control.
//!
//! A controller decides how many times a timed body runs. Under
//! `cargo bench` Criterion's `Bencher` fills this role and calibrates the
//! count itself; [`FixedIterations`] is the deterministic in-crate variant.

/// Signals whether another iteration of a timed body should run.
pub trait IterationController {
    /// Returns `true` and records one iteration if the budget allows it.
    fn next_iteration(&mut self) -> bool;

    /// Iterations granted so far.
    fn completed(&self) -> u64;
}

/// Grants exactly `target` iterations, then stops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedIterations {
    target: u64,
    completed: u64,
}

impl FixedIterations {
    /// Create a controller with a budget of `target` iterations.
    pub fn new(target: u64) -> Self {
        Self {
            target,
            completed: 0,
        }
    }
}

impl IterationController for FixedIterations {
    fn next_iteration(&mut self) -> bool {
        if self.completed < self.target {
            self.completed += 1;
            true
        } else {
            false
        }
    }

    fn completed(&self) -> u64 {
        self.completed
    }
}

/// Run `body` while `controller` grants iterations.
#[inline]
pub fn drive<C, F>(controller: &mut C, mut body: F)
where
    C: IterationController + ?Sized,
    F: FnMut(),
{
    while controller.next_iteration() {
        body();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_grants_exact_budget() {
        let mut ctl = FixedIterations::new(3);
        let mut runs = 0;
        drive(&mut ctl, || runs += 1);

        assert_eq!(runs, 3);
        assert_eq!(ctl.completed(), 3);
        assert!(!ctl.next_iteration());
    }

    #[test]
    fn zero_budget_never_runs_body() {
        let mut ctl = FixedIterations::new(0);
        let mut runs = 0;
        drive(&mut ctl, || runs += 1);

        assert_eq!(runs, 0);
        assert_eq!(ctl.completed(), 0);
    }

    #[test]
    fn drive_accepts_trait_objects() {
        let mut ctl = FixedIterations::new(5);
        let dyn_ctl: &mut dyn IterationController = &mut ctl;
        let mut runs = 0;
        drive(dyn_ctl, || runs += 1);
        assert_eq!(runs, 5);
    }
}
