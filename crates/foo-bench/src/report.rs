//! Per-case results of a fixed-count run.

use std::fmt;
use std::time::Duration;

/// Timing for one case's measured round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseReport {
    /// Name of the case that ran.
    pub name: String,
    /// Iterations executed in the measured round.
    pub iterations: u64,
    /// Wall-clock time of the measured round.
    pub elapsed: Duration,
}

impl CaseReport {
    /// Mean wall-clock time per iteration, or `None` if nothing ran.
    pub fn per_iteration(&self) -> Option<Duration> {
        if self.iterations == 0 {
            return None;
        }
        let nanos = self.elapsed.as_nanos() / u128::from(self.iterations);
        Some(Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX)))
    }

    /// Iterations per second, or `None` if nothing ran or no time elapsed.
    pub fn throughput(&self) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();
        if self.iterations == 0 || secs == 0.0 {
            return None;
        }
        Some(self.iterations as f64 / secs)
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<24} {:>12} iters", self.name, self.iterations)?;
        match self.per_iteration() {
            Some(t) => write!(f, " {:>12} ns/iter", t.as_nanos())?,
            None => write!(f, " {:>12} ns/iter", "-")?,
        }
        match self.throughput() {
            Some(ops) => write!(f, " {ops:>16.0} ops/s"),
            None => write!(f, " {:>16} ops/s", "-"),
        }
    }
}
