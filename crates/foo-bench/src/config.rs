//! Fixed-count run configuration.

/// Parameters for [`Registry::run`](crate::Registry::run).
///
/// Only the fixed-count runner reads this. Criterion runs are configured
/// through Criterion's own command-line flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Iterations in the measured round (and in each warm-up round).
    ///
    /// Default: 1000. Zero is valid and yields an empty report.
    pub iterations: u64,

    /// Unmeasured rounds executed before the measured one.
    ///
    /// Default: 0. Warm-up rounds never change the reported iteration count.
    pub warm_up_rounds: u32,

    /// Only cases whose name contains this substring run.
    pub filter: Option<String>,
}

impl RunConfig {
    /// Default iterations per round.
    pub const DEFAULT_ITERATIONS: u64 = 1000;

    /// Default number of warm-up rounds.
    pub const DEFAULT_WARM_UP_ROUNDS: u32 = 0;

    /// Create a config running `iterations` per round with defaults
    /// everywhere else.
    pub fn new(iterations: u64) -> Self {
        Self {
            iterations,
            warm_up_rounds: Self::DEFAULT_WARM_UP_ROUNDS,
            filter: None,
        }
    }

    /// Set the number of warm-up rounds.
    pub fn with_warm_up_rounds(mut self, rounds: u32) -> Self {
        self.warm_up_rounds = rounds;
        self
    }

    /// Restrict the run to cases whose name contains `filter`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Whether the case called `name` passes the filter.
    pub fn selects(&self, name: &str) -> bool {
        self.filter.as_deref().is_none_or(|f| name.contains(f))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITERATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RunConfig::default();
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.warm_up_rounds, 0);
        assert!(config.filter.is_none());
    }

    #[test]
    fn no_filter_selects_everything() {
        assert!(RunConfig::new(1).selects("anything"));
    }

    #[test]
    fn filter_matches_substring() {
        let config = RunConfig::new(1).with_filter("two");
        assert!(config.selects("add_two"));
        assert!(config.selects("sub_two"));
        assert!(!config.selects("vector_push_back"));
    }
}
