//! Configuration for benchmark runs.

use crate::constants::MAX_WINDOW;
use crate::error::Error;

/// Options controlling calibration, convergence, and reporting.
///
/// A `Config` is a plain value: build one (or take [`Config::default`]),
/// hand it to [`Benchmark::with_config`](crate::Benchmark::with_config), and
/// it is read-only for the duration of that run. There is no process-wide
/// mutable instance; `Config::default()` returns a fresh value every time.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Calibration budget in milliseconds (default: 500).
    ///
    /// The calibration pass invokes the function for roughly this long to
    /// pick a batch size, and doubles as warm-up.
    pub initial_batch_time_ms: u64,

    /// Relative-error percentage below which a run converges (default: 1.0).
    pub error_threshold_percent: f64,

    /// Trailing batches used for the statistics window (default: 10).
    ///
    /// Must not exceed [`MAX_WINDOW`]; the stored t-distribution table is
    /// the hard ceiling.
    pub window_size: usize,

    /// Hard wall-clock ceiling per benchmarked function, in milliseconds
    /// (default: 5000).
    ///
    /// A run that has not converged by then stops after its current batch
    /// and its final statistics carry the `exceeded_max_time` flag.
    pub max_time_ms: u64,

    /// Emit a diagnostic line per batch on stderr (default: off).
    pub verbose: bool,

    /// Optional hook invoked before each batch to quiesce background work.
    ///
    /// Intended for embedders whose runtime defers cleanup that would
    /// otherwise land inside a timed batch. Rust has no such deferred work,
    /// so the default is `None`; the convergence loop does not depend on the
    /// hook existing.
    pub quiesce: Option<fn()>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_batch_time_ms: 500,
            error_threshold_percent: 1.0,
            window_size: 10,
            max_time_ms: 5000,
            verbose: false,
            quiesce: None,
        }
    }
}

impl Config {
    /// Check that the configuration can drive a run.
    ///
    /// Called at the top of every run, before any measurement starts.
    pub fn validate(&self) -> Result<(), Error> {
        if self.window_size == 0 {
            return Err(Error::InvalidWindow);
        }
        if self.window_size > MAX_WINDOW {
            return Err(Error::WindowTooLarge {
                requested: self.window_size,
            });
        }
        if self.initial_batch_time_ms == 0 {
            return Err(Error::InvalidBatchTime);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.initial_batch_time_ms, 500);
        assert_eq!(config.error_threshold_percent, 1.0);
        assert_eq!(config.window_size, 10);
        assert_eq!(config.max_time_ms, 5000);
        assert!(!config.verbose);
        assert!(config.quiesce.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn window_at_ceiling_is_accepted() {
        let config = Config {
            window_size: MAX_WINDOW,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn window_above_ceiling_is_rejected() {
        let config = Config {
            window_size: MAX_WINDOW + 1,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::WindowTooLarge {
                requested: MAX_WINDOW + 1
            })
        );
    }

    #[test]
    fn degenerate_values_are_rejected() {
        let zero_window = Config {
            window_size: 0,
            ..Config::default()
        };
        assert_eq!(zero_window.validate(), Err(Error::InvalidWindow));

        let zero_budget = Config {
            initial_batch_time_ms: 0,
            ..Config::default()
        };
        assert_eq!(zero_budget.validate(), Err(Error::InvalidBatchTime));
    }
}
