//! Error types surfaced by the benchmark engine.
//!
//! Every variant is synchronous and unrecovered: configuration problems are
//! rejected before any measurement starts, and calibration faults abort the
//! offending run. Panics raised by a benchmarked closure are deliberately
//! not caught; correctness of the code under test is the caller's problem.

use thiserror::Error;

/// Errors returned by configuration validation and benchmark runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The statistics window exceeds the stored t-distribution table.
    ///
    /// The table's highest indexable sample count,
    /// [`MAX_WINDOW`](crate::MAX_WINDOW), is the hard ceiling on window size.
    #[error("window size {requested} exceeds the stored t-distribution critical values")]
    WindowTooLarge {
        /// The window size that was requested.
        requested: usize,
    },

    /// A zero-length statistics window cannot produce a mean.
    #[error("window size must be at least 1")]
    InvalidWindow,

    /// A zero calibration budget cannot size a batch.
    #[error("initial batch time must be at least 1 ms")]
    InvalidBatchTime,

    /// `run` was called before any function was registered.
    #[error("no functions registered; call add() or add_named() before run()")]
    NoBenchmarks,

    /// Calibration finished without completing a single invocation.
    ///
    /// Happens when one call to the function under test outlasts the whole
    /// calibration budget on a coarse timer. Guarded here so a zero batch
    /// size never reaches the operations-per-second division.
    #[error("calibration within {budget_ms} ms produced a batch size of zero")]
    ZeroBatchSize {
        /// The calibration budget that was exhausted.
        budget_ms: u64,
    },
}
