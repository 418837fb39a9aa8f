//! Windowed running statistics over batch timings.
//!
//! After every batch the convergence loop hands the full tick history to
//! [`compute`], which derives a fresh [`RunStats`] from the trailing window.
//! Using a trailing window rather than the whole history lets the estimate
//! track post-warm-up steady state and adapt to environmental drift, while
//! the raw history stays available for reporting.
//!
//! The standard error of the mean is widened by a Student's-t critical value
//! so that confidence is honest when few samples are available, narrowing
//! automatically as the window fills.

use serde::{Deserialize, Serialize};

use crate::constants::{NANOS_PER_MILLI, T_TABLE};

/// Statistics snapshot derived after one accepted batch.
///
/// Created once per batch, never mutated afterwards. The snapshot appended
/// last to a result's run history is the authoritative final measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    /// Elapsed ticks (nanoseconds) of this batch.
    pub ticks: u64,

    /// Arithmetic mean of the window, in ticks.
    pub mean_ticks: f64,

    /// Population variance of the window (divisor = window length).
    pub variance: f64,

    /// Standard deviation, `variance.sqrt()`.
    pub std_dev: f64,

    /// Standard error of the mean, scaled by the t critical value.
    pub std_error_mean: f64,

    /// Relative error: standard error as a percentage of the mean, ≥ 0.
    pub error_percent: f64,

    /// Throughput computed from this batch's ticks (not the windowed mean).
    pub ops_per_second: f64,

    /// Set when this snapshot terminated the run by exceeding the ceiling.
    pub exceeded_max_time: bool,
}

/// Compute statistics over the trailing window of `history`.
///
/// `history` is the full list of batch timings collected so far, most recent
/// last; only the last `window_size` entries feed the estimate. The caller
/// guarantees `history` is non-empty, `batch_size > 0`, and `window_size`
/// is within the bounds checked by [`Config::validate`](crate::Config::validate).
pub fn compute(history: &[u64], window_size: usize, batch_size: u64) -> RunStats {
    let window = &history[history.len().saturating_sub(window_size)..];
    let ticks = *history.last().expect("statistics need at least one batch");

    let mean = window.iter().map(|&t| t as f64).sum::<f64>() / window.len() as f64;
    let variance = window
        .iter()
        .map(|&t| (t as f64 - mean).powi(2))
        .sum::<f64>()
        / window.len() as f64;
    let std_dev = variance.sqrt();

    // The critical value is indexed by how many samples the window actually
    // holds; early in a run that is the total batch count, later the
    // configured window size.
    let samples = window_size.min(history.len());
    let std_error_mean = std_dev / (window.len() as f64).sqrt() * T_TABLE[samples];

    let error_percent = if mean > 0.0 {
        (std_error_mean / mean * 100.0).max(0.0)
    } else {
        0.0
    };

    // Throughput uses the most recent batch alone: the windowed mean lags
    // behind the current steady state.
    let ms_spent = ticks as f64 / NANOS_PER_MILLI;
    let ops_per_second = if ticks > 0 {
        batch_size as f64 * (1000.0 / ms_spent)
    } else {
        0.0
    };

    RunStats {
        ticks,
        mean_ticks: mean,
        variance,
        std_dev,
        std_error_mean,
        error_percent,
        ops_per_second,
        exceeded_max_time: false,
    }
}
