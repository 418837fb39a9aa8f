//! The convergence loop: repeated batch execution with a confidence-based
//! stopping rule.
//!
//! Each pass times exactly one batch as an atomic unit, folds the elapsed
//! ticks into the windowed statistics, and then decides: converged (relative
//! error under the threshold, with at least [`MIN_BATCHES`] samples), timed
//! out (hard wall-clock ceiling), or keep collecting. The ceiling is
//! unconditional and can fire after a single batch, so a noisy or slow
//! function can never hold the loop forever; the price is an occasional
//! low-confidence result, flagged on its final statistics.

use std::time::Instant;

use log::{debug, trace};

use crate::calibrate::Calibration;
use crate::config::Config;
use crate::constants::MIN_BATCHES;
use crate::result::BenchResult;
use crate::statistics::{self, RunStats};

/// Execute the measurement loop for one calibrated function.
///
/// A batch in progress always runs to completion before any stopping
/// condition is evaluated, so the worst-case overrun of the ceiling is one
/// in-flight batch.
pub(crate) fn run<F>(f: &mut F, calibration: Calibration, config: &Config, label: &str) -> BenchResult
where
    F: FnMut(),
{
    let Calibration {
        batch_size,
        budget_ms,
    } = calibration;

    let mut ticks_history: Vec<u64> = Vec::new();
    let mut runs: Vec<RunStats> = Vec::new();
    let started = Instant::now();

    loop {
        if let Some(quiesce) = config.quiesce {
            quiesce();
        }

        let batch_start = Instant::now();
        for _ in 0..batch_size {
            f();
        }
        let ticks = batch_start.elapsed().as_nanos() as u64;

        ticks_history.push(ticks);
        let mut stats = statistics::compute(&ticks_history, config.window_size, batch_size);

        trace!(
            "{label}: batch {} took {} ticks, error {:.4}%",
            ticks_history.len(),
            ticks,
            stats.error_percent
        );
        if config.verbose {
            eprintln!(
                "[benchmate] {label}: batch {} error {:.4}% sd {:.1}",
                ticks_history.len(),
                stats.error_percent,
                stats.std_dev
            );
        }

        let batches = ticks_history.len();
        if stats.error_percent <= config.error_threshold_percent && batches >= MIN_BATCHES {
            runs.push(stats);
            debug!("{label}: converged after {batches} batches");
            break;
        }

        if started.elapsed().as_millis() as u64 > config.max_time_ms {
            stats.exceeded_max_time = true;
            runs.push(stats);
            debug!(
                "{label}: exceeded the {} ms ceiling after {batches} batches",
                config.max_time_ms
            );
            break;
        }

        runs.push(stats);
    }

    debug!(
        "{label}: ran for {:.1} ms total",
        started.elapsed().as_secs_f64() * 1000.0
    );

    BenchResult {
        label: label.to_string(),
        batch_size,
        batch_time_ms: budget_ms,
        runs,
    }
}
