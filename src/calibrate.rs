//! Batch-size calibration.
//!
//! A batch is the unit the convergence loop times: enough sequential calls
//! that one batch lasts roughly the calibration budget, keeping individual
//! timer reads well above clock granularity. Calibration also doubles as the
//! warm-up pass; first-call costs such as lazy initialization are absorbed
//! here rather than in the timed batches.

use std::time::{Duration, Instant};

use log::debug;

use crate::error::Error;

/// Outcome of a calibration pass.
#[derive(Debug, Clone, Copy)]
pub struct Calibration {
    /// Invocations per batch.
    pub batch_size: u64,

    /// The calibration budget that produced it, in milliseconds.
    pub budget_ms: u64,
}

/// Run `f` repeatedly until `budget_ms` of wall-clock time has passed and
/// return the completed invocation count as the batch size.
///
/// The elapsed check happens before each call, so the measured time is
/// always at least the budget. There is no ceiling on the count: a
/// near-zero-cost function calibrates to a very large batch, trading
/// calibration speed for measurement stability.
///
/// # Errors
///
/// [`Error::ZeroBatchSize`] when not a single call completed within the
/// budget, which would otherwise poison the throughput division downstream.
pub fn calibrate<F>(f: &mut F, budget_ms: u64) -> Result<Calibration, Error>
where
    F: FnMut(),
{
    let budget = Duration::from_millis(budget_ms);
    let start = Instant::now();
    let mut count: u64 = 0;

    while start.elapsed() < budget {
        f();
        count += 1;
    }

    if count == 0 {
        return Err(Error::ZeroBatchSize { budget_ms });
    }

    debug!(
        "calibrated batch size {} over {} ms ({:.1} ms measured)",
        count,
        budget_ms,
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(Calibration {
        batch_size: count,
        budget_ms,
    })
}
