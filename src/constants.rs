//! Fixed numeric tables and conversion factors.

/// Elapsed ticks are nanoseconds as reported by `std::time::Instant`.
pub const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Batches required before a run is allowed to converge.
///
/// Fewer than three samples gives a degenerate variance estimate, so the
/// stopping rule never accepts a result before the third batch.
pub const MIN_BATCHES: usize = 3;

/// Two-sided 95% Student's-t critical values, indexed by sample count.
///
/// `T_TABLE[n]` is the critical value applied when the statistics window
/// holds `n` timings (degrees of freedom `n - 1`). Entry 0 is a guard and is
/// never read; entry 1 reuses the single-degree value since a one-sample
/// window has zero deviation anyway.
pub const T_TABLE: [f64; 31] = [
    12.706, // guard, unused
    12.706, 4.303, 3.182, 2.776, 2.571, 2.447, 2.365, 2.306, 2.262, 2.228,
    2.201, 2.179, 2.160, 2.145, 2.131, 2.120, 2.110, 2.101, 2.093, 2.086,
    2.080, 2.074, 2.069, 2.064, 2.060, 2.056, 2.052, 2.048, 2.045, 2.042,
];

/// Hard ceiling on the configurable statistics window.
///
/// The window may never exceed the highest sample count the table covers.
pub const MAX_WINDOW: usize = T_TABLE.len() - 1;
