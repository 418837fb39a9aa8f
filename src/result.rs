//! Result types and ranking.

use std::ops::Index;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::statistics::RunStats;

/// Measurement outcome for one benchmarked function.
///
/// `runs` holds one [`RunStats`] per accepted batch, in order; the last
/// entry is the authoritative final measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchResult {
    /// The label given (or defaulted) at registration.
    pub label: String,

    /// Invocations per batch, chosen by calibration.
    pub batch_size: u64,

    /// Calibration budget actually used, in milliseconds.
    pub batch_time_ms: u64,

    /// Per-batch statistics history.
    pub runs: Vec<RunStats>,
}

impl BenchResult {
    /// The final statistics snapshot, if any batch completed.
    pub fn last_run(&self) -> Option<&RunStats> {
        self.runs.last()
    }

    /// Final operations per second (0.0 for an empty history).
    pub fn ops_per_second(&self) -> f64 {
        self.last_run().map_or(0.0, |r| r.ops_per_second)
    }

    /// Final relative error percentage (0.0 for an empty history).
    pub fn error_percent(&self) -> f64 {
        self.last_run().map_or(0.0, |r| r.error_percent)
    }

    /// Whether the run stopped by hitting the wall-clock ceiling rather
    /// than by converging.
    pub fn timed_out(&self) -> bool {
        self.last_run().is_some_and(|r| r.exceeded_max_time)
    }
}

/// One row of the ranked summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Label of the benchmarked function.
    pub label: String,

    /// Number of batches the run accepted.
    pub runs: usize,

    /// Final operations per second.
    pub ops_per_second: f64,

    /// Final relative error percentage.
    pub error_percent: f64,

    /// Ratio of the fastest result's throughput to this one's.
    ///
    /// The baseline's own factor is 1.0, never 0; use [`is_baseline`]
    /// to identify the fastest row instead of comparing this number.
    ///
    /// [`is_baseline`]: RankedEntry::is_baseline
    pub slowdown: f64,

    /// Set on exactly the entry with the highest throughput.
    pub is_baseline: bool,
}

/// Ordered collection of results, one per registered function.
///
/// Produced once per run and read-only thereafter. Indexable in
/// registration order; the ranked summary is derived on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Results {
    results: Vec<BenchResult>,
}

impl Results {
    /// Wrap per-function results in registration order.
    pub fn new(results: Vec<BenchResult>) -> Self {
        Self { results }
    }

    /// Number of benchmarked functions.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when no results are present.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate results in registration order.
    pub fn iter(&self) -> slice::Iter<'_, BenchResult> {
        self.results.iter()
    }

    /// Rank all results against the fastest.
    ///
    /// The baseline is the result with the highest final throughput; every
    /// entry carries `slowdown = baseline_ops / own_ops` and the baseline is
    /// marked with an explicit flag. Rows are ordered fastest first. The
    /// underlying results are not modified.
    pub fn ranking(&self) -> Vec<RankedEntry> {
        let baseline_ops = self
            .results
            .iter()
            .map(BenchResult::ops_per_second)
            .fold(f64::MIN, f64::max);

        let mut entries: Vec<RankedEntry> = self
            .results
            .iter()
            .map(|result| {
                let ops = result.ops_per_second();
                RankedEntry {
                    label: result.label.clone(),
                    runs: result.runs.len(),
                    ops_per_second: ops,
                    error_percent: result.error_percent(),
                    slowdown: baseline_ops / ops,
                    is_baseline: ops == baseline_ops,
                }
            })
            .collect();

        // Fastest first; ties keep registration order.
        entries.sort_by(|a, b| {
            b.ops_per_second
                .partial_cmp(&a.ops_per_second)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // A tie for the top spot still yields exactly one baseline row.
        let mut seen_baseline = false;
        for entry in &mut entries {
            if entry.is_baseline {
                if seen_baseline {
                    entry.is_baseline = false;
                } else {
                    seen_baseline = true;
                }
            }
        }

        entries
    }

    /// Print the ranked summary table to stdout.
    pub fn print(&self) {
        println!("{}", crate::output::terminal::format_ranking(self));
    }
}

impl Index<usize> for Results {
    type Output = BenchResult;

    fn index(&self, index: usize) -> &BenchResult {
        &self.results[index]
    }
}

impl<'a> IntoIterator for &'a Results {
    type Item = &'a BenchResult;
    type IntoIter = slice::Iter<'a, BenchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
