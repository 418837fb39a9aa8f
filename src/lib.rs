//! # benchmate
//!
//! Adaptive micro-benchmarking for zero-argument closures.
//!
//! Each registered function is calibrated so that one *batch* — a fixed
//! number of sequential calls timed as an atomic unit — lasts roughly the
//! configured calibration budget. Batches then repeat until the relative
//! error of the mean over a trailing window falls below the configured
//! threshold (or a hard wall-clock ceiling fires), and all results are
//! ranked against the fastest.
//!
//! ## Quick start
//!
//! ```no_run
//! let results = benchmate::this_named("string contains", || {
//!     std::hint::black_box("abcdef".contains("ef"));
//! })
//! .against_named("byte scan", || {
//!     std::hint::black_box("abcdef".bytes().any(|b| b == b'f'));
//! })?;
//!
//! results.print();
//! println!("fastest: {:.0} ops/sec", results.ranking()[0].ops_per_second);
//! # Ok::<(), benchmate::Error>(())
//! ```
//!
//! ## Incremental registration
//!
//! ```no_run
//! use benchmate::{Benchmark, Config};
//!
//! let config = Config {
//!     error_threshold_percent: 0.5,
//!     max_time_ms: 10_000,
//!     ..Config::default()
//! };
//!
//! let mut benchmark = Benchmark::with_config(config);
//! benchmark.add_named("parse", || {
//!     std::hint::black_box("12345".parse::<u64>().ok());
//! });
//! let results = benchmark.run()?;
//! # Ok::<(), benchmate::Error>(())
//! ```
//!
//! Measurement is strictly sequential and single-threaded; the only way to
//! bound a run's duration is [`Config::max_time_ms`]. Results are
//! statistically bounded point estimates of throughput for one process run —
//! not reproducible across machines, and not a profiler.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod benchmark;
mod calibrate;
mod config;
mod constants;
mod error;
mod result;
mod runner;
mod statistics;

pub mod output;

pub use benchmark::{just, just_named, these, this, this_named, Action, Benchmark, ThisClause};
pub use calibrate::{calibrate, Calibration};
pub use config::Config;
pub use constants::{MAX_WINDOW, MIN_BATCHES, T_TABLE};
pub use error::Error;
pub use result::{BenchResult, RankedEntry, Results};
pub use statistics::RunStats;
