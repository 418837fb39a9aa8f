//! Benchmark registration and the run entry point.
//!
//! All registration styles — incremental add-then-run, single-function
//! [`just`], pairwise [`this`]/[`against`](ThisClause::against), and N-way
//! [`these`] — are thin facades over one engine: calibrate each function,
//! drive the convergence loop, aggregate the results.

use log::debug;

use crate::calibrate;
use crate::config::Config;
use crate::error::Error;
use crate::result::Results;
use crate::runner;

/// A registered zero-argument callable.
pub type Action = Box<dyn FnMut()>;

/// Collects functions to benchmark and runs them sequentially.
///
/// # Example
///
/// ```no_run
/// use benchmate::Benchmark;
///
/// let mut benchmark = Benchmark::new();
/// benchmark
///     .add_named("sin", || {
///         std::hint::black_box(f64::sin(1.23));
///     })
///     .add_named("cos", || {
///         std::hint::black_box(f64::cos(1.23));
///     });
/// let results = benchmark.run()?;
/// results.print();
/// # Ok::<(), benchmate::Error>(())
/// ```
pub struct Benchmark {
    actions: Vec<(Action, String)>,
    config: Config,
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::new()
    }
}

impl Benchmark {
    /// Create an empty benchmark with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty benchmark with an explicit configuration.
    ///
    /// The configuration is read-only for the duration of each run.
    pub fn with_config(config: Config) -> Self {
        Self {
            actions: Vec::new(),
            config,
        }
    }

    /// The configuration this benchmark runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register a function under a default label (`"Test {n}"`, 1-based).
    pub fn add<F>(&mut self, action: F) -> &mut Self
    where
        F: FnMut() + 'static,
    {
        let label = format!("Test {}", self.actions.len() + 1);
        self.actions.push((Box::new(action), label));
        self
    }

    /// Register a function under an explicit label.
    pub fn add_named<F>(&mut self, label: impl Into<String>, action: F) -> &mut Self
    where
        F: FnMut() + 'static,
    {
        self.actions.push((Box::new(action), label.into()));
        self
    }

    /// Calibrate and measure every registered function, in order.
    ///
    /// Functions run strictly one after another, never concurrently, so
    /// they cannot interfere with each other's timings. Panics from a
    /// measured function propagate out of this call.
    ///
    /// # Errors
    ///
    /// Configuration problems ([`Error::WindowTooLarge`] and friends) are
    /// reported before any measurement starts; [`Error::NoBenchmarks`] when
    /// nothing was registered; [`Error::ZeroBatchSize`] when calibration
    /// could not complete a single call.
    pub fn run(&mut self) -> Result<Results, Error> {
        self.config.validate()?;

        if self.actions.is_empty() {
            return Err(Error::NoBenchmarks);
        }

        debug!("running {} benchmark(s)", self.actions.len());

        let mut results = Vec::with_capacity(self.actions.len());
        for (action, label) in &mut self.actions {
            let calibration = calibrate::calibrate(action, self.config.initial_batch_time_ms)?;
            results.push(runner::run(action, calibration, &self.config, label));
        }

        Ok(Results::new(results))
    }
}

/// Half-built pairwise comparison; finish it with
/// [`against`](ThisClause::against).
pub struct ThisClause {
    benchmark: Benchmark,
}

impl ThisClause {
    /// Benchmark the second function against the first and run both.
    pub fn against<F>(mut self, action: F) -> Result<Results, Error>
    where
        F: FnMut() + 'static,
    {
        self.benchmark.add(action);
        self.benchmark.run()
    }

    /// Like [`against`](Self::against), with an explicit label.
    pub fn against_named<F>(mut self, label: impl Into<String>, action: F) -> Result<Results, Error>
    where
        F: FnMut() + 'static,
    {
        self.benchmark.add_named(label, action);
        self.benchmark.run()
    }
}

/// Start a pairwise comparison with a default-labeled function.
pub fn this<F>(action: F) -> ThisClause
where
    F: FnMut() + 'static,
{
    let mut benchmark = Benchmark::new();
    benchmark.add(action);
    ThisClause { benchmark }
}

/// Start a pairwise comparison with a labeled function.
pub fn this_named<F>(label: impl Into<String>, action: F) -> ThisClause
where
    F: FnMut() + 'static,
{
    let mut benchmark = Benchmark::new();
    benchmark.add_named(label, action);
    ThisClause { benchmark }
}

/// Benchmark a single default-labeled function.
pub fn just<F>(action: F) -> Result<Results, Error>
where
    F: FnMut() + 'static,
{
    let mut benchmark = Benchmark::new();
    benchmark.add(action);
    benchmark.run()
}

/// Benchmark a single labeled function.
pub fn just_named<F>(label: impl Into<String>, action: F) -> Result<Results, Error>
where
    F: FnMut() + 'static,
{
    let mut benchmark = Benchmark::new();
    benchmark.add_named(label, action);
    benchmark.run()
}

/// Benchmark a list of labeled functions against each other.
///
/// ```no_run
/// use benchmate::{these, Action};
///
/// let results = these(vec![
///     ("sin", Box::new(|| { std::hint::black_box(f64::sin(1.23)); }) as Action),
///     ("cos", Box::new(|| { std::hint::black_box(f64::cos(1.23)); }) as Action),
/// ])?;
/// # Ok::<(), benchmate::Error>(())
/// ```
pub fn these(actions: Vec<(impl Into<String>, Action)>) -> Result<Results, Error> {
    let mut benchmark = Benchmark::new();
    for (label, action) in actions {
        benchmark.actions.push((action, label.into()));
    }
    benchmark.run()
}
