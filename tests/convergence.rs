//! Stopping-rule behavior observed through the public API.

use std::time::Duration;

use benchmate::{Benchmark, Config, MIN_BATCHES};

#[test]
fn never_converges_before_the_third_batch() {
    // A threshold the very first batch would satisfy: the run still has to
    // collect three batches before it may stop.
    let config = Config {
        initial_batch_time_ms: 20,
        error_threshold_percent: 1e9,
        max_time_ms: 5_000,
        ..Config::default()
    };
    let mut benchmark = Benchmark::with_config(config);
    benchmark.add_named("trivial", || {
        std::hint::black_box(11u64);
    });

    let results = benchmark.run().expect("run converges");
    assert_eq!(results[0].runs.len(), MIN_BATCHES);
    assert!(!results[0].timed_out());
}

#[test]
fn converged_run_meets_its_threshold() {
    let threshold = 75.0;
    let config = Config {
        initial_batch_time_ms: 20,
        error_threshold_percent: threshold,
        max_time_ms: 10_000,
        ..Config::default()
    };
    let mut benchmark = Benchmark::with_config(config);
    benchmark.add_named("meets threshold", || {
        std::hint::black_box(f64::sqrt(2.0));
    });

    let results = benchmark.run().expect("run completes");
    let result = &results[0];
    if !result.timed_out() {
        assert!(result.error_percent() <= threshold);
        assert!(result.runs.len() >= MIN_BATCHES);
    }
}

#[test]
fn tight_ceiling_stops_with_flag_set() {
    // One batch of this callable takes longer than the whole ceiling, so
    // the run stops on the time path with fewer than three batches.
    let config = Config {
        initial_batch_time_ms: 10,
        error_threshold_percent: 0.0,
        max_time_ms: 1,
        ..Config::default()
    };
    let mut benchmark = Benchmark::with_config(config);
    benchmark.add_named("slow", || std::thread::sleep(Duration::from_millis(4)));

    let results = benchmark.run().expect("timed-out runs still report");
    let result = &results[0];
    assert!(result.timed_out());
    assert!(result.runs.len() < MIN_BATCHES);
    assert!(result
        .last_run()
        .is_some_and(|run| run.exceeded_max_time));
    // The history before the terminating batch never carries the flag.
    for run in &result.runs[..result.runs.len() - 1] {
        assert!(!run.exceeded_max_time);
    }
}

#[test]
fn per_batch_history_is_complete_and_consistent() {
    let config = Config {
        initial_batch_time_ms: 20,
        error_threshold_percent: 1e9,
        max_time_ms: 5_000,
        ..Config::default()
    };
    let mut benchmark = Benchmark::with_config(config);
    benchmark.add_named("history", || {
        std::hint::black_box(17u64.pow(2));
    });

    let results = benchmark.run().expect("run completes");
    for run in &results[0].runs {
        assert!(run.variance >= 0.0);
        assert!((run.std_dev - run.variance.sqrt()).abs() < 1e-9);
        assert!(run.error_percent >= 0.0);
        assert!(run.ticks > 0);
        assert!(run.ops_per_second > 0.0);
    }
}

#[test]
fn calibration_batch_reflects_call_cost() {
    // ~1 ms per call against a 50 ms budget: the batch lands well below the
    // count a sub-microsecond callable would produce.
    let config = Config {
        initial_batch_time_ms: 50,
        error_threshold_percent: 1e9,
        max_time_ms: 2_000,
        ..Config::default()
    };
    let mut benchmark = Benchmark::with_config(config);
    benchmark.add_named("millisecond", || {
        std::thread::sleep(Duration::from_millis(1))
    });

    let results = benchmark.run().expect("run completes");
    let result = &results[0];
    assert!(result.batch_size >= 5);
    assert!(result.batch_size <= 60);
    assert_eq!(result.batch_time_ms, 50);
}
