//! Aggregation and baseline identification across real runs.

use std::time::Duration;

use benchmate::{Benchmark, Config};

fn quick() -> Config {
    Config {
        initial_batch_time_ms: 20,
        error_threshold_percent: 75.0,
        max_time_ms: 2_000,
        ..Config::default()
    }
}

#[test]
fn fast_function_is_the_baseline() {
    let mut benchmark = Benchmark::with_config(quick());
    benchmark
        .add_named("Fast", || {
            std::hint::black_box(1u64.wrapping_add(1));
        })
        .add_named("Slow", || std::thread::sleep(Duration::from_micros(300)));

    let results = benchmark.run().expect("both runs complete");
    let ranking = results.ranking();

    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].label, "Fast");
    assert!(ranking[0].is_baseline);
    assert!((ranking[0].slowdown - 1.0).abs() < 1e-12);

    assert_eq!(ranking[1].label, "Slow");
    assert!(!ranking[1].is_baseline);
    assert!(ranking[1].slowdown > 1.0);

    // The slowdown is exactly the throughput ratio against the baseline.
    let fast_ops = results[0].ops_per_second();
    let slow_ops = results[1].ops_per_second();
    let expected = fast_ops / slow_ops;
    assert!((ranking[1].slowdown - expected).abs() < expected * 1e-9);
}

#[test]
fn ranking_carries_run_counts_and_errors() {
    let mut benchmark = Benchmark::with_config(quick());
    benchmark.add_named("counted", || {
        std::hint::black_box(2u64.wrapping_mul(3));
    });

    let results = benchmark.run().expect("run completes");
    let ranking = results.ranking();

    assert_eq!(ranking[0].runs, results[0].runs.len());
    assert_eq!(ranking[0].error_percent, results[0].error_percent());
    assert_eq!(ranking[0].ops_per_second, results[0].ops_per_second());
}

#[test]
fn ranking_is_recomputed_on_demand() {
    let mut benchmark = Benchmark::with_config(quick());
    benchmark.add_named("once", || {
        std::hint::black_box(5u64);
    });

    let results = benchmark.run().expect("run completes");
    let first = results.ranking();
    let second = results.ranking();
    assert_eq!(first.len(), second.len());
    assert_eq!(first[0].ops_per_second, second[0].ops_per_second);
}
