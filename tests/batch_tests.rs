// Integration tests for the batch sorts, input parsing and the benchmark runner

use rand::rngs::StdRng;
use rand::SeedableRng;

use sortty::algorithms::batch::{is_sorted, sort_batch, sort_counted, sort_in_place};
use sortty::algorithms::AlgorithmKind;
use sortty::bench::{bench_input, run_benchmark, BenchConfig};
use sortty::input::{generate, parse_csv, parse_values, ArrayPattern, InputError};

#[test]
fn test_every_kind_sorts_random_input() {
    let mut rng = StdRng::seed_from_u64(7);
    let values = generate(ArrayPattern::Random, 200, &mut rng);
    for kind in AlgorithmKind::ALL {
        let mut arr = values.clone();
        sort_in_place(kind, &mut arr);
        assert!(is_sorted(&arr), "{} failed", kind);
    }
}

#[test]
fn test_sorted_input_costs_no_swaps() {
    let values: Vec<i32> = (1..=20).collect();
    for kind in AlgorithmKind::ALL {
        let (_, counters) = sort_counted(kind, &values);
        if kind != AlgorithmKind::Merge {
            assert_eq!(counters.swaps, 0, "{} swapped sorted input", kind);
        }
    }
}

#[test]
fn test_bubble_comparisons_are_quadratic() {
    let values: Vec<i32> = (1..=10).rev().collect();
    let (_, counters) = sort_counted(AlgorithmKind::Bubble, &values);
    assert_eq!(counters.comparisons, 45);
    assert_eq!(counters.swaps, 45);
}

#[test]
fn test_sort_batch_reports_sorted_copy() {
    let values = vec![3, -1, 2, -1];
    let outcome = sort_batch(&values, AlgorithmKind::Quick);
    assert_eq!(outcome.sorted, vec![-1, -1, 2, 3]);
    assert_eq!(values, vec![3, -1, 2, -1]);
    assert!(outcome.elapsed_ms() >= 0.0);
}

#[test]
fn test_parse_and_generate_feed_sorts() {
    let values = parse_values("9, 4, 7,1").expect("valid list");
    assert_eq!(values, vec![9, 4, 7, 1]);
    let csv = parse_csv("9,4\n7,1\n").expect("valid csv");
    assert_eq!(csv, values);

    assert_eq!(
        parse_values("1, x"),
        Err(InputError::InvalidNumber {
            token: "x".to_string()
        })
    );

    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(generate(ArrayPattern::Reverse, 4, &mut rng), vec![4, 3, 2, 1]);
}

#[test]
fn test_benchmark_verifies_every_algorithm() {
    let config = BenchConfig {
        size: 500,
        algorithms: AlgorithmKind::ALL.to_vec(),
        seed: Some(42),
    };
    let records = run_benchmark(&config);
    assert_eq!(records.len(), 5);
    assert!(records.iter().all(|r| r.verified));
    assert_eq!(bench_input(500, Some(42)), bench_input(500, Some(42)));
}
