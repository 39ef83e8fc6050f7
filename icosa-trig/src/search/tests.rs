use std::cell::Cell;

use slog::Logger;

use super::*;

fn quiet_log() -> Logger {
    Logger::root(slog::Discard, o!())
}

#[test]
fn converges_on_linear_residual_from_far_away() {
    let spec = SearchSpec::default();
    let convergence = find_root(&spec, 0.0, &quiet_log(), |x| x - 1.2345).unwrap();
    assert!(convergence.residual <= 1e-11);
    assert!(convergence.iterations < 200);
    assert_relative_eq!(convergence.parameter, 1.2345, epsilon = 1e-10);
}

#[test]
fn converges_on_decreasing_residual() {
    // First step goes the wrong way and has to be undone.
    let spec = SearchSpec::default();
    let convergence = find_root(&spec, 0.1, &quiet_log(), |x| 0.15 - x).unwrap();
    assert_relative_eq!(convergence.parameter, 0.15, epsilon = 1e-10);
    assert!(convergence.iterations < 100);
}

#[test]
fn converges_on_curved_residual() {
    let spec = SearchSpec::default();
    let convergence = find_root(&spec, 0.5, &quiet_log(), |x| x.cos() - 0.8).unwrap();
    assert_relative_eq!(convergence.parameter, 0.8f64.acos(), epsilon = 1e-10);
}

#[test]
fn seed_on_root_needs_one_evaluation() {
    let spec = SearchSpec::default();
    let convergence = find_root(&spec, 2.0, &quiet_log(), |x| x - 2.0).unwrap();
    assert_eq!(convergence.iterations, 1);
    assert_eq!(convergence.parameter, 2.0);
    assert_eq!(convergence.residual, 0.0);
}

#[test]
fn last_evaluation_is_at_returned_parameter() {
    let spec = SearchSpec::default();
    let last_seen = Cell::new(Real::NAN);
    let convergence = find_root(&spec, 0.3, &quiet_log(), |x| {
        last_seen.set(x);
        (x - 0.2) * 3.0
    })
    .unwrap();
    assert_eq!(last_seen.get(), convergence.parameter);
}

#[test]
fn step_policy() {
    // Record the parameters tried on f(x) = x - 0.02 starting from zero,
    // with a step of 0.015.
    let spec = SearchSpec {
        tolerance: 1e-11,
        initial_step: 0.015,
        max_iterations: 5,
    };
    let mut tried = Vec::new();
    let result = find_root(&spec, 0.0, &quiet_log(), |x| {
        tried.push(x);
        x - 0.02
    });
    assert!(result.is_err());
    let expected = [
        0.0,
        // Negative residual, so step up.
        0.015,
        // Still negative but closer; keep going.
        0.03,
        // Crossed zero: halve and reverse.
        0.0225,
        // Same side, closer: keep the half step.
        0.015,
    ];
    assert_eq!(tried.len(), expected.len());
    for (x, e) in tried.iter().zip(expected.iter()) {
        assert_relative_eq!(*x, *e, epsilon = 1e-15);
    }
}

#[test]
fn iteration_cap_is_reported() {
    let spec = SearchSpec {
        max_iterations: 20,
        ..SearchSpec::default()
    };
    // Never reaches zero.
    let mut calls = 0;
    let error = find_root(&spec, 0.0, &quiet_log(), |x| {
        calls += 1;
        x * x + 1.0
    })
    .unwrap_err();
    assert_eq!(calls, 20);
    match error {
        SearchError::IterationCap {
            iterations,
            residual,
            ..
        } => {
            assert_eq!(iterations, 20);
            assert!(residual >= 1.0);
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn nan_residual_stops_the_search() {
    let spec = SearchSpec::default();
    let error = find_root(&spec, 1.0, &quiet_log(), |_| Real::NAN).unwrap_err();
    assert_eq!(
        error,
        SearchError::NotANumber {
            parameter: 1.0,
            iterations: 1
        }
    );
}
