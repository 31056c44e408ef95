//! Tests for the search loop.

use std::cell::Cell;
use std::time::Duration;

use tokio::sync::mpsc;
use tourforge_config::{PerturbationConfig, SolverConfig};
use tourforge_core::{
    DistanceMatrix, DistanceOracle, EuclideanInstance, Result, Tour, TourForgeError,
    TourSolution,
};
use tourforge_test::instances::{circle, random_euclidean, unit_square};
use tourforge_test::RecordingSink;

use super::*;
use crate::heuristic::PositionPair;
use crate::sink::ChannelSink;
use crate::termination::{OrTermination, SweepCountTermination};

fn sweeps(limit: u64, seed: u64) -> Solver<SweepCountTermination> {
    Solver::new(&SolverConfig::default())
        .unwrap()
        .with_termination(SweepCountTermination::new(limit))
        .with_seed(seed)
}

/// Fails every lookup once `budget` lookups have been served.
#[derive(Debug)]
struct ExhaustibleOracle {
    inner: EuclideanInstance,
    budget: Cell<usize>,
}

impl DistanceOracle for ExhaustibleOracle {
    fn city_count(&self) -> usize {
        self.inner.city_count()
    }

    fn distance(&self, from: usize, to: usize) -> Result<f64> {
        let left = self.budget.get();
        if left == 0 {
            return Err(TourForgeError::InvalidIndex {
                index: to,
                city_count: self.city_count(),
            });
        }
        self.budget.set(left - 1);
        self.inner.distance(from, to)
    }
}

#[test]
fn test_square_is_optimal_from_construction() {
    let square = unit_square();
    let mut sink = RecordingSink::new();

    let result = sweeps(1, 0).solve(&square, &mut sink).unwrap();

    assert_eq!(result.tour.cities(), &[0, 1, 2, 3, 0]);
    assert!((result.distance - 4.0).abs() < 1e-12);
    assert_eq!(result.stats.sweeps, 1);
    assert_eq!(result.stats.reversals, 0);
    assert_eq!(sink.history(), &[(vec![0, 1, 2, 3], 4.0)]);
}

#[test]
fn test_square_stays_optimal_under_time_budget() {
    let square = unit_square();
    let mut solution = TourSolution::new(4);
    let solver = Solver::new(&SolverConfig::default())
        .unwrap()
        .with_termination(TimeTermination::millis(50).with_safety_margin(Duration::ZERO))
        .with_seed(3);

    let result = solver.solve(&square, &mut solution).unwrap();

    assert!((result.distance - 4.0).abs() < 1e-12);
    assert_eq!(solution.publications(), 1);
    assert_eq!(solution.order(), Some(vec![0, 1, 2, 3]));
    assert!(result.stats.elapsed() >= Duration::from_millis(50));
}

#[test]
fn test_configured_time_budget_is_honored() {
    let instance = random_euclidean(30, 8);
    let config = SolverConfig::new()
        .with_termination_seconds(0.75)
        .with_random_seed(1);
    let solver = Solver::new(&config).unwrap();
    assert_eq!(
        solver.termination().effective_limit(),
        Duration::from_millis(250)
    );

    let mut sink = RecordingSink::new();
    let result = solver.solve(&instance, &mut sink).unwrap();

    assert!(result.stats.elapsed() >= Duration::from_millis(250));
    assert!(result.tour.is_valid());
    assert_eq!(sink.last().unwrap().1, result.distance);
}

#[test]
fn test_published_distances_strictly_decrease() {
    for seed in 0..6 {
        let instance = random_euclidean(40, seed);
        let mut sink = RecordingSink::new();

        let result = sweeps(150, seed).solve(&instance, &mut sink).unwrap();

        let distances = sink.distances();
        assert!(!distances.is_empty());
        for pair in distances.windows(2) {
            assert!(pair[1] < pair[0], "seed {seed}: {distances:?}");
        }
        assert_eq!(*distances.last().unwrap(), result.distance);
        assert_eq!(distances.len() as u64, result.stats.improvements + 1);
    }
}

#[test]
fn test_every_published_tour_is_a_valid_permutation() {
    let instance = random_euclidean(25, 13);
    let mut sink = RecordingSink::new();

    let result = sweeps(100, 13).solve(&instance, &mut sink).unwrap();

    for (order, distance) in sink.history() {
        let tour = Tour::from_order(order.clone()).unwrap();
        assert_eq!(tour.city_at(0), 0);
        assert!((tour.length(&instance).unwrap() - distance).abs() < 1e-9);
    }
    assert!(result.tour.is_valid());
    assert_eq!(result.tour.city_at(0), 0);
    assert_eq!(result.tour.city_at(25), 0);
    assert!((result.tour.length(&instance).unwrap() - result.distance).abs() < 1e-9);
}

#[test]
fn test_search_beats_construction() {
    let instance = random_euclidean(60, 5);
    let constructed = NearestNeighborBuilder::new()
        .build(&instance)
        .unwrap()
        .length(&instance)
        .unwrap();

    let result = sweeps(50, 5)
        .solve(&instance, &mut RecordingSink::new())
        .unwrap();

    assert!(result.distance < constructed);
    assert!(result.stats.perturbations + result.stats.restarts > 0);
}

#[test]
fn test_circle_reaches_perimeter() {
    let instance = circle(12);
    let perimeter = Tour::identity(12).unwrap().length(&instance).unwrap();

    let result = sweeps(40, 21)
        .solve(&instance, &mut RecordingSink::new())
        .unwrap();

    assert!((result.distance - perimeter).abs() < 1e-9);
}

#[test]
fn test_same_seed_same_run() {
    let instance = random_euclidean(30, 77);
    let mut first = RecordingSink::new();
    let mut second = RecordingSink::new();

    let a = sweeps(80, 4).solve(&instance, &mut first).unwrap();
    let b = sweeps(80, 4).solve(&instance, &mut second).unwrap();

    assert_eq!(a.tour, b.tour);
    assert_eq!(a.distance, b.distance);
    assert_eq!(first.history(), second.history());
}

#[test]
fn test_three_cities_restart() {
    let instance =
        EuclideanInstance::from_coordinates(&[(0.0, 0.0), (3.0, 0.0), (0.0, 4.0)]).unwrap();
    let mut sink = RecordingSink::new();

    let result = sweeps(5, 0).solve(&instance, &mut sink).unwrap();

    assert!(result.stats.restarts >= 1);
    assert!((result.distance - 12.0).abs() < 1e-12);
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_empty_instance_is_degenerate() {
    let empty = DistanceMatrix::new(0, Vec::new()).unwrap();
    let mut sink = RecordingSink::new();

    let err = sweeps(1, 0).solve(&empty, &mut sink).unwrap_err();

    assert_eq!(err, TourForgeError::DegenerateInstance { city_count: 0 });
    assert!(sink.is_empty());
}

#[test]
fn test_single_city_is_trivial() {
    let single = DistanceMatrix::new(1, vec![0.0]).unwrap();
    let mut solution = TourSolution::new(1);

    let result = sweeps(10, 0).solve(&single, &mut solution).unwrap();

    assert_eq!(result.tour.cities(), &[0, 0]);
    assert_eq!(result.distance, 0.0);
    assert_eq!(result.stats.sweeps, 0);
    assert_eq!(solution.position_of(0), Some(0));
    assert_eq!(solution.publications(), 1);
}

#[test]
fn test_two_cities_skip_search() {
    let pair = DistanceMatrix::from_rows(vec![vec![0.0, 2.5], vec![2.5, 0.0]]).unwrap();
    let result = sweeps(10, 0)
        .solve(&pair, &mut RecordingSink::new())
        .unwrap();

    assert_eq!(result.tour.cities(), &[0, 1, 0]);
    assert_eq!(result.distance, 5.0);
    assert_eq!(result.stats.sweeps, 0);
}

#[test]
fn test_oracle_error_aborts_but_keeps_published_tour() {
    let oracle = ExhaustibleOracle {
        inner: random_euclidean(12, 3),
        // 66 lookups for construction, 12 for its length, then a few more
        budget: Cell::new(90),
    };
    let mut sink = RecordingSink::new();

    let err = sweeps(100, 0).solve(&oracle, &mut sink).unwrap_err();

    assert!(matches!(err, TourForgeError::InvalidIndex { .. }));
    assert_eq!(sink.len(), 1);
    let (order, _) = sink.last().unwrap();
    assert!(Tour::from_order(order.clone()).unwrap().is_valid());
}

/// Scope on the crossed unit square with one tried transposition, and the
/// working tour already uncrossed.
fn improved_square_scope() -> SolverScope {
    let square = unit_square();
    let crossed = Tour::from_order(vec![0, 2, 1, 3]).unwrap();
    let distance = crossed.length(&square).unwrap();
    let mut scope = SolverScope::with_seed(crossed, distance, 0);
    scope.tried_mut().insert(PositionPair::new(1, 3));

    scope.working_tour_mut().reverse_segment(1, 2).unwrap();
    scope.refresh_working_distance(&square).unwrap();
    scope
}

#[test]
fn test_improvement_clears_tried_when_enabled() {
    let solver = sweeps(1, 0).with_clear_tried_on_improvement(true);
    let mut scope = improved_square_scope();
    let mut sink = RecordingSink::new();

    assert!(solver.accept_improvement(&mut scope, &mut sink));

    assert!(scope.tried().is_empty());
    assert_eq!(sink.history(), &[(vec![0, 1, 2, 3], 4.0)]);
}

#[test]
fn test_improvement_keeps_tried_by_default() {
    let solver = sweeps(1, 0);
    let mut scope = improved_square_scope();
    let mut sink = RecordingSink::new();

    assert!(solver.accept_improvement(&mut scope, &mut sink));

    assert_eq!(scope.tried().len(), 1);
    assert!(scope.tried().contains(PositionPair::new(1, 3)));
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_no_improvement_leaves_tried_alone() {
    let solver = sweeps(1, 0).with_clear_tried_on_improvement(true);
    let mut scope = improved_square_scope();
    let mut sink = RecordingSink::new();
    assert!(solver.accept_improvement(&mut scope, &mut sink));
    scope.tried_mut().insert(PositionPair::new(1, 2));

    assert!(!solver.accept_improvement(&mut scope, &mut sink));

    assert_eq!(scope.tried().len(), 1);
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_clear_tried_flag_read_from_config() {
    let instance = random_euclidean(20, 30);
    let config = SolverConfig::new()
        .with_random_seed(30)
        .with_perturbation(PerturbationConfig {
            clear_tried_on_improvement: true,
            ..PerturbationConfig::default()
        });
    let solver = Solver::new(&config)
        .unwrap()
        .with_termination(SweepCountTermination::new(60));
    assert!(solver.clear_tried_on_improvement);

    let mut sink = RecordingSink::new();
    let result = solver.solve(&instance, &mut sink).unwrap();

    assert!(result.tour.is_valid());
    assert_eq!(sink.last().unwrap().1, result.distance);
}

#[test]
fn test_small_perturbation_budget_restarts_often() {
    let instance = random_euclidean(6, 2);
    let solver = sweeps(200, 9).with_perturbation(PerturbationEngine::new(1, 50));

    let result = solver.solve(&instance, &mut RecordingSink::new()).unwrap();

    assert!(result.stats.restarts > 0);
    assert!(result.tour.is_valid());
}

#[test]
fn test_or_termination_stops_on_first() {
    let instance = random_euclidean(15, 6);
    let solver = Solver::new(&SolverConfig::default())
        .unwrap()
        .with_termination(OrTermination::new((
            TimeTermination::seconds(60),
            SweepCountTermination::new(7),
        )))
        .with_seed(6);

    let result = solver.solve(&instance, &mut RecordingSink::new()).unwrap();
    assert_eq!(result.stats.sweeps, 7);
}

#[test]
fn test_channel_sink_streams_improvements() {
    let instance = random_euclidean(35, 12);
    let (sender, mut receiver) = mpsc::unbounded_channel();
    let mut sink = ChannelSink::new(sender);

    let result = sweeps(60, 12).solve(&instance, &mut sink).unwrap();

    let mut updates = Vec::new();
    while let Ok(update) = receiver.try_recv() {
        updates.push(update);
    }
    assert!(!updates.is_empty());
    let (order, distance) = updates.last().unwrap();
    assert_eq!(order.as_slice(), result.tour.order());
    assert_eq!(*distance, result.distance);
}

#[test]
fn test_default_config_uses_default_budget() {
    let solver = Solver::new(&SolverConfig::default()).unwrap();
    assert_eq!(
        solver.termination().limit(),
        Duration::from_secs(DEFAULT_TIME_LIMIT_SECS)
    );
    assert_eq!(solver.termination().safety_margin(), Duration::from_millis(500));
    assert_eq!(solver.random_seed(), None);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = SolverConfig::new().with_termination_seconds(-1.0);
    let err = Solver::new(&config).unwrap_err();
    assert!(matches!(err, TourForgeError::Config(_)));
}

#[test]
fn test_oversized_time_limit_is_rejected() {
    let config = SolverConfig::new().with_termination_seconds(1e30);
    let err = Solver::new(&config).unwrap_err();
    assert!(matches!(err, TourForgeError::Config(_)));
}
