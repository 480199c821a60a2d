//! End-to-end runs on small instances with known answers.

use std::f64::consts::PI;

use tsp_anneal::{AnnealConfig, AnnealSolver, City, CoolingSchedule, Termination};

fn square() -> Vec<City> {
    [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]
        .into_iter()
        .map(City::from)
        .collect()
}

/// Regular pentagon in hull order: the identity tour is the unique optimum,
/// so every swap makes the tour strictly longer.
fn pentagon() -> Vec<City> {
    (0..5)
        .map(|k| {
            let angle = 2.0 * PI * k as f64 / 5.0;
            City::new(angle.cos(), angle.sin())
        })
        .collect()
}

#[test]
fn square_reaches_perimeter() {
    let config = AnnealConfig::default()
        .with_initial_temperature(10.0)
        .with_min_temperature(0.01)
        .with_max_iterations(1000)
        .with_sa_max(1)
        .with_schedule(CoolingSchedule::Linear)
        .with_two_opt(false)
        .with_seed(1);
    let solver = AnnealSolver::new(square(), config).unwrap();
    let result = solver.solve();

    assert_eq!(result.best_cost, 4.0);
    let mut visited = result.best_route.clone();
    visited.sort_unstable();
    assert_eq!(visited, vec![0, 1, 2, 3]);
    assert_eq!(result.termination, Termination::IterationBudget);
}

#[test]
fn square_every_schedule() {
    for schedule in CoolingSchedule::ALL {
        let config = AnnealConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(0.01)
            .with_max_iterations(500)
            .with_schedule(schedule);
        let result = AnnealSolver::new(square(), config).unwrap().solve();
        assert_eq!(result.best_cost, 4.0, "{schedule}");
    }
}

#[test]
fn stagnation_triggers_reheat_on_next_iteration() {
    let config = AnnealConfig::default()
        .with_initial_temperature(10.0)
        .with_min_temperature(0.01)
        .with_max_iterations(3)
        .with_sa_max(1)
        .with_two_opt(false)
        .with_stagnation_limit(1)
        .with_reheat_temperature(5.0)
        .with_seed(1);
    let result = AnnealSolver::new(pentagon(), config).unwrap().solve();

    assert_eq!(result.history.temperatures[0], 10.0);
    assert_eq!(result.history.best_costs[0], result.initial_cost);
    assert_eq!(result.history.temperatures[1], 5.0);
    assert_eq!(result.history.reheat_points, vec![1]);
}

#[test]
fn reheat_ramp_decays_geometrically() {
    let config = AnnealConfig::default()
        .with_initial_temperature(1.0)
        .with_min_temperature(0.001)
        .with_max_iterations(10)
        .with_sa_max(1)
        .with_two_opt(false)
        .with_stagnation_limit(1)
        .with_reheat_temperature(5.0)
        .with_reheat_cooling_rate(0.95)
        .with_seed(3);
    let result = AnnealSolver::new(pentagon(), config).unwrap().solve();

    assert_eq!(result.history.reheat_points, vec![1]);
    for i in 1..10 {
        let expected = 5.0 * 0.95f64.powi(i as i32 - 1);
        assert_eq!(result.history.temperatures[i], expected, "iteration {i}");
    }
}

#[test]
fn plateau_reheat_holds_then_resumes_schedule() {
    let config = AnnealConfig::default()
        .with_initial_temperature(1.0)
        .with_min_temperature(0.001)
        .with_max_iterations(6)
        .with_two_opt(false)
        .with_stagnation_limit(1)
        .with_reheat_temperature(5.0)
        .with_progressive_cooling(false)
        .with_reheat_iterations(3);
    let result = AnnealSolver::new(pentagon(), config).unwrap().solve();

    assert_eq!(&result.history.temperatures[1..4], &[5.0, 5.0, 5.0]);
    let resumed = CoolingSchedule::Linear.temperature(4, 6, 1.0, 0.001);
    assert_eq!(result.history.temperatures[4], resumed);
    assert_eq!(result.history.reheat_points, vec![1, 5]);
}

#[test]
fn repeated_solves_are_identical() {
    let cities: Vec<City> = (0..20)
        .map(|k| {
            let t = k as f64;
            City::new((t * 7.3).sin() * 50.0, (t * 3.1).cos() * 50.0)
        })
        .collect();
    let config = AnnealConfig::default()
        .with_initial_temperature(100.0)
        .with_min_temperature(0.01)
        .with_max_iterations(2_000)
        .with_sa_max(3)
        .with_stagnation_limit(300)
        .with_schedule(CoolingSchedule::HyperbolicTangent)
        .with_seed(2526);
    let solver = AnnealSolver::new(cities, config).unwrap();

    let first = solver.solve();
    let second = solver.solve();
    assert_eq!(first.best_cost, second.best_cost);
    assert_eq!(first.best_route, second.best_route);
    assert_eq!(first.history, second.history);
    assert_eq!(first, second);
}
