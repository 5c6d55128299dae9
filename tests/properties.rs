//! Property tests for the annealing engine and the TSP hooks.

use proptest::prelude::*;
use tsp_anneal::anneal::{AnnealConfig, Annealer, AnnealingProblem};
use tsp_anneal::playback::Playback;
use tsp_anneal::random::create_rng;
use tsp_anneal::tsp::{generate_cities, Point, Tour, TravelingSalesman};
use tsp_anneal::AnnealError;

fn tour_strategy(min: usize, max: usize) -> impl Strategy<Value = Tour> {
    prop::collection::vec((-1000i64..1000, -1000i64..1000), min..max)
        .prop_map(|pts| pts.into_iter().map(Point::from).collect())
}

fn sorted(tour: &Tour) -> Tour {
    let mut t = tour.clone();
    t.sort();
    t
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn history_bounds_hold(
        tour in tour_strategy(2, 15),
        k_max in 1usize..400,
        t_max in 1u64..500,
        seed in any::<u64>(),
    ) {
        let problem = TravelingSalesman::new(t_max).unwrap();
        let config = AnnealConfig::default().with_k_max(k_max).with_seed(seed);
        let mut engine = Annealer::new(problem, tour.clone(), config).unwrap();
        let summary = engine.run().unwrap();

        let history = engine.history();
        prop_assert!(!history.is_empty());
        prop_assert_eq!(&history[0], &tour);
        prop_assert!(history.len() <= k_max + 1);
        prop_assert_eq!(history.len(), summary.accepted_moves + 1);
        prop_assert!(summary.iterations <= k_max);
        prop_assert_eq!(engine.iteration(), summary.iterations);
        prop_assert_eq!(engine.history().last(), Some(engine.state()));
    }

    #[test]
    fn every_state_is_a_permutation(
        tour in tour_strategy(2, 12),
        seed in any::<u64>(),
    ) {
        let config = AnnealConfig::default().with_k_max(300).with_seed(seed);
        let mut engine = Annealer::new(TravelingSalesman::default(), tour.clone(), config).unwrap();
        engine.run().unwrap();

        let expected = sorted(&tour);
        for state in engine.history() {
            prop_assert_eq!(sorted(state), expected.clone());
        }
    }

    #[test]
    fn seeded_runs_are_identical(
        tour in tour_strategy(2, 12),
        seed in any::<u64>(),
    ) {
        let run = || {
            let config = AnnealConfig::default().with_k_max(500).with_seed(seed);
            let mut engine = Annealer::new(TravelingSalesman::default(), tour.clone(), config).unwrap();
            engine.run().unwrap();
            engine.into_history()
        };
        prop_assert_eq!(run(), run());
    }

    #[test]
    fn neighbour_differs_in_at_most_two_positions(
        tour in tour_strategy(2, 30),
        seed in any::<u64>(),
    ) {
        let problem = TravelingSalesman::default();
        let mut rng = create_rng(seed);
        let next = problem.neighbour(&tour, &mut rng);

        prop_assert_eq!(next.len(), tour.len());
        prop_assert!(tour.iter().zip(&next).filter(|(a, b)| a != b).count() <= 2);
        prop_assert_eq!(sorted(&next), sorted(&tour));
    }

    #[test]
    fn temperature_schedule_shape(t_max in 1u64..100_000, a in 0.0001f64..1.0, b in 0.0001f64..1.0) {
        let problem = TravelingSalesman::new(t_max).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(problem.temperature(hi) <= problem.temperature(lo));
        prop_assert_eq!(problem.temperature(1.0), 0);
    }

    #[test]
    fn improvement_always_accepted(e_old in any::<i32>(), drop in 1i64..1_000_000, temp in 1i64..10_000) {
        let problem = TravelingSalesman::default();
        let e_old = e_old as i64;
        prop_assert_eq!(problem.acceptance_probability(e_old, e_old - drop, temp), 1.0);
    }

    #[test]
    fn worsening_probability_in_unit_interval(e_old in -10_000i64..10_000, rise in 0i64..10_000, temp in 1i64..10_000) {
        let problem = TravelingSalesman::default();
        let p = problem.acceptance_probability(e_old, e_old + rise, temp);
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn generated_cities_within_bounds(
        width in 0u32..2000,
        height in 0u32..2000,
        count in 0usize..200,
        seed in any::<u64>(),
    ) {
        let mut rng = create_rng(seed);
        let cities = generate_cities(&mut rng, width, height, count);
        prop_assert_eq!(cities.len(), count);
        for c in &cities {
            prop_assert!(c.x >= 0 && c.x <= width as i64);
            prop_assert!(c.y >= 0 && c.y <= height as i64);
        }
    }

    #[test]
    fn playback_visits_whole_history(
        tour in tour_strategy(2, 10),
        seed in any::<u64>(),
    ) {
        let config = AnnealConfig::default().with_k_max(200).with_seed(seed);
        let mut engine = Annealer::new(TravelingSalesman::default(), tour, config).unwrap();
        engine.run().unwrap();

        let problem = engine.problem();
        let history = engine.history();
        let mut playback = Playback::new(problem, history);
        prop_assert_eq!(playback.max_index(), history.len() - 1);

        let frames: Vec<_> = playback.by_ref().collect();
        prop_assert_eq!(frames.len(), history.len());
        for (i, frame) in frames.iter().enumerate() {
            prop_assert_eq!(frame.index, i);
            prop_assert_eq!(frame.energy, problem.energy(&history[i]));
        }
        let exhausted = matches!(playback.advance(), Err(AnnealError::ExhaustedSequence { .. }));
        prop_assert!(exhausted);
    }
}

#[test]
fn two_city_energy_literal() {
    let problem = TravelingSalesman::default();
    let tour = vec![Point::new(0, 0), Point::new(3, 4)];
    assert_eq!(problem.energy(&tour), 14);
}

#[test]
fn first_pass_cooled_keeps_initial_state() {
    let tour = vec![Point::new(0, 0), Point::new(3, 4), Point::new(8, 1)];
    let config = AnnealConfig::default().with_k_max(1).with_seed(4);
    let mut engine = Annealer::new(TravelingSalesman::default(), tour.clone(), config).unwrap();
    engine.run().unwrap();
    assert_eq!(engine.history(), &[tour]);
}

#[test]
fn zero_budget_rejected() {
    let tour = vec![Point::new(0, 0), Point::new(3, 4)];
    let config = AnnealConfig::default().with_k_max(0);
    assert!(matches!(
        Annealer::new(TravelingSalesman::default(), tour, config),
        Err(AnnealError::InvalidParameter(_))
    ));
}
