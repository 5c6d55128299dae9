//! Traveling Salesman instantiation of the annealing hooks.

use super::city::{Point, Tour};
use super::moves::{swap_random, swap_random_neighbours};
use crate::anneal::AnnealingProblem;
use crate::error::{AnnealError, Result};
use rand::Rng;

/// How a candidate tour is derived from the current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighbourMove {
    /// Swap two distinct random cities.
    #[default]
    RandomPair,
    /// Swap a random city with the one after it in the tour.
    Adjacent,
}

/// Traveling Salesman over integer-coordinate cities.
///
/// - Schedule: `floor(t_max * (x - 1)^2)`, reaching exactly 0 at `x = 1`.
/// - Acceptance: Metropolis criterion.
/// - Energy: closed-tour length, each edge measured per axis
///   (`sqrt(dx^2) + sqrt(dy^2)`), truncated to an integer.
///
/// # Examples
///
/// ```
/// use tsp_anneal::anneal::{AnnealConfig, Annealer, AnnealingProblem};
/// use tsp_anneal::random::create_rng;
/// use tsp_anneal::tsp::{generate_cities, TravelingSalesman};
///
/// let mut rng = create_rng(42);
/// let cities = generate_cities(&mut rng, 500, 500, 20);
/// let problem = TravelingSalesman::new(200).unwrap();
/// let config = AnnealConfig::default().with_k_max(2000).with_seed(42);
///
/// let mut engine = Annealer::new(problem, cities, config).unwrap();
/// engine.run().unwrap();
///
/// let energies: Vec<i64> = engine
///     .history()
///     .iter()
///     .map(|tour| engine.problem().energy(tour))
///     .collect();
/// assert_eq!(energies.len(), engine.history().len());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelingSalesman {
    t_max: u64,
    neighbour_move: NeighbourMove,
}

impl Default for TravelingSalesman {
    fn default() -> Self {
        Self {
            t_max: 200,
            neighbour_move: NeighbourMove::default(),
        }
    }
}

impl TravelingSalesman {
    /// Creates a problem with temperature scale `t_max`.
    ///
    /// # Errors
    ///
    /// [`AnnealError::InvalidParameter`] if `t_max` is zero.
    pub fn new(t_max: u64) -> Result<Self> {
        if t_max == 0 {
            return Err(AnnealError::InvalidParameter("t_max must be positive".into()));
        }
        Ok(Self {
            t_max,
            ..Self::default()
        })
    }

    pub fn with_neighbour_move(mut self, neighbour_move: NeighbourMove) -> Self {
        self.neighbour_move = neighbour_move;
        self
    }

    pub fn t_max(&self) -> u64 {
        self.t_max
    }

    pub fn neighbour_move(&self) -> NeighbourMove {
        self.neighbour_move
    }
}

/// Per-axis edge length: each axis goes through square-then-root on its own.
fn edge_length(from: &Point, to: &Point) -> f64 {
    let dx = to.x.abs_diff(from.x) as f64;
    let dy = to.y.abs_diff(from.y) as f64;
    (dx * dx).sqrt() + (dy * dy).sqrt()
}

impl AnnealingProblem for TravelingSalesman {
    type State = Tour;

    fn neighbour<R: Rng>(&self, tour: &Tour, rng: &mut R) -> Tour {
        let mut next = tour.clone();
        match self.neighbour_move {
            NeighbourMove::RandomPair => swap_random(&mut next, rng),
            NeighbourMove::Adjacent => swap_random_neighbours(&mut next, rng),
        };
        next
    }

    fn temperature(&self, progress: f64) -> i64 {
        (self.t_max as f64 * (progress - 1.0).powi(2)).floor() as i64
    }

    fn acceptance_probability(&self, energy: i64, candidate_energy: i64, temperature: i64) -> f64 {
        if candidate_energy < energy {
            return 1.0;
        }
        let rise = candidate_energy as f64 - energy as f64;
        (-rise / temperature as f64).exp()
    }

    fn energy(&self, tour: &Tour) -> i64 {
        let total: f64 = tour
            .iter()
            .zip(tour.iter().cycle().skip(1))
            .map(|(from, to)| edge_length(from, to))
            .sum();
        total as i64
    }

    fn validate(&self, tour: &Tour) -> Result<()> {
        if tour.len() < 2 {
            return Err(AnnealError::InvalidParameter(format!(
                "tour needs at least 2 cities to swap, got {}",
                tour.len()
            )));
        }
        Ok(())
    }
}
