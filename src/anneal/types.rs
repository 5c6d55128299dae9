//! Core trait for the annealing engine.

use crate::error::Result;
use rand::Rng;

/// Defines a problem the annealing engine can drive.
///
/// The implementor supplies the four problem-specific hooks. The engine
/// owns the loop, the iteration counter, the random draws for acceptance
/// and the accepted-state history; it knows nothing else about the state.
///
/// # Minimization
///
/// Lower energy is better. For maximization, negate the energy.
///
/// # Examples
///
/// ```ignore
/// struct Line;
///
/// impl AnnealingProblem for Line {
///     type State = i64;
///
///     fn neighbour<R: Rng>(&self, x: &i64, rng: &mut R) -> i64 {
///         x + rng.random_range(-1..=1)
///     }
///
///     fn temperature(&self, progress: f64) -> i64 {
///         (100.0 * (1.0 - progress)) as i64
///     }
///
///     fn acceptance_probability(&self, e: i64, e_new: i64, t: i64) -> f64 {
///         if e_new < e { 1.0 } else { (-((e_new - e) as f64) / t as f64).exp() }
///     }
///
///     fn energy(&self, x: &i64) -> i64 {
///         x.abs()
///     }
/// }
/// ```
pub trait AnnealingProblem: Send + Sync {
    /// The state representation.
    ///
    /// Every accepted state is stored in the history, so `neighbour` must
    /// return an independent value rather than mutate a shared one.
    type State: Clone + Send;

    /// Produces a perturbed copy of `state` with the same structural shape.
    fn neighbour<R: Rng>(&self, state: &Self::State, rng: &mut R) -> Self::State;

    /// Evaluates the cooling schedule at `progress` in `(0, 1]`.
    ///
    /// A non-positive result stops the run.
    fn temperature(&self, progress: f64) -> i64;

    /// Probability of moving from a state with `energy` to a candidate with
    /// `candidate_energy` at `temperature`. Only called with `temperature > 0`.
    fn acceptance_probability(&self, energy: i64, candidate_energy: i64, temperature: i64) -> f64;

    /// Cost of a state. Lower is better.
    fn energy(&self, state: &Self::State) -> i64;

    /// Rejects initial states the hooks cannot operate on.
    fn validate(&self, _state: &Self::State) -> Result<()> {
        Ok(())
    }
}
