//! Annealing execution loop.

use super::config::AnnealConfig;
use super::types::AnnealingProblem;
use crate::error::{AnnealError, Result};
use crate::random::{rng_from_seed, AnnealRng};
use rand::Rng;
use tracing::{debug, info, trace};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// All `k_max` iterations were executed.
    BudgetExhausted,
    /// The schedule returned a non-positive temperature.
    Cooled,
}

/// Outcome of a completed run.
///
/// The run does not track a best state; scan the history for that.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Loop passes that generated and judged a candidate.
    pub iterations: usize,

    /// Number of accepted candidates (`history.len() - 1`).
    pub accepted_moves: usize,

    /// Last temperature the schedule produced.
    pub final_temperature: i64,

    /// Energy of the state the run ended on.
    pub final_energy: i64,

    /// Why the loop stopped.
    pub stop_reason: StopReason,
}

/// Simulated annealing engine.
///
/// Owns the current state, the iteration counter and the history of every
/// accepted state, starting with the initial one. An engine runs at most
/// once; a second [`run`](Annealer::run) returns [`AnnealError::AlreadyRun`].
pub struct Annealer<P: AnnealingProblem, R = AnnealRng> {
    problem: P,
    config: AnnealConfig,
    rng: R,
    state: P::State,
    history: Vec<P::State>,
    k: usize,
    finished: bool,
}

impl<P: AnnealingProblem> Annealer<P> {
    /// Creates an engine seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// [`AnnealError::InvalidParameter`] if the configuration is invalid or
    /// the problem rejects the initial state.
    pub fn new(problem: P, initial_state: P::State, config: AnnealConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(problem, initial_state, config, rng)
    }
}

impl<P: AnnealingProblem, R: Rng> Annealer<P, R> {
    /// Creates an engine drawing from a caller-supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(
        problem: P,
        initial_state: P::State,
        config: AnnealConfig,
        rng: R,
    ) -> Result<Self> {
        config.validate()?;
        problem.validate(&initial_state)?;

        let history = vec![initial_state.clone()];
        Ok(Self {
            problem,
            config,
            rng,
            state: initial_state,
            history,
            k: 0,
            finished: false,
        })
    }

    /// The current state.
    pub fn state(&self) -> &P::State {
        &self.state
    }

    /// Every accepted state in order, the initial state first.
    pub fn history(&self) -> &[P::State] {
        &self.history
    }

    /// Consumes the engine, returning its history.
    pub fn into_history(self) -> Vec<P::State> {
        self.history
    }

    /// Loop passes executed so far.
    pub fn iteration(&self) -> usize {
        self.k
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Whether [`run`](Annealer::run) has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Makes `state` current and records it in the history.
    pub(crate) fn accept(&mut self, state: P::State) {
        self.history.push(state.clone());
        self.state = state;
    }

    /// Runs the annealing loop to completion.
    ///
    /// For each `k` in `0..k_max` the schedule is evaluated at
    /// `(k + 1) / k_max`; a non-positive temperature ends the run. Otherwise
    /// a neighbour is drawn and accepted when its acceptance probability is
    /// at least a uniform draw from `[0, 1)`.
    ///
    /// # Errors
    ///
    /// [`AnnealError::AlreadyRun`] if the engine has already run.
    pub fn run(&mut self) -> Result<RunSummary> {
        if self.finished {
            return Err(AnnealError::AlreadyRun);
        }
        self.finished = true;

        let k_max = self.config.k_max;
        let mut energy = self.problem.energy(&self.state);
        let mut accepted_moves = 0usize;
        let mut final_temperature = 0i64;
        let mut stop_reason = StopReason::BudgetExhausted;

        debug!(k_max, initial_energy = energy, "annealing started");

        while self.k < k_max {
            let progress = (self.k + 1) as f64 / k_max as f64;
            let temperature = self.problem.temperature(progress);
            final_temperature = temperature;
            if temperature <= 0 {
                stop_reason = StopReason::Cooled;
                break;
            }

            let candidate = self.problem.neighbour(&self.state, &mut self.rng);
            let candidate_energy = self.problem.energy(&candidate);
            let probability =
                self.problem
                    .acceptance_probability(energy, candidate_energy, temperature);

            if probability >= self.rng.random::<f64>() {
                trace!(
                    k = self.k,
                    temperature,
                    energy = candidate_energy,
                    "candidate accepted"
                );
                self.accept(candidate);
                energy = candidate_energy;
                accepted_moves += 1;
            }

            self.k += 1;
        }

        let summary = RunSummary {
            iterations: self.k,
            accepted_moves,
            final_temperature,
            final_energy: energy,
            stop_reason,
        };

        info!(
            iterations = summary.iterations,
            accepted_moves = summary.accepted_moves,
            final_energy = summary.final_energy,
            stop_reason = ?summary.stop_reason,
            "annealing finished"
        );

        Ok(summary)
    }
}
