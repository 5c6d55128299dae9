//! Generic simulated annealing engine.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with a probability that
//! shrinks as the temperature falls, allowing the search to escape local
//! optima early and settle later.
//!
//! The engine records every accepted state, so the full trajectory of a
//! run can be inspected or replayed afterwards.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use runner::{Annealer, RunSummary, StopReason};
pub use types::AnnealingProblem;
