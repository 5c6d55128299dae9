//! Simulated annealing with a recorded trajectory.
//!
//! - **Annealing engine** ([`anneal`]): a generic run loop over a problem
//!   that supplies neighbour generation, a temperature schedule, an
//!   acceptance probability and an energy. Every accepted state is kept in
//!   an ordered history, the initial state first.
//! - **Traveling Salesman** ([`tsp`]): swap-based neighbours, a parabolic
//!   schedule, the Metropolis criterion and a per-axis closed-tour length,
//!   plus uniform random city generation.
//! - **Playback** ([`playback`]): a cursor for stepping or scrubbing through
//!   a finished run's history with per-frame energies.
//!
//! # Architecture
//!
//! The engine contains no problem-specific logic; rendering and timing of a
//! replay belong to the consumer. Runs are single-threaded, and seeded runs
//! are reproducible through [`random::create_rng`].

pub mod anneal;
pub mod error;
pub mod playback;
pub mod random;
pub mod tsp;

pub use error::{AnnealError, Result};
