//! Traveling Salesman Problem on integer-coordinate cities.
//!
//! A tour is an ordered list of cities visited in a closed cycle. The
//! annealing hooks perturb it by swapping cities, cool on a parabolic
//! schedule and accept moves by the Metropolis criterion.
//!
//! # References
//!
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod city;
mod moves;
mod problem;

pub use city::{generate_cities, Point, Tour};
pub use moves::{swap_random, swap_random_neighbours};
pub use problem::{NeighbourMove, TravelingSalesman};
