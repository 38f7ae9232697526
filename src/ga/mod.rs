//! GA-based timetable optimization.
//!
//! A chromosome is a [`Schedule`](crate::models::Schedule) with one gene per
//! activity, in activity-list order. Each gene has three facets (room,
//! time slot, facilitator), each drawn from the problem's domains.
//!
//! # Submodules
//!
//! - [`operators`]: tournament selection, single-point crossover, facet mutation
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"

mod chromosome;
mod config;
mod engine;
pub mod operators;
mod problem;

pub use chromosome::ScheduleChromosome;
pub use config::GaConfig;
pub use engine::{EvolutionResult, GeneticAlgorithm, StopReason};
pub use problem::{Facet, ProblemData, TimetableProblem};
