//! Course timetabling by genetic algorithm.
//!
//! Assigns every activity a room, a start time and a facilitator, scoring
//! candidate timetables against soft constraints (room conflicts, room
//! size, facilitator preference and load, section spacing) and evolving a
//! population of them until the average fitness stops improving.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Activity`, `Room`, `TimeSlot`, `Schedule`
//! - **`fitness`**: Soft-constraint scoring and the `FitnessPolicy` knobs
//! - **`ga`**: Problem domains, operators and the generational engine
//! - **`validation`**: Input integrity checks for problem data and GA config
//! - **`catalog`**: The built-in SLA department dataset
//! - **`report`**: Human-readable summary of a finished timetable
//!
//! # Example
//!
//! ```
//! use u_timetable::catalog;
//! use u_timetable::ga::{GaConfig, GeneticAlgorithm};
//! use u_timetable::report::ScheduleReport;
//!
//! let problem = catalog::sla_problem()?;
//! let mut ga = GeneticAlgorithm::new(problem, GaConfig::default().with_population_size(30))?;
//! let result = ga.evolve(10, 0.01);
//! let report = ScheduleReport::calculate(&result.best, ga.evaluator());
//! assert_eq!(report.entries.len(), 11);
//! # Ok::<(), u_timetable::GaError>(())
//! ```
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

pub mod catalog;
mod error;
pub mod fitness;
pub mod ga;
pub mod models;
pub mod report;
pub mod validation;

pub use error::GaError;
