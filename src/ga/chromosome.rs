//! Memoized-fitness chromosome.
//!
//! A [`Schedule`] is a plain value with no cached state. The GA wraps each
//! schedule in a [`ScheduleChromosome`], which remembers its score after
//! the first evaluation. The wrapped schedule is never mutated in place:
//! breeding operators build new schedules and wrap them in new
//! chromosomes, so a cached score always belongs to the items it was
//! computed from.

use rand::Rng;

use super::TimetableProblem;
use crate::fitness::FitnessEvaluator;
use crate::models::Schedule;

/// A schedule together with its lazily computed fitness.
#[derive(Debug, Clone)]
pub struct ScheduleChromosome {
    schedule: Schedule,
    fitness: Option<f64>,
}

impl ScheduleChromosome {
    /// Wraps a schedule; fitness is left uncomputed.
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule,
            fitness: None,
        }
    }

    /// Creates a chromosome with uniformly random genes.
    pub fn random<R: Rng>(problem: &TimetableProblem, rng: &mut R) -> Self {
        Self::new(problem.random_schedule(rng))
    }

    /// The wrapped schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Consumes the chromosome, returning the schedule.
    pub fn into_schedule(self) -> Schedule {
        self.schedule
    }

    /// The cached fitness, if already evaluated.
    pub fn cached_fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Returns the cached fitness, evaluating and caching it first if needed.
    ///
    /// The cache belongs to whichever evaluator filled it. Later calls with
    /// a different evaluator return that first score; rewrap the schedule
    /// with [`ScheduleChromosome::new`] to score it under another policy.
    pub fn fitness(&mut self, evaluator: &FitnessEvaluator) -> f64 {
        let schedule = &self.schedule;
        *self
            .fitness
            .get_or_insert_with(|| evaluator.evaluate(schedule))
    }
}

impl From<Schedule> for ScheduleChromosome {
    fn from(schedule: Schedule) -> Self {
        Self::new(schedule)
    }
}
