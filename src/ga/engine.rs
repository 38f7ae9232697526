//! Generational GA engine.
//!
//! # Algorithm
//!
//! 1. Initialize `population_size` random chromosomes.
//! 2. Each generation: evaluate every chromosome and record the average
//!    and best fitness.
//! 3. From generation `convergence_window` onward, stop when the relative
//!    improvement of the average over the last `convergence_window`
//!    generations falls below the caller's threshold.
//! 4. Otherwise breed a full replacement population (tournament selection,
//!    single-point crossover, mutation) and swap it in wholesale.
//! 5. Return the fittest chromosome of the final population.
//!
//! # Parallelism
//!
//! With `GaConfig::parallel`, evaluation and breeding run on the rayon
//! pool. Every child is bred from its own `SmallRng`, seeded from the
//! engine's master RNG before the pool starts, so a fixed seed yields the
//! same run with or without parallelism.

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::chromosome::ScheduleChromosome;
use super::operators::{mutate, single_point_crossover, tournament_select};
use super::{GaConfig, TimetableProblem};
use crate::error::GaError;
use crate::fitness::FitnessEvaluator;
use crate::models::Schedule;
use crate::validation::validate_config;

/// Why [`GeneticAlgorithm::evolve`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// Average fitness stopped improving.
    Converged,
    /// The generation budget was exhausted.
    GenerationLimit,
    /// The wall-clock cap was reached.
    TimeLimit,
}

/// Outcome of an evolution run.
#[derive(Debug, Clone, Serialize)]
pub struct EvolutionResult {
    /// Fittest schedule of the final population.
    pub best: Schedule,
    /// Its fitness.
    pub best_fitness: f64,
    /// Number of generations evaluated.
    pub generations: usize,
    /// Why the run stopped.
    pub stop_reason: StopReason,
    /// Population average fitness per evaluated generation.
    pub avg_fitness_history: Vec<f64>,
    /// Population best fitness per evaluated generation.
    pub best_fitness_history: Vec<f64>,
}

/// Genetic algorithm over timetables.
///
/// # Example
/// ```
/// use u_timetable::catalog;
/// use u_timetable::ga::{GaConfig, GeneticAlgorithm};
///
/// let problem = catalog::sla_problem()?;
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_seed(42);
/// let mut ga = GeneticAlgorithm::new(problem, config)?;
/// let result = ga.evolve(20, 0.01);
/// assert_eq!(result.best.len(), 11);
/// # Ok::<(), u_timetable::GaError>(())
/// ```
pub struct GeneticAlgorithm {
    problem: TimetableProblem,
    config: GaConfig,
    evaluator: FitnessEvaluator,
    population: Vec<ScheduleChromosome>,
    rng: SmallRng,
}

impl GeneticAlgorithm {
    /// Creates an engine with the default fitness policy and an initial
    /// random population.
    ///
    /// # Errors
    /// [`GaError::InvalidInput`] if the configuration is invalid.
    pub fn new(problem: TimetableProblem, config: GaConfig) -> Result<Self, GaError> {
        Self::with_evaluator(problem, config, FitnessEvaluator::default())
    }

    /// Creates an engine with a custom evaluator.
    pub fn with_evaluator(
        problem: TimetableProblem,
        config: GaConfig,
        evaluator: FitnessEvaluator,
    ) -> Result<Self, GaError> {
        validate_config(&config).map_err(GaError::InvalidInput)?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let population = (0..config.population_size)
            .map(|_| ScheduleChromosome::random(&problem, &mut rng))
            .collect();

        info!(
            activities = problem.activities().len(),
            rooms = problem.rooms().len(),
            time_slots = problem.time_slots().len(),
            facilitators = problem.facilitators().len(),
            population_size = config.population_size,
            mutation_rate = config.mutation_rate,
            "initialized timetable GA"
        );

        Ok(Self {
            problem,
            config,
            evaluator,
            population,
            rng,
        })
    }

    /// The problem being solved.
    pub fn problem(&self) -> &TimetableProblem {
        &self.problem
    }

    /// The run configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The fitness evaluator.
    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// The current population.
    pub fn population(&self) -> &[ScheduleChromosome] {
        &self.population
    }

    /// Runs up to `generations` generations and returns the best schedule.
    ///
    /// Stops early when the relative improvement of the average fitness
    /// over the last `convergence_window` generations is below
    /// `improvement_threshold`, or when the configured time limit passes.
    #[instrument(level = "debug", skip(self), fields(population_size = self.config.population_size))]
    pub fn evolve(&mut self, generations: usize, improvement_threshold: f64) -> EvolutionResult {
        let started = Instant::now();
        let mut avg_fitness_history = Vec::new();
        let mut best_fitness_history = Vec::new();
        let mut stop_reason = StopReason::GenerationLimit;

        for generation in 0..generations {
            let fitnesses = self.evaluate_population();
            let (avg, best) = summarize(&fitnesses);
            avg_fitness_history.push(avg);
            best_fitness_history.push(best);
            debug!(generation, avg_fitness = avg, best_fitness = best, "evaluated generation");

            if generation >= self.config.convergence_window {
                match relative_improvement(&avg_fitness_history, self.config.convergence_window) {
                    Some(improvement) if improvement < improvement_threshold => {
                        info!(generation, improvement, "average fitness converged");
                        stop_reason = StopReason::Converged;
                        break;
                    }
                    Some(_) => {}
                    None => debug!(generation, "convergence check inconclusive"),
                }
            }

            if let Some(limit) = self.config.time_limit {
                if started.elapsed() >= limit {
                    info!(generation, ?limit, "time limit reached");
                    stop_reason = StopReason::TimeLimit;
                    break;
                }
            }

            match self.breed_next_generation(&fitnesses) {
                Some(next) => self.population = next,
                None => {
                    warn!(generation, "population too small for tournament; stopping");
                    break;
                }
            }
        }

        if stop_reason == StopReason::GenerationLimit {
            info!(generations, "generation limit reached");
        }

        let fitnesses = self.evaluate_population();
        let best_idx = argmax(&fitnesses).unwrap_or(0);
        let best_fitness = fitnesses.get(best_idx).copied().unwrap_or(f64::NEG_INFINITY);
        let best = self
            .population
            .get(best_idx)
            .map(|c| c.schedule().clone())
            .unwrap_or_default();

        EvolutionResult {
            best,
            best_fitness,
            generations: avg_fitness_history.len(),
            stop_reason,
            avg_fitness_history,
            best_fitness_history,
        }
    }

    /// Evaluates (or reads cached) fitness for every chromosome.
    fn evaluate_population(&mut self) -> Vec<f64> {
        let evaluator = &self.evaluator;
        if self.config.parallel {
            self.population
                .par_iter_mut()
                .map(|c| c.fitness(evaluator))
                .collect()
        } else {
            self.population
                .iter_mut()
                .map(|c| c.fitness(evaluator))
                .collect()
        }
    }

    /// Builds a complete replacement population.
    ///
    /// Returns `None` if a tournament cannot be drawn.
    fn breed_next_generation(&mut self, fitnesses: &[f64]) -> Option<Vec<ScheduleChromosome>> {
        let seeds: Vec<u64> = (0..self.config.population_size)
            .map(|_| self.rng.random())
            .collect();

        let this = &*self;
        if this.config.parallel {
            seeds
                .into_par_iter()
                .map(|seed| this.breed_child(fitnesses, seed))
                .collect()
        } else {
            seeds
                .into_iter()
                .map(|seed| this.breed_child(fitnesses, seed))
                .collect()
        }
    }

    fn breed_child(&self, fitnesses: &[f64], seed: u64) -> Option<ScheduleChromosome> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let size = self.config.tournament_size;
        let p1 = tournament_select(fitnesses, size, &mut rng)?;
        let p2 = tournament_select(fitnesses, size, &mut rng)?;

        let child = single_point_crossover(
            self.population[p1].schedule(),
            self.population[p2].schedule(),
            &mut rng,
        );
        let child = mutate(&child, &self.problem, self.config.mutation_rate, &mut rng);
        Some(ScheduleChromosome::new(child))
    }
}

/// (average, best) of a fitness list. Empty lists yield (0, -inf).
fn summarize(fitnesses: &[f64]) -> (f64, f64) {
    if fitnesses.is_empty() {
        return (0.0, f64::NEG_INFINITY);
    }
    let sum: f64 = fitnesses.iter().sum();
    let best = fitnesses.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (sum / fitnesses.len() as f64, best)
}

/// Index of the first maximum.
fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some(b) if v <= values[b] => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Relative change of the latest average against the one `window`
/// generations earlier: `(now - then) / |then|`.
///
/// `None` when the history is too short, when the earlier average is
/// zero (or within `f64::EPSILON` of it), or when the ratio is not finite.
pub(crate) fn relative_improvement(history: &[f64], window: usize) -> Option<f64> {
    if window == 0 || history.len() <= window {
        return None;
    }
    let now = history[history.len() - 1];
    let then = history[history.len() - 1 - window];
    if then.abs() <= f64::EPSILON {
        return None;
    }
    let improvement = (now - then) / then.abs();
    improvement.is_finite().then_some(improvement)
}
