//! GA run configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration of a [`GeneticAlgorithm`](super::GeneticAlgorithm) run.
///
/// # Example
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_mutation_rate(0.05)
///     .with_seed(42)
///     .with_parallel(false);
/// assert_eq!(config.tournament_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of individuals per generation (default: 500).
    pub population_size: usize,
    /// Per-gene mutation probability in [0, 1] (default: 0.01).
    pub mutation_rate: f64,
    /// Individuals drawn per tournament (default: 5).
    pub tournament_size: usize,
    /// Lag, in generations, of the convergence comparison (default: 100).
    pub convergence_window: usize,
    /// RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Evaluate and breed on the rayon pool (default: true).
    pub parallel: bool,
    /// Optional wall-clock cap, checked between generations.
    pub time_limit: Option<Duration>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
            mutation_rate: 0.01,
            tournament_size: 5,
            convergence_window: 100,
            seed: None,
            parallel: true,
            time_limit: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Sets the convergence window.
    pub fn with_convergence_window(mut self, window: usize) -> Self {
        self.convergence_window = window;
        self
    }

    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation and breeding.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets a wall-clock cap.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}
