//! u-timetable - evolve a course timetable from the command line.
//!
//! Runs the GA on the built-in SLA dataset, or on a problem read from a
//! JSON file, and prints the best timetable as text or JSON.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_timetable::catalog;
use u_timetable::ga::{GaConfig, GeneticAlgorithm, ProblemData, StopReason, TimetableProblem};
use u_timetable::report::ScheduleReport;
use u_timetable::GaError;

/// Timetable CLI
#[derive(Parser, Debug)]
#[command(name = "u-timetable")]
#[command(about = "Assign rooms, times and facilitators to activities with a genetic algorithm", long_about = None)]
#[command(version)]
struct Cli {
    /// Problem file (JSON); defaults to the built-in SLA dataset
    #[arg(short, long)]
    problem: Option<PathBuf>,

    /// GA configuration file (JSON); command-line flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Individuals per generation
    #[arg(long)]
    population_size: Option<usize>,

    /// Per-gene mutation probability
    #[arg(long)]
    mutation_rate: Option<f64>,

    /// Maximum number of generations
    #[arg(short, long, default_value_t = 500)]
    generations: usize,

    /// Stop when average fitness improves by less than this over the convergence window
    #[arg(short, long, default_value_t = 0.01)]
    threshold: f64,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Wall-clock cap in seconds
    #[arg(long)]
    time_limit: Option<u64>,

    /// Evaluate and breed on a single thread
    #[arg(long)]
    no_parallel: bool,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print the problem as JSON and exit without running
    #[arg(long)]
    export_problem: bool,
}

#[derive(Serialize)]
struct RunOutput<'a> {
    generations: usize,
    stop_reason: StopReason,
    avg_fitness_history: &'a [f64],
    report: &'a ScheduleReport,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

fn load_problem(path: Option<&PathBuf>) -> Result<TimetableProblem, GaError> {
    match path {
        Some(path) => {
            let data: ProblemData = serde_json::from_str(&fs::read_to_string(path)?)?;
            info!(path = %path.display(), "loaded problem");
            TimetableProblem::from_data(data)
        }
        None => catalog::sla_problem(),
    }
}

fn load_config(cli: &Cli) -> Result<GaConfig, GaError> {
    let mut config = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => GaConfig::default(),
    };
    if let Some(size) = cli.population_size {
        config = config.with_population_size(size);
    }
    if let Some(rate) = cli.mutation_rate {
        config = config.with_mutation_rate(rate);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(secs) = cli.time_limit {
        config = config.with_time_limit(Duration::from_secs(secs));
    }
    if cli.no_parallel {
        config = config.with_parallel(false);
    }
    Ok(config)
}

fn main() -> Result<(), GaError> {
    let cli = Cli::parse();
    init_tracing();

    let problem = load_problem(cli.problem.as_ref())?;
    if cli.export_problem {
        println!("{}", serde_json::to_string_pretty(&problem.to_data())?);
        return Ok(());
    }

    let config = load_config(&cli)?;
    let mut ga = GeneticAlgorithm::new(problem, config)?;
    let policy = ga.evaluator().policy();
    info!(
        generations = cli.generations,
        threshold = cli.threshold,
        parallel = ga.config().parallel,
        seed = ?ga.config().seed,
        linked_courses = ?policy.linked_courses,
        far_buildings = ?policy.far_buildings,
        load_restricted = ?policy.load_restricted_facilitator,
        "starting evolution"
    );
    let result = ga.evolve(cli.generations, cli.threshold);
    info!(
        generations = result.generations,
        stop_reason = ?result.stop_reason,
        best_fitness = result.best_fitness,
        "evolution finished"
    );

    let report = ScheduleReport::calculate(&result.best, ga.evaluator());
    if cli.json {
        let output = RunOutput {
            generations: result.generations,
            stop_reason: result.stop_reason,
            avg_fitness_history: &result.avg_fitness_history,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
