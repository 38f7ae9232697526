//! Genetic operators for timetables.
//!
//! - [`tournament_select`]: fittest of a random sample drawn without replacement
//! - [`single_point_crossover`]: prefix of one parent, suffix of the other
//! - [`mutate`]: per-gene replacement of one randomly chosen facet
//!
//! Every operator preserves the gene order of the activity list.
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"

use rand::seq::index;
use rand::Rng;
use tracing::instrument;

use super::problem::{Facet, TimetableProblem};
use crate::models::Schedule;

/// Picks the fittest of `tournament_size` distinct individuals drawn
/// uniformly from the population.
///
/// `fitnesses[i]` is the fitness of individual `i`. Ties go to the first
/// maximum in draw order. Returns `None` when the tournament is empty or
/// larger than the population.
pub fn tournament_select<R: Rng>(
    fitnesses: &[f64],
    tournament_size: usize,
    rng: &mut R,
) -> Option<usize> {
    if tournament_size == 0 || tournament_size > fitnesses.len() {
        return None;
    }

    let mut best: Option<usize> = None;
    for candidate in index::sample(rng, fitnesses.len(), tournament_size) {
        match best {
            Some(b) if fitnesses[candidate] <= fitnesses[b] => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Builds a child from `p1[..cut]` followed by `p2[cut..]`.
///
/// `cut` is clamped to the parents' length.
pub fn crossover_at(p1: &Schedule, p2: &Schedule, cut: usize) -> Schedule {
    let cut = cut.min(p1.len());
    let mut items = Vec::with_capacity(p2.len().max(cut));
    items.extend_from_slice(&p1.items()[..cut]);
    items.extend_from_slice(p2.items().get(cut..).unwrap_or(&[]));
    Schedule::new(items)
}

/// Single-point crossover with a cut drawn uniformly from `1..len`.
///
/// Both parents contribute at least one gene. Schedules shorter than two
/// genes cannot be cut; the child is then a copy of `p1`.
#[instrument(level = "trace", skip_all, fields(genes = p1.len()))]
pub fn single_point_crossover<R: Rng>(p1: &Schedule, p2: &Schedule, rng: &mut R) -> Schedule {
    if p1.len() < 2 {
        return p1.clone();
    }
    let cut = rng.random_range(1..p1.len());
    crossover_at(p1, p2, cut)
}

/// Returns a mutated copy of `schedule`.
///
/// Each gene independently, with probability `rate`, has exactly one
/// facet (room, time slot or facilitator, chosen uniformly) replaced by a
/// fresh uniform draw from the problem's domain. The draw may repeat the
/// old value.
///
/// `rate` is clamped to [0, 1]; a NaN rate mutates nothing.
#[instrument(level = "trace", skip_all, fields(genes = schedule.len(), rate = rate))]
pub fn mutate<R: Rng>(
    schedule: &Schedule,
    problem: &TimetableProblem,
    rate: f64,
    rng: &mut R,
) -> Schedule {
    let rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
    let mut items = schedule.items().to_vec();
    for item in &mut items {
        if !rng.random_bool(rate) {
            continue;
        }
        match Facet::random(rng) {
            Facet::Room => item.room = problem.random_room(rng),
            Facet::TimeSlot => item.time_slot = problem.random_time_slot(rng),
            Facet::Facilitator => item.facilitator = problem.random_facilitator(rng),
        }
    }
    Schedule::new(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::{Activity, Room, TimeSlot};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn changed_facets(before: &Schedule, after: &Schedule) -> Vec<usize> {
        before
            .items()
            .iter()
            .zip(after.items())
            .map(|(a, b)| {
                usize::from(a.room != b.room)
                    + usize::from(a.time_slot != b.time_slot)
                    + usize::from(a.facilitator != b.facilitator)
            })
            .collect()
    }

    #[test]
    fn test_tournament_returns_best_of_whole_population() {
        let fitnesses = [0.5, -1.0, 3.0, 2.0, 0.0];
        let mut rng = SmallRng::seed_from_u64(42);
        // Tournament over the whole population always finds the maximum.
        for _ in 0..20 {
            assert_eq!(tournament_select(&fitnesses, 5, &mut rng), Some(2));
        }
    }

    #[test]
    fn test_tournament_winner_beats_sampled_peers() {
        let fitnesses: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut wins = 0;
        for _ in 0..200 {
            let winner = tournament_select(&fitnesses, 5, &mut rng).unwrap();
            // Best of 5 out of 50 is rarely in the bottom half.
            if winner >= 25 {
                wins += 1;
            }
        }
        assert!(wins > 150);
    }

    #[test]
    fn test_tournament_rejects_invalid_sizes() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(tournament_select(&[1.0, 2.0], 5, &mut rng), None);
        assert_eq!(tournament_select(&[1.0, 2.0], 0, &mut rng), None);
        assert_eq!(tournament_select(&[], 1, &mut rng), None);
    }

    #[test]
    fn test_tournament_tie_is_resolved() {
        let fitnesses = [1.0; 6];
        let mut rng = SmallRng::seed_from_u64(42);
        let winner = tournament_select(&fitnesses, 5, &mut rng).unwrap();
        assert!(winner < 6);
    }

    #[test]
    fn test_crossover_at_cut() {
        let problem = catalog::sla_problem().unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = problem.random_schedule(&mut rng);
        let p2 = problem.random_schedule(&mut rng);
        let k = p1.len();

        for cut in 1..k {
            let child = crossover_at(&p1, &p2, cut);
            assert_eq!(child.len(), k);
            assert_eq!(&child.items()[..cut], &p1.items()[..cut]);
            assert_eq!(&child.items()[cut..], &p2.items()[cut..]);
            assert!(child.matches_activities(problem.activities()));
        }
    }

    #[test]
    fn test_random_crossover_keeps_both_parents() {
        let problem = catalog::sla_problem().unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = problem.random_schedule(&mut rng);
        let p2 = problem.random_schedule(&mut rng);

        for _ in 0..50 {
            let child = single_point_crossover(&p1, &p2, &mut rng);
            assert_eq!(child.len(), p1.len());
            assert_eq!(child.items()[0], p1.items()[0]);
            assert_eq!(child.items()[p1.len() - 1], p2.items()[p2.len() - 1]);
        }
    }

    #[test]
    fn test_crossover_single_gene_copies_first_parent() {
        let problem = TimetableProblem::new(
            vec![Activity::new("Solo", 10)],
            vec![Room::new("R", 10, "B")],
            vec![TimeSlot::at_hour(10)],
            vec!["Lock".into(), "Glen".into()],
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = problem.random_schedule(&mut rng);
        let p2 = problem.random_schedule(&mut rng);
        assert_eq!(single_point_crossover(&p1, &p2, &mut rng), p1);
    }

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let problem = catalog::sla_problem().unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let original = problem.random_schedule(&mut rng);
        for _ in 0..20 {
            assert_eq!(mutate(&original, &problem, 0.0, &mut rng), original);
        }
    }

    #[test]
    fn test_mutation_rate_one_touches_every_gene() {
        let problem = catalog::sla_problem().unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let original = problem.random_schedule(&mut rng);

        let mut touched = vec![false; original.len()];
        for _ in 0..20 {
            let mutated = mutate(&original, &problem, 1.0, &mut rng);
            assert!(mutated.matches_activities(problem.activities()));
            let changes = changed_facets(&original, &mutated);
            assert!(changes.iter().all(|&c| c <= 1));
            for (pos, &c) in changes.iter().enumerate() {
                touched[pos] |= c == 1;
            }
        }
        assert!(touched.iter().all(|&t| t), "untouched genes: {touched:?}");
    }

    #[test]
    fn test_mutation_rate_one_on_two_value_domains() {
        // Each redraw picks the other value half the time, so about half
        // of all genes come out changed.
        let activities = (0..11)
            .map(|i| Activity::new(format!("SLA{i}"), 10))
            .collect();
        let problem = TimetableProblem::new(
            activities,
            vec![Room::new("A", 10, "B"), Room::new("C", 10, "D")],
            vec![TimeSlot::at_hour(10), TimeSlot::at_hour(11)],
            vec!["Lock".into(), "Glen".into()],
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let original = problem.random_schedule(&mut rng);

        let trials = 200;
        let mut changed = 0;
        for _ in 0..trials {
            let mutated = mutate(&original, &problem, 1.0, &mut rng);
            let changes = changed_facets(&original, &mutated);
            assert!(changes.iter().all(|&c| c <= 1));
            changed += changes.iter().sum::<usize>();
        }
        let share = changed as f64 / (trials * original.len()) as f64;
        assert!((0.4..0.6).contains(&share), "changed share {share}");
    }

    #[test]
    fn test_mutation_rate_is_clamped() {
        let problem = catalog::sla_problem().unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let original = problem.random_schedule(&mut rng);

        for rate in [-0.5, f64::NAN] {
            assert_eq!(mutate(&original, &problem, rate, &mut rng), original);
        }
        let mutated = mutate(&original, &problem, 7.0, &mut rng);
        assert!(changed_facets(&original, &mutated).iter().all(|&c| c <= 1));
    }

    #[test]
    fn test_mutation_does_not_touch_parent() {
        let problem = catalog::sla_problem().unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let original = problem.random_schedule(&mut rng);
        let snapshot = original.clone();
        let _ = mutate(&original, &problem, 1.0, &mut rng);
        assert_eq!(original, snapshot);
    }
}
