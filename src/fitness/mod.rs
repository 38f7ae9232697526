//! Fitness evaluation for timetables.
//!
//! Scores a [`Schedule`] by summing a per-item score over all items.
//! Higher is better; there is no fixed bound and scores can be negative.
//! Evaluation is pure: it reads only the schedule's items and the
//! [`FitnessPolicy`], so any number of schedules can be scored in
//! parallel.
//!
//! The individual rules and their weights are listed in [`rules`].
//!
//! # Example
//! ```
//! use u_timetable::catalog;
//! use u_timetable::fitness::FitnessEvaluator;
//!
//! let problem = catalog::sla_problem()?;
//! let evaluator = FitnessEvaluator::default();
//! let schedule = problem.round_robin_schedule();
//! assert!(evaluator.evaluate(&schedule).is_finite());
//! # Ok::<(), u_timetable::GaError>(())
//! ```

mod policy;
pub mod rules;

pub use policy::{
    FitnessPolicy, DEFAULT_FAR_BUILDINGS, DEFAULT_LINKED_COURSES, LOAD_RESTRICTED_FACILITATOR,
};

use std::collections::{BTreeMap, HashMap};

use crate::models::{Schedule, TimeSlot};

/// Scores schedules under a [`FitnessPolicy`].
#[derive(Debug, Clone, Default)]
pub struct FitnessEvaluator {
    policy: FitnessPolicy,
}

/// Lookups shared by every item of one schedule.
struct ScheduleIndex<'a> {
    by_slot: BTreeMap<TimeSlot, Vec<usize>>,
    facilitator_loads: HashMap<&'a str, usize>,
}

impl<'a> ScheduleIndex<'a> {
    fn build(schedule: &'a Schedule) -> Self {
        let mut facilitator_loads = HashMap::new();
        for item in schedule.items() {
            *facilitator_loads.entry(item.facilitator.as_ref()).or_insert(0) += 1;
        }
        Self {
            by_slot: schedule.indices_by_slot(),
            facilitator_loads,
        }
    }
}

impl FitnessEvaluator {
    /// Creates an evaluator with the given policy.
    pub fn new(policy: FitnessPolicy) -> Self {
        Self { policy }
    }

    /// The active policy.
    pub fn policy(&self) -> &FitnessPolicy {
        &self.policy
    }

    /// Total fitness of a schedule (sum of [`item_scores`](Self::item_scores)).
    pub fn evaluate(&self, schedule: &Schedule) -> f64 {
        self.item_scores(schedule).into_iter().sum()
    }

    /// Per-item scores in activity order.
    pub fn item_scores(&self, schedule: &Schedule) -> Vec<f64> {
        let index = ScheduleIndex::build(schedule);
        (0..schedule.len())
            .map(|idx| self.score_item(schedule, &index, idx))
            .collect()
    }

    fn score_item(&self, schedule: &Schedule, index: &ScheduleIndex<'_>, idx: usize) -> f64 {
        let item = &schedule.items()[idx];
        let slot_peers = index
            .by_slot
            .get(&item.time_slot)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let facilitator = item.facilitator.as_ref();
        let count_in_slot = slot_peers
            .iter()
            .filter(|&&other| schedule.items()[other].facilitator.as_ref() == facilitator)
            .count();
        let total = index.facilitator_loads.get(facilitator).copied().unwrap_or(0);

        rules::room_conflict(schedule, idx, slot_peers)
            + rules::room_size(item.room.capacity, item.activity.expected_enrollment)
            + rules::facilitator_preference(&item.activity, facilitator)
            + rules::slot_load(count_in_slot)
            + rules::total_load(&self.policy, facilitator, total)
            + rules::paired_section(&self.policy, schedule, idx)
            + rules::linked_spacing(&self.policy, schedule, idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Room, ScheduleItem};
    use std::sync::Arc;

    const EPS: f64 = 1e-9;

    fn item(activity: &Arc<Activity>, room: Room, hour: u8, facilitator: &str) -> ScheduleItem {
        ScheduleItem::new(
            activity.clone(),
            Arc::new(room),
            TimeSlot::at_hour(hour),
            Arc::from(facilitator),
        )
    }

    fn course(name: &str, enrollment: u32) -> Arc<Activity> {
        Arc::new(
            Activity::new(name, enrollment)
                .with_preferred(["Glen"])
                .with_other(["Numen"]),
        )
    }

    #[test]
    fn test_single_item_score() {
        let evaluator = FitnessEvaluator::new(FitnessPolicy::empty());
        let act = course("SLA201", 50);
        let schedule = Schedule::new(vec![item(&act, Room::new("R", 50, "Loft"), 10, "Glen")]);

        // size fit +0.3, preferred +0.5, alone in slot +0.2, underloaded -0.4
        let expected = 0.3 + 0.5 + 0.2 - 0.4;
        assert!((evaluator.evaluate(&schedule) - expected).abs() < EPS);
    }

    #[test]
    fn test_evaluate_is_sum_of_item_scores() {
        let evaluator = FitnessEvaluator::default();
        let a = course("SLA201", 50);
        let b = course("SLA303", 60);
        let schedule = Schedule::new(vec![
            item(&a, Room::new("R1", 60, "Loft"), 10, "Glen"),
            item(&b, Room::new("R1", 60, "Loft"), 10, "Numen"),
        ]);
        let scores = evaluator.item_scores(&schedule);
        assert_eq!(scores.len(), 2);
        let sum: f64 = scores.iter().sum();
        assert!((evaluator.evaluate(&schedule) - sum).abs() < EPS);
    }

    #[test]
    fn test_shared_room_and_slot_penalizes_both_items() {
        let evaluator = FitnessEvaluator::new(FitnessPolicy::empty());
        let a = course("SLA201", 50);
        let b = course("SLA303", 50);
        let room = Room::new("Loft 206", 75, "Loft");

        let clash = Schedule::new(vec![
            item(&a, room.clone(), 10, "Glen"),
            item(&b, room.clone(), 10, "Numen"),
        ]);
        let apart = Schedule::new(vec![
            item(&a, room.clone(), 10, "Glen"),
            item(&b, room, 11, "Numen"),
        ]);

        let clash_scores = evaluator.item_scores(&clash);
        let apart_scores = evaluator.item_scores(&apart);
        for i in 0..2 {
            assert!(clash_scores[i] - apart_scores[i] <= -0.5 + EPS);
        }
    }

    #[test]
    fn test_facilitator_preference_in_isolation() {
        let evaluator = FitnessEvaluator::new(FitnessPolicy::empty());
        let act = course("SLA201", 50);
        let room = Room::new("R", 50, "Loft");
        let score_with = |f: &str| {
            evaluator.evaluate(&Schedule::new(vec![item(&act, room.clone(), 10, f)]))
        };

        let preferred = score_with("Glen");
        let other = score_with("Numen");
        let unlisted = score_with("Shaw");
        assert!((preferred - other - 0.3).abs() < EPS);
        assert!((other - unlisted - 0.3).abs() < EPS);
    }

    #[test]
    fn test_double_booked_facilitator() {
        let evaluator = FitnessEvaluator::new(FitnessPolicy::empty());
        let a = course("A", 50);
        let b = course("B", 50);
        let schedule = Schedule::new(vec![
            item(&a, Room::new("R1", 50, "Loft"), 10, "Glen"),
            item(&b, Room::new("R2", 50, "Loft"), 10, "Glen"),
        ]);
        // size +0.3, preferred +0.5, double-booked -0.2, underloaded -0.4
        let expected_each = 0.3 + 0.5 - 0.2 - 0.4;
        for score in evaluator.item_scores(&schedule) {
            assert!((score - expected_each).abs() < EPS);
        }
    }

    #[test]
    fn test_policy_accessor() {
        let policy = FitnessPolicy::empty().with_far_buildings(["Loft"]);
        let evaluator = FitnessEvaluator::new(policy.clone());
        assert_eq!(evaluator.policy(), &policy);
        assert_eq!(FitnessEvaluator::default().policy(), &FitnessPolicy::default());
    }

    #[test]
    fn test_empty_schedule_scores_zero() {
        assert_eq!(FitnessEvaluator::default().evaluate(&Schedule::default()), 0.0);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let problem = crate::catalog::sla_problem().unwrap();
        let evaluator = FitnessEvaluator::default();
        let schedule = problem.round_robin_schedule();
        let first = evaluator.evaluate(&schedule);
        let second = evaluator.evaluate(&schedule);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
