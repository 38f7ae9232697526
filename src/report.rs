//! Timetable report.
//!
//! Summarizes a finished schedule for people: the overall fitness, every
//! activity grouped by time slot, the load per facilitator, and a few
//! headline counts of constraint trouble.
//!
//! | Count | Definition |
//! |-------|-----------|
//! | Room conflicts | Pairs of items sharing room and time slot |
//! | Facilitator clashes | Pairs of items sharing facilitator and time slot |
//! | Undersized rooms | Items whose room is smaller than the enrollment |

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::fitness::FitnessEvaluator;
use crate::models::{Schedule, TimeSlot};

/// One line of the timetable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    /// Start time.
    pub time_slot: TimeSlot,
    /// Activity label (name plus section).
    pub activity: String,
    /// Room name.
    pub room: String,
    /// Room capacity.
    pub capacity: u32,
    /// Facilitator name.
    pub facilitator: String,
    /// Expected enrollment.
    pub expected_enrollment: u32,
}

/// Human-readable summary of a schedule.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleReport {
    /// Total fitness.
    pub fitness: f64,
    /// Items sorted by (hour, activity name).
    pub entries: Vec<ReportEntry>,
    /// Activities per facilitator, sorted by name.
    pub facilitator_loads: BTreeMap<String, usize>,
    /// Pairs of items sharing a room and a slot.
    pub room_conflicts: usize,
    /// Pairs of items sharing a facilitator and a slot.
    pub facilitator_clashes: usize,
    /// Items placed in a room smaller than their enrollment.
    pub undersized_rooms: usize,
}

impl ScheduleReport {
    /// Builds the report for `schedule`.
    pub fn calculate(schedule: &Schedule, evaluator: &FitnessEvaluator) -> Self {
        let mut entries: Vec<ReportEntry> = schedule
            .items()
            .iter()
            .map(|item| ReportEntry {
                time_slot: item.time_slot,
                activity: item.activity.label(),
                room: item.room.name.clone(),
                capacity: item.room.capacity,
                facilitator: item.facilitator.to_string(),
                expected_enrollment: item.activity.expected_enrollment,
            })
            .collect();
        entries.sort_by(|a, b| {
            a.time_slot
                .hour
                .cmp(&b.time_slot.hour)
                .then_with(|| a.activity.cmp(&b.activity))
        });

        let facilitator_loads = schedule
            .facilitator_loads()
            .into_iter()
            .map(|(name, load)| (name.to_string(), load))
            .collect();

        let mut room_conflicts = 0;
        let mut facilitator_clashes = 0;
        let items = schedule.items();
        for indices in schedule.indices_by_slot().values() {
            for (pos, &i) in indices.iter().enumerate() {
                for &j in &indices[pos + 1..] {
                    if items[i].room == items[j].room {
                        room_conflicts += 1;
                    }
                    if items[i].facilitator == items[j].facilitator {
                        facilitator_clashes += 1;
                    }
                }
            }
        }

        let undersized_rooms = items
            .iter()
            .filter(|item| item.room.capacity < item.activity.expected_enrollment)
            .count();

        Self {
            fitness: evaluator.evaluate(schedule),
            entries,
            facilitator_loads,
            room_conflicts,
            facilitator_clashes,
            undersized_rooms,
        }
    }
}

impl fmt::Display for ScheduleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== BEST SCHEDULE ===")?;
        writeln!(f, "Overall Fitness Score: {:.2}", self.fitness)?;

        let mut current: Option<TimeSlot> = None;
        for entry in &self.entries {
            if current != Some(entry.time_slot) {
                current = Some(entry.time_slot);
                writeln!(f)?;
                writeln!(f, "=== {} ===", entry.time_slot)?;
            }
            writeln!(f)?;
            writeln!(f, "Activity: {}", entry.activity)?;
            writeln!(f, "Room: {} (Capacity: {})", entry.room, entry.capacity)?;
            writeln!(f, "Facilitator: {}", entry.facilitator)?;
            writeln!(f, "Expected Enrollment: {}", entry.expected_enrollment)?;
            writeln!(f, "{}", "-".repeat(40))?;
        }

        writeln!(f)?;
        writeln!(f, "=== FACILITATOR WORKLOAD ===")?;
        for (name, load) in &self.facilitator_loads {
            writeln!(f, "{name}: {load} activities")?;
        }

        writeln!(f)?;
        writeln!(f, "Room conflicts: {}", self.room_conflicts)?;
        writeln!(f, "Facilitator clashes: {}", self.facilitator_clashes)?;
        write!(f, "Undersized rooms: {}", self.undersized_rooms)
    }
}
