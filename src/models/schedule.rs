//! Schedule (solution) model.
//!
//! A schedule is one complete candidate timetable: exactly one
//! [`ScheduleItem`] per activity, in the order of the problem's activity
//! list. Position encodes which activity a gene belongs to, so every
//! operator that builds a schedule must preserve that order.
//!
//! A `Schedule` is a plain value. Fitness is not stored here; see
//! [`crate::ga::ScheduleChromosome`] for the memoized score.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::{Activity, Room, TimeSlot};

/// One activity's room, time slot and facilitator assignment (a gene).
///
/// Activity and room are shared with the problem definition, so cloning
/// an item is cheap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// The activity being placed.
    pub activity: Arc<Activity>,
    /// Assigned room.
    pub room: Arc<Room>,
    /// Assigned start time.
    pub time_slot: TimeSlot,
    /// Assigned facilitator, by name.
    pub facilitator: Arc<str>,
}

impl ScheduleItem {
    /// Creates an item.
    pub fn new(
        activity: Arc<Activity>,
        room: Arc<Room>,
        time_slot: TimeSlot,
        facilitator: Arc<str>,
    ) -> Self {
        Self {
            activity,
            room,
            time_slot,
            facilitator,
        }
    }
}

/// A complete timetable (chromosome).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    items: Vec<ScheduleItem>,
}

impl Schedule {
    /// Creates a schedule from items ordered like the activity list.
    pub fn new(items: Vec<ScheduleItem>) -> Self {
        Self { items }
    }

    /// Items in activity order.
    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the schedule has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items assigned to each facilitator, keyed by name.
    pub fn facilitator_loads(&self) -> BTreeMap<&str, usize> {
        let mut loads = BTreeMap::new();
        for item in &self.items {
            *loads.entry(item.facilitator.as_ref()).or_insert(0) += 1;
        }
        loads
    }

    /// Item indices grouped by time slot.
    pub fn indices_by_slot(&self) -> BTreeMap<TimeSlot, Vec<usize>> {
        let mut by_slot: BTreeMap<TimeSlot, Vec<usize>> = BTreeMap::new();
        for (idx, item) in self.items.iter().enumerate() {
            by_slot.entry(item.time_slot).or_default().push(idx);
        }
        by_slot
    }

    /// Whether item `i` is assigned to `activities[i]` for every position.
    ///
    /// Activities are compared by value.
    pub fn matches_activities(&self, activities: &[Arc<Activity>]) -> bool {
        self.items.len() == activities.len()
            && self
                .items
                .iter()
                .zip(activities)
                .all(|(item, act)| item.activity == *act)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, room: &str, hour: u8, facilitator: &str) -> ScheduleItem {
        ScheduleItem::new(
            Arc::new(Activity::new(name, 30)),
            Arc::new(Room::new(room, 40, "Slater")),
            TimeSlot::at_hour(hour),
            Arc::from(facilitator),
        )
    }

    #[test]
    fn test_schedule_accessors() {
        let schedule = Schedule::new(vec![
            item("A", "R1", 10, "Lock"),
            item("B", "R2", 11, "Glen"),
        ]);
        assert_eq!(schedule.len(), 2);
        assert!(!schedule.is_empty());
        assert_eq!(schedule.items()[1].activity.name, "B");
        assert!(Schedule::default().is_empty());
    }

    #[test]
    fn test_facilitator_loads() {
        let schedule = Schedule::new(vec![
            item("A", "R1", 10, "Lock"),
            item("B", "R2", 11, "Lock"),
            item("C", "R2", 12, "Glen"),
        ]);
        let loads = schedule.facilitator_loads();
        assert_eq!(loads.get("Lock"), Some(&2));
        assert_eq!(loads.get("Glen"), Some(&1));
        assert_eq!(loads.get("Shaw"), None);
    }

    #[test]
    fn test_indices_by_slot() {
        let schedule = Schedule::new(vec![
            item("A", "R1", 11, "Lock"),
            item("B", "R2", 10, "Glen"),
            item("C", "R3", 11, "Shaw"),
        ]);
        let by_slot = schedule.indices_by_slot();
        assert_eq!(by_slot[&TimeSlot::at_hour(10)], vec![1]);
        assert_eq!(by_slot[&TimeSlot::at_hour(11)], vec![0, 2]);
    }

    #[test]
    fn test_matches_activities() {
        let schedule = Schedule::new(vec![item("A", "R1", 10, "Lock"), item("B", "R1", 10, "Lock")]);
        let acts = vec![Arc::new(Activity::new("A", 30)), Arc::new(Activity::new("B", 30))];
        assert!(schedule.matches_activities(&acts));

        let reversed: Vec<_> = acts.iter().rev().cloned().collect();
        assert!(!schedule.matches_activities(&reversed));
        assert!(!schedule.matches_activities(&acts[..1]));
    }
}
