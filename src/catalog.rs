//! The SLA course timetabling dataset.
//!
//! Eleven activities (two sections each of SLA100 and SLA191, and single
//! sections of seven further courses), nine rooms across five buildings,
//! six hourly slots from 10:00 to 15:00 and ten facilitators.
//!
//! Names line up with [`FitnessPolicy::default`](crate::fitness::FitnessPolicy):
//! SLA100/SLA191 are the linked courses, Roman and Beach the far
//! buildings, and Tyler the load-restricted facilitator.

use crate::error::GaError;
use crate::ga::{ProblemData, TimetableProblem};
use crate::models::{Activity, Room, TimeSlot};

/// Facilitator names.
pub const FACILITATORS: [&str; 10] = [
    "Lock", "Glen", "Banks", "Richards", "Shaw", "Singer", "Uther", "Tyler", "Numen", "Zeldin",
];

const INTRO_PREFERRED: [&str; 4] = ["Glen", "Lock", "Banks", "Zeldin"];
const INTRO_OTHER: [&str; 2] = ["Numen", "Richards"];

/// The eleven SLA activities in canonical order.
pub fn activities() -> Vec<Activity> {
    let intro = |name: &str, section: &str| {
        Activity::new(name, 50)
            .with_preferred(INTRO_PREFERRED)
            .with_other(INTRO_OTHER)
            .with_section(section)
    };

    vec![
        intro("SLA100", "A"),
        intro("SLA100", "B"),
        intro("SLA191", "A"),
        intro("SLA191", "B"),
        Activity::new("SLA201", 50)
            .with_preferred(["Glen", "Banks", "Zeldin", "Shaw"])
            .with_other(["Numen", "Richards", "Singer"]),
        Activity::new("SLA291", 50)
            .with_preferred(["Lock", "Banks", "Zeldin", "Singer"])
            .with_other(["Numen", "Richards", "Shaw", "Tyler"]),
        Activity::new("SLA303", 60)
            .with_preferred(["Glen", "Zeldin", "Banks"])
            .with_other(["Numen", "Singer", "Shaw"]),
        Activity::new("SLA304", 25)
            .with_preferred(["Glen", "Banks", "Tyler"])
            .with_other(["Numen", "Singer", "Shaw", "Richards", "Uther", "Zeldin"]),
        Activity::new("SLA394", 20)
            .with_preferred(["Tyler", "Singer"])
            .with_other(["Richards", "Zeldin"]),
        Activity::new("SLA449", 60)
            .with_preferred(["Tyler", "Singer", "Shaw"])
            .with_other(["Zeldin", "Uther"]),
        Activity::new("SLA451", 100)
            .with_preferred(["Tyler", "Singer", "Shaw"])
            .with_other(["Zeldin", "Uther", "Richards", "Banks"]),
    ]
}

/// The nine rooms.
pub fn rooms() -> Vec<Room> {
    vec![
        Room::new("Slater 003", 45, "Slater"),
        Room::new("Roman 216", 30, "Roman"),
        Room::new("Loft 206", 75, "Loft"),
        Room::new("Roman 201", 50, "Roman"),
        Room::new("Loft 310", 108, "Loft"),
        Room::new("Beach 201", 60, "Beach"),
        Room::new("Beach 301", 75, "Beach"),
        Room::new("Logos 325", 450, "Logos"),
        Room::new("Frank 119", 60, "Frank"),
    ]
}

/// Hourly slots from 10:00 to 15:00.
pub fn time_slots() -> Vec<TimeSlot> {
    (10..=15).map(TimeSlot::at_hour).collect()
}

/// The whole dataset as raw data.
pub fn sla_data() -> ProblemData {
    ProblemData {
        activities: activities(),
        rooms: rooms(),
        time_slots: time_slots(),
        facilitators: FACILITATORS.iter().map(|f| f.to_string()).collect(),
    }
}

/// The whole dataset as a validated problem.
pub fn sla_problem() -> Result<TimetableProblem, GaError> {
    TimetableProblem::from_data(sla_data())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_dimensions() {
        let problem = sla_problem().unwrap();
        assert_eq!(problem.activities().len(), 11);
        assert_eq!(problem.rooms().len(), 9);
        assert_eq!(problem.time_slots().len(), 6);
        assert_eq!(problem.facilitators().len(), 10);
    }

    #[test]
    fn test_sections_of_linked_courses() {
        let acts = activities();
        let labels: Vec<String> = acts.iter().take(4).map(Activity::label).collect();
        assert_eq!(labels, vec!["SLA100A", "SLA100B", "SLA191A", "SLA191B"]);
        assert!(acts[4..].iter().all(|a| a.section.is_none()));
    }

    #[test]
    fn test_time_slots_are_hourly() {
        let slots = time_slots();
        assert_eq!(slots.first(), Some(&TimeSlot::at_hour(10)));
        assert_eq!(slots.last(), Some(&TimeSlot::at_hour(15)));
        assert!(slots.iter().all(|s| s.minute == 0));
    }

    #[test]
    fn test_every_listed_facilitator_exists() {
        for act in activities() {
            for name in act.preferred_facilitators.iter().chain(&act.other_facilitators) {
                assert!(FACILITATORS.contains(&name.as_str()), "unknown facilitator {name}");
            }
        }
    }
}
