//! Individual scoring rules.
//!
//! Each rule returns its additive contribution to one item's score.
//! Rules never short-circuit each other: every applicable rule fires.
//!
//! | Rule | Condition | Score |
//! |------|-----------|-------|
//! | Room conflict | per other item sharing room and slot | -0.5 |
//! | Room size | capacity < enrollment | -0.5 |
//! | | capacity > 6x enrollment | -0.4 |
//! | | capacity > 3x enrollment | -0.2 |
//! | | otherwise | +0.3 |
//! | Facilitator preference | preferred / other / unlisted | +0.5 / +0.2 / -0.1 |
//! | Slot load | facilitator alone in slot / double-booked | +0.2 / -0.2 |
//! | Total load | > 4 | -0.5 |
//! | | restricted facilitator at exactly 3 | -0.4 |
//! | | anyone else below 3 | -0.4 |
//! | Paired section | > 4 hours apart / same hour | +0.5 / -0.5 |
//! | Linked spacing | per other linked item 1h / 2h / 0h apart | +0.5 / +0.25 / -0.25 |
//! | | 1h apart with exactly one room in a far building | additional -0.4 |

use crate::models::{Activity, FacilitatorMatch, Schedule};

use super::FitnessPolicy;

pub(crate) const ROOM_CONFLICT_PENALTY: f64 = -0.5;

pub(crate) const ROOM_TOO_SMALL: f64 = -0.5;
pub(crate) const ROOM_OVER_6X: f64 = -0.4;
pub(crate) const ROOM_OVER_3X: f64 = -0.2;
pub(crate) const ROOM_GOOD_FIT: f64 = 0.3;

pub(crate) const PREFERRED_FACILITATOR: f64 = 0.5;
pub(crate) const ACCEPTABLE_FACILITATOR: f64 = 0.2;
pub(crate) const UNLISTED_FACILITATOR: f64 = -0.1;

pub(crate) const SINGLE_SLOT_LOAD: f64 = 0.2;
pub(crate) const DOUBLE_BOOKED: f64 = -0.2;

pub(crate) const OVERLOADED: f64 = -0.5;
pub(crate) const RESTRICTED_AT_THREE: f64 = -0.4;
pub(crate) const UNDERLOADED: f64 = -0.4;

pub(crate) const SECTIONS_SPREAD: f64 = 0.5;
pub(crate) const SECTIONS_SAME_HOUR: f64 = -0.5;

pub(crate) const LINKED_CONSECUTIVE: f64 = 0.5;
pub(crate) const LINKED_FAR_WALK: f64 = -0.4;
pub(crate) const LINKED_TWO_APART: f64 = 0.25;
pub(crate) const LINKED_SAME_HOUR: f64 = -0.25;

/// Room double-booking: penalty per other item in `slot_peers` that uses
/// the same room as item `idx`.
///
/// `slot_peers` are the indices of all items in `idx`'s time slot
/// (including `idx`). A conflicting pair is penalized once from each side.
pub(crate) fn room_conflict(schedule: &Schedule, idx: usize, slot_peers: &[usize]) -> f64 {
    let items = schedule.items();
    let room = &items[idx].room;
    let conflicts = slot_peers
        .iter()
        .filter(|&&other| other != idx && items[other].room == *room)
        .count();
    conflicts as f64 * ROOM_CONFLICT_PENALTY
}

/// Room size fit. Branches are checked in order and only one applies.
pub(crate) fn room_size(capacity: u32, expected_enrollment: u32) -> f64 {
    let capacity = u64::from(capacity);
    let enrollment = u64::from(expected_enrollment);
    if capacity < enrollment {
        ROOM_TOO_SMALL
    } else if capacity > 6 * enrollment {
        ROOM_OVER_6X
    } else if capacity > 3 * enrollment {
        ROOM_OVER_3X
    } else {
        ROOM_GOOD_FIT
    }
}

/// Facilitator preference for the activity.
pub(crate) fn facilitator_preference(activity: &Activity, facilitator: &str) -> f64 {
    match activity.facilitator_match(facilitator) {
        FacilitatorMatch::Preferred => PREFERRED_FACILITATOR,
        FacilitatorMatch::Acceptable => ACCEPTABLE_FACILITATOR,
        FacilitatorMatch::Unlisted => UNLISTED_FACILITATOR,
    }
}

/// Facilitator load within one time slot, counting the item itself.
pub(crate) fn slot_load(count_in_slot: usize) -> f64 {
    match count_in_slot {
        0 => 0.0,
        1 => SINGLE_SLOT_LOAD,
        _ => DOUBLE_BOOKED,
    }
}

/// Facilitator load across the whole schedule.
///
/// The restricted facilitator is penalized at exactly three activities
/// and exempt from the under-load penalty; everyone else is penalized
/// below three. Over four is penalized for everyone.
pub(crate) fn total_load(policy: &FitnessPolicy, facilitator: &str, total: usize) -> f64 {
    let restricted = policy.is_load_restricted(facilitator);
    if total > 4 {
        OVERLOADED
    } else if restricted && total == 3 {
        RESTRICTED_AT_THREE
    } else if total < 3 && !restricted {
        UNDERLOADED
    } else {
        0.0
    }
}

/// Spacing between item `idx` and the first other section of the same
/// linked course.
///
/// Contributes nothing for non-linked courses or when no other section
/// is scheduled.
pub(crate) fn paired_section(policy: &FitnessPolicy, schedule: &Schedule, idx: usize) -> f64 {
    let items = schedule.items();
    let item = &items[idx];
    if !policy.is_linked_course(&item.activity.name) {
        return 0.0;
    }

    let other_section = items.iter().find(|other| {
        other.activity.name == item.activity.name && other.activity.section != item.activity.section
    });

    match other_section {
        Some(other) => match item.time_slot.hour_distance(&other.time_slot) {
            d if d > 4 => SECTIONS_SPREAD,
            0 => SECTIONS_SAME_HOUR,
            _ => 0.0,
        },
        None => 0.0,
    }
}

/// Spacing between item `idx` and every other item of any linked course.
///
/// Each other linked item contributes independently.
pub(crate) fn linked_spacing(policy: &FitnessPolicy, schedule: &Schedule, idx: usize) -> f64 {
    let items = schedule.items();
    let item = &items[idx];
    if !policy.is_linked_course(&item.activity.name) {
        return 0.0;
    }
    let item_far = item.room.in_any_building(&policy.far_buildings);

    items
        .iter()
        .enumerate()
        .filter(|(other_idx, other)| {
            *other_idx != idx && policy.is_linked_course(&other.activity.name)
        })
        .map(|(_, other)| match item.time_slot.hour_distance(&other.time_slot) {
            1 => {
                let other_far = other.room.in_any_building(&policy.far_buildings);
                if item_far != other_far {
                    LINKED_CONSECUTIVE + LINKED_FAR_WALK
                } else {
                    LINKED_CONSECUTIVE
                }
            }
            2 => LINKED_TWO_APART,
            0 => LINKED_SAME_HOUR,
            _ => 0.0,
        })
        .sum()
}
