//! Timetabling domain models.
//!
//! Immutable value types describing what is being placed ([`Activity`]),
//! where ([`Room`]), when ([`TimeSlot`]), and the resulting candidate
//! solution ([`Schedule`] of [`ScheduleItem`]s).
//!
//! # Genetic Mapping
//!
//! | u-timetable | GA term |
//! |-------------|---------|
//! | Schedule | Chromosome / individual |
//! | ScheduleItem | Gene |
//! | Room, TimeSlot, facilitator | Gene facets |

mod activity;
mod room;
mod schedule;
mod time_slot;

pub use activity::{Activity, FacilitatorMatch};
pub use room::Room;
pub use schedule::{Schedule, ScheduleItem};
pub use time_slot::TimeSlot;
