//! Timetabling problem definition.
//!
//! Holds the fixed inputs of a run: the canonical activity list and the
//! domains a gene's facets are drawn from (rooms, time slots,
//! facilitators). A problem is validated once at construction and is
//! immutable afterwards, so samplers can rely on non-empty domains.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GaError;
use crate::models::{Activity, Room, Schedule, ScheduleItem, TimeSlot};
use crate::validation::validate_problem;

/// Raw problem inputs, as supplied by a dataset or a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProblemData {
    /// Activities in canonical order.
    pub activities: Vec<Activity>,
    /// Candidate rooms.
    pub rooms: Vec<Room>,
    /// Candidate time slots.
    pub time_slots: Vec<TimeSlot>,
    /// Candidate facilitator names.
    pub facilitators: Vec<String>,
}

/// Validated, immutable timetabling problem.
#[derive(Debug, Clone)]
pub struct TimetableProblem {
    activities: Vec<Arc<Activity>>,
    rooms: Vec<Arc<Room>>,
    time_slots: Vec<TimeSlot>,
    facilitators: Vec<Arc<str>>,
}

/// The three replaceable facets of a gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    /// Assigned room.
    Room,
    /// Assigned time slot.
    TimeSlot,
    /// Assigned facilitator.
    Facilitator,
}

impl Facet {
    /// All facets, in draw order.
    pub const ALL: [Facet; 3] = [Facet::Room, Facet::TimeSlot, Facet::Facilitator];

    /// Draws a facet uniformly.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl TimetableProblem {
    /// Creates a problem, rejecting empty domains and invalid entries.
    ///
    /// # Errors
    /// [`GaError::InvalidInput`] listing every detected issue.
    pub fn new(
        activities: Vec<Activity>,
        rooms: Vec<Room>,
        time_slots: Vec<TimeSlot>,
        facilitators: Vec<String>,
    ) -> Result<Self, GaError> {
        validate_problem(&activities, &rooms, &time_slots, &facilitators)
            .map_err(GaError::InvalidInput)?;

        Ok(Self {
            activities: activities.into_iter().map(Arc::new).collect(),
            rooms: rooms.into_iter().map(Arc::new).collect(),
            time_slots,
            facilitators: facilitators.into_iter().map(Arc::from).collect(),
        })
    }

    /// Creates a problem from raw data.
    pub fn from_data(data: ProblemData) -> Result<Self, GaError> {
        Self::new(data.activities, data.rooms, data.time_slots, data.facilitators)
    }

    /// Converts back into raw data.
    pub fn to_data(&self) -> ProblemData {
        ProblemData {
            activities: self.activities.iter().map(|a| a.as_ref().clone()).collect(),
            rooms: self.rooms.iter().map(|r| r.as_ref().clone()).collect(),
            time_slots: self.time_slots.clone(),
            facilitators: self.facilitators.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Activities in canonical order.
    pub fn activities(&self) -> &[Arc<Activity>] {
        &self.activities
    }

    /// Candidate rooms.
    pub fn rooms(&self) -> &[Arc<Room>] {
        &self.rooms
    }

    /// Candidate time slots.
    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    /// Candidate facilitators.
    pub fn facilitators(&self) -> &[Arc<str>] {
        &self.facilitators
    }

    /// Draws a room uniformly.
    pub fn random_room<R: Rng>(&self, rng: &mut R) -> Arc<Room> {
        self.rooms[rng.random_range(0..self.rooms.len())].clone()
    }

    /// Draws a time slot uniformly.
    pub fn random_time_slot<R: Rng>(&self, rng: &mut R) -> TimeSlot {
        self.time_slots[rng.random_range(0..self.time_slots.len())]
    }

    /// Draws a facilitator uniformly.
    pub fn random_facilitator<R: Rng>(&self, rng: &mut R) -> Arc<str> {
        self.facilitators[rng.random_range(0..self.facilitators.len())].clone()
    }

    /// Builds a schedule with every facet of every gene drawn uniformly.
    ///
    /// No feasibility filtering: clashes and bad fits are left for the
    /// fitness function to score.
    pub fn random_schedule<R: Rng>(&self, rng: &mut R) -> Schedule {
        let items = self
            .activities
            .iter()
            .map(|activity| {
                ScheduleItem::new(
                    activity.clone(),
                    self.random_room(rng),
                    self.random_time_slot(rng),
                    self.random_facilitator(rng),
                )
            })
            .collect();
        Schedule::new(items)
    }

    /// Deterministic schedule assigning the i-th room, slot and facilitator
    /// (cycling) to the i-th activity. Useful as a fixed baseline.
    pub fn round_robin_schedule(&self) -> Schedule {
        let items = self
            .activities
            .iter()
            .enumerate()
            .map(|(i, activity)| {
                ScheduleItem::new(
                    activity.clone(),
                    self.rooms[i % self.rooms.len()].clone(),
                    self.time_slots[i % self.time_slots.len()],
                    self.facilitators[i % self.facilitators.len()].clone(),
                )
            })
            .collect();
        Schedule::new(items)
    }
}
