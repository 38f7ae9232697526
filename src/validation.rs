//! Input validation for timetabling runs.
//!
//! Checks problem data and GA configuration before anything is sampled,
//! so invalid runs fail at construction instead of mid-evolution.
//! Detects:
//! - Empty activity, room, time-slot or facilitator lists
//! - Non-positive enrollments and capacities
//! - Out-of-range time slots and duplicate facilitator names
//! - Population, tournament, mutation-rate and convergence settings the
//!   engine cannot run with
//!
//! All issues are collected; validation never stops at the first one.

use std::collections::HashSet;

use crate::ga::GaConfig;
use crate::models::{Activity, Room, TimeSlot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No activities to schedule.
    EmptyActivities,
    /// No rooms to draw from.
    EmptyRooms,
    /// No time slots to draw from.
    EmptyTimeSlots,
    /// No facilitators to draw from.
    EmptyFacilitators,
    /// An activity expects zero students.
    NonPositiveEnrollment,
    /// A room has zero seats.
    NonPositiveCapacity,
    /// A time slot is outside 00:00..=23:59.
    InvalidTimeSlot,
    /// A facilitator name appears twice.
    DuplicateFacilitator,
    /// Population size is zero.
    InvalidPopulationSize,
    /// Population is smaller than one tournament.
    PopulationBelowTournamentSize,
    /// Tournament size is zero.
    InvalidTournamentSize,
    /// Mutation rate is outside [0, 1] or not a number.
    MutationRateOutOfRange,
    /// Convergence window is zero.
    InvalidConvergenceWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates problem data.
///
/// Checks:
/// 1. Activities, rooms, time slots and facilitators are non-empty
/// 2. Every activity expects at least one student
/// 3. Every room has at least one seat
/// 4. Every time slot is a valid time of day
/// 5. Facilitator names are unique
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(
    activities: &[Activity],
    rooms: &[Room],
    time_slots: &[TimeSlot],
    facilitators: &[String],
) -> ValidationResult {
    let mut errors = Vec::new();

    if activities.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyActivities,
            "No activities to schedule",
        ));
    }
    if rooms.is_empty() {
        errors.push(ValidationError::new(ValidationErrorKind::EmptyRooms, "No rooms"));
    }
    if time_slots.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTimeSlots,
            "No time slots",
        ));
    }
    if facilitators.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyFacilitators,
            "No facilitators",
        ));
    }

    for act in activities {
        if act.expected_enrollment == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveEnrollment,
                format!("Activity '{}' has zero expected enrollment", act.label()),
            ));
        }
    }

    for room in rooms {
        if room.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveCapacity,
                format!("Room '{}' has zero capacity", room.name),
            ));
        }
    }

    for slot in time_slots {
        if !slot.is_valid() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeSlot,
                format!("Invalid time slot {}:{}", slot.hour, slot.minute),
            ));
        }
    }

    let mut seen = HashSet::new();
    for name in facilitators {
        if !seen.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateFacilitator,
                format!("Duplicate facilitator: {name}"),
            ));
        }
    }

    into_result(errors)
}

/// Validates a GA configuration.
///
/// Checks:
/// 1. Population size is positive
/// 2. Tournament size is positive and fits in the population
/// 3. Mutation rate is within [0, 1]
/// 4. Convergence window is positive
pub fn validate_config(config: &GaConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.population_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidPopulationSize,
            "Population size must be positive",
        ));
    }

    if config.tournament_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTournamentSize,
            "Tournament size must be positive",
        ));
    } else if config.population_size < config.tournament_size {
        errors.push(ValidationError::new(
            ValidationErrorKind::PopulationBelowTournamentSize,
            format!(
                "Population size {} is smaller than tournament size {}",
                config.population_size, config.tournament_size
            ),
        ));
    }

    if !(0.0..=1.0).contains(&config.mutation_rate) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MutationRateOutOfRange,
            format!(
                "Mutation rate must be between 0.0 and 1.0, got {}",
                config.mutation_rate
            ),
        ));
    }

    if config.convergence_window == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConvergenceWindow,
            "Convergence window must be positive",
        ));
    }

    into_result(errors)
}
