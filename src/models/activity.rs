//! Activity (course section) model.
//!
//! An activity is one course offering that must be placed into a room and
//! a time slot and be led by a facilitator. Several sections of the same
//! course share a name and are told apart by their section tag.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A course activity to be timetabled.
///
/// Immutable once the problem is built; chromosomes reference activities
/// by position in the canonical activity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Course name (shared by all sections of the course).
    pub name: String,
    /// Expected number of enrolled students.
    pub expected_enrollment: u32,
    /// Facilitators the course prefers.
    pub preferred_facilitators: BTreeSet<String>,
    /// Facilitators that are acceptable but not preferred.
    pub other_facilitators: BTreeSet<String>,
    /// Section tag for co-offered sections (e.g. "A", "B").
    #[serde(default)]
    pub section: Option<String>,
}

/// How well a facilitator matches an activity's staffing preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilitatorMatch {
    /// In the preferred set.
    Preferred,
    /// In the other-acceptable set.
    Acceptable,
    /// In neither set.
    Unlisted,
}

impl Activity {
    /// Creates an activity with no facilitator preferences.
    pub fn new(name: impl Into<String>, expected_enrollment: u32) -> Self {
        Self {
            name: name.into(),
            expected_enrollment,
            preferred_facilitators: BTreeSet::new(),
            other_facilitators: BTreeSet::new(),
            section: None,
        }
    }

    /// Sets the preferred facilitators.
    pub fn with_preferred<I, S>(mut self, facilitators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_facilitators = facilitators.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the other acceptable facilitators.
    pub fn with_other<I, S>(mut self, facilitators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.other_facilitators = facilitators.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the section tag.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Classifies a facilitator against this activity's preferences.
    ///
    /// The preferred set wins when a name appears in both sets.
    pub fn facilitator_match(&self, facilitator: &str) -> FacilitatorMatch {
        if self.preferred_facilitators.contains(facilitator) {
            FacilitatorMatch::Preferred
        } else if self.other_facilitators.contains(facilitator) {
            FacilitatorMatch::Acceptable
        } else {
            FacilitatorMatch::Unlisted
        }
    }

    /// Display label: course name followed by the section tag, if any.
    pub fn label(&self) -> String {
        match &self.section {
            Some(section) => format!("{}{}", self.name, section),
            None => self.name.clone(),
        }
    }
}
