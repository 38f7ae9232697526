//! Business-rule parameters for fitness scoring.
//!
//! The scoring rules are generic, but three of them single out named
//! entities: a pair of linked courses whose sections should be spread
//! apart, a set of far-away buildings, and one facilitator with a
//! tighter load cap than everyone else. These live here as explicit
//! policy entries rather than being buried in the rules.

use serde::{Deserialize, Serialize};

/// Courses whose sections are scheduled relative to each other.
pub const DEFAULT_LINKED_COURSES: [&str; 2] = ["SLA100", "SLA191"];

/// Buildings far enough from the rest that back-to-back sessions
/// across the boundary are penalized.
pub const DEFAULT_FAR_BUILDINGS: [&str; 2] = ["Roman", "Beach"];

/// Facilitator who should carry at most two activities.
///
/// Every other facilitator is pushed toward at least three; this one is
/// penalized at exactly three and exempt from the lower bound.
pub const LOAD_RESTRICTED_FACILITATOR: &str = "Tyler";

/// Named entities referenced by the scoring rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessPolicy {
    /// Course names subject to the section-spacing rules.
    pub linked_courses: Vec<String>,
    /// Buildings considered far away.
    pub far_buildings: Vec<String>,
    /// Facilitator with the asymmetric load rule, if any.
    pub load_restricted_facilitator: Option<String>,
}

impl Default for FitnessPolicy {
    fn default() -> Self {
        Self {
            linked_courses: DEFAULT_LINKED_COURSES.iter().map(|s| s.to_string()).collect(),
            far_buildings: DEFAULT_FAR_BUILDINGS.iter().map(|s| s.to_string()).collect(),
            load_restricted_facilitator: Some(LOAD_RESTRICTED_FACILITATOR.to_string()),
        }
    }
}

impl FitnessPolicy {
    /// A policy with no linked courses, no far buildings and no
    /// load-restricted facilitator.
    pub fn empty() -> Self {
        Self {
            linked_courses: Vec::new(),
            far_buildings: Vec::new(),
            load_restricted_facilitator: None,
        }
    }

    /// Sets the linked course names.
    pub fn with_linked_courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.linked_courses = courses.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the far buildings.
    pub fn with_far_buildings<I, S>(mut self, buildings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.far_buildings = buildings.into_iter().map(Into::into).collect();
        self
    }

    /// Sets (or clears) the load-restricted facilitator.
    pub fn with_load_restricted_facilitator(mut self, facilitator: Option<String>) -> Self {
        self.load_restricted_facilitator = facilitator;
        self
    }

    /// Whether `course` is one of the linked courses.
    pub fn is_linked_course(&self, course: &str) -> bool {
        self.linked_courses.iter().any(|c| c == course)
    }

    /// Whether `facilitator` is the load-restricted facilitator.
    pub fn is_load_restricted(&self, facilitator: &str) -> bool {
        self.load_restricted_facilitator.as_deref() == Some(facilitator)
    }
}
