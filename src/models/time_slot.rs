//! Time slot model.
//!
//! A slot is identified by its start time of day. Slots order by
//! (hour, minute) and render as zero-padded `HH:MM`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A start time an activity can be placed at.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TimeSlot {
    /// Hour of day (0..=23).
    pub hour: u8,
    /// Minute of hour (0..=59).
    pub minute: u8,
}

impl TimeSlot {
    /// Creates a time slot.
    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Creates a slot on the hour.
    pub fn at_hour(hour: u8) -> Self {
        Self::new(hour, 0)
    }

    /// Whether hour and minute are within a day.
    pub fn is_valid(&self) -> bool {
        self.hour < 24 && self.minute < 60
    }

    /// Absolute difference in whole hours, ignoring minutes.
    pub fn hour_distance(&self, other: &TimeSlot) -> u8 {
        self.hour.abs_diff(other.hour)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(TimeSlot::new(9, 5).to_string(), "09:05");
        assert_eq!(TimeSlot::at_hour(15).to_string(), "15:00");
    }

    #[test]
    fn test_ordering() {
        let mut slots = vec![
            TimeSlot::new(13, 0),
            TimeSlot::new(10, 30),
            TimeSlot::new(10, 0),
        ];
        slots.sort();
        assert_eq!(
            slots,
            vec![TimeSlot::new(10, 0), TimeSlot::new(10, 30), TimeSlot::new(13, 0)]
        );
    }

    #[test]
    fn test_hour_distance() {
        let a = TimeSlot::at_hour(10);
        let b = TimeSlot::new(14, 30);
        assert_eq!(a.hour_distance(&b), 4);
        assert_eq!(b.hour_distance(&a), 4);
        assert_eq!(a.hour_distance(&a), 0);
    }

    #[test]
    fn test_validity() {
        assert!(TimeSlot::new(23, 59).is_valid());
        assert!(!TimeSlot::new(24, 0).is_valid());
        assert!(!TimeSlot::new(10, 60).is_valid());
    }
}
