// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly availability storage codec.
//!
//! Availability is persisted on tutor and student records as a single string
//! field. The current format is a JSON array of slot IDs like `"Mon-9:00 AM"`;
//! two legacy formats are still read: an array of `{day, time, available}`
//! objects, and free-text descriptions (which decode to an empty grid).

use serde::Deserialize;
use std::collections::BTreeSet;

/// Days of the week, in grid column order.
pub const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Hourly time slots shown in the grid.
pub const TIME_SLOTS: [&str; 9] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
    "5:00 PM",
];

/// Legacy verbose slot representation.
#[derive(Debug, Deserialize)]
struct LegacySlot {
    day: String,
    time: String,
}

/// A set of selected weekly availability slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySet {
    slots: BTreeSet<String>,
}

impl AvailabilitySet {
    /// Slot ID for a day/time pair, e.g. `"Mon-9:00 AM"`.
    pub fn slot_id(day: &str, time: &str) -> String {
        format!("{}-{}", day, time)
    }

    /// Decode a stored availability string.
    ///
    /// Unparseable input (including legacy free-text descriptions) yields an
    /// empty set rather than an error.
    pub fn parse(stored: &str) -> Self {
        if stored.trim().is_empty() {
            return Self::default();
        }

        // Compact format: array of slot ID strings
        if let Ok(ids) = serde_json::from_str::<Vec<String>>(stored) {
            return Self {
                slots: ids.into_iter().collect(),
            };
        }

        // Legacy format: array of {day, time, available} objects
        if let Ok(legacy) = serde_json::from_str::<Vec<LegacySlot>>(stored) {
            return Self {
                slots: legacy
                    .into_iter()
                    .map(|slot| Self::slot_id(&slot.day, &slot.time))
                    .collect(),
            };
        }

        // Free-text description: start with an empty grid
        Self::default()
    }

    /// Encode as the compact JSON slot-ID array.
    pub fn to_stored(&self) -> String {
        let ids: Vec<&str> = self.slots.iter().map(String::as_str).collect();
        serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
    }

    /// Whether a given day/time slot is selected.
    pub fn contains(&self, day: &str, time: &str) -> bool {
        self.slots.contains(&Self::slot_id(day, time))
    }

    /// Toggle a slot, returning whether it is now selected.
    pub fn toggle(&mut self, day: &str, time: &str) -> bool {
        let id = Self::slot_id(day, time);
        if self.slots.remove(&id) {
            false
        } else {
            self.slots.insert(id);
            true
        }
    }

    /// Select or deselect a slot explicitly (drag-selection).
    pub fn set(&mut self, day: &str, time: &str, selected: bool) {
        let id = Self::slot_id(day, time);
        if selected {
            self.slots.insert(id);
        } else {
            self.slots.remove(&id);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_format() {
        let set = AvailabilitySet::parse(r#"["Mon-9:00 AM","Tue-1:00 PM"]"#);
        assert_eq!(set.len(), 2);
        assert!(set.contains("Mon", "9:00 AM"));
        assert!(set.contains("Tue", "1:00 PM"));
        assert!(!set.contains("Wed", "9:00 AM"));
    }

    #[test]
    fn test_parse_legacy_object_format() {
        let set = AvailabilitySet::parse(
            r#"[{"day":"Fri","time":"3:00 PM","available":true},{"day":"Sat","time":"10:00 AM","available":true}]"#,
        );
        assert!(set.contains("Fri", "3:00 PM"));
        assert!(set.contains("Sat", "10:00 AM"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_parse_free_text_yields_empty_grid() {
        assert!(AvailabilitySet::parse("weekday evenings and Sunday mornings").is_empty());
        assert!(AvailabilitySet::parse("").is_empty());
    }

    #[test]
    fn test_toggle_and_store_round_trip() {
        let mut set = AvailabilitySet::default();
        assert!(set.toggle("Mon", "9:00 AM"));
        assert!(set.toggle("Wed", "2:00 PM"));
        assert!(!set.toggle("Mon", "9:00 AM")); // second toggle deselects

        let stored = set.to_stored();
        let reparsed = AvailabilitySet::parse(&stored);
        assert_eq!(reparsed, set);
        assert!(reparsed.contains("Wed", "2:00 PM"));
        assert!(!reparsed.contains("Mon", "9:00 AM"));
    }

    #[test]
    fn test_drag_set_is_idempotent() {
        let mut set = AvailabilitySet::default();
        set.set("Thu", "11:00 AM", true);
        set.set("Thu", "11:00 AM", true);
        assert_eq!(set.len(), 1);
        set.set("Thu", "11:00 AM", false);
        assert!(set.is_empty());
    }
}
