use serde::{Deserialize, Serialize};
use std::fmt;

/// Teaching days of the week. The teaching week runs Sunday through Thursday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassDay {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl ClassDay {
    pub const ALL: [ClassDay; 5] = [
        ClassDay::Sunday,
        ClassDay::Monday,
        ClassDay::Tuesday,
        ClassDay::Wednesday,
        ClassDay::Thursday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassDay::Sunday => "Sunday",
            ClassDay::Monday => "Monday",
            ClassDay::Tuesday => "Tuesday",
            ClassDay::Wednesday => "Wednesday",
            ClassDay::Thursday => "Thursday",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "Sunday" => Some(ClassDay::Sunday),
            "Monday" => Some(ClassDay::Monday),
            "Tuesday" => Some(ClassDay::Tuesday),
            "Wednesday" => Some(ClassDay::Wednesday),
            "Thursday" => Some(ClassDay::Thursday),
            _ => None,
        }
    }
}

impl fmt::Display for ClassDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed class periods of a teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "9:00–10:30 AM")]
    Period1,
    #[serde(rename = "10:40–12:10 PM")]
    Period2,
    #[serde(rename = "12:20–1:50 PM")]
    Period3,
    #[serde(rename = "2:00–3:30 PM")]
    Period4,
    #[serde(rename = "3:40–5:10 PM")]
    Period5,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 5] = [
        TimeSlot::Period1,
        TimeSlot::Period2,
        TimeSlot::Period3,
        TimeSlot::Period4,
        TimeSlot::Period5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Period1 => "9:00–10:30 AM",
            TimeSlot::Period2 => "10:40–12:10 PM",
            TimeSlot::Period3 => "12:20–1:50 PM",
            TimeSlot::Period4 => "2:00–3:30 PM",
            TimeSlot::Period5 => "3:40–5:10 PM",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        TimeSlot::ALL.into_iter().find(|slot| slot.as_str() == value)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One class in the weekly routine: a course pinned to a (weekday, period)
/// slot. Slot uniqueness across the collection is enforced by
/// [`validate_routine_entry`], never by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineEntry {
    pub id: i64,
    pub course_code: String,
    pub time_slot: TimeSlot,
    pub weekday: ClassDay,
}

impl RoutineEntry {
    pub fn new(
        id: i64,
        course_code: impl Into<String>,
        time_slot: TimeSlot,
        weekday: ClassDay,
    ) -> Self {
        Self {
            id,
            course_code: course_code.into(),
            time_slot,
            weekday,
        }
    }
}

/// Rejection of a candidate routine entry: the named slot is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotConflict {
    pub weekday: ClassDay,
    pub time_slot: TimeSlot,
}

impl fmt::Display for SlotConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a class is already scheduled for {} at {}",
            self.weekday, self.time_slot
        )
    }
}

impl std::error::Error for SlotConflict {}

/// Decides whether `candidate` may join the routine. The entry whose id
/// equals `exclude_id` is skipped, so an in-place edit never clashes with its
/// own prior value. Pure predicate: no input is mutated.
pub fn validate_routine_entry(
    existing: &[RoutineEntry],
    candidate: &RoutineEntry,
    exclude_id: Option<i64>,
) -> Result<(), SlotConflict> {
    for entry in existing {
        if exclude_id == Some(entry.id) {
            continue;
        }
        if entry.time_slot == candidate.time_slot && entry.weekday == candidate.weekday {
            return Err(SlotConflict {
                weekday: entry.weekday,
                time_slot: entry.time_slot,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_labels_round_trip() {
        for slot in TimeSlot::ALL {
            assert_eq!(TimeSlot::from_str(slot.as_str()), Some(slot));
        }
        for day in ClassDay::ALL {
            assert_eq!(ClassDay::from_str(day.as_str()), Some(day));
        }
        assert_eq!(TimeSlot::from_str("9:00-10:30 AM"), None);
        assert_eq!(ClassDay::from_str("Friday"), None);
    }

    #[test]
    fn conflict_names_the_occupied_slot() {
        let existing = vec![RoutineEntry::new(
            1,
            "CSE101",
            TimeSlot::Period2,
            ClassDay::Monday,
        )];
        let candidate = RoutineEntry::new(2, "CSE202", TimeSlot::Period2, ClassDay::Monday);
        let err = validate_routine_entry(&existing, &candidate, None).unwrap_err();
        assert_eq!(err.weekday, ClassDay::Monday);
        assert_eq!(err.time_slot, TimeSlot::Period2);
        assert_eq!(
            err.to_string(),
            "a class is already scheduled for Monday at 10:40–12:10 PM"
        );
    }
}
