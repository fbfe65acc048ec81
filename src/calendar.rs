use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    General,
    Holiday,
    Exam,
    Institutional,
    Deadline,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::General,
        EventType::Holiday,
        EventType::Exam,
        EventType::Institutional,
        EventType::Deadline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::General => "General",
            EventType::Holiday => "Holiday",
            EventType::Exam => "Exam",
            EventType::Institutional => "Institutional",
            EventType::Deadline => "Deadline",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        EventType::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An academic calendar entry. Several events may share a date; duplicates
/// are permitted and order is preserved by the owning collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EventType,
}

impl CalendarEvent {
    pub fn new(date: NaiveDate, description: impl Into<String>, kind: EventType) -> Self {
        Self {
            date,
            description: description.into(),
            kind,
        }
    }
}

/// Returns the events falling exactly on `date`, in input order.
pub fn events_on(events: &[CalendarEvent], date: NaiveDate) -> Vec<CalendarEvent> {
    events.iter().filter(|e| e.date == date).cloned().collect()
}

/// How a calendar cell should render for one day's events. Whether the day
/// is today is a presentation overlay decided by the caller against the
/// current date; it does not participate here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayState {
    Plain,
    HasEvent,
    Holiday,
}

/// Classifies a day: any holiday event wins, then any event at all, then
/// plain.
pub fn day_visual_state(events_on_day: &[CalendarEvent]) -> DayState {
    if events_on_day.iter().any(|e| e.kind == EventType::Holiday) {
        DayState::Holiday
    } else if events_on_day.is_empty() {
        DayState::Plain
    } else {
        DayState::HasEvent
    }
}
