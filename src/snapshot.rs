use crate::attendance::AttendanceRecord;
use crate::calendar::CalendarEvent;
use crate::grades::GradeRecord;
use crate::roster::{Course, Faculty, Student};
use crate::routine::RoutineEntry;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A caller-owned snapshot of every collection. The aggregation core holds
/// no state of its own; the caller refetches this from storage before each
/// call and passes the collections in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcademicSnapshot {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub faculty: Vec<Faculty>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub routines: Vec<RoutineEntry>,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    #[serde(default)]
    pub grades: Vec<GradeRecord>,
    #[serde(default)]
    pub calendar_events: Vec<CalendarEvent>,
}

impl AcademicSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup map for the aggregators: `student_id` to display name.
    pub fn student_names(&self) -> HashMap<String, String> {
        self.students
            .iter()
            .map(|s| (s.student_id.clone(), s.name.clone()))
            .collect()
    }

    pub fn course_names(&self) -> HashMap<String, String> {
        self.courses
            .iter()
            .map(|c| (c.course_code.clone(), c.course_name.clone()))
            .collect()
    }

    /// Headline counts for the dashboard. `today` is supplied by the caller
    /// so the core stays clock-free; the upcoming window is today through
    /// thirty days out, inclusive on both ends.
    pub fn dashboard_summary(&self, today: NaiveDate) -> DashboardSummary {
        let horizon = today + Duration::days(30);
        let upcoming_events = self
            .calendar_events
            .iter()
            .filter(|e| e.date >= today && e.date <= horizon)
            .count();
        DashboardSummary {
            student_count: self.students.len(),
            faculty_count: self.faculty.len(),
            course_count: self.courses.len(),
            attendance_count: self.attendance.len(),
            grade_count: self.grades.len(),
            upcoming_events,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub student_count: usize,
    pub faculty_count: usize,
    pub course_count: usize,
    pub attendance_count: usize,
    pub grade_count: usize,
    pub upcoming_events: usize,
}

impl DashboardSummary {
    pub fn to_cli_summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("students={}", self.student_count));
        parts.push(format!("faculty={}", self.faculty_count));
        parts.push(format!("courses={}", self.course_count));
        parts.push(format!("attendance={}", self.attendance_count));
        parts.push(format!("grades={}", self.grade_count));
        if self.upcoming_events > 0 {
            parts.push(format!("upcoming_events={}", self.upcoming_events));
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::EventType;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn upcoming_window_is_inclusive_on_both_ends() {
        let today = d(2025, 3, 1);
        let mut snapshot = AcademicSnapshot::new();
        snapshot.calendar_events = vec![
            CalendarEvent::new(d(2025, 2, 28), "yesterday", EventType::General),
            CalendarEvent::new(today, "today", EventType::General),
            CalendarEvent::new(d(2025, 3, 31), "day thirty", EventType::Deadline),
            CalendarEvent::new(d(2025, 4, 1), "day thirty-one", EventType::General),
        ];
        let summary = snapshot.dashboard_summary(today);
        assert_eq!(summary.upcoming_events, 2);
        assert!(summary.to_cli_summary().contains("upcoming_events=2"));
    }
}
