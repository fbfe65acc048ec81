use crate::attendance::AttendanceRecord;
use crate::calendar::CalendarEvent;
use crate::grades::GradeRecord;
use crate::roster::{Course, Faculty, Student};
use crate::routine::RoutineEntry;
use crate::snapshot::AcademicSnapshot;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone)]
pub struct RecordValidationError {
    message: String,
}

impl RecordValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RecordValidationError {}

pub fn validate_student(student: &Student) -> Result<(), RecordValidationError> {
    if student.student_id.trim().is_empty() {
        return Err(RecordValidationError::new(
            "student requires a non-empty student_id",
        ));
    }
    if student.name.trim().is_empty() {
        return Err(RecordValidationError::new(format!(
            "student '{}' requires a non-empty name",
            student.student_id
        )));
    }
    Ok(())
}

pub fn validate_faculty(faculty: &Faculty) -> Result<(), RecordValidationError> {
    if faculty.faculty_id.trim().is_empty() {
        return Err(RecordValidationError::new(
            "faculty member requires a non-empty faculty_id",
        ));
    }
    if faculty.name.trim().is_empty() {
        return Err(RecordValidationError::new(format!(
            "faculty member '{}' requires a non-empty name",
            faculty.faculty_id
        )));
    }
    Ok(())
}

pub fn validate_course(course: &Course) -> Result<(), RecordValidationError> {
    if course.course_code.trim().is_empty() {
        return Err(RecordValidationError::new(
            "course requires a non-empty course_code",
        ));
    }
    if course.course_name.trim().is_empty() {
        return Err(RecordValidationError::new(format!(
            "course '{}' requires a non-empty course_name",
            course.course_code
        )));
    }
    if !course.credits.is_finite() || course.credits < 0.0 {
        return Err(RecordValidationError::new(format!(
            "course '{}' has invalid credits {}",
            course.course_code, course.credits
        )));
    }
    Ok(())
}

pub fn validate_routine(entry: &RoutineEntry) -> Result<(), RecordValidationError> {
    if entry.course_code.trim().is_empty() {
        return Err(RecordValidationError::new(format!(
            "routine entry {} requires a non-empty course_code",
            entry.id
        )));
    }
    Ok(())
}

pub fn validate_attendance(record: &AttendanceRecord) -> Result<(), RecordValidationError> {
    if record.student_id.trim().is_empty() {
        return Err(RecordValidationError::new(format!(
            "attendance record {} requires a non-empty student_id",
            record.id
        )));
    }
    Ok(())
}

pub fn validate_grade(record: &GradeRecord) -> Result<(), RecordValidationError> {
    if record.student_id.trim().is_empty() {
        return Err(RecordValidationError::new(format!(
            "grade record {} requires a non-empty student_id",
            record.id
        )));
    }
    if !record.marks.is_finite() || record.marks < 0.0 || record.marks > 100.0 {
        return Err(RecordValidationError::new(format!(
            "grade for student '{}' has marks {} outside the 0-100 range",
            record.student_id, record.marks
        )));
    }
    if !record.grade_point.is_finite() || record.grade_point < 0.0 || record.grade_point > 4.0 {
        return Err(RecordValidationError::new(format!(
            "grade for student '{}' has grade_point {} outside the 0-4 scale",
            record.student_id, record.grade_point
        )));
    }
    Ok(())
}

pub fn validate_event(event: &CalendarEvent) -> Result<(), RecordValidationError> {
    if event.description.trim().is_empty() {
        return Err(RecordValidationError::new(format!(
            "calendar event on {} requires a non-empty description",
            event.date
        )));
    }
    Ok(())
}

/// Structural validation of a whole snapshot. Natural keys (`student_id`,
/// `faculty_id`, `course_code`) must be unique within their collection.
/// Routine slot occupancy is deliberately not checked here; that invariant
/// belongs to `validate_routine_entry` alone. Attendance and calendar-event
/// duplicates are permitted.
pub fn validate_snapshot(snapshot: &AcademicSnapshot) -> Result<(), RecordValidationError> {
    let mut student_ids = HashSet::with_capacity(snapshot.students.len());
    for student in &snapshot.students {
        validate_student(student)?;
        if !student_ids.insert(student.student_id.as_str()) {
            return Err(RecordValidationError::new(format!(
                "duplicate student id '{}'",
                student.student_id
            )));
        }
    }

    let mut faculty_ids = HashSet::with_capacity(snapshot.faculty.len());
    for faculty in &snapshot.faculty {
        validate_faculty(faculty)?;
        if !faculty_ids.insert(faculty.faculty_id.as_str()) {
            return Err(RecordValidationError::new(format!(
                "duplicate faculty id '{}'",
                faculty.faculty_id
            )));
        }
    }

    let mut course_codes = HashSet::with_capacity(snapshot.courses.len());
    for course in &snapshot.courses {
        validate_course(course)?;
        if !course_codes.insert(course.course_code.as_str()) {
            return Err(RecordValidationError::new(format!(
                "duplicate course code '{}'",
                course.course_code
            )));
        }
    }

    for entry in &snapshot.routines {
        validate_routine(entry)?;
    }
    for record in &snapshot.attendance {
        validate_attendance(record)?;
    }
    for record in &snapshot.grades {
        validate_grade(record)?;
    }
    for event in &snapshot.calendar_events {
        validate_event(event)?;
    }

    Ok(())
}
