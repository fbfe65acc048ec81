#![cfg(feature = "sqlite")]

use academic_tool::{
    AcademicSnapshot, AssessmentType, AttendanceRecord, AttendanceStatus, CalendarEvent, ClassDay,
    Course, EventType, Faculty, GradeRecord, PersistenceError, RecordStore, RoutineEntry,
    SqliteRecordStore, Student, TimeSlot,
};
use chrono::NaiveDate;
use tempfile::NamedTempFile;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn build_sample_snapshot() -> AcademicSnapshot {
    let mut snapshot = AcademicSnapshot::new();
    snapshot.students = vec![
        Student::new(1, "S-001", "Amina Rahman", "CSE"),
        Student::new(2, "S-002", "Farid Hossain", "EEE"),
    ];
    snapshot.faculty = vec![Faculty::new(
        1,
        "F-001",
        "Dr. Karim",
        "CSE",
        "Professor",
        "karim@example.edu",
    )];
    snapshot.courses = vec![Course::new(
        1,
        "CSE101",
        "Structured Programming",
        "CSE",
        3.0,
        "None",
    )];
    snapshot.routines = vec![RoutineEntry::new(
        1,
        "CSE101",
        TimeSlot::Period3,
        ClassDay::Wednesday,
    )];
    snapshot.attendance = vec![AttendanceRecord::new(
        1,
        "S-001",
        AttendanceStatus::Absent,
        d(2025, 3, 2),
    )];
    snapshot.grades = vec![GradeRecord::new(1, "S-001", AssessmentType::Final, 74.0).unwrap()];
    snapshot.calendar_events = vec![
        CalendarEvent::new(d(2025, 4, 14), "Pohela Boishakh", EventType::Holiday),
        CalendarEvent::new(d(2025, 4, 14), "Campus open house", EventType::General),
    ];
    snapshot
}

#[test]
fn sqlite_store_round_trips_a_snapshot() {
    let file = NamedTempFile::new().unwrap();
    let store = SqliteRecordStore::new(file.path()).unwrap();

    let snapshot = build_sample_snapshot();
    store.save_snapshot(&snapshot).expect("save snapshot");
    let loaded = store.load_snapshot().expect("load snapshot");

    assert_eq!(loaded, snapshot);
    // Enum labels survive the text columns.
    assert_eq!(loaded.routines[0].time_slot, TimeSlot::Period3);
    assert_eq!(loaded.routines[0].weekday, ClassDay::Wednesday);
    assert_eq!(loaded.attendance[0].status, AttendanceStatus::Absent);
    assert_eq!(loaded.calendar_events[0].kind, EventType::Holiday);
}

#[test]
fn empty_store_loads_an_empty_snapshot() {
    let file = NamedTempFile::new().unwrap();
    let store = SqliteRecordStore::new(file.path()).unwrap();
    let loaded = store.load_snapshot().unwrap();
    assert_eq!(loaded, AcademicSnapshot::new());
}

#[test]
fn save_replaces_the_previous_snapshot() {
    let file = NamedTempFile::new().unwrap();
    let store = SqliteRecordStore::new(file.path()).unwrap();

    store.save_snapshot(&build_sample_snapshot()).unwrap();

    let mut smaller = AcademicSnapshot::new();
    smaller.students = vec![Student::new(1, "S-009", "Nusrat Jahan", "BBA")];
    store.save_snapshot(&smaller).unwrap();

    let loaded = store.load_snapshot().unwrap();
    assert_eq!(loaded, smaller);
}

#[test]
fn save_rejects_invalid_snapshots() {
    let file = NamedTempFile::new().unwrap();
    let store = SqliteRecordStore::new(file.path()).unwrap();

    let mut snapshot = build_sample_snapshot();
    snapshot
        .students
        .push(Student::new(3, "S-001", "Impostor", "BBA"));

    match store.save_snapshot(&snapshot) {
        Ok(_) => panic!("expected duplicate student ids to be rejected"),
        Err(PersistenceError::InvalidData(msg)) => assert!(
            msg.contains("duplicate student id"),
            "unexpected message: {msg}"
        ),
        Err(other) => panic!("expected InvalidData error, got {other:?}"),
    }
}

#[test]
fn stale_grade_points_are_stored_and_loaded_verbatim() {
    let file = NamedTempFile::new().unwrap();
    let store = SqliteRecordStore::new(file.path()).unwrap();

    // 82 marks would band to 4.00 today; the stored snapshot says 3.75 and
    // must come back unchanged.
    let mut snapshot = AcademicSnapshot::new();
    snapshot.grades = vec![GradeRecord {
        id: 1,
        student_id: "S-001".to_string(),
        assessment_type: AssessmentType::Midterm,
        marks: 82.0,
        grade_point: 3.75,
    }];

    store.save_snapshot(&snapshot).unwrap();
    let loaded = store.load_snapshot().unwrap();
    assert_eq!(loaded.grades[0].marks, 82.0);
    assert_eq!(loaded.grades[0].grade_point, 3.75);
}

#[test]
fn data_survives_reopening_the_store() {
    let file = NamedTempFile::new().unwrap();
    let snapshot = build_sample_snapshot();

    {
        let store = SqliteRecordStore::new(file.path()).unwrap();
        store.save_snapshot(&snapshot).unwrap();
    }

    let reopened = SqliteRecordStore::new(file.path()).unwrap();
    let loaded = reopened.load_snapshot().unwrap();
    assert_eq!(loaded, snapshot);
}
