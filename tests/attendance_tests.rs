use academic_tool::{AttendanceRecord, AttendanceStatus, summarize_attendance};
use chrono::NaiveDate;
use std::collections::HashMap;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn names(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}

#[test]
fn three_present_one_absent_is_seventy_five_percent() {
    let records = vec![
        AttendanceRecord::new(1, "S-001", AttendanceStatus::Present, d(2025, 3, 2)),
        AttendanceRecord::new(2, "S-001", AttendanceStatus::Present, d(2025, 3, 3)),
        AttendanceRecord::new(3, "S-001", AttendanceStatus::Absent, d(2025, 3, 4)),
        AttendanceRecord::new(4, "S-001", AttendanceStatus::Present, d(2025, 3, 5)),
    ];
    let summaries = summarize_attendance(&records, &names(&[("S-001", "Amina Rahman")]));
    assert_eq!(summaries.len(), 1);
    let summary = &summaries[0];
    assert_eq!(summary.name, "Amina Rahman");
    assert_eq!(summary.total, 4);
    assert_eq!(summary.present, 3);
    assert_eq!(summary.absent, 1);
    assert_eq!(summary.percentage, 75.00);
}

#[test]
fn students_appear_in_first_seen_order() {
    let records = vec![
        AttendanceRecord::new(1, "S-003", AttendanceStatus::Present, d(2025, 3, 2)),
        AttendanceRecord::new(2, "S-001", AttendanceStatus::Absent, d(2025, 3, 2)),
        AttendanceRecord::new(3, "S-002", AttendanceStatus::Present, d(2025, 3, 2)),
        AttendanceRecord::new(4, "S-001", AttendanceStatus::Present, d(2025, 3, 3)),
    ];
    let lookup = names(&[("S-001", "A"), ("S-002", "B"), ("S-003", "C")]);
    let summaries = summarize_attendance(&records, &lookup);
    let order: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(order, vec!["C", "A", "B"]);
}

#[test]
fn unresolved_student_id_falls_back_to_raw_id() {
    let records = vec![AttendanceRecord::new(
        1,
        "GHOST-9",
        AttendanceStatus::Present,
        d(2025, 3, 2),
    )];
    let summaries = summarize_attendance(&records, &HashMap::new());
    assert_eq!(summaries[0].name, "GHOST-9");
}

#[test]
fn duplicate_marks_on_one_date_both_count() {
    // No per-(student, date) uniqueness is enforced; a double mark counts
    // twice in the totals.
    let records = vec![
        AttendanceRecord::new(1, "S-001", AttendanceStatus::Present, d(2025, 3, 2)),
        AttendanceRecord::new(2, "S-001", AttendanceStatus::Present, d(2025, 3, 2)),
        AttendanceRecord::new(3, "S-001", AttendanceStatus::Absent, d(2025, 3, 3)),
    ];
    let summaries = summarize_attendance(&records, &HashMap::new());
    assert_eq!(summaries[0].total, 3);
    assert_eq!(summaries[0].present, 2);
    assert_eq!(summaries[0].percentage, 66.67);
}

#[test]
fn percentage_rounds_to_two_decimals() {
    let records = vec![
        AttendanceRecord::new(1, "S-001", AttendanceStatus::Present, d(2025, 3, 2)),
        AttendanceRecord::new(2, "S-001", AttendanceStatus::Absent, d(2025, 3, 3)),
        AttendanceRecord::new(3, "S-001", AttendanceStatus::Absent, d(2025, 3, 4)),
    ];
    let summaries = summarize_attendance(&records, &HashMap::new());
    assert_eq!(summaries[0].percentage, 33.33);
}

#[test]
fn empty_input_yields_no_rows() {
    let summaries = summarize_attendance(&[], &HashMap::new());
    assert!(summaries.is_empty());
}

#[test]
fn aggregation_is_idempotent() {
    let records = vec![
        AttendanceRecord::new(1, "S-002", AttendanceStatus::Present, d(2025, 3, 2)),
        AttendanceRecord::new(2, "S-001", AttendanceStatus::Absent, d(2025, 3, 2)),
        AttendanceRecord::new(3, "S-002", AttendanceStatus::Absent, d(2025, 3, 3)),
    ];
    let lookup = names(&[("S-001", "A"), ("S-002", "B")]);
    let first = summarize_attendance(&records, &lookup);
    let second = summarize_attendance(&records, &lookup);
    assert_eq!(first, second);
}
