use academic_tool::{ClassDay, RoutineEntry, TimeSlot, validate_routine_entry};

fn sample_routine() -> Vec<RoutineEntry> {
    vec![
        RoutineEntry::new(1, "CSE101", TimeSlot::Period1, ClassDay::Sunday),
        RoutineEntry::new(2, "CSE203", TimeSlot::Period2, ClassDay::Sunday),
        RoutineEntry::new(3, "MAT110", TimeSlot::Period1, ClassDay::Tuesday),
    ]
}

#[test]
fn free_slot_is_accepted() {
    let existing = sample_routine();
    let candidate = RoutineEntry::new(4, "PHY102", TimeSlot::Period3, ClassDay::Sunday);
    assert!(validate_routine_entry(&existing, &candidate, None).is_ok());
}

#[test]
fn occupied_slot_is_rejected() {
    let existing = sample_routine();
    let candidate = RoutineEntry::new(4, "PHY102", TimeSlot::Period1, ClassDay::Sunday);
    let err = validate_routine_entry(&existing, &candidate, None).unwrap_err();
    assert_eq!(err.weekday, ClassDay::Sunday);
    assert_eq!(err.time_slot, TimeSlot::Period1);
}

#[test]
fn same_slot_different_day_is_accepted() {
    let existing = sample_routine();
    let candidate = RoutineEntry::new(4, "PHY102", TimeSlot::Period1, ClassDay::Monday);
    assert!(validate_routine_entry(&existing, &candidate, None).is_ok());
}

#[test]
fn same_day_different_slot_is_accepted() {
    let existing = sample_routine();
    let candidate = RoutineEntry::new(4, "PHY102", TimeSlot::Period4, ClassDay::Tuesday);
    assert!(validate_routine_entry(&existing, &candidate, None).is_ok());
}

#[test]
fn editing_an_entry_never_conflicts_with_itself() {
    let existing = sample_routine();
    // Same slot as before, only the course changed.
    let edited = RoutineEntry::new(2, "EEE201", TimeSlot::Period2, ClassDay::Sunday);
    assert!(validate_routine_entry(&existing, &edited, Some(2)).is_ok());
}

#[test]
fn editing_into_another_entrys_slot_still_conflicts() {
    let existing = sample_routine();
    let edited = RoutineEntry::new(2, "CSE203", TimeSlot::Period1, ClassDay::Sunday);
    let err = validate_routine_entry(&existing, &edited, Some(2)).unwrap_err();
    assert_eq!(err.weekday, ClassDay::Sunday);
    assert_eq!(err.time_slot, TimeSlot::Period1);
}

#[test]
fn add_path_does_not_skip_any_entry() {
    let existing = sample_routine();
    // Candidate reuses an existing surrogate id; with no exclusion the clash
    // must still be reported.
    let candidate = RoutineEntry::new(1, "PHY102", TimeSlot::Period1, ClassDay::Sunday);
    assert!(validate_routine_entry(&existing, &candidate, None).is_err());
}

#[test]
fn validation_leaves_inputs_untouched() {
    let existing = sample_routine();
    let snapshot = existing.clone();
    let candidate = RoutineEntry::new(4, "PHY102", TimeSlot::Period1, ClassDay::Sunday);
    let _ = validate_routine_entry(&existing, &candidate, None);
    assert_eq!(existing, snapshot);
}
