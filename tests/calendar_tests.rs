use academic_tool::{CalendarEvent, DayState, EventType, day_visual_state, events_on};
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample_events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent::new(d(2025, 4, 10), "Midterm week begins", EventType::Exam),
        CalendarEvent::new(d(2025, 4, 14), "Pohela Boishakh", EventType::Holiday),
        CalendarEvent::new(d(2025, 4, 10), "Registration deadline", EventType::Deadline),
        CalendarEvent::new(d(2025, 4, 14), "Campus open house", EventType::General),
    ]
}

#[test]
fn events_on_matches_the_exact_date_only() {
    let events = sample_events();
    let on_day = events_on(&events, d(2025, 4, 10));
    assert_eq!(on_day.len(), 2);
    assert!(on_day.iter().all(|e| e.date == d(2025, 4, 10)));
    assert!(events_on(&events, d(2025, 4, 11)).is_empty());
}

#[test]
fn events_on_preserves_input_order() {
    let events = sample_events();
    let on_day = events_on(&events, d(2025, 4, 10));
    assert_eq!(on_day[0].description, "Midterm week begins");
    assert_eq!(on_day[1].description, "Registration deadline");
}

#[test]
fn any_holiday_event_wins_regardless_of_company() {
    let events = sample_events();
    let on_day = events_on(&events, d(2025, 4, 14));
    assert_eq!(on_day.len(), 2);
    assert_eq!(day_visual_state(&on_day), DayState::Holiday);

    // Order of the events on the day does not matter.
    let reversed: Vec<CalendarEvent> = on_day.into_iter().rev().collect();
    assert_eq!(day_visual_state(&reversed), DayState::Holiday);
}

#[test]
fn non_holiday_events_mark_the_day_as_has_event() {
    let events = sample_events();
    let on_day = events_on(&events, d(2025, 4, 10));
    assert_eq!(day_visual_state(&on_day), DayState::HasEvent);
}

#[test]
fn no_events_means_plain() {
    assert_eq!(day_visual_state(&[]), DayState::Plain);
}

#[test]
fn duplicate_events_are_permitted() {
    let duplicate = CalendarEvent::new(d(2025, 4, 10), "Midterm week begins", EventType::Exam);
    let events = vec![duplicate.clone(), duplicate];
    assert_eq!(events_on(&events, d(2025, 4, 10)).len(), 2);
}
