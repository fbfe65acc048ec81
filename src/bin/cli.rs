use academic_tool::{
    AcademicSnapshot, AssessmentType, AttendanceRecord, AttendanceStatus, CalendarEvent, ClassDay,
    Course, EventType, Faculty, GradeRecord, RecordStore, RoutineEntry, SqliteRecordStore,
    Student, TimeSlot, day_visual_state, events_on, load_snapshot_from_json, save_snapshot_to_json,
    summarize_attendance, summarize_gpa, validate_routine_entry,
};
use chrono::{Local, NaiveDate};
use std::io::{self, Write};

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (ci, cell) in row.iter().enumerate() {
            if ci < widths.len() && cell.len() > widths[ci] {
                widths[ci] = cell.len();
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');

    out.push('|');
    for (i, name) in headers.iter().enumerate() {
        out.push(' ');
        out.push_str(name);
        let pad = widths[i] - name.len();
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');

    for row in rows {
        out.push('|');
        for (ci, cell) in row.iter().enumerate() {
            out.push(' ');
            out.push_str(cell);
            let pad = widths[ci].saturating_sub(cell.len());
            if pad > 0 {
                out.push_str(&" ".repeat(pad));
            }
            out.push(' ');
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                                      Show this help\n  show <students|faculty|courses|routine|attendance|grades|events>\n  dashboard                                 Show headline counts\n  slots                                     List time slots and weekdays\n  student add <student_id> <name> [major...]\n  student delete <student_id>\n  faculty add <faculty_id> <name> <department> <rank> [contact...]\n  course add <code> <name> <program> <credits> [prereqs...]\n  routine add <course_code> <slot 1-5> <weekday>\n  routine edit <id> <course_code> <slot 1-5> <weekday>\n  routine delete <id>\n  attend <student_id> <Present|Absent> <YYYY-MM-DD>\n  grade <student_id> <assessment_type> <marks>\n  event <YYYY-MM-DD> <type> <description...>\n  day <YYYY-MM-DD>                          Events and visual state for a day\n  summary <attendance|gpa>                  Per-student aggregates\n  save <path>                               Save snapshot as JSON\n  load <path>                               Load snapshot from JSON\n  db save <path>                            Save snapshot to SQLite\n  db load <path>                            Load snapshot from SQLite\n  quit|exit                                 Exit"
    );
}

fn print_slots() {
    println!("Time slots:");
    for (i, slot) in TimeSlot::ALL.iter().enumerate() {
        println!("  {}  {}", i + 1, slot);
    }
    let weekdays = ClassDay::ALL
        .iter()
        .map(|d| d.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Weekdays: {}", weekdays);
    let kinds = AssessmentType::ALL
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Assessment types: {}", kinds);
    let events = EventType::ALL
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Event types: {}", events);
}

fn parse_slot(text: &str) -> Option<TimeSlot> {
    if let Ok(index) = text.parse::<usize>() {
        if (1..=TimeSlot::ALL.len()).contains(&index) {
            return Some(TimeSlot::ALL[index - 1]);
        }
        return None;
    }
    TimeSlot::from_str(text)
}

fn parse_cli_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map(|m| m + 1).unwrap_or(1)
}

fn show_collection(snapshot: &AcademicSnapshot, which: &str) {
    match which {
        "students" => {
            let rows: Vec<Vec<String>> = snapshot
                .students
                .iter()
                .map(|s| {
                    vec![
                        s.id.to_string(),
                        s.student_id.clone(),
                        s.name.clone(),
                        s.major.clone(),
                    ]
                })
                .collect();
            println!("{}", render_table(&["ID", "Student ID", "Name", "Major"], &rows));
        }
        "faculty" => {
            let rows: Vec<Vec<String>> = snapshot
                .faculty
                .iter()
                .map(|f| {
                    vec![
                        f.id.to_string(),
                        f.faculty_id.clone(),
                        f.name.clone(),
                        f.department.clone(),
                        f.rank.clone(),
                        f.contact_info.clone(),
                    ]
                })
                .collect();
            println!(
                "{}",
                render_table(
                    &["ID", "Faculty ID", "Name", "Department", "Rank", "Contact"],
                    &rows
                )
            );
        }
        "courses" => {
            let rows: Vec<Vec<String>> = snapshot
                .courses
                .iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        c.course_code.clone(),
                        c.course_name.clone(),
                        c.program.clone(),
                        format!("{}", c.credits),
                        c.prerequisites.clone(),
                    ]
                })
                .collect();
            println!(
                "{}",
                render_table(
                    &["ID", "Code", "Name", "Program", "Credits", "Prerequisites"],
                    &rows
                )
            );
        }
        "routine" => {
            let course_names = snapshot.course_names();
            let rows: Vec<Vec<String>> = snapshot
                .routines
                .iter()
                .map(|r| {
                    let course = course_names
                        .get(&r.course_code)
                        .cloned()
                        .unwrap_or_else(|| r.course_code.clone());
                    vec![
                        r.id.to_string(),
                        r.course_code.clone(),
                        course,
                        r.time_slot.to_string(),
                        r.weekday.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                render_table(&["ID", "Code", "Course", "Time Slot", "Weekday"], &rows)
            );
        }
        "attendance" => {
            let rows: Vec<Vec<String>> = snapshot
                .attendance
                .iter()
                .map(|a| {
                    vec![
                        a.id.to_string(),
                        a.student_id.clone(),
                        a.status.to_string(),
                        a.date.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                render_table(&["ID", "Student ID", "Status", "Date"], &rows)
            );
        }
        "grades" => {
            let rows: Vec<Vec<String>> = snapshot
                .grades
                .iter()
                .map(|g| {
                    vec![
                        g.id.to_string(),
                        g.student_id.clone(),
                        g.assessment_type.to_string(),
                        format!("{}", g.marks),
                        format!("{:.2}", g.grade_point),
                    ]
                })
                .collect();
            println!(
                "{}",
                render_table(
                    &["ID", "Student ID", "Assessment", "Marks", "Grade Point"],
                    &rows
                )
            );
        }
        "events" => {
            let rows: Vec<Vec<String>> = snapshot
                .calendar_events
                .iter()
                .map(|e| {
                    vec![
                        e.date.to_string(),
                        e.kind.to_string(),
                        e.description.clone(),
                    ]
                })
                .collect();
            println!("{}", render_table(&["Date", "Type", "Description"], &rows));
        }
        other => {
            println!("Unknown collection '{}'.", other);
            println!("Usage: show <students|faculty|courses|routine|attendance|grades|events>");
        }
    }
}

fn print_attendance_summary(snapshot: &AcademicSnapshot) {
    let names = snapshot.student_names();
    let summaries = summarize_attendance(&snapshot.attendance, &names);
    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                s.total.to_string(),
                s.present.to_string(),
                s.absent.to_string(),
                format!("{:.2}%", s.percentage),
            ]
        })
        .collect();
    println!(
        "{}",
        render_table(&["Name", "Total", "Present", "Absent", "Percentage"], &rows)
    );
}

fn print_gpa_summary(snapshot: &AcademicSnapshot) {
    let names = snapshot.student_names();
    let summaries = summarize_gpa(&snapshot.grades, &names);
    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| vec![s.name.clone(), format!("{:.2}", s.overall_gpa)])
        .collect();
    println!("{}", render_table(&["Name", "Overall GPA"], &rows));
}

fn print_day(snapshot: &AcademicSnapshot, date: NaiveDate, today: NaiveDate) {
    let on_day = events_on(&snapshot.calendar_events, date);
    let state = day_visual_state(&on_day);
    let overlay = if date == today { " (today)" } else { "" };
    println!("{} is {:?}{}", date, state, overlay);
    if on_day.is_empty() {
        println!("No events for this day.");
        return;
    }
    let rows: Vec<Vec<String>> = on_day
        .iter()
        .map(|e| vec![e.kind.to_string(), e.description.clone()])
        .collect();
    println!("{}", render_table(&["Type", "Description"], &rows));
}

fn main() {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .ok()
        .and_then(|logger| logger.start().ok());

    let mut snapshot = AcademicSnapshot::new();

    println!("Academic Tool (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "slots" => print_slots(),
            "show" => match parts.next() {
                Some(which) => show_collection(&snapshot, which),
                None => println!(
                    "Usage: show <students|faculty|courses|routine|attendance|grades|events>"
                ),
            },
            "dashboard" => {
                let today = Local::now().date_naive();
                println!("{}", snapshot.dashboard_summary(today).to_cli_summary());
            }
            "student" => match parts.next() {
                Some("add") => {
                    let student_id = parts.next();
                    let name = parts.next();
                    match (student_id, name) {
                        (Some(student_id), Some(name)) => {
                            if snapshot
                                .students
                                .iter()
                                .any(|s| s.student_id == student_id)
                            {
                                println!("A student with id '{}' already exists.", student_id);
                                continue;
                            }
                            let major = parts.collect::<Vec<_>>().join(" ");
                            let id = next_id(snapshot.students.iter().map(|s| s.id));
                            snapshot.students.push(Student::new(id, student_id, name, major));
                            println!("Student added.");
                        }
                        _ => println!("Usage: student add <student_id> <name> [major...]"),
                    }
                }
                Some("delete") => match parts.next() {
                    Some(student_id) => {
                        let before = snapshot.students.len();
                        snapshot.students.retain(|s| s.student_id != student_id);
                        if snapshot.students.len() < before {
                            println!("Student '{}' deleted.", student_id);
                        } else {
                            println!("Student '{}' not found.", student_id);
                        }
                    }
                    None => println!("Usage: student delete <student_id>"),
                },
                _ => println!("Usage: student add|delete ..."),
            },
            "faculty" => match parts.next() {
                Some("add") => {
                    let faculty_id = parts.next();
                    let name = parts.next();
                    let department = parts.next();
                    let rank = parts.next();
                    match (faculty_id, name, department, rank) {
                        (Some(faculty_id), Some(name), Some(department), Some(rank)) => {
                            if snapshot
                                .faculty
                                .iter()
                                .any(|f| f.faculty_id == faculty_id)
                            {
                                println!("A faculty member with id '{}' already exists.", faculty_id);
                                continue;
                            }
                            let contact = parts.collect::<Vec<_>>().join(" ");
                            let id = next_id(snapshot.faculty.iter().map(|f| f.id));
                            snapshot.faculty.push(Faculty::new(
                                id, faculty_id, name, department, rank, contact,
                            ));
                            println!("Faculty member added.");
                        }
                        _ => println!(
                            "Usage: faculty add <faculty_id> <name> <department> <rank> [contact...]"
                        ),
                    }
                }
                _ => println!("Usage: faculty add ..."),
            },
            "course" => match parts.next() {
                Some("add") => {
                    let code = parts.next();
                    let name = parts.next();
                    let program = parts.next();
                    let credits_s = parts.next();
                    match (code, name, program, credits_s) {
                        (Some(code), Some(name), Some(program), Some(credits_s)) => {
                            let credits: f64 = match credits_s.parse() {
                                Ok(v) if v >= 0.0 => v,
                                _ => {
                                    println!("Invalid credits (non-negative number expected)");
                                    continue;
                                }
                            };
                            if snapshot.courses.iter().any(|c| c.course_code == code) {
                                println!("A course with code '{}' already exists.", code);
                                continue;
                            }
                            let prereqs = parts.collect::<Vec<_>>().join(" ");
                            let id = next_id(snapshot.courses.iter().map(|c| c.id));
                            snapshot.courses.push(Course::new(
                                id, code, name, program, credits, prereqs,
                            ));
                            println!("Course added.");
                        }
                        _ => println!(
                            "Usage: course add <code> <name> <program> <credits> [prereqs...]"
                        ),
                    }
                }
                _ => println!("Usage: course add ..."),
            },
            "routine" => match parts.next() {
                Some("add") => {
                    let code = parts.next();
                    let slot_s = parts.next();
                    let weekday_s = parts.next();
                    match (code, slot_s, weekday_s) {
                        (Some(code), Some(slot_s), Some(weekday_s)) => {
                            let Some(time_slot) = parse_slot(slot_s) else {
                                println!("Invalid slot (1-5, see 'slots')");
                                continue;
                            };
                            let Some(weekday) = ClassDay::from_str(weekday_s) else {
                                println!("Invalid weekday (Sunday-Thursday)");
                                continue;
                            };
                            let id = next_id(snapshot.routines.iter().map(|r| r.id));
                            let candidate = RoutineEntry::new(id, code, time_slot, weekday);
                            match validate_routine_entry(&snapshot.routines, &candidate, None) {
                                Ok(()) => {
                                    snapshot.routines.push(candidate);
                                    println!("Class added to routine.");
                                }
                                Err(clash) => println!("Clash detected: {}.", clash),
                            }
                        }
                        _ => println!("Usage: routine add <course_code> <slot 1-5> <weekday>"),
                    }
                }
                Some("edit") => {
                    let id_s = parts.next();
                    let code = parts.next();
                    let slot_s = parts.next();
                    let weekday_s = parts.next();
                    match (id_s, code, slot_s, weekday_s) {
                        (Some(id_s), Some(code), Some(slot_s), Some(weekday_s)) => {
                            let id: i64 = match id_s.parse() {
                                Ok(v) => v,
                                Err(_) => {
                                    println!("Invalid id");
                                    continue;
                                }
                            };
                            let Some(time_slot) = parse_slot(slot_s) else {
                                println!("Invalid slot (1-5, see 'slots')");
                                continue;
                            };
                            let Some(weekday) = ClassDay::from_str(weekday_s) else {
                                println!("Invalid weekday (Sunday-Thursday)");
                                continue;
                            };
                            if !snapshot.routines.iter().any(|r| r.id == id) {
                                println!("Routine entry {} not found.", id);
                                continue;
                            }
                            let candidate = RoutineEntry::new(id, code, time_slot, weekday);
                            match validate_routine_entry(&snapshot.routines, &candidate, Some(id)) {
                                Ok(()) => {
                                    if let Some(entry) =
                                        snapshot.routines.iter_mut().find(|r| r.id == id)
                                    {
                                        *entry = candidate;
                                    }
                                    println!("Class updated.");
                                }
                                Err(clash) => println!("Clash detected: {}.", clash),
                            }
                        }
                        _ => println!("Usage: routine edit <id> <course_code> <slot 1-5> <weekday>"),
                    }
                }
                Some("delete") => match parts.next().and_then(|s| s.parse::<i64>().ok()) {
                    Some(id) => {
                        let before = snapshot.routines.len();
                        snapshot.routines.retain(|r| r.id != id);
                        if snapshot.routines.len() < before {
                            println!("Routine entry {} deleted.", id);
                        } else {
                            println!("Routine entry {} not found.", id);
                        }
                    }
                    None => println!("Usage: routine delete <id>"),
                },
                _ => println!("Usage: routine add|edit|delete ..."),
            },
            "attend" => {
                let student_id = parts.next();
                let status_s = parts.next();
                let date_s = parts.next();
                match (student_id, status_s, date_s) {
                    (Some(student_id), Some(status_s), Some(date_s)) => {
                        let Some(status) = AttendanceStatus::from_str(status_s) else {
                            println!("Invalid status (Present|Absent)");
                            continue;
                        };
                        let Some(date) = parse_cli_date(date_s) else {
                            println!("Invalid date (YYYY-MM-DD)");
                            continue;
                        };
                        let id = next_id(snapshot.attendance.iter().map(|a| a.id));
                        snapshot
                            .attendance
                            .push(AttendanceRecord::new(id, student_id, status, date));
                        println!("Attendance marked.");
                    }
                    _ => println!("Usage: attend <student_id> <Present|Absent> <YYYY-MM-DD>"),
                }
            }
            "grade" => {
                let student_id = parts.next();
                let kind_s = parts.next();
                let marks_s = parts.next();
                match (student_id, kind_s, marks_s) {
                    (Some(student_id), Some(kind_s), Some(marks_s)) => {
                        let Some(kind) = AssessmentType::from_str(kind_s) else {
                            println!("Invalid assessment type (see 'slots')");
                            continue;
                        };
                        let marks: f64 = match marks_s.parse() {
                            Ok(v) => v,
                            Err(_) => {
                                println!("Invalid marks (number expected)");
                                continue;
                            }
                        };
                        let id = next_id(snapshot.grades.iter().map(|g| g.id));
                        match GradeRecord::new(id, student_id, kind, marks) {
                            Ok(record) => {
                                println!(
                                    "Grade added (grade point {:.2}).",
                                    record.grade_point
                                );
                                snapshot.grades.push(record);
                            }
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                    _ => println!("Usage: grade <student_id> <assessment_type> <marks>"),
                }
            }
            "event" => {
                let date_s = parts.next();
                let kind_s = parts.next();
                let rest: Vec<&str> = parts.collect();
                match (date_s, kind_s, !rest.is_empty()) {
                    (Some(date_s), Some(kind_s), true) => {
                        let Some(date) = parse_cli_date(date_s) else {
                            println!("Invalid date (YYYY-MM-DD)");
                            continue;
                        };
                        let Some(kind) = EventType::from_str(kind_s) else {
                            println!("Invalid event type (see 'slots')");
                            continue;
                        };
                        let description = rest.join(" ");
                        snapshot
                            .calendar_events
                            .push(CalendarEvent::new(date, description, kind));
                        println!("Event added to calendar.");
                    }
                    _ => println!("Usage: event <YYYY-MM-DD> <type> <description...>"),
                }
            }
            "day" => match parts.next().and_then(parse_cli_date) {
                Some(date) => {
                    let today = Local::now().date_naive();
                    print_day(&snapshot, date, today);
                }
                None => println!("Usage: day <YYYY-MM-DD>"),
            },
            "summary" => match parts.next() {
                Some("attendance") => print_attendance_summary(&snapshot),
                Some("gpa") => print_gpa_summary(&snapshot),
                _ => println!("Usage: summary <attendance|gpa>"),
            },
            "save" => match parts.next() {
                Some(path) => match save_snapshot_to_json(&snapshot, path) {
                    Ok(_) => println!("Snapshot saved to {}.", path),
                    Err(e) => println!("Error saving snapshot: {}", e),
                },
                None => println!("Usage: save <path>"),
            },
            "load" => match parts.next() {
                Some(path) => match load_snapshot_from_json(path) {
                    Ok(loaded) => {
                        snapshot = loaded;
                        println!("Snapshot loaded from {}.", path);
                    }
                    Err(e) => println!("Error loading snapshot: {}", e),
                },
                None => println!("Usage: load <path>"),
            },
            "db" => match (parts.next(), parts.next()) {
                (Some("save"), Some(path)) => match SqliteRecordStore::new(path) {
                    Ok(store) => match store.save_snapshot(&snapshot) {
                        Ok(_) => println!("Snapshot saved to {}.", path),
                        Err(e) => println!("Error saving snapshot: {}", e),
                    },
                    Err(e) => println!("Error opening {}: {}", path, e),
                },
                (Some("load"), Some(path)) => match SqliteRecordStore::new(path) {
                    Ok(store) => match store.load_snapshot() {
                        Ok(loaded) => {
                            snapshot = loaded;
                            println!("Snapshot loaded from {}.", path);
                        }
                        Err(e) => println!("Error loading snapshot: {}", e),
                    },
                    Err(e) => println!("Error opening {}: {}", path, e),
                },
                _ => println!("Usage: db <save|load> <path>"),
            },
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}
