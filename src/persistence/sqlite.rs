use super::{PersistenceError, PersistenceResult, RecordStore};
use crate::attendance::{AttendanceRecord, AttendanceStatus};
use crate::calendar::{CalendarEvent, EventType};
use crate::grades::{AssessmentType, GradeRecord};
use crate::roster::{Course, Faculty, Student};
use crate::routine::{ClassDay, RoutineEntry, TimeSlot};
use crate::snapshot::AcademicSnapshot;
use chrono::NaiveDate;
use log::info;
use rusqlite::{Connection, params};
use std::sync::Mutex;

/// SQLite-backed [`RecordStore`]. Saves replace the stored snapshot wholesale
/// inside one transaction; loads return rows in insertion order so the
/// first-seen grouping contract survives a round trip.
pub struct SqliteRecordStore {
    connection: Mutex<Connection>,
}

impl SqliteRecordStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        // Referential integrity is deliberately absent: dependent records may
        // reference ids that no longer resolve, and the aggregators fall back
        // to the raw id. Routine slot uniqueness is the validator's job.
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY,
                student_id TEXT UNIQUE NOT NULL,
                name TEXT NOT NULL,
                major TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS faculty (
                id INTEGER PRIMARY KEY,
                faculty_id TEXT UNIQUE NOT NULL,
                name TEXT NOT NULL,
                department TEXT NOT NULL,
                rank TEXT NOT NULL,
                contact_info TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS courses (
                id INTEGER PRIMARY KEY,
                course_code TEXT UNIQUE NOT NULL,
                course_name TEXT NOT NULL,
                program TEXT NOT NULL,
                credits REAL NOT NULL,
                prerequisites TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS routines (
                id INTEGER PRIMARY KEY,
                course_code TEXT NOT NULL,
                time_slot TEXT NOT NULL,
                weekday TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS attendance (
                id INTEGER PRIMARY KEY,
                student_id TEXT NOT NULL,
                status TEXT NOT NULL,
                date TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS grades (
                id INTEGER PRIMARY KEY,
                student_id TEXT NOT NULL,
                assessment_type TEXT NOT NULL,
                marks REAL NOT NULL,
                grade_point REAL NOT NULL
            );
            CREATE TABLE IF NOT EXISTS calendar_events (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                description TEXT NOT NULL,
                type TEXT NOT NULL
            );
        "#;
        connection.execute_batch(ddl)?;
        info!("sqlite record store schema ready");
        Ok(())
    }

    fn save_students(
        &self,
        tx: &rusqlite::Transaction,
        students: &[Student],
    ) -> PersistenceResult<()> {
        tx.execute("DELETE FROM students", [])?;
        let mut stmt = tx.prepare(
            "INSERT INTO students (id, student_id, name, major) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for student in students {
            stmt.execute(params![
                student.id,
                student.student_id,
                student.name,
                student.major
            ])?;
        }
        Ok(())
    }

    fn save_faculty(
        &self,
        tx: &rusqlite::Transaction,
        faculty: &[Faculty],
    ) -> PersistenceResult<()> {
        tx.execute("DELETE FROM faculty", [])?;
        let mut stmt = tx.prepare(
            "INSERT INTO faculty (id, faculty_id, name, department, rank, contact_info)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for member in faculty {
            stmt.execute(params![
                member.id,
                member.faculty_id,
                member.name,
                member.department,
                member.rank,
                member.contact_info
            ])?;
        }
        Ok(())
    }

    fn save_courses(&self, tx: &rusqlite::Transaction, courses: &[Course]) -> PersistenceResult<()> {
        tx.execute("DELETE FROM courses", [])?;
        let mut stmt = tx.prepare(
            "INSERT INTO courses (id, course_code, course_name, program, credits, prerequisites)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for course in courses {
            stmt.execute(params![
                course.id,
                course.course_code,
                course.course_name,
                course.program,
                course.credits,
                course.prerequisites
            ])?;
        }
        Ok(())
    }

    fn save_routines(
        &self,
        tx: &rusqlite::Transaction,
        routines: &[RoutineEntry],
    ) -> PersistenceResult<()> {
        tx.execute("DELETE FROM routines", [])?;
        let mut stmt = tx.prepare(
            "INSERT INTO routines (id, course_code, time_slot, weekday) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for entry in routines {
            stmt.execute(params![
                entry.id,
                entry.course_code,
                entry.time_slot.as_str(),
                entry.weekday.as_str()
            ])?;
        }
        Ok(())
    }

    fn save_attendance(
        &self,
        tx: &rusqlite::Transaction,
        records: &[AttendanceRecord],
    ) -> PersistenceResult<()> {
        tx.execute("DELETE FROM attendance", [])?;
        let mut stmt = tx.prepare(
            "INSERT INTO attendance (id, student_id, status, date) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for record in records {
            stmt.execute(params![
                record.id,
                record.student_id,
                record.status.as_str(),
                record.date.to_string()
            ])?;
        }
        Ok(())
    }

    fn save_grades(
        &self,
        tx: &rusqlite::Transaction,
        records: &[GradeRecord],
    ) -> PersistenceResult<()> {
        tx.execute("DELETE FROM grades", [])?;
        let mut stmt = tx.prepare(
            "INSERT INTO grades (id, student_id, assessment_type, marks, grade_point)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for record in records {
            stmt.execute(params![
                record.id,
                record.student_id,
                record.assessment_type.as_str(),
                record.marks,
                record.grade_point
            ])?;
        }
        Ok(())
    }

    fn save_calendar_events(
        &self,
        tx: &rusqlite::Transaction,
        events: &[CalendarEvent],
    ) -> PersistenceResult<()> {
        tx.execute("DELETE FROM calendar_events", [])?;
        let mut stmt = tx.prepare(
            "INSERT INTO calendar_events (date, description, type) VALUES (?1, ?2, ?3)",
        )?;
        for event in events {
            stmt.execute(params![
                event.date.to_string(),
                event.description,
                event.kind.as_str()
            ])?;
        }
        Ok(())
    }
}

impl RecordStore for SqliteRecordStore {
    fn save_snapshot(&self, snapshot: &AcademicSnapshot) -> PersistenceResult<()> {
        super::validate_snapshot(snapshot)?;
        let mut conn = self.connection.lock().expect("sqlite mutex poisoned");
        let tx = conn.transaction()?;
        self.save_students(&tx, &snapshot.students)?;
        self.save_faculty(&tx, &snapshot.faculty)?;
        self.save_courses(&tx, &snapshot.courses)?;
        self.save_routines(&tx, &snapshot.routines)?;
        self.save_attendance(&tx, &snapshot.attendance)?;
        self.save_grades(&tx, &snapshot.grades)?;
        self.save_calendar_events(&tx, &snapshot.calendar_events)?;
        tx.commit()?;
        Ok(())
    }

    fn load_snapshot(&self) -> PersistenceResult<AcademicSnapshot> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        let mut snapshot = AcademicSnapshot::new();

        let mut stmt =
            conn.prepare("SELECT id, student_id, name, major FROM students ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;
        for row in rows {
            let (id, student_id, name, major) = row?;
            snapshot.students.push(Student {
                id,
                student_id,
                name,
                major,
            });
        }

        let mut stmt = conn.prepare(
            "SELECT id, faculty_id, name, department, rank, contact_info
             FROM faculty ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;
        for row in rows {
            let (id, faculty_id, name, department, rank, contact_info) = row?;
            snapshot.faculty.push(Faculty {
                id,
                faculty_id,
                name,
                department,
                rank,
                contact_info,
            });
        }

        let mut stmt = conn.prepare(
            "SELECT id, course_code, course_name, program, credits, prerequisites
             FROM courses ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, f64>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;
        for row in rows {
            let (id, course_code, course_name, program, credits, prerequisites) = row?;
            snapshot.courses.push(Course {
                id,
                course_code,
                course_name,
                program,
                credits,
                prerequisites,
            });
        }

        let mut stmt = conn
            .prepare("SELECT id, course_code, time_slot, weekday FROM routines ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;
        for row in rows {
            let (id, course_code, time_slot, weekday) = row?;
            snapshot.routines.push(RoutineEntry {
                id,
                course_code,
                time_slot: parse_time_slot(&time_slot)?,
                weekday: parse_class_day(&weekday)?,
            });
        }

        let mut stmt = conn
            .prepare("SELECT id, student_id, status, date FROM attendance ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;
        for row in rows {
            let (id, student_id, status, date) = row?;
            snapshot.attendance.push(AttendanceRecord {
                id,
                student_id,
                status: parse_status(&status)?,
                date: parse_date(&date)?,
            });
        }

        let mut stmt = conn.prepare(
            "SELECT id, student_id, assessment_type, marks, grade_point
             FROM grades ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, f64>(4)?,
            ))
        })?;
        for row in rows {
            let (id, student_id, assessment_type, marks, grade_point) = row?;
            // grade_point is a stored snapshot; it is loaded verbatim, never
            // recomputed from marks.
            snapshot.grades.push(GradeRecord {
                id,
                student_id,
                assessment_type: parse_assessment_type(&assessment_type)?,
                marks,
                grade_point,
            });
        }

        let mut stmt = conn
            .prepare("SELECT date, description, type FROM calendar_events ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;
        for row in rows {
            let (date, description, kind) = row?;
            snapshot.calendar_events.push(CalendarEvent {
                date: parse_date(&date)?,
                description,
                kind: parse_event_type(&kind)?,
            });
        }

        super::validate_snapshot(&snapshot)?;
        Ok(snapshot)
    }
}

fn parse_date(text: &str) -> PersistenceResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| PersistenceError::InvalidData(format!("invalid date '{text}': {e}")))
}

fn parse_time_slot(text: &str) -> PersistenceResult<TimeSlot> {
    TimeSlot::from_str(text)
        .ok_or_else(|| PersistenceError::InvalidData(format!("invalid time slot '{text}'")))
}

fn parse_class_day(text: &str) -> PersistenceResult<ClassDay> {
    ClassDay::from_str(text)
        .ok_or_else(|| PersistenceError::InvalidData(format!("invalid weekday '{text}'")))
}

fn parse_status(text: &str) -> PersistenceResult<AttendanceStatus> {
    AttendanceStatus::from_str(text)
        .ok_or_else(|| PersistenceError::InvalidData(format!("invalid attendance status '{text}'")))
}

fn parse_assessment_type(text: &str) -> PersistenceResult<AssessmentType> {
    AssessmentType::from_str(text)
        .ok_or_else(|| PersistenceError::InvalidData(format!("invalid assessment type '{text}'")))
}

fn parse_event_type(text: &str) -> PersistenceResult<EventType> {
    EventType::from_str(text)
        .ok_or_else(|| PersistenceError::InvalidData(format!("invalid event type '{text}'")))
}
