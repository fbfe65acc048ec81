use super::{PersistenceError, PersistenceResult};
use crate::record_validation;
use crate::roster::Student;
use crate::snapshot::AcademicSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

pub fn save_snapshot_to_json<P: AsRef<Path>>(
    snapshot: &AcademicSnapshot,
    path: P,
) -> PersistenceResult<()> {
    super::validate_snapshot(snapshot)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, snapshot)?;
    Ok(())
}

pub fn load_snapshot_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<AcademicSnapshot> {
    let file = File::open(path)?;
    let snapshot: AcademicSnapshot = serde_json::from_reader(file)?;
    super::validate_snapshot(&snapshot)?;
    Ok(snapshot)
}

/// Writes any one collection as a pretty-printed JSON array.
pub fn export_records_to_json<T: Serialize, P: AsRef<Path>>(
    records: &[T],
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, records)?;
    Ok(())
}

#[derive(Serialize, Deserialize)]
struct StudentCsvRecord {
    id: i64,
    student_id: String,
    name: String,
    major: String,
}

impl From<&Student> for StudentCsvRecord {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            student_id: student.student_id.clone(),
            name: student.name.clone(),
            major: student.major.clone(),
        }
    }
}

impl StudentCsvRecord {
    fn into_student(self) -> Student {
        Student {
            id: self.id,
            student_id: self.student_id,
            name: self.name,
            major: self.major,
        }
    }
}

pub fn export_students_to_csv<P: AsRef<Path>>(
    students: &[Student],
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for student in students {
        writer.serialize(StudentCsvRecord::from(student))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn import_students_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Student>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut students = Vec::new();
    let mut seen_ids = HashSet::new();
    for record in reader.deserialize::<StudentCsvRecord>() {
        let student = record?.into_student();
        record_validation::validate_student(&student)
            .map_err(|err| PersistenceError::InvalidData(err.to_string()))?;
        if !seen_ids.insert(student.student_id.clone()) {
            return Err(PersistenceError::InvalidData(format!(
                "duplicate student id '{}'",
                student.student_id
            )));
        }
        students.push(student);
    }
    Ok(students)
}
