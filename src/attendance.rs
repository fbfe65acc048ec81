use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "Present" => Some(AttendanceStatus::Present),
            "Absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attendance mark. Several records may exist for the same student and
/// date; the aggregate counts each of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: String,
    pub status: AttendanceStatus,
    pub date: NaiveDate,
}

impl AttendanceRecord {
    pub fn new(
        id: i64,
        student_id: impl Into<String>,
        status: AttendanceStatus,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            student_id: student_id.into(),
            status,
            date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub name: String,
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub percentage: f64,
}

/// Folds attendance records into one row per student, in the order students
/// first appear in the input. Ids missing from `student_names` fall back to
/// the raw id string.
pub fn summarize_attendance(
    records: &[AttendanceRecord],
    student_names: &HashMap<String, String>,
) -> Vec<AttendanceSummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    for record in records {
        let student_id = record.student_id.as_str();
        let entry = counts.entry(student_id).or_insert_with(|| {
            order.push(student_id);
            (0, 0)
        });
        entry.0 += 1;
        if record.status == AttendanceStatus::Present {
            entry.1 += 1;
        }
    }

    order
        .into_iter()
        .map(|student_id| {
            let (total, present) = counts[student_id];
            let percentage = if total > 0 {
                round2(present as f64 / total as f64 * 100.0)
            } else {
                0.0
            };
            AttendanceSummary {
                name: student_names
                    .get(student_id)
                    .cloned()
                    .unwrap_or_else(|| student_id.to_string()),
                total,
                present,
                absent: total - present,
                percentage,
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
