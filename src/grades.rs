use crate::record_validation::RecordValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssessmentType {
    Midterm,
    Final,
    Viva,
    Presentation,
    Assignment,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 5] = [
        AssessmentType::Midterm,
        AssessmentType::Final,
        AssessmentType::Viva,
        AssessmentType::Presentation,
        AssessmentType::Assignment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentType::Midterm => "Midterm",
            AssessmentType::Final => "Final",
            AssessmentType::Viva => "Viva",
            AssessmentType::Presentation => "Presentation",
            AssessmentType::Assignment => "Assignment",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        AssessmentType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a percentage mark to a grade point. Bands are evaluated top-down and
/// lower bounds are inclusive, so 80.0 earns 4.00 and 79.99 earns 3.75.
pub fn grade_point_of(marks: f64) -> f64 {
    if marks >= 80.0 {
        4.00
    } else if marks >= 75.0 {
        3.75
    } else if marks >= 70.0 {
        3.50
    } else if marks >= 65.0 {
        3.25
    } else if marks >= 60.0 {
        3.00
    } else if marks >= 55.0 {
        2.75
    } else if marks >= 50.0 {
        2.50
    } else if marks >= 45.0 {
        2.25
    } else if marks >= 40.0 {
        2.00
    } else {
        0.00
    }
}

/// A recorded assessment result. `grade_point` is computed from `marks` once
/// at write time and stored; loading a persisted record never recomputes it,
/// so later changes to the banding table leave history untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub id: i64,
    pub student_id: String,
    pub assessment_type: AssessmentType,
    pub marks: f64,
    pub grade_point: f64,
}

impl GradeRecord {
    pub fn new(
        id: i64,
        student_id: impl Into<String>,
        assessment_type: AssessmentType,
        marks: f64,
    ) -> Result<Self, RecordValidationError> {
        let record = Self {
            id,
            student_id: student_id.into(),
            assessment_type,
            marks,
            grade_point: grade_point_of(marks),
        };
        crate::record_validation::validate_grade(&record)?;
        Ok(record)
    }

    /// Updates `marks` and recomputes the stored grade point, the same
    /// write-time rule as [`GradeRecord::new`].
    pub fn set_marks(&mut self, marks: f64) -> Result<(), RecordValidationError> {
        if !marks.is_finite() || !(0.0..=100.0).contains(&marks) {
            return Err(RecordValidationError::new(format!(
                "grade for student '{}' has marks {} outside the 0-100 range",
                self.student_id, marks
            )));
        }
        self.marks = marks;
        self.grade_point = grade_point_of(marks);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaSummary {
    pub name: String,
    pub overall_gpa: f64,
}

/// Folds grade records into one GPA row per student, in the order students
/// first appear in the input. The GPA is the mean of the stored grade points
/// rounded to two decimals.
pub fn summarize_gpa(
    records: &[GradeRecord],
    student_names: &HashMap<String, String>,
) -> Vec<GpaSummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();

    for record in records {
        let student_id = record.student_id.as_str();
        let entry = totals.entry(student_id).or_insert_with(|| {
            order.push(student_id);
            (0.0, 0)
        });
        entry.0 += record.grade_point;
        entry.1 += 1;
    }

    order
        .into_iter()
        .map(|student_id| {
            let (total_points, count) = totals[student_id];
            let overall_gpa = if count > 0 {
                round2(total_points / count as f64)
            } else {
                0.0
            };
            GpaSummary {
                name: student_names
                    .get(student_id)
                    .cloned()
                    .unwrap_or_else(|| student_id.to_string()),
                overall_gpa,
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
