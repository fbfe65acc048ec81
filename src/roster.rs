use serde::{Deserialize, Serialize};

/// A registered student. Identity follows the human-assigned `student_id`,
/// not the surrogate row id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub student_id: String,
    pub name: String,
    pub major: String,
}

impl Student {
    pub fn new(
        id: i64,
        student_id: impl Into<String>,
        name: impl Into<String>,
        major: impl Into<String>,
    ) -> Self {
        Self {
            id,
            student_id: student_id.into(),
            name: name.into(),
            major: major.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: i64,
    pub faculty_id: String,
    pub name: String,
    pub department: String,
    pub rank: String,
    pub contact_info: String,
}

impl Faculty {
    pub fn new(
        id: i64,
        faculty_id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        rank: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        Self {
            id,
            faculty_id: faculty_id.into(),
            name: name.into(),
            department: department.into(),
            rank: rank.into(),
            contact_info: contact_info.into(),
        }
    }
}

/// A course offering. `credits` must be finite and non-negative;
/// `prerequisites` is free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub course_code: String,
    pub course_name: String,
    pub program: String,
    pub credits: f64,
    pub prerequisites: String,
}

impl Course {
    pub fn new(
        id: i64,
        course_code: impl Into<String>,
        course_name: impl Into<String>,
        program: impl Into<String>,
        credits: f64,
        prerequisites: impl Into<String>,
    ) -> Self {
        Self {
            id,
            course_code: course_code.into(),
            course_name: course_name.into(),
            program: program.into(),
            credits,
            prerequisites: prerequisites.into(),
        }
    }
}
