pub mod attendance;
pub mod calendar;
pub mod grades;
pub mod persistence;
pub(crate) mod record_validation;
pub mod roster;
pub mod routine;
pub mod snapshot;

pub use attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary, summarize_attendance};
pub use calendar::{CalendarEvent, DayState, EventType, day_visual_state, events_on};
pub use grades::{AssessmentType, GpaSummary, GradeRecord, grade_point_of, summarize_gpa};
#[cfg(feature = "sqlite")]
pub use persistence::sqlite::SqliteRecordStore;
pub use persistence::{
    PersistenceError, RecordStore, export_records_to_json, export_students_to_csv,
    import_students_from_csv, load_snapshot_from_json, save_snapshot_to_json, validate_snapshot,
};
pub use record_validation::RecordValidationError;
pub use roster::{Course, Faculty, Student};
pub use routine::{ClassDay, RoutineEntry, SlotConflict, TimeSlot, validate_routine_entry};
pub use snapshot::{AcademicSnapshot, DashboardSummary};
