use crate::record_validation;
use crate::snapshot::AcademicSnapshot;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    #[cfg(feature = "sqlite")]
    Sqlite(rusqlite::Error),
    Csv(csv::Error),
    InvalidData(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            #[cfg(feature = "sqlite")]
            PersistenceError::Sqlite(err) => write!(f, "sqlite error: {err}"),
            PersistenceError::Csv(err) => write!(f, "csv error: {err}"),
            PersistenceError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// The injected repository interface. The core never talks to storage
/// directly; callers load a snapshot, run the pure functions over it, and
/// save the updated snapshot back.
pub trait RecordStore {
    fn save_snapshot(&self, snapshot: &AcademicSnapshot) -> PersistenceResult<()>;
    fn load_snapshot(&self) -> PersistenceResult<AcademicSnapshot>;
}

pub fn validate_snapshot(snapshot: &AcademicSnapshot) -> PersistenceResult<()> {
    record_validation::validate_snapshot(snapshot)
        .map_err(|err| PersistenceError::InvalidData(err.to_string()))
}

pub mod file;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use file::{
    export_records_to_json, export_students_to_csv, import_students_from_csv,
    load_snapshot_from_json, save_snapshot_to_json,
};
