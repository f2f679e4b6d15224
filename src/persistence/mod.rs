use crate::session::SessionRow;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum RosterError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    Csv(csv::Error),
    InvalidData(String),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::Serialization(err) => write!(f, "serialization error: {err}"),
            RosterError::Io(err) => write!(f, "io error: {err}"),
            RosterError::Csv(err) => write!(f, "csv error: {err}"),
            RosterError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for RosterError {}

impl From<SerdeJsonError> for RosterError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for RosterError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for RosterError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type RosterResult<T> = Result<T, RosterError>;

pub fn validate_rows(rows: &[SessionRow]) -> RosterResult<()> {
    for row in rows {
        if row.track.trim().is_empty() {
            return Err(RosterError::InvalidData(format!(
                "row '{}' is missing a track code",
                row.title
            )));
        }
        if row.section.trim().is_empty() {
            return Err(RosterError::InvalidData(format!(
                "row '{}' is missing a section code",
                row.title
            )));
        }
        if row.session_index() == Some(0) {
            return Err(RosterError::InvalidData(format!(
                "row '{}' has session number 0 (numbering starts at 1)",
                row.title
            )));
        }
    }
    Ok(())
}

pub mod file;

pub use file::{
    RosterFile, discover_roster, load_composer_config, load_due_date_overrides,
    load_due_days_policy, load_roster_dir, load_sessions_from_csv, save_composer_config,
    save_due_date_overrides, save_due_days_policy, split_roster_name,
};
