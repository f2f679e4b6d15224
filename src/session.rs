use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One scheduled LiveLab session as loaded from a roster sheet.
///
/// `date` is `None` when the raw cell could not be parsed; absent values
/// never abort a computation, each consumer falls back per its own policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRow {
    pub track: String,
    pub section: String,
    pub session_number: Option<String>,
    pub date: Option<NaiveDate>,
    pub title: String,
    pub notes: Option<String>,
    pub video_assignment: Option<String>,
    pub milestone_title: Option<String>,
}

impl SessionRow {
    pub fn new(track: impl Into<String>, section: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            track: track.into(),
            section: section.into(),
            session_number: None,
            date: None,
            title: title.into(),
            notes: None,
            video_assignment: None,
            milestone_title: None,
        }
    }

    /// Numeric position in the session series, taken from the first digit
    /// run of the raw label (`"LL12"` -> 12). `None` when the label is
    /// absent or carries no digits.
    pub fn session_index(&self) -> Option<u32> {
        self.session_number.as_deref().and_then(session_index)
    }

    /// Full section name, e.g. `"DA Section 1A"`.
    pub fn full_section(&self) -> String {
        format!("{} Section {}", self.track, self.section)
    }

    /// Key form used by the instructor map, e.g. `"DA Section 1A.csv"`.
    pub fn instructor_key(&self) -> String {
        format!("{} Section {}.csv", self.track, self.section)
    }
}

/// First run of ASCII digits in a session label, if any.
pub fn session_index(label: &str) -> Option<u32> {
    let digits: String = label
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Spreadsheet exports leave `nan`/`null` style residue in empty cells;
/// treat those the same as a blank string.
pub fn is_blank(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || matches!(
            trimmed.to_ascii_lowercase().as_str(),
            "nan" | "nat" | "none" | "null"
        )
}

/// Trimmed `Some` for meaningful text, `None` for blank/residue cells.
pub fn non_blank(value: String) -> Option<String> {
    if is_blank(&value) {
        None
    } else {
        Some(value.trim().to_string())
    }
}
