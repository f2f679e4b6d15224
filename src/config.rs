use crate::session::SessionRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Presentation settings for the composers. Passed explicitly into each
/// call; nothing here is process-wide state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Instructor display names keyed by the `.csv`-suffixed section form,
    /// e.g. `"DA Section 1A.csv" -> "@Sarah Cole"`.
    pub instructors: HashMap<String, String>,
    /// Exact-match (case-insensitive) lab title replacements, for sheets
    /// whose titles drifted from the display form.
    pub title_aliases: HashMap<String, String>,
    /// Fixed label for the weekly header; `None` shows the week range.
    pub term_label: Option<String>,
    /// Weekly header template with a `{header_label}` slot.
    pub header_template: String,
    /// Placeholder bullets emitted under each digest group.
    pub placeholder_bullets: usize,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            instructors: HashMap::new(),
            title_aliases: HashMap::new(),
            term_label: None,
            header_template: "Happy {header_label}! :fallen_leaf:".to_string(),
            placeholder_bullets: 1,
        }
    }
}

impl ComposerConfig {
    /// Instructor for a row's section, `"TBD"` when unmapped.
    pub fn instructor_for(&self, row: &SessionRow) -> &str {
        self.instructors
            .get(&row.instructor_key())
            .map(String::as_str)
            .unwrap_or("TBD")
    }

    /// Display title after trimming and alias substitution.
    pub fn normalize_title(&self, title: &str) -> String {
        let trimmed = title.trim();
        let lowered = trimmed.to_lowercase();
        for (alias, display) in &self.title_aliases {
            if alias.to_lowercase() == lowered {
                return display.clone();
            }
        }
        trimmed.to_string()
    }

    pub fn header_label(&self, week_monday: NaiveDate) -> String {
        match &self.term_label {
            Some(label) => label.clone(),
            None => format!("Week of {}", week_monday.format("%b %d")),
        }
    }
}
