use crate::dates::weekday_index;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// One explicit due-date exception.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub section: String,
    pub milestone: String,
    pub due_date: NaiveDate,
}

/// Explicit due dates keyed by full section name and milestone title,
/// matched after trimming and lowercasing. An override always wins over
/// the computed date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DueDateOverrides {
    entries: Vec<OverrideEntry>,
}

impl DueDateOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, section: impl Into<String>, milestone: impl Into<String>, due_date: NaiveDate) {
        self.entries.push(OverrideEntry {
            section: section.into(),
            milestone: milestone.into(),
            due_date,
        });
    }

    pub fn lookup(&self, full_section: &str, milestone: &str) -> Option<NaiveDate> {
        let section_key = normalize(full_section);
        let milestone_key = normalize(milestone);
        self.entries
            .iter()
            .find(|entry| {
                normalize(&entry.section) == section_key && normalize(&entry.milestone) == milestone_key
            })
            .map(|entry| entry.due_date)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Per-section list of weekday names on which milestones may fall due.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DueDaysPolicy {
    sections: HashMap<String, Vec<String>>,
}

impl DueDaysPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_days<I, S>(&mut self, section: &str, days: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections
            .insert(normalize(section), days.into_iter().map(Into::into).collect());
    }

    /// Ordered weekday names for a section; empty when the section is unknown.
    pub fn due_days(&self, section: &str) -> &[String] {
        self.sections
            .get(&normalize(section))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Next occurrence of the weekday (Monday-first index) on or after `base`;
/// zero offset when `base` already falls on it.
pub fn project_to_weekday(base: NaiveDate, weekday_index: u32) -> NaiveDate {
    let offset = (weekday_index + 7 - base.weekday().num_days_from_monday()) % 7;
    base + Duration::days(i64::from(offset))
}

/// Due date for a milestone announced after the session on `base_date`.
///
/// Absent milestone or base date short-circuits to `None`. Otherwise an
/// override for (full section, milestone) wins outright; failing that the
/// earliest projection onto the section's allowed due weekdays is used.
/// A section without a policy entry has no computable due date.
pub fn resolve_due_date(
    base_date: Option<NaiveDate>,
    track: &str,
    section: &str,
    milestone: Option<&str>,
    overrides: &DueDateOverrides,
    policy: &DueDaysPolicy,
) -> Option<NaiveDate> {
    let milestone = milestone?;
    let base = base_date?;

    let full_section = format!("{} Section {}", track.trim(), section.trim());
    if let Some(due) = overrides.lookup(&full_section, milestone) {
        return Some(due);
    }

    policy
        .due_days(section)
        .iter()
        .filter_map(|day| weekday_index(day))
        .map(|idx| project_to_weekday(base, idx))
        .min()
}
