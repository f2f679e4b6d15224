use crate::session::SessionRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Canonical roster order: ascending by date with the original input index
/// as a stable tie-break. Undated rows sort after every dated row.
pub fn sort_rows(rows: &[SessionRow]) -> Vec<SessionRow> {
    let mut indexed: Vec<(usize, SessionRow)> = rows.iter().cloned().enumerate().collect();
    indexed.sort_by_key(|entry| (entry.1.date.unwrap_or(NaiveDate::MAX), entry.0));
    indexed.into_iter().map(|(_, row)| row).collect()
}

/// First row at or after `start` satisfying the predicate.
pub fn find_first_from<P>(rows: &[SessionRow], start: usize, mut predicate: P) -> Option<(usize, &SessionRow)>
where
    P: FnMut(&SessionRow) -> bool,
{
    rows.iter()
        .enumerate()
        .skip(start)
        .find(|(_, row)| predicate(row))
}

/// First row strictly after `anchor` satisfying the predicate. Every
/// "look ahead for the next X" in the composers goes through this.
pub fn find_first_after<P>(rows: &[SessionRow], anchor: usize, predicate: P) -> Option<(usize, &SessionRow)>
where
    P: FnMut(&SessionRow) -> bool,
{
    find_first_from(rows, anchor + 1, predicate)
}

/// Split dated rows around a pivot: rows on or before the pivot descending
/// (nearest past first) and rows strictly after it ascending (nearest
/// future first). Undated rows belong to neither side.
pub fn partition_by_date(rows: &[SessionRow], pivot: NaiveDate) -> (Vec<SessionRow>, Vec<SessionRow>) {
    let mut past = Vec::new();
    let mut future = Vec::new();
    for row in rows {
        match row.date {
            Some(date) if date <= pivot => past.push(row.clone()),
            Some(_) => future.push(row.clone()),
            None => {}
        }
    }
    past.sort_by_key(|row| Reverse(row.date));
    future.sort_by_key(|row| row.date);
    (past, future)
}

/// Markers identifying non-session placeholder rows.
///
/// A row is a holiday placeholder when its title equals one of the
/// sentinels (case-insensitive) or its notes contain one of the phrases
/// (case-insensitive). Kept as one overridable predicate instead of
/// inline string compares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayMarkers {
    title_sentinels: Vec<String>,
    note_phrases: Vec<String>,
}

impl Default for HolidayMarkers {
    fn default() -> Self {
        Self {
            title_sentinels: vec!["holiday".to_string()],
            note_phrases: vec!["no livelab".to_string()],
        }
    }
}

impl HolidayMarkers {
    pub fn new<I, J>(title_sentinels: I, note_phrases: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        Self {
            title_sentinels: title_sentinels.into_iter().collect(),
            note_phrases: note_phrases.into_iter().collect(),
        }
    }

    pub fn is_holiday(&self, row: &SessionRow) -> bool {
        let title = row.title.trim().to_lowercase();
        if self
            .title_sentinels
            .iter()
            .any(|sentinel| title == sentinel.trim().to_lowercase())
        {
            return true;
        }
        if let Some(notes) = &row.notes {
            let notes = notes.to_lowercase();
            return self
                .note_phrases
                .iter()
                .any(|phrase| notes.contains(&phrase.trim().to_lowercase()));
        }
        false
    }
}
