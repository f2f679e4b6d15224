use super::{RosterError, RosterResult, validate_rows};
use crate::config::ComposerConfig;
use crate::dates::parse_session_date;
use crate::due::{DueDateOverrides, DueDaysPolicy};
use crate::session::{SessionRow, non_blank};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Raw CSV row as exported from the schedule sheets. Column names follow
/// the sheet convention with the generic names accepted as aliases;
/// missing columns fall back to empty cells.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SessionCsvRecord {
    date: String,
    #[serde(alias = "livelab_title")]
    title: String,
    #[serde(alias = "LL_num")]
    session_number: String,
    notes: String,
    #[serde(alias = "videos_watch_by")]
    video_assignment: String,
    #[serde(alias = "assignment_due_after")]
    milestone_title: String,
    #[serde(alias = "wave_section", alias = "section_id")]
    section: String,
    track: String,
}

impl SessionCsvRecord {
    fn into_row(self, track: &str, section: &str, fallback_year: i32) -> SessionRow {
        SessionRow {
            track: non_blank(self.track).unwrap_or_else(|| track.to_string()),
            section: non_blank(self.section).unwrap_or_else(|| section.to_string()),
            session_number: non_blank(self.session_number),
            date: parse_session_date(&self.date, fallback_year),
            title: self.title.trim().to_string(),
            notes: non_blank(self.notes),
            video_assignment: non_blank(self.video_assignment),
            milestone_title: non_blank(self.milestone_title),
        }
    }
}

/// A discovered roster CSV with the track/section inferred from its name.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterFile {
    pub path: PathBuf,
    pub track: String,
    pub section: String,
}

/// Split a roster file stem like `"DA Section 1A"` into its track code and
/// section code. The track is the leading alphabetic run; an optional
/// `Section` word between the two is dropped.
pub fn split_roster_name(basename: &str) -> Option<(String, String)> {
    let name = basename.trim();
    let track: String = name.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    if track.is_empty() {
        return None;
    }
    let rest = name[track.len()..].trim_start_matches([' ', '_', '-']);
    let rest = rest
        .strip_prefix("Section")
        .or_else(|| rest.strip_prefix("section"))
        .unwrap_or(rest);
    let section = rest.trim_start_matches([' ', '_', '-']).trim();
    if section.is_empty() {
        return None;
    }
    Some((track, section.to_string()))
}

/// All roster CSVs in a directory whose names carry a track and section,
/// sorted by path for reproducible load order.
pub fn discover_roster<P: AsRef<Path>>(dir: P) -> RosterResult<Vec<RosterFile>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        if let Some((track, section)) = split_roster_name(stem) {
            files.push(RosterFile {
                path,
                track,
                section,
            });
        }
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Load one section's sessions. `track`/`section` are the filename-derived
/// fallbacks used when the sheet carries no such columns.
pub fn load_sessions_from_csv<P: AsRef<Path>>(
    path: P,
    track: &str,
    section: &str,
    fallback_year: i32,
) -> RosterResult<Vec<SessionRow>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for record in reader.deserialize::<SessionCsvRecord>() {
        let record = record?;
        rows.push(record.into_row(track, section, fallback_year));
    }
    validate_rows(&rows)?;
    Ok(rows)
}

/// Load every discovered roster CSV in a directory into one row list.
pub fn load_roster_dir<P: AsRef<Path>>(dir: P, fallback_year: i32) -> RosterResult<Vec<SessionRow>> {
    let mut rows = Vec::new();
    for file in discover_roster(dir)? {
        rows.extend(load_sessions_from_csv(
            &file.path,
            &file.track,
            &file.section,
            fallback_year,
        )?);
    }
    Ok(rows)
}

pub fn load_composer_config<P: AsRef<Path>>(path: P) -> RosterResult<ComposerConfig> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

pub fn save_composer_config<P: AsRef<Path>>(config: &ComposerConfig, path: P) -> RosterResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

pub fn load_due_date_overrides<P: AsRef<Path>>(path: P) -> RosterResult<DueDateOverrides> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

pub fn save_due_date_overrides<P: AsRef<Path>>(
    overrides: &DueDateOverrides,
    path: P,
) -> RosterResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, overrides)?;
    Ok(())
}

pub fn load_due_days_policy<P: AsRef<Path>>(path: P) -> RosterResult<DueDaysPolicy> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

pub fn save_due_days_policy<P: AsRef<Path>>(policy: &DueDaysPolicy, path: P) -> RosterResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, policy)?;
    Ok(())
}
