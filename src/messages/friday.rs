use crate::dates::{format_with_ordinal, most_recent_friday};
use crate::due::{DueDateOverrides, DueDaysPolicy, resolve_due_date};
use crate::scan::{HolidayMarkers, find_first_from, partition_by_date};
use crate::session::SessionRow;
use chrono::{Datelike, NaiveDate, Weekday};

/// One section's Friday announcement.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBlock {
    pub section: String,
    pub heading: String,
    pub body: String,
}

impl SectionBlock {
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.heading, self.body)
    }
}

/// The full Friday recap/look-ahead: the date actually used (adjusted to
/// the most recent Friday when the request was not one) and one block per
/// section, in first-occurrence order of the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct FridayDigest {
    pub requested: NaiveDate,
    pub friday: NaiveDate,
    pub adjusted: bool,
    pub sections: Vec<SectionBlock>,
}

pub fn build_friday_digest(
    rows: &[SessionRow],
    track: &str,
    requested: NaiveDate,
    section_filter: Option<&str>,
    overrides: &DueDateOverrides,
    policy: &DueDaysPolicy,
    markers: &HolidayMarkers,
) -> FridayDigest {
    let friday = if requested.weekday() == Weekday::Fri {
        requested
    } else {
        most_recent_friday(requested)
    };

    let track_rows: Vec<&SessionRow> = rows.iter().filter(|row| row.track == track).collect();
    let sections: Vec<String> = match section_filter {
        Some(section) => vec![section.to_string()],
        None => {
            let mut seen: Vec<String> = Vec::new();
            for row in &track_rows {
                if !seen.contains(&row.section) {
                    seen.push(row.section.clone());
                }
            }
            seen
        }
    };

    let mut blocks = Vec::new();
    for section in sections {
        let section_rows: Vec<SessionRow> = track_rows
            .iter()
            .filter(|row| row.section == section)
            .map(|row| (*row).clone())
            .collect();
        blocks.push(build_section_block(
            &section_rows,
            track,
            &section,
            friday,
            overrides,
            policy,
            markers,
        ));
    }

    FridayDigest {
        requested,
        friday,
        adjusted: friday != requested,
        sections: blocks,
    }
}

fn build_section_block(
    rows: &[SessionRow],
    track: &str,
    section: &str,
    friday: NaiveDate,
    overrides: &DueDateOverrides,
    policy: &DueDaysPolicy,
    markers: &HolidayMarkers,
) -> SectionBlock {
    let heading = format!("📢 Post on **{}**", format_with_ordinal(Some(friday)));
    let (past, upcoming) = partition_by_date(rows, friday);

    let Some(last) = past.first() else {
        return SectionBlock {
            section: section.to_string(),
            heading,
            body: format!("❌ No past LiveLabs for section {section}."),
        };
    };

    let next = upcoming.first();
    let next_date = next.and_then(|row| row.date);

    let mut paragraphs: Vec<String> = Vec::new();

    let last_label = match &last.session_number {
        Some(number) => format!("{}: {}", number, last.title),
        None => last.title.clone(),
    };
    paragraphs.push(format!(
        "🔎 **INSTRUCTOR SANITY CHECK**: The most recent LiveLab was **{}** on {}",
        last_label,
        format_with_ordinal(last.date)
    ));

    paragraphs.push(
        "### Hey everyone! 👋\n\nThanks for hanging out with me in lab this week! Here's what's coming up ⬇️"
            .to_string(),
    );

    paragraphs.push(milestone_paragraph(
        last, &upcoming, track, section, next_date, overrides, policy,
    ));

    match next {
        Some(next_row) => {
            if markers.is_holiday(next_row) {
                paragraphs.push(format!(
                    "🎉 The next scheduled day, **{}**, is a holiday, so there will be no LiveLab that day. Enjoy your break!",
                    format_with_ordinal(next_row.date)
                ));
            } else {
                let title = if next_row.title.trim().is_empty() {
                    "an upcoming LiveLab"
                } else {
                    next_row.title.as_str()
                };
                let description = next_row
                    .notes
                    .as_deref()
                    .unwrap_or("No description available 😅");
                paragraphs.push(format!(
                    "⏭️ Your next LiveLab is **{}** on **{}**. {}",
                    title,
                    format_with_ordinal(next_row.date),
                    description
                ));
                paragraphs.push(video_paragraph(next_row, &upcoming));
            }
        }
        None => paragraphs.push("⏭️ No upcoming LiveLabs scheduled.".to_string()),
    }

    paragraphs.push("Have a wonderful weekend, and see you all next week!".to_string());

    SectionBlock {
        section: section.to_string(),
        heading,
        body: paragraphs.join("\n\n"),
    }
}

/// Due-now line for the last session's milestone when its due date lands
/// at or before the next session (or there is no next session); otherwise
/// a look-ahead on the first upcoming milestone; otherwise a none-line.
fn milestone_paragraph(
    last: &SessionRow,
    upcoming: &[SessionRow],
    track: &str,
    section: &str,
    next_date: Option<NaiveDate>,
    overrides: &DueDateOverrides,
    policy: &DueDaysPolicy,
) -> String {
    let due_date = resolve_due_date(
        last.date,
        track,
        section,
        last.milestone_title.as_deref(),
        overrides,
        policy,
    );
    if let (Some(milestone), Some(due)) = (last.milestone_title.as_deref(), due_date) {
        if next_date.is_none_or(|next| due <= next) {
            return format!(
                "🎯 **Don't forget!** **{}** is due on **{}**. Swing by a drop-in session or reach out to the HelpHub with any questions!",
                milestone,
                format_with_ordinal(Some(due))
            );
        }
    }

    let look_ahead = find_first_from(upcoming, 0, |row| row.milestone_title.is_some()).and_then(
        |(_, row)| {
            let due = resolve_due_date(
                row.date,
                track,
                section,
                row.milestone_title.as_deref(),
                overrides,
                policy,
            )?;
            row.milestone_title.clone().map(|milestone| (milestone, due))
        },
    );
    match look_ahead {
        Some((milestone, due)) => format!(
            "🔜 **Heads up!** Your next milestone, {}, is due on **{}**.",
            milestone,
            format_with_ordinal(Some(due))
        ),
        None => "ℹ️ No scheduled milestones to announce.".to_string(),
    }
}

/// Watch line for the next session's own video, else a head start on the
/// first upcoming session that carries one, else a none-line.
fn video_paragraph(next_row: &SessionRow, upcoming: &[SessionRow]) -> String {
    if let Some(video) = next_row.video_assignment.as_deref() {
        return format!(
            "🍿 To prepare, please be sure to watch **{video}** before then."
        );
    }
    match find_first_from(upcoming, 0, |row| row.video_assignment.is_some()) {
        Some((_, later)) => format!(
            "📌 While there's no SkillBuilder due before the next LiveLab, your next one will be **{}** for {} on **{}**.",
            later.video_assignment.as_deref().unwrap_or(""),
            later.session_number.as_deref().unwrap_or("a later LiveLab"),
            format_with_ordinal(later.date)
        ),
        None => "📌 No upcoming SkillBuilders found in the schedule.".to_string(),
    }
}
