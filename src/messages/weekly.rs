use crate::config::ComposerConfig;
use crate::dates::WEEKDAY_ABBREVIATIONS;
use crate::session::SessionRow;
use chrono::{Datelike, Duration, NaiveDate};

/// Build the Monday announcement for the week starting at `week_monday`:
/// every lab in `[week_monday, week_monday + 7d)` grouped by display title,
/// each group carrying a weekday -> instructor schedule string.
///
/// A week without labs produces a single notice line. Output is a pure
/// function of the inputs; identical calls render identical text.
pub fn build_weekly_digest(rows: &[SessionRow], week_monday: NaiveDate, config: &ComposerConfig) -> String {
    let week_end = week_monday + Duration::days(7);

    // (weekday rank, date, display title, row), sorted for grouping order
    let mut entries: Vec<(u32, NaiveDate, String, &SessionRow)> = rows
        .iter()
        .filter_map(|row| match row.date {
            Some(date) if date >= week_monday && date < week_end => Some((
                date.weekday().num_days_from_monday(),
                date,
                config.normalize_title(&row.title),
                row,
            )),
            _ => None,
        })
        .collect();

    if entries.is_empty() {
        return format!("No labs found for {}.", config.header_label(week_monday));
    }

    entries.sort_by(|a, b| (a.0, a.1, &a.2).cmp(&(b.0, b.1, &b.2)));

    // Group case-insensitively by display title, in first-occurrence order;
    // the first-seen spelling is the one rendered.
    let mut groups: Vec<(String, String, Vec<(NaiveDate, &SessionRow)>)> = Vec::new();
    for (_, date, title, row) in &entries {
        let key = title.to_lowercase();
        match groups.iter_mut().find(|(existing, _, _)| *existing == key) {
            Some((_, _, members)) => members.push((*date, *row)),
            None => groups.push((key, title.clone(), vec![(*date, *row)])),
        }
    }

    let mut lines: Vec<String> = Vec::new();
    let header = config
        .header_template
        .replace("{header_label}", &config.header_label(week_monday));
    lines.push(format!("### {header}"));
    lines.push(String::new());
    lines.push("#### :loudspeaker: **ANNOUNCEMENTS** :loudspeaker:".to_string());
    lines.push("- Placeholder note".to_string());
    lines.push("\n".to_string());
    lines.push(String::new());
    lines.push("#### :test_tube: **LABS THIS WEEK** :test_tube:".to_string());

    for (_, title, members) in &groups {
        // Union of instructors per weekday, deduplicated, Mon -> Sun.
        let mut by_day: Vec<(u32, Vec<String>)> = Vec::new();
        for (date, row) in members {
            let rank = date.weekday().num_days_from_monday();
            let instructor = config.instructor_for(row).to_string();
            match by_day.iter_mut().find(|(existing, _)| *existing == rank) {
                Some((_, instructors)) => {
                    if !instructors.contains(&instructor) {
                        instructors.push(instructor);
                    }
                }
                None => by_day.push((rank, vec![instructor])),
            }
        }
        by_day.sort_by_key(|(rank, _)| *rank);

        let schedule = by_day
            .iter()
            .map(|(rank, instructors)| {
                format!(
                    "*{} - {}*",
                    WEEKDAY_ABBREVIATIONS[*rank as usize],
                    instructors.join(" / ")
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        lines.push(format!(":nerd_face: **{title}** ({schedule})"));
        for _ in 0..config.placeholder_bullets {
            lines.push("- Placeholder note".to_string());
            lines.push("\n".to_string());
        }
    }

    lines.join("\n")
}
