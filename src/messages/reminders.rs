use crate::dates::{format_weekday_mmdd, format_with_ordinal};
use crate::due::{DueDateOverrides, DueDaysPolicy, resolve_due_date};
use crate::scan::{HolidayMarkers, find_first_after, sort_rows};
use crate::session::{SessionRow, is_blank};

/// One end-of-session announcement: what to watch and what is due before
/// the next LiveLab.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderBlock {
    pub heading: String,
    pub bullets: Vec<String>,
}

impl ReminderBlock {
    pub fn render(&self) -> String {
        if self.bullets.is_empty() {
            return format!("{}\n\n- Nothing due, nice work! 🎉", self.heading);
        }
        let body = self
            .bullets
            .iter()
            .map(|bullet| format!("- {bullet}"))
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("{}\n\n{}", self.heading, body)
    }
}

/// Build one reminder block per real (titled, non-holiday) session, in
/// schedule order. Each block looks ahead independently; no state carries
/// across rows. An empty roster yields an empty list.
pub fn build_end_of_session_reminders(
    rows: &[SessionRow],
    track_filter: Option<&str>,
    section_filter: Option<&str>,
    overrides: &DueDateOverrides,
    policy: &DueDaysPolicy,
    markers: &HolidayMarkers,
) -> Vec<ReminderBlock> {
    let scoped: Vec<SessionRow> = rows
        .iter()
        .filter(|row| track_filter.is_none_or(|track| row.track == track))
        .filter(|row| section_filter.is_none_or(|section| row.section == section))
        .cloned()
        .collect();
    let sched: Vec<SessionRow> = sort_rows(&scoped)
        .into_iter()
        .filter(|row| !markers.is_holiday(row) && !is_blank(&row.title))
        .collect();

    let mut blocks = Vec::new();
    for (idx, row) in sched.iter().enumerate() {
        let next = sched.get(idx + 1);
        let next_date = next.and_then(|r| r.date);
        let mut bullets: Vec<String> = Vec::new();

        match next {
            Some(next_row) => match next_row.video_assignment.as_deref() {
                Some(video) => bullets.push(format!(
                    "🎬 **Watch** *{}* **before** **LL: {}** on **{}**.",
                    video,
                    next_row.title,
                    format_with_ordinal(next_row.date)
                )),
                None => {
                    // Head start on the first later session that has one.
                    if let Some((_, later)) =
                        find_first_after(&sched, idx + 1, |r| r.video_assignment.is_some())
                    {
                        bullets.push(format!(
                            "🎬 No SkillBuilder due before the next LiveLab: **get a head start** on _{}_ (you'll want this before **LL: {}** on **{}**).",
                            later.video_assignment.as_deref().unwrap_or(""),
                            later.title,
                            format_with_ordinal(later.date)
                        ));
                    }
                }
            },
            None => {
                bullets.push("🎬 No upcoming LiveLab, you're at the end of the schedule. 🎉".to_string())
            }
        }

        let due = resolve_due_date(
            row.date,
            &row.track,
            &row.section,
            row.milestone_title.as_deref(),
            overrides,
            policy,
        );
        let due_before_next = matches!(due, Some(d) if next_date.is_none_or(|next| d <= next));
        if due_before_next {
            if let (Some(milestone), Some(d)) = (row.milestone_title.as_deref(), due) {
                bullets.push(format!(
                    "📌 **Milestone:** _{}_ is due **{}**.",
                    milestone,
                    format_with_ordinal(Some(d))
                ));
            }
        } else if let Some((_, later)) =
            find_first_after(&sched, idx, |r| r.milestone_title.is_some())
        {
            let later_due = resolve_due_date(
                later.date,
                &later.track,
                &later.section,
                later.milestone_title.as_deref(),
                overrides,
                policy,
            );
            if let (Some(milestone), Some(d)) = (later.milestone_title.as_deref(), later_due) {
                bullets.push(format!(
                    "📌 No milestone due before the next LiveLab: **get a head start** on _{}_ due **{}**.",
                    milestone,
                    format_with_ordinal(Some(d))
                ));
            }
        }

        let when = format_weekday_mmdd(row.date).unwrap_or_else(|| "Unknown Date".to_string());
        let heading = match &row.session_number {
            Some(number) => format!("📝 At the end of **{} {}** on *{}*", number, row.title, when),
            None => format!("📝 At the end of **{}** on *{}*", row.title, when),
        };

        blocks.push(ReminderBlock { heading, bullets });
    }
    blocks
}
