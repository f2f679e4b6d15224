use crate::dates::format_weekday_mmdd;
use crate::scan::HolidayMarkers;
use crate::session::{SessionRow, is_blank};

/// Which phase of the experience a watch-by guide opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidePhase {
    Opening,
    Continuation,
}

const GUIDE_CLOSING: &str = "Remember, your Watched Video Lesson score is the percentage of assigned SkillBuilder videos you've completed so far. It updates once a day to help you keep track of your progress.";

/// Build the SkillBuilder watch-by guide for one schedule part. Rows
/// without both a video and a title are skipped; holiday rows keep their
/// video with a stay-on-track phrasing.
pub fn build_watch_guide(rows: &[SessionRow], phase: GuidePhase, markers: &HolidayMarkers) -> String {
    let (intro_header, intro_body) = match phase {
        GuidePhase::Opening => (
            "### Hey everyone! 👋",
            "As promised, here is this handy guide for when your SkillBuilders should be viewed before each LiveLab. Please use this as a reference, but don't you worry, the Team and I will remind you as we go. The date you see is the date you need to have seen them by! Remember: you can always come back and watch these videos to make up your Watched Video Lecture score!",
        ),
        GuidePhase::Continuation => (
            "### Welcome back! 👋",
            "Time to switch gears into the next phase of this experience! Below is your new watch-by guide. The date shown is your deadline to be ready before each LiveLab.",
        ),
    };

    let mut bullets: Vec<String> = Vec::new();
    for row in rows {
        let Some(video) = row.video_assignment.as_deref() else {
            continue;
        };
        if is_blank(&row.title) {
            continue;
        }

        let when = match format_weekday_mmdd(row.date) {
            Some(date) if markers.is_holiday(row) => {
                format!("by {date} (no LiveLab but this will help you stay on track!)")
            }
            Some(date) if row.session_number.is_some() => format!("by LiveLab on {date}"),
            Some(date) => format!("by {date}"),
            None => "ASAP if you haven't yet!".to_string(),
        };
        bullets.push(format!("- Watch {} {}", video.trim(), when));
    }

    let schedule = bullets.join("\n");
    [
        intro_header,
        intro_body,
        "**📆 SkillBuilder Schedule**",
        schedule.as_str(),
        GUIDE_CLOSING,
    ]
    .join("\n\n")
}
