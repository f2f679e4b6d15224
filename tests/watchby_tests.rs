use announce_tool::messages::{GuidePhase, build_watch_guide};
use announce_tool::scan::HolidayMarkers;
use announce_tool::segment::split_by_reset;
use announce_tool::session::SessionRow;
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn row(label: Option<&str>, title: &str, date: Option<NaiveDate>, video: Option<&str>) -> SessionRow {
    let mut row = SessionRow::new("DA", "1A", title);
    row.session_number = label.map(str::to_string);
    row.date = date;
    row.video_assignment = video.map(str::to_string);
    row
}

fn markers() -> HolidayMarkers {
    HolidayMarkers::default()
}

#[test]
fn labeled_dated_rows_point_at_their_livelab() {
    let rows = vec![row(Some("LL1"), "Intro", Some(d(2025, 9, 1)), Some("Video A"))];
    let guide = build_watch_guide(&rows, GuidePhase::Opening, &markers());
    assert!(guide.contains("- Watch Video A by LiveLab on Monday, 09/01"));
}

#[test]
fn holiday_rows_keep_their_video_with_a_stay_on_track_note() {
    let mut holiday = row(Some("LL2"), "Holiday", Some(d(2025, 9, 3)), Some("Video B"));
    holiday.notes = Some("no livelab".to_string());
    let guide = build_watch_guide(&[holiday], GuidePhase::Opening, &markers());
    assert!(guide.contains(
        "- Watch Video B by Wednesday, 09/03 (no LiveLab but this will help you stay on track!)"
    ));
}

#[test]
fn unlabeled_dated_rows_use_the_bare_date() {
    let rows = vec![row(None, "Open Studio", Some(d(2025, 9, 3)), Some("Video C"))];
    let guide = build_watch_guide(&rows, GuidePhase::Opening, &markers());
    assert!(guide.contains("- Watch Video C by Wednesday, 09/03"));
    assert!(!guide.contains("by LiveLab on"));
}

#[test]
fn undated_rows_get_an_asap_nudge() {
    let rows = vec![row(Some("LL1"), "Intro", None, Some("Video D"))];
    let guide = build_watch_guide(&rows, GuidePhase::Opening, &markers());
    assert!(guide.contains("- Watch Video D ASAP if you haven't yet!"));
}

#[test]
fn rows_without_video_or_title_are_skipped() {
    let rows = vec![
        row(Some("LL1"), "Intro", Some(d(2025, 9, 1)), None),
        row(Some("LL2"), "  ", Some(d(2025, 9, 3)), Some("Video E")),
        row(Some("LL3"), "Deep Dive", Some(d(2025, 9, 5)), Some("Video F")),
    ];
    let guide = build_watch_guide(&rows, GuidePhase::Opening, &markers());
    assert!(!guide.contains("Video E"));
    assert_eq!(guide.matches("- Watch").count(), 1);
    assert!(guide.contains("Video F"));
}

#[test]
fn phases_open_differently_and_share_the_closing() {
    let rows = vec![row(Some("LL1"), "Intro", Some(d(2025, 9, 1)), Some("Video A"))];
    let opening = build_watch_guide(&rows, GuidePhase::Opening, &markers());
    let continuation = build_watch_guide(&rows, GuidePhase::Continuation, &markers());

    assert!(opening.starts_with("### Hey everyone! 👋"));
    assert!(continuation.starts_with("### Welcome back! 👋"));
    for guide in [&opening, &continuation] {
        assert!(guide.contains("**📆 SkillBuilder Schedule**"));
        assert!(guide.contains("Watched Video Lesson score"));
    }
}

#[test]
fn split_parts_feed_their_own_guides() {
    let rows = vec![
        row(Some("LL1"), "Intro", Some(d(2025, 9, 1)), Some("Video A")),
        row(Some("LL2"), "Deep Dive", Some(d(2025, 9, 3)), Some("Video B")),
        row(Some("LL1"), "Next Phase", Some(d(2025, 9, 8)), Some("Video C")),
    ];
    let parts = split_by_reset(&rows, 2);
    let first = build_watch_guide(&parts[0], GuidePhase::Opening, &markers());
    let second = build_watch_guide(&parts[1], GuidePhase::Continuation, &markers());

    assert!(first.contains("Video A"));
    assert!(first.contains("Video B"));
    assert!(!first.contains("Video C"));
    assert!(second.contains("Video C"));
    assert!(!second.contains("Video A"));
}
