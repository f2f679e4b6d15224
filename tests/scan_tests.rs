use announce_tool::scan::{
    HolidayMarkers, find_first_after, find_first_from, partition_by_date, sort_rows,
};
use announce_tool::session::SessionRow;
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn row(title: &str, date: Option<NaiveDate>) -> SessionRow {
    let mut row = SessionRow::new("DA", "1A", title);
    row.date = date;
    row
}

#[test]
fn sort_is_by_date_then_input_order() {
    let rows = vec![
        row("C", Some(d(2025, 9, 5))),
        row("A", Some(d(2025, 9, 1))),
        row("B1", Some(d(2025, 9, 3))),
        row("B2", Some(d(2025, 9, 3))),
        row("Undated", None),
    ];
    let sorted = sort_rows(&rows);
    let titles: Vec<&str> = sorted.iter().map(|r| r.title.as_str()).collect();
    // Equal dates keep input order; undated rows go last
    assert_eq!(titles, vec!["A", "B1", "B2", "C", "Undated"]);
}

#[test]
fn sort_is_deterministic() {
    let rows = vec![
        row("B", Some(d(2025, 9, 3))),
        row("A", Some(d(2025, 9, 1))),
        row("X", None),
    ];
    assert_eq!(sort_rows(&rows), sort_rows(&rows));
}

#[test]
fn find_first_after_is_strict() {
    let rows = vec![
        row("A", Some(d(2025, 9, 1))),
        row("B", Some(d(2025, 9, 3))),
        row("C", Some(d(2025, 9, 5))),
    ];
    let hit = find_first_after(&rows, 0, |r| r.title.starts_with('B') || r.title.starts_with('A'));
    assert_eq!(hit.map(|(idx, r)| (idx, r.title.as_str())), Some((1, "B")));

    // Anchor row itself never matches
    let hit = find_first_after(&rows, 1, |r| r.title == "B");
    assert!(hit.is_none());

    let hit = find_first_after(&rows, 2, |_| true);
    assert!(hit.is_none());
}

#[test]
fn find_first_from_includes_the_start_row() {
    let rows = vec![row("A", Some(d(2025, 9, 1))), row("B", Some(d(2025, 9, 3)))];
    let hit = find_first_from(&rows, 0, |r| r.title == "A");
    assert_eq!(hit.map(|(idx, _)| idx), Some(0));
}

#[test]
fn partition_orders_both_sides_nearest_first() {
    let rows = vec![
        row("A", Some(d(2025, 9, 1))),
        row("B", Some(d(2025, 9, 3))),
        row("C", Some(d(2025, 9, 5))),
        row("D", Some(d(2025, 9, 10))),
        row("E", Some(d(2025, 9, 12))),
        row("Undated", None),
    ];
    let (past, future) = partition_by_date(&rows, d(2025, 9, 5));

    let past_titles: Vec<&str> = past.iter().map(|r| r.title.as_str()).collect();
    // Pivot-day rows count as past; nearest past comes first
    assert_eq!(past_titles, vec!["C", "B", "A"]);

    let future_titles: Vec<&str> = future.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(future_titles, vec!["D", "E"]);
}

#[test]
fn partition_handles_empty_and_all_future_inputs() {
    let (past, future) = partition_by_date(&[], d(2025, 9, 5));
    assert!(past.is_empty());
    assert!(future.is_empty());

    let rows = vec![row("A", Some(d(2025, 9, 10)))];
    let (past, future) = partition_by_date(&rows, d(2025, 9, 5));
    assert!(past.is_empty());
    assert_eq!(future.len(), 1);
}

#[test]
fn holiday_title_must_equal_a_sentinel() {
    let markers = HolidayMarkers::default();
    assert!(markers.is_holiday(&row("Holiday", Some(d(2025, 9, 3)))));
    assert!(markers.is_holiday(&row("  HOLIDAY  ", Some(d(2025, 9, 3)))));
    // Containment is not enough for titles
    assert!(!markers.is_holiday(&row("Holiday Party Lab", Some(d(2025, 9, 3)))));
}

#[test]
fn holiday_notes_match_by_containment() {
    let markers = HolidayMarkers::default();
    let mut session = row("Deep Dive", Some(d(2025, 9, 3)));
    session.notes = Some("No LiveLab this date, campus closed".to_string());
    assert!(markers.is_holiday(&session));

    session.notes = Some("Bring laptops".to_string());
    assert!(!markers.is_holiday(&session));

    session.notes = None;
    assert!(!markers.is_holiday(&session));
}

#[test]
fn custom_markers_replace_the_defaults() {
    let markers = HolidayMarkers::new(
        vec!["break".to_string()],
        vec!["campus closed".to_string()],
    );
    assert!(markers.is_holiday(&row("Break", None)));
    assert!(!markers.is_holiday(&row("Holiday", None)));
}
