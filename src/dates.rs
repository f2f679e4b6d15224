use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Position of a weekday name in the Monday-first week, matched after
/// trimming and ignoring case. `None` for anything that is not a weekday.
pub fn weekday_index(name: &str) -> Option<u32> {
    let name = name.trim();
    WEEKDAY_NAMES
        .iter()
        .position(|day| day.eq_ignore_ascii_case(name))
        .map(|idx| idx as u32)
}

/// Extract a date from roster cells like `"Monday, 09/01 SKIPPED FOR HOLIDAY!"`.
///
/// The cell must contain a comma; the first whitespace token after it must
/// read as `MM/DD`, combined with `fallback_year`. Every malformed input
/// yields `None`, the single failure signal propagated upward.
pub fn parse_session_date(raw: &str, fallback_year: i32) -> Option<NaiveDate> {
    let (_, rest) = raw.split_once(',')?;
    let token = rest.split_whitespace().next()?;
    let (month, day) = token.split_once('/')?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(fallback_year, month, day)
}

/// English ordinal suffix for a day of the month; 11-13 are always "th".
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Long announcement form, e.g. `"Friday, September 5th"`.
pub fn format_with_ordinal(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!(
            "{}, {} {}{}",
            d.format("%A"),
            d.format("%B"),
            d.day(),
            ordinal_suffix(d.day())
        ),
        None => "Unknown Date".to_string(),
    }
}

/// Short roster form, e.g. `"Monday, 09/01"`.
pub fn format_weekday_mmdd(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| format!("{}, {}", d.format("%A"), d.format("%m/%d")))
}

/// The Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Identity on Fridays, otherwise steps back to the nearest one.
pub fn most_recent_friday(date: NaiveDate) -> NaiveDate {
    let offset = (date.weekday().num_days_from_monday() + 7
        - Weekday::Fri.num_days_from_monday())
        % 7;
    date - Duration::days(offset as i64)
}

/// All Fridays in `[start, end]` inclusive, ascending.
pub fn fridays_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut current = start;
    while current.weekday() != Weekday::Fri {
        current = current + Duration::days(1);
    }

    let mut fridays = Vec::new();
    while current <= end {
        fridays.push(current);
        current = current + Duration::days(7);
    }
    fridays
}
