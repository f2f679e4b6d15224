use announce_tool::dates::start_of_week;
use announce_tool::messages::{GuidePhase, build_watch_guide};
use announce_tool::persistence::{
    load_composer_config, load_due_date_overrides, load_due_days_policy, load_roster_dir,
};
use announce_tool::segment::split_by_reset;
use announce_tool::{
    ComposerConfig, DueDateOverrides, DueDaysPolicy, HolidayMarkers, SessionRow,
    build_end_of_session_reminders, build_friday_digest, build_weekly_digest,
};
use chrono::{Datelike, Local, NaiveDate};
use std::io::{self, Write};

fn parse_cli_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%m-%d-%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
}

fn render_rows_as_text_table(rows: &[SessionRow]) -> String {
    let col_names = [
        "track",
        "section",
        "session",
        "date",
        "title",
        "notes",
        "video",
        "milestone",
    ];

    let cells: Vec<[String; 8]> = rows
        .iter()
        .map(|row| {
            [
                row.track.clone(),
                row.section.clone(),
                row.session_number.clone().unwrap_or_default(),
                row.date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
                row.title.clone(),
                row.notes.clone().unwrap_or_default(),
                row.video_assignment.clone().unwrap_or_default(),
                row.milestone_title.clone().unwrap_or_default(),
            ]
        })
        .collect();

    // Compute column widths
    let mut widths: Vec<usize> = col_names.iter().map(|n| n.len()).collect();
    for row in &cells {
        for (ci, cell) in row.iter().enumerate() {
            if cell.len() > widths[ci] {
                widths[ci] = cell.len();
            }
        }
    }

    // Build horizontal separator
    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');

    // Header
    out.push('|');
    for (i, name) in col_names.iter().enumerate() {
        out.push(' ');
        out.push_str(name);
        let pad = widths[i] - name.len();
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');

    // Rows
    for row in &cells {
        out.push('|');
        for (ci, cell) in row.iter().enumerate() {
            out.push(' ');
            out.push_str(cell);
            let pad = widths[ci].saturating_sub(cell.len());
            if pad > 0 {
                out.push_str(&" ".repeat(pad));
            }
            out.push(' ');
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  load <dir>                         Load all roster CSVs from a directory\n  tracks                             List loaded track codes\n  sections <track>                   List section codes for a track\n  show [track]                       Show loaded rows (optionally one track)\n  monday <MM-DD-YYYY> <track>        Weekly digest for the week of that date\n  friday <MM-DD-YYYY> <track> [sec]  Friday recap/look-ahead blocks\n  watchby <track> <sec>              SkillBuilder watch-by guides (both parts)\n  reminders <track> [sec]            End-of-LiveLab reminder blocks\n  config <path.json>                 Load composer config\n  overrides <path.json>              Load due-date overrides\n  policy <path.json>                 Load due-days policy\n  year <yyyy>                        Set fallback year for MM/DD cells\n  quit|exit                          Exit"
    );
}

struct Shell {
    rows: Vec<SessionRow>,
    config: ComposerConfig,
    overrides: DueDateOverrides,
    policy: DueDaysPolicy,
    markers: HolidayMarkers,
    fallback_year: i32,
}

impl Shell {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            config: ComposerConfig::default(),
            overrides: DueDateOverrides::new(),
            policy: DueDaysPolicy::new(),
            markers: HolidayMarkers::default(),
            fallback_year: Local::now().date_naive().year(),
        }
    }

    fn tracks(&self) -> Vec<String> {
        let mut tracks: Vec<String> = Vec::new();
        for row in &self.rows {
            if !tracks.contains(&row.track) {
                tracks.push(row.track.clone());
            }
        }
        tracks
    }

    fn sections(&self, track: &str) -> Vec<String> {
        let mut sections: Vec<String> = Vec::new();
        for row in self.rows.iter().filter(|r| r.track == track) {
            if !sections.contains(&row.section) {
                sections.push(row.section.clone());
            }
        }
        sections
    }

    fn track_rows(&self, track: &str, section: Option<&str>) -> Vec<SessionRow> {
        self.rows
            .iter()
            .filter(|r| r.track == track)
            .filter(|r| section.is_none_or(|s| r.section == s))
            .cloned()
            .collect()
    }
}

fn main() {
    let mut shell = Shell::new();

    println!("Announce Tool (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        if line.is_empty() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => {
                print_help();
            }
            "quit" | "exit" => break,
            "load" => {
                let dir = input["load".len()..].trim();
                if dir.is_empty() {
                    println!("Usage: load <dir>");
                    continue;
                }
                match load_roster_dir(dir, shell.fallback_year) {
                    Ok(rows) => {
                        println!("Loaded {} rows from {}.", rows.len(), dir);
                        shell.rows = rows;
                    }
                    Err(err) => println!("Load failed: {err}"),
                }
            }
            "tracks" => {
                let tracks = shell.tracks();
                if tracks.is_empty() {
                    println!("No rows loaded. Use 'load <dir>' first.");
                } else {
                    println!("Tracks: {}", tracks.join(", "));
                }
            }
            "sections" => {
                let Some(track) = parts.next() else {
                    println!("Usage: sections <track>");
                    continue;
                };
                let sections = shell.sections(track);
                if sections.is_empty() {
                    println!("No sections found for track {track}.");
                } else {
                    println!("Sections for {}: {}", track, sections.join(", "));
                }
            }
            "show" => {
                let rows = match parts.next() {
                    Some(track) => shell.track_rows(track, None),
                    None => shell.rows.clone(),
                };
                if rows.is_empty() {
                    println!("No rows to show.");
                } else {
                    println!("{}", render_rows_as_text_table(&rows));
                }
            }
            "monday" => {
                let (Some(date_str), Some(track)) = (parts.next(), parts.next()) else {
                    println!("Usage: monday <MM-DD-YYYY> <track>");
                    continue;
                };
                let Some(date) = parse_cli_date(date_str) else {
                    println!("⚠️ Invalid date format. Use MM-DD-YYYY.");
                    continue;
                };
                let week_monday = start_of_week(date);
                let rows = shell.track_rows(track, None);
                println!("{}", build_weekly_digest(&rows, week_monday, &shell.config));
            }
            "friday" => {
                let (Some(date_str), Some(track)) = (parts.next(), parts.next()) else {
                    println!("Usage: friday <MM-DD-YYYY> <track> [section]");
                    continue;
                };
                let Some(date) = parse_cli_date(date_str) else {
                    println!("⚠️ Invalid date format. Use MM-DD-YYYY.");
                    continue;
                };
                let section = parts.next();
                let digest = build_friday_digest(
                    &shell.rows,
                    track,
                    date,
                    section,
                    &shell.overrides,
                    &shell.policy,
                    &shell.markers,
                );
                if digest.adjusted {
                    println!(
                        "⚠️ {} is not a Friday.",
                        announce_tool::dates::format_with_ordinal(Some(digest.requested))
                    );
                    println!(
                        "🔄 Adjusted to most recent Friday: {}",
                        announce_tool::dates::format_with_ordinal(Some(digest.friday))
                    );
                }
                if digest.sections.is_empty() {
                    println!("No sections found for track {track}.");
                }
                for block in &digest.sections {
                    println!("{}\n", block.render());
                }
            }
            "watchby" => {
                let (Some(track), Some(section)) = (parts.next(), parts.next()) else {
                    println!("Usage: watchby <track> <section>");
                    continue;
                };
                let rows = shell.track_rows(track, Some(section));
                if rows.is_empty() {
                    println!("No rows found for {track} section {section}.");
                    continue;
                }
                let parts_split = split_by_reset(&rows, 2);
                let phases = [GuidePhase::Opening, GuidePhase::Continuation];
                for (part_rows, phase) in parts_split.iter().zip(phases) {
                    if part_rows.is_empty() {
                        continue;
                    }
                    println!("{}\n", build_watch_guide(part_rows, phase, &shell.markers));
                }
            }
            "reminders" => {
                let Some(track) = parts.next() else {
                    println!("Usage: reminders <track> [section]");
                    continue;
                };
                let section = parts.next();
                let blocks = build_end_of_session_reminders(
                    &shell.rows,
                    Some(track),
                    section,
                    &shell.overrides,
                    &shell.policy,
                    &shell.markers,
                );
                if blocks.is_empty() {
                    println!("No LiveLabs found to build end-of-lab reminders.");
                }
                for block in &blocks {
                    println!("{}\n", block.render());
                }
            }
            "config" => {
                let Some(path) = parts.next() else {
                    println!("Usage: config <path.json>");
                    continue;
                };
                match load_composer_config(path) {
                    Ok(config) => {
                        println!("Config loaded from {path}.");
                        shell.config = config;
                    }
                    Err(err) => println!("Config load failed: {err}"),
                }
            }
            "overrides" => {
                let Some(path) = parts.next() else {
                    println!("Usage: overrides <path.json>");
                    continue;
                };
                match load_due_date_overrides(path) {
                    Ok(overrides) => {
                        println!("Loaded {} due-date overrides from {}.", overrides.len(), path);
                        shell.overrides = overrides;
                    }
                    Err(err) => println!("Overrides load failed: {err}"),
                }
            }
            "policy" => {
                let Some(path) = parts.next() else {
                    println!("Usage: policy <path.json>");
                    continue;
                };
                match load_due_days_policy(path) {
                    Ok(policy) => {
                        println!("Due-days policy loaded from {path}.");
                        shell.policy = policy;
                    }
                    Err(err) => println!("Policy load failed: {err}"),
                }
            }
            "year" => {
                match parts.next().and_then(|y| y.parse::<i32>().ok()) {
                    Some(year) => {
                        shell.fallback_year = year;
                        println!("Fallback year set to {year}. Reload rosters to apply.");
                    }
                    None => println!("Usage: year <yyyy>"),
                }
            }
            other => {
                println!("Unknown command '{other}'. Type 'help' for commands.");
            }
        }
    }
}
