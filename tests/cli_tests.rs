use assert_cmd::Command;
use predicates::str::contains as str_contains;
use std::fs;
use tempfile::TempDir;

fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.write_stdin(script.to_string()).assert()
}

#[test]
fn cli_help_lists_commands() {
    run_cli("help\nquit\n")
        .success()
        .stdout(str_contains("Commands:"))
        .stdout(str_contains("friday <MM-DD-YYYY> <track> [sec]"));
}

#[test]
fn cli_rejects_malformed_dates() {
    run_cli("monday 2025-09-01 DA\nquit\n")
        .success()
        .stdout(str_contains("⚠️ Invalid date format. Use MM-DD-YYYY."));
}

#[test]
fn cli_reports_unknown_commands() {
    run_cli("frobnicate\nquit\n")
        .success()
        .stdout(str_contains("Unknown command 'frobnicate'."));
}

#[test]
fn cli_monday_digest_without_data_prints_the_notice() {
    run_cli("monday 09-01-2025 DA\nquit\n")
        .success()
        .stdout(str_contains("No labs found for Week of Sep 01."));
}

#[test]
fn cli_loads_a_roster_and_builds_messages() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("DA Section 1A.csv"),
        "date,livelab_title,LL_num,notes,videos_watch_by,assignment_due_after\n\
         \"Monday, 09/01\",Intro,LL1,,Video A,\n\
         \"Friday, 09/05\",Deep Dive,LL2,,Video B,Project 1\n",
    )
    .unwrap();

    let script = format!(
        "load {}\nyear 2025\nload {}\ntracks\nmonday 09-01-2025 DA\nreminders DA 1A\nquit\n",
        dir.path().display(),
        dir.path().display()
    );
    run_cli(&script)
        .success()
        .stdout(str_contains("Loaded 2 rows from"))
        .stdout(str_contains("Tracks: DA"))
        .stdout(str_contains(":nerd_face: **Intro**"))
        .stdout(str_contains("At the end of **LL1 Intro**"));
}

#[test]
fn cli_friday_adjusts_non_friday_requests() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("DA Section 1A.csv"),
        "date,livelab_title,LL_num\n\"Monday, 09/01\",Intro,LL1\n",
    )
    .unwrap();

    let script = format!(
        "year 2025\nload {}\nfriday 09-07-2025 DA\nquit\n",
        dir.path().display()
    );
    run_cli(&script)
        .success()
        .stdout(str_contains("is not a Friday"))
        .stdout(str_contains("🔄 Adjusted to most recent Friday: Friday, September 5th"))
        .stdout(str_contains("INSTRUCTOR SANITY CHECK"));
}
