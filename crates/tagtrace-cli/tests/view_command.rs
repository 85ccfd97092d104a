use predicates::prelude::*;
use tagtrace_testing::{TestFixture, logs};

#[test]
fn console_view_prints_all_messages_in_order() {
    let fixture = TestFixture::new();
    let log = fixture.write_log("app.log", logs::sample_plain_log());

    fixture
        .cmd()
        .arg("view")
        .arg(&log)
        .args(["--mode", "console"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Network] connection established"))
        .stdout(predicate::str::contains("[Storage] disk almost full"))
        .stdout(predicate::str::contains("[General] unclassified startup message"));
}

#[test]
fn tui_mode_falls_back_to_console_without_a_terminal() {
    let fixture = TestFixture::new();
    let log = fixture.write_log("app.log", logs::sample_plain_log());

    // Default mode is tui; a piped stdout must not try to enter raw mode
    fixture
        .cmd()
        .arg("view")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("connection established"));
}

#[test]
fn min_level_hides_lower_severities() {
    let fixture = TestFixture::new();
    let log = fixture.write_log("app.log", logs::sample_plain_log());

    fixture
        .cmd()
        .arg("view")
        .arg(&log)
        .args(["--mode", "console", "--min-level", "warning"])
        .assert()
        .success()
        .stdout(predicate::str::contains("disk almost full"))
        .stdout(predicate::str::contains("connection lost"))
        .stdout(predicate::str::contains("connection established").not())
        .stdout(predicate::str::contains("cleanup finished").not());
}

#[test]
fn tag_filter_is_a_regex_over_routing_tags() {
    let fixture = TestFixture::new();
    let log = fixture.write_log("app.log", logs::sample_plain_log());

    fixture
        .cmd()
        .arg("view")
        .arg(&log)
        .args(["--mode", "console", "--tag", "^Net"])
        .assert()
        .success()
        .stdout(predicate::str::contains("connection established"))
        .stdout(predicate::str::contains("disk almost full").not())
        .stdout(predicate::str::contains("unclassified").not());
}

#[test]
fn invalid_tag_pattern_is_rejected() {
    let fixture = TestFixture::new();
    let log = fixture.write_log("app.log", logs::sample_plain_log());

    fixture
        .cmd()
        .arg("view")
        .arg(&log)
        .args(["--mode", "console", "--tag", "("])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --tag pattern"));
}

#[test]
fn jsonl_logs_are_understood() {
    let fixture = TestFixture::new();
    let log = fixture.write_log("app.jsonl", logs::sample_jsonl_log());

    fixture
        .cmd()
        .arg("view")
        .arg(&log)
        .args(["--mode", "console", "--min-level", "critical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("connection lost"))
        .stdout(predicate::str::contains("disk almost full").not());
}

#[test]
fn directory_target_picks_the_newest_log_file() {
    let fixture = TestFixture::new();
    let old = fixture.write_log("old.log", "2026-08-07T09:00:00Z INFO [Old] stale\n");
    let new = fixture.write_log("new.log", "2026-08-07T10:00:00Z INFO [New] fresh\n");

    let base = filetime::FileTime::from_unix_time(1_700_000_000, 0);
    filetime::set_file_mtime(&old, base).unwrap();
    filetime::set_file_mtime(&new, filetime::FileTime::from_unix_time(1_700_000_100, 0)).unwrap();

    fixture
        .cmd()
        .arg("view")
        .arg(fixture.log_root())
        .args(["--mode", "console"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fresh"))
        .stdout(predicate::str::contains("stale").not());
}

#[test]
fn directory_without_log_files_fails() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .arg("view")
        .arg(fixture.log_root())
        .args(["--mode", "console"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No .log or .jsonl files"));
}
