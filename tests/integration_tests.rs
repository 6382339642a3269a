use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{HEADER, TestEnv};

#[test]
fn test_init_creates_table_with_header() {
    let env = TestEnv::new();

    env.jt()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert_eq!(env.table_content().trim_end(), HEADER);
    // --test never writes the config file
    assert!(!env.path("jobtracker.conf").exists());
}

#[test]
fn test_init_keeps_existing_rows() {
    let env = TestEnv::new();
    env.add("Acme", "Backend Engineer", "Applied", None);

    env.jt().args(["--test", "init"]).assert().success();

    assert!(env.table_content().contains("Acme"));
}

#[test]
fn test_init_writes_config_file() {
    let env = TestEnv::new();

    env.jt().arg("init").assert().success();

    let conf = fs::read_to_string(env.path("jobtracker.conf")).expect("read config");
    assert!(conf.contains("table:"));
    assert!(conf.contains("default_status: Applied"));
}

#[test]
fn test_add_then_list() {
    let env = TestEnv::new();

    env.jt()
        .args([
            "add",
            "--date",
            "2024-03-01",
            "--company",
            "  Acme  ",
            "--role",
            "Backend Engineer",
            "--method",
            "portal",
            "--status",
            "Interview",
            "--follow-up",
            "2024-03-08",
            "--notes",
            "second round",
        ])
        .assert()
        .success()
        .stdout(contains("Application added: Acme - Backend Engineer"));

    env.jt()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("All Job Applications"))
        .stdout(contains("2024-03-01"))
        .stdout(contains("Acme"))
        .stdout(contains("second round"));

    assert!(
        env.table_content()
            .contains("2024-03-01,Acme,Backend Engineer,portal,,Interview,2024-03-08,second round")
    );
}

#[test]
fn test_add_invalid_dates_are_substituted() {
    let env = TestEnv::new();

    env.jt()
        .args([
            "add",
            "--date",
            "yesterday",
            "--company",
            "Globex",
            "--role",
            "SRE",
            "--follow-up",
            "31/02/2024",
        ])
        .assert()
        .success()
        .stdout(contains("Using today's date"))
        .stdout(contains("Leaving blank"));

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let content = env.table_content();
    let row = content.lines().nth(1).expect("one data row");

    // default status from config, blank follow-up
    assert_eq!(row, format!("{today},Globex,SRE,,,Applied,,"));
}

#[test]
fn test_list_empty_store() {
    let env = TestEnv::new();

    env.jt()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No applications found."));
}

#[test]
fn test_list_filters() {
    let env = TestEnv::new();
    env.add("Acme Corp", "Dev", "Applied", None);
    env.add("Globex", "Ops", "Interview", None);
    env.add("ACME Labs", "QA", "Interview", None);

    env.jt()
        .args(["list", "--company", "acme"])
        .assert()
        .success()
        .stdout(contains("Acme Corp"))
        .stdout(contains("ACME Labs"))
        .stdout(contains("Globex").not())
        .stdout(contains("Shown: 2 of 3"));

    env.jt()
        .args(["list", "--company", "acme", "--status", "Interview"])
        .assert()
        .success()
        .stdout(contains("ACME Labs"))
        .stdout(contains("Acme Corp").not());

    env.jt()
        .args(["list", "--status", "Offer"])
        .assert()
        .success()
        .stdout(contains("No applications match"));
}

#[test]
fn test_del_with_yes() {
    let env = TestEnv::new();
    env.add("Acme", "Dev", "Applied", None);
    env.add("Globex", "Ops", "Applied", None);
    env.add("Initech", "QA", "Applied", None);

    env.jt()
        .args(["del", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("Globex - Ops"));

    let content = env.table_content();
    assert!(!content.contains("Globex"));
    let companies: Vec<&str> = content
        .lines()
        .skip(1)
        .map(|l| l.split(',').nth(1).unwrap_or_default())
        .collect();
    assert_eq!(companies, vec!["Acme", "Initech"]);
}

#[test]
fn test_del_cancelled_keeps_record() {
    let env = TestEnv::new();
    env.add("Acme", "Dev", "Applied", None);

    env.jt()
        .args(["del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Deletion cancelled."));

    assert!(env.table_content().contains("Acme"));
}

#[test]
fn test_del_confirmed_from_stdin() {
    let env = TestEnv::new();
    env.add("Acme", "Dev", "Applied", None);

    env.jt()
        .args(["del", "1"])
        .write_stdin("y\n")
        .assert()
        .success();

    assert_eq!(env.table_content().trim_end(), common::HEADER);
}

#[test]
fn test_del_out_of_range_fails_without_changes() {
    let env = TestEnv::new();
    env.add("Acme", "Dev", "Applied", None);
    let before = env.table_content();

    env.jt()
        .args(["del", "5", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Invalid application number 5"));

    env.jt().args(["del", "0", "--yes"]).assert().failure();

    assert_eq!(env.table_content(), before);
}

#[test]
fn test_stats_empty_store() {
    let env = TestEnv::new();

    env.jt()
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("No applications found."));
}

#[test]
fn test_stats_scenario() {
    let env = TestEnv::new();
    env.add("A", "r1", "Applied", Some("2024-01-01"));
    env.add("B", "r2", "Applied", None);
    env.add("C", "r3", "Interview", Some("2024-02-01"));
    env.add("D", "r4", "Offer", None);

    env.jt()
        .args(["stats", "--as-of", "2024-01-15"])
        .assert()
        .success()
        .stdout(contains("Application Stats"))
        .stdout(contains("50.0%"))
        .stdout(contains("Applications → Interview: 25.0%"))
        .stdout(contains("Applications → Offer: 25.0%"))
        .stdout(contains("Follow-ups pending today or earlier: 1"))
        .stdout(contains("Total Applications: 4"));
}

#[test]
fn test_followups_boundary_is_inclusive() {
    let env = TestEnv::new();
    env.add("Due", "r1", "Applied", Some("2024-01-01"));
    env.add("Later", "r2", "Applied", Some("2024-01-02"));
    env.add("Never", "r3", "Applied", None);

    env.jt()
        .args(["followups", "--as-of", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("Follow-ups Pending"))
        .stdout(contains("Due"))
        .stdout(contains("Later").not())
        .stdout(contains("Never").not());

    env.jt()
        .args(["followups", "--as-of", "2023-12-31"])
        .assert()
        .success()
        .stdout(contains("No follow-ups pending"));
}

#[test]
fn test_followups_invalid_as_of_fails() {
    let env = TestEnv::new();
    env.add("Acme", "Dev", "Applied", Some("2024-01-01"));

    env.jt()
        .args(["followups", "--as-of", "tomorrow"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: tomorrow"));
}

#[test]
fn test_menu_session() {
    let env = TestEnv::new();

    let script = "1\n2024-05-02\nInitech\nAnalyst\nemail\nBill\n\n\nfound on a board\n2\n4\n6\n";

    env.jt()
        .arg("menu")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("=== Job Application Tracker ==="))
        .stdout(contains("Application added: Initech - Analyst"))
        .stdout(contains("Total Applications: 1"))
        .stdout(contains("Goodbye!"));

    assert!(
        env.table_content()
            .contains("2024-05-02,Initech,Analyst,email,Bill,Applied,,found on a board")
    );
}

#[test]
fn test_log_records_operations() {
    let env = TestEnv::new();
    env.add("Acme", "Dev", "Applied", None);
    env.jt().args(["del", "1", "--yes"]).assert().success();

    env.jt()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Audit log"))
        .stdout(contains("Acme - Dev"))
        .stdout(contains("Deleted application #1"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let env = TestEnv::new();
    env.add("Acme", "Dev", "Applied", None);

    let plain = env.path("backup/applications.csv");
    env.jt()
        .args(["backup", "--file", &plain.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert_eq!(fs::read_to_string(&plain).expect("read backup"), env.table_content());

    let zipped = env.path("backup/archive.csv");
    env.jt()
        .args(["backup", "--file", &zipped.to_string_lossy(), "--compress"])
        .assert()
        .success();
    assert!(env.path("backup/archive.zip").exists());
    assert!(!zipped.exists());
}

#[test]
fn test_backup_onto_table_is_refused() {
    let env = TestEnv::new();
    env.add("Acme", "Dev", "Applied", None);
    let before = env.table_content();

    env.jt()
        .args(["backup", "--file", &env.table_str(), "--force"])
        .assert()
        .failure()
        .stderr(contains("applications table itself"));

    assert_eq!(env.table_content(), before);
}

#[test]
fn test_config_print() {
    let env = TestEnv::new();

    env.jt()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_status: Applied"))
        .stdout(contains("Tech Assessment"));
}
