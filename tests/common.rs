#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment: a temporary config home plus a table path inside it.
pub struct TestEnv {
    pub home: TempDir,
    pub table: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("create temp dir");
        let table = home.path().join("applications.csv");
        Self { home, table }
    }

    pub fn table_str(&self) -> String {
        self.table.to_string_lossy().to_string()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    /// `jobtracker --table <table> ...` with the config home redirected.
    pub fn jt(&self) -> Command {
        let mut cmd = jt_with_home(self.home.path());
        cmd.args(["--table", &self.table_str()]);
        cmd
    }

    pub fn add(&self, company: &str, role: &str, status: &str, follow_up: Option<&str>) {
        let mut args = vec![
            "add",
            "--date",
            "2024-01-02",
            "--company",
            company,
            "--role",
            role,
            "--status",
            status,
        ];
        if let Some(f) = follow_up {
            args.extend(["--follow-up", f]);
        }
        self.jt().args(&args).assert().success();
    }

    pub fn table_content(&self) -> String {
        std::fs::read_to_string(&self.table).expect("read table")
    }
}

pub fn jt_with_home(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("jobtracker");
    cmd.env("JOBTRACKER_HOME", home);
    cmd
}

pub const HEADER: &str = "Date,Company,Role,Application Method,Contact,Status,Follow-up Date,Notes";
