// Shared helpers for meetiq integration tests
#![allow(dead_code)]

use meetiq::portfolio::{PersistedRecurrence, SavedMeeting};
use meetiq::{Currency, Severity};
use std::path::PathBuf;

// Binary execution result for tests that need to verify CLI behavior
#[derive(Debug)]
pub struct BinaryResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

pub fn run_meetiq(args: &[&str], cwd: &std::path::Path) -> BinaryResult {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_meetiq"))
        .args(args)
        .current_dir(cwd)
        .env_remove("MEETIQ_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute meetiq");

    BinaryResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        success: output.status.success(),
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

pub fn saved_meeting(name: &str, annualized_cost: f64, score: f64) -> SavedMeeting {
    let risk = meetiq::compute_risk(score, annualized_cost);
    SavedMeeting {
        name: name.to_string(),
        attendees: 6,
        avg_salary: 100_000.0,
        duration_minutes: 60.0,
        recurrence: PersistedRecurrence::Weekly,
        currency: Currency::Usd,
        score,
        annualized_cost,
        annualized_waste: risk.annualized_waste,
        risk: risk.risk,
        severity: risk.severity,
    }
}

// Helper to write a file inside a fresh temp dir
pub fn create_test_file(content: &str, name: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join(name);
    std::fs::write(&file_path, content).expect("Failed to write test file");
    (temp_dir, file_path)
}

pub fn is_severe(meeting: &SavedMeeting) -> bool {
    meeting.severity == Severity::Severe
}
