#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use routeslot::config::HOME_ENV;
use routeslot::models::{GeoPoint, LocatedEvent};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's real config directory.
pub fn rsl() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("routeslot_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("routeslot");
    cmd.env(HOME_ENV, &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_routeslot.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add the two-appointment day used by many tests:
/// 10:00-11:00 at 55,12 and 14:00-15:00 at 56,13 on 2025-09-01.
pub fn init_db_with_data(db_path: &str) {
    rsl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rsl()
        .args([
            "--db", db_path, "add", "2025-09-01", "10:00", "11:00", "--title", "Customer A",
            "--location", "Harbour 1", "--lat", "55", "--long", "12",
        ])
        .assert()
        .success();

    rsl()
        .args([
            "--db", db_path, "add", "2025-09-01", "14:00", "15:00", "--title", "Customer B",
            "--location", "Hill 7", "--lat", "56", "--long", "13",
        ])
        .assert()
        .success();
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date")
}

pub fn dt(h: u32, m: u32) -> NaiveDateTime {
    day().and_hms_opt(h, m, 0).expect("valid time")
}

pub fn pt(lat: f64, long: f64) -> GeoPoint {
    GeoPoint::new(lat, long).expect("valid point")
}

pub fn ev(start: (u32, u32), end: (u32, u32), point: Option<GeoPoint>) -> LocatedEvent {
    LocatedEvent::new(dt(start.0, start.1), dt(end.0, end.1), point)
}
