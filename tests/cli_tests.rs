use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rsl, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_list_shows_events_with_coordinates() {
    let db_path = setup_test_db("cli_list");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Customer A"))
        .stdout(contains("Customer B"))
        .stdout(contains("55.00000,12.00000"))
        .stdout(contains("2 events"));
}

#[test]
fn test_list_empty_period() {
    let db_path = setup_test_db("cli_list_empty");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "list", "--period", "2024-01"])
        .assert()
        .success()
        .stdout(contains("No events between 2024-01-01 and 2024-01-31"));
}

#[test]
fn test_add_rejects_end_before_start() {
    let db_path = setup_test_db("cli_add_inverted");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "add", "2025-09-02", "12:00", "11:00", "--title", "Nope"])
        .assert()
        .failure()
        .stderr(contains("must be after start"));
}

#[test]
fn test_suggest_json_for_cached_location() {
    let db_path = setup_test_db("cli_suggest_json");
    init_db_with_data(&db_path);

    let output = rsl()
        .args([
            "--db", &db_path, "suggest", "--location", "Harbour 1", "--period", "2025-09-01",
            "--json",
        ])
        .output()
        .expect("run suggest");

    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[0]["start"], "2025-09-01 08:00");
    assert_eq!(rows[0]["end"], "2025-09-01 10:00");
    assert_eq!(rows[0]["added_km"], 0);
}

#[test]
fn test_suggest_table_with_coordinates() {
    let db_path = setup_test_db("cli_suggest_table");
    init_db_with_data(&db_path);

    rsl()
        .args([
            "--db", &db_path, "suggest", "--lat", "55.2", "--long", "12", "--period",
            "2025-09-01",
        ])
        .assert()
        .success()
        .stdout(contains("08:00"))
        .stdout(contains("09:30"))
        .stdout(contains("+22 km"))
        .stdout(contains("1 suggestions from 2 events"));
}

#[test]
fn test_suggest_trace_goes_to_stderr() {
    let db_path = setup_test_db("cli_suggest_trace");
    init_db_with_data(&db_path);

    rsl()
        .args([
            "--db", &db_path, "suggest", "--location", "Harbour 1", "--period", "2025-09-01",
            "--json", "--trace",
        ])
        .assert()
        .success()
        .stderr(contains("lost to travel"))
        .stderr(contains("ranked 1 suggestions"));
}

#[test]
fn test_suggest_unknown_location_fails() {
    let db_path = setup_test_db("cli_suggest_unknown");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "suggest", "--location", "Atlantis"])
        .assert()
        .failure()
        .stderr(contains("Location could not be resolved: Atlantis"));
}

#[test]
fn test_suggest_book_adds_event() {
    let db_path = setup_test_db("cli_suggest_book");
    init_db_with_data(&db_path);

    rsl()
        .args([
            "--db", &db_path, "suggest", "--location", "Harbour 1", "--period", "2025-09-01",
            "--book", "1", "--title", "New customer",
        ])
        .assert()
        .success()
        .stdout(contains("Booked #3"));

    rsl()
        .args(["--db", &db_path, "list", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("New customer"))
        .stdout(contains("2025-09-01 08:00"))
        .stdout(contains("3 events"));
}

#[test]
fn test_geo_set_get_list() {
    let db_path = setup_test_db("cli_geo");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "geo", "set", "Office", "--lat", "55.5", "--long", "12"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "geo", "get", "Office"])
        .assert()
        .success()
        .stdout(contains("55.50000,12.00000"));

    rsl()
        .args(["--db", &db_path, "geo", "list"])
        .assert()
        .success()
        .stdout(contains("Office"))
        .stdout(contains("Harbour 1"))
        .stdout(contains("Hill 7"));
}

#[test]
fn test_import_then_list() {
    let db_path = setup_test_db("cli_import");
    init_db_with_data(&db_path);

    let csv_path = temp_out("cli_import", "csv");
    fs::write(
        &csv_path,
        "title,start,end,location,calendar\n\
         Imported visit,2025-09-03 09:00,2025-09-03 10:00,\"55.1,12\",field\n",
    )
    .expect("write csv");

    rsl()
        .args(["--db", &db_path, "import", "--file", &csv_path])
        .assert()
        .success()
        .stdout(contains("Imported 1 events"));

    rsl()
        .args(["--db", &db_path, "list", "--period", "2025-09-03", "--calendar", "field"])
        .assert()
        .success()
        .stdout(contains("Imported visit"));
}

#[test]
fn test_export_json_and_csv() {
    let db_path = setup_test_db("cli_export");
    init_db_with_data(&db_path);

    let json_out = temp_out("cli_export", "json");
    rsl()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &json_out, "--range",
            "2025-09",
        ])
        .assert()
        .success();
    let content = fs::read_to_string(&json_out).expect("read json");
    assert!(content.contains("Customer A"));
    assert!(content.contains("\"lat\": 56.0"));

    let csv_out = temp_out("cli_export", "csv");
    rsl()
        .args(["--db", &db_path, "export", "--file", &csv_out, "--force"])
        .assert()
        .success();
    let content = fs::read_to_string(&csv_out).expect("read csv");
    assert!(content.starts_with("id,title,start,end,location,lat,long,calendar,source"));
    assert!(content.contains("Hill 7"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("cli_export_relative");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_del_with_yes() {
    let db_path = setup_test_db("cli_del");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rsl()
        .args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Customer A").not())
        .stdout(contains("Customer B"));

    rsl()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No event found with id 1"));
}

#[test]
fn test_log_print_lists_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("Added 'Customer A'"));
}

#[test]
fn test_db_info() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"));
}

#[test]
fn test_suggest_json_with_booking_stays_valid_json() {
    let db_path = setup_test_db("cli_suggest_json_book");
    init_db_with_data(&db_path);

    let output = rsl()
        .args([
            "--db", &db_path, "suggest", "--lat", "55", "--long", "12", "--period", "2025-09-01",
            "--json", "--book", "1", "--title", "X",
        ])
        .output()
        .expect("run suggest");

    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(rows.as_array().map(Vec::len), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Booked #3 'X'"));
}
