mod common;
use common::{cdia, event_rows, init_db, setup_test_db, temp_out};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn add_event(db: &str, kind: &str, date: &str, time: &str) {
    cdia()
        .args(["--db", db, "add", kind, "--date", date, "--time", time])
        .assert()
        .success();
}

#[test]
fn test_export_csv_all() {
    let db = setup_test_db("export_csv_all");
    init_db(&db);
    add_event(&db, "full", "2024-03-15", "09:00");

    let out = temp_out("export_csv_all", "csv");

    cdia()
        .args(["--db", &db, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with('\u{feff}'), "missing UTF-8 BOM");
    assert!(content.contains("Funcionário,Data,Hora,Dia da Semana,Tipo,Valor (R$),Mês,Ano"));
    assert!(content.contains("\"15/03/2024\""));
    assert!(content.contains("\"09:00\""));
    assert!(content.contains("\"sexta-feira\""));
    assert!(content.contains("\"Dia Inteiro\""));
    assert!(content.contains("\"120.00\""));
    assert!(content.contains("\"março\""));
    assert!(content.contains("\"2024\""));
}

#[test]
fn test_export_uses_configured_user_name() {
    let db = setup_test_db("export_user_name");
    init_db(&db);

    cdia()
        .args(["--db", &db, "settings", "--set", "user_name=João Silva"])
        .assert()
        .success();
    add_event(&db, "half", "2024-03-15", "09:00");

    let out = temp_out("export_user_name", "csv");
    cdia()
        .args(["--db", &db, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("\"João Silva\""));
}

#[test]
fn test_export_month_range_filters() {
    let db = setup_test_db("export_month_range");
    init_db(&db);
    add_event(&db, "full", "2024-03-15", "09:00");
    add_event(&db, "full", "2024-04-15", "09:00");

    let out = temp_out("export_month_range", "csv");

    cdia()
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--range", "2024-03",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("\"15/03/2024\""));
    assert!(!content.contains("\"15/04/2024\""));
}

#[test]
fn test_export_day_range_filters() {
    let db = setup_test_db("export_day_range");
    init_db(&db);
    add_event(&db, "half", "2024-03-15", "09:00");
    add_event(&db, "half", "2024-03-16", "09:00");

    let out = temp_out("export_day_range", "csv");

    cdia()
        .args([
            "--db",
            &db,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "2024-03-15",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("\"15/03/2024\""));
    assert!(!content.contains("\"16/03/2024\""));
}

#[test]
fn test_export_empty_range_writes_no_file() {
    let db = setup_test_db("export_empty_range");
    init_db(&db);
    add_event(&db, "half", "2024-03-15", "09:00");

    let out = temp_out("export_empty_range", "csv");

    cdia()
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--range", "2030-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events found"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_invalid_range_fails() {
    let db = setup_test_db("export_bad_range");
    init_db(&db);
    add_event(&db, "half", "2024-03-15", "09:00");

    let out = temp_out("export_bad_range", "csv");

    cdia()
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--range", "next-week",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid export range"));
}

#[test]
fn test_export_range_with_multibyte_text_fails_cleanly() {
    let db = setup_test_db("export_multibyte_range");
    init_db(&db);
    add_event(&db, "half", "2024-03-15", "09:00");

    let out = temp_out("export_multibyte_range", "csv");

    // 7 bytes but not 7 ASCII characters; must be rejected, not crash
    cdia()
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--range", "aaaéaa",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid export range"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_empty_range_skips_overwrite_prompt() {
    let db = setup_test_db("export_empty_no_prompt");
    init_db(&db);
    add_event(&db, "half", "2024-03-15", "09:00");

    let out = temp_out("export_empty_no_prompt", "csv");
    fs::write(&out, "existing").expect("seed existing file");

    // No stdin provided: if the overwrite prompt ran first it would fail
    cdia()
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--range", "2030-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events found"))
        .stdout(predicate::str::contains("Overwrite?").not());

    assert_eq!(fs::read_to_string(&out).expect("read"), "existing");
}

#[test]
fn test_export_json() {
    let db = setup_test_db("export_json");
    init_db(&db);
    add_event(&db, "full", "2024-03-15", "09:00");

    let out = temp_out("export_json", "json");

    cdia()
        .args(["--db", &db, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"date\": \"15/03/2024\""));
    assert!(content.contains("\"kind\": \"Dia Inteiro\""));
    assert!(content.contains("\"amount\": \"120.00\""));
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let db = setup_test_db("export_no_overwrite");
    init_db(&db);
    add_event(&db, "half", "2024-03-15", "09:00");

    let out = temp_out("export_no_overwrite", "csv");
    fs::write(&out, "existing").expect("seed existing file");

    cdia()
        .args(["--db", &db, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&out).expect("read"), "existing");
}

#[test]
fn test_export_import_round_trip() {
    let src = setup_test_db("round_trip_src");
    init_db(&src);
    add_event(&src, "full", "2024-03-15", "09:00");
    add_event(&src, "half", "2024-03-16", "14:30");

    let out = temp_out("round_trip", "csv");
    cdia()
        .args(["--db", &src, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let dst = setup_test_db("round_trip_dst");
    init_db(&dst);
    cdia()
        .args(["--db", &dst, "import", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 records imported"));

    let mut src_rows = event_rows(&src);
    let mut dst_rows = event_rows(&dst);
    src_rows.sort_by(|a, b| a.0.cmp(&b.0));
    dst_rows.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(src_rows.len(), dst_rows.len());
    for (s, d) in src_rows.iter().zip(dst_rows.iter()) {
        // timestamps match to the minute, kind and amount exactly
        assert_eq!(s.0[..16], d.0[..16]);
        assert_eq!(s.1, d.1);
        assert!((s.2 - d.2).abs() < 0.005);
    }
}
