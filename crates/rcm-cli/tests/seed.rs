//! Integration tests for seed file loading.

use std::path::PathBuf;

use rcm_cli::seed::load_residents;
use rcm_model::ResidentStatus;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn loads_residents_from_json_seed() {
    let residents = load_residents(&fixture("residents.json")).unwrap();

    assert_eq!(residents.len(), 3);
    assert_eq!(residents[0].name, "Tan Ah Kow");
    assert_eq!(residents[0].status, ResidentStatus::Active);
    assert_eq!(residents[1].status, ResidentStatus::Inactive);
    assert_eq!(
        residents[2].join_date,
        chrono::NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    );
}

#[test]
fn missing_seed_file_reports_the_path() {
    let err = load_residents(&fixture("no-such-file.json")).unwrap_err();
    assert!(format!("{err:#}").contains("no-such-file.json"));
}

#[test]
fn malformed_seed_is_a_parse_error() {
    let dir = std::env::temp_dir().join("rcm-cli-seed-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_residents(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parse seed file"));
}
