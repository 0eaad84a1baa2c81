//! Tests for CSV export output.

use chrono::NaiveDate;
use rcm_export::{DownloadSink, MemorySink, export_residents, write_csv};
use rcm_model::{Resident, ResidentStatus};

fn residents() -> Vec<Resident> {
    vec![
        Resident {
            id: 1,
            name: "Tan Ah Kow".to_string(),
            age: 78,
            gender: "Male".to_string(),
            address: "Blk 12, Marine Parade".to_string(),
            contact_number: "91234567".to_string(),
            emergency_contact: "81234567".to_string(),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: ResidentStatus::Active,
        },
        Resident {
            id: 2,
            name: "Lim Bee Hoon".to_string(),
            age: 82,
            gender: "Female".to_string(),
            address: "Blk 45 Toa Payoh".to_string(),
            contact_number: "92221111".to_string(),
            emergency_contact: "82221111".to_string(),
            join_date: NaiveDate::from_ymd_opt(2023, 11, 5).unwrap(),
            status: ResidentStatus::Pending,
        },
    ]
}

#[test]
fn csv_matches_fixed_column_order() {
    let bytes = write_csv(&residents()).unwrap();
    let csv = String::from_utf8(bytes).unwrap();
    insta::assert_snapshot!(csv.trim_end(), @r#"
    Name,Age,Gender,Status,Address,Contact,Emergency Contact,Join Date
    Tan Ah Kow,78,Male,active,"Blk 12, Marine Parade",91234567,81234567,2024-01-15
    Lim Bee Hoon,82,Female,pending,Blk 45 Toa Payoh,92221111,82221111,2023-11-05
    "#);
}

#[test]
fn export_delivers_under_dated_name() {
    let mut sink = MemorySink::default();
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let name = export_residents(&residents(), date, &mut sink).unwrap();
    assert_eq!(name, "residents_export_2024-06-01.csv");
    assert_eq!(sink.deliveries.len(), 1);
    assert_eq!(sink.deliveries[0].0, name);
    assert!(!sink.deliveries[0].1.is_empty());
}

#[test]
fn empty_export_performs_no_delivery() {
    let mut sink = MemorySink::default();
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    assert!(export_residents(&[], date, &mut sink).is_err());
    assert!(sink.deliveries.is_empty());
}

#[test]
fn file_sink_writes_to_disk() {
    let dir = std::env::temp_dir().join("rcm-export-test");
    let mut sink = rcm_export::FileDownloadSink::new(&dir);
    sink.deliver("probe.csv", b"Name\n").unwrap();
    let written = std::fs::read(dir.join("probe.csv")).unwrap();
    assert_eq!(written, b"Name\n");
    let _ = std::fs::remove_dir_all(&dir);
}
