//! Tests for rcm-model types.

use chrono::NaiveDate;
use rcm_model::{Resident, ResidentDraft, ResidentStatus};

fn resident() -> Resident {
    Resident {
        id: 3,
        name: "Lim Bee Hoon".to_string(),
        age: 82,
        gender: "Female".to_string(),
        address: "Blk 45 Toa Payoh".to_string(),
        contact_number: "92221111".to_string(),
        emergency_contact: "82221111".to_string(),
        join_date: NaiveDate::from_ymd_opt(2023, 11, 5).unwrap(),
        status: ResidentStatus::Active,
    }
}

#[test]
fn resident_serializes_round_trip() {
    let json = serde_json::to_string(&resident()).expect("serialize resident");
    let round: Resident = serde_json::from_str(&json).expect("deserialize resident");
    assert_eq!(round, resident());
}

#[test]
fn status_serializes_lowercase() {
    let json = serde_json::to_string(&ResidentStatus::Inactive).unwrap();
    assert_eq!(json, "\"inactive\"");
}

#[test]
fn draft_from_resident_keeps_hand_entered_fields() {
    let draft = ResidentDraft::from(resident());
    assert_eq!(draft.name, "Lim Bee Hoon");
    assert_eq!(draft.status, Some(ResidentStatus::Active));

    // The draft drops id and join date; re-materializing re-supplies both.
    let rebuilt = draft.into_resident(3, NaiveDate::from_ymd_opt(2023, 11, 5).unwrap());
    assert_eq!(rebuilt, resident());
}

#[test]
fn seed_array_deserializes() {
    let seed = r#"[
        {
            "id": 1,
            "name": "Tan Ah Kow",
            "age": 78,
            "gender": "Male",
            "address": "Blk 12 Marine Parade",
            "contact_number": "91234567",
            "emergency_contact": "81234567",
            "join_date": "2024-01-15",
            "status": "pending"
        }
    ]"#;
    let residents: Vec<Resident> = serde_json::from_str(seed).expect("deserialize seed");
    assert_eq!(residents.len(), 1);
    assert_eq!(residents[0].status, ResidentStatus::Pending);
}
