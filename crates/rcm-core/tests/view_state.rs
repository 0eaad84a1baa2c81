//! Behavioral tests for the resident view-state manager.

use chrono::NaiveDate;
use rcm_core::{ResidentManager, SortDirection, SortField, StatusFilter};
use rcm_model::{Resident, ResidentStatus};

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn resident(id: u64, name: &str, age: u32, status: ResidentStatus, joined: (i32, u32, u32)) -> Resident {
    Resident {
        id,
        name: name.to_string(),
        age,
        gender: if id % 2 == 0 { "Female" } else { "Male" }.to_string(),
        address: format!("Blk {id} Clementi Ave"),
        contact_number: format!("9{id:07}"),
        emergency_contact: format!("8{id:07}"),
        join_date: NaiveDate::from_ymd_opt(joined.0, joined.1, joined.2).unwrap(),
        status,
    }
}

/// 10 residents: 5 active, 3 inactive, 2 pending.
fn roster() -> Vec<Resident> {
    use ResidentStatus::{Active, Inactive, Pending};
    vec![
        resident(1, "Ang Mei Ling", 72, Active, (2024, 1, 10)),
        resident(2, "Chua Boon Keng", 85, Active, (2023, 7, 2)),
        resident(3, "Goh Swee Hong", 68, Active, (2024, 3, 18)),
        resident(4, "Ho Lai Fong", 90, Active, (2022, 12, 25)),
        resident(5, "Koh Teck Seng", 77, Active, (2024, 5, 20)),
        resident(6, "Lim Ah Mui", 81, Inactive, (2023, 2, 14)),
        resident(7, "Ong Kim Huat", 74, Inactive, (2023, 9, 9)),
        resident(8, "Tan Siew Choo", 88, Inactive, (2022, 6, 30)),
        resident(9, "Wong Yoke Lan", 70, Pending, (2024, 5, 28)),
        resident(10, "Yeo Chin Bee", 83, Pending, (2024, 4, 1)),
    ]
}

fn manager() -> ResidentManager {
    ResidentManager::new(roster()).with_clock(fixed_today)
}

// Property 1: visible = { r : matches(r, params) }, order-independent.
#[test]
fn filter_composition_is_set_intersection() {
    let mut m = ResidentManager::new(vec![
        resident(1, "A", 70, ResidentStatus::Active, (2024, 1, 1)),
        resident(2, "B", 80, ResidentStatus::Active, (2024, 1, 1)),
        resident(3, "C", 90, ResidentStatus::Active, (2024, 1, 1)),
    ])
    .with_clock(fixed_today);
    m.set_age_range(Some(75), Some(95));
    let ids = m.visible_ids();
    assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![2, 3]);
}

// Property 2: sort desc equals reverse of sort asc.
#[test]
fn direction_toggle_reverses_order() {
    for field in [SortField::Name, SortField::Age, SortField::JoinDate] {
        let mut m = manager();
        m.set_sort(field);
        if m.params().sort_direction != SortDirection::Asc {
            m.set_sort(field);
        }
        let asc: Vec<u64> = m.visible().iter().map(|r| r.id).collect();
        m.set_sort(field);
        let desc: Vec<u64> = m.visible().iter().map(|r| r.id).collect();
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed, "field {field:?}");
    }
}

// Property 3: deleting below the current page's range clamps the page.
#[test]
fn deletion_clamps_current_page() {
    let mut m = ResidentManager::new(
        (1..=7)
            .map(|i| resident(i, &format!("R{i}"), 70 + i as u32, ResidentStatus::Active, (2024, 1, 1)))
            .collect(),
    )
    .with_clock(fixed_today);
    m.set_page_size(5);
    assert_eq!(m.total_pages(), 2);
    m.set_page(2);
    assert_eq!(m.params().current_page, 2);

    for id in [1, 2, 3] {
        m.delete_one(id).unwrap();
    }
    // 4 visible, page size 5: one page, and the manager clamped down to it.
    assert_eq!(m.total_pages(), 1);
    assert_eq!(m.params().current_page, 1);
}

// An edit that moves a record out of the active filter shrinks the
// visible set, so the page must clamp like any other shrinking operation.
#[test]
fn update_clamps_page_when_record_leaves_visible_set() {
    let mut m = ResidentManager::new(
        (1..=6)
            .map(|i| resident(i, &format!("R{i}"), 70 + i as u32, ResidentStatus::Active, (2024, 1, 1)))
            .collect(),
    )
    .with_clock(fixed_today);
    m.set_status_filter(StatusFilter::Only(ResidentStatus::Active));
    m.set_page_size(5);
    m.set_page(2);
    assert_eq!(m.params().current_page, 2);

    let mut edit = rcm_model::ResidentDraft::from(m.residents()[5].clone());
    edit.status = Some(ResidentStatus::Inactive);
    m.update(6, edit).unwrap();

    assert_eq!(m.total_pages(), 1);
    assert_eq!(m.params().current_page, 1);
}

// Property 4: changing the sort field empties the selection.
#[test]
fn sort_change_clears_selection() {
    let mut m = manager();
    m.toggle_select(1);
    m.toggle_select(2);
    assert_eq!(m.selection().len(), 2);
    m.set_sort(SortField::Age);
    assert!(m.selection().is_empty());
}

#[test]
fn status_filter_and_page_size_clear_selection() {
    let mut m = manager();
    m.toggle_select(1);
    m.set_status_filter(StatusFilter::Only(ResidentStatus::Active));
    assert!(m.selection().is_empty());

    m.toggle_select(1);
    m.set_page_size(25);
    assert!(m.selection().is_empty());
}

// Property 5: bulk delete only removes selected ids that are still visible.
#[test]
fn bulk_delete_ignores_hidden_selection() {
    let mut m = manager();
    m.toggle_select(1); // active
    m.toggle_select(5); // active
    m.toggle_select(6); // inactive

    m.set_active_tab(StatusFilter::Only(ResidentStatus::Active));
    let removed = m.delete_selected().unwrap();
    assert_eq!(removed, 2);

    let remaining: Vec<u64> = m.residents().iter().map(|r| r.id).collect();
    assert!(!remaining.contains(&1));
    assert!(!remaining.contains(&5));
    assert!(remaining.contains(&6), "hidden id 6 must survive");
    assert!(m.selection().is_empty());
}

#[test]
fn bulk_set_status_targets_visible_selection() {
    let mut m = manager();
    m.toggle_select(9);
    m.toggle_select(10);
    m.set_active_tab(StatusFilter::Only(ResidentStatus::Pending));
    let changed = m.bulk_set_status(ResidentStatus::Active).unwrap();
    assert_eq!(changed, 2);
    assert!(
        m.residents()
            .iter()
            .filter(|r| [9, 10].contains(&r.id))
            .all(|r| r.status == ResidentStatus::Active)
    );
}

// Property 6: fresh ids are max + 1, starting from 1.
#[test]
fn id_assignment_is_max_plus_one() {
    let mut empty = ResidentManager::default().with_clock(fixed_today);
    let first = empty
        .create(rcm_model::ResidentDraft {
            name: "First".to_string(),
            age: 65,
            gender: "Male".to_string(),
            address: "Blk 1".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(first.id, 1);

    let mut m = manager();
    let created = m
        .create(rcm_model::ResidentDraft {
            name: "Eleventh".to_string(),
            age: 66,
            gender: "Female".to_string(),
            address: "Blk 2".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(created.id, 11);
}

// Property 7: export with an empty effective selection is a caller-visible
// no-op failure.
#[test]
fn export_with_empty_effective_selection_fails() {
    let mut m = manager();
    m.toggle_select(6); // inactive
    m.set_active_tab(StatusFilter::Only(ResidentStatus::Active));
    let before = m.residents().len();
    assert!(m.export_selected().is_err());
    assert_eq!(m.residents().len(), before);
}

#[test]
fn export_returns_rows_without_mutating() {
    let mut m = manager();
    m.toggle_select(2);
    m.toggle_select(4);
    let rows = m.export_selected().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(m.selection().len(), 2, "export must not clear selection");
}

// Property 8: the end-to-end scenario from the contract.
#[test]
fn end_to_end_scenario() {
    let mut m = manager();

    m.set_status_filter(StatusFilter::Only(ResidentStatus::Active));
    assert_eq!(m.visible().len(), 5);

    m.set_sort(SortField::Age);
    let ascending: Vec<u64> = m.visible().iter().map(|r| r.id).collect();
    m.set_sort(SortField::Age); // desc
    m.set_sort(SortField::Age); // back to asc
    let after_toggles: Vec<u64> = m.visible().iter().map(|r| r.id).collect();
    assert_eq!(after_toggles, ascending);

    m.set_page_size(2);
    assert_eq!(m.total_pages(), 3);
    assert_eq!(m.params().current_page, 1);

    m.select_all_on_page();
    // Ages of the active residents: 68 (id 3), 72 (id 1), 77, 85, 90.
    let selected: Vec<u64> = m.selection().iter().copied().collect();
    assert_eq!(selected, vec![1, 3]);
}

#[test]
fn selection_accumulates_across_pages() {
    let mut m = manager();
    m.set_page_size(5);
    m.select_all_on_page();
    m.set_page(2);
    m.select_all_on_page();
    assert_eq!(m.selection().len(), 10);

    m.deselect_all_on_page();
    assert_eq!(m.selection().len(), 5, "only the current page deselects");
}

#[test]
fn search_narrows_and_page_clamps() {
    let mut m = manager();
    m.set_page_size(5);
    m.set_page(2);
    m.set_search_query("Ang Mei");
    assert_eq!(m.visible().len(), 1);
    assert_eq!(m.params().current_page, 1);
}

#[test]
fn join_date_range_filters_inclusively() {
    let mut m = manager();
    m.set_join_date_range(
        NaiveDate::from_ymd_opt(2024, 1, 10),
        NaiveDate::from_ymd_opt(2024, 3, 18),
    );
    let ids = m.visible_ids();
    assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn stats_count_by_status_and_recency() {
    let m = manager();
    let stats = m.stats();
    assert_eq!(stats.total, 10);
    assert_eq!(stats.active, 5);
    assert_eq!(stats.inactive, 3);
    assert_eq!(stats.pending, 2);
    // Joined within 30 days of 2024-06-01: ids 5 (05-20) and 9 (05-28).
    assert_eq!(stats.recent_joins, 2);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arb_resident(id: u64) -> impl Strategy<Value = Resident> {
        (
            "[A-Za-z ]{1,12}",
            60u32..100,
            prop_oneof![Just("Female"), Just("Male")],
            0u32..1000,
        )
            .prop_map(move |(name, age, gender, day_offset)| {
                let base = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
                Resident {
                    id,
                    name,
                    age,
                    gender: gender.to_string(),
                    address: format!("Blk {id}"),
                    contact_number: format!("9{id:07}"),
                    emergency_contact: String::new(),
                    join_date: base + chrono::Days::new(u64::from(day_offset)),
                    status: ResidentStatus::Active,
                }
            })
    }

    fn arb_roster() -> impl Strategy<Value = Vec<Resident>> {
        (1usize..20).prop_flat_map(|n| {
            (0..n as u64)
                .map(|i| arb_resident(i + 1))
                .collect::<Vec<_>>()
        })
    }

    proptest! {
        #[test]
        fn desc_is_reverse_of_asc(roster in arb_roster(), field_idx in 0usize..4) {
            let field = [SortField::Name, SortField::Age, SortField::Gender, SortField::JoinDate][field_idx];
            let mut m = ResidentManager::new(roster).with_clock(fixed_today);
            m.set_sort(field);
            let asc: Vec<u64> = m.visible().iter().map(|r| r.id).collect();
            m.set_sort(field);
            let desc: Vec<u64> = m.visible().iter().map(|r| r.id).collect();
            let mut reversed = asc;
            reversed.reverse();
            prop_assert_eq!(desc, reversed);
        }

        #[test]
        fn current_page_always_in_bounds(
            roster in arb_roster(),
            page_size_idx in 0usize..4,
            requested_page in 0usize..10,
            deletions in proptest::collection::vec(1u64..20, 0..10),
        ) {
            let mut m = ResidentManager::new(roster).with_clock(fixed_today);
            m.set_page_size(rcm_core::PAGE_SIZES[page_size_idx]);
            m.set_page(requested_page);
            for id in deletions {
                let _ = m.delete_one(id);
            }
            let page = m.params().current_page;
            prop_assert!(page >= 1);
            prop_assert!(page <= m.total_pages());
        }
    }
}
