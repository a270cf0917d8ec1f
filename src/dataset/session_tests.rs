use chrono::{TimeZone, Utc};

use super::*;
use crate::dataset::{EquipmentRecord, SortDirection, aggregate};

fn dataset(row_count: usize) -> Dataset {
    #[allow(clippy::cast_precision_loss)]
    let rows: Vec<EquipmentRecord> = (0..row_count)
        .map(|i| EquipmentRecord {
            name: format!("Unit-{i:03}"),
            kind: "Pump".to_string(),
            flowrate: i as f64,
            pressure: 1.0,
            temperature: 50.0,
        })
        .collect();
    let summary = aggregate(&rows).unwrap();
    Dataset {
        id: 1,
        filename: "equipment.csv".to_string(),
        upload_date: Utc.with_ymd_and_hms(2026, 8, 1, 10, 30, 0).unwrap(),
        rows,
        summary,
    }
}

fn meta(id: u64) -> DatasetMeta {
    let d = dataset(1);
    DatasetMeta {
        id,
        filename: d.filename,
        upload_date: d.upload_date,
        summary: d.summary,
    }
}

#[test]
fn new_session_is_empty() {
    let session = Session::default();
    assert!(session.current().is_none());
    assert!(session.history().is_empty());
    assert!(session.sort().is_none());
    assert_eq!(session.page(), 1);
    assert_eq!(session.total_pages(), 0);
    assert_eq!(session.page_view(), PageView::default());
}

#[test]
fn select_dataset_resets_sort_and_page() {
    let mut session = Session::new(10);
    session.select_dataset(dataset(25));
    session.request_sort(Column::Name);
    session.set_page(3);

    session.select_dataset(dataset(5));
    assert!(session.sort().is_none());
    assert_eq!(session.page(), 1);
}

#[test]
fn request_sort_same_key_flips_direction_and_keeps_page() {
    let mut session = Session::new(10);
    session.select_dataset(dataset(25));

    session.request_sort(Column::Flowrate);
    session.set_page(2);
    session.request_sort(Column::Flowrate);

    let sort = session.sort().unwrap();
    assert_eq!(sort.key, Column::Flowrate);
    assert_eq!(sort.direction, SortDirection::Descending);
    assert_eq!(session.page(), 2);
}

#[test]
fn request_sort_new_key_resets_page() {
    let mut session = Session::new(10);
    session.select_dataset(dataset(25));

    session.request_sort(Column::Flowrate);
    session.set_page(3);
    session.request_sort(Column::Name);

    let sort = session.sort().unwrap();
    assert_eq!(sort.key, Column::Name);
    assert_eq!(sort.direction, SortDirection::Ascending);
    assert_eq!(session.page(), 1);
}

#[test]
fn page_navigation_clamps_to_range() {
    let mut session = Session::new(10);
    session.select_dataset(dataset(25));
    assert_eq!(session.total_pages(), 3);

    session.prev_page();
    assert_eq!(session.page(), 1);

    session.next_page();
    session.next_page();
    session.next_page();
    assert_eq!(session.page(), 3);

    session.set_page(0);
    assert_eq!(session.page(), 1);
}

#[test]
fn page_view_reflects_session_state() {
    let mut session = Session::new(10);
    session.select_dataset(dataset(25));
    session.set_page(3);

    let view = session.page_view();
    assert_eq!(view.page, 3);
    assert_eq!(view.rows.len(), 5);
    assert_eq!(view.total_rows, 25);
}

#[test]
fn page_view_applies_sort() {
    let mut session = Session::new(10);
    session.select_dataset(dataset(5));
    session.request_sort(Column::Flowrate);
    session.request_sort(Column::Flowrate);

    let view = session.page_view();
    assert_eq!(view.rows[0].name, "Unit-004");
}

#[test]
fn set_history_replaces_list() {
    let mut session = Session::default();
    session.set_history(vec![meta(1), meta(2)]);
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history()[1].id, 2);
}

#[test]
fn clear_drops_everything() {
    let mut session = Session::new(10);
    session.select_dataset(dataset(25));
    session.set_history(vec![meta(1)]);
    session.request_sort(Column::Name);
    session.set_page(2);

    session.clear();
    assert!(session.current().is_none());
    assert!(session.history().is_empty());
    assert!(session.sort().is_none());
    assert_eq!(session.page(), 1);
}
