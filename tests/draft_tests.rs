use chrono::{Duration, Local, TimeZone};
use indexmap::IndexMap;

use stitchbook::forms::draft::DraftAutosave;
use stitchbook::models::form::FormType;
use stitchbook::store::{MemoryMedium, PersistenceStore, StorageMedium};
use stitchbook::utils::clock::FixedClock;

fn values(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_draft_round_trip_populates_empty_fields() {
    let mut medium = MemoryMedium::new();
    let autosave = DraftAutosave::new(FormType::Measurement, 2);
    let now = Local.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap();

    autosave
        .save_now(&mut medium, &values(&[("Name", "Jane")]), now)
        .unwrap();

    let draft = autosave.load(&mut medium).unwrap().expect("draft present");
    let mut form = values(&[("Name", ""), ("Email", "")]);
    DraftAutosave::apply_to(&draft, &mut form);
    assert_eq!(form["Name"], "Jane");
    assert_eq!(form["Email"], "");
}

#[test]
fn test_draft_never_overwrites_current_edits() {
    let draft = values(&[("Name", "Jane"), ("Email", "jane@example.com")]);
    let mut form = values(&[("Name", "Joan"), ("Email", "")]);
    DraftAutosave::apply_to(&draft, &mut form);

    // the edit in this session wins
    assert_eq!(form["Name"], "Joan");
    assert_eq!(form["Email"], "jane@example.com");
}

#[test]
fn test_draft_is_single_use() {
    let mut medium = MemoryMedium::new();
    let autosave = DraftAutosave::new(FormType::Measurement, 2);
    let now = Local::now();

    autosave
        .save_now(&mut medium, &values(&[("Name", "Jane")]), now)
        .unwrap();
    assert!(autosave.load(&mut medium).unwrap().is_some());

    // the load consumed it
    assert!(autosave.load(&mut medium).unwrap().is_none());
    assert!(medium.get("autosave:measurement").unwrap().is_none());
    assert!(medium.get("autosave:measurement_timestamp").unwrap().is_none());
}

#[test]
fn test_form_type_marker_is_not_persisted() {
    let mut medium = MemoryMedium::new();
    let autosave = DraftAutosave::new(FormType::Appointment, 2);

    autosave
        .save_now(
            &mut medium,
            &values(&[("formType", "appointment"), ("Name", "Jane")]),
            Local::now(),
        )
        .unwrap();

    let raw = medium.get("autosave:appointment").unwrap().unwrap();
    let saved: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(saved.get("formType").is_none());
    assert_eq!(saved["Name"], "Jane");
}

#[test]
fn test_trailing_debounce_waits_for_quiet_period() {
    let mut medium = MemoryMedium::new();
    let mut autosave = DraftAutosave::new(FormType::Measurement, 2);
    let t0 = Local.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap();

    autosave.note_change(values(&[("Name", "J")]), t0);
    assert!(!autosave.flush(&mut medium, t0 + Duration::seconds(1)).unwrap());

    // a newer change supersedes the pending one and restarts the window
    autosave.note_change(values(&[("Name", "Jane")]), t0 + Duration::seconds(1));
    assert!(!autosave.flush(&mut medium, t0 + Duration::seconds(2)).unwrap());
    assert!(autosave.flush(&mut medium, t0 + Duration::seconds(3)).unwrap());

    let raw = medium.get("autosave:measurement").unwrap().unwrap();
    let saved: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(saved["Name"], "Jane");

    // nothing pending anymore
    assert!(!autosave.flush(&mut medium, t0 + Duration::seconds(10)).unwrap());
}

#[test]
fn test_cleanup_removes_only_expired_drafts() {
    let now = Local.with_ymd_and_hms(2026, 8, 2, 12, 0, 0).unwrap();
    let mut medium = MemoryMedium::new();

    let stale = DraftAutosave::new(FormType::Measurement, 2);
    stale
        .save_now(&mut medium, &values(&[("Name", "Old")]), now - Duration::hours(25))
        .unwrap();

    let fresh = DraftAutosave::new(FormType::Appointment, 2);
    fresh
        .save_now(&mut medium, &values(&[("Name", "New")]), now - Duration::hours(1))
        .unwrap();

    let mut store = PersistenceStore::with_clock(medium, Box::new(FixedClock(now)));
    let removed = store.cleanup_drafts(now).unwrap();
    assert_eq!(removed, 1);

    assert!(store.medium().get("autosave:measurement").unwrap().is_none());
    assert!(
        store
            .medium()
            .get("autosave:measurement_timestamp")
            .unwrap()
            .is_none()
    );
    assert!(store.medium().get("autosave:appointment").unwrap().is_some());
}

#[test]
fn test_cleanup_treats_untimestamped_draft_as_expired() {
    let now = Local::now();
    let mut medium = MemoryMedium::new();
    medium
        .set("autosave:measurement", r#"{"Name":"Orphan"}"#)
        .unwrap();

    let mut store = PersistenceStore::with_clock(medium, Box::new(FixedClock(now)));
    let removed = store.cleanup_drafts(now).unwrap();
    assert_eq!(removed, 1);
    assert!(store.medium().get("autosave:measurement").unwrap().is_none());
}
