use chrono::{Local, TimeZone};
use indexmap::IndexMap;

use stitchbook::models::kind::{RecordKind, RecordStatus};
use stitchbook::store::{MemoryMedium, PersistenceStore, StorageMedium};

fn fields(name: &str) -> IndexMap<String, String> {
    let mut f = IndexMap::new();
    f.insert("Name".to_string(), name.to_string());
    f.insert("Service Type".to_string(), "Blouse".to_string());
    f
}

#[test]
fn test_add_is_append_only_and_order_preserving() {
    let mut store = PersistenceStore::open(MemoryMedium::new());

    for i in 0..4 {
        let outcome = store.add(RecordKind::Measurements, fields(&format!("Client {i}")));
        assert!(outcome.succeeded);
        assert_eq!(outcome.record.status, RecordStatus::Pending);
    }

    let records = store.records(RecordKind::Measurements);
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].value_of("Name"), "Client 0");
    assert_eq!(records[3].value_of("Name"), "Client 3");
}

#[test]
fn test_add_mirrors_full_collection() {
    let mut store = PersistenceStore::open(MemoryMedium::new());
    store.add(RecordKind::Measurements, fields("Jane Doe"));

    let raw = store
        .medium()
        .get("measurements")
        .unwrap()
        .expect("mirror key written");
    let decoded: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0]["Name"], "Jane Doe");
    assert_eq!(decoded[0]["status"], "pending");
}

#[test]
fn test_appointments_carry_reminder_sent() {
    let mut store = PersistenceStore::open(MemoryMedium::new());
    let m = store.add(RecordKind::Measurements, fields("Jane Doe"));
    let a = store.add(RecordKind::Appointments, fields("John Roe"));

    assert_eq!(m.record.reminder_sent, None);
    assert_eq!(a.record.reminder_sent, Some(false));
}

#[test]
fn test_failed_mirror_write_leaves_memory_unchanged() {
    let mut medium = MemoryMedium::new();
    medium.fail_writes = true;
    let mut store = PersistenceStore::open(medium);

    let outcome = store.add(RecordKind::Measurements, fields("Jane Doe"));
    assert!(!outcome.succeeded);
    assert!(outcome.error.is_some());
    assert!(store.records(RecordKind::Measurements).is_empty());
}

#[test]
fn test_quota_exceeded_is_reported() {
    let mut medium = MemoryMedium::new();
    medium.quota = Some(8);
    let mut store = PersistenceStore::open(medium);

    let outcome = store.add(RecordKind::Measurements, fields("Jane Doe"));
    assert!(!outcome.succeeded);
    let err = outcome.error.expect("quota error");
    assert!(err.to_string().contains("quota"));
}

#[test]
fn test_malformed_mirror_loads_as_empty() {
    let mut medium = MemoryMedium::new();
    medium.set("measurements", "not json at all").unwrap();
    let store = PersistenceStore::open(medium);
    assert!(store.records(RecordKind::Measurements).is_empty());
}

#[test]
fn test_reload_picks_up_external_writes() {
    let mut store = PersistenceStore::open(MemoryMedium::new());
    store.add(RecordKind::Measurements, fields("Jane Doe"));

    let raw = store.medium().get("measurements").unwrap().unwrap();
    let mut decoded: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    let mut second = decoded[0].clone();
    second["id"] = serde_json::Value::String("external".into());
    decoded.push(second);
    store
        .medium_mut()
        .set("measurements", &serde_json::to_string(&decoded).unwrap())
        .unwrap();

    assert_eq!(store.records(RecordKind::Measurements).len(), 1);
    store.reload();
    assert_eq!(store.records(RecordKind::Measurements).len(), 2);
}

#[test]
fn test_search_is_case_insensitive_across_kinds() {
    let mut store = PersistenceStore::open(MemoryMedium::new());
    store.add(RecordKind::Measurements, fields("Jane Doe"));
    store.add(RecordKind::Appointments, fields("John Roe"));

    let all = store.search("JANE", None);
    assert_eq!(all.measurements.len(), 1);
    assert_eq!(all.appointments.len(), 0);

    let only_appointments = store.search("roe", Some(RecordKind::Appointments));
    assert_eq!(only_appointments.total(), 1);

    // substring of a field value, not a whole-word match
    assert_eq!(store.search("blouse", None).total(), 2);
    assert_eq!(store.search("nobody", None).total(), 0);
}

/// Clock that advances one second per reading, so every record gets a
/// distinct timestamp.
struct SteppingClock {
    base: chrono::DateTime<Local>,
    ticks: std::cell::Cell<i64>,
}

impl stitchbook::utils::clock::Clock for SteppingClock {
    fn now(&self) -> chrono::DateTime<Local> {
        let n = self.ticks.get();
        self.ticks.set(n + 1);
        self.base + chrono::Duration::seconds(n)
    }
}

#[test]
fn test_stats_recent_and_latest() {
    let clock = SteppingClock {
        base: Local.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap(),
        ticks: std::cell::Cell::new(0),
    };
    let mut store = PersistenceStore::with_clock(MemoryMedium::new(), Box::new(clock));

    for i in 0..7 {
        store.add(RecordKind::Measurements, fields(&format!("Client {i}")));
    }
    store.add(RecordKind::Appointments, fields("Late Arrival"));

    let stats = store.stats(5);
    assert_eq!(stats.total_measurements, 7);
    assert_eq!(stats.total_appointments, 1);
    assert_eq!(stats.recent_measurements.len(), 5);
    // insertion order preserved, not re-sorted
    assert_eq!(stats.recent_measurements[0].value_of("Name"), "Client 2");
    assert_eq!(stats.recent_measurements[4].value_of("Name"), "Client 6");
    assert_eq!(
        stats.latest.expect("latest record").value_of("Name"),
        "Late Arrival"
    );
}

#[test]
fn test_stats_latest_compares_instants_not_strings() {
    // "10:00+02:00" is 08:00 UTC, half an hour *before* "09:30+00:00",
    // yet it sorts after it as a raw string.
    let mirror = serde_json::json!([
        {
            "id": "aaaa",
            "timestamp": "2026-08-01T10:00:00+02:00",
            "status": "pending",
            "Name": "Earlier"
        },
        {
            "id": "bbbb",
            "timestamp": "2026-08-01T09:30:00+00:00",
            "status": "pending",
            "Name": "Later"
        }
    ]);
    let mut medium = MemoryMedium::new();
    medium
        .set("measurements", &mirror.to_string())
        .unwrap();
    let store = PersistenceStore::open(medium);

    let stats = store.stats(5);
    assert_eq!(stats.latest.expect("latest record").value_of("Name"), "Later");
}
