#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sb() -> Command {
    cargo_bin_cmd!("stitchbook")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stitchbook.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Submit one valid measurement via the CLI
pub fn submit_measurement(store_path: &str, name: &str) {
    sb()
        .args([
            "--store",
            store_path,
            "measure",
            "--name",
            name,
            "--email",
            "client@example.com",
            "--phone",
            "+1 555 0100",
            "--bust",
            "34",
            "--waist",
            "28",
            "--shoulder-width",
            "15",
            "--sleeve-length",
            "22",
            "--service",
            "Blouse",
        ])
        .assert()
        .success();
}

/// Submit one valid appointment via the CLI
pub fn submit_appointment(store_path: &str, name: &str, date: &str) {
    sb()
        .args([
            "--store",
            store_path,
            "book",
            "--name",
            name,
            "--email",
            "jane@example.com",
            "--phone",
            "+1 555 0100",
            "--date",
            date,
            "--service",
            "Fitting",
        ])
        .assert()
        .success();
}

/// Parse the raw store file into the flat key-value namespace
pub fn read_namespace(store_path: &str) -> serde_json::Value {
    let content = fs::read_to_string(store_path).expect("read store file");
    serde_json::from_str(&content).expect("parse store file")
}

/// Decode one mirrored collection out of the namespace
pub fn read_collection(store_path: &str, key: &str) -> Vec<serde_json::Value> {
    let ns = read_namespace(store_path);
    match ns.get(key) {
        Some(raw) => serde_json::from_str(raw.as_str().expect("collection is a string"))
            .expect("parse collection"),
        None => Vec::new(),
    }
}

/// A date guaranteed to pass the future-date rule
pub fn tomorrow() -> String {
    (chrono::Local::now().date_naive() + chrono::Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}

/// A date guaranteed to fail the future-date rule
pub fn yesterday() -> String {
    (chrono::Local::now().date_naive() - chrono::Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}
