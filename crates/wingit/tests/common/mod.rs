#![allow(dead_code)]

use std::path::PathBuf;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn personal_fixture() -> PathBuf {
    fixture("personal_checklist_example.json")
}

pub fn recent_fixture() -> PathBuf {
    fixture("recent_nearby_example.json")
}
