//! JSON file loaders

use crate::error::LoadError;
use serde::de::DeserializeOwned;
use std::path::Path;
use wingit_core::{PersonalChecklist, RecentObservation};

/// Read and decode a whole JSON document
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a personal checklist export
pub fn load_personal_checklist(path: &Path) -> Result<PersonalChecklist, LoadError> {
    read_json(path)
}

/// Load a recent-nearby snapshot (a JSON array of observations)
pub fn load_recent_nearby(path: &Path) -> Result<Vec<RecentObservation>, LoadError> {
    read_json(path)
}
