//! `wingit://personal-checklist`: what the server believes the user has seen

use serde::Serialize;
use wingit_core::{ChecklistMeta, SpeciesSummary};

use super::protocol::{McpError, ResourceContents, ResourceDefinition, ResourcesReadResult};
use crate::app::App;

pub const PERSONAL_CHECKLIST_URI: &str = "wingit://personal-checklist";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChecklistPayload<'a> {
    meta: &'a ChecklistMeta,
    #[serde(skip_serializing_if = "no_summary")]
    species_index: &'a [SpeciesSummary],
    count_sightings: usize,
    seen_species: usize,
}

fn no_summary(index: &&[SpeciesSummary]) -> bool {
    index.is_empty()
}

pub fn definitions() -> Vec<ResourceDefinition> {
    vec![ResourceDefinition {
        uri: PERSONAL_CHECKLIST_URI.to_string(),
        name: "Personal checklist".to_string(),
        description: "Loaded personal checklist metadata and species summary".to_string(),
        mime_type: "application/json".to_string(),
    }]
}

pub fn read(app: &App, uri: &str) -> Result<ResourcesReadResult, McpError> {
    if uri != PERSONAL_CHECKLIST_URI {
        return Err(McpError::ResourceNotFound(uri.to_string()));
    }

    let payload = ChecklistPayload {
        meta: &app.checklist.meta,
        species_index: &app.checklist.species_index,
        count_sightings: app.checklist.sightings.len(),
        seen_species: app.seen.len(),
    };

    Ok(ResourcesReadResult {
        contents: vec![ResourceContents {
            uri: PERSONAL_CHECKLIST_URI.to_string(),
            mime_type: "application/json".to_string(),
            text: serde_json::to_string_pretty(&payload)?,
        }],
    })
}
