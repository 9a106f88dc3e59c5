//! Per-process state shared by the CLI and the MCP server

use anyhow::Context;
use tracing::info;
use wingit_core::{
    EngineError, PersonalChecklist, SeenIndex, TargetEngine, TargetFilters, TargetResult,
};

use crate::feed::RecentFeed;
use crate::settings::Settings;

pub struct App {
    pub checklist: PersonalChecklist,
    pub seen: SeenIndex,
    pub feed: RecentFeed,
    engine: TargetEngine,
}

impl App {
    pub fn new(checklist: PersonalChecklist, feed: RecentFeed) -> Self {
        let seen = SeenIndex::from_checklist(&checklist);
        Self {
            checklist,
            seen,
            feed,
            engine: TargetEngine::new(),
        }
    }

    /// Load the mandatory personal checklist and wire the recent feed
    pub fn load(settings: &Settings) -> anyhow::Result<Self> {
        let checklist = wingit_ebird::load_personal_checklist(&settings.personal_json)
            .with_context(|| {
                format!(
                    "loading personal checklist {}",
                    settings.personal_json.display()
                )
            })?;

        let app = Self::new(checklist, RecentFeed::from_settings(settings));
        info!(species = app.seen.len(), "loaded personal checklist");
        Ok(app)
    }

    /// Validate, fetch recent observations, run the engine
    pub async fn recommend(&self, filters: TargetFilters) -> Result<TargetResult, EngineError> {
        filters.validate()?;
        let recent = self.feed.recent_for(&filters).await;
        self.engine
            .build_target_checklist(filters, &self.seen, &recent)
    }
}
