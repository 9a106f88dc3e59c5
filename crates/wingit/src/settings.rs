//! Effective settings: CLI flags and environment over ~/.wingit/config.json

use crate::cli::SourceArgs;
use crate::paths::Paths;
use anyhow::bail;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub personal_json: PathBuf,
    pub recent_json: Option<PathBuf>,
    pub ebird_token: Option<String>,
    pub ebird_base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    personal_json: Option<PathBuf>,
    #[serde(default)]
    recent_json: Option<PathBuf>,
    #[serde(default)]
    ebird_token: Option<String>,
    #[serde(default)]
    ebird_base_url: Option<String>,
}

/// Missing file means no overrides; a broken one is logged and ignored
fn load_config_file(path: &Path) -> ConfigFile {
    if !path.exists() {
        return ConfigFile::default();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read config file");
            return ConfigFile::default();
        }
    };

    match serde_json::from_str::<ConfigFile>(&content) {
        Ok(cf) => cf,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring malformed config file");
            ConfigFile::default()
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Settings {
    pub fn resolve(args: &SourceArgs) -> anyhow::Result<Self> {
        let config_path = match &args.config {
            Some(path) => path.clone(),
            None => Paths::new()?.config_file(),
        };
        Self::resolve_with(args, &config_path)
    }

    pub fn resolve_with(args: &SourceArgs, config_path: &Path) -> anyhow::Result<Self> {
        let file = load_config_file(config_path);

        let personal_json = args
            .personal
            .clone()
            .or(file.personal_json)
            .filter(|p| !p.as_os_str().is_empty());
        let Some(personal_json) = personal_json else {
            bail!(
                "personal checklist is not configured: pass --personal, set WINGIT_PERSONAL_JSON, \
                 or add personal_json to {}",
                config_path.display()
            );
        };

        Ok(Self {
            personal_json,
            recent_json: args
                .recent
                .clone()
                .or(file.recent_json)
                .filter(|p| !p.as_os_str().is_empty()),
            ebird_token: non_empty(args.ebird_token.clone().or(file.ebird_token)),
            ebird_base_url: non_empty(args.ebird_base_url.clone().or(file.ebird_base_url)),
        })
    }
}
