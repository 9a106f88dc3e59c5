//! eBird data sources: personal checklist exports, recent-observation
//! snapshots and the live recent-observations API

mod client;
mod error;
mod loader;

pub use client::{EbirdClient, RecentQuery, DEFAULT_BASE_URL};
pub use error::{EbirdError, LoadError};
pub use loader::{load_personal_checklist, load_recent_nearby, read_json};
