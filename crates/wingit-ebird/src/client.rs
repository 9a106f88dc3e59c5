//! eBird recent-observations client
//!
//! `GET /v2/data/obs/geo/recent?lat=..&lng=..&dist=..&back=..&sort=date[&maxResults=..]`

use crate::error::EbirdError;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::debug;
use wingit_core::RecentObservation;

pub const DEFAULT_BASE_URL: &str = "https://api.ebird.org";

const RECENT_PATH: &str = "/v2/data/obs/geo/recent";
const TOKEN_HEADER: &str = "X-eBirdApiToken";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_ERROR_BODY: usize = 64 * 1024;

/// Geo query for recent nearby observations
#[derive(Debug, Clone, PartialEq)]
pub struct RecentQuery {
    pub lat: f64,
    pub lng: f64,
    pub dist_km: f64,
    pub back_days: i64,
    /// `< 1` omits the parameter
    pub max_results: i64,
}

impl RecentQuery {
    /// Clamp to the documented API ranges: dist 0-50 km, back 1-30 days
    pub fn clamped(&self) -> Self {
        Self {
            lat: self.lat,
            lng: self.lng,
            dist_km: if self.dist_km.is_nan() {
                0.0
            } else {
                self.dist_km.clamp(0.0, 50.0)
            },
            back_days: self.back_days.clamp(1, 30),
            max_results: self.max_results.max(0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EbirdClient {
    base_url: String,
    token: String,
    http: reqwest::Client,
    user_agent: String,
}

impl EbirdClient {
    pub fn new(token: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into().trim().to_string(),
            http,
            user_agent: format!("wingit/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Request URL for `query`, after clamping
    pub fn recent_url(&self, query: &RecentQuery) -> Result<Url, EbirdError> {
        let query = query.clamped();
        let mut url = Url::parse(&self.base_url)
            .map_err(|_| EbirdError::InvalidBaseUrl(self.base_url.clone()))?;
        if url.cannot_be_a_base() {
            return Err(EbirdError::InvalidBaseUrl(self.base_url.clone()));
        }

        let path = format!("{}{}", url.path().trim_end_matches('/'), RECENT_PATH);
        url.set_path(&path);

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("lat", &format!("{:.2}", query.lat))
                .append_pair("lng", &format!("{:.2}", query.lng))
                .append_pair("dist", &query.dist_km.to_string())
                .append_pair("back", &query.back_days.to_string())
                .append_pair("sort", "date");
            if query.max_results > 0 {
                pairs.append_pair("maxResults", &query.max_results.to_string());
            }
        }

        Ok(url)
    }

    pub async fn recent_nearby(
        &self,
        query: &RecentQuery,
    ) -> Result<Vec<RecentObservation>, EbirdError> {
        if !self.has_token() {
            return Err(EbirdError::Unauthorized("missing API token".to_string()));
        }

        let url = self.recent_url(query)?;
        debug!(%url, "fetching recent nearby observations");

        let mut request = self.http.get(url).header(TOKEN_HEADER, &self.token);
        if !self.user_agent.is_empty() {
            request = request.header(reqwest::header::USER_AGENT, &self.user_agent);
        }

        let response = request.send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = read_error_body(response).await;
            return Err(classify_status(status, body));
        }

        let bytes = response.bytes().await?;
        let rows: Vec<RecentObservation> = serde_json::from_slice(&bytes)?;
        debug!(rows = rows.len(), "decoded recent nearby observations");
        Ok(rows)
    }
}

fn classify_status(status: StatusCode, body: String) -> EbirdError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => EbirdError::Unauthorized(body),
        StatusCode::TOO_MANY_REQUESTS => EbirdError::RateLimited(body),
        StatusCode::BAD_REQUEST => EbirdError::BadRequest(body),
        other => EbirdError::Http {
            status: other.as_u16(),
            body,
        },
    }
}

/// Read at most `MAX_ERROR_BODY` bytes of an error response
async fn read_error_body(mut response: reqwest::Response) -> String {
    let mut buf = Vec::new();
    while buf.len() < MAX_ERROR_BODY {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let room = MAX_ERROR_BODY - buf.len();
                buf.extend_from_slice(&chunk[..chunk.len().min(room)]);
            }
            Ok(None) | Err(_) => break,
        }
    }
    truncate_body(&String::from_utf8_lossy(&buf))
}

fn truncate_body(body: &str) -> String {
    let body = body.trim();
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}
