//! REST client for the case-tracker backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`. Native builds get a
//! stub transport that reports a transport error, so the client type and
//! everything above it compiles and tests off-browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, ApiError>`. Read operations are
//! expected to be wrapped with [`super::fallback`] by the page layer, which
//! keeps "real data" and "degraded data" distinguishable in tests. The two
//! action operations (`scrape_town`, `town_skip_trace`) have no fallback:
//! their callers must tell "nothing happened" from "already succeeded".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeSet;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use super::error::ApiError;
use super::types::{
    Case, CaseListEnvelope, ScrapeOutcome, TownCasesEnvelope, TownRecord, TownSkipTraceStats,
};

/// Minimal JSON transport. Implemented by [`HttpBackend`] for the browser
/// and by a recording fake in tests; the client is injected via context so
/// nothing depends on a process-wide singleton.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `GET {base}{path}`, decoded as JSON.
    async fn get_json(&self, path: &str) -> Result<serde_json::Value, ApiError>;

    /// `POST {base}{path}` with a JSON body, decoded as JSON.
    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, ApiError>;
}

/// `gloo-net` transport against a configured base URL.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[cfg(not(feature = "csr"))]
    fn stub_error(&self, path: &str) -> ApiError {
        ApiError::Transport(format!(
            "HTTP transport requires the browser runtime: {}{path}",
            self.base_url
        ))
    }
}

impl Backend for HttpBackend {
    async fn get_json(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = format!("{}{path}", self.base_url);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_response(path, resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(self.stub_error(path))
        }
    }

    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = format!("{}{path}", self.base_url);
            let resp = gloo_net::http::Request::post(&url)
                .json(&body)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_response(path, resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
            Err(self.stub_error(path))
        }
    }
}

#[cfg(feature = "csr")]
async fn decode_response(
    path: &str,
    resp: gloo_net::http::Response,
) -> Result<serde_json::Value, ApiError> {
    match resp.status() {
        200..=299 => resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string())),
        404 => Err(ApiError::NotFound(path.to_owned())),
        status => Err(ApiError::Status { status }),
    }
}

/// Typed client over a [`Backend`]. One instance per application, provided
/// via context at mount.
#[derive(Clone, Debug)]
pub struct ApiClient<B> {
    backend: B,
    case_fetch_limit: u32,
}

impl<B: Backend> ApiClient<B> {
    pub fn new(backend: B, case_fetch_limit: u32) -> Self {
        Self {
            backend,
            case_fetch_limit,
        }
    }

    pub fn backend_ref(&self) -> &B {
        &self.backend
    }

    /// All Connecticut towns, sorted ascending and deduplicated.
    pub async fn connecticut_towns(&self) -> Result<Vec<String>, ApiError> {
        let value = self.backend.get_json("/api/v1/towns/").await?;
        let rows: Vec<TownRecord> = decode(value)?;
        let mut towns: Vec<String> = rows.into_iter().map(|r| r.town).collect();
        towns.sort();
        towns.dedup();
        Ok(towns)
    }

    /// Towns that have at least one stored case, sorted ascending.
    ///
    /// Derived from the distinct non-empty `town` fields of the first
    /// `case_fetch_limit` cases. This is an approximation bounded by the
    /// fetch cap, not a source of truth; the backend has no dedicated
    /// towns-with-cases endpoint yet.
    pub async fn scraped_towns(&self) -> Result<Vec<String>, ApiError> {
        let path = format!("/api/v1/cases/?limit={}", self.case_fetch_limit);
        let value = self.backend.get_json(&path).await?;
        let envelope: CaseListEnvelope = decode(value)?;
        let towns: BTreeSet<String> = envelope
            .items
            .into_iter()
            .filter_map(|case| case.town)
            .filter(|town| !town.is_empty())
            .collect();
        Ok(towns.into_iter().collect())
    }

    /// Trigger a scrape of court cases for one town. Failures propagate.
    pub async fn scrape_town(&self, town: &str) -> Result<ScrapeOutcome, ApiError> {
        let town = validated_town(town)?;
        let value = self
            .backend
            .post_json(
                "/api/v1/scraper/scrape-town",
                serde_json::json!({ "town": town }),
            )
            .await?;
        decode(value)
    }

    /// Every stored case, unpaginated beyond the backend default.
    pub async fn all_cases(&self) -> Result<Vec<Case>, ApiError> {
        let value = self.backend.get_json("/api/v1/cases/").await?;
        let envelope: CaseListEnvelope = decode(value)?;
        Ok(envelope.items)
    }

    /// Cases for one town, unwrapped from the `{cases, total, town}`
    /// envelope.
    pub async fn cases_by_town(&self, town: &str) -> Result<Vec<Case>, ApiError> {
        let town = validated_town(town)?;
        let path = format!("/api/v1/cases/by-town/{}", encode_segment(&town));
        let value = self.backend.get_json(&path).await?;
        let envelope: TownCasesEnvelope = decode(value)?;
        Ok(envelope.cases)
    }

    /// Total stored case count, preferring the pagination `total` field.
    pub async fn total_case_count(&self) -> Result<u64, ApiError> {
        let value = self.backend.get_json("/api/v1/cases/").await?;
        let envelope: CaseListEnvelope = decode(value)?;
        Ok(envelope.case_count())
    }

    /// Skip-trace statistics for one town.
    pub async fn town_stats(&self, town: &str) -> Result<TownSkipTraceStats, ApiError> {
        let town = validated_town(town)?;
        let path = format!("/api/v1/skiptraces/town-stats/{}", encode_segment(&town));
        let value = self.backend.get_json(&path).await?;
        decode(value)
    }

    /// Run the skip-trace batch for one town. Failures propagate; the
    /// result payload is backend-defined.
    pub async fn town_skip_trace(&self, town: &str) -> Result<serde_json::Value, ApiError> {
        let town = validated_town(town)?;
        self.backend
            .post_json(
                "/api/v1/skiptraces/town-batch",
                serde_json::json!({ "town": town }),
            )
            .await
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Reject blank town input before any transport call.
fn validated_town(town: &str) -> Result<String, ApiError> {
    let town = town.trim();
    if town.is_empty() {
        return Err(ApiError::empty_selection("town"));
    }
    Ok(town.to_owned())
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}
