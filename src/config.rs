#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default backend origin when no override is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Page size used when deriving the scraped-towns list from the case list.
pub const DEFAULT_CASE_FETCH_LIMIT: u32 = 1000;

/// Skip-trace provider rate, in cents per lookup.
pub const DEFAULT_COST_PER_LOOKUP_CENTS: u32 = 7;

/// Client configuration, provided once via context at mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the case-tracker HTTP API.
    pub api_base_url: String,
    /// Upper bound on cases fetched when deriving scraped towns.
    pub case_fetch_limit: u32,
    /// Skip-trace cost per lookup, in cents.
    pub cost_per_lookup_cents: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            case_fetch_limit: DEFAULT_CASE_FETCH_LIMIT,
            cost_per_lookup_cents: DEFAULT_COST_PER_LOOKUP_CENTS,
        }
    }
}

impl AppConfig {
    /// Resolve the effective configuration.
    ///
    /// Precedence for the API base URL: a `window.__DASHBOARD_API_URL`
    /// global set by the hosting page (browser only), then the
    /// `DASHBOARD_API_URL` build-time variable, then the default.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("DASHBOARD_API_URL") {
            if !url.is_empty() {
                config.api_base_url = url.to_owned();
            }
        }
        #[cfg(feature = "csr")]
        if let Some(url) = browser_base_url_override() {
            config.api_base_url = url;
        }
        config
    }
}

/// Read a `window.__DASHBOARD_API_URL` string global, if the hosting page
/// defined one.
#[cfg(feature = "csr")]
fn browser_base_url_override() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(
        &window,
        &wasm_bindgen::JsValue::from_str("__DASHBOARD_API_URL"),
    )
    .ok()?;
    value.as_string().filter(|url| !url.is_empty())
}
