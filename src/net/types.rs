//! Records crossing the HTTP boundary.
//!
//! Shapes mirror the backend's JSON. Optional fields default so a sparse
//! row from the scraper still deserializes; display helpers substitute
//! `"N/A"` for missing values instead of leaving holes in the table.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A foreclosure court case. `docket_number` is the de-facto unique key.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Case {
    #[serde(default)]
    pub id: Option<i64>,
    pub case_name: String,
    pub docket_number: String,
    #[serde(default)]
    pub docket_url: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub defendant_name: Option<String>,
}

impl Case {
    pub fn town_display(&self) -> &str {
        display_or_na(self.town.as_deref())
    }

    pub fn address_display(&self) -> &str {
        display_or_na(self.address.as_deref())
    }

    pub fn zip_code_display(&self) -> &str {
        display_or_na(self.zip_code.as_deref())
    }

    pub fn defendant_display(&self) -> &str {
        display_or_na(self.defendant_name.as_deref())
    }
}

fn display_or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "N/A",
    }
}

/// One row of `GET /api/v1/towns/`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct TownRecord {
    pub town: String,
}

/// Paginated envelope from `GET /api/v1/cases/`.
///
/// `total` stays a raw JSON value: the count accessor prefers it only when
/// it is actually numeric, falling back to the item count otherwise.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct CaseListEnvelope {
    #[serde(default)]
    pub items: Vec<Case>,
    #[serde(default)]
    pub total: Option<serde_json::Value>,
}

impl CaseListEnvelope {
    /// Total case count: numeric `total` if present, else `items.len()`.
    pub fn case_count(&self) -> u64 {
        self.total
            .as_ref()
            .and_then(serde_json::Value::as_u64)
            .unwrap_or(self.items.len() as u64)
    }
}

/// Envelope from `GET /api/v1/cases/by-town/{town}`.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct TownCasesEnvelope {
    #[serde(default)]
    pub cases: Vec<Case>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub town: Option<String>,
}

/// Result of `POST /api/v1/scraper/scrape-town`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct ScrapeOutcome {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub cases_found: u64,
}

/// Skip-trace statistics for one town.
///
/// When `scraped` is false the count fields are meaningless placeholders.
/// `traced_cases + untraced_cases == total_cases` is expected but not
/// enforced by the backend, so display paths derive the untraced count
/// instead of trusting the field.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TownSkipTraceStats {
    pub town: String,
    pub scraped: bool,
    #[serde(default)]
    pub total_cases: u32,
    #[serde(default)]
    pub traced_cases: u32,
    #[serde(default)]
    pub untraced_cases: u32,
    #[serde(default)]
    pub error: Option<String>,
}

impl TownSkipTraceStats {
    /// Untraced count as shown to the user, derived from the totals.
    pub fn untraced_for_display(&self) -> u32 {
        self.total_cases.saturating_sub(self.traced_cases)
    }

    /// Whether the "run skip trace" action applies to this town.
    pub fn action_available(&self) -> bool {
        self.scraped && self.untraced_for_display() > 0
    }
}
