//! Error taxonomy for the REST client.
//!
//! Read operations degrade at the page layer via [`super::fallback`];
//! action operations surface these errors to the user. Variants are kept
//! distinct so tests and callers can tell transport failures, missing
//! resources, and rejected input apart.

/// A failed API operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (network down, CORS,
    /// backend unreachable).
    #[error("network error: {0}")]
    Transport(String),

    /// The backend answered 404 for the given resource.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success HTTP status.
    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The input was rejected before any network call was made.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Validation error for a blank required selection.
    pub fn empty_selection(what: &str) -> Self {
        Self::Validation(format!("Please select a {what} first"))
    }
}
