//! Recording fake transport for tests.

use std::cell::RefCell;
use std::collections::HashMap;

use super::api::Backend;
use super::error::ApiError;

/// In-memory [`Backend`] serving canned JSON per path and recording every
/// call, so tests can assert both results and traffic.
#[derive(Default)]
pub struct FakeBackend {
    gets: RefCell<HashMap<String, Result<serde_json::Value, ApiError>>>,
    posts: RefCell<HashMap<String, Result<serde_json::Value, ApiError>>>,
    calls: RefCell<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(self, path: &str, result: Result<serde_json::Value, ApiError>) -> Self {
        self.gets.borrow_mut().insert(path.to_owned(), result);
        self
    }

    pub fn on_post(self, path: &str, result: Result<serde_json::Value, ApiError>) -> Self {
        self.posts.borrow_mut().insert(path.to_owned(), result);
        self
    }

    /// Every request made so far, as `"GET /path"` / `"POST /path"` strings
    /// in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Backend for FakeBackend {
    async fn get_json(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        self.calls.borrow_mut().push(format!("GET {path}"));
        self.gets
            .borrow()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(ApiError::Transport(format!("no fake route for GET {path}"))))
    }

    async fn post_json(
        &self,
        path: &str,
        _body: serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        self.calls.borrow_mut().push(format!("POST {path}"));
        self.posts
            .borrow()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(ApiError::Transport(format!("no fake route for POST {path}"))))
    }
}
