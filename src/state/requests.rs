#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

/// Monotonic counter guarding against stale async responses.
///
/// Each spawned request takes a token; when the response arrives, the state
/// update is applied only if the token is still current. A later request
/// (or a page reset) bumps the epoch and silently invalidates anything
/// still in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestEpoch(u64);

/// Token identifying one in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestEpoch {
    /// Start a new request, invalidating all earlier tokens.
    pub fn begin(&mut self) -> RequestToken {
        self.0 += 1;
        RequestToken(self.0)
    }

    /// Whether `token` belongs to the most recent request.
    pub fn is_current(self, token: RequestToken) -> bool {
        self.0 == token.0
    }
}
