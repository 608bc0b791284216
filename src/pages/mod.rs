//! Page components, one per route.

pub mod court_cases;
pub mod skip_traces;
