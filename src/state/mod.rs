//! Page state machines and async flows.
//!
//! DESIGN
//! ======
//! State is split by page (`court_cases`, `skip_traces`) plus small shared
//! models (`toast`, `requests`). Everything here is plain structs with
//! transition methods; the async flows are free functions generic over the
//! transport so the full pipelines run under the native test harness.

pub mod court_cases;
pub mod requests;
pub mod skip_trace_dialog;
pub mod skip_traces;
pub mod toast;
