//! Presentational components rendered by the pages.

pub mod case_table;
pub mod sidebar;
pub mod skip_trace_dialog;
pub mod toast;
