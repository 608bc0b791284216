//! Network layer: wire types, error taxonomy, REST client, and the
//! documented fallback values applied by the page layer when reads degrade.

pub mod api;
pub mod error;
pub mod fallback;
pub mod types;

#[cfg(test)]
pub mod fake;
