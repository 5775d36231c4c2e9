//! Domain records exchanged with the CRM API and UI-level domain concepts.

pub mod client;
pub mod deal;
pub mod tab;
pub mod types;
