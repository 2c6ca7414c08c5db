//! Core domain logic for lead capture
//!
//! Validation and the submission state machine are shared between the server
//! and the hydrated client. Configuration, persistence and the REST API only
//! exist on the server.

#[cfg(feature = "ssr")]
pub mod config;
pub mod leads;
