//! # fanbridge-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Expose the push endpoint (`POST /`) the pub/sub relay delivers to, plus
//!   a `/health` liveness probe
//! - Hand the raw body to the application service (driving adapter)
//! - Map outcomes and errors onto the documented status/message table:
//!   400 for request faults, 204 for no-op outcomes, 200 on dispatch,
//!   500 for dependency failures
//!
//! ## Dependency rule
//! Depends on `fanbridge-app` (for port traits and the service) and
//! `fanbridge-domain` (for outcome/error mapping). Never leaks axum types
//! into the domain.

pub mod error;
pub mod router;
pub mod state;
pub mod webhook;
