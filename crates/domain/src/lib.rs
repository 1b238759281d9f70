//! # fanbridge-domain
//!
//! Pure domain model for the fanbridge thermostat webhook bridge.
//!
//! ## Responsibilities
//! - Decode the pub/sub **push envelope** into payload text (base64 with a
//!   literal-text fallback)
//! - Parse payloads into **device events** and their trait updates
//! - Decide whether an event is a **cycle end** worth acting on (the one
//!   business rule in the system)
//! - Define the **fan command** wire shape and the **credentials** needed to
//!   send it
//! - Define the **outcome** of an invocation and the error taxonomy
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod command;
pub mod credentials;
pub mod decision;
pub mod envelope;
pub mod error;
pub mod event;
pub mod outcome;
