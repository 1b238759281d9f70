//! Cycle-end decision — the single business rule in the system.
//!
//! An event triggers the fan exactly when a trait-bearing update reports the
//! HVAC status `OFF`: the heating or cooling run has just finished. Updates
//! without an HVAC trait (fan-only updates included) are ignored outright,
//! which is what keeps the bridge from reacting to its own fan commands.

use crate::event::{HvacStatus, ResourceUpdate};

/// What a resource update means for this invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDecision {
    /// No `ThermostatHvac` trait in the update — not our event.
    Ignored,
    /// HVAC trait present but the status is not `OFF`; carries the reported
    /// status for logging.
    NotMet(Option<HvacStatus>),
    /// The cycle just ended: dispatch the fan command.
    CycleEnded,
}

impl ResourceUpdate {
    /// Judge this update on its own reported status.
    ///
    /// Each event is evaluated independently — no debouncing, no prior-state
    /// tracking.
    #[must_use]
    pub fn cycle_decision(&self) -> CycleDecision {
        if !self.has_hvac_trait() {
            return CycleDecision::Ignored;
        }
        match self.hvac_status() {
            Some(HvacStatus::Off) => CycleDecision::CycleEnded,
            other => CycleDecision::NotMet(other),
        }
    }
}
