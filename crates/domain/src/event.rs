//! Device events — decoded payloads reporting device state changes.
//!
//! An event either carries a `resourceUpdate` with a trait mapping or it is
//! something else entirely (and gets ignored). Trait states are kept as raw
//! JSON values; only the traits this system cares about get typed views.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::EnvelopeError;

/// Trait reporting the thermostat's HVAC operational status.
pub const THERMOSTAT_HVAC_TRAIT: &str = "sdm.devices.traits.ThermostatHvac";

/// Trait reporting the circulation fan timer. Relevant only for exclusion:
/// acting on fan updates would re-trigger the very command this system sends.
pub const FAN_TRAIT: &str = "sdm.devices.traits.Fan";

/// A device event as published by the device-management service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEvent {
    /// The state change, when this is a resource-update event.
    pub resource_update: Option<ResourceUpdate>,
    /// Publisher-assigned event identifier.
    #[serde(default)]
    pub event_id: Option<String>,
    /// When the device reported the change.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// The `resourceUpdate` section: which device changed and how.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUpdate {
    /// Resource name of the device (`enterprises/…/devices/…`).
    #[serde(default)]
    pub name: Option<String>,
    /// Trait-name → trait-state mapping. Absent behaves as empty.
    #[serde(default)]
    pub traits: HashMap<String, serde_json::Value>,
}

/// Reported HVAC operational status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HvacStatus {
    Off,
    Heating,
    Cooling,
    /// Any status this system does not recognize.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for HvacStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => f.write_str("OFF"),
            Self::Heating => f.write_str("HEATING"),
            Self::Cooling => f.write_str("COOLING"),
            Self::Unknown => f.write_str("UNKNOWN"),
        }
    }
}

/// Typed view of the `ThermostatHvac` trait state.
#[derive(Debug, Clone, Deserialize)]
pub struct ThermostatHvacState {
    /// Reported status; absent when the update does not carry one.
    #[serde(default)]
    pub status: Option<HvacStatus>,
}

impl DeviceEvent {
    /// Parse decoded payload text into a device event.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::InvalidPayload`] when the text is not valid
    /// JSON or does not fit the event shape.
    pub fn parse(payload: &str) -> Result<Self, EnvelopeError> {
        serde_json::from_str(payload).map_err(EnvelopeError::InvalidPayload)
    }
}

impl ResourceUpdate {
    /// The HVAC status reported by this update, if any.
    ///
    /// A trait state that does not deserialize (wrong type, missing status)
    /// counts as "no status reported" — the comparison downstream treats the
    /// two identically.
    #[must_use]
    pub fn hvac_status(&self) -> Option<HvacStatus> {
        let raw = self.traits.get(THERMOSTAT_HVAC_TRAIT)?;
        serde_json::from_value::<ThermostatHvacState>(raw.clone())
            .ok()
            .and_then(|state| state.status)
    }

    /// Whether the update carries a `ThermostatHvac` trait at all.
    #[must_use]
    pub fn has_hvac_trait(&self) -> bool {
        self.traits.contains_key(THERMOSTAT_HVAC_TRAIT)
    }
}
