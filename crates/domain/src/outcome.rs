//! Invocation outcome — what one handled notification amounted to.

/// Terminal result of a successfully handled push.
///
/// `Ignored` and `ConditionNotMet` are one outcome class externally (both
/// no-ops) but stay distinct for observability: their response messages
/// differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Not a resource update, or no HVAC trait in the update.
    Ignored,
    /// HVAC trait present but the status was not `OFF`.
    ConditionNotMet,
    /// Cycle end detected and the fan command was accepted.
    FanActivated {
        /// Duration the fan was asked to run for.
        duration: String,
    },
}

impl Outcome {
    /// Whether this invocation dispatched a command.
    #[must_use]
    pub fn acted(&self) -> bool {
        matches!(self, Self::FanActivated { .. })
    }
}
