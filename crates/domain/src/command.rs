//! Fan command — the fixed-shape request sent to the device API.

use serde::Serialize;

/// Command name for starting the fan on a timer.
pub const FAN_SET_TIMER_COMMAND: &str = "sdm.devices.commands.Fan.SetTimer";

/// Default fan run duration (6 minutes) as the API's duration string.
pub const DEFAULT_FAN_DURATION: &str = "360s";

/// `Fan.SetTimer` command body:
/// `{command, params: {timerMode, duration}}`.
#[derive(Debug, Clone, Serialize)]
pub struct FanTimerCommand {
    command: &'static str,
    params: FanTimerParams,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct FanTimerParams {
    timer_mode: TimerMode,
    duration: String,
}

/// Fan timer modes accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum TimerMode {
    On,
}

impl FanTimerCommand {
    /// Build a command that runs the fan for `duration` (e.g. `"360s"`).
    #[must_use]
    pub fn new(duration: impl Into<String>) -> Self {
        Self {
            command: FAN_SET_TIMER_COMMAND,
            params: FanTimerParams {
                timer_mode: TimerMode::On,
                duration: duration.into(),
            },
        }
    }

    /// The configured run duration.
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.params.duration
    }
}
