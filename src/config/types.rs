use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lower bound for `ui.tick_rate_ms`.
pub const MIN_TICK_RATE_MS: u64 = 10;
/// Upper bound for `ui.tick_rate_ms`.
pub const MAX_TICK_RATE_MS: u64 = 5_000;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Title shown in the header.
    #[serde(default = "default_title")]
    pub title: String,
    /// How long the event loop waits for input before redrawing (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_title() -> String {
    "Simple Scoreboard Application".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
