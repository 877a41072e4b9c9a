use std::time::Duration;
use worldclocks_core::DisplayConfig;

/// How often an engine redraws its clocks
///
/// Clocks without seconds only redraw once per minute; nothing they show
/// can change faster than that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickCadence {
    EverySecond,
    EveryMinute,
}

impl TickCadence {
    pub fn from_config(config: &DisplayConfig) -> Self {
        if config.show_seconds {
            TickCadence::EverySecond
        } else {
            TickCadence::EveryMinute
        }
    }

    pub fn period(&self) -> Duration {
        match self {
            TickCadence::EverySecond => Duration::from_secs(1),
            TickCadence::EveryMinute => Duration::from_secs(60),
        }
    }
}
