use serde::{Deserialize, Serialize};

use super::{DisplayStyle, LocalTimePosition, TimeFormat};

/// Display preferences shared by every clock of one widget instance
///
/// Defaults mirror what the module renders when an option was never saved:
/// digital 12-hour clocks with seconds, no date, no local clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayConfig {
    pub display_style: DisplayStyle,
    pub time_format: TimeFormat,
    /// Adds a seconds field/hand and switches to a 1-second cadence
    pub show_seconds: bool,
    pub show_date: bool,
    /// Synthesize an extra clock for the visitor's own timezone
    pub show_local_time: bool,
    pub local_time_position: LocalTimePosition,
    /// Empty means "use the resolved timezone identifier"
    pub local_time_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            display_style: DisplayStyle::Digital,
            time_format: TimeFormat::TwelveHour,
            show_seconds: true,
            show_date: false,
            show_local_time: false,
            local_time_position: LocalTimePosition::First,
            local_time_label: String::new(),
        }
    }
}

impl DisplayConfig {
    /// Explicit label for the local clock, if one was configured
    pub fn local_label_override(&self) -> Option<&str> {
        let label = self.local_time_label.trim();
        if label.is_empty() { None } else { Some(label) }
    }
}
