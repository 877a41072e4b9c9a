use serde::{Deserialize, Serialize};

/// Hour cycle used for readouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    /// 01-12 with an AM/PM day period
    #[default]
    #[serde(rename = "12")]
    TwelveHour,
    /// 00-23, no day period
    #[serde(rename = "24")]
    TwentyFourHour,
}

impl TimeFormat {
    /// Returns true if a day-period indicator is shown
    pub fn is_12_hour(&self) -> bool {
        matches!(self, TimeFormat::TwelveHour)
    }
}
