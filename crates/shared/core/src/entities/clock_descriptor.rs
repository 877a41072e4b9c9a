use serde::{Deserialize, Serialize};

use crate::values::TimezoneId;

/// One configured clock: which timezone to show and what to call it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockDescriptor {
    /// IANA timezone identifier
    pub timezone: TimezoneId,
    /// Label shown under the clock
    #[serde(rename = "name")]
    pub display_name: String,
}

impl ClockDescriptor {
    pub fn new(timezone: impl Into<TimezoneId>, display_name: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
            display_name: display_name.into(),
        }
    }
}
