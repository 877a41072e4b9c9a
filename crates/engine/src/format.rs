//! Locale formatting of an instant in a named timezone
//!
//! Output follows en-US conventions: two-digit hour and minute fields,
//! `AM`/`PM` day periods under the 12-hour cycle, `h23` under the 24-hour
//! cycle, and dates such as `"Fri, Oct 17"`.

use chrono::Timelike;
use chrono_tz::Tz;
use worldclocks_core::{TimeFormat, Timestamp};
use worldclocks_ports::{TimezoneError, TimezoneResult};

use crate::error::Result;

/// Individually labeled fields of a formatted time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeParts {
    pub hour: String,
    pub minute: String,
    /// Present only when seconds were requested
    pub second: Option<String>,
    /// Present only under the 12-hour cycle
    pub day_period: Option<String>,
}

/// Plain 24-hour wall-clock reading used for hand positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

/// Look up an IANA identifier in the timezone database
pub fn resolve_zone(timezone: &str) -> TimezoneResult<Tz> {
    timezone
        .parse::<Tz>()
        .map_err(|_| TimezoneError::Unknown(timezone.to_string()))
}

/// Formatter bound to one widget's hour cycle and seconds preference
#[derive(Debug, Clone, Copy)]
pub struct LocaleFormatter {
    time_format: TimeFormat,
    show_seconds: bool,
}

impl LocaleFormatter {
    pub fn new(time_format: TimeFormat, show_seconds: bool) -> Self {
        Self {
            time_format,
            show_seconds,
        }
    }

    /// Format `instant` in `timezone` into labeled parts
    pub fn time_parts(&self, instant: Timestamp, timezone: &str) -> Result<TimeParts> {
        let local = instant.with_timezone(&resolve_zone(timezone)?);

        let (hour, day_period) = match self.time_format {
            TimeFormat::TwelveHour => {
                let (is_pm, hour12) = local.hour12();
                let period = if is_pm { "PM" } else { "AM" };
                (format!("{hour12:02}"), Some(period.to_string()))
            }
            TimeFormat::TwentyFourHour => (format!("{:02}", local.hour()), None),
        };

        Ok(TimeParts {
            hour,
            minute: format!("{:02}", local.minute()),
            second: self
                .show_seconds
                .then(|| format!("{:02}", local.second())),
            day_period,
        })
    }

    /// Numeric 24-hour reading of `instant` in `timezone`
    ///
    /// Independent of the hour cycle and seconds preference.
    pub fn wall_clock(&self, instant: Timestamp, timezone: &str) -> Result<WallClock> {
        let local = instant.with_timezone(&resolve_zone(timezone)?);
        Ok(WallClock {
            hours: local.hour(),
            minutes: local.minute(),
            seconds: local.second(),
        })
    }

    /// Short weekday, short month and day, e.g. `"Fri, Oct 17"`
    pub fn date(&self, instant: Timestamp, timezone: &str) -> Result<String> {
        let local = instant.with_timezone(&resolve_zone(timezone)?);
        Ok(local.format("%a, %b %-d").to_string())
    }
}

/// City-style name for a timezone: `"America/New_York"` becomes `"New York"`
pub fn friendly_name(timezone: &str) -> String {
    timezone
        .rsplit('/')
        .next()
        .unwrap_or(timezone)
        .replace('_', " ")
}
