use chrono_tz::Tz;
use log::debug;
use worldclocks_core::TimezoneId;
use worldclocks_ports::{TimezoneError, TimezoneResolver, TimezoneResult};

/// Resolves the visitor's timezone from the host operating system
pub struct SystemTimezone;

impl SystemTimezone {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemTimezone {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneResolver for SystemTimezone {
    fn resolve(&self) -> TimezoneResult<TimezoneId> {
        let id = iana_time_zone::get_timezone()
            .map_err(|e| TimezoneError::Unresolvable(e.to_string()))?;
        debug!("Host timezone resolved to {}", id);
        Ok(id)
    }
}

/// Always reports the same timezone
///
/// The identifier is checked against the timezone database on construction
/// through [`FixedTimezone::checked`]; [`FixedTimezone::new`] accepts anything
/// and lets the engine surface bad identifiers per clock.
#[derive(Debug, Clone)]
pub struct FixedTimezone {
    timezone: TimezoneId,
}

impl FixedTimezone {
    pub fn new(timezone: impl Into<TimezoneId>) -> Self {
        Self {
            timezone: timezone.into(),
        }
    }

    /// Create a resolver only if `timezone` names a known IANA zone
    pub fn checked(timezone: impl Into<TimezoneId>) -> TimezoneResult<Self> {
        let timezone = timezone.into();
        timezone
            .parse::<Tz>()
            .map_err(|_| TimezoneError::Unknown(timezone.clone()))?;
        Ok(Self { timezone })
    }
}

impl TimezoneResolver for FixedTimezone {
    fn resolve(&self) -> TimezoneResult<TimezoneId> {
        Ok(self.timezone.clone())
    }
}
