use chrono::{DateTime, Utc};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// IANA timezone identifier (e.g. "Europe/London")
/// Validity is decided by the timezone database at format time, not here.
pub type TimezoneId = String;

/// Opaque per-instance module identifier assigned by the host page
pub type ModuleId = u64;
