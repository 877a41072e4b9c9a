use worldclocks_core::TimezoneId;

use crate::error::TimezoneResult;

/// Port for discovering the visitor's own timezone
///
/// Implementations ask the host environment (OS settings, browser locale,
/// a fixed value in tests). Callers decide the fallback on failure.
pub trait TimezoneResolver: Send + Sync {
    /// Resolve the IANA identifier of the local timezone
    fn resolve(&self) -> TimezoneResult<TimezoneId>;
}
