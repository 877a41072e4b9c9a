//! World Clocks Clock Infrastructure
//!
//! Provides the time and timezone sources the engine reads from:
//!
//! ## Time sources
//!
//! ```text
//! Clock (port)
//!     │
//!     ├── SystemClock     (wall clock, production)
//!     │
//!     └── SimulatedClock  (scaled or frozen, previews and tests)
//! ```
//!
//! ## Timezone sources
//!
//! ```text
//! TimezoneResolver (port)
//!     │
//!     ├── SystemTimezone  (host OS setting)
//!     │
//!     └── FixedTimezone   (configured identifier)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use worldclocks_clock::{SimulatedClock, TimeScale, FixedTimezone};
//! use chrono::{Duration, TimeZone, Utc};
//!
//! // Freeze time at a known instant
//! let clock = SimulatedClock::new(Some(Utc.with_ymd_and_hms(2025, 6, 1, 13, 5, 9).unwrap()));
//! clock.set_time_scale(TimeScale::Fixed);
//! clock.advance(Duration::seconds(1));
//!
//! // Pretend the visitor is in Tokyo
//! let resolver = FixedTimezone::new("Asia/Tokyo");
//! ```

mod simulated;
mod system;
mod timezone;

pub use simulated::{SimulatedClock, TimeScale};
pub use system::SystemClock;
pub use timezone::{FixedTimezone, SystemTimezone};

// Re-export the ports for convenience
pub use worldclocks_ports::{Clock, TimezoneResolver};
