//! World Clocks Ports
//!
//! Port definitions (traits) for the world clocks widget engine.
//! These define the boundaries between the clock engine and the host
//! environment's time and locale facilities.

mod clock;
mod error;
mod timezone;

pub use clock::Clock;
pub use error::{TimezoneError, TimezoneResult};
pub use timezone::TimezoneResolver;
