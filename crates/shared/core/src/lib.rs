//! World Clocks Core Domain
//!
//! Pure domain types for the world clocks widget engine.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    ClockDescriptor, DisplayConfig, DisplayStyle, LocalTimePosition, ModuleConfig, TimeFormat,
    WidgetPayload,
};
pub use values::{ModuleId, Timestamp, TimezoneId};
