//! World Clocks Engine
//!
//! Live per-timezone clocks rendered into a page, updated in place:
//!
//! - **Markup**: placeholder construction for digital, text and analog clocks
//! - **Format**: timezone-aware time parts, wall-clock readings and dates
//! - **Analog**: hand rotation angles
//! - **Engine**: one widget instance, one shared repeating timer
//! - **Registry**: every widget instance on a page
//!
//! ## Architecture
//!
//! ```text
//!   payload (JSON) ──► WorldClocksPage::initialize_all
//!                              │
//!            ┌─────────────────┼─────────────────┐
//!            ▼                 ▼                 ▼
//!      ClockEngine       ClockEngine       ClockEngine      (one timer each)
//!            │                 │                 │
//!            └────────── SharedDocument ─────────┘
//!                     (container per module)
//! ```

pub mod analog;
pub mod cadence;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod markup;
pub mod registry;

// Re-export main types
pub use analog::HandAngles;
pub use cadence::TickCadence;
pub use config::{ConfigError, load_default_payload, load_payload, load_payload_from_str};
pub use engine::{ClockEngine, ClockFailure, FALLBACK_TIMEZONE, TickReport, local_timezone};
pub use error::{EngineError, Result};
pub use format::{LocaleFormatter, TimeParts, WallClock, friendly_name};
pub use registry::WorldClocksPage;
