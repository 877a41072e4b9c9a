//! World Clocks Runner - Page Host
//!
//! Plays the part of the page around the engines:
//!
//! - **Page**: renders the static skeleton for a widget payload
//! - **Snapshot**: reads back what each clock currently shows
//! - **Preview**: starts every engine and samples the page over time
//!
//! ## Architecture
//!
//! ```text
//!      widget payload (JSON)
//!              │
//!              ▼
//!     ┌─────────────────┐
//!     │   render_page   │  skeleton per module
//!     └────────┬────────┘
//!              │ SharedDocument
//!              ▼
//!     ┌─────────────────┐        ┌──────────────────┐
//!     │ WorldClocksPage │ ◄───── │ Clock + Timezone │
//!     │ (one engine per │        │ (system or       │
//!     │  module)        │        │  simulated)      │
//!     └────────┬────────┘        └──────────────────┘
//!              │ ticks
//!              ▼
//!     ┌─────────────────┐
//!     │  snapshot/html  │  what the visitor sees
//!     └─────────────────┘
//! ```

pub mod page;
pub mod preview;
pub mod snapshot;

// Re-export main types
pub use page::{render_module, render_page};
pub use preview::{PagePreview, PreviewConfig, PreviewError, PreviewResults};
pub use snapshot::{ClockSnapshot, Readout, snapshot_clock, snapshot_module};
