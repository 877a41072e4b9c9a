mod clock_descriptor;
mod display_config;
mod display_style;
mod local_time_position;
mod module_config;
mod time_format;

pub use clock_descriptor::ClockDescriptor;
pub use display_config::DisplayConfig;
pub use display_style::DisplayStyle;
pub use local_time_position::LocalTimePosition;
pub use module_config::{ModuleConfig, WidgetPayload};
pub use time_format::TimeFormat;
