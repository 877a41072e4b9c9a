use serde::{Deserialize, Serialize};

/// Where the visitor's own clock is inserted among the configured clocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalTimePosition {
    #[default]
    First,
    Last,
}
