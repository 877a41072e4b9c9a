use serde::{Deserialize, Serialize};

/// Visual form of every clock in one widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// Card with a numeric readout
    #[default]
    Digital,
    /// Face with rotating hands
    Analog,
    /// Plain numeric readout
    Text,
}

impl DisplayStyle {
    /// Returns true if clocks are drawn with hands instead of text
    pub fn is_analog(&self) -> bool {
        matches!(self, DisplayStyle::Analog)
    }

    /// Wire name, also used as the container's style modifier
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayStyle::Digital => "digital",
            DisplayStyle::Analog => "analog",
            DisplayStyle::Text => "text",
        }
    }
}
