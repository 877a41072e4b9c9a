use std::path::Path;
use thiserror::Error;
use worldclocks_core::WidgetPayload;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read payload file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse payload: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Load a widget payload from a JSON file
pub fn load_payload<P: AsRef<Path>>(path: P) -> Result<WidgetPayload, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_payload_from_str(&content)
}

/// Load a widget payload from a JSON string
pub fn load_payload_from_str(json: &str) -> Result<WidgetPayload, ConfigError> {
    let payload: WidgetPayload = serde_json::from_str(json)?;
    Ok(payload)
}

/// Load the embedded demo payload
pub fn load_default_payload() -> Result<WidgetPayload, ConfigError> {
    let default_payload = include_str!("default_payload.json");
    load_payload_from_str(default_payload)
}
