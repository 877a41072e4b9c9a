use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ClockDescriptor, DisplayConfig};
use crate::values::ModuleId;

/// Everything one widget instance needs: its id, its clocks, its preferences
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleConfig {
    /// Entries without an id cannot address a container and are skipped
    #[serde(default)]
    pub module_id: Option<ModuleId>,
    /// Ordered clock list; order is the on-page order
    #[serde(default)]
    pub clocks: Vec<ClockDescriptor>,
    #[serde(flatten)]
    pub display: DisplayConfig,
}

impl ModuleConfig {
    pub fn new(module_id: ModuleId, clocks: Vec<ClockDescriptor>, display: DisplayConfig) -> Self {
        Self {
            module_id: Some(module_id),
            clocks,
            display,
        }
    }
}

/// Configuration handed over by the page, keyed by opaque instance key
/// (e.g. "module42"). A `BTreeMap` keeps initialization order deterministic.
pub type WidgetPayload = BTreeMap<String, ModuleConfig>;
