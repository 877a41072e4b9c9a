//! Page-level registry of clock engines
//!
//! The page composes one [`ClockEngine`] per configured widget and owns
//! them explicitly; tearing the page down stops every timer.

use log::{debug, info};
use std::sync::Arc;
use worldclocks_core::{ModuleId, WidgetPayload};
use worldclocks_dom::SharedDocument;
use worldclocks_ports::{Clock, TimezoneResolver};

use crate::engine::ClockEngine;
use crate::error::Result;

/// All live widget instances on one page
#[derive(Default)]
pub struct WorldClocksPage {
    engines: Vec<ClockEngine>,
}

impl WorldClocksPage {
    /// Initialize an engine for every addressable entry of `payload`
    ///
    /// Entries without a module id, or whose container is absent from the
    /// document, are skipped. Engines are created in payload key order.
    pub fn initialize_all(
        payload: &WidgetPayload,
        document: &SharedDocument,
        clock: Arc<dyn Clock>,
        resolver: &dyn TimezoneResolver,
    ) -> Result<Self> {
        let mut engines = Vec::with_capacity(payload.len());

        for (key, config) in payload {
            let Some(module_id) = config.module_id else {
                debug!("Payload entry '{}' has no module id, skipping", key);
                continue;
            };

            if let Some(engine) = ClockEngine::initialize(
                module_id,
                &config.display,
                Arc::clone(document),
                Arc::clone(&clock),
                resolver,
            )? {
                engines.push(engine);
            }
        }

        info!("Initialized {} world clock module(s)", engines.len());
        Ok(Self { engines })
    }

    pub fn engines(&self) -> &[ClockEngine] {
        &self.engines
    }

    pub fn engine(&self, module_id: ModuleId) -> Option<&ClockEngine> {
        self.engines.iter().find(|e| e.module_id() == module_id)
    }

    pub fn engine_mut(&mut self, module_id: ModuleId) -> Option<&mut ClockEngine> {
        self.engines.iter_mut().find(|e| e.module_id() == module_id)
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Stop every engine's timer
    pub fn teardown_all(&mut self) {
        for engine in &mut self.engines {
            engine.teardown();
        }
    }
}
