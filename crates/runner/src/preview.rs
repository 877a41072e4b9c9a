//! Preview - run a whole page of clocks and watch it update
//!
//! Renders the page skeleton for a payload, initializes every engine on a
//! shared document, then samples the document at a fixed interval.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use worldclocks_clock::{
    Clock, FixedTimezone, SimulatedClock, SystemClock, SystemTimezone, TimeScale, TimezoneResolver,
};
use worldclocks_core::{ModuleId, WidgetPayload};
use worldclocks_dom::SharedDocument;
use worldclocks_engine::{EngineError, WorldClocksPage};
use worldclocks_ports::TimezoneError;

use crate::page::render_page;
use crate::snapshot::snapshot_module;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Timezone error: {0}")]
    Timezone(#[from] TimezoneError),
}

/// Preview configuration
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Number of frames to print before stopping
    pub frames: usize,
    /// Wall time between frames
    pub frame_interval: Duration,
    /// Fast-forward factor; 1 follows the system clock
    pub speed: u32,
    /// Pretend the visitor is in this timezone instead of asking the OS
    pub local_timezone: Option<String>,
    /// Print the page's HTML instead of the compact view
    pub html: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            frames: 5,
            frame_interval: Duration::from_secs(1),
            speed: 1,
            local_timezone: None,
            html: false,
        }
    }
}

/// Preview results
#[derive(Debug, Clone, Default)]
pub struct PreviewResults {
    /// Frames printed
    pub frames: usize,
    /// Update passes per module, including the initial one
    pub ticks_by_module: BTreeMap<ModuleId, u64>,
}

/// A running page of clocks
pub struct PagePreview {
    config: PreviewConfig,
    document: SharedDocument,
    page: WorldClocksPage,
}

impl PagePreview {
    /// Render the skeleton and start every engine
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(payload: &WidgetPayload, config: PreviewConfig) -> Result<Self, PreviewError> {
        let clock: Arc<dyn Clock> = if config.speed > 1 {
            let simulated = SimulatedClock::new(None);
            simulated.set_time_scale(TimeScale::Fast(config.speed));
            simulated
        } else {
            Arc::new(SystemClock::new())
        };

        let clock_name = clock.name().to_string();

        let resolver: Box<dyn TimezoneResolver> = match &config.local_timezone {
            Some(tz) => Box::new(FixedTimezone::checked(tz.as_str())?),
            None => Box::new(SystemTimezone::new()),
        };

        let document = render_page(payload).into_shared();
        let page = WorldClocksPage::initialize_all(payload, &document, clock, resolver.as_ref())?;

        log::info!(
            "Preview started: {} module(s), {} at x{}",
            page.len(),
            clock_name,
            config.speed.max(1)
        );

        Ok(Self {
            config,
            document,
            page,
        })
    }

    pub fn page(&self) -> &WorldClocksPage {
        &self.page
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    /// Render what the page shows right now
    pub fn frame(&self) -> String {
        let doc = self.document.lock();
        let mut out = String::new();

        for engine in self.page.engines() {
            if self.config.html {
                let _ = writeln!(out, "{}", doc.outer_html(engine.container()));
                continue;
            }
            let _ = writeln!(out, "Module {}", engine.module_id());
            for clock in snapshot_module(&doc, engine.container()) {
                let _ = writeln!(out, "{clock}");
            }
        }

        out
    }

    /// Print `frames` frames, then stop every engine
    pub async fn run(mut self, mut on_frame: impl FnMut(&str)) -> PreviewResults {
        let mut results = PreviewResults::default();

        while results.frames < self.config.frames {
            if results.frames > 0 {
                tokio::time::sleep(self.config.frame_interval).await;
            }
            on_frame(&self.frame());
            results.frames += 1;
        }

        self.page.teardown_all();
        results.ticks_by_module = self
            .page
            .engines()
            .iter()
            .map(|e| (e.module_id(), e.tick_count()))
            .collect();

        log::info!("Preview finished after {} frame(s)", results.frames);
        results
    }
}
