//! Clock Engine - one widget instance on the page
//!
//! Owns a container element, optionally adds the visitor's local clock,
//! redraws every clock once on initialization and then on a single shared
//! repeating timer until torn down.
//!
//! ```text
//!   initialize ──► [local clock] ──► update_all ──► arm timer
//!                                                      │
//!                          ┌───────────────────────────┘
//!                          ▼
//!                   tick: now() once ──► clock 1 ──► clock 2 ──► ... ──► clock n
//!                          ▲                                               │
//!                          └──────────── every 1s / 60s ───────────────────┘
//! ```

use log::{debug, error, info};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use worldclocks_core::{DisplayConfig, LocalTimePosition, ModuleId, Timestamp, TimezoneId};
use worldclocks_dom::{Document, NodeId, SharedDocument};
use worldclocks_ports::{Clock, TimezoneResolver};

use crate::analog::{HandAngles, rotate};
use crate::cadence::TickCadence;
use crate::error::{EngineError, Result};
use crate::format::{LocaleFormatter, TimeParts};
use crate::markup;

/// Timezone used when the visitor's own cannot be determined
pub const FALLBACK_TIMEZONE: &str = "UTC";

/// One clock that could not be updated during a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFailure {
    pub element: NodeId,
    pub timezone: Option<TimezoneId>,
    pub error: EngineError,
}

/// Outcome of one pass over every clock of an engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// The single instant every clock in this pass was rendered against
    pub instant: Timestamp,
    pub updated: usize,
    pub failures: Vec<ClockFailure>,
}

impl TickReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Everything a reading of one clock produces, computed before any write
struct ClockReading {
    parts: TimeParts,
    hands: Option<HandAngles>,
    date: Option<String>,
}

/// The per-tick work, shared between the engine and its timer task
struct ClockUpdater {
    module_id: ModuleId,
    document: SharedDocument,
    container: NodeId,
    config: DisplayConfig,
    formatter: LocaleFormatter,
    clock: Arc<dyn Clock>,
    ticks: AtomicU64,
    /// Set on teardown; a pass that was already waiting on the document
    /// lock must not write after teardown returned.
    stopped: AtomicBool,
}

impl ClockUpdater {
    /// Redraw every clock in the container against one captured instant
    ///
    /// Once stopped, returns an empty report without touching the page.
    fn update_all(&self) -> TickReport {
        let mut doc = self.document.lock();
        let instant = self.clock.now();

        let mut report = TickReport {
            instant,
            updated: 0,
            failures: Vec::new(),
        };

        if self.stopped.load(Ordering::Acquire) {
            debug!("Module {}: stopped, skipping update", self.module_id);
            return report;
        }

        for element in doc.query_all_class(self.container, markup::CLOCK) {
            let timezone = doc.data(element, markup::TIMEZONE_ATTR).map(String::from);

            let result = match &timezone {
                Some(tz) => self
                    .read(instant, tz)
                    .map(|reading| self.apply(&mut doc, element, reading)),
                None => Err(EngineError::MissingTimezone),
            };

            match result {
                Ok(()) => report.updated += 1,
                Err(e) => {
                    error!(
                        "Module {}: error updating clock for timezone {}: {}",
                        self.module_id,
                        timezone.as_deref().unwrap_or("<none>"),
                        e
                    );
                    report.failures.push(ClockFailure {
                        element,
                        timezone,
                        error: e,
                    });
                }
            }
        }

        self.ticks.fetch_add(1, Ordering::Relaxed);
        report
    }

    fn read(&self, instant: Timestamp, timezone: &str) -> Result<ClockReading> {
        let parts = self.formatter.time_parts(instant, timezone)?;

        let hands = if self.config.display_style.is_analog() {
            let wall = self.formatter.wall_clock(instant, timezone)?;
            Some(HandAngles::from_wall_clock(wall))
        } else {
            None
        };

        let date = if self.config.show_date {
            Some(self.formatter.date(instant, timezone)?)
        } else {
            None
        };

        Ok(ClockReading { parts, hands, date })
    }

    fn apply(&self, doc: &mut Document, element: NodeId, reading: ClockReading) {
        match reading.hands {
            Some(hands) => write_hands(doc, element, hands),
            None => write_readout(doc, element, &reading.parts),
        }

        if let Some(date) = reading.date {
            if let Some(node) = doc.query_class(element, markup::DATE) {
                doc.set_text(node, &date);
            }
        }
    }
}

/// Write hour/minute verbatim; seconds and period only when both the
/// element and the part exist, so a missing part keeps the old text.
fn write_readout(doc: &mut Document, element: NodeId, parts: &TimeParts) {
    let fields = [
        (markup::HOURS, Some(parts.hour.as_str())),
        (markup::MINUTES, Some(parts.minute.as_str())),
        (markup::SECONDS, parts.second.as_deref()),
        (markup::PERIOD, parts.day_period.as_deref()),
    ];

    for (class, value) in fields {
        if let (Some(node), Some(value)) = (doc.query_class(element, class), value) {
            doc.set_text(node, value);
        }
    }
}

fn write_hands(doc: &mut Document, element: NodeId, hands: HandAngles) {
    let rotations = [
        (markup::HAND_HOUR, hands.hour),
        (markup::HAND_MINUTE, hands.minute),
        (markup::HAND_SECOND, hands.second),
    ];

    for (class, degrees) in rotations {
        if let Some(node) = doc.query_class(element, class) {
            doc.set_style(node, "transform", &rotate(degrees));
        }
    }
}

/// Resolve the visitor's timezone, falling back to UTC on any failure
pub fn local_timezone(resolver: &dyn TimezoneResolver) -> TimezoneId {
    match resolver.resolve() {
        Ok(tz) if !tz.is_empty() => tz,
        Ok(_) => FALLBACK_TIMEZONE.to_string(),
        Err(e) => {
            debug!("Falling back to {}: {}", FALLBACK_TIMEZONE, e);
            FALLBACK_TIMEZONE.to_string()
        }
    }
}

/// Live clocks for one widget instance
pub struct ClockEngine {
    updater: Arc<ClockUpdater>,
    cadence: TickCadence,
    local_clock: Option<NodeId>,
    timer: Option<JoinHandle<()>>,
}

impl ClockEngine {
    /// Wire up the widget for `module_id` inside `document`
    ///
    /// Returns `Ok(None)` when no container for this module exists on the
    /// page. Must be called from within a tokio runtime, which drives the
    /// repeating timer.
    pub fn initialize(
        module_id: ModuleId,
        config: &DisplayConfig,
        document: SharedDocument,
        clock: Arc<dyn Clock>,
        resolver: &dyn TimezoneResolver,
    ) -> Result<Option<Self>> {
        let container_id = markup::container_id(module_id);
        let Some(container) = document.lock().get_element_by_id(&container_id) else {
            debug!("No container #{}, skipping module {}", container_id, module_id);
            return Ok(None);
        };

        let runtime = tokio::runtime::Handle::try_current().map_err(|_| EngineError::NoRuntime)?;

        let local_clock = if config.show_local_time {
            let timezone = local_timezone(resolver);
            add_local_clock(&mut document.lock(), container, config, &timezone)
        } else {
            None
        };

        let updater = Arc::new(ClockUpdater {
            module_id,
            document,
            container,
            config: config.clone(),
            formatter: LocaleFormatter::new(config.time_format, config.show_seconds),
            clock,
            ticks: AtomicU64::new(0),
            stopped: AtomicBool::new(false),
        });

        let mut engine = Self {
            updater,
            cadence: TickCadence::from_config(config),
            local_clock,
            timer: None,
        };

        engine.update_all();
        engine.start_timer(&runtime);

        Ok(Some(engine))
    }

    /// Arm the single repeating timer
    ///
    /// The first tick fires one period from now: initialization has
    /// already drawn the current time.
    fn start_timer(&mut self, runtime: &tokio::runtime::Handle) {
        let updater = Arc::clone(&self.updater);
        let period = self.cadence.period();

        info!(
            "Starting clock timer for module {} with interval of {}ms",
            updater.module_id,
            period.as_millis()
        );

        self.timer = Some(runtime.spawn(async move {
            let mut tick_interval = interval_at(Instant::now() + period, period);
            tick_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tick_interval.tick().await;
                updater.update_all();
            }
        }));
    }

    /// Redraw every clock now
    ///
    /// After teardown this is a no-op returning an empty report.
    pub fn update_all(&self) -> TickReport {
        self.updater.update_all()
    }

    /// Stop the timer. Safe to call any number of times.
    ///
    /// No pass writes to the page once this returns, including one the
    /// timer had already started and that is waiting on the document.
    pub fn teardown(&mut self) {
        self.updater.stopped.store(true, Ordering::Release);
        if let Some(timer) = self.timer.take() {
            timer.abort();
            info!("Stopped clock timer for module {}", self.updater.module_id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn module_id(&self) -> ModuleId {
        self.updater.module_id
    }

    pub fn container(&self) -> NodeId {
        self.updater.container
    }

    pub fn cadence(&self) -> TickCadence {
        self.cadence
    }

    /// The synthesized clock for the visitor's timezone, if one was added
    pub fn local_clock(&self) -> Option<NodeId> {
        self.local_clock
    }

    /// Number of completed update passes, including the initial one
    pub fn tick_count(&self) -> u64 {
        self.updater.ticks.load(Ordering::Relaxed)
    }
}

impl Drop for ClockEngine {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Build the local clock and insert it at the configured end of the
/// clocks sub-container. No sub-container, no local clock.
fn add_local_clock(
    doc: &mut Document,
    container: NodeId,
    config: &DisplayConfig,
    timezone: &str,
) -> Option<NodeId> {
    let clocks = doc.query_class(container, markup::CLOCKS_CONTAINER)?;
    let label = config.local_label_override().unwrap_or(timezone);

    let clock = markup::build_clock_element(doc, config, timezone, label, true);
    match config.local_time_position {
        LocalTimePosition::First => doc.prepend_child(clocks, clock),
        LocalTimePosition::Last => doc.append_child(clocks, clock),
    }

    debug!("Added local clock for {} labeled '{}'", timezone, label);
    Some(clock)
}
