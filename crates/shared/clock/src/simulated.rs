use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use worldclocks_core::Timestamp;
use worldclocks_ports::Clock;

/// Time scale modes for the simulated clock
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TimeScale {
    /// Real-time (1:1 ratio with wall clock)
    #[default]
    Normal,
    /// Accelerated time (multiplier applied to elapsed time, capped at
    /// `i32::MAX`)
    Fast(u32),
    /// Fixed time (only advances when explicitly moved)
    Fixed,
}

/// Anchor pair: simulated time `sim` corresponded to wall time `real`
#[derive(Debug, Clone, Copy)]
struct Anchor {
    real: Timestamp,
    sim: Timestamp,
    scale: TimeScale,
}

impl Anchor {
    /// Simulated instant at wall time `real_now`, saturating at the end
    /// of representable time
    fn project(&self, real_now: Timestamp) -> Timestamp {
        let real_elapsed = real_now - self.real;
        let sim_elapsed = match self.scale {
            TimeScale::Normal => Some(real_elapsed),
            TimeScale::Fast(multiplier) => {
                real_elapsed.checked_mul(i32::try_from(multiplier).unwrap_or(i32::MAX))
            }
            TimeScale::Fixed => return self.sim,
        };

        sim_elapsed
            .and_then(|elapsed| self.sim.checked_add_signed(elapsed))
            .unwrap_or(if real_elapsed < Duration::zero() {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            })
    }
}

/// Controllable clock for previews and deterministic tests
///
/// Starts at an arbitrary instant and then follows the wall clock at the
/// configured scale. Changing the scale re-anchors at the current simulated
/// instant so time never jumps.
pub struct SimulatedClock {
    anchor: RwLock<Anchor>,
}

impl SimulatedClock {
    /// Create a new simulated clock
    ///
    /// # Arguments
    /// * `initial_time` - Optional starting time. If None, uses current wall time.
    pub fn new(initial_time: Option<Timestamp>) -> Arc<Self> {
        let real = Utc::now();
        Arc::new(Self {
            anchor: RwLock::new(Anchor {
                real,
                sim: initial_time.unwrap_or(real),
                scale: TimeScale::Normal,
            }),
        })
    }

    /// Create a clock frozen at `time`
    pub fn fixed(time: Timestamp) -> Arc<Self> {
        Arc::new(Self {
            anchor: RwLock::new(Anchor {
                real: Utc::now(),
                sim: time,
                scale: TimeScale::Fixed,
            }),
        })
    }

    /// Set the time scale
    pub fn set_time_scale(&self, scale: TimeScale) {
        let real_now = Utc::now();
        let mut anchor = self.anchor.write();
        let sim_now = anchor.project(real_now);
        *anchor = Anchor {
            real: real_now,
            sim: sim_now,
            scale,
        };
    }

    /// Get the current time scale
    pub fn time_scale(&self) -> TimeScale {
        self.anchor.read().scale
    }

    /// Move simulated time forward (or backward, for negative durations)
    pub fn advance(&self, duration: Duration) {
        let mut anchor = self.anchor.write();
        anchor.sim += duration;
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> Timestamp {
        self.anchor.read().project(Utc::now())
    }

    fn name(&self) -> &str {
        "SimulatedClock"
    }
}
