//! Snapshot - read back what a module currently displays
//!
//! Used by the terminal preview and by tests; it only reads the element
//! tree, never the engine.

use std::fmt;
use worldclocks_dom::{Document, NodeId};
use worldclocks_engine::markup;

/// What one clock face currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum Readout {
    Digital {
        hours: String,
        minutes: String,
        seconds: Option<String>,
        period: Option<String>,
    },
    Analog {
        hour: Option<String>,
        minute: Option<String>,
        second: Option<String>,
    },
}

/// Displayed state of one clock
#[derive(Debug, Clone, PartialEq)]
pub struct ClockSnapshot {
    pub timezone: String,
    pub label: String,
    pub is_local: bool,
    pub readout: Readout,
    pub date: Option<String>,
}

/// Read every clock below `container`, in page order
pub fn snapshot_module(doc: &Document, container: NodeId) -> Vec<ClockSnapshot> {
    doc.query_all_class(container, markup::CLOCK)
        .into_iter()
        .map(|clock| snapshot_clock(doc, clock))
        .collect()
}

pub fn snapshot_clock(doc: &Document, clock: NodeId) -> ClockSnapshot {
    let text = |class: &str| {
        doc.query_class(clock, class)
            .and_then(|n| doc.text(n))
            .map(String::from)
    };
    let rotation = |class: &str| {
        doc.query_class(clock, class)
            .and_then(|n| doc.style(n, "transform"))
            .map(String::from)
    };

    let readout = if doc.query_class(clock, markup::ANALOG).is_some() {
        Readout::Analog {
            hour: rotation(markup::HAND_HOUR),
            minute: rotation(markup::HAND_MINUTE),
            second: rotation(markup::HAND_SECOND),
        }
    } else {
        Readout::Digital {
            hours: text(markup::HOURS).unwrap_or_default(),
            minutes: text(markup::MINUTES).unwrap_or_default(),
            seconds: text(markup::SECONDS),
            period: text(markup::PERIOD),
        }
    };

    ClockSnapshot {
        timezone: doc
            .data(clock, markup::TIMEZONE_ATTR)
            .unwrap_or_default()
            .to_string(),
        label: text(markup::NAME).unwrap_or_default(),
        is_local: doc.has_class(clock, markup::CLOCK_LOCAL),
        readout,
        date: text(markup::DATE),
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Readout::Digital {
                hours,
                minutes,
                seconds,
                period,
            } => {
                write!(f, "{hours}:{minutes}")?;
                if let Some(seconds) = seconds {
                    write!(f, ":{seconds}")?;
                }
                if let Some(period) = period {
                    write!(f, " {period}")?;
                }
                Ok(())
            }
            Readout::Analog {
                hour,
                minute,
                second,
            } => {
                let angle = |t: &Option<String>| {
                    t.as_deref()
                        .and_then(|s| s.strip_prefix("rotate("))
                        .and_then(|s| s.strip_suffix(')'))
                        .unwrap_or("-")
                        .to_string()
                };
                write!(f, "hour {} minute {}", angle(hour), angle(minute))?;
                if second.is_some() {
                    write!(f, " second {}", angle(second))?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for ClockSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_local { "*" } else { " " };
        write!(f, "{marker} {:<20} {}", self.label, self.readout)?;
        if let Some(date) = &self.date {
            write!(f, "  {date}")?;
        }
        Ok(())
    }
}
