//! Placeholder markup for one clock
//!
//! Class names are the contract between the page skeleton, the stylesheet
//! and the engine. The engine only ever looks elements up by these names.

use worldclocks_core::{DisplayConfig, DisplayStyle, ModuleId};
use worldclocks_dom::{Document, NodeId};

pub const CONTAINER_ID_PREFIX: &str = "mod-worldclocks-";
pub const MODULE: &str = "mod-worldclocks";
pub const CLOCKS_CONTAINER: &str = "worldclocks-container";
pub const CLOCK: &str = "worldclock";
pub const CLOCK_LOCAL: &str = "worldclock--local";
pub const TIME: &str = "worldclock__time";
pub const HOURS: &str = "worldclock__hours";
pub const MINUTES: &str = "worldclock__minutes";
pub const SECONDS: &str = "worldclock__seconds";
pub const SEPARATOR: &str = "worldclock__separator";
pub const PERIOD: &str = "worldclock__period";
pub const ANALOG: &str = "worldclock__analog";
pub const FACE: &str = "worldclock__face";
pub const HAND: &str = "worldclock__hand";
pub const HAND_HOUR: &str = "worldclock__hand--hour";
pub const HAND_MINUTE: &str = "worldclock__hand--minute";
pub const HAND_SECOND: &str = "worldclock__hand--second";
pub const CENTER: &str = "worldclock__center";
pub const NUMBER: &str = "worldclock__number";
pub const DATE: &str = "worldclock__date";
pub const NAME: &str = "worldclock__name";

/// Data attribute carrying a clock's IANA identifier
pub const TIMEZONE_ATTR: &str = "timezone";

/// Text shown before the first update
pub const PLACEHOLDER_TEXT: &str = "--";

/// Element id of the container for `module_id`
pub fn container_id(module_id: ModuleId) -> String {
    format!("{CONTAINER_ID_PREFIX}{module_id}")
}

/// Build a detached clock element for `timezone` labeled `label`
///
/// The inner structure depends on the display style:
///
/// ```text
/// digital / text                      analog
/// ──────────────                      ──────
/// .worldclock__time                   .worldclock__analog
///   .worldclock__hours     "--"         .worldclock__face
///   .worldclock__separator ":"            .worldclock__hand--hour
///   .worldclock__minutes   "--"           .worldclock__hand--minute
///   [separator, seconds]                  [.worldclock__hand--second]
///   [.worldclock__period]                 .worldclock__center
///                                         .worldclock__number--1 .. 12
/// [.worldclock__date]                 [.worldclock__date]
/// .worldclock__name                   .worldclock__name
/// ```
pub fn build_clock_element(
    doc: &mut Document,
    config: &DisplayConfig,
    timezone: &str,
    label: &str,
    is_local: bool,
) -> NodeId {
    let clock = doc.create_element("div");
    doc.add_class(clock, CLOCK);
    if is_local {
        doc.add_class(clock, CLOCK_LOCAL);
    }
    doc.set_data(clock, TIMEZONE_ATTR, timezone);

    match config.display_style {
        DisplayStyle::Analog => build_analog(doc, clock, config),
        DisplayStyle::Digital | DisplayStyle::Text => build_readout(doc, clock, config),
    }

    if config.show_date {
        append(doc, clock, "div", DATE, Some(PLACEHOLDER_TEXT));
    }
    append(doc, clock, "div", NAME, Some(label));

    clock
}

fn build_readout(doc: &mut Document, clock: NodeId, config: &DisplayConfig) {
    let time = append(doc, clock, "div", TIME, None);
    append(doc, time, "span", HOURS, Some(PLACEHOLDER_TEXT));
    append(doc, time, "span", SEPARATOR, Some(":"));
    append(doc, time, "span", MINUTES, Some(PLACEHOLDER_TEXT));

    if config.show_seconds {
        append(doc, time, "span", SEPARATOR, Some(":"));
        append(doc, time, "span", SECONDS, Some(PLACEHOLDER_TEXT));
    }
    if config.time_format.is_12_hour() {
        append(doc, time, "span", PERIOD, Some(PLACEHOLDER_TEXT));
    }
}

fn build_analog(doc: &mut Document, clock: NodeId, config: &DisplayConfig) {
    let analog = append(doc, clock, "div", ANALOG, None);
    let face = append(doc, analog, "div", FACE, None);

    let hour = append(doc, face, "div", HAND, None);
    doc.add_class(hour, HAND_HOUR);
    let minute = append(doc, face, "div", HAND, None);
    doc.add_class(minute, HAND_MINUTE);
    if config.show_seconds {
        let second = append(doc, face, "div", HAND, None);
        doc.add_class(second, HAND_SECOND);
    }

    append(doc, face, "div", CENTER, None);

    for i in 1..=12 {
        let label = i.to_string();
        let number = append(doc, face, "span", NUMBER, Some(&label));
        doc.add_class(number, &format!("{NUMBER}--{i}"));
    }
}

fn append(
    doc: &mut Document,
    parent: NodeId,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> NodeId {
    let node = doc.create_element(tag);
    doc.add_class(node, class);
    if let Some(text) = text {
        doc.set_text(node, text);
    }
    doc.append_child(parent, node);
    node
}
