//! Clock Engine Integration Test
//!
//! Drives engines against a hand-built page skeleton:
//! - Digital, text and analog rendering at fixed instants
//! - Local clock insertion and labeling
//! - Per-clock failure isolation
//! - Tick cadence and teardown on paused tokio time

use chrono::{Duration, TimeZone, Utc};
use worldclocks_clock::{Clock, FixedTimezone, SimulatedClock};
use worldclocks_core::{
    ClockDescriptor, DisplayConfig, DisplayStyle, LocalTimePosition, ModuleConfig, TimeFormat,
    Timestamp, WidgetPayload,
};
use worldclocks_dom::{Document, NodeId, SharedDocument};
use worldclocks_engine::{ClockEngine, EngineError, TickCadence, WorldClocksPage, markup};

const MODULE: u64 = 7;

/// Container, sub-container and one placeholder per clock, as the page
/// template would render them
fn page(module_id: u64, config: &DisplayConfig, clocks: &[(&str, &str)]) -> SharedDocument {
    let mut doc = Document::new();
    let body = doc.body();
    add_module(&mut doc, body, module_id, config, clocks);
    doc.into_shared()
}

fn add_module(
    doc: &mut Document,
    parent: NodeId,
    module_id: u64,
    config: &DisplayConfig,
    clocks: &[(&str, &str)],
) {
    let container = doc.create_element("div");
    doc.set_id(container, &markup::container_id(module_id));
    let list = doc.create_element("div");
    doc.add_class(list, markup::CLOCKS_CONTAINER);
    doc.append_child(container, list);

    for (timezone, name) in clocks {
        let clock = markup::build_clock_element(doc, config, timezone, name, false);
        doc.append_child(list, clock);
    }
    doc.append_child(parent, container);
}

fn clocks_of(doc: &SharedDocument, module_id: u64) -> Vec<NodeId> {
    let doc = doc.lock();
    let container = doc
        .get_element_by_id(&markup::container_id(module_id))
        .unwrap();
    doc.query_all_class(container, markup::CLOCK)
}

fn field(doc: &SharedDocument, clock: NodeId, class: &str) -> Option<String> {
    let doc = doc.lock();
    doc.query_class(clock, class)
        .and_then(|n| doc.text(n).map(String::from))
}

fn transform(doc: &SharedDocument, clock: NodeId, class: &str) -> Option<String> {
    let doc = doc.lock();
    doc.query_class(clock, class)
        .and_then(|n| doc.style(n, "transform").map(String::from))
}

fn london_afternoon() -> Timestamp {
    // January: London is on GMT, so 14:05:09 UTC is 14:05:09 local
    Utc.with_ymd_and_hms(2025, 1, 20, 14, 5, 9).unwrap()
}

async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

/// Scenario: 24-hour digital clock with seconds at 14:05:09 London time
#[tokio::test]
async fn test_digital_24_hour_london() {
    let _ = env_logger::try_init();

    let config = DisplayConfig {
        display_style: DisplayStyle::Digital,
        time_format: TimeFormat::TwentyFourHour,
        show_seconds: true,
        show_date: false,
        ..Default::default()
    };
    let doc = page(MODULE, &config, &[("Europe/London", "London")]);
    let clock = SimulatedClock::fixed(london_afternoon());

    let engine = ClockEngine::initialize(
        MODULE,
        &config,
        doc.clone(),
        clock,
        &FixedTimezone::new("UTC"),
    )
    .unwrap()
    .expect("container exists");

    let london = clocks_of(&doc, MODULE)[0];
    assert_eq!(field(&doc, london, markup::HOURS).as_deref(), Some("14"));
    assert_eq!(field(&doc, london, markup::MINUTES).as_deref(), Some("05"));
    assert_eq!(field(&doc, london, markup::SECONDS).as_deref(), Some("09"));
    assert!(doc.lock().query_class(london, markup::PERIOD).is_none());
    assert!(doc.lock().query_class(london, markup::DATE).is_none());

    assert_eq!(engine.tick_count(), 1);
    assert_eq!(engine.cadence(), TickCadence::EverySecond);
    assert!(engine.is_running());
}

/// 12-hour text clock writes the day period and the date
#[tokio::test]
async fn test_text_12_hour_with_date() {
    let config = DisplayConfig {
        display_style: DisplayStyle::Text,
        time_format: TimeFormat::TwelveHour,
        show_seconds: false,
        show_date: true,
        ..Default::default()
    };
    let doc = page(MODULE, &config, &[("America/New_York", "New York")]);
    // 14:05 UTC is 09:05 EST on Monday 20 Jan 2025
    let clock = SimulatedClock::fixed(london_afternoon());

    let _engine = ClockEngine::initialize(
        MODULE,
        &config,
        doc.clone(),
        clock,
        &FixedTimezone::new("UTC"),
    )
    .unwrap()
    .unwrap();

    let ny = clocks_of(&doc, MODULE)[0];
    assert_eq!(field(&doc, ny, markup::HOURS).as_deref(), Some("09"));
    assert_eq!(field(&doc, ny, markup::MINUTES).as_deref(), Some("05"));
    assert_eq!(field(&doc, ny, markup::PERIOD).as_deref(), Some("AM"));
    assert_eq!(field(&doc, ny, markup::DATE).as_deref(), Some("Mon, Jan 20"));
    assert!(doc.lock().query_class(ny, markup::SECONDS).is_none());
}

/// Scenario: analog clock at exactly 03:00:00
#[tokio::test]
async fn test_analog_three_oclock() {
    let config = DisplayConfig {
        display_style: DisplayStyle::Analog,
        show_seconds: true,
        ..Default::default()
    };
    let doc = page(MODULE, &config, &[("UTC", "UTC")]);
    let clock = SimulatedClock::fixed(Utc.with_ymd_and_hms(2025, 5, 1, 3, 0, 0).unwrap());

    let _engine = ClockEngine::initialize(
        MODULE,
        &config,
        doc.clone(),
        clock,
        &FixedTimezone::new("UTC"),
    )
    .unwrap()
    .unwrap();

    let utc = clocks_of(&doc, MODULE)[0];
    assert_eq!(
        transform(&doc, utc, markup::HAND_HOUR).as_deref(),
        Some("rotate(90deg)")
    );
    assert_eq!(
        transform(&doc, utc, markup::HAND_MINUTE).as_deref(),
        Some("rotate(0deg)")
    );
    assert_eq!(
        transform(&doc, utc, markup::HAND_SECOND).as_deref(),
        Some("rotate(0deg)")
    );
    // Numerals are never touched
    assert_eq!(field(&doc, utc, "worldclock__number--3").as_deref(), Some("3"));
}

/// Analog clock without seconds has no second hand to rotate
#[tokio::test]
async fn test_analog_without_second_hand() {
    let config = DisplayConfig {
        display_style: DisplayStyle::Analog,
        show_seconds: false,
        ..Default::default()
    };
    let doc = page(MODULE, &config, &[("Asia/Tokyo", "Tokyo")]);
    // 06:30 UTC is 15:30 in Tokyo
    let clock = SimulatedClock::fixed(Utc.with_ymd_and_hms(2025, 5, 1, 6, 30, 0).unwrap());

    let _engine = ClockEngine::initialize(
        MODULE,
        &config,
        doc.clone(),
        clock,
        &FixedTimezone::new("UTC"),
    )
    .unwrap()
    .unwrap();

    let tokyo = clocks_of(&doc, MODULE)[0];
    assert_eq!(
        transform(&doc, tokyo, markup::HAND_HOUR).as_deref(),
        Some("rotate(105deg)")
    );
    assert_eq!(
        transform(&doc, tokyo, markup::HAND_MINUTE).as_deref(),
        Some("rotate(180deg)")
    );
    assert_eq!(transform(&doc, tokyo, markup::HAND_SECOND), None);
}

/// Scenario: local clock first, blank label, visitor in Tokyo
#[tokio::test]
async fn test_local_clock_inserted_first() {
    let config = DisplayConfig {
        show_local_time: true,
        local_time_position: LocalTimePosition::First,
        local_time_label: String::new(),
        ..Default::default()
    };
    let doc = page(MODULE, &config, &[("Europe/London", "London")]);
    let clock = SimulatedClock::fixed(london_afternoon());

    let engine = ClockEngine::initialize(
        MODULE,
        &config,
        doc.clone(),
        clock,
        &FixedTimezone::new("Asia/Tokyo"),
    )
    .unwrap()
    .unwrap();

    let clocks = clocks_of(&doc, MODULE);
    assert_eq!(clocks.len(), 2);

    let local = clocks[0];
    assert_eq!(engine.local_clock(), Some(local));
    {
        let d = doc.lock();
        let list = d.element(local).parent().unwrap();
        assert!(d.has_class(list, markup::CLOCKS_CONTAINER));
        assert_eq!(d.first_child(list), Some(local));
        assert!(d.has_class(local, markup::CLOCK_LOCAL));
        assert_eq!(d.data(local, markup::TIMEZONE_ATTR), Some("Asia/Tokyo"));
    }
    assert_eq!(field(&doc, local, markup::NAME).as_deref(), Some("Asia/Tokyo"));

    // Updated like any other clock: 14:05 UTC is 11 PM in Tokyo
    assert_eq!(field(&doc, local, markup::HOURS).as_deref(), Some("11"));
    assert_eq!(field(&doc, local, markup::PERIOD).as_deref(), Some("PM"));
}

/// Local clock last, with an explicit label and a failing resolver
#[tokio::test]
async fn test_local_clock_last_with_label_and_fallback() {
    struct Unavailable;

    impl worldclocks_ports::TimezoneResolver for Unavailable {
        fn resolve(&self) -> worldclocks_ports::TimezoneResult<String> {
            Err(worldclocks_ports::TimezoneError::Unresolvable(
                "locale data missing".to_string(),
            ))
        }
    }

    let config = DisplayConfig {
        show_local_time: true,
        local_time_position: LocalTimePosition::Last,
        local_time_label: "Your time".to_string(),
        ..Default::default()
    };
    let doc = page(
        MODULE,
        &config,
        &[("Europe/London", "London"), ("Asia/Tokyo", "Tokyo")],
    );
    let clock = SimulatedClock::fixed(london_afternoon());

    let engine = ClockEngine::initialize(MODULE, &config, doc.clone(), clock, &Unavailable)
        .unwrap()
        .unwrap();

    let clocks = clocks_of(&doc, MODULE);
    assert_eq!(clocks.len(), 3);
    assert_eq!(engine.local_clock(), Some(clocks[2]));
    assert_eq!(
        doc.lock().data(clocks[2], markup::TIMEZONE_ATTR),
        Some("UTC")
    );
    assert_eq!(field(&doc, clocks[2], markup::NAME).as_deref(), Some("Your time"));
}

/// An unknown timezone fails alone; siblings still update on the same tick
#[tokio::test]
async fn test_unknown_timezone_is_isolated() {
    let config = DisplayConfig {
        time_format: TimeFormat::TwentyFourHour,
        show_date: true,
        ..Default::default()
    };
    let doc = page(
        MODULE,
        &config,
        &[
            ("Mars/Olympus_Mons", "Mars"),
            ("Europe/London", "London"),
        ],
    );
    let clock = SimulatedClock::fixed(london_afternoon());

    let engine = ClockEngine::initialize(
        MODULE,
        &config,
        doc.clone(),
        clock,
        &FixedTimezone::new("UTC"),
    )
    .unwrap()
    .unwrap();

    let clocks = clocks_of(&doc, MODULE);
    let (mars, london) = (clocks[0], clocks[1]);

    // The bad clock keeps its placeholder text
    assert_eq!(field(&doc, mars, markup::HOURS).as_deref(), Some("--"));
    assert_eq!(field(&doc, mars, markup::DATE).as_deref(), Some("--"));
    assert_eq!(field(&doc, london, markup::HOURS).as_deref(), Some("14"));

    let report = engine.update_all();
    assert_eq!(report.updated, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].element, mars);
    assert_eq!(
        report.failures[0].error,
        EngineError::UnknownTimezone("Mars/Olympus_Mons".to_string())
    );
    assert!(!report.is_clean());
    assert!(engine.is_running());
}

/// A clock element without a timezone attribute is reported, not fatal
#[tokio::test]
async fn test_clock_without_timezone() {
    let config = DisplayConfig::default();
    let doc = page(MODULE, &config, &[("Europe/London", "London")]);
    {
        let mut d = doc.lock();
        let container = d.get_element_by_id(&markup::container_id(MODULE)).unwrap();
        let list = d.query_class(container, markup::CLOCKS_CONTAINER).unwrap();
        let orphan = d.create_element("div");
        d.add_class(orphan, markup::CLOCK);
        d.append_child(list, orphan);
    }
    let clock = SimulatedClock::fixed(london_afternoon());

    let engine = ClockEngine::initialize(
        MODULE,
        &config,
        doc.clone(),
        clock,
        &FixedTimezone::new("UTC"),
    )
    .unwrap()
    .unwrap();

    let report = engine.update_all();
    assert_eq!(report.updated, 1);
    assert_eq!(report.failures[0].timezone, None);
    assert_eq!(report.failures[0].error, EngineError::MissingTimezone);
}

/// No container on the page means no engine and no error
#[tokio::test]
async fn test_missing_container_is_a_no_op() {
    let config = DisplayConfig::default();
    let doc = page(MODULE, &config, &[("Europe/London", "London")]);
    let clock = SimulatedClock::fixed(london_afternoon());

    let engine = ClockEngine::initialize(
        MODULE + 1,
        &config,
        doc.clone(),
        clock,
        &FixedTimezone::new("UTC"),
    )
    .unwrap();

    assert!(engine.is_none());
    let london = clocks_of(&doc, MODULE)[0];
    assert_eq!(field(&doc, london, markup::HOURS).as_deref(), Some("--"));
}

/// Initializing outside an async runtime is reported
#[test]
fn test_initialize_requires_runtime() {
    let config = DisplayConfig::default();
    let doc = page(MODULE, &config, &[("Europe/London", "London")]);
    let clock = SimulatedClock::fixed(london_afternoon());

    let result = ClockEngine::initialize(MODULE, &config, doc, clock, &FixedTimezone::new("UTC"));
    assert_eq!(result.err(), Some(EngineError::NoRuntime));
}

/// Without a container there is nothing to drive, runtime or not
#[test]
fn test_missing_container_without_runtime_is_a_no_op() {
    let config = DisplayConfig::default();
    let doc = page(MODULE, &config, &[("Europe/London", "London")]);
    let clock = SimulatedClock::fixed(london_afternoon());

    let result = ClockEngine::initialize(
        MODULE + 1,
        &config,
        doc,
        clock,
        &FixedTimezone::new("UTC"),
    );
    assert!(matches!(result, Ok(None)));
}

/// Every clock in one tick renders the same instant
#[tokio::test]
async fn test_all_clocks_share_one_instant() {
    let config = DisplayConfig {
        time_format: TimeFormat::TwentyFourHour,
        ..Default::default()
    };
    let doc = page(
        MODULE,
        &config,
        &[
            ("UTC", "UTC"),
            ("Asia/Kolkata", "Kolkata"),
            ("America/St_Johns", "St. John's"),
        ],
    );
    let clock = SimulatedClock::fixed(Utc.with_ymd_and_hms(2025, 1, 20, 12, 0, 59).unwrap());

    let engine = ClockEngine::initialize(
        MODULE,
        &config,
        doc.clone(),
        clock.clone(),
        &FixedTimezone::new("UTC"),
    )
    .unwrap()
    .unwrap();

    let report = engine.update_all();
    assert_eq!(report.instant, clock.now());
    assert_eq!(report.updated, 3);

    let seconds: Vec<_> = clocks_of(&doc, MODULE)
        .into_iter()
        .map(|c| field(&doc, c, markup::SECONDS).unwrap())
        .collect();
    assert_eq!(seconds, vec!["59", "59", "59"]);

    let clocks = clocks_of(&doc, MODULE);
    assert_eq!(field(&doc, clocks[1], markup::HOURS).as_deref(), Some("17"));
    assert_eq!(field(&doc, clocks[1], markup::MINUTES).as_deref(), Some("30"));
    // Newfoundland is UTC-3:30 in winter
    assert_eq!(field(&doc, clocks[2], markup::HOURS).as_deref(), Some("08"));
    assert_eq!(field(&doc, clocks[2], markup::MINUTES).as_deref(), Some("30"));
}

/// Minute cadence: at most one redraw per 60 seconds
#[tokio::test(start_paused = true)]
async fn test_minute_cadence() {
    let config = DisplayConfig {
        show_seconds: false,
        time_format: TimeFormat::TwentyFourHour,
        ..Default::default()
    };
    let doc = page(MODULE, &config, &[("UTC", "UTC")]);
    let clock = SimulatedClock::fixed(Utc.with_ymd_and_hms(2025, 1, 20, 10, 15, 0).unwrap());

    let engine = ClockEngine::initialize(
        MODULE,
        &config,
        doc.clone(),
        clock.clone(),
        &FixedTimezone::new("UTC"),
    )
    .unwrap()
    .unwrap();
    assert_eq!(engine.cadence(), TickCadence::EveryMinute);
    assert_eq!(engine.tick_count(), 1);

    let utc = clocks_of(&doc, MODULE)[0];
    assert_eq!(field(&doc, utc, markup::MINUTES).as_deref(), Some("15"));

    // Host time moves on; nothing redraws before the minute is up
    clock.advance(Duration::minutes(1));
    tokio::time::advance(std::time::Duration::from_secs(59)).await;
    settle().await;
    assert_eq!(engine.tick_count(), 1);
    assert_eq!(field(&doc, utc, markup::MINUTES).as_deref(), Some("15"));

    tokio::time::advance(std::time::Duration::from_secs(1)).await;
    settle().await;
    assert_eq!(engine.tick_count(), 2);
    assert_eq!(field(&doc, utc, markup::MINUTES).as_deref(), Some("16"));

    tokio::time::advance(std::time::Duration::from_secs(60)).await;
    settle().await;
    assert_eq!(engine.tick_count(), 3);
}

/// Second cadence: one redraw per second
#[tokio::test(start_paused = true)]
async fn test_second_cadence() {
    let config = DisplayConfig {
        show_seconds: true,
        ..Default::default()
    };
    let doc = page(MODULE, &config, &[("UTC", "UTC")]);
    let clock = SimulatedClock::fixed(Utc.with_ymd_and_hms(2025, 1, 20, 10, 15, 0).unwrap());

    let engine = ClockEngine::initialize(
        MODULE,
        &config,
        doc.clone(),
        clock.clone(),
        &FixedTimezone::new("UTC"),
    )
    .unwrap()
    .unwrap();

    let utc = clocks_of(&doc, MODULE)[0];
    for expected in 1..=5u32 {
        clock.advance(Duration::seconds(1));
        tokio::time::advance(std::time::Duration::from_secs(1)).await;
        settle().await;

        assert_eq!(engine.tick_count(), u64::from(expected) + 1);
        assert_eq!(
            field(&doc, utc, markup::SECONDS),
            Some(format!("{expected:02}"))
        );
    }
}

/// Teardown twice is fine and stops all further ticks
#[tokio::test(start_paused = true)]
async fn test_teardown_is_idempotent() {
    let config = DisplayConfig::default();
    let doc = page(MODULE, &config, &[("UTC", "UTC")]);
    let clock = SimulatedClock::fixed(london_afternoon());

    let mut engine = ClockEngine::initialize(
        MODULE,
        &config,
        doc.clone(),
        clock,
        &FixedTimezone::new("UTC"),
    )
    .unwrap()
    .unwrap();

    tokio::time::advance(std::time::Duration::from_secs(1)).await;
    settle().await;
    assert_eq!(engine.tick_count(), 2);

    engine.teardown();
    engine.teardown();
    assert!(!engine.is_running());

    tokio::time::advance(std::time::Duration::from_secs(10)).await;
    settle().await;
    assert_eq!(engine.tick_count(), 2);

    // Explicit redraws are refused as well
    let report = engine.update_all();
    assert_eq!(report.updated, 0);
    assert!(report.is_clean());
    assert_eq!(engine.tick_count(), 2);
}

/// A timer pass already waiting on the page when teardown runs never
/// writes once teardown has returned
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_no_write_after_teardown_returns() {
    let _ = env_logger::try_init();

    let config = DisplayConfig::default();
    let doc = page(MODULE, &config, &[("UTC", "UTC")]);
    let clock = SimulatedClock::fixed(london_afternoon());

    let mut engine = ClockEngine::initialize(
        MODULE,
        &config,
        doc.clone(),
        clock,
        &FixedTimezone::new("UTC"),
    )
    .unwrap()
    .unwrap();
    assert_eq!(engine.cadence(), TickCadence::EverySecond);
    assert_eq!(engine.tick_count(), 1);

    let utc = clocks_of(&doc, MODULE)[0];
    {
        // Hold the page across the first timer tick so that pass blocks
        let mut held = doc.lock();
        std::thread::sleep(std::time::Duration::from_millis(1500));

        engine.teardown();
        engine.teardown();

        let seconds = held.query_class(utc, markup::SECONDS).unwrap();
        held.set_text(seconds, "xx");
    }
    tokio::time::sleep(std::time::Duration::from_millis(300)).await;

    assert_eq!(engine.tick_count(), 1);
    assert!(!engine.is_running());
    assert_eq!(field(&doc, utc, markup::SECONDS).as_deref(), Some("xx"));
}

/// Engines on one page are independent
#[tokio::test(start_paused = true)]
async fn test_page_initializes_every_addressable_module() {
    let seconds = DisplayConfig {
        show_seconds: true,
        ..Default::default()
    };
    let minutes = DisplayConfig {
        show_seconds: false,
        display_style: DisplayStyle::Analog,
        ..Default::default()
    };

    let mut doc = Document::new();
    let body = doc.body();
    add_module(&mut doc, body, 1, &seconds, &[("Europe/London", "London")]);
    add_module(&mut doc, body, 2, &minutes, &[("Asia/Tokyo", "Tokyo")]);
    let doc = doc.into_shared();

    let mut payload = WidgetPayload::new();
    payload.insert(
        "module1".to_string(),
        ModuleConfig::new(1, vec![ClockDescriptor::new("Europe/London", "London")], seconds),
    );
    payload.insert(
        "module2".to_string(),
        ModuleConfig::new(2, vec![ClockDescriptor::new("Asia/Tokyo", "Tokyo")], minutes),
    );
    // No container on the page
    payload.insert(
        "module3".to_string(),
        ModuleConfig::new(3, vec![], DisplayConfig::default()),
    );
    // No module id at all
    payload.insert("stray".to_string(), ModuleConfig::default());

    let clock = SimulatedClock::fixed(london_afternoon());
    let mut page = WorldClocksPage::initialize_all(
        &payload,
        &doc,
        clock,
        &FixedTimezone::new("UTC"),
    )
    .unwrap();

    assert_eq!(page.len(), 2);
    assert!(page.engine(3).is_none());

    for _ in 0..5 {
        tokio::time::advance(std::time::Duration::from_secs(1)).await;
        settle().await;
    }
    assert_eq!(page.engine(1).unwrap().tick_count(), 6);
    assert_eq!(page.engine(2).unwrap().tick_count(), 1);

    // Stopping one leaves the other running
    page.engine_mut(1).unwrap().teardown();
    assert!(page.engine(2).unwrap().is_running());

    page.teardown_all();
    assert!(page.engines().iter().all(|e| !e.is_running()));
}
