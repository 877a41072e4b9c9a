use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use worldclocks_engine::{load_default_payload, load_payload};
use worldclocks_runner::{PagePreview, PreviewConfig};

/// One simulated day per wall second
const MAX_SPEED: i64 = 86_400;

/// Live preview of world clock widgets in the terminal
#[derive(Parser, Debug)]
#[command(name = "worldclocks", version, about)]
struct Args {
    /// Widget payload (JSON). Uses the bundled demo page when omitted.
    #[arg(long, short)]
    payload: Option<PathBuf>,

    /// Number of frames to print
    #[arg(long, short, default_value_t = 5)]
    frames: usize,

    /// Milliseconds between frames
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    /// Run the clocks this many times faster than real time
    #[arg(
        long,
        short,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=MAX_SPEED)
    )]
    speed: u32,

    /// Visitor timezone (IANA id) instead of the host setting
    #[arg(long)]
    local_timezone: Option<String>,

    /// Print each frame as HTML
    #[arg(long)]
    html: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let payload = match &args.payload {
        Some(path) => {
            log::info!("Loading payload from {}", path.display());
            load_payload(path)?
        }
        None => load_default_payload()?,
    };

    let config = PreviewConfig {
        frames: args.frames,
        frame_interval: Duration::from_millis(args.interval_ms),
        speed: args.speed,
        local_timezone: args.local_timezone,
        html: args.html,
    };

    let preview = PagePreview::start(&payload, config)?;
    if preview.page().is_empty() {
        log::warn!("Payload has no module to show");
        return Ok(());
    }

    let results = preview.run(|frame| println!("{frame}")).await;

    for (module_id, ticks) in &results.ticks_by_module {
        log::info!("Module {}: {} update pass(es)", module_id, ticks);
    }

    Ok(())
}
