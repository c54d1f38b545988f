//! Swipeable - Entry Point

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use swipeable::model::{AppError, Side};
use swipeable::state::{ChildId, SwipeableContainer};
use tracing::info;

/// Swipeable - replay gesture scripts through the drag-to-dismiss state machine
#[derive(Parser, Debug)]
#[command(name = "swipeable")]
#[command(version)]
#[command(about = "Replay JSONL gesture scripts and print one JSON record per step")]
pub struct Args {
    /// Path to JSONL gesture script (reads from stdin if not provided)
    pub script: Option<PathBuf>,

    /// Side that receives the swipe range
    #[arg(short, long, value_parser = ["left", "right"])]
    pub direction: Option<String>,

    /// Swipe range in [0, 1]
    #[arg(short, long)]
    pub range: Option<f32>,

    /// Container width for the initial layout (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..))]
    pub width: Option<i32>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = swipeable::config::load_config_with_precedence(args.config.clone())?;
        let merged = swipeable::config::merge_config(config_file);
        let with_env = swipeable::config::apply_env_overrides(merged)?;

        let direction_override = args
            .direction
            .as_deref()
            .map(str::parse::<Side>)
            .transpose()?;

        swipeable::config::apply_cli_overrides(with_env, direction_override, args.range, args.width)
    };

    swipeable::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let mut container = SwipeableContainer::new(
        config.swipe_config()?,
        config.settle_motion()?,
        config.touch_slop,
    );
    container.attach();
    container.measure(&[ChildId::new(1)])?;
    container.layout(config.container_width);

    let text = swipeable::source::detect_input_source(args.script.clone())?.read_to_string()?;
    let steps = swipeable::script::parse_script(&text)?;
    info!(steps = steps.len(), "Gesture script parsed");

    let records = swipeable::integration::replay(container.machine_mut(), &steps);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for record in &records {
        serde_json::to_writer(&mut out, record).map_err(std::io::Error::from)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    info!(
        commits = swipeable::integration::commits(&records).len(),
        "Replay finished"
    );

    Ok(())
}
