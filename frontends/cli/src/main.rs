mod script;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use voyage::{EditorConfig, Itinerary, MemoryTripRepository, Trip, TripEditor};

const USAGE: &str =
    "usage: voyage-replay <itinerary.json> <script.yaml> [--config <editor.yaml>] [--out <file>]";

struct Args {
    itinerary_path: PathBuf,
    script_path: PathBuf,
    config_path: Option<PathBuf>,
    out_path: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let mut positional = Vec::new();
    let mut config_path = None;
    let mut out_path = None;

    while let Some(arg) = args.next() {
        if arg == "--config" || arg == "-c" {
            config_path = Some(PathBuf::from(args.next().context(USAGE)?));
        } else if arg == "--out" || arg == "-o" {
            out_path = Some(PathBuf::from(args.next().context(USAGE)?));
        } else if arg == "--help" || arg == "-h" {
            println!("{}", USAGE);
            std::process::exit(0);
        } else if !arg.starts_with('-') {
            positional.push(PathBuf::from(arg));
        } else {
            bail!("unknown option {}\n{}", arg, USAGE);
        }
    }

    let mut positional = positional.into_iter();
    match (positional.next(), positional.next(), positional.next()) {
        (Some(itinerary_path), Some(script_path), None) => Ok(Args {
            itinerary_path,
            script_path,
            config_path,
            out_path,
        }),
        _ => bail!(USAGE),
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the itinerary JSON
    // Default to INFO level, can be overridden with RUST_LOG env var
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => EditorConfig::load_from_file(path)?,
        None => EditorConfig::default(),
    }
    .with_env_overrides()?;

    let raw = fs::read_to_string(&args.itinerary_path)
        .with_context(|| format!("Failed to read itinerary {}", args.itinerary_path.display()))?;
    let itinerary: Itinerary = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse itinerary {}", args.itinerary_path.display()))?;

    let script = fs::read_to_string(&args.script_path)
        .with_context(|| format!("Failed to read script {}", args.script_path.display()))?;
    let steps = script::parse_script(&script)
        .with_context(|| format!("Failed to parse script {}", args.script_path.display()))?;

    let trip_name = itinerary.title.clone();
    let repository = Arc::new(MemoryTripRepository::new());
    let mut editor = TripEditor::open(
        Trip::new("replay", trip_name, itinerary),
        config,
        Some(repository),
    );

    let changed = script::replay(&mut editor, &steps);
    info!(
        "[Replay] {} of {} steps changed the itinerary (undo available: {}, redo available: {})",
        changed,
        steps.len(),
        editor.can_undo(),
        editor.can_redo()
    );

    let output = serde_json::to_string_pretty(editor.itinerary())?;
    match &args.out_path {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", output),
    }

    Ok(())
}
