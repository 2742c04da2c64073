//! posdeck - A customizable point-of-sale dashboard engine
//!
//! This is the binary entry point. All logic lives in the library crates;
//! the binary renders the configured dashboard headlessly (text or JSON)
//! against the demo dataset.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use posdeck_app::data::{build_cards, seed};
use posdeck_app::{load_settings, to_internal};
use posdeck_core::registry;

/// posdeck - A customizable point-of-sale dashboard engine
#[derive(Parser, Debug)]
#[command(name = "posdeck")]
#[command(about = "Render the configured dashboard for a section", long_about = None)]
struct Args {
    /// Path to the dashboard settings file
    /// (defaults to <config_dir>/posdeck/dashboard.toml)
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Dashboard section to render
    #[arg(long, default_value = "general")]
    section: String,

    /// Emit cards as JSON (one object per line)
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = posdeck_core::logging::init() {
        eprintln!("warning: could not initialize logging: {e}");
    }

    let registry = Arc::new(registry::builtin());
    let settings_path = args
        .settings
        .unwrap_or_else(posdeck_app::default_settings_path);

    tracing::info!("Loading dashboard settings from {}", settings_path.display());
    let persisted = load_settings(&settings_path)?;
    let snapshot = to_internal(&persisted, &registry);

    let stores = seed::seeded_stores().await?;
    let cards = build_cards(&stores, &snapshot, &registry, &args.section).await?;

    if args.json {
        for card in &cards {
            println!("{}", serde_json::to_string(card)?);
        }
        return Ok(());
    }

    if let Some(entry) = registry.section(&args.section) {
        println!("── {} ──", entry.info.name);
        if let Some(instructions) = &entry.info.instructions {
            println!("{instructions}");
        }
        println!();
    }

    if cards.is_empty() {
        println!("(no visible widgets in section '{}')", args.section);
        return Ok(());
    }

    for card in &cards {
        match &card.detail {
            Some(detail) => println!("{:<22} {}  ({detail})", card.title, card.value),
            None => println!("{:<22} {}", card.title, card.value),
        }
    }

    Ok(())
}
