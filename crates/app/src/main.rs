use std::{path::PathBuf, time::Instant};

use clap::{Parser, Subcommand};
use showcase_core::{
    replay, AppConfig, BurgerMenu, Carousel, Page, RecordingMenuView, RecordingPanel,
    RecordingSurface, Script,
};
use tracing_subscriber::EnvFilter;

fn main() -> showcase_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Replay { script } => run_replay(config, &script),
        Commands::Slides => list_slides(&config),
    }
}

fn load_config(path: Option<&std::path::Path>) -> showcase_core::Result<AppConfig> {
    match path {
        Some(path) => {
            tracing::info!(?path, "loading config");
            AppConfig::load(path)
        }
        None => Ok(AppConfig::default()),
    }
}

fn run_replay(config: AppConfig, script_path: &PathBuf) -> showcase_core::Result<()> {
    let script = Script::load(script_path)?;
    tracing::info!(?script_path, steps = script.events.len(), "replaying script");

    let carousel = Carousel::builder(config.slides)
        .config(config.slider)
        .surface(RecordingSurface::new(script.surface_width))
        .panel(RecordingPanel::new())
        .mount()
        .map_err(|err| {
            tracing::error!(%err, "product slider setup aborted");
            err
        })?;
    let menu = BurgerMenu::mount(Some(RecordingMenuView::default()), config.menu)?;
    let mut page = Page::new(carousel, menu);

    let report = replay(&mut page, &script, Instant::now());
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn list_slides(config: &AppConfig) -> showcase_core::Result<()> {
    for (index, slide) in config.slides.iter().enumerate() {
        println!("{index}: {} [{}] {}", slide.title, slide.category, slide.name);
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Product showcase widget host", long_about = None)]
struct Cli {
    /// JSON file with slider, menu and slide settings.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a timed input script and print where the widgets ended up.
    Replay {
        /// Path to the JSON input script.
        script: PathBuf,
    },
    /// List the slides the carousel would show.
    Slides,
}
