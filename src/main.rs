use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use tabshell::core::config::{self, CliOverrides, TabshellConfig};
use tabshell::tui;

#[derive(Parser)]
#[command(name = "tabshell", about = "Tabbed app shell with debounced swipe navigation")]
struct Args {
    /// Config file (default: ~/.tabshell/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file path
    #[arg(long, default_value = "tabshell.log")]
    log_file: PathBuf,

    /// Minimum time between accepted navigations, in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Horizontal travel (px) a swipe needs to commit
    #[arg(long)]
    swipe_distance: Option<f32>,

    /// Do not restore or remember the signed-in user
    #[arg(long)]
    forget_user: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger; the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Tabshell starting up");

    let file_config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = file_config.unwrap_or_else(|e| {
        eprintln!("Warning: {e}. Using defaults.");
        log::warn!("Config error: {}", e);
        TabshellConfig::default()
    });

    let overrides = CliOverrides {
        debounce_ms: args.debounce_ms,
        swipe_distance: args.swipe_distance,
        forget_user: args.forget_user,
    };
    let resolved = config::resolve(&file_config, &overrides);
    log::debug!("Resolved config: {:?}", resolved);

    tui::run(resolved)
}
