#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::SiteConfig;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Site content, loaded once at startup
static SITE: OnceLock<SiteConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the site content (set at startup, empty site otherwise)
pub fn get_site() -> SiteConfig {
    SITE.get().cloned().unwrap_or_default()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

/// Folio - Interactive portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - single-page portfolio with project slider, theme and contact form")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory for saved preferences
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Site description (JSON) replacing the bundled one
    #[arg(short, long)]
    site: Option<PathBuf>,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_site(path: Option<&PathBuf>) -> anyhow::Result<SiteConfig> {
    let site = match path {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::bundled()?,
    };
    Ok(site)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    let _ = DATA_DIR.set(data_dir.clone());

    let site = load_site(args.site.as_ref())?;
    let title = if site.owner.is_empty() {
        "Portfolio".to_string()
    } else {
        format!("{} - Portfolio", site.owner)
    };
    tracing::info!(
        "Starting '{}' with {} projects, data dir: {:?}",
        title,
        site.projects.len(),
        data_dir
    );
    let _ = SITE.set(site);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
