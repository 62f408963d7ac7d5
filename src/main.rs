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

/// Icon font used by every `Icon`
const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Site configuration assembled from command line flags
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the site configuration (set from command line or default)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

/// Folio - Portfolio gallery viewer
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - Portfolio of project galleries with a lightbox viewer")]
struct Args {
    /// Data directory for preferences
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Catalog document on disk (JSON or `window.projectData = [...]`)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Site root to fetch data/projects.json from when local sources fail
    #[arg(long)]
    catalog_url: Option<String>,

    /// Skip the catalog compiled into the binary
    #[arg(long)]
    no_embedded: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
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

fn main() {
    let args = Args::parse();

    setup_logging(args.verbose);

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let mut config = SiteConfig {
        use_embedded: !args.no_embedded,
        catalog_url: args.catalog_url,
        ..SiteConfig::default()
    };
    if let Some(path) = args.catalog {
        config.catalog_path = Some(path);
    }

    tracing::info!(
        data_dir = %data_dir.display(),
        sources = ?config.catalog_sources().iter().map(|s| s.describe()).collect::<Vec<_>>(),
        "Starting folio"
    );

    // Store globals for the app to pick up
    let _ = DATA_DIR.set(data_dir);
    let title = format!("{} - Portfolio", config.owner);
    let _ = SITE_CONFIG.set(config);

    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(&title)
                .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
                .with_resizable(true),
        )
        .with_custom_head(format!(r#"<link rel="stylesheet" href="{}">"#, FONT_AWESOME));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
