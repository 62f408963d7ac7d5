//! Folio CLI
//!
//! Thin wrapper around folio-core for authoring the portfolio catalog.
//!
//! ## Usage
//!
//! ```bash
//! # Rebuild the catalog from the media folders
//! folio scan images/Projects --out data/projects.json
//!
//! # Emit the script form instead of plain JSON
//! folio scan images/Projects --out data/projects.js --format js
//!
//! # List projects of the embedded catalog (or --catalog PATH)
//! folio list
//!
//! # Report duplicate ids and projects without media
//! folio check --catalog data/projects.json
//!
//! # Preview what the lightbox shows for a project
//! folio show "Presentation Design" --index 7
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use folio_core::card::count_label;
use folio_core::scan::{self, DEFAULT_PREFIX};
use folio_core::{
    load_catalog, parse_catalog, CatalogSource, GalleryIndex, Lightbox, OpenGallery, ProjectRecord,
};

/// Folio - portfolio catalog tools
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Folio - build and inspect portfolio catalogs")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a catalog from a folder of project sub-folders
    Scan {
        /// Directory holding one sub-folder per project
        dir: PathBuf,

        /// Output file; metadata already in it is kept
        #[arg(short, long, default_value = folio_core::catalog::CATALOG_PATH)]
        out: PathBuf,

        /// Path prefix written in front of each media src
        #[arg(short, long, default_value = DEFAULT_PREFIX)]
        prefix: String,

        /// Output document format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// List projects and their media counts
    List {
        /// Catalog document (default: the embedded catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Check a catalog for duplicate ids and projects without media
    Check {
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Print the lightbox view for a project
    Show {
        /// Project id
        id: String,

        /// Item index to open at (clamped)
        #[arg(short, long, default_value_t = 0)]
        index: usize,

        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Plain JSON array
    Json,
    /// `window.projectData = [...];`
    Js,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

async fn read_catalog(path: Option<&Path>) -> Result<Vec<ProjectRecord>> {
    let source = match path {
        Some(path) => CatalogSource::File(path.to_path_buf()),
        None => CatalogSource::embedded(),
    };
    let description = source.describe();
    load_catalog(&[source])
        .await
        .with_context(|| format!("Failed to load catalog from {}", description))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Scan {
            dir,
            out,
            prefix,
            format,
        } => {
            let existing = match std::fs::read_to_string(&out) {
                Ok(doc) => parse_catalog(&doc).unwrap_or_else(|e| {
                    tracing::warn!(path = %out.display(), error = %e, "existing catalog ignored");
                    Vec::new()
                }),
                Err(_) => Vec::new(),
            };

            let catalog = scan::scan_projects(&dir, &prefix, &existing)
                .with_context(|| format!("Failed to scan {}", dir.display()))?;

            let doc = match format {
                Format::Json => scan::to_json(&catalog)?,
                Format::Js => scan::to_script(&catalog)?,
            };
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&out, doc)
                .with_context(|| format!("Failed to write {}", out.display()))?;

            let with_media = catalog.iter().filter(|p| p.has_media()).count();
            println!("Wrote {} projects to {}", catalog.len(), out.display());
            if with_media < catalog.len() {
                println!("  {} without media (hidden)", catalog.len() - with_media);
            }
        }

        Commands::List { catalog } => {
            let projects = read_catalog(catalog.as_deref()).await?;
            println!("Projects: {}", projects.len());
            for project in &projects {
                if project.has_media() {
                    println!(
                        "  {}: {}",
                        project.title,
                        count_label(project.image_count(), project.video_count())
                    );
                } else {
                    println!("  {}: no media (hidden)", project.title);
                }
            }
        }

        Commands::Check { catalog } => {
            let projects = read_catalog(catalog.as_deref()).await?;
            let index = GalleryIndex::build(&projects);

            for project in projects.iter().filter(|p| !p.has_media()) {
                println!("Empty project: {}", project.id);
            }
            for id in index.duplicate_ids() {
                println!("Duplicate id: {}", id);
            }

            if !index.duplicate_ids().is_empty() {
                bail!("{} duplicate id(s)", index.duplicate_ids().len());
            }
            println!("OK: {} projects", projects.len());
        }

        Commands::Show { id, index, catalog } => {
            let projects = read_catalog(catalog.as_deref()).await?;
            let mut lightbox = Lightbox::new(GalleryIndex::build(&projects));
            lightbox.open_request(&OpenGallery::at(id.as_str(), index));

            let Some(view) = lightbox.view() else {
                bail!("Gallery not found: {}", id);
            };

            println!("Title: {}", view.title);
            println!("Counter: {}", view.counter);
            let kind = if view.stage.is_video() { "video" } else { "image" };
            println!("Stage: {} {}", kind, view.stage.src());
            println!("Prev: {}", if view.prev_disabled { "disabled" } else { "enabled" });
            println!("Next: {}", if view.next_disabled { "disabled" } else { "enabled" });
            let thumbs: Vec<String> = view
                .thumbs
                .iter()
                .map(|t| {
                    let label = if t.shows_play_indicator() {
                        format!("{}>", t.index + 1)
                    } else {
                        (t.index + 1).to_string()
                    };
                    if t.active {
                        format!("[{}]", label)
                    } else {
                        label
                    }
                })
                .collect();
            println!("Thumbs: {}", thumbs.join(" "));
        }
    }

    Ok(())
}
