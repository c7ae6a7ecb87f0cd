//! marquee: fuzzy search and detail pages over a static movie catalog.
//!
//! The library half exposes the immutable catalog, the character-set
//! search filter, the debouncer, and detail-page construction. The binary
//! wires them to a CLI: `search`, `open`, `links`, `export`, and an
//! interactive `browse` mode.

pub mod catalog;
pub mod debounce;
pub mod detail;
pub mod model;
pub mod search;
pub mod ui;

pub use catalog::{Catalog, CatalogError};
pub use debounce::Debouncer;
pub use detail::{DetailError, DetailView, LinkCategory};
pub use search::filter::FilterOutcome;
pub use ui::listing::Listing;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Command-line interface for the `marquee` binary.
#[derive(Debug, Parser)]
#[command(
    name = "marquee",
    version,
    about = "Fuzzy search and detail pages for a movie catalog"
)]
pub struct Cli {
    /// Catalog file (TOML). Falls back to catalog.toml in the user config
    /// dir, then to the embedded default.
    #[arg(long, global = true, env = "MARQUEE_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Filter the listing once and print what stays visible.
    Search {
        /// Query text; an empty query restores the full listing.
        query: String,
        /// Print the visibility snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Render one movie's detail page and write it to disk.
    Open {
        /// Movie id from the catalog.
        id: String,
        /// Output directory for generated pages.
        #[arg(long, default_value = "pages")]
        out: PathBuf,
    },
    /// Print one of a movie's link tables.
    Links {
        /// Movie id from the catalog.
        id: String,
        /// Which table to print.
        #[arg(long, value_enum, default_value_t = CategoryArg::Movie)]
        category: CategoryArg,
    },
    /// Render a detail page for every catalog record.
    Export {
        /// Output directory for generated pages.
        #[arg(long, default_value = "pages")]
        out: PathBuf,
    },
    /// Browse the catalog interactively (needs a TTY).
    Browse {
        /// Output directory for pages opened from the browser.
        #[arg(long, default_value = "pages")]
        out: PathBuf,
    },
}

/// CLI-side mirror of [`LinkCategory`], keeping clap out of the library types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Movie,
    Series,
}

impl From<CategoryArg> for LinkCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Movie => LinkCategory::Movie,
            CategoryArg::Series => LinkCategory::Series,
        }
    }
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// `warn` level; diagnostics go to stderr so stdout stays scriptable.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Execute a parsed CLI invocation.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let catalog = catalog::resolve(cli.catalog.as_deref()).context("failed to load catalog")?;
    match cli.command {
        Commands::Search { query, json } => run_search(catalog, &query, json),
        Commands::Open { id, out } => run_open(&catalog, &id, &out),
        Commands::Links { id, category } => run_links(&catalog, &id, category.into()),
        Commands::Export { out } => run_export(&catalog, &out),
        Commands::Browse { out } => ui::browse::run(catalog, ui::browse::BrowseOptions { out_dir: out }),
    }
}

fn run_search(catalog: Arc<Catalog>, query: &str, json: bool) -> anyhow::Result<()> {
    let outcome = search::filter::evaluate(&catalog, query);
    let suggestions = if outcome.matched_any() {
        Vec::new()
    } else {
        search::suggest::closest_titles(&catalog, query)
    };

    if json {
        let snapshot = serde_json::json!({
            "outcome": outcome,
            "suggestions": suggestions,
        });
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let mut listing = Listing::new(Arc::clone(&catalog));
    listing.apply_outcome(&outcome);
    print!("{}", listing.render());
    if let Some(banner) = listing.no_results_message() {
        println!("{}", banner.red());
        for suggestion in &suggestions {
            println!("  did you mean {}?", suggestion.yellow());
        }
    } else {
        println!(
            "{} of {} movies match",
            outcome.visible_movies.len(),
            catalog.len()
        );
    }
    Ok(())
}

fn run_open(catalog: &Catalog, id: &str, out: &Path) -> anyhow::Result<()> {
    let view = DetailView::build(catalog, id)?;
    let path = detail::write_page(&view, out).context("failed to write detail page")?;
    println!("{}", path.display());
    Ok(())
}

fn run_links(catalog: &Catalog, id: &str, category: LinkCategory) -> anyhow::Result<()> {
    let view = DetailView::build(catalog, id)?;
    let links = view.links(category)?;
    println!("{}", category.heading().bold());
    for (quality, url) in links.iter() {
        println!("  {:>8}  {url}", quality.as_str());
    }
    Ok(())
}

fn run_export(catalog: &Catalog, out: &Path) -> anyhow::Result<()> {
    let started = std::time::Instant::now();
    let mut written = 0usize;
    for movie in catalog.movies() {
        let view = DetailView::from_movie(movie);
        let path = detail::write_page(&view, out)
            .with_context(|| format!("failed to write page for '{}'", movie.id))?;
        println!("{}", path.display());
        written += 1;
    }
    info!(
        component = "export",
        operation = "complete",
        written,
        duration_ms = started.elapsed().as_millis() as u64,
        "Export finished"
    );
    println!("{written} pages written to {}", out.display());
    Ok(())
}
