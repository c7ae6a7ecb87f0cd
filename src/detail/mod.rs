//! Detail views: catalog lookup plus page construction.
//!
//! A record opens one of two views depending on its kind: a live-stream
//! player page or a film page with link tables and a tutorial. The view is
//! built first as data ([`DetailView`]) and only then rendered, so the two
//! variants stay explicit instead of living inside string templates.

pub mod filename;
pub mod scripts;
pub mod styles;
pub mod template;

use crate::catalog::Catalog;
use crate::model::types::{LinkSet, Movie, MovieKind};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors surfaced to the user as blocking alerts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetailError {
    /// Lookup failed: the id is not in the catalog.
    #[error("Movie details not available!")]
    UnknownMovie { id: String },
    /// The record exists but carries no table for the requested category.
    #[error("Links not available for this category.")]
    MissingLinks { id: String, category: LinkCategory },
}

/// Which link table of a record is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkCategory {
    Movie,
    Series,
}

impl LinkCategory {
    /// Heading shown above the table.
    pub fn heading(&self) -> &'static str {
        match self {
            LinkCategory::Movie => "Movie Links",
            LinkCategory::Series => "Series Links",
        }
    }
}

impl fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkCategory::Movie => write!(f, "movie"),
            LinkCategory::Series => write!(f, "series"),
        }
    }
}

/// A fully-resolved detail view, ready to render.
#[derive(Debug, Clone)]
pub enum DetailView {
    /// Playback page with a quality selector.
    LiveStream(LiveStreamView),
    /// Film page with download link tables and a tutorial.
    Film(FilmView),
}

#[derive(Debug, Clone)]
pub struct LiveStreamView {
    pub id: String,
    pub title: String,
    pub description: String,
    /// One selectable source per quality label.
    pub sources: LinkSet,
}

#[derive(Debug, Clone)]
pub struct FilmView {
    pub id: String,
    pub title: String,
    pub poster: String,
    pub description: String,
    pub movie_links: LinkSet,
    pub series_links: Option<LinkSet>,
}

impl DetailView {
    /// Look up `id` and build the view variant its kind selects.
    pub fn build(catalog: &Catalog, id: &str) -> Result<Self, DetailError> {
        let Some(movie) = catalog.movie(id) else {
            warn!(
                component = "detail",
                operation = "build",
                id,
                "Unknown movie id"
            );
            return Err(DetailError::UnknownMovie { id: id.to_string() });
        };
        Ok(Self::from_movie(movie))
    }

    /// Build the view for an already-resolved record.
    pub fn from_movie(movie: &Movie) -> Self {
        match movie.kind {
            MovieKind::Live => DetailView::LiveStream(LiveStreamView {
                id: movie.id.clone(),
                title: movie.title.clone(),
                description: movie.description.clone(),
                sources: movie.movie_links.clone(),
            }),
            MovieKind::Film => DetailView::Film(FilmView {
                id: movie.id.clone(),
                title: movie.title.clone(),
                poster: movie.poster.clone(),
                description: movie.description.clone(),
                movie_links: movie.movie_links.clone(),
                series_links: movie.series_links.clone(),
            }),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            DetailView::LiveStream(view) => &view.id,
            DetailView::Film(view) => &view.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            DetailView::LiveStream(view) => &view.title,
            DetailView::Film(view) => &view.title,
        }
    }

    /// The requested link table.
    ///
    /// A category is missing when the record carries no table for it, or
    /// only an empty one. Live views expose their stream sources as the
    /// primary category and have no secondary.
    pub fn links(&self, category: LinkCategory) -> Result<&LinkSet, DetailError> {
        let (id, table) = match self {
            DetailView::LiveStream(view) => (
                view.id.as_str(),
                match category {
                    LinkCategory::Movie => Some(&view.sources),
                    LinkCategory::Series => None,
                },
            ),
            DetailView::Film(view) => (
                view.id.as_str(),
                match category {
                    LinkCategory::Movie => Some(&view.movie_links),
                    LinkCategory::Series => view.series_links.as_ref(),
                },
            ),
        };
        table
            .filter(|links| !links.is_empty())
            .ok_or_else(|| DetailError::MissingLinks {
                id: id.to_string(),
                category,
            })
    }

    /// Render the complete self-contained HTML document.
    pub fn render(&self) -> String {
        template::render_page(self)
    }
}

/// Render `view` and write it under `out_dir`; returns the page path.
pub fn write_page(view: &DetailView, out_dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join(filename::page_filename(view.id()));
    std::fs::write(&path, view.render())?;
    debug!(
        component = "detail",
        operation = "write_page",
        path = %path.display(),
        "Wrote detail page"
    );
    Ok(path)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::QualityLabel;

    fn catalog() -> Catalog {
        Catalog::from_toml_str(
            r##"
            [[sections]]
            id = "live"
            title = "Live Cricket"

            [[sections]]
            id = "hindi"
            title = "Hindi Movies"

            [[movies]]
            id = "RCBvsKKR"
            title = "RCB vs KKR"
            section = "live"
            kind = "live"

            [movies.movie_links]
            "240p" = "https://example.com/240.m3u8"
            "Full HD" = "https://example.com/hd.m3u8"

            [[movies]]
            id = "SkyForce"
            title = "Sky Force"
            section = "hindi"

            [movies.movie_links]
            "480p" = "#"
            "##,
        )
        .unwrap()
    }

    #[test]
    fn unknown_id_yields_the_alert() {
        let err = DetailView::build(&catalog(), "unknownMovie").unwrap_err();
        assert_eq!(
            err,
            DetailError::UnknownMovie {
                id: "unknownMovie".to_string()
            }
        );
        assert_eq!(err.to_string(), "Movie details not available!");
    }

    #[test]
    fn live_record_builds_the_stream_variant() {
        let view = DetailView::build(&catalog(), "RCBvsKKR").unwrap();
        match &view {
            DetailView::LiveStream(live) => assert_eq!(live.sources.len(), 2),
            DetailView::Film(_) => panic!("expected the live variant"),
        }
        assert_eq!(view.title(), "RCB vs KKR");
    }

    #[test]
    fn film_record_builds_the_film_variant() {
        let view = DetailView::build(&catalog(), "SkyForce").unwrap();
        assert!(matches!(view, DetailView::Film(_)));
    }

    #[test]
    fn missing_series_links_yield_the_alert() {
        let view = DetailView::build(&catalog(), "SkyForce").unwrap();
        let err = view.links(LinkCategory::Series).unwrap_err();
        assert_eq!(err.to_string(), "Links not available for this category.");
        assert!(matches!(
            err,
            DetailError::MissingLinks {
                category: LinkCategory::Series,
                ..
            }
        ));
    }

    #[test]
    fn present_category_returns_the_table() {
        let view = DetailView::build(&catalog(), "SkyForce").unwrap();
        let links = view.links(LinkCategory::Movie).unwrap();
        assert_eq!(links.get(&QualityLabel::from("480p")), Some("#"));
    }

    #[test]
    fn live_view_has_no_secondary_category() {
        let view = DetailView::build(&catalog(), "RCBvsKKR").unwrap();
        assert!(view.links(LinkCategory::Movie).is_ok());
        assert!(view.links(LinkCategory::Series).is_err());
    }

    #[test]
    fn empty_table_counts_as_missing() {
        let movie = Movie {
            id: "bare".to_string(),
            title: "Bare".to_string(),
            poster: String::new(),
            section: "hindi".to_string(),
            description: String::new(),
            kind: MovieKind::Film,
            movie_links: LinkSet::new(),
            series_links: Some(LinkSet::new()),
        };
        let view = DetailView::from_movie(&movie);
        assert!(view.links(LinkCategory::Movie).is_err());
        assert!(view.links(LinkCategory::Series).is_err());
    }
}
