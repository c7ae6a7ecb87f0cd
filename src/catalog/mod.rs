//! Catalog loading and lookup.
//!
//! The catalog is immutable once loaded: sections and movies are read from
//! TOML (an explicit path, the user config dir, or the embedded default),
//! validated, indexed by id, and then only ever shared behind an [`Arc`].

use crate::model::types::{Movie, MovieKind, Section};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// TOML shipped inside the binary, standing in for the page's static tables.
const DEFAULT_CATALOG_TOML: &str = include_str!("default.toml");

static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| {
    let catalog =
        Catalog::from_toml_str(DEFAULT_CATALOG_TOML).expect("embedded default catalog is valid");
    Arc::new(catalog)
});

/// Errors from reading or validating catalog files.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid catalog: {0}")]
    Validation(String),
}

#[derive(Debug, serde::Deserialize)]
struct RawCatalog {
    #[serde(default)]
    sections: Vec<Section>,
    #[serde(default)]
    movies: Vec<Movie>,
}

/// The validated, immutable movie catalog.
#[derive(Debug)]
pub struct Catalog {
    sections: Vec<Section>,
    movies: Vec<Movie>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Parse and validate catalog TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(text)?;
        Self::validate(raw)
    }

    /// Read, parse, and validate a catalog file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        debug!(
            component = "catalog",
            operation = "load",
            path = %path.display(),
            "Reading catalog file"
        );
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    fn validate(raw: RawCatalog) -> Result<Self, CatalogError> {
        if raw.movies.is_empty() {
            return Err(CatalogError::Validation(
                "catalog contains no movies".to_string(),
            ));
        }

        let mut section_ids = HashSet::new();
        for section in &raw.sections {
            if section.id.is_empty() {
                return Err(CatalogError::Validation(
                    "section with empty id".to_string(),
                ));
            }
            if !section_ids.insert(section.id.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }

        let mut by_id = HashMap::with_capacity(raw.movies.len());
        for (idx, movie) in raw.movies.iter().enumerate() {
            if movie.id.is_empty() {
                return Err(CatalogError::Validation("movie with empty id".to_string()));
            }
            if movie.title.is_empty() {
                return Err(CatalogError::Validation(format!(
                    "movie '{}' has an empty title",
                    movie.id
                )));
            }
            if !section_ids.contains(movie.section.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "movie '{}' references unknown section '{}'",
                    movie.id, movie.section
                )));
            }
            if movie.kind == MovieKind::Live && movie.movie_links.is_empty() {
                return Err(CatalogError::Validation(format!(
                    "live movie '{}' has no stream sources",
                    movie.id
                )));
            }
            if by_id.insert(movie.id.clone(), idx).is_some() {
                return Err(CatalogError::Validation(format!(
                    "duplicate movie id '{}'",
                    movie.id
                )));
            }
        }

        info!(
            component = "catalog",
            operation = "load",
            sections = raw.sections.len(),
            movies = raw.movies.len(),
            "Catalog validated"
        );
        Ok(Self {
            sections: raw.sections,
            movies: raw.movies,
            by_id,
        })
    }

    /// Look up a record by id.
    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.by_id.get(id).map(|&idx| &self.movies[idx])
    }

    /// All records, in catalog order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// All sections, in catalog order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Records belonging to one section, in catalog order.
    pub fn movies_in<'a>(&'a self, section_id: &'a str) -> impl Iterator<Item = &'a Movie> {
        self.movies.iter().filter(move |m| m.section == section_id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

/// Resolve the catalog for an invocation: explicit path first, then
/// `catalog.toml` under the user config dir, then the embedded default.
pub fn resolve(explicit: Option<&Path>) -> Result<Arc<Catalog>, CatalogError> {
    if let Some(path) = explicit {
        return Ok(Arc::new(Catalog::from_path(path)?));
    }
    if let Some(dirs) = directories::ProjectDirs::from("", "", "marquee") {
        let candidate = dirs.config_dir().join("catalog.toml");
        if candidate.exists() {
            return Ok(Arc::new(Catalog::from_path(&candidate)?));
        }
    }
    Ok(Catalog::builtin())
}

// ============================================================================
// Tests
// ============================================================================
