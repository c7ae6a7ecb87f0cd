//! Visibility state over the catalog, plus terminal rendering.

use crate::catalog::Catalog;
use crate::model::types::Movie;
use crate::search::filter::{self, FilterOutcome};
use colored::Colorize;
use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// The mutable face of the listing: which cards and sections are showing,
/// plus the no-results banner. Only the owner of the event loop writes it;
/// the catalog behind it never changes.
#[derive(Debug)]
pub struct Listing {
    catalog: Arc<Catalog>,
    movie_visible: HashMap<String, bool>,
    section_visible: HashMap<String, bool>,
    banner: Option<String>,
    query: String,
}

impl Listing {
    /// Fresh listing with everything visible, the initial page state.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let movie_visible = catalog
            .movies()
            .iter()
            .map(|m| (m.id.clone(), true))
            .collect();
        let section_visible = catalog
            .sections()
            .iter()
            .map(|s| (s.id.clone(), true))
            .collect();
        Self {
            catalog,
            movie_visible,
            section_visible,
            banner: None,
            query: String::new(),
        }
    }

    /// Evaluate a query and apply the resulting snapshot.
    pub fn apply_query(&mut self, query: &str) {
        let outcome = filter::evaluate(&self.catalog, query);
        self.apply_outcome(&outcome);
    }

    /// Apply a precomputed snapshot: every visibility flag is rewritten and
    /// the banner replaced, never accumulated.
    pub fn apply_outcome(&mut self, outcome: &FilterOutcome) {
        let visible: HashSet<&str> = outcome
            .visible_movies
            .iter()
            .map(String::as_str)
            .collect();
        for (id, flag) in self.movie_visible.iter_mut() {
            *flag = visible.contains(id.as_str());
        }
        let visible_sections: HashSet<&str> = outcome
            .visible_sections
            .iter()
            .map(String::as_str)
            .collect();
        for (id, flag) in self.section_visible.iter_mut() {
            *flag = visible_sections.contains(id.as_str());
        }
        self.banner = outcome.no_results.clone();
        self.query = outcome.query.clone();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_movie_visible(&self, id: &str) -> bool {
        self.movie_visible.get(id).copied().unwrap_or(false)
    }

    pub fn is_section_visible(&self, id: &str) -> bool {
        self.section_visible.get(id).copied().unwrap_or(false)
    }

    /// Banner text, set iff the last query matched nothing.
    pub fn no_results_message(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Visible cards in display order: sections as listed, members within
    /// each section as listed. Row indices here match the rows
    /// [`Self::render_with_selection`] counts.
    pub fn visible_movies(&self) -> Vec<&Movie> {
        self.catalog
            .sections()
            .iter()
            .filter(|s| self.is_section_visible(&s.id))
            .flat_map(|s| {
                self.catalog
                    .movies_in(&s.id)
                    .filter(|m| self.is_movie_visible(&m.id))
            })
            .collect()
    }

    /// Render the visible sections and cards.
    pub fn render(&self) -> String {
        self.render_with_selection(None)
    }

    /// Render with one visible card highlighted; the index counts visible
    /// cards top to bottom across sections.
    pub fn render_with_selection(&self, selected: Option<usize>) -> String {
        let mut out = String::new();
        let mut row = 0usize;
        for section in self.catalog.sections() {
            if !self.is_section_visible(&section.id) {
                continue;
            }
            let cards: Vec<&Movie> = self
                .catalog
                .movies_in(&section.id)
                .filter(|m| self.is_movie_visible(&m.id))
                .collect();
            if cards.is_empty() {
                continue;
            }
            out.push_str(&format!("{}\n", section.title.to_uppercase().cyan().bold()));
            for movie in cards {
                let qualities = movie
                    .movie_links
                    .iter()
                    .map(|(label, _)| label.as_str())
                    .join(", ");
                let marker = if selected == Some(row) { "▸" } else { " " };
                let title = if selected == Some(row) {
                    movie.title.green().bold().to_string()
                } else {
                    movie.title.bold().to_string()
                };
                out.push_str(&format!(
                    "{marker} {title} {} {}\n",
                    format!("({})", movie.id).dimmed(),
                    format!("[{qualities}]").dimmed(),
                ));
                row += 1;
            }
            out.push('\n');
        }
        out
    }
}

// ============================================================================
// Tests
// ============================================================================
