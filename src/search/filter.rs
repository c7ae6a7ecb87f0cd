//! Query evaluation over the catalog.
//!
//! Evaluation is pure: it reads the immutable catalog and produces a
//! [`FilterOutcome`] snapshot. Whatever owns visibility state (the terminal
//! listing, the JSON printer) applies the snapshot afterwards.

use crate::catalog::Catalog;
use crate::search::similarity::char_set_similarity;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Similarity score at or above which a title counts as a fuzzy match.
pub const FUZZY_THRESHOLD: f32 = 0.6;

/// Whether a single title matches the query.
///
/// Case-insensitive substring containment is the fast path; otherwise the
/// character-set similarity must reach [`FUZZY_THRESHOLD`]. Either suffices.
pub fn title_matches(title: &str, query: &str) -> bool {
    let title = title.to_lowercase();
    let query = query.to_lowercase();
    char_set_similarity(&title, &query) >= FUZZY_THRESHOLD || title.contains(&query)
}

/// Format the banner shown when a query matches nothing.
pub fn no_results_message(query: &str) -> String {
    format!("No matches found for \"{query}\". Try different keywords.")
}

/// Visibility snapshot produced by evaluating one query.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOutcome {
    /// The query as applied, untrimmed.
    pub query: String,
    /// Ids of movies that matched, in catalog order.
    pub visible_movies: Vec<String>,
    /// Ids of sections with at least one matching movie, in catalog order.
    pub visible_sections: Vec<String>,
    /// No-results banner, set iff nothing matched and the trimmed query is
    /// non-empty.
    pub no_results: Option<String>,
}

impl FilterOutcome {
    pub fn is_movie_visible(&self, id: &str) -> bool {
        self.visible_movies.iter().any(|m| m == id)
    }

    pub fn is_section_visible(&self, id: &str) -> bool {
        self.visible_sections.iter().any(|s| s == id)
    }

    pub fn matched_any(&self) -> bool {
        !self.visible_movies.is_empty()
    }
}

/// Evaluate `query` against every movie title in the catalog.
///
/// The empty query matches everything, restoring the full listing. A
/// section stays visible as long as any of its movies does.
pub fn evaluate(catalog: &Catalog, query: &str) -> FilterOutcome {
    let mut visible_movies = Vec::new();
    let mut matched_sections: HashSet<&str> = HashSet::new();
    for movie in catalog.movies() {
        if title_matches(&movie.title, query) {
            visible_movies.push(movie.id.clone());
            matched_sections.insert(movie.section.as_str());
        }
    }
    let visible_sections = catalog
        .sections()
        .iter()
        .filter(|s| matched_sections.contains(s.id.as_str()))
        .map(|s| s.id.clone())
        .collect();

    let no_results = if visible_movies.is_empty() && !query.trim().is_empty() {
        Some(no_results_message(query))
    } else {
        None
    };

    debug!(
        component = "filter",
        operation = "evaluate",
        query = %query,
        visible = visible_movies.len(),
        "Query evaluated"
    );
    FilterOutcome {
        query: query.to_string(),
        visible_movies,
        visible_sections,
        no_results,
    }
}

// ============================================================================
// Tests
// ============================================================================
