//! Closest-title suggestions for queries that match nothing.

use crate::catalog::Catalog;
use itertools::Itertools;
use std::cmp::Ordering;

/// How many alternate titles to offer under the no-results banner.
const MAX_SUGGESTIONS: usize = 3;

/// Floor below which a title is too far from the query to suggest.
const MIN_SCORE: f64 = 0.5;

/// Titles closest to `query` by Jaro-Winkler distance, best first.
pub fn closest_titles(catalog: &Catalog, query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    catalog
        .movies()
        .iter()
        .map(|movie| {
            let score = strsim::jaro_winkler(&query, &movie.title.to_lowercase());
            (movie.title.clone(), score)
        })
        .filter(|(_, score)| *score >= MIN_SCORE)
        .sorted_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
        .take(MAX_SUGGESTIONS)
        .map(|(title, _)| title)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_toml_str(
            r#"
            [[sections]]
            id = "s"
            title = "S"

            [[movies]]
            id = "a"
            title = "Sky Force"
            section = "s"

            [[movies]]
            id = "b"
            title = "Night Patrol"
            section = "s"

            [[movies]]
            id = "c"
            title = "Deep Orbit"
            section = "s"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn near_miss_suggests_the_intended_title() {
        let suggestions = closest_titles(&catalog(), "sky forse");
        assert_eq!(suggestions.first().map(String::as_str), Some("Sky Force"));
    }

    #[test]
    fn gibberish_yields_no_suggestions() {
        assert!(closest_titles(&catalog(), "qqqq####").is_empty());
    }

    #[test]
    fn caps_the_number_of_suggestions() {
        let suggestions = closest_titles(&catalog(), "o");
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
    }
}
