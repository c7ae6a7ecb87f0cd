//! Fuzz target for detail page rendering.
//!
//! Tests that both page variants render complete documents for records
//! with arbitrary (and adversarial) text in every field.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use marquee::model::types::{LinkSet, Movie, MovieKind, QualityLabel};
use marquee::DetailView;

/// Fuzzer input covering every user-controlled record field.
#[derive(Arbitrary, Debug)]
struct RecordInput {
    id: String,
    title: String,
    poster: String,
    description: String,
    live: bool,
    movie_links: Vec<(String, String)>,
    series_links: Option<Vec<(String, String)>>,
}

fn link_set(entries: Vec<(String, String)>) -> LinkSet {
    entries
        .into_iter()
        .map(|(label, url)| (QualityLabel::new(label), url))
        .collect()
}

fuzz_target!(|input: RecordInput| {
    let movie = Movie {
        id: input.id,
        title: input.title,
        poster: input.poster,
        section: "fuzz".to_string(),
        description: input.description,
        kind: if input.live {
            MovieKind::Live
        } else {
            MovieKind::Film
        },
        movie_links: link_set(input.movie_links),
        series_links: input.series_links.map(link_set),
    };

    // Rendering must never panic and always produces a full document
    let view = DetailView::from_movie(&movie);
    let page = view.render();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.ends_with("</html>\n") || page.ends_with("</html>"));
});
