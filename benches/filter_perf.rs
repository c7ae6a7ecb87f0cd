//! Search filter and page rendering benchmarks for marquee.
//!
//! Benchmarks for:
//! - Character-set similarity scoring
//! - Per-title match decisions (fuzzy + substring)
//! - Full catalog filter passes at various catalog sizes
//! - Catalog TOML parsing
//! - Detail page rendering
//!
//! Run with:
//!   cargo bench --bench filter_perf
//!
//! Performance targets:
//! | Operation | Target | Size |
//! |-----------|--------|------|
//! | Similarity score | < 2us | Title-length strings |
//! | Filter pass | < 5ms | 5000 movies |
//! | Catalog parse | < 50ms | 5000 movies |
//! | Page render | < 500us | Typical movie |

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use marquee::search::{char_set_similarity, evaluate, title_matches};
use marquee::{Catalog, DetailView};
use std::fmt::Write as _;
use std::hint::black_box;

// =============================================================================
// Test Data Generation
// =============================================================================

const FIRST_WORDS: &[&str] = &[
    "Iron", "Night", "Deep", "Star", "Silver", "Crimson", "Golden", "Shadow", "Monsoon", "Steel",
];

const SECOND_WORDS: &[&str] = &[
    "Canyon", "Patrol", "Orbit", "Runner", "Harbor", "Heist", "Lights", "Storm", "Kingdom", "Echo",
];

/// Build a catalog TOML document with `count` movies spread over ten sections.
fn synthetic_catalog_toml(count: usize) -> String {
    let mut doc = String::with_capacity(count * 160);

    for (i, word) in FIRST_WORDS.iter().enumerate() {
        writeln!(doc, "[[sections]]").unwrap();
        writeln!(doc, "id = \"sec{i}\"").unwrap();
        writeln!(doc, "title = \"{word} Features\"").unwrap();
        writeln!(doc).unwrap();
    }

    for i in 0..count {
        let first = FIRST_WORDS[i % FIRST_WORDS.len()];
        let second = SECOND_WORDS[(i / FIRST_WORDS.len()) % SECOND_WORDS.len()];
        writeln!(doc, "[[movies]]").unwrap();
        writeln!(doc, "id = \"m{i}\"").unwrap();
        writeln!(doc, "title = \"{first} {second} {i}\"").unwrap();
        writeln!(doc, "section = \"sec{}\"", i % FIRST_WORDS.len()).unwrap();
        writeln!(doc, "[movies.movie_links]").unwrap();
        writeln!(doc, "\"480p\" = \"#\"").unwrap();
        writeln!(doc, "\"720p\" = \"#\"").unwrap();
        writeln!(doc, "\"1080p\" = \"#\"").unwrap();
        writeln!(doc).unwrap();
    }

    doc
}

fn synthetic_catalog(count: usize) -> Catalog {
    Catalog::from_toml_str(&synthetic_catalog_toml(count)).expect("synthetic catalog parses")
}

// =============================================================================
// Similarity Benchmarks
// =============================================================================

/// Benchmark the raw character-set similarity score on title-length inputs.
fn bench_similarity(c: &mut Criterion) {
    let pairs: &[(&str, &str, &str)] = &[
        ("short", "sky", "sky force"),
        ("typical", "night patrol", "midnight harbor patrol"),
        ("disjoint", "qwxz", "iron canyon"),
        (
            "long",
            "the crimson kingdom of the silver storm",
            "silver storm over the crimson kingdom",
        ),
    ];

    let mut group = c.benchmark_group("similarity");
    for &(label, a, b) in pairs {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &(a, b),
            |bench, &(a, b)| {
                bench.iter(|| black_box(char_set_similarity(black_box(a), black_box(b))))
            },
        );
    }
    group.finish();
}

/// Benchmark the full per-title decision (lowercase + fuzzy + substring).
fn bench_title_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("title_matches");

    group.bench_function("substring_hit", |b| {
        b.iter(|| black_box(title_matches(black_box("Night Patrol"), black_box("patrol"))))
    });
    group.bench_function("fuzzy_hit", |b| {
        b.iter(|| black_box(title_matches(black_box("Night Patrol"), black_box("patroln ight"))))
    });
    group.bench_function("miss", |b| {
        b.iter(|| black_box(title_matches(black_box("Night Patrol"), black_box("qwxz123"))))
    });

    group.finish();
}

// =============================================================================
// Filter Pass Benchmarks
// =============================================================================

/// Benchmark a full filter pass over catalogs of increasing size.
fn bench_evaluate_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_scaling");
    group.sample_size(50);

    for &count in &[100usize, 500, 1000, 5000] {
        let catalog = synthetic_catalog(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{count}_movies")),
            &catalog,
            |b, catalog| b.iter(|| black_box(evaluate(catalog, black_box("canyon")))),
        );
    }

    group.finish();
}

/// Benchmark the empty-query pass, which restores everything without scoring.
fn bench_evaluate_empty_query(c: &mut Criterion) {
    let catalog = synthetic_catalog(1000);

    c.bench_function("evaluate_empty_query", |b| {
        b.iter(|| black_box(evaluate(&catalog, black_box(""))))
    });
}

// =============================================================================
// Catalog Parse Benchmarks
// =============================================================================

/// Benchmark TOML parsing + validation + index construction.
fn bench_catalog_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_parse");
    group.sample_size(20);

    for &count in &[100usize, 1000, 5000] {
        let toml = synthetic_catalog_toml(count);

        group.throughput(Throughput::Bytes(toml.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{count}_movies")),
            &toml,
            |b, toml| {
                b.iter(|| {
                    let catalog = Catalog::from_toml_str(toml).expect("parse");
                    black_box(catalog)
                })
            },
        );
    }

    group.finish();
}

// =============================================================================
// Page Render Benchmarks
// =============================================================================

/// Benchmark full detail page rendering for both page variants.
fn bench_render_pages(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let film = DetailView::build(&catalog, "SkyForce").expect("builtin film record");
    let live = DetailView::build(&catalog, "RCBvsKKR").expect("builtin live record");

    let mut group = c.benchmark_group("render_page");
    group.throughput(Throughput::Bytes(film.render().len() as u64));
    group.bench_function("film", |b| b.iter(|| black_box(film.render())));
    group.throughput(Throughput::Bytes(live.render().len() as u64));
    group.bench_function("live", |b| b.iter(|| black_box(live.render())));
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(similarity_benches, bench_similarity, bench_title_matches);

criterion_group!(
    filter_benches,
    bench_evaluate_scaling,
    bench_evaluate_empty_query
);

criterion_group!(parse_benches, bench_catalog_parse);

criterion_group!(render_benches, bench_render_pages);

criterion_main!(
    similarity_benches,
    filter_benches,
    parse_benches,
    render_benches
);
