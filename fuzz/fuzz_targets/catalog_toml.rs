//! Fuzz target for catalog TOML parsing and validation.
//!
//! Tests that arbitrary input never panics the parser, and that every
//! catalog accepted by validation keeps its id index consistent.

#![no_main]

use libfuzzer_sys::fuzz_target;

use marquee::Catalog;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing may fail, but must never panic
    let Ok(catalog) = Catalog::from_toml_str(text) else {
        return;
    };

    // Accepted catalogs index every record under its own id
    assert_eq!(catalog.len(), catalog.movies().len());
    for movie in catalog.movies() {
        let found = catalog.movie(&movie.id);
        assert!(found.is_some(), "record {:?} missing from index", movie.id);
    }
});
