//! Shared fixtures for integration tests.

use marquee::catalog::Catalog;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Catalog with one film and one live record, the smallest listing that
/// exercises both detail variants and section visibility.
pub const TWO_TITLE_CATALOG: &str = r#"
[[sections]]
id = "hindi"
title = "Hindi Movies"

[[sections]]
id = "live"
title = "Live Cricket"

[[movies]]
id = "SkyForce"
title = "Sky Force"
section = "hindi"
description = "A thrilling Hindi movie with an amazing storyline."

[movies.movie_links]
"480p" = "#"
"720p" = "#"
"1080p" = "#"

[[movies]]
id = "RCBvsKKR"
title = "RCB vs KKR"
section = "live"
kind = "live"
description = "Watch the thrilling IPL match between RCB and KKR live."

[movies.movie_links]
"240p" = "https://example.com/streams/240.m3u8"
"360p" = "https://example.com/streams/360.m3u8"
"Full HD" = "https://example.com/streams/1080.m3u8"
"#;

#[allow(dead_code)]
pub fn two_title_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_toml_str(TWO_TITLE_CATALOG).expect("fixture catalog parses"))
}

/// Write a catalog file into `dir` and return its path.
#[allow(dead_code)]
pub fn write_catalog_file(dir: &TempDir, toml: &str) -> PathBuf {
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, toml).expect("write fixture catalog");
    path
}
