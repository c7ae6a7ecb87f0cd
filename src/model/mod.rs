//! Catalog data model.

pub mod types;
