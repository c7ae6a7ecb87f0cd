//! Terminal front end: listing state and the interactive browse loop.

pub mod browse;
pub mod listing;
