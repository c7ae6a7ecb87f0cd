//! Core entity structs shared across the crate.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Kind tag on a catalog record, selecting which detail view it opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovieKind {
    /// A film entry offering download link tables.
    #[default]
    Film,
    /// A live event played through an adaptive streaming player.
    Live,
}

impl fmt::Display for MovieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieKind::Film => write!(f, "film"),
            MovieKind::Live => write!(f, "live"),
        }
    }
}

/// Quality label keying a link table entry ("480p", "Full HD").
///
/// Labels order by numeric prefix, so a table renders 480p before 1080p
/// even though plain string order would reverse them. Labels without a
/// numeric prefix sort after the numbered ones, lexically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualityLabel(String);

impl QualityLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric_prefix(&self) -> Option<u32> {
        let digits: String = self.0.chars().take_while(char::is_ascii_digit).collect();
        digits.parse().ok()
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QualityLabel {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl Ord for QualityLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric_prefix(), other.numeric_prefix()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for QualityLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Quality-to-URL link table, iterated in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkSet(BTreeMap<QualityLabel, String>);

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: QualityLabel, url: impl Into<String>) {
        self.0.insert(label, url.into());
    }

    pub fn get(&self, label: &QualityLabel) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (&QualityLabel, &str)> {
        self.0.iter().map(|(label, url)| (label, url.as_str()))
    }

    /// First available URL, used where a single source is wanted.
    pub fn first_url(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }
}

impl FromIterator<(QualityLabel, String)> for LinkSet {
    fn from_iter<I: IntoIterator<Item = (QualityLabel, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One catalog record: a card on the listing plus everything its detail
/// view needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Stable identifier used for lookups and page filenames.
    pub id: String,
    /// Display title, the only field the search filter inspects.
    pub title: String,
    #[serde(default)]
    pub poster: String,
    /// Id of the section this card renders under.
    pub section: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub kind: MovieKind,
    /// Primary link table. For live records these are the stream sources.
    #[serde(default)]
    pub movie_links: LinkSet,
    /// Secondary link table; absent on most records.
    #[serde(default)]
    pub series_links: Option<LinkSet>,
}

impl Movie {
    pub fn is_live(&self) -> bool {
        self.kind == MovieKind::Live
    }
}

/// A titled group of cards on the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
}

// ============================================================================
// Tests
// ============================================================================
