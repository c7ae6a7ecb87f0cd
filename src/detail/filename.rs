//! Output filenames for exported pages.

/// Longest slug kept before the extension.
const MAX_STEM: usize = 64;

/// Sanitize a record id into a safe page filename.
///
/// Non-alphanumeric runs collapse to single dashes, the result is
/// lowercased and truncated, and an id with nothing usable falls back to
/// "movie".
pub fn page_filename(id: &str) -> String {
    let mut slug = String::with_capacity(id.len());
    let mut last_dash = false;
    for c in id.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash && !slug.is_empty() {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.truncate(MAX_STEM);
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("movie");
    }
    format!("{slug}.html")
}
