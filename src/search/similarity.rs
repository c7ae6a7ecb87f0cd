//! Character-set similarity scoring.

use std::collections::HashSet;

/// Set-intersection-over-union similarity on the distinct characters of
/// two strings.
///
/// Coarse by construction: order- and multiplicity-insensitive, so "cat"
/// and "act" score 1.0. That is the intended matching behavior, not an
/// artifact. Two empty strings have an undefined ratio (0/0) and score 0.0.
pub fn char_set_similarity(a: &str, b: &str) -> f32 {
    let set_a: HashSet<char> = a.chars().collect();
    let set_b: HashSet<char> = b.chars().collect();
    if set_a.is_empty() && set_b.is_empty() {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - intersection;
    intersection as f32 / union as f32
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(char_set_similarity("sky force", "sky force"), 1.0);
    }

    #[test]
    fn anagrams_score_one() {
        // Same character set, different order and counts.
        assert_eq!(char_set_similarity("cat", "act"), 1.0);
        assert_eq!(char_set_similarity("night", "thing"), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(char_set_similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn partial_overlap_scores_the_exact_ratio() {
        // {a,b,c} vs {b,c,d}: intersection 2, union 4.
        assert_eq!(char_set_similarity("abc", "bcd"), 0.5);
    }

    #[test]
    fn both_empty_scores_zero_not_nan() {
        let score = char_set_similarity("", "");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn one_empty_scores_zero() {
        assert_eq!(char_set_similarity("", "abc"), 0.0);
        assert_eq!(char_set_similarity("abc", ""), 0.0);
    }

    #[test]
    fn repeated_characters_collapse() {
        // "aaa" and "a" share the single-element set {a}.
        assert_eq!(char_set_similarity("aaa", "a"), 1.0);
    }

    #[test]
    fn handles_multibyte_characters() {
        let score = char_set_similarity("café", "cafe");
        assert!(score > 0.0 && score < 1.0);
    }
}
