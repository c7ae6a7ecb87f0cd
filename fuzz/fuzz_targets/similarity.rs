//! Fuzz target for the character-set similarity score.
//!
//! Tests that the score stays a finite value in [0, 1] and is symmetric
//! for arbitrary (including non-ASCII) string pairs.

#![no_main]

use libfuzzer_sys::fuzz_target;

use marquee::search::{char_set_similarity, title_matches};

fuzz_target!(|input: (String, String)| {
    let (a, b) = input;

    let score = char_set_similarity(&a, &b);
    assert!(score.is_finite(), "score must be finite: {score}");
    assert!(
        (0.0..=1.0).contains(&score),
        "score out of range: {score}"
    );

    let reversed = char_set_similarity(&b, &a);
    assert_eq!(score.to_bits(), reversed.to_bits(), "score must be symmetric");

    // The full match decision must hold for any pair without panicking
    let _ = title_matches(&a, &b);
});
