//! Progressive narrowing: the working term list loses its leftmost term each round.

use super::common::{position_of, sample_index, texts};
use codelink::SuggestionEngine;

#[test]
fn test_leading_unmatched_term_is_dropped() {
    let index = sample_index();
    let results = SuggestionEngine::new(&index).suggest(&["xyz123", "migraine", "ophtalmique"]);

    assert_eq!(
        texts(&results)[..2],
        ["Migraine ophtalmique", "Migraine ophtalmique associée"]
    );
    for s in &results {
        assert!(
            !s.matched_terms.contains(&"xyz123".to_string()),
            "{:?} kept a dropped term",
            s
        );
    }
}

#[test]
fn test_matched_terms_track_the_round() {
    let index = sample_index();
    let results = SuggestionEngine::new(&index).suggest(&["Migraine", "Ophtalmique"]);

    // Both come from round 0; round 1 (["Ophtalmique"]) only finds duplicates.
    for s in &results {
        assert_eq!(s.matched_terms, vec!["Migraine", "Ophtalmique"]);
    }
}

#[test]
fn test_later_round_hits_come_after_earlier_ones() {
    let index = sample_index();
    let results = SuggestionEngine::new(&index).suggest(&["grosse", "fatigue"]);

    // Round 0: only "Grosse fatigue" has both words.
    assert_eq!(results[0].text, "Grosse fatigue");
    assert_eq!(results[0].matched_terms, vec!["grosse", "fatigue"]);

    // Round 1: ["fatigue"] brings the rest, exact before prefix.
    let generale = position_of(&results, "Fatigue générale");
    let chronique = position_of(&results, "Fatiguee chronique");
    assert!(generale < chronique);
    assert_eq!(results[generale].matched_terms, vec!["fatigue"]);
}

#[test]
fn test_query_terms_are_the_raw_input() {
    let index = sample_index();
    let input = ["Grosse", "FATIGUE"];
    let results = SuggestionEngine::new(&index).suggest(&input);

    assert!(!results.is_empty());
    for s in &results {
        assert_eq!(s.query_terms, vec!["Grosse", "FATIGUE"]);
    }
}

#[test]
fn test_trailing_unmatched_term_blocks_every_round() {
    // The unmatched term is never the leftmost one, so no round can satisfy
    // the conjunction.
    let index = sample_index();
    let results = SuggestionEngine::new(&index).suggest(&["migraine", "ophtalmique", "xyz123"]);
    assert!(results.is_empty());
}
