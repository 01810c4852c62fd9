//! Ordering guarantees: exact before prefix, corpus order within a pass.

use super::common::{index_of, position_of, sample_index, texts};
use codelink::SuggestionEngine;

#[test]
fn test_exact_token_beats_prefix_token() {
    // B comes first in the corpus but only prefix-matches.
    let index = index_of(&["fatiguee persistante", "fatigue matinale"]);
    let results = SuggestionEngine::new(&index).suggest(&["fatigue"]);

    assert!(position_of(&results, "fatigue matinale") < position_of(&results, "fatiguee persistante"));
}

#[test]
fn test_corpus_order_within_a_pass() {
    let index = index_of(&["toux grasse", "toux sèche", "toux nocturne"]);
    let results = SuggestionEngine::new(&index).suggest(&["toux"]);
    assert_eq!(texts(&results), vec!["toux grasse", "toux sèche", "toux nocturne"]);
}

#[test]
fn test_results_are_deterministic() {
    let index = sample_index();
    let engine = SuggestionEngine::new(&index);
    let first = engine.suggest(&["fat"]);
    for _ in 0..10 {
        assert_eq!(engine.suggest(&["fat"]), first);
    }
}

#[test]
fn test_prefix_only_matches_word_starts() {
    let index = index_of(&["antifatigue", "fatigue"]);
    let results = SuggestionEngine::new(&index).suggest(&["fatig"]);
    assert_eq!(texts(&results), vec!["fatigue"]);
}
