//! Inputs that must produce empty results, never errors or panics.

use super::common::{index_of, sample_index, texts};
use codelink::{CorpusIndex, IndexOptions, SuggestionEngine};

#[test]
fn test_empty_terms() {
    let index = sample_index();
    let terms: [&str; 0] = [];
    assert!(SuggestionEngine::new(&index).suggest(&terms).is_empty());
}

#[test]
fn test_empty_index() {
    let index = CorpusIndex::new();
    assert!(SuggestionEngine::new(&index).suggest(&["toux"]).is_empty());
}

#[test]
fn test_stop_words_and_single_letters_only() {
    let index = sample_index();
    assert!(SuggestionEngine::new(&index).suggest(&["de", "la", "l"]).is_empty());
}

#[test]
fn test_stop_word_only_entry_never_suggested() {
    let index = index_of(&["de la", "sur le"]);
    let engine = SuggestionEngine::new(&index);
    for term in ["de", "la", "sur", "le", "d", "s"] {
        assert!(engine.suggest(&[term]).is_empty(), "{term} matched");
    }
    // Still reachable by direct code lookup.
    assert_eq!(index.get_by_code("T0").map(|e| e.text.as_str()), Some("de la"));
}

#[test]
fn test_accented_uppercase_query() {
    let index = sample_index();
    let results = SuggestionEngine::new(&index).suggest(&["CÉPHALÉE"]);
    assert!(texts(&results).contains(&"Céphalée"));
}

#[test]
fn test_decomposed_corpus_text_matches_composed_query() {
    // "céphalée" written with combining acute accents.
    let index = index_of(&["ce\u{301}phale\u{301}e"]);
    let results = SuggestionEngine::new(&index).suggest(&["céphalée"]);
    assert_eq!(results.len(), 1);
}

#[test]
fn test_duplicate_query_terms() {
    let index = sample_index();
    let once = SuggestionEngine::new(&index).suggest(&["migraine"]);
    let twice = SuggestionEngine::new(&index).suggest(&["migraine", "migraine"]);
    assert_eq!(texts(&once), texts(&twice));
}

#[test]
fn test_term_with_digits_never_matches() {
    let index = sample_index();
    assert!(SuggestionEngine::new(&index).suggest(&["G43"]).is_empty());
}

#[test]
fn test_custom_stop_words() {
    let options = IndexOptions::with_stop_words(&["toux"]);
    let index = CorpusIndex::build_with(super::common::entries_of(&["toux sèche"]), options);
    let engine = SuggestionEngine::new(&index);
    assert!(engine.suggest(&["toux"]).is_empty());
    assert_eq!(engine.suggest(&["seche"]).len(), 1);
}
