//! Invariants of the suggestion engine over random corpora and queries.

use super::common::entries_of;
use codelink::{normalize_term, tokenize, CorpusIndex, IndexOptions, SuggestionEngine};
use proptest::prelude::*;
use std::collections::HashSet;

/// Small vocabulary so random queries actually hit, with accents and a stop word.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "douleur", "douleurs", "dos", "toux", "sèche", "céphalée", "cephal", "fièvre", "fievre",
        "de", "la", "aigue", "aiguë", "chronique", "chron", "x",
    ])
    .prop_map(str::to_string)
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..5).prop_map(|words| words.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(text_strategy(), 0..40)
}

fn query_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..4)
}

fn build(corpus: &[String]) -> CorpusIndex {
    let texts: Vec<&str> = corpus.iter().map(String::as_str).collect();
    CorpusIndex::build(entries_of(&texts))
}

proptest! {
    /// Property: never more results than the limit.
    #[test]
    fn prop_results_capped(corpus in corpus_strategy(), query in query_strategy(), limit in 1usize..25) {
        let index = build(&corpus);
        let results = SuggestionEngine::with_limit(&index, limit).suggest(&query);
        prop_assert!(results.len() <= limit);
    }

    /// Property: no two results share a text.
    #[test]
    fn prop_texts_unique(corpus in corpus_strategy(), query in query_strategy()) {
        let index = build(&corpus);
        let results = SuggestionEngine::new(&index).suggest(&query);
        let unique: HashSet<_> = results.iter().map(|s| &s.text).collect();
        prop_assert_eq!(unique.len(), results.len());
    }

    /// Property: matched terms are a suffix of the query, and every result
    /// has a token starting with each of them.
    #[test]
    fn prop_results_match_their_terms(corpus in corpus_strategy(), query in query_strategy()) {
        let index = build(&corpus);
        let options = IndexOptions::default();
        for s in SuggestionEngine::new(&index).suggest(&query) {
            prop_assert_eq!(&s.query_terms, &query);
            prop_assert!(query.ends_with(&s.matched_terms));
            prop_assert!(!s.matched_terms.is_empty());

            let tokens = tokenize(&s.text, &options);
            for term in &s.matched_terms {
                let term = normalize_term(term);
                prop_assert!(
                    tokens.iter().any(|t| t.starts_with(&term)),
                    "{:?} does not match {:?}", s.text, term
                );
            }
        }
    }

    /// Property: results from an earlier round come before later rounds.
    #[test]
    fn prop_rounds_in_order(corpus in corpus_strategy(), query in query_strategy()) {
        let index = build(&corpus);
        let results = SuggestionEngine::new(&index).suggest(&query);
        let lengths: Vec<usize> = results.iter().map(|s| s.matched_terms.len()).collect();
        prop_assert!(lengths.windows(2).all(|w| w[0] >= w[1]), "{:?}", lengths);
    }

    /// Property: a larger limit only extends the result list.
    #[test]
    fn prop_limit_is_a_prefix(corpus in corpus_strategy(), query in query_strategy(), limit in 1usize..20) {
        let index = build(&corpus);
        let small = SuggestionEngine::with_limit(&index, limit).suggest(&query);
        let large = SuggestionEngine::with_limit(&index, limit + 10).suggest(&query);
        prop_assert_eq!(&large[..small.len()], &small[..]);
    }
}
