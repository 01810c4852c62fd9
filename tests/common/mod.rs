//! Shared test utilities and fixtures.

#![allow(dead_code)]

use codelink::{CodeEntry, CorpusIndex, Suggestion};

// Re-export canonical test utilities from codelink::testing
pub use codelink::testing::{make_entry, make_linked_entry, sample_corpus};

// ============================================================================
// INDEX BUILDERS
// ============================================================================

/// Build an index over the sample thesaurus.
pub fn sample_index() -> CorpusIndex {
    CorpusIndex::build(sample_corpus())
}

/// Build an index where entry `i` has text `texts[i]`, id `ICPC|T{i}`, code `T{i}`.
pub fn index_of(texts: &[&str]) -> CorpusIndex {
    CorpusIndex::build(entries_of(texts))
}

pub fn entries_of(texts: &[&str]) -> Vec<CodeEntry> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| make_entry(&format!("ICPC|T{i}"), &format!("T{i}"), text))
        .collect()
}

// ============================================================================
// RESULT HELPERS
// ============================================================================

pub fn texts(results: &[Suggestion]) -> Vec<&str> {
    results.iter().map(|s| s.text.as_str()).collect()
}

/// Position of a text in the results, panicking with context if absent.
pub fn position_of(results: &[Suggestion], text: &str) -> usize {
    results
        .iter()
        .position(|s| s.text == text)
        .unwrap_or_else(|| panic!("{text:?} not in results: {:?}", texts(results)))
}
