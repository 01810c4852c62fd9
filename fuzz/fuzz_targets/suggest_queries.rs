// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for suggestion queries.
//!
//! Arbitrary terms (emoji, combining marks, empty strings, stop words) go
//! straight into the engine. It must not panic, must respect the cap and
//! must never return the same text twice.

#![no_main]

use arbitrary::Arbitrary;
use codelink::testing::sample_corpus;
use codelink::{CorpusIndex, SuggestionEngine};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct Query {
    terms: Vec<String>,
    limit: u8,
}

fuzz_target!(|query: Query| {
    static INDEX: OnceLock<CorpusIndex> = OnceLock::new();
    let index = INDEX.get_or_init(|| CorpusIndex::build(sample_corpus()));

    let terms: Vec<&str> = query.terms.iter().take(8).map(String::as_str).collect();
    let limit = usize::from(query.limit);
    let results = SuggestionEngine::with_limit(index, limit).suggest(&terms);

    // INVARIANT 1: capped
    assert!(results.len() <= limit);

    // INVARIANT 2: unique texts
    let unique: HashSet<_> = results.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(unique.len(), results.len());

    // INVARIANT 3: matched terms are a suffix of the raw query
    for s in &results {
        assert!(s.query_terms.ends_with(&s.matched_terms));
    }
});
