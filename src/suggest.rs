// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suggestions: exact → prefix, with progressive narrowing.
//!
//! A user typing "migraine ophtalmique gauche" should still get migraine
//! suggestions even if no entry mentions "gauche". So the engine works on a
//! shrinking suffix of the query:
//!
//! ```text
//! round 0: [migraine, ophtalmique, gauche]   exact pass, then prefix pass
//! round 1: [ophtalmique, gauche]             exact pass, then prefix pass
//! round 2: [gauche]                          exact pass, then prefix pass
//! ```
//!
//! Each pass is a conjunction: every working term must match one of the
//! entry's own tokens (equal for exact, `starts_with` for prefix). Results
//! go into one accumulator that fills front to back and is never reordered,
//! so earlier rounds outrank later ones and exact outranks prefix within a
//! round. The loop stops when the working list is empty or the accumulator
//! is full.
//!
//! **Invariant**: no two suggestions of one query share a `text`, and there
//! are never more than `limit` of them.

use crate::config::{Config, DEFAULT_SUGGESTION_LIMIT};
use crate::inverted::CorpusIndex;
use crate::types::{EntryId, Suggestion};
use crate::utils::normalize_term;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Ordered, text-keyed result accumulator.
///
/// First occurrence of a `text` wins; later ones are dropped. Capacity is a
/// hard cap.
#[derive(Debug)]
struct SuggestionSet {
    items: Vec<Suggestion>,
    texts: HashSet<String>,
    limit: usize,
}

impl SuggestionSet {
    fn new(limit: usize) -> Self {
        Self {
            items: Vec::with_capacity(limit.min(DEFAULT_SUGGESTION_LIMIT)),
            texts: HashSet::new(),
            limit,
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    fn contains_text(&self, text: &str) -> bool {
        self.texts.contains(text)
    }

    /// Push unless full or the text is already present. Returns true if kept.
    fn push(&mut self, suggestion: Suggestion) -> bool {
        if self.is_full() || self.contains_text(&suggestion.text) {
            return false;
        }
        self.texts.insert(suggestion.text.clone());
        self.items.push(suggestion);
        true
    }

    fn into_vec(self) -> Vec<Suggestion> {
        self.items
    }
}

/// Which test a pass applies to each working term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Exact,
    Prefix,
}

/// Query engine over a built `CorpusIndex`. Never mutates the index.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionEngine<'a> {
    index: &'a CorpusIndex,
    limit: usize,
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(index: &'a CorpusIndex) -> Self {
        Self::with_limit(index, DEFAULT_SUGGESTION_LIMIT)
    }

    pub fn with_limit(index: &'a CorpusIndex, limit: usize) -> Self {
        Self { index, limit }
    }

    pub fn from_config(index: &'a CorpusIndex, config: &Config) -> Self {
        Self::with_limit(index, config.suggestion_limit)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Ranked, deduplicated suggestions for raw query terms.
    ///
    /// Terms are normalized but never filtered: a stop word or a one-letter
    /// term simply matches nothing in the index. Empty input yields an empty
    /// result.
    pub fn suggest<S: AsRef<str>>(&self, terms: &[S]) -> Vec<Suggestion> {
        let query_terms: Vec<String> = terms.iter().map(|t| t.as_ref().to_string()).collect();
        let normalized: Vec<String> = query_terms.iter().map(|t| normalize_term(t)).collect();

        let mut results = SuggestionSet::new(self.limit);
        let mut start = 0;

        while start < normalized.len() && !results.is_full() {
            let working = &normalized[start..];
            let matched = &query_terms[start..];

            let exact = self.run_pass(Pass::Exact, working, matched, &query_terms, &mut results);
            let prefix = if results.is_full() {
                0
            } else {
                self.run_pass(Pass::Prefix, working, matched, &query_terms, &mut results)
            };

            debug!(
                round = start,
                working = ?working,
                exact,
                prefix,
                total = results.len(),
                "suggestion round"
            );
            start += 1;
        }

        results.into_vec()
    }

    /// Run one pass over the working terms, appending new suggestions.
    /// Returns how many were kept.
    fn run_pass(
        &self,
        pass: Pass,
        working: &[String],
        matched: &[String],
        query_terms: &[String],
        results: &mut SuggestionSet,
    ) -> usize {
        let mut kept = 0;
        for id in self.candidates(pass, working) {
            if results.is_full() {
                break;
            }
            let Some(entry) = self.index.entry(id) else {
                continue;
            };
            if results.contains_text(&entry.text) {
                continue;
            }
            let suggestion = Suggestion {
                id: entry.id.clone(),
                code: entry.code.clone(),
                text: entry.text.clone(),
                related_ids: entry.related_ids.clone(),
                matched_terms: matched.to_vec(),
                query_terms: query_terms.to_vec(),
            };
            if results.push(suggestion) {
                kept += 1;
            }
        }
        kept
    }

    /// Entries matching every working term under `pass`, in id order.
    fn candidates(&self, pass: Pass, working: &[String]) -> BTreeSet<EntryId> {
        let Some((first, rest)) = working.split_first() else {
            return BTreeSet::new();
        };

        let mut ids = match pass {
            Pass::Exact => self.index.lookup_exact(first),
            Pass::Prefix => self.index.lookup_prefix(first),
        };
        ids.retain(|id| {
            let tokens = self.index.tokens(*id);
            rest.iter().all(|term| match pass {
                Pass::Exact => tokens.binary_search(term).is_ok(),
                Pass::Prefix => {
                    !term.is_empty() && tokens.iter().any(|token| token.starts_with(term.as_str()))
                }
            })
        });
        ids
    }
}

/// Convenience wrapper: suggestions with the default limit.
pub fn suggest<S: AsRef<str>>(index: &CorpusIndex, terms: &[S]) -> Vec<Suggestion> {
    SuggestionEngine::new(index).suggest(terms)
}
