// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus index: tokenizer, stop filter, inverted index and stored fields.
//!
//! The index is built once per corpus load and is read-only afterwards. Every
//! lookup takes `&self`, so any number of queries may share it across threads.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **DENSE_IDS**: `EntryId(n)` is the n-th accepted entry; `entries`,
//!    `tokens` and ids all line up.
//! 2. **TOKENS_MATCH_TERMS**: `t ∈ tokens[id]` iff `id ∈ terms[t]`.
//! 3. **NO_EMPTY_POSTINGS**: every term in `terms` maps to a non-empty set.
//! 4. **UNIQUE_SOURCE_IDS**: no two entries share `CodeEntry::id`.

use crate::config::DEFAULT_STOP_WORDS;
use crate::types::{CodeEntry, EntryId};
use crate::utils::normalize_term;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::ops::Bound;
use tracing::{debug, warn};
use unicode_normalization::char::is_combining_mark;

/// Word boundary detection: anything that is not a letter separates tokens.
/// Combining marks stay attached to their base letter.
fn is_word_boundary(c: char) -> bool {
    !c.is_alphabetic() && !is_combining_mark(c)
}

/// Corpus-side tokenization settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    stop_words: HashSet<String>,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self::with_stop_words(DEFAULT_STOP_WORDS)
    }
}

impl IndexOptions {
    /// Build options from a stop-word list. Words are normalized the same way
    /// as tokens, so "Sûr" and "sur" are the same stop word.
    pub fn with_stop_words<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            stop_words: words.iter().map(|w| normalize_term(w.as_ref())).collect(),
        }
    }

    /// Check if a normalized token is a stop word.
    #[inline]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

/// Turn one raw word into an index token, or drop it.
///
/// Single-character words and stop words are dropped; everything else is
/// folded with `normalize_term`.
fn index_token(word: &str, options: &IndexOptions) -> Option<String> {
    let normalized = normalize_term(word);
    if normalized.chars().count() <= 1 || options.is_stop_word(&normalized) {
        return None;
    }
    Some(normalized)
}

/// Tokenize text into normalized index tokens, in text order.
///
/// Repeated words yield repeated tokens.
pub fn tokenize(text: &str, options: &IndexOptions) -> Vec<String> {
    text.split(is_word_boundary)
        .filter_map(|word| index_token(word, options))
        .collect()
}

/// Sorted, deduplicated tokens of one entry.
fn entry_tokens(text: &str, options: &IndexOptions) -> Vec<String> {
    let mut tokens = tokenize(text, options);
    tokens.sort_unstable();
    tokens.dedup();
    tokens
}

/// Inverted index over the `text` field of a corpus of `CodeEntry` records.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    entries: Vec<CodeEntry>,
    /// Per-entry sorted token set, kept for conjunction checks.
    tokens: Vec<Vec<String>>,
    /// Normalized token → entries containing it. Ordered for prefix ranges.
    terms: BTreeMap<String, BTreeSet<EntryId>>,
    by_source_id: HashMap<String, EntryId>,
    options: IndexOptions,
}

impl CorpusIndex {
    /// Create an empty index with the default stop words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with explicit tokenization options.
    pub fn with_options(options: IndexOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Build an index over `entries` with the default stop words.
    pub fn build(entries: impl IntoIterator<Item = CodeEntry>) -> Self {
        Self::build_with(entries, IndexOptions::default())
    }

    /// Build an index over `entries` with explicit tokenization options.
    pub fn build_with(entries: impl IntoIterator<Item = CodeEntry>, options: IndexOptions) -> Self {
        let mut index = Self::with_options(options);
        index.add_all(entries);
        index
    }

    /// Add entries in order. An entry whose `id` is already present is skipped.
    ///
    /// Tokenization runs in parallel with the `parallel` feature; insertion is
    /// always sequential so ids follow input order.
    pub fn add_all(&mut self, entries: impl IntoIterator<Item = CodeEntry>) {
        let mut fresh = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for entry in entries {
            if self.by_source_id.contains_key(&entry.id) || !seen.insert(entry.id.clone()) {
                warn!(id = %entry.id, "skipping duplicate corpus entry");
                continue;
            }
            fresh.push(entry);
        }

        #[cfg(feature = "parallel")]
        let tokenized: Vec<Vec<String>> = fresh
            .par_iter()
            .map(|entry| entry_tokens(&entry.text, &self.options))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let tokenized: Vec<Vec<String>> = fresh
            .iter()
            .map(|entry| entry_tokens(&entry.text, &self.options))
            .collect();

        for (entry, tokens) in fresh.into_iter().zip(tokenized) {
            let id = EntryId(self.entries.len() as u32);
            for token in &tokens {
                self.terms.entry(token.clone()).or_default().insert(id);
            }
            if tokens.is_empty() {
                debug!(id = %entry.id, "entry has no indexable tokens");
            }
            self.by_source_id.insert(entry.id.clone(), id);
            self.entries.push(entry);
            self.tokens.push(tokens);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct indexed tokens.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// Entries whose text contains `token` exactly.
    ///
    /// `token` must already be normalized.
    pub fn lookup_exact(&self, token: &str) -> BTreeSet<EntryId> {
        self.terms.get(token).cloned().unwrap_or_default()
    }

    /// Entries whose text contains a token starting with `prefix`.
    ///
    /// An empty prefix matches nothing.
    pub fn lookup_prefix(&self, prefix: &str) -> BTreeSet<EntryId> {
        self.prefix_postings(prefix)
            .flat_map(|ids| ids.iter().copied())
            .collect()
    }

    fn prefix_postings<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a BTreeSet<EntryId>> + 'a {
        let range = if prefix.is_empty() {
            None
        } else {
            Some(
                self.terms
                    .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
                    .take_while(move |(term, _)| term.starts_with(prefix))
                    .map(|(_, ids)| ids),
            )
        };
        range.into_iter().flatten()
    }

    /// Stored entry for an id.
    pub fn entry(&self, id: EntryId) -> Option<&CodeEntry> {
        self.entries.get(id.as_usize())
    }

    /// Normalized token set of an entry (sorted, deduplicated).
    pub fn tokens(&self, id: EntryId) -> &[String] {
        self.tokens
            .get(id.as_usize())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look up an entry by its source id.
    pub fn get(&self, source_id: &str) -> Option<&CodeEntry> {
        self.by_source_id
            .get(source_id)
            .and_then(|id| self.entry(*id))
    }

    /// Look up the first entry carrying `code`, bypassing the token index.
    pub fn get_by_code(&self, code: &str) -> Option<&CodeEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (EntryId, &CodeEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (EntryId(i as u32), entry))
    }
}
