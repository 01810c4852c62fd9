// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a picked suggestion into a span ready for insertion.
//!
//! A thesaurus term usually maps to one or more classification codes (its
//! `related_ids`). The span gets all of them, followed by the term itself:
//! `href` packs every code, `title` joins their labels.

use crate::codec::encode;
use crate::error::{Error, Result, SourceError};
use crate::inverted::CorpusIndex;
use crate::types::{AnnotatedSpan, CodeEntry, Reference, Suggestion};
use tracing::warn;

/// Separator between labels in the span title.
pub const TITLE_SEPARATOR: &str = "; ";

/// Resolves a code id to its full entry.
pub trait CodeResolver {
    fn resolve(&self, id: &str) -> std::result::Result<CodeEntry, SourceError>;
}

impl CodeResolver for CorpusIndex {
    fn resolve(&self, id: &str) -> std::result::Result<CodeEntry, SourceError> {
        self.get(id)
            .cloned()
            .ok_or_else(|| Error::UnknownId(id.to_string()).into())
    }
}

/// Coding system of a suggestion, taken from its id (`"ICPC|N01"` → `"ICPC"`).
pub fn suggestion_kind(suggestion: &Suggestion) -> &str {
    suggestion
        .id
        .split_once('|')
        .map_or(suggestion.id.as_str(), |(kind, _)| kind)
}

/// Resolve a suggestion's related codes and encode the resulting span.
///
/// Related codes come first, in `related_ids` order; the suggestion itself is
/// appended last. Any resolution failure aborts the whole span.
pub fn resolve_links<R>(suggestion: &Suggestion, resolver: &R) -> Result<AnnotatedSpan>
where
    R: CodeResolver + ?Sized,
{
    let mut refs = Vec::with_capacity(suggestion.related_ids.len() + 1);
    let mut labels = Vec::with_capacity(suggestion.related_ids.len() + 1);

    for id in &suggestion.related_ids {
        let entry = resolver.resolve(id).map_err(|source| {
            warn!(id = %id, error = %source, "failed to resolve related code");
            Error::Resolve {
                id: id.clone(),
                source,
            }
        })?;
        refs.push(Reference::code(entry.kind, entry.code));
        labels.push(entry.text);
    }

    refs.push(Reference::code(suggestion_kind(suggestion), suggestion.code.clone()));
    labels.push(suggestion.text.clone());

    Ok(AnnotatedSpan {
        href: encode(&refs),
        title: labels.join(TITLE_SEPARATOR),
    })
}
