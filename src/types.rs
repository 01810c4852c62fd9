// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The nouns of the crate: coded terms, references, annotated spans, suggestions.
//!
//! Two families live here. `CodeEntry` and `Suggestion` belong to the search
//! side: entries go into the corpus index once, suggestions come out of every
//! query. `Reference`, `Category` and `AnnotatedSpan` belong to the annotation
//! side: a span of text carries a flat `href` string that packs one or more
//! references, and the codec in `codec.rs` turns that string back into
//! `Reference` values.
//!
//! # Invariants
//!
//! - **AnnotatedSpan**: `href` is `segment(,segment)*`, each segment shaped
//!   `<c>-<type>://<code>` with `<c>` in `{c, i, x}`. No segment contains `,`.
//! - **EntryId**: dense, assigned in corpus insertion order, `< entries.len()`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense identifier of an entry inside a `CorpusIndex`.
///
/// Assigned in insertion order, so comparing two ids compares load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct EntryId(pub u32);

impl EntryId {
    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for EntryId {
    fn from(id: u32) -> Self {
        EntryId(id)
    }
}

/// One indexable coded term, as delivered by the corpus loader.
///
/// `id` is the source system's identifier (e.g. `"BE-THESAURUS|10000035|1"`);
/// `related_ids` point at other entries (typically the ICD/ICPC codes a
/// thesaurus term maps to).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeEntry {
    pub id: String,
    pub code: String,
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub related_ids: Vec<String>,
}

/// Top-level kind of a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Code,
    InternalLink,
    ExternalLink,
}

impl Category {
    /// The single character used in the `href` encoding.
    pub fn as_char(self) -> char {
        match self {
            Category::Code => 'c',
            Category::InternalLink => 'i',
            Category::ExternalLink => 'x',
        }
    }

    /// Parse the category prefix of an encoded segment.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "c" => Some(Category::Code),
            "i" => Some(Category::InternalLink),
            "x" => Some(Category::ExternalLink),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A decoded unit of an annotation attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: String,
    pub code: String,
}

impl Reference {
    pub fn new(category: Category, kind: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            category,
            kind: kind.into(),
            code: code.into(),
        }
    }

    /// Shorthand for a `code` reference, the common case.
    pub fn code(kind: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(Category::Code, kind, code)
    }
}

/// The persisted form of an annotation: packed references plus a tooltip title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSpan {
    pub href: String,
    pub title: String,
}

/// A ranked search candidate.
///
/// `text` is the uniqueness key within one query. `query_terms` is the raw
/// input as the caller typed it; `matched_terms` is the (possibly narrowed)
/// raw subset that was active when this suggestion was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub code: String,
    pub text: String,
    pub related_ids: Vec<String>,
    pub matched_terms: Vec<String>,
    pub query_terms: Vec<String>,
}
