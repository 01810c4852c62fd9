// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Packing a list of references into one flat `href` attribute.
//!
//! The wire format is deliberately dumb so it survives any rich-text editor
//! that round-trips link attributes as plain strings:
//!
//! ```text
//! c-ICPC://N01,c-ICD://G05.8,i-he://1234
//! │ │     │    └── next segment
//! │ │     └── code (everything after the first "://")
//! │ └── type (everything between the first "-" and "://")
//! └── category char: c = code, i = internal link, x = external link
//! ```
//!
//! This format is persisted in documents, so it must stay bit-exact.
//!
//! Decoding is best-effort: a segment without `://` or without a
//! category/type separator is dropped and the rest of the list still decodes.
//! A broken reference in the middle of a note must never hide the good ones.
//!
//! **Round-trip law**: `decode(&encode(refs)) == refs` whenever no `type` or
//! `code` contains `,` or `://`.

use crate::types::{Category, Reference};
use tracing::debug;

/// Separator between encoded references.
pub const SEGMENT_SEPARATOR: char = ',';

/// Separator between `<category>-<type>` and the code.
pub const CODE_SEPARATOR: &str = "://";

/// Separator between the category char and the type.
pub const CATEGORY_SEPARATOR: char = '-';

/// Encode one reference as `<c>-<type>://<code>`.
pub fn encode_reference(reference: &Reference) -> String {
    format!(
        "{}{}{}{}{}",
        reference.category.as_char(),
        CATEGORY_SEPARATOR,
        reference.kind,
        CODE_SEPARATOR,
        reference.code
    )
}

/// Encode a list of references as a comma-joined `href`.
///
/// An empty list encodes to an empty string.
pub fn encode(refs: &[Reference]) -> String {
    refs.iter()
        .map(encode_reference)
        .collect::<Vec<_>>()
        .join(&SEGMENT_SEPARATOR.to_string())
}

/// Parse a single segment, returning `None` when it is malformed.
///
/// The type is everything after the **first** `-`; a type that itself
/// contains `-` keeps it (`c-ICD-10://A00` has type `ICD-10`).
pub fn decode_segment(segment: &str) -> Option<Reference> {
    let (protocol, code) = segment.split_once(CODE_SEPARATOR)?;
    let (prefix, kind) = protocol.split_once(CATEGORY_SEPARATOR)?;
    let category = Category::from_prefix(prefix)?;

    Some(Reference {
        category,
        kind: kind.to_string(),
        code: code.to_string(),
    })
}

/// Decode an `href` into its references, silently skipping malformed segments.
///
/// Order of the surviving references is preserved. An empty string decodes to
/// an empty list.
pub fn decode(raw: &str) -> Vec<Reference> {
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split(SEGMENT_SEPARATOR)
        .filter_map(|segment| {
            let decoded = decode_segment(segment);
            if decoded.is_none() {
                debug!(segment, "dropping malformed reference segment");
            }
            decoded
        })
        .collect()
}

/// Decoded references grouped by what the renderer does with them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedReferences {
    /// `code` references, in `href` order. Each one gets a color slot.
    pub codes: Vec<Reference>,
    /// Internal links, in `href` order.
    pub internal_links: Vec<Reference>,
    /// True when at least one external link is present.
    pub has_external_link: bool,
}

impl ClassifiedReferences {
    /// Number of `code` references; drives the `code-count-{N}` class.
    pub fn code_count(&self) -> usize {
        self.codes.len()
    }
}

/// Partition decoded references by category.
pub fn classify_references(refs: &[Reference]) -> ClassifiedReferences {
    let mut classified = ClassifiedReferences::default();
    for reference in refs {
        match reference.category {
            Category::Code => classified.codes.push(reference.clone()),
            Category::InternalLink => classified.internal_links.push(reference.clone()),
            Category::ExternalLink => classified.has_external_link = true,
        }
    }
    classified
}
