// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Attributes of one rendered annotation span.
//!
//! The DOM layer lives elsewhere; this module computes everything it needs
//! from the persisted `AnnotatedSpan`: the class list, the inline style with
//! per-code color variables, and the `data-*` attributes.

use crate::classify::{Classifier, ContentProvider};
use crate::codec::{classify_references, decode};
use crate::palette::{code_count_class, color_for, style_variables, StyleScheme};
use crate::types::AnnotatedSpan;
use serde::Serialize;
use std::collections::BTreeMap;

/// Class added when the span carries at least one external link.
pub const EXTERNAL_LINK_CLASS: &str = "ext-link";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedSpan {
    pub classes: Vec<String>,
    pub style: String,
    pub data: BTreeMap<String, String>,
}

impl RenderedSpan {
    /// Space-separated `class` attribute value.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Rendering family for the number of codes on this span.
    pub fn scheme(&self) -> StyleScheme {
        StyleScheme::for_count(self.code_count())
    }

    fn code_count(&self) -> usize {
        self.classes
            .iter()
            .find_map(|c| c.strip_prefix("code-count-"))
            .and_then(|n| n.parse().ok())
            .unwrap_or(0)
    }
}

/// Compute the attributes of a span from its persisted form.
pub fn render_span<C, P>(span: &AnnotatedSpan, classifier: &C, content: &P) -> RenderedSpan
where
    C: Classifier + ?Sized,
    P: ContentProvider + ?Sized,
{
    let mut rendered = RenderedSpan::default();
    rendered.data.insert("data-href".to_string(), span.href.clone());
    rendered.data.insert("data-title".to_string(), span.title.clone());

    if span.href.is_empty() {
        return rendered;
    }

    let refs = classify_references(&decode(&span.href));

    if refs.has_external_link {
        rendered.classes.push(EXTERNAL_LINK_CLASS.to_string());
    }
    if let Some(class) = code_count_class(refs.code_count()) {
        rendered.classes.push(class);
    }

    if !refs.codes.is_empty() {
        rendered
            .data
            .insert("data-content".to_string(), content.describe(&refs.codes));
    }
    for (idx, link) in refs.internal_links.iter().enumerate() {
        rendered.data.insert(
            format!("data-link-color-{idx}"),
            classifier.classify(&link.kind, &link.code, false),
        );
    }

    rendered.style = refs
        .codes
        .iter()
        .enumerate()
        .map(|(idx, code)| {
            let color = color_for(&classifier.classify(&code.kind, &code.code, true));
            style_variables(idx + 1, &color)
        })
        .collect();

    rendered
}
