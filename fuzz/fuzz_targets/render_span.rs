// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for span rendering with the chapter classifier.
//!
//! Arbitrary hrefs and titles must render without panicking, and the
//! code-count class must agree with the number of style variables.

#![no_main]

use codelink::{render_span, AnnotatedSpan, ChapterClassifier, PlainDescriber};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, String)| {
    let (href, title) = input;
    let span = AnnotatedSpan { href, title };
    let rendered = render_span(&span, &ChapterClassifier, &PlainDescriber);

    assert_eq!(rendered.data.get("data-href"), Some(&span.href));

    let codes = rendered.style.matches("--bg-code-color-").count();
    let class = format!("code-count-{codes}");
    assert_eq!(codes > 0, rendered.classes.contains(&class));
});
