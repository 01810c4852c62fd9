// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Host-supplied providers, plus a built-in classifier for ICD-10 and ICPC-2.
//!
//! The renderer never decides what a code *means*. It asks a `Classifier`
//! for a palette key (or a CSS bucket for internal links) and a
//! `ContentProvider` for the tooltip text. Closures work for both.

use crate::types::Reference;

/// Fallback chapter for codes no rule matches.
pub const FALLBACK_CHAPTER: &str = "XXII";

/// Maps a coding system + raw code to a palette key or CSS group.
pub trait Classifier {
    /// `is_display_color` is true when the caller wants a palette key for a
    /// code, false when it wants a group identifier for an internal link.
    fn classify(&self, kind: &str, code: &str, is_display_color: bool) -> String;
}

impl<F> Classifier for F
where
    F: Fn(&str, &str, bool) -> String,
{
    fn classify(&self, kind: &str, code: &str, is_display_color: bool) -> String {
        self(kind, code, is_display_color)
    }
}

/// Produces a human-readable tooltip for a group of codes.
pub trait ContentProvider {
    fn describe(&self, codes: &[Reference]) -> String;
}

impl<F> ContentProvider for F
where
    F: Fn(&[Reference]) -> String,
{
    fn describe(&self, codes: &[Reference]) -> String {
        self(codes)
    }
}

/// Tooltip of the form `ICPC N01, ICD G05.8`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDescriber;

impl ContentProvider for PlainDescriber {
    fn describe(&self, codes: &[Reference]) -> String {
        codes
            .iter()
            .map(|c| format!("{} {}", c.kind, c.code))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// ICD-10 chapter ranges: (first letter, lowest digit, highest digit, chapter).
const ICD10_CHAPTERS: &[(char, u8, u8, &str)] = &[
    ('A', 0, 9, "I"),
    ('B', 0, 9, "I"),
    ('C', 0, 9, "II"),
    ('D', 0, 4, "II"),
    ('D', 5, 9, "III"),
    ('E', 0, 9, "IV"),
    ('F', 0, 9, "V"),
    ('G', 0, 9, "VI"),
    ('H', 0, 5, "VII"),
    ('H', 6, 9, "VIII"),
    ('I', 0, 9, "IX"),
    ('J', 0, 9, "X"),
    ('K', 0, 9, "XI"),
    ('L', 0, 9, "XII"),
    ('M', 0, 9, "XIII"),
    ('N', 0, 9, "XIV"),
    ('O', 0, 9, "XV"),
    ('P', 0, 9, "XVI"),
    ('Q', 0, 9, "XVII"),
    ('R', 0, 9, "XVIII"),
    ('S', 0, 9, "XIX"),
    ('T', 0, 9, "XIX"),
    ('V', 0, 9, "XX"),
    ('Y', 0, 9, "XX"),
    ('Z', 0, 9, "XXI"),
    ('U', 0, 9, "XXII"),
];

/// ICPC-2 chapter letter → ICD-10 chapter used for coloring.
const ICPC2_CHAPTERS: &[(char, &str)] = &[
    ('B', "XX"),
    ('D', "XI"),
    ('F', "VI"),
    ('H', "VII"),
    ('K', "IX"),
    ('L', "XIII"),
    ('N', "VI"),
    ('P', "V"),
    ('R', "X"),
    ('S', "XII"),
    ('T', "VI"),
    ('U', "XIV"),
    ('W', "XV"),
    ('X', "XVI"),
    ('Y', "XVIII"),
    ('Z', "XXI"),
];

/// Classifier that colors ICD-10 codes by chapter and ICPC-2 codes by the
/// chapter of their body system letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChapterClassifier;

impl ChapterClassifier {
    fn icd10_chapter(code: &str) -> Option<&'static str> {
        let mut chars = code.chars();
        let letter = chars.next()?;
        let digit = chars.next()?.to_digit(10)? as u8;
        ICD10_CHAPTERS
            .iter()
            .find(|(l, lo, hi, _)| *l == letter && (*lo..=*hi).contains(&digit))
            .map(|(_, _, _, chapter)| *chapter)
    }

    fn icpc2_chapter(code: &str) -> Option<&'static str> {
        let letter = code.chars().next()?;
        ICPC2_CHAPTERS
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|(_, chapter)| *chapter)
    }
}

impl Classifier for ChapterClassifier {
    fn classify(&self, kind: &str, code: &str, _is_display_color: bool) -> String {
        let chapter = if kind == "ICD" {
            Self::icd10_chapter(code)
        } else {
            Self::icpc2_chapter(code)
        };
        chapter.unwrap_or(FALLBACK_CHAPTER).to_string()
    }
}
