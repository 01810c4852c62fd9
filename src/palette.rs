// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Display colors for coded references.
//!
//! Every code gets a `(background, foreground)` pair picked by its
//! classification group (an ICD-10 chapter numeral, `I`..`XXII`). The table is
//! fixed and `color_for` is total: an unknown key is reused as the background
//! value with a white foreground, so a host that classifies into its own keys
//! (e.g. raw CSS colors) still renders something distinct.
//!
//! A span can carry several codes. Each code at 1-based position `idx` gets
//! the variables `--bg-code-color-{idx}` and `--text-code-color-{idx}`; the
//! stylesheet picks flat/gradient/stripes from the `code-count-{N}` class.

use serde::Serialize;

/// Foreground used for unknown palette keys.
pub const FALLBACK_FOREGROUND: &str = "white";

/// Number of stripe slots the stylesheet defines rules for.
pub const STRIPE_SLOTS: usize = 3;

/// Classification group → `(background, foreground)`.
pub const PALETTE: &[(&str, (&str, &str))] = &[
    ("I", ("#F44336", "white")),
    ("II", ("#E91E63", "white")),
    ("III", ("#9C27B0", "white")),
    ("IV", ("#673AB7", "white")),
    ("V", ("#009688", "white")),
    ("VI", ("#4CAF50", "white")),
    ("VII", ("#8BC34A", "white")),
    ("VIII", ("#03A9F4", "white")),
    ("IX", ("#00BCD4", "white")),
    ("X", ("#FFC107", "black")),
    ("XI", ("#FF9800", "black")),
    ("XII", ("#FF5722", "white")),
    ("XIII", ("#795548", "white")),
    ("XIV", ("#3949AB", "white")),
    ("XV", ("#C0CA33", "black")),
    ("XVI", ("#07F87F", "black")),
    ("XVII", ("#FF6262", "white")),
    ("XVIII", ("#718792", "white")),
    ("XIX", ("#00ECB9", "black")),
    ("XX", ("#FF20A3", "black")),
    ("XXI", ("#FFCE38", "black")),
    ("XXII", ("#721F01", "white")),
];

/// A resolved display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeColor {
    pub background: String,
    pub foreground: String,
}

/// Look up a palette key. Never fails.
pub fn color_for(key: &str) -> CodeColor {
    match PALETTE.iter().find(|(k, _)| *k == key) {
        Some((_, (bg, fg))) => CodeColor {
            background: (*bg).to_string(),
            foreground: (*fg).to_string(),
        },
        None => CodeColor {
            background: key.to_string(),
            foreground: FALLBACK_FOREGROUND.to_string(),
        },
    }
}

/// Rendering family the stylesheet applies for a given code count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleScheme {
    /// No codes: plain span.
    None,
    /// One code: flat color.
    Flat,
    /// Two codes: linear gradient.
    Gradient,
    /// Three codes: diagonal stripes.
    Stripes,
    /// More than three: the stripe pattern repeats over `stripe_slot`.
    CycledStripes,
}

impl StyleScheme {
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => StyleScheme::None,
            1 => StyleScheme::Flat,
            2 => StyleScheme::Gradient,
            3 => StyleScheme::Stripes,
            _ => StyleScheme::CycledStripes,
        }
    }
}

/// Map a 1-based code position onto the 3-slot stripe scheme.
///
/// Positions past the third wrap around: 4 → 1, 5 → 2, 6 → 3, 7 → 1.
pub fn stripe_slot(idx: usize) -> usize {
    debug_assert!(idx > 0, "code positions are 1-based");
    (idx.saturating_sub(1) % STRIPE_SLOTS) + 1
}

/// CSS custom properties for the code at 1-based position `idx`.
pub fn style_variables(idx: usize, color: &CodeColor) -> String {
    format!(
        "--bg-code-color-{idx}: {}; --text-code-color-{idx}: {};",
        color.background, color.foreground
    )
}

/// Class attached to a span carrying `count` codes, if any.
pub fn code_count_class(count: usize) -> Option<String> {
    (count > 0).then(|| format!("code-count-{count}"))
}
