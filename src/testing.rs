// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::CodeEntry;

/// Create a thesaurus entry with no related codes.
///
/// The entry type is the part of `id` before the first `|`, matching how
/// source ids are laid out (`"ICPC|N01"`).
pub fn make_entry(id: &str, code: &str, text: &str) -> CodeEntry {
    CodeEntry {
        id: id.to_string(),
        code: code.to_string(),
        text: text.to_string(),
        kind: id.split('|').next().unwrap_or_default().to_string(),
        related_ids: vec![],
    }
}

/// Create an entry pointing at related codes.
pub fn make_linked_entry(id: &str, code: &str, text: &str, related: &[&str]) -> CodeEntry {
    CodeEntry {
        related_ids: related.iter().map(|r| (*r).to_string()).collect(),
        ..make_entry(id, code, text)
    }
}

/// A small French clinical thesaurus, close to what the editor loads.
pub fn sample_corpus() -> Vec<CodeEntry> {
    vec![
        make_entry("ICPC|N01", "N01", "Céphalée"),
        make_entry("ICPC|N02", "N02", "Céphalée de tension"),
        make_entry("ICD|G43.1", "G43.1", "Migraine ophtalmique"),
        make_entry("ICD|G43.9", "G43.9", "Migraine"),
        make_entry("ICPC|K56", "K56", "Grosse fatigue"),
        make_entry("ICPC|A04", "A04", "Fatigue générale"),
        make_entry("ICPC|A05", "A05", "Fatiguee chronique"),
        make_linked_entry(
            "BE-THESAURUS|10000035",
            "10000035",
            "Migraine ophtalmique associée",
            &["ICPC|N02", "ICD|G43.1"],
        ),
        make_entry("ICPC|A99", "A99", "de la"),
    ]
}
