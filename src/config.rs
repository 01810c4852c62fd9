// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration.
//!
//! Resolved once at startup (from defaults or a JSON file) and passed into the
//! index and the suggestion engine. Nothing in the library reads environment
//! variables.

use crate::error::{Error, Result};
use crate::inverted::IndexOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Maximum number of suggestions returned by one query.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 20;

/// Entries per corpus page.
pub const DEFAULT_PAGE_SIZE: usize = 10_000;

/// Words never indexed from the corpus side.
pub const DEFAULT_STOP_WORDS: &[&str] = &["du", "au", "le", "les", "un", "la", "des", "sur", "de"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub suggestion_limit: usize,
    pub page_size: usize,
    pub stop_words: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            page_size: DEFAULT_PAGE_SIZE,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()
    }

    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn validate(self) -> Result<Self> {
        if self.suggestion_limit == 0 {
            return Err(Error::Config("suggestion_limit must be at least 1".into()));
        }
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".into()));
        }
        Ok(self)
    }

    pub fn index_options(&self) -> IndexOptions {
        IndexOptions::with_stop_words(&self.stop_words)
    }
}
