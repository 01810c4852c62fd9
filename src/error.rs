// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy.
//!
//! Only hydration, link resolution and configuration can fail. A malformed
//! reference segment, an unknown palette key, an empty query and a query
//! with no hits are all ordinary values, never errors.

/// Boxed error from a host-supplied collaborator (page source, resolver).
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to fetch corpus page {page}: {source}")]
    Fetch {
        page: usize,
        #[source]
        source: SourceError,
    },
    #[error("corpus page {page} is not the last page but carries no next cursor")]
    MissingCursor { page: usize },
    #[error("failed to resolve related code {id}: {source}")]
    Resolve {
        id: String,
        #[source]
        source: SourceError,
    },
    #[error("no suggestion at position {pick} ({found} found)")]
    NoSuggestion { pick: usize, found: usize },
    #[error("unknown code id: {0}")]
    UnknownId(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to read {path}: {source}", path = path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
