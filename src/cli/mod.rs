// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the codelink command-line interface.
//!
//! Four subcommands: `suggest` to query a corpus file, `link` to turn a
//! suggestion into an encoded span, `decode` to inspect an `href` the way the
//! editor renders it, and `color` to look up a palette key. Everything prints
//! JSON on stdout; logs go to stderr.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "codelink",
    about = "Coded-reference annotations and suggestion search",
    version
)]
pub struct Cli {
    /// JSON configuration file (suggestion_limit, page_size, stop_words)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest codes for query terms
    Suggest {
        /// Corpus file: JSON array of code entries
        #[arg(long)]
        corpus: PathBuf,

        /// Override the configured maximum number of suggestions
        #[arg(short, long)]
        limit: Option<usize>,

        /// Query terms, in typing order
        terms: Vec<String>,
    },

    /// Resolve a suggestion into an encoded span (href + title)
    Link {
        /// Corpus file: JSON array of code entries
        #[arg(long)]
        corpus: PathBuf,

        /// Position of the suggestion to link
        #[arg(long, default_value = "0")]
        pick: usize,

        /// Query terms, in typing order
        terms: Vec<String>,
    },

    /// Decode an href and show how the span renders
    Decode {
        /// Encoded references, e.g. "c-ICPC://N01,c-ICD://G05.8"
        href: String,

        /// Span title
        #[arg(long, default_value = "")]
        title: String,
    },

    /// Look up the display color of a palette key
    Color {
        /// Palette key, e.g. "XIV"
        key: String,
    },
}
