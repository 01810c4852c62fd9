// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use codelink::hydrate::{load_all_with, VecPages};
#[cfg(feature = "parallel")]
use codelink::hydrate::{Page, PageSource};
use codelink::{
    color_for, decode, render_span, resolve_links, AnnotatedSpan, ChapterClassifier, CodeEntry,
    Config, CorpusIndex, Error, PlainDescriber, Reference, RenderedSpan, SuggestionEngine,
};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

mod cli;
use cli::{Cli, Commands};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "CODELINK_LOG";

#[derive(Serialize)]
struct DecodedSpan {
    references: Vec<Reference>,
    rendered: RenderedSpan,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("codelink=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> codelink::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Suggest {
            corpus,
            limit,
            terms,
        } => {
            let index = load_corpus(&corpus, &config)?;
            let limit = limit.unwrap_or(config.suggestion_limit);
            let results = SuggestionEngine::with_limit(&index, limit).suggest(&terms);
            print_json(&results)
        }
        Commands::Link {
            corpus,
            pick,
            terms,
        } => {
            let index = load_corpus(&corpus, &config)?;
            let results = SuggestionEngine::from_config(&index, &config).suggest(&terms);
            let picked = results.get(pick).ok_or(Error::NoSuggestion {
                pick,
                found: results.len(),
            })?;
            print_json(&resolve_links(picked, &index)?)
        }
        Commands::Decode { href, title } => {
            let span = AnnotatedSpan { href, title };
            let decoded = DecodedSpan {
                references: decode(&span.href),
                rendered: render_span(&span, &ChapterClassifier, &PlainDescriber),
            };
            print_json(&decoded)
        }
        Commands::Color { key } => print_json(&color_for(&key)),
    }
}

fn print_json<T: Serialize>(value: &T) -> codelink::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Read a corpus file and page it through the hydration driver.
fn load_corpus(path: &Path, config: &Config) -> codelink::Result<CorpusIndex> {
    let json = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries: Vec<CodeEntry> = serde_json::from_str(&json)?;
    let pages = VecPages::new(entries, config.page_size);

    #[cfg(feature = "parallel")]
    {
        let mut source = ProgressPages::new(pages);
        load_all_with(&mut source, config.index_options())
    }
    #[cfg(not(feature = "parallel"))]
    {
        let mut pages = pages;
        load_all_with(&mut pages, config.index_options())
    }
}

/// Ticks a progress bar on stderr for every fetched page.
#[cfg(feature = "parallel")]
struct ProgressPages {
    inner: VecPages,
    bar: ProgressBar,
}

#[cfg(feature = "parallel")]
impl ProgressPages {
    fn new(inner: VecPages) -> Self {
        let bar = ProgressBar::new(inner.page_count() as u64);
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
        ) {
            bar.set_style(style.progress_chars("━━╸"));
        }
        bar.set_prefix("Loading");
        bar.set_message("corpus pages...");
        Self { inner, bar }
    }
}

#[cfg(feature = "parallel")]
impl PageSource for ProgressPages {
    type Cursor = <VecPages as PageSource>::Cursor;
    type Error = <VecPages as PageSource>::Error;

    fn fetch_page(
        &mut self,
        cursor: Option<&Self::Cursor>,
    ) -> std::result::Result<Page<Self::Cursor>, Self::Error> {
        let page = self.inner.fetch_page(cursor)?;
        self.bar.inc(1);
        if page.done {
            self.bar.finish_and_clear();
        }
        Ok(page)
    }
}
