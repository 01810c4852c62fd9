// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus hydration: drain a paged source, then build the index.
//!
//! The network client that talks to the terminology server lives with the
//! host. It only has to implement `PageSource`: given the previous page's
//! cursor (or `None` for the first page), return the next page.
//!
//! Pages are fetched strictly one after another. A fetch starts only once the
//! previous one has returned its cursor, so pages are applied in cursor order
//! and exactly once. The index is built after the last page, which means a
//! failing fetch leaves no half-built index behind: the caller gets the error
//! and nothing to query.

use crate::error::{Error, Result};
use crate::inverted::{CorpusIndex, IndexOptions};
use crate::types::CodeEntry;
use std::convert::Infallible;
use std::marker::PhantomData;
use tracing::{debug, info};

/// One page of corpus entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<C> {
    pub entries: Vec<CodeEntry>,
    /// Cursor to pass to the next fetch. Required unless `done`.
    pub next_cursor: Option<C>,
    /// True on the last page.
    pub done: bool,
}

/// A cursor-driven source of corpus pages.
pub trait PageSource {
    type Cursor;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the page after `cursor`, or the first page when `cursor` is `None`.
    fn fetch_page(
        &mut self,
        cursor: Option<&Self::Cursor>,
    ) -> std::result::Result<Page<Self::Cursor>, Self::Error>;
}

/// Page source backed by a closure. See [`from_fn`].
pub struct FromFn<F, C> {
    fetch: F,
    _cursor: PhantomData<fn() -> C>,
}

/// Wrap a fetch closure as a `PageSource`.
///
/// ```
/// use codelink::hydrate::{from_fn, load_all, Page};
/// use std::convert::Infallible;
///
/// let mut source = from_fn(|cursor: Option<&u32>| {
///     Ok::<_, Infallible>(Page {
///         entries: vec![],
///         next_cursor: Some(cursor.copied().unwrap_or(0) + 1),
///         done: cursor.is_some(),
///     })
/// });
/// let index = load_all(&mut source).unwrap();
/// assert!(index.is_empty());
/// ```
pub fn from_fn<F, C, E>(fetch: F) -> FromFn<F, C>
where
    F: FnMut(Option<&C>) -> std::result::Result<Page<C>, E>,
{
    FromFn {
        fetch,
        _cursor: PhantomData,
    }
}

impl<F, C, E> PageSource for FromFn<F, C>
where
    F: FnMut(Option<&C>) -> std::result::Result<Page<C>, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Cursor = C;
    type Error = E;

    fn fetch_page(&mut self, cursor: Option<&C>) -> std::result::Result<Page<C>, E> {
        (self.fetch)(cursor)
    }
}

/// Serves an in-memory corpus in fixed-size pages. The cursor is the offset
/// of the next entry.
#[derive(Debug, Clone)]
pub struct VecPages {
    entries: Vec<CodeEntry>,
    page_size: usize,
}

impl VecPages {
    pub fn new(entries: Vec<CodeEntry>, page_size: usize) -> Self {
        Self {
            entries,
            page_size: page_size.max(1),
        }
    }

    /// Number of fetches a full load takes.
    pub fn page_count(&self) -> usize {
        self.entries.len().div_ceil(self.page_size).max(1)
    }
}

impl PageSource for VecPages {
    type Cursor = usize;
    type Error = Infallible;

    fn fetch_page(
        &mut self,
        cursor: Option<&usize>,
    ) -> std::result::Result<Page<usize>, Infallible> {
        let start = cursor.copied().unwrap_or(0).min(self.entries.len());
        let end = (start + self.page_size).min(self.entries.len());
        Ok(Page {
            entries: self.entries[start..end].to_vec(),
            next_cursor: Some(end),
            done: end >= self.entries.len(),
        })
    }
}

/// Drain `source` page by page, in cursor order.
pub fn fetch_all<S: PageSource>(source: &mut S) -> Result<Vec<CodeEntry>> {
    let mut entries = Vec::new();
    let mut cursor: Option<S::Cursor> = None;
    let mut page = 0;

    loop {
        let Page {
            entries: batch,
            next_cursor,
            done,
        } = source
            .fetch_page(cursor.as_ref())
            .map_err(|e| Error::Fetch {
                page,
                source: Box::new(e),
            })?;

        debug!(page, entries = batch.len(), done, "fetched corpus page");
        entries.extend(batch);

        if done {
            break;
        }
        cursor = Some(next_cursor.ok_or(Error::MissingCursor { page })?);
        page += 1;
    }

    info!(pages = page + 1, entries = entries.len(), "corpus fetched");
    Ok(entries)
}

/// Fetch every page and build the index with the default stop words.
pub fn load_all<S: PageSource>(source: &mut S) -> Result<CorpusIndex> {
    load_all_with(source, IndexOptions::default())
}

/// Fetch every page and build the index with explicit options.
pub fn load_all_with<S: PageSource>(source: &mut S, options: IndexOptions) -> Result<CorpusIndex> {
    let entries = fetch_all(source)?;
    let index = CorpusIndex::build_with(entries, options);
    info!(
        entries = index.len(),
        terms = index.term_count(),
        "corpus index ready"
    );
    Ok(index)
}
