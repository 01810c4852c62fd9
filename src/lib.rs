//! Coded-reference annotations and suggestion search for clinical free text.
//!
//! An author writes a note and tags spans of it with references: medical
//! codes (ICD-10, ICPC-2, thesaurus terms), internal links, external links.
//! This crate holds the two pieces with real logic in them:
//!
//! - the **reference codec**, which packs any number of classified references
//!   into one flat `href` attribute and recovers them, plus the color and
//!   class derivation that rendering needs;
//! - the **suggestion engine**, which turns what the author is typing into
//!   ranked, deduplicated code candidates from an in-memory corpus index.
//!
//! # Architecture
//!
//! ```text
//!  annotation side                       search side
//! ┌────────────┐   ┌─────────────┐      ┌─────────────┐   ┌─────────────┐
//! │  codec.rs  │──▶│  render.rs  │      │ hydrate.rs  │──▶│ inverted.rs │
//! │ (encode,   │   │ (classes,   │      │ (load_all,  │   │(CorpusIndex)│
//! │  decode)   │   │  style vars)│      │  PageSource)│   └──────┬──────┘
//! └────────────┘   └──────┬──────┘      └─────────────┘          │
//!                         │                                      ▼
//!                  ┌──────┴──────┐                        ┌─────────────┐
//!                  │ palette.rs  │                        │ suggest.rs  │
//!                  │ classify.rs │                        │ links.rs    │
//!                  └─────────────┘                        └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use codelink::{decode, CorpusIndex, SuggestionEngine};
//! use codelink::testing::sample_corpus;
//!
//! let index = CorpusIndex::build(sample_corpus());
//! let results = SuggestionEngine::new(&index).suggest(&["CÉPHALÉE"]);
//! assert_eq!(results[0].text, "Céphalée");
//!
//! let refs = decode("c-ICPC://N01,c-ICD://G05.8,i-he://1234");
//! assert_eq!(refs.len(), 3);
//! ```

pub mod classify;
pub mod codec;
pub mod config;
pub mod error;
pub mod hydrate;
mod inverted;
pub mod links;
pub mod palette;
pub mod render;
mod suggest;
pub mod testing;
mod types;
mod utils;

pub use classify::{ChapterClassifier, Classifier, ContentProvider, PlainDescriber};
pub use codec::{classify_references, decode, encode, ClassifiedReferences};
pub use config::Config;
pub use error::{Error, Result};
pub use hydrate::{load_all, load_all_with, Page, PageSource};
pub use inverted::{tokenize, CorpusIndex, IndexOptions};
pub use links::{resolve_links, CodeResolver};
pub use palette::{color_for, CodeColor, StyleScheme};
pub use render::{render_span, RenderedSpan};
pub use suggest::{suggest, SuggestionEngine};
pub use types::{AnnotatedSpan, Category, CodeEntry, EntryId, Reference, Suggestion};
pub use utils::normalize_term;
