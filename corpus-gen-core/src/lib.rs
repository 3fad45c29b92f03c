//! Synthetic text corpus generation library.
//!
//! This crate produces plain-text datasets for document-similarity work:
//! - Themed vocabularies mixed with common function words
//! - Deterministic quartile theme assignment per document
//! - Sentence-based word sampling with per-document length jitter
//! - One `Document<i> <body>` line per document
//! - Document and word count reporting over the written files
//!
//! Every generation routine takes its random source as a parameter, so a
//! seeded `rand::rngs::StdRng` gives reproducible output.

/// Corpus generation pipeline (themes, synthesis, datasets, orchestration).
pub mod model;

/// Fixed themed and common word lists.
pub mod vocabulary;

/// Read-only summaries of generated dataset files.
pub mod report;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use model::dataset::{DatasetSpec, Document};
pub use model::generator::{CorpusGenerator, progress_message};
pub use model::theme::{ThemePair, ThemeStrategy};
pub use report::DatasetSummary;
pub use vocabulary::Theme;
