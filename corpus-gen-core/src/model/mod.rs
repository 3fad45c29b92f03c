//! Top-level module for corpus generation.
//!
//! This module provides the whole generation pipeline:
//! - Quartile (or random) theme assignment (`theme`)
//! - Word pools and sentence synthesis (`synthesizer`)
//! - Dataset specs, documents and file serialization (`dataset`)
//! - A high-level orchestration interface (`CorpusGenerator`)

/// High-level interface generating an ordered plan of datasets.
///
/// Owns the random source, writes every dataset file in order and reads
/// them back for reporting.
pub mod generator;

/// Dataset specs (`DatasetSpec`), generated documents (`Document`)
/// and line-per-document serialization.
pub mod dataset;

/// Word pools and sentence-based body synthesis.
///
/// Handles pool weighting, sentence segmentation and per-document
/// length jitter.
pub mod synthesizer;

/// Theme pair selection for a document index.
pub mod theme;
