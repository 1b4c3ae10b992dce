//! Core engine for TextLens
//!
//! This crate contains the text analysis routines (sentiment, keywords,
//! readability, statistics) and the flat-file document store they operate on.

pub mod analysis;
pub mod keywords;
pub mod readability;
pub mod sentiment;
pub mod stats;
pub mod store;

pub use analysis::{analyze_document, AnalysisResult};
pub use store::{DocumentStore, SearchHit};
