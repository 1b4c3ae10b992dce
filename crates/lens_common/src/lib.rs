//! Common types and errors for TextLens
//!
//! This crate provides shared data structures used across all TextLens components.

pub mod telemetry;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core error types for TextLens operations
#[derive(Error, Debug)]
pub enum LensError {
    #[error("Unknown tool: {tool}")]
    UnknownTool { tool: String },

    #[error("Missing required argument '{argument}' for tool '{tool}'")]
    MissingArgument { tool: String, argument: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Document not found: {id}")]
    NotFound { id: String },

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Metadata persisted in the document index for each stored document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentMeta {
    /// Title of the document
    pub title: String,

    /// Author (defaults to "Unknown" at creation)
    #[serde(default = "default_author")]
    pub author: String,

    /// Category (defaults to "General" at creation)
    #[serde(default = "default_category")]
    pub category: String,

    /// Content file name relative to the content directory
    pub filename: String,

    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created: Option<String>,

    /// Word count of the content body at creation time
    #[serde(default)]
    pub word_count: usize,

    /// SHA256 hash of the content body
    #[serde(default)]
    pub content_hash: String,
}

fn default_author() -> String {
    "Unknown".to_string()
}
fn default_category() -> String {
    "General".to_string()
}

/// A document id paired with its metadata, as returned by list/get
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    #[serde(flatten)]
    pub meta: DocumentMeta,
}

/// Input for adding a new document to the store
#[derive(Debug, Clone, Deserialize)]
pub struct NewDocument {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, LensError>;

/// Exit code constants for the CLI
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_CONFIG_ERROR: i32 = 101;
