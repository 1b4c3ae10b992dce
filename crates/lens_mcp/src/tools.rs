//! Tool calls as a closed, typed enum.
//!
//! The five tools are a fixed vocabulary, so the dispatcher works on a
//! tagged variant with per-kind argument structures instead of an open
//! string-keyed lookup. Argument validation happens once, at parse time.

use lens_common::{LensError, NewDocument, Result};
use lens_config::Config;
use lens_core::{analysis, keywords, sentiment, store::DocumentStore};
use serde::Serialize;
use serde_json::{json, Value};

/// One validated tool invocation
#[derive(Debug, Clone)]
pub enum ToolCall {
    AnalyzeDocument { document_id: String },
    GetSentiment { text: String },
    ExtractKeywords { text: String, limit: Option<i64> },
    SearchDocuments { query: String },
    AddDocument(NewDocument),
}

impl ToolCall {
    /// The fixed tool vocabulary, in discovery order
    pub const NAMES: [&'static str; 5] = [
        "analyze_document",
        "get_sentiment",
        "extract_keywords",
        "search_documents",
        "add_document",
    ];

    /// Parse a named tool invocation from a JSON argument mapping
    pub fn parse(tool: &str, arguments: &Value) -> Result<Self> {
        match tool {
            "analyze_document" => Ok(Self::AnalyzeDocument {
                document_id: required_str(tool, arguments, "document_id")?,
            }),
            "get_sentiment" => Ok(Self::GetSentiment {
                text: required_str(tool, arguments, "text")?,
            }),
            "extract_keywords" => Ok(Self::ExtractKeywords {
                text: required_str(tool, arguments, "text")?,
                limit: optional_int(arguments, "limit")?,
            }),
            "search_documents" => Ok(Self::SearchDocuments {
                query: required_str(tool, arguments, "query")?,
            }),
            "add_document" => Ok(Self::AddDocument(NewDocument {
                title: required_str(tool, arguments, "title")?,
                content: required_str(tool, arguments, "content")?,
                author: optional_str(arguments, "author")?,
                category: optional_str(arguments, "category")?,
            })),
            _ => Err(LensError::UnknownTool {
                tool: tool.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AnalyzeDocument { .. } => "analyze_document",
            Self::GetSentiment { .. } => "get_sentiment",
            Self::ExtractKeywords { .. } => "extract_keywords",
            Self::SearchDocuments { .. } => "search_documents",
            Self::AddDocument(_) => "add_document",
        }
    }
}

fn required_str(tool: &str, arguments: &Value, key: &str) -> Result<String> {
    match arguments.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) | None => Err(LensError::MissingArgument {
            tool: tool.to_string(),
            argument: key.to_string(),
        }),
        Some(other) => Err(LensError::InvalidArgument(format!(
            "'{}' must be a string, got {}",
            key, other
        ))),
    }
}

fn optional_str(arguments: &Value, key: &str) -> Result<Option<String>> {
    match arguments.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(LensError::InvalidArgument(format!(
            "'{}' must be a string, got {}",
            key, other
        ))),
    }
}

fn optional_int(arguments: &Value, key: &str) -> Result<Option<i64>> {
    match arguments.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_i64().map(Some).ok_or_else(|| {
            LensError::InvalidArgument(format!("'{}' must be an integer, got {}", key, v))
        }),
    }
}

/// Execute a validated tool call against the injected store
pub fn dispatch(store: &mut DocumentStore, config: &Config, call: ToolCall) -> Result<Value> {
    match call {
        ToolCall::AnalyzeDocument { document_id } => {
            let result = analysis::analyze_document(
                store,
                &document_id,
                config.analysis.keyword_limit,
                config.analysis.min_keyword_len,
            )?;
            Ok(serde_json::to_value(result)?)
        }
        ToolCall::GetSentiment { text } => Ok(serde_json::to_value(sentiment::analyze(&text))?),
        ToolCall::ExtractKeywords { text, limit } => {
            let limit = match limit {
                Some(l) if l <= 0 => {
                    return Err(LensError::InvalidArgument(
                        "limit must be a positive integer".to_string(),
                    ))
                }
                Some(l) => l as usize,
                None => config.analysis.keyword_limit,
            };
            let keywords = keywords::extract(&text, limit, config.analysis.min_keyword_len)?;
            Ok(json!({ "keywords": keywords }))
        }
        ToolCall::SearchDocuments { query } => {
            let mut results = store.search(&query);
            results.truncate(config.mcp.search_limit);
            Ok(json!({ "results": results }))
        }
        ToolCall::AddDocument(doc) => {
            let document_id = store.add(doc)?;
            Ok(json!({
                "document_id": document_id,
                "message": "Document added successfully"
            }))
        }
    }
}

/// Uniform response envelope: exactly one of the two shapes, never both
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ToolResponse {
    Success {
        tool: String,
        result: Value,
        timestamp: String,
    },
    Failure {
        error: String,
    },
}

impl ToolResponse {
    pub fn success(tool: &str, result: Value) -> Self {
        Self::Success {
            tool: tool.to_string(),
            result,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn failure(err: &LensError) -> Self {
        Self::Failure {
            error: err.to_string(),
        }
    }
}

/// Tool descriptors for `tools/list`, JSON-Schema shaped
pub fn tool_descriptors() -> Value {
    json!([
        {
            "name": "analyze_document",
            "description": "Perform complete analysis of a document including sentiment, keywords, readability, and statistics",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "document_id": { "type": "string", "description": "ID of the document to analyze" }
                },
                "required": ["document_id"]
            }
        },
        {
            "name": "get_sentiment",
            "description": "Analyze sentiment of any text (positive/negative/neutral)",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "text": { "type": "string", "description": "Text to analyze for sentiment" }
                },
                "required": ["text"]
            }
        },
        {
            "name": "extract_keywords",
            "description": "Extract top keywords from text",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "text": { "type": "string", "description": "Text to extract keywords from" },
                    "limit": { "type": "integer", "description": "Maximum number of keywords to return", "default": 10 }
                },
                "required": ["text"]
            }
        },
        {
            "name": "search_documents",
            "description": "Search documents by content or metadata",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "Search query" }
                },
                "required": ["query"]
            }
        },
        {
            "name": "add_document",
            "description": "Add a new document to the collection",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "title": { "type": "string", "description": "Document title" },
                    "content": { "type": "string", "description": "Document content" },
                    "author": { "type": "string", "description": "Document author" },
                    "category": { "type": "string", "description": "Document category" }
                },
                "required": ["title", "content"]
            }
        }
    ])
}
