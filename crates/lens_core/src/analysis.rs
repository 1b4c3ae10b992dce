//! Combined per-document analysis: sentiment + keywords + readability + stats.

use crate::keywords::{self, Keyword};
use crate::readability::{self, ReadabilityReport};
use crate::sentiment::{self, SentimentReport};
use crate::stats::{self, TextStats};
use crate::store::DocumentStore;
use lens_common::{DocumentMeta, Result};
use serde::{Deserialize, Serialize};

/// Full analysis of one stored document. Constructed fresh per request,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub document_id: String,
    pub metadata: DocumentMeta,
    pub sentiment: SentimentReport,
    pub keywords: Vec<Keyword>,
    pub readability: ReadabilityReport,
    pub statistics: TextStats,
    pub analyzed_at: String,
}

/// Analyze a stored document end to end
#[tracing::instrument(skip(store))]
pub fn analyze_document(
    store: &DocumentStore,
    document_id: &str,
    keyword_limit: usize,
    min_keyword_len: usize,
) -> Result<AnalysisResult> {
    let record = store.get(document_id)?;
    let content = store.content(document_id)?;

    Ok(AnalysisResult {
        document_id: record.id,
        metadata: record.meta,
        sentiment: sentiment::analyze(&content),
        keywords: keywords::extract(&content, keyword_limit, min_keyword_len)?,
        readability: readability::calculate(&content),
        statistics: stats::basic_stats(&content),
        analyzed_at: chrono::Utc::now().to_rfc3339(),
    })
}
