//! Flat-file document store: a single JSON index plus out-of-line content
//! bodies, one text file per document id.

use lens_common::{DocumentMeta, DocumentRecord, LensError, NewDocument, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "documents.json";
const CONTENT_DIR: &str = "content";

/// A search match with its relevance score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub document_id: String,
    pub relevance_score: f64,
    pub title: String,
    pub author: String,
    pub category: String,
}

/// Owned handle over the on-disk document collection.
///
/// Constructed once at startup and threaded through as a parameter; callers
/// that accept concurrent requests must serialize access themselves.
#[derive(Debug)]
pub struct DocumentStore {
    index_path: PathBuf,
    content_dir: PathBuf,
    index: BTreeMap<String, DocumentMeta>,
}

impl DocumentStore {
    /// Open (or create) the store rooted at `dir`
    #[tracing::instrument]
    pub fn open(dir: &Path) -> Result<Self> {
        let index_path = dir.join(INDEX_FILE);
        let content_dir = dir.join(CONTENT_DIR);
        fs::create_dir_all(&content_dir)?;

        let index = if index_path.exists() {
            let raw = fs::read_to_string(&index_path)?;
            serde_json::from_str(&raw)
                .map_err(|e| LensError::StorageFailure(format!("corrupt index: {}", e)))?
        } else {
            BTreeMap::new()
        };

        tracing::debug!(documents = index.len(), "Opened document store");
        Ok(Self {
            index_path,
            content_dir,
            index,
        })
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Add a document: write the content body, then the index. Either both
    /// writes succeed or neither is visible afterwards.
    #[tracing::instrument(skip(self, doc), fields(title = %doc.title))]
    pub fn add(&mut self, doc: NewDocument) -> Result<String> {
        let id = self.next_id();
        let filename = format!("{}.txt", id);
        let content_path = self.content_dir.join(&filename);

        fs::write(&content_path, &doc.content)
            .map_err(|e| LensError::StorageFailure(format!("writing content body: {}", e)))?;

        let mut hasher = Sha256::new();
        hasher.update(doc.content.as_bytes());

        let meta = DocumentMeta {
            title: doc.title,
            author: doc.author.unwrap_or_else(|| "Unknown".to_string()),
            category: doc.category.unwrap_or_else(|| "General".to_string()),
            filename,
            created: Some(chrono::Utc::now().to_rfc3339()),
            word_count: doc.content.split_whitespace().count(),
            content_hash: format!("{:x}", hasher.finalize()),
        };

        self.index.insert(id.clone(), meta);
        if let Err(e) = self.persist_index() {
            // Roll back so no partially-visible document survives
            self.index.remove(&id);
            let _ = fs::remove_file(&content_path);
            return Err(e);
        }

        tracing::info!(%id, "Added document");
        Ok(id)
    }

    /// Fetch a document's metadata by id
    pub fn get(&self, id: &str) -> Result<DocumentRecord> {
        self.index
            .get(id)
            .map(|meta| DocumentRecord {
                id: id.to_string(),
                meta: meta.clone(),
            })
            .ok_or_else(|| LensError::NotFound { id: id.to_string() })
    }

    /// Read a document's content body.
    ///
    /// An index entry whose body is missing on disk is a partial write and
    /// surfaces as `StorageFailure`, not `NotFound`.
    pub fn content(&self, id: &str) -> Result<String> {
        let meta = self
            .index
            .get(id)
            .ok_or_else(|| LensError::NotFound { id: id.to_string() })?;

        let path = self.content_dir.join(&meta.filename);
        fs::read_to_string(&path).map_err(|e| {
            LensError::StorageFailure(format!(
                "content body for {} unreadable at {:?}: {}",
                id, path, e
            ))
        })
    }

    /// All documents in id order
    pub fn list(&self) -> Vec<DocumentRecord> {
        self.index
            .iter()
            .map(|(id, meta)| DocumentRecord {
                id: id.clone(),
                meta: meta.clone(),
            })
            .collect()
    }

    /// Case-insensitive substring search over title, author, category and
    /// content; hits are sorted by relevance score descending.
    #[tracing::instrument(skip(self))]
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let query = query.to_lowercase();
        let mut hits = Vec::new();

        for (id, meta) in &self.index {
            let mut score = 0.0;

            if meta.title.to_lowercase().contains(&query) {
                score += 3.0;
            }
            if meta.author.to_lowercase().contains(&query) {
                score += 2.0;
            }
            if meta.category.to_lowercase().contains(&query) {
                score += 2.0;
            }

            // Unreadable content bodies only lose the content portion of
            // the score; metadata matches still count.
            if let Ok(content) = self.content(id) {
                let content = content.to_lowercase();
                let occurrences = content.matches(&query).count();
                if occurrences > 0 {
                    score += 1.0 + occurrences as f64 * 0.1;
                }
            }

            if score > 0.0 {
                hits.push(SearchHit {
                    document_id: id.clone(),
                    relevance_score: (score * 100.0).round() / 100.0,
                    title: meta.title.clone(),
                    author: meta.author.clone(),
                    category: meta.category.clone(),
                });
            }
        }

        hits.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits
    }

    /// Install the bundled sample documents if the store is empty.
    /// Returns the number of documents added (zero if already populated).
    pub fn seed_samples(&mut self) -> Result<usize> {
        if !self.is_empty() {
            tracing::debug!("Store already populated, skipping sample seeding");
            return Ok(0);
        }

        let samples: Vec<NewDocument> = serde_json::from_str(include_str!("../sample_documents.json"))
            .map_err(|e| LensError::StorageFailure(format!("bundled samples invalid: {}", e)))?;

        let count = samples.len();
        for sample in samples {
            self.add(sample)?;
        }

        tracing::info!(count, "Seeded sample documents");
        Ok(count)
    }

    /// Next unused sequential id (`doc_001`, `doc_002`, ...)
    fn next_id(&self) -> String {
        let max = self
            .index
            .keys()
            .filter_map(|id| id.strip_prefix("doc_"))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("doc_{:03}", max + 1)
    }

    fn persist_index(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.index)
            .map_err(|e| LensError::StorageFailure(format!("serializing index: {}", e)))?;
        fs::write(&self.index_path, json)
            .map_err(|e| LensError::StorageFailure(format!("writing index: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_doc(title: &str, content: &str) -> NewDocument {
        NewDocument {
            title: title.to_string(),
            content: content.to_string(),
            author: None,
            category: None,
        }
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let temp = assert_fs::TempDir::new().unwrap();
        let mut store = DocumentStore::open(temp.path()).unwrap();

        assert_eq!(store.add(new_doc("First", "alpha")).unwrap(), "doc_001");
        assert_eq!(store.add(new_doc("Second", "beta")).unwrap(), "doc_002");
    }

    #[test]
    fn test_add_then_get_roundtrip() {
        let temp = assert_fs::TempDir::new().unwrap();
        let mut store = DocumentStore::open(temp.path()).unwrap();

        let id = store
            .add(NewDocument {
                title: "T".to_string(),
                content: "C".to_string(),
                author: Some("A".to_string()),
                category: Some("Cat".to_string()),
            })
            .unwrap();

        let record = store.get(&id).unwrap();
        assert_eq!(record.meta.title, "T");
        assert_eq!(record.meta.author, "A");
        assert_eq!(record.meta.category, "Cat");
        assert_eq!(record.meta.word_count, 1);
        assert_eq!(store.content(&id).unwrap(), "C");
    }

    #[test]
    fn test_defaults_for_author_and_category() {
        let temp = assert_fs::TempDir::new().unwrap();
        let mut store = DocumentStore::open(temp.path()).unwrap();

        let id = store.add(new_doc("Untitled origins", "body")).unwrap();
        let record = store.get(&id).unwrap();
        assert_eq!(record.meta.author, "Unknown");
        assert_eq!(record.meta.category, "General");
    }

    #[test]
    fn test_index_survives_reopen() {
        let temp = assert_fs::TempDir::new().unwrap();
        let id = {
            let mut store = DocumentStore::open(temp.path()).unwrap();
            store.add(new_doc("Persistent", "still here")).unwrap()
        };

        let store = DocumentStore::open(temp.path()).unwrap();
        assert_eq!(store.get(&id).unwrap().meta.title, "Persistent");
        assert_eq!(store.content(&id).unwrap(), "still here");
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let temp = assert_fs::TempDir::new().unwrap();
        let store = DocumentStore::open(temp.path()).unwrap();
        assert!(matches!(
            store.get("doc_999"),
            Err(LensError::NotFound { .. })
        ));
    }

    #[test]
    fn test_missing_content_body_is_storage_failure() {
        let temp = assert_fs::TempDir::new().unwrap();
        let mut store = DocumentStore::open(temp.path()).unwrap();
        let id = store.add(new_doc("Doomed", "gone soon")).unwrap();

        fs::remove_file(temp.path().join(CONTENT_DIR).join(format!("{}.txt", id))).unwrap();

        assert!(matches!(
            store.content(&id),
            Err(LensError::StorageFailure(_))
        ));
        // Metadata lookup still works; only the body read fails
        assert!(store.get(&id).is_ok());
    }

    #[test]
    fn test_search_relevance_ordering() {
        let temp = assert_fs::TempDir::new().unwrap();
        let mut store = DocumentStore::open(temp.path()).unwrap();

        store
            .add(NewDocument {
                title: "Gardening basics".to_string(),
                content: "Soil and water.".to_string(),
                author: None,
                category: Some("Hobby".to_string()),
            })
            .unwrap();
        store
            .add(NewDocument {
                title: "Cooking at home".to_string(),
                content: "A gardening aside, then recipes. More gardening notes.".to_string(),
                author: None,
                category: None,
            })
            .unwrap();

        let hits = store.search("gardening");
        assert_eq!(hits.len(), 2);
        // Title match (3.0) outranks content-only matches (1.0 + 0.2)
        assert_eq!(hits[0].title, "Gardening basics");
        assert!(hits[0].relevance_score > hits[1].relevance_score);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let temp = assert_fs::TempDir::new().unwrap();
        let mut store = DocumentStore::open(temp.path()).unwrap();
        store.add(new_doc("MiXeD Case Title", "Body")).unwrap();

        assert_eq!(store.search("mixed case").len(), 1);
    }

    #[test]
    fn test_search_no_match_is_empty_not_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let store = DocumentStore::open(temp.path()).unwrap();
        assert!(store.search("xyz-not-present").is_empty());
    }

    #[test]
    fn test_seed_samples_idempotent() {
        let temp = assert_fs::TempDir::new().unwrap();
        let mut store = DocumentStore::open(temp.path()).unwrap();

        let first = store.seed_samples().unwrap();
        assert!(first > 0);
        assert_eq!(store.len(), first);

        let second = store.seed_samples().unwrap();
        assert_eq!(second, 0);
        assert_eq!(store.len(), first);
    }
}
