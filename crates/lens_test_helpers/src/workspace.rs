//! Workspace initialization utilities for tests
//!
//! Provides functions to create temporary directories and initialize
//! TextLens workspaces for integration testing.

use assert_fs::TempDir;
use std::fs;
use std::path::Path;

/// Create a temporary directory for testing
///
/// The directory is automatically cleaned up when the `TempDir` is dropped.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Initialize a TextLens workspace in a temp directory
///
/// Creates the `.textlens/documents/content` directory structure the
/// document store expects.
pub fn init_workspace() -> TempDir {
    let temp = temp_dir();
    let content_dir = temp.path().join(".textlens/documents/content");
    fs::create_dir_all(&content_dir).expect("Failed to create documents directory");
    temp
}

/// Create a workspace pre-populated with documents.
///
/// Writes a well-formed `documents.json` index plus one content body per
/// entry, assigning ids `doc_001`, `doc_002`, ... in order.
///
/// # Arguments
///
/// * `documents` - Slice of tuples (title, content)
pub fn workspace_with_documents(documents: &[(&str, &str)]) -> TempDir {
    let workspace = init_workspace();
    let docs_dir = workspace.path().join(".textlens/documents");

    let mut index = String::from("{\n");
    for (i, (title, content)) in documents.iter().enumerate() {
        let id = format!("doc_{:03}", i + 1);
        write_content(&docs_dir, &id, content);

        if i > 0 {
            index.push_str(",\n");
        }
        index.push_str(&format!(
            r#"  "{id}": {{
    "title": "{title}",
    "author": "Unknown",
    "category": "General",
    "filename": "{id}.txt",
    "created": "2024-01-01T00:00:00Z",
    "word_count": {words},
    "content_hash": ""
  }}"#,
            id = id,
            title = title,
            words = content.split_whitespace().count(),
        ));
    }
    index.push_str("\n}\n");

    fs::write(docs_dir.join("documents.json"), index).expect("Failed to write index");
    workspace
}

fn write_content(docs_dir: &Path, id: &str, content: &str) {
    let path = docs_dir.join("content").join(format!("{}.txt", id));
    fs::write(path, content).expect("Failed to write content body");
}
