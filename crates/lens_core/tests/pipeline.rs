//! Cross-module pipeline tests: store + search + full analysis together.

use lens_common::{LensError, NewDocument};
use lens_core::analyze_document;
use lens_core::store::DocumentStore;
use lens_test_helpers::prelude::*;

fn open(workspace: &assert_fs::TempDir) -> DocumentStore {
    DocumentStore::open(&workspace.path().join(".textlens/documents")).unwrap()
}

#[test]
fn test_seeded_store_supports_search_and_analysis() {
    let workspace = init_workspace();
    let mut store = open(&workspace);

    assert_eq!(store.seed_samples().unwrap(), 5);

    let hits = store.search("quantum");
    assert!(!hits.is_empty());

    let result = analyze_document(&store, &hits[0].document_id, 10, 3).unwrap();
    assert!(result.statistics.word_count > 0);
    assert!(!result.keywords.is_empty());
    assert!((-1.0..=1.0).contains(&result.sentiment.polarity));
    assert!((0.0..=1.0).contains(&result.sentiment.subjectivity));
}

#[test]
fn test_title_match_outranks_content_match() {
    let workspace = workspace_with_documents(&[
        ("Cooking basics", "nothing relevant here"),
        ("Other title", "cooking cooking cooking"),
    ]);
    let store = open(&workspace);

    let hits = store.search("cooking");
    assert_eq!(hits.len(), 2);
    // Title hit scores 3.0; three content occurrences score 1.0 + 0.3
    assert_eq!(hits[0].document_id, "doc_001");
    assert!(hits[0].relevance_score > hits[1].relevance_score);
}

#[test]
fn test_ids_continue_after_existing_documents() {
    let workspace = workspace_with_documents(&[("First", "alpha"), ("Second", "beta")]);
    let mut store = open(&workspace);

    let id = store
        .add(NewDocument {
            title: "Third".to_string(),
            content: "gamma".to_string(),
            author: None,
            category: None,
        })
        .unwrap();
    assert_eq!(id, "doc_003");
}

#[test]
fn test_missing_content_body_is_storage_failure() {
    let workspace = workspace_with_documents(&[("Orphan", "body text")]);
    let store = open(&workspace);

    // Index entry survives, body goes missing
    std::fs::remove_file(
        workspace
            .path()
            .join(".textlens/documents/content/doc_001.txt"),
    )
    .unwrap();

    let err = store.content("doc_001").unwrap_err();
    assert!(matches!(err, LensError::StorageFailure(_)));

    // And the failure propagates through analysis unchanged
    let err = analyze_document(&store, "doc_001", 10, 3).unwrap_err();
    assert!(matches!(err, LensError::StorageFailure(_)));
}

#[test]
fn test_reopened_store_sees_previous_writes() {
    let workspace = init_workspace();
    {
        let mut store = open(&workspace);
        store
            .add(NewDocument {
                title: "Persistent".to_string(),
                content: "written once, read twice".to_string(),
                author: Some("A".to_string()),
                category: None,
            })
            .unwrap();
    }

    let store = open(&workspace);
    let record = store.get("doc_001").unwrap();
    assert_eq!(record.meta.title, "Persistent");
    assert_eq!(record.meta.author, "A");
    assert_eq!(store.content("doc_001").unwrap(), "written once, read twice");
}
