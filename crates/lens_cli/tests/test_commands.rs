//! CLI integration tests

use lens_test_helpers::prelude::*;
use predicates::prelude::*;

#[test]
fn test_lens_help() {
    lens_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TextLens"));
}

#[test]
fn test_lens_version() {
    lens_command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_lens_init() {
    let temp = temp_dir();

    lens_command()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("Workspace initialized"));

    assert!(temp.path().join(".textlens").exists());
    assert!(temp.path().join(".textlens/config.toml").exists());
    assert!(temp.path().join(".textlens/documents/content").exists());
}

#[test]
fn test_lens_init_is_idempotent() {
    let temp = temp_dir();

    lens_command()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success();

    lens_command()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_lens_add_and_list() {
    let temp = init_workspace();

    lens_command()
        .current_dir(temp.path())
        .args(["add", "Garden Notes", "--content", "tomatoes need water"])
        .assert()
        .success()
        .stderr(contains_document_id());

    lens_command()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("doc_001"))
        .stdout(predicate::str::contains("Garden Notes"));
}

#[test]
fn test_lens_add_json_output() {
    let temp = init_workspace();

    lens_command()
        .current_dir(temp.path())
        .args(["add", "T", "--content", "some text", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"document_id\""))
        .stdout(contains_document_id());
}

#[test]
fn test_lens_add_requires_content_or_file() {
    let temp = init_workspace();

    lens_command()
        .current_dir(temp.path())
        .args(["add", "No Body"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--content or --file"));
}

#[test]
fn test_lens_search_finds_added_document() {
    let temp = init_workspace();

    lens_command()
        .current_dir(temp.path())
        .args(["add", "Rust Safety", "--content", "ownership and borrowing"])
        .assert()
        .success();

    lens_command()
        .current_dir(temp.path())
        .args(["search", "ownership", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("doc_001"))
        .stdout(predicate::str::contains("Rust Safety"));
}

#[test]
fn test_lens_analyze_outputs_all_sections() {
    let temp = init_workspace();

    lens_command()
        .current_dir(temp.path())
        .args([
            "add",
            "Feelings",
            "--content",
            "What a wonderful day. The garden looks beautiful.",
        ])
        .assert()
        .success();

    lens_command()
        .current_dir(temp.path())
        .args(["analyze", "doc_001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sentiment\""))
        .stdout(predicate::str::contains("\"keywords\""))
        .stdout(predicate::str::contains("\"readability\""))
        .stdout(predicate::str::contains("\"statistics\""));
}

#[test]
fn test_lens_analyze_unknown_id_fails() {
    let temp = init_workspace();

    lens_command()
        .current_dir(temp.path())
        .args(["analyze", "doc_404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Document not found"));
}

#[test]
fn test_lens_sentiment_and_stats_work_without_store() {
    let temp = temp_dir();

    lens_command()
        .current_dir(temp.path())
        .args(["sentiment", "I love this wonderful library"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"positive\""));

    lens_command()
        .current_dir(temp.path())
        .args(["stats", "One. Two. Three."])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sentence_count\": 3"));
}

#[test]
fn test_lens_keywords_respects_limit() {
    let temp = temp_dir();

    let output = lens_command()
        .current_dir(temp.path())
        .args(["keywords", "apples apples pears plums quince", "--limit", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let keywords = parsed.as_array().unwrap();
    assert_eq!(keywords.len(), 2);
    assert_eq!(keywords[0]["keyword"], "apples");
}

#[test]
fn test_lens_seed_installs_samples_once() {
    let temp = init_workspace();

    lens_command()
        .current_dir(temp.path())
        .arg("seed")
        .assert()
        .success()
        .stderr(predicate::str::contains("Installed 5 sample documents"));

    lens_command()
        .current_dir(temp.path())
        .arg("seed")
        .assert()
        .success()
        .stderr(predicate::str::contains("nothing to seed"));
}

#[test]
fn test_lens_mcp_answers_requests_over_stdio() {
    let temp = temp_dir();

    lens_command()
        .current_dir(temp.path())
        .arg("mcp")
        .write_stdin(r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#)
        .assert()
        .success()
        .stdout(valid_jsonrpc_response())
        .stdout(predicate::str::contains("pong"));
}

#[test]
fn test_lens_mcp_emits_parse_error_for_malformed_json() {
    let temp = temp_dir();

    lens_command()
        .current_dir(temp.path())
        .arg("mcp")
        .write_stdin("this is not json\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("-32700"));
}

#[test]
fn test_invalid_command() {
    lens_command().arg("invalid-command").assert().failure();
}
