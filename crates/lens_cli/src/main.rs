//! TextLens CLI - Command-line interface for the document analysis toolkit
//!
//! Usage: lens <command> [options]

use clap::{Parser, Subcommand};
use lens_common::{NewDocument, EXIT_ERROR};
use lens_config::Config;
use lens_core::store::DocumentStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lens",
    version = "0.1.0",
    about = "TextLens document analysis toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose/debug logging
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new TextLens workspace
    Init,

    /// Add a document to the store
    Add {
        /// Document title
        title: String,

        /// Inline document content
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,

        /// Read document content from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Document author
        #[arg(long)]
        author: Option<String>,

        /// Document category
        #[arg(long)]
        category: Option<String>,

        /// Output result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all stored documents
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search documents by content or metadata
    Search {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the full analysis pipeline on a stored document
    Analyze {
        /// Document ID (e.g. doc_001)
        id: String,
    },

    /// Score sentiment of arbitrary text
    Sentiment {
        /// Text to analyze
        text: String,
    },

    /// Extract top keywords from arbitrary text
    Keywords {
        /// Text to analyze
        text: String,

        /// Maximum number of keywords
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Compute basic text statistics
    Stats {
        /// Text to analyze
        text: String,
    },

    /// Install bundled sample documents into an empty store
    Seed,

    /// Start MCP server (JSON-RPC over stdio)
    Mcp,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize structured logging via centralized telemetry module
    lens_common::telemetry::init_tracing(cli.verbose, false);
    tracing::info!("TextLens CLI started");

    let result = match cli.command {
        Commands::Init => cmd_init().await,
        Commands::Add {
            title,
            content,
            file,
            author,
            category,
            json,
        } => cmd_add(title, content, file, author, category, json).await,
        Commands::List { json } => cmd_list(json).await,
        Commands::Search { query, limit, json } => cmd_search(query, limit, json).await,
        Commands::Analyze { id } => cmd_analyze(id).await,
        Commands::Sentiment { text } => cmd_sentiment(text).await,
        Commands::Keywords { text, limit } => cmd_keywords(text, limit).await,
        Commands::Stats { text } => cmd_stats(text).await,
        Commands::Seed => cmd_seed().await,
        Commands::Mcp => cmd_mcp().await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(EXIT_ERROR);
    }
}

//
// Helper functions
//

/// Workspace root: TEXTLENS_WORKSPACE override, else the current directory
fn workspace_root() -> anyhow::Result<PathBuf> {
    match std::env::var_os("TEXTLENS_WORKSPACE") {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(std::env::current_dir()?),
    }
}

fn open_store() -> anyhow::Result<(Config, DocumentStore)> {
    let root = workspace_root()?;
    let config = Config::load(&root)?;
    let store = DocumentStore::open(&config.documents_dir())?;
    Ok((config, store))
}

//
// Command implementations
//

async fn cmd_init() -> anyhow::Result<()> {
    use std::fs;

    let root = workspace_root()?;
    let textlens_dir = root.join(".textlens");

    if !textlens_dir.exists() {
        fs::create_dir_all(&textlens_dir)?;
        eprintln!("✓ Created .textlens/");
    } else {
        eprintln!("✓ .textlens/ already exists");
    }

    let documents_dir = textlens_dir.join("documents");
    if !documents_dir.exists() {
        fs::create_dir_all(documents_dir.join("content"))?;
        eprintln!("✓ Created .textlens/documents/");
    }

    let config_path = textlens_dir.join("config.toml");
    if !config_path.exists() {
        let default_config = r#"# TextLens Configuration

[store]
documents_dir = ".textlens/documents"

[analysis]
keyword_limit = 10
min_keyword_len = 3

[mcp]
search_limit = 25
"#;
        fs::write(&config_path, default_config)?;
        eprintln!("✓ Created .textlens/config.toml");
    } else {
        eprintln!("✓ .textlens/config.toml already exists");
    }

    eprintln!("\n✅ Workspace initialized successfully!");
    Ok(())
}

async fn cmd_add(
    title: String,
    content: Option<String>,
    file: Option<PathBuf>,
    author: Option<String>,
    category: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let content = match (content, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)?,
        (None, None) => anyhow::bail!("provide document text with --content or --file"),
    };

    let (_config, mut store) = open_store()?;
    let id = store.add(NewDocument {
        title,
        content,
        author,
        category,
    })?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "document_id": id }))?
        );
    } else {
        eprintln!("✓ Added {}", id);
    }
    Ok(())
}

async fn cmd_list(json: bool) -> anyhow::Result<()> {
    let (_config, store) = open_store()?;
    let records = store.list();

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        eprintln!("No documents stored. Try 'lens add' or 'lens seed'.");
        return Ok(());
    }

    for record in records {
        println!(
            "{}  {} by {} [{}] ({} words)",
            record.id,
            record.meta.title,
            record.meta.author,
            record.meta.category,
            record.meta.word_count
        );
    }
    Ok(())
}

async fn cmd_search(query: String, limit: usize, json: bool) -> anyhow::Result<()> {
    let (_config, store) = open_store()?;
    let mut hits = store.search(&query);
    hits.truncate(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        eprintln!("No matches for '{}'", query);
        return Ok(());
    }

    for hit in hits {
        println!(
            "{}  {:.1}  {} by {} [{}]",
            hit.document_id, hit.relevance_score, hit.title, hit.author, hit.category
        );
    }
    Ok(())
}

async fn cmd_analyze(id: String) -> anyhow::Result<()> {
    let (config, store) = open_store()?;
    let result = lens_core::analyze_document(
        &store,
        &id,
        config.analysis.keyword_limit,
        config.analysis.min_keyword_len,
    )?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn cmd_sentiment(text: String) -> anyhow::Result<()> {
    let report = lens_core::sentiment::analyze(&text);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn cmd_keywords(text: String, limit: usize) -> anyhow::Result<()> {
    let root = workspace_root()?;
    let config = Config::load(&root)?;
    let keywords = lens_core::keywords::extract(&text, limit, config.analysis.min_keyword_len)?;
    println!("{}", serde_json::to_string_pretty(&keywords)?);
    Ok(())
}

async fn cmd_stats(text: String) -> anyhow::Result<()> {
    let stats = lens_core::stats::basic_stats(&text);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

async fn cmd_seed() -> anyhow::Result<()> {
    let (_config, mut store) = open_store()?;
    let installed = store.seed_samples()?;
    if installed == 0 {
        eprintln!("✓ Store already has documents, nothing to seed");
    } else {
        eprintln!("✓ Installed {} sample documents", installed);
    }
    Ok(())
}

async fn cmd_mcp() -> anyhow::Result<()> {
    use lens_mcp::ServerState;
    use std::io::{BufRead, BufReader, Write};

    // CRITICAL: Log to stderr, NOT stdout
    // stdout is reserved EXCLUSIVELY for JSON-RPC responses
    eprintln!("✓ MCP server started (reading from stdin)");

    let root = workspace_root()?;
    let state = ServerState::new(&root)?;
    let seeded = state.seed_if_empty()?;
    if seeded > 0 {
        tracing::info!(count = seeded, "Seeded sample documents");
    }

    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin);
    let mut stdout = std::io::stdout();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<lens_mcp::JsonRpcRequest>(&line) {
            Ok(request) => {
                if let Some(response) = lens_mcp::handle_request(&state, request).await {
                    // Write JSON-RPC response to stdout ONLY
                    writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                    stdout.flush()?;
                }
            }
            Err(e) => {
                // Same parse-error contract as the dedicated lens_mcp binary
                tracing::error!("Failed to parse request: {}", e);
                let error_response = serde_json::json!({
                    "jsonrpc": "2.0",
                    "id": null,
                    "error": {
                        "code": -32700,
                        "message": format!("Parse error: {}", e)
                    }
                });
                writeln!(stdout, "{}", error_response)?;
                stdout.flush()?;
            }
        }
    }

    Ok(())
}
