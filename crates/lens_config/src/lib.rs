//! Configuration management for TextLens
//!
//! This crate handles loading and validating `.textlens/config.toml`

use lens_common::{LensError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Workspace root path (set programmatically, not in TOML)
    #[serde(skip)]
    pub root: PathBuf,

    /// Document store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// MCP settings
    #[serde(default)]
    pub mcp: McpConfig,
}

/// Document store configuration ([store])
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the index and content bodies, relative to root
    #[serde(default = "default_documents_dir")]
    pub documents_dir: String,
}

fn default_documents_dir() -> String {
    ".textlens/documents".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            documents_dir: default_documents_dir(),
        }
    }
}

/// Analysis configuration ([analysis])
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Default number of keywords returned by extract_keywords
    #[serde(default = "default_keyword_limit")]
    pub keyword_limit: usize,

    /// Minimum token length considered a keyword candidate
    #[serde(default = "default_min_keyword_len")]
    pub min_keyword_len: usize,
}

fn default_keyword_limit() -> usize {
    10
}
fn default_min_keyword_len() -> usize {
    3
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            keyword_limit: default_keyword_limit(),
            min_keyword_len: default_min_keyword_len(),
        }
    }
}

/// MCP configuration ([mcp])
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpConfig {
    /// Maximum number of hits returned by search_documents
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

fn default_search_limit() -> usize {
    25
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            search_limit: default_search_limit(),
        }
    }
}

impl Config {
    /// Load configuration from workspace root
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let config_path = workspace_root.join(".textlens/config.toml");

        if !config_path.exists() {
            // Return default config
            return Ok(Self {
                root: workspace_root.to_path_buf(),
                store: StoreConfig::default(),
                analysis: AnalysisConfig::default(),
                mcp: McpConfig::default(),
            });
        }

        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| LensError::ConfigError(format!("Failed to read config: {}", e)))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| LensError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.root = workspace_root.to_path_buf();
        Ok(config)
    }

    /// Absolute path of the document store directory
    pub fn documents_dir(&self) -> PathBuf {
        self.root.join(&self.store.documents_dir)
    }
}
