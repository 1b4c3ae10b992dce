//! Shared test utilities for TextLens test suites
//!
//! This crate provides common testing utilities to eliminate code duplication
//! across test suites and ensure consistent test environments.
//!
//! # Modules
//!
//! - [`workspace`]: Test workspace initialization and setup
//! - [`cli`]: Command builders with pre-configured environments
//! - [`logging`]: Test logging configuration
//! - [`assertions`]: Domain-specific assertion helpers

pub mod assertions;
pub mod cli;
pub mod logging;
pub mod workspace;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::cli::{lens_command, mcp_command};
    pub use crate::logging::init_test_logging;
    pub use crate::workspace::{init_workspace, temp_dir, workspace_with_documents};
}
