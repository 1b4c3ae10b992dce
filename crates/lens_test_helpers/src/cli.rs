//! CLI command builders for tests
//!
//! Provides pre-configured command builders with clean environments
//! to prevent log pollution and ensure consistent test execution.

use assert_cmd::Command;

/// Get a Command for the `lens` binary with clean environment
///
/// Pre-configured with `RUST_LOG=error` to suppress INFO/DEBUG logs in
/// tests, and with the workspace env var removed so tests always pass an
/// explicit workspace.
///
/// # Example
///
/// ```rust,no_run
/// use lens_test_helpers::cli::lens_command;
///
/// let output = lens_command()
///     .arg("--version")
///     .assert()
///     .success();
/// ```
pub fn lens_command() -> Command {
    let mut cmd = Command::cargo_bin("lens").expect("Failed to find lens binary");
    cmd.env("RUST_LOG", "error");
    cmd.env_remove("TEXTLENS_WORKSPACE"); // Don't use user's workspace
    cmd
}

/// Get a Command for the `lens_mcp` binary with clean environment
pub fn mcp_command() -> Command {
    let mut cmd = Command::cargo_bin("lens_mcp").expect("Failed to find lens_mcp binary");
    cmd.env("RUST_LOG", "error");
    cmd.env_remove("TEXTLENS_WORKSPACE");
    cmd
}
