//! Build script for vtb - embeds git commit hash and build info
//!
//! When the `release` feature is NOT set (default dev builds):
//! - Emits `VERGEN_GIT_SHA` environment variable with the commit hash
//! - Emits `VTB_BUILD_DATE` environment variable with the build date
//!
//! When the `release` feature IS set (CI/official builds):
//! - Emits build date only (clean version string without git hash)

use std::process::Command;

/// Repository used when no git remote is available
const FALLBACK_REPO: &str = "vtb-project/video-timeline-browser";

/// Get the current date in YYYY-MM-DD format
fn get_build_date() -> String {
    if let Ok(output) = Command::new("date").args(["+%Y-%m-%d"]).output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    "unknown".to_string()
}

/// Get the repository name in "owner/repo" format from git remote
fn get_repo_name() -> String {
    if let Ok(output) = Command::new("git")
        .args(["remote", "get-url", "origin"])
        .output()
    {
        if output.status.success() {
            let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if let Some(repo) = parse_repo_from_url(&url) {
                return repo;
            }
        }
    }
    FALLBACK_REPO.to_string()
}

/// Parse owner/repo from an HTTPS or SSH remote URL
fn parse_repo_from_url(url: &str) -> Option<String> {
    let url = url.trim_end_matches(".git");

    // https://host/owner/repo
    if let Some(rest) = url.split_once("://").map(|(_, rest)| rest) {
        let path = rest.split_once('/')?.1;
        return (!path.is_empty()).then(|| path.to_string());
    }
    // git@host:owner/repo
    let path = url.split_once(':')?.1;
    (!path.is_empty()).then(|| path.to_string())
}

fn main() {
    println!("cargo:rustc-env=VTB_REPO_NAME={}", get_repo_name());
    println!("cargo:rustc-env=VTB_BUILD_DATE={}", get_build_date());

    // Only emit git SHA when NOT building with --features release
    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let git = match GitclBuilder::default().sha(true).build() {
            Ok(git) => git,
            Err(e) => {
                println!("cargo:warning=Failed to configure git info: {}", e);
                println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
                return;
            }
        };

        if let Err(e) = Emitter::default()
            .add_instructions(&git)
            .and_then(|emitter| emitter.emit())
        {
            // Not in a git checkout (e.g. a source tarball)
            println!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
