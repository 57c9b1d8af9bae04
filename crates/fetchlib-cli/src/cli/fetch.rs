//! The fetch command: run the fetcher with curl and print progress to stdout.

use anyhow::{Context, Result};
use fetchlib_core::config::FetchConfig;
use fetchlib_core::http::{CurlClient, CurlOptions};
use fetchlib_core::{Fetcher, LibraryManifest};
use std::io;
use std::path::Path;

/// Fetch every manifest entry into `target_dir`.
///
/// Per-item failures are printed and do not fail the command; only target
/// directory setup does.
pub fn run_fetch(cfg: &FetchConfig, manifest: &LibraryManifest, target_dir: &Path) -> Result<()> {
    let fetcher = Fetcher::new(CurlClient::new(CurlOptions::from(cfg)));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = fetcher
        .run(manifest, target_dir, &mut out)
        .context("cannot prepare target directory")?;

    if report.failed() > 0 {
        tracing::warn!(
            "{} of {} libraries failed to download",
            report.failed(),
            report.items.len()
        );
    }
    Ok(())
}
