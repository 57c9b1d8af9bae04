//! The fetch run: ensure the target directory, then GET and write each manifest
//! entry in order.
//!
//! Only target-directory setup can fail the run. Every per-item failure is
//! printed, logged and recorded in the report, and the loop moves on.

use crate::error::{ItemError, SetupError};
use crate::http::HttpClient;
use crate::manifest::{Library, LibraryManifest};
use crate::storage;
use std::io::Write;
use std::path::Path;

/// Result of one manifest entry.
#[derive(Debug)]
pub enum DownloadOutcome {
    /// Body fetched and written; `bytes` is the body length.
    Success { bytes: u64 },
    Failure(ItemError),
}

impl DownloadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DownloadOutcome::Success { .. })
    }
}

/// Outcomes of a run, in manifest order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub items: Vec<(String, DownloadOutcome)>,
}

impl RunReport {
    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|(_, o)| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }

    pub fn outcome(&self, filename: &str) -> Option<&DownloadOutcome> {
        self.items
            .iter()
            .find(|(name, _)| name == filename)
            .map(|(_, o)| o)
    }
}

pub struct Fetcher<C> {
    client: C,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetch every entry of `manifest` into `target_dir`, printing progress lines to `out`.
    ///
    /// Returns `SetupError` (before any request) if `target_dir` can't be created.
    /// Console write errors are ignored.
    pub fn run<W: Write>(
        &self,
        manifest: &LibraryManifest,
        target_dir: &Path,
        out: &mut W,
    ) -> Result<RunReport, SetupError> {
        storage::ensure_target_dir(target_dir)?;
        tracing::info!(
            target_dir = %target_dir.display(),
            libraries = manifest.len(),
            "starting library fetch"
        );

        let _ = writeln!(out, "Downloading libraries...");

        let mut report = RunReport::default();
        for lib in manifest.iter() {
            let _ = writeln!(out, "Downloading {} from {}...", lib.filename, lib.url);
            tracing::debug!(filename = %lib.filename, url = %lib.url, "downloading");

            let outcome = match self.fetch_one(lib, target_dir) {
                Ok(bytes) => {
                    let _ = writeln!(out, "✓ {} downloaded successfully", lib.filename);
                    tracing::info!(filename = %lib.filename, bytes, "downloaded");
                    DownloadOutcome::Success { bytes }
                }
                Err(err) => {
                    let _ = writeln!(out, "✗ Error downloading {}: {}", lib.filename, err);
                    tracing::warn!(filename = %lib.filename, url = %lib.url, "download failed: {:#}", err);
                    DownloadOutcome::Failure(err)
                }
            };
            report.items.push((lib.filename.clone(), outcome));
        }

        let _ = writeln!(out, "Done!");
        let _ = out.flush();
        tracing::info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            "library fetch finished"
        );
        Ok(report)
    }

    fn fetch_one(&self, lib: &Library, target_dir: &Path) -> Result<u64, ItemError> {
        let body = self.client.get(&lib.url)?;
        storage::write_library(target_dir, &lib.filename, &body)?;
        Ok(body.len() as u64)
    }
}
