//! CLI for fetchlib. Every flag is optional; a bare `fetchlib` fetches the
//! built-in libraries into `lib/`.

mod fetch;

use anyhow::Result;
use clap::Parser;
use fetchlib_core::config::{self, FetchConfig};
use fetchlib_core::LibraryManifest;
use std::path::PathBuf;

use fetch::run_fetch;

/// Download the third-party JavaScript libraries used by the graph viewer.
#[derive(Debug, Parser)]
#[command(name = "fetchlib")]
#[command(about = "Download third-party JavaScript libraries into a local directory", long_about = None)]
pub struct Cli {
    /// Directory to write the libraries into (overrides `target_dir` from the config file).
    #[arg(long, value_name = "DIR")]
    pub target_dir: Option<PathBuf>,

    /// TOML manifest (`[[library]]` tables with `filename` and `url`) to use instead of the built-in list.
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Config file to read instead of `~/.config/fetchlib/config.toml`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let cfg = self.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let manifest = match &self.manifest {
            Some(path) => LibraryManifest::load(path)?,
            None => LibraryManifest::builtin(),
        };
        let target_dir = self.target_dir.unwrap_or_else(|| cfg.target_dir.clone());

        run_fetch(&cfg, &manifest, &target_dir)
    }

    fn load_config(&self) -> Result<FetchConfig> {
        match &self.config {
            Some(path) => config::load(path),
            None => config::load_or_default(),
        }
    }
}
