pub mod config;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod logging;
pub mod manifest;
pub mod storage;

pub use fetcher::{DownloadOutcome, Fetcher, RunReport};
pub use manifest::{Library, LibraryManifest};
