//! The list of libraries to fetch: filename in the target directory → source URL.
//!
//! The built-in manifest is compiled in. An alternative can be read from a TOML
//! file; both go through the same validation (unique, single-segment filenames
//! and absolute http(s) URLs).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Built-in manifest, in fetch order.
static BUILTIN_LIBRARIES: &[(&str, &str)] = &[
    (
        "cytoscape.min.js",
        "https://cdnjs.cloudflare.com/ajax/libs/cytoscape/3.23.0/cytoscape.min.js",
    ),
    (
        "dagre.min.js",
        "https://unpkg.com/dagre@0.8.5/dist/dagre.min.js",
    ),
    (
        "cytoscape-dagre.js",
        "https://unpkg.com/cytoscape-dagre@2.3.2/dist/cytoscape-dagre.umd.js",
    ),
];

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid manifest file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate filename in manifest: {0}")]
    DuplicateFilename(String),
    #[error("invalid filename {filename:?}: {reason}")]
    InvalidFilename {
        filename: String,
        reason: &'static str,
    },
    #[error("invalid url {url:?} for {filename}: {reason}")]
    InvalidUrl {
        filename: String,
        url: String,
        reason: String,
    },
}

/// One manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// File name inside the target directory (a single path segment).
    pub filename: String,
    /// Absolute http(s) URL the file is fetched from.
    pub url: String,
}

impl Library {
    pub fn new(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            url: url.into(),
        }
    }
}

/// On-disk form: a list of `[[library]]` tables.
#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default, rename = "library")]
    libraries: Vec<Library>,
}

/// Validated, ordered manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryManifest {
    libraries: Vec<Library>,
}

impl LibraryManifest {
    /// Build a manifest, rejecting duplicate or unsafe filenames and non-http(s) URLs.
    pub fn new(libraries: Vec<Library>) -> Result<Self, ManifestError> {
        let mut seen = HashSet::new();
        for lib in &libraries {
            validate_filename(&lib.filename).map_err(|reason| ManifestError::InvalidFilename {
                filename: lib.filename.clone(),
                reason,
            })?;
            validate_url(&lib.url).map_err(|reason| ManifestError::InvalidUrl {
                filename: lib.filename.clone(),
                url: lib.url.clone(),
                reason,
            })?;
            if !seen.insert(lib.filename.as_str()) {
                return Err(ManifestError::DuplicateFilename(lib.filename.clone()));
            }
        }
        Ok(Self { libraries })
    }

    /// The compiled-in manifest.
    pub fn builtin() -> Self {
        Self {
            libraries: BUILTIN_LIBRARIES
                .iter()
                .map(|(filename, url)| Library::new(*filename, *url))
                .collect(),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ManifestError> {
        let file: ManifestFile = toml::from_str(s)?;
        Self::new(file.libraries)
    }

    /// Read and validate a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("read manifest {}", path.display()))?;
        let manifest = Self::from_toml_str(&data)
            .with_context(|| format!("load manifest {}", path.display()))?;
        tracing::debug!(
            "loaded {} libraries from {}",
            manifest.len(),
            path.display()
        );
        Ok(manifest)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Library> {
        self.libraries.iter()
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

impl Default for LibraryManifest {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_filename(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("empty");
    }
    if name == "." || name == ".." {
        return Err("reserved name");
    }
    if name.len() > NAME_MAX {
        return Err("longer than 255 bytes");
    }
    if name.chars().any(|c| c == '/' || c == '\\') {
        return Err("must be a single path segment");
    }
    if name.chars().any(|c| c == '\0' || c.is_control()) {
        return Err("contains control characters");
    }
    Ok(())
}

fn validate_url(raw: &str) -> Result<(), String> {
    let parsed = url::Url::parse(raw).map_err(|e| e.to_string())?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme {other:?}")),
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err("missing host".to_string());
    }
    Ok(())
}
