//! Blocking HTTP GET over libcurl.
//!
//! One `Easy` handle per request, dropped when the request ends. The whole body
//! is buffered in memory; callers only get bytes when the transfer finished with
//! a 2xx status.

use crate::config::FetchConfig;
use std::time::Duration;
use thiserror::Error;

/// Transport or status failure for a single GET.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connect refused, timeout, read error, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Final response (after redirects) had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

/// Fetches the full body of a URL.
pub trait HttpClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).get(url)
    }
}

/// Curl knobs taken from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurlOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub max_redirections: u32,
}

impl From<&FetchConfig> for CurlOptions {
    fn from(cfg: &FetchConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.timeout(),
            max_redirections: cfg.max_redirections,
        }
    }
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self::from(&FetchConfig::default())
    }
}

/// Production client backed by the `curl` crate.
#[derive(Debug, Clone, Default)]
pub struct CurlClient {
    options: CurlOptions,
}

impl CurlClient {
    pub fn new(options: CurlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> CurlOptions {
        self.options
    }
}

impl HttpClient for CurlClient {
    /// Plain GET, following redirects; no custom headers.
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.options.max_redirections)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        easy.timeout(self.options.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !is_success(code) {
            return Err(FetchError::Http(code));
        }
        Ok(body)
    }
}

fn is_success(code: u32) -> bool {
    (200..300).contains(&code)
}
