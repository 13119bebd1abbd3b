//! Blocking page fetch for the drug catalog.
//!
//! One GET per identifier, in input order. Transport errors, non-success
//! statuses, and empty bodies are hard failures; there is no retry policy.

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Base URL the catalog serves drug pages from. Identifiers are appended as
/// the final path segment.
pub const DEFAULT_BASE_URL: &str = "https://go.drugbank.com/drugs/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches raw drug-page HTML by catalog identifier.
#[derive(Debug)]
pub struct Fetcher {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl Fetcher {
    /// Fetcher against the live catalog.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Fetcher against an alternate base URL. The URL must end with a slash
    /// for identifiers to join as a path segment.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: reqwest::blocking::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()?,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Fetch the raw HTML for one identifier's page.
    pub fn fetch(&self, identifier: &str) -> Result<String> {
        let url = self.base_url.join(identifier)?;
        tracing::debug!(%url, "fetching drug page");

        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .text()?;

        if body.trim().is_empty() {
            return Err(Error::EmptyDocument(identifier.to_string()));
        }
        Ok(body)
    }
}
