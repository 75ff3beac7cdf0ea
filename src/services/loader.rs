// src/services/loader.rs

//! Content document loading with ordered fallback.
//!
//! Candidate locations are tried one after another, never concurrently, and
//! each at most once. The first location that answers with a success status
//! and a JSON body wins.

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Config, ContentDocument};
use crate::utils::http;

/// Something that can produce a parsed JSON document for a location.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch and parse the document at `location`.
    async fn fetch_document(&self, location: &str) -> Result<Value>;
}

/// Default source: HTTP(S) URLs over the network, everything else from disk.
#[derive(Debug, Clone)]
pub struct ContentFetcher {
    client: Client,
}

impl ContentFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a fetcher with the configured HTTP client.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(http::create_async_client(&config.http)?))
    }

    async fn fetch_http(&self, url: &Url) -> Result<Value> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::status(url.as_str(), status.as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_file(&self, path: PathBuf) -> Result<Value> {
        let bytes = tokio::fs::read(&path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ContentSource for ContentFetcher {
    async fn fetch_document(&self, location: &str) -> Result<Value> {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => self.fetch_http(&url).await,
            Ok(url) if url.scheme() == "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| AppError::config(format!("Invalid file URL: {location}")))?;
                self.fetch_file(path).await
            }
            _ => self.fetch_file(PathBuf::from(location)).await,
        }
    }
}

/// Loads the content document from an ordered list of locations.
pub struct ContentLoader<S = ContentFetcher> {
    source: S,
    locations: Vec<String>,
}

impl ContentLoader<ContentFetcher> {
    /// Loader for the configured primary and fallback locations.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(ContentFetcher::from_config(config)?, config.sources()?))
    }
}

impl<S: ContentSource> ContentLoader<S> {
    pub fn new(source: S, locations: Vec<String>) -> Self {
        let locations = locations.into_iter().filter(|l| !l.is_empty()).collect();
        Self { source, locations }
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Try every location in order and normalize the first document found.
    ///
    /// A `null` body counts as a failed location. Returns
    /// [`AppError::Unavailable`] when every location fails.
    pub async fn load(&self) -> Result<ContentDocument> {
        for location in &self.locations {
            match self.source.fetch_document(location).await {
                Ok(Value::Null) => log::warn!("Failed to load from {}: document is null", location),
                Ok(root) => {
                    let document = ContentDocument::from_value(&root);
                    log::info!(
                        "Loaded content from {}: {} projects, {} skills, {} connections, {} badges",
                        location,
                        document.projects.len(),
                        document.skills.len(),
                        document.connections.len(),
                        document.badges.len()
                    );
                    return Ok(document);
                }
                Err(e) => log::warn!("Failed to load from {}: {}", location, e),
            }
        }
        Err(AppError::Unavailable {
            attempted: self.locations.len(),
        })
    }
}
