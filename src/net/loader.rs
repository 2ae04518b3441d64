use super::cache::Cache;
use super::http::HttpClient;
use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(StatusCode),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Not a base URL: {0}")]
    NotABase(String),
    #[error("Invalid resource name: {0:?}")]
    InvalidName(String),
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Cache-first fetcher for catalog resources.
pub struct Loader {
    http_client: HttpClient,
    cache: Cache,
}

impl Loader {
    pub fn new(cache: Cache) -> Result<Self, LoadError> {
        Ok(Self {
            http_client: HttpClient::new()?,
            cache,
        })
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Return the body for `url`, from the cache when present, otherwise
    /// from the network. Successful network responses are cached.
    pub async fn fetch_bytes(&self, url: &Url) -> Result<Bytes, LoadError> {
        if let Some(body) = self.cache.lookup(url.as_str()) {
            log::debug!("Cache hit: {}", url);
            return Ok(body);
        }

        log::debug!("Cache miss: {}", url);
        let body = self.http_client.get_bytes(url).await?;
        self.cache.insert(url.as_str(), body.clone());

        Ok(body)
    }

    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, LoadError> {
        let body = self.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
