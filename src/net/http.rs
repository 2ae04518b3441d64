use super::loader::LoadError;
use bytes::Bytes;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    const USER_AGENT: &'static str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));
    const TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new() -> Result<Self, LoadError> {
        let client = Client::builder()
            .user_agent(Self::USER_AGENT)
            .timeout(Self::TIMEOUT)
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` and return the raw body. Non-success statuses are errors.
    pub async fn get_bytes(&self, url: &Url) -> Result<Bytes, LoadError> {
        log::info!("Fetching: {}", url);
        let response = self.client
            .get(url.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::info!("Response: status={} for {}", status, url);
            return Err(LoadError::Status(status));
        }

        let bytes = response.bytes().await?;
        log::info!("Received {} bytes", bytes.len());

        Ok(bytes)
    }
}
