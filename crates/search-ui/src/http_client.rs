//! Reqwest-backed registry client.
//!
//! This adapter owns transport details only: URL construction, timeout and
//! HTTP error mapping, and JSON decoding into DTOs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::warn;
use uuid::Uuid;

use crate::client::{ClientError, RegistryClient};
use crate::dto::{ErrorEnvelope, FirearmDto, FirearmsEnvelope, HoldersEnvelope, LicenceHolderDto};

const SEARCH_PATH: &str = "api/licence-holders/search";

/// Request timeout used when the embedding application has no preference.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Registry client performing GET requests against one backend.
#[derive(Debug, Clone)]
pub struct HttpRegistryClient {
    client: Client,
    base_url: Url,
}

impl HttpRegistryClient {
    /// Build a client rooted at `base_url` with an explicit request timeout.
    ///
    /// A base URL with a path prefix is honoured; a trailing slash is added
    /// when missing so relative endpoint paths resolve beneath it.
    ///
    /// ```rust,ignore
    /// let base = Url::parse("http://localhost:8080")?;
    /// let client = HttpRegistryClient::new(base, DEFAULT_REQUEST_TIMEOUT)?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(mut base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::transport(format!("invalid endpoint {path:?}: {err}")))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            let error = map_status_error(status, body.as_ref());
            warn!(status = status.as_u16(), %error, "registry query rejected");
            return Err(error);
        }

        serde_json::from_slice(body.as_ref())
            .map_err(|err| ClientError::decode(format!("invalid registry JSON: {err}")))
    }
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn search_holders(&self, term: &str) -> Result<Vec<LicenceHolderDto>, ClientError> {
        let url = self.endpoint(SEARCH_PATH)?;
        let envelope: HoldersEnvelope = self.get_json(url, &[("q", term)]).await?;
        Ok(envelope.holders)
    }

    async fn list_firearms(&self, holder_id: Uuid) -> Result<Vec<FirearmDto>, ClientError> {
        let url = self.endpoint(&format!("api/licence-holders/{holder_id}/firearms"))?;
        let envelope: FirearmsEnvelope = self.get_json(url, &[]).await?;
        Ok(envelope.firearms)
    }
}

fn map_transport_error(error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::timeout(error.to_string())
    } else {
        ClientError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ClientError {
    if let Ok(ErrorEnvelope { error }) = serde_json::from_slice(body) {
        return ClientError::status(status.as_u16(), error);
    }
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_owned()
    } else {
        preview
    };
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ClientError::timeout(message),
        _ => ClientError::status(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 120;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
