//! HTTP client for the prime search endpoints.

use std::time::Duration;

use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use super::{ApiResponse, Endpoint};
use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::input::RequestNumber;
use crate::{debug_event, log_event};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const BODY_PREVIEW_LEN: usize = 120;

/// Posts `n=<value>` to an endpoint and decodes the JSON reply.
///
/// The HTTP status is not inspected: the server reports application
/// failures as `400` with a JSON body, and those are ordinary replies here.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|source| ClientError::Transport {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self { base_url, http })
    }

    /// Client for `base_url` with no timeout.
    pub fn with_base_url(base_url: &str) -> ClientResult<Self> {
        Self::new(&ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: None,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> ClientResult<Url> {
        self.base_url
            .join(endpoint.path())
            .map_err(|e| ClientError::InvalidUrl {
                url: format!("{}{}", self.base_url, endpoint.path()),
                reason: e.to_string(),
            })
    }

    pub async fn nth_prime(&self, n: &RequestNumber) -> ClientResult<ApiResponse> {
        self.fetch(Endpoint::NthPrime, n).await
    }

    pub async fn prime_count(&self, n: &RequestNumber) -> ClientResult<ApiResponse> {
        self.fetch(Endpoint::PrimeCount, n).await
    }

    /// Send one request. No retry.
    pub async fn fetch(&self, endpoint: Endpoint, n: &RequestNumber) -> ClientResult<ApiResponse> {
        let url = self.endpoint_url(endpoint)?;
        let body = encode_body(n)?;
        debug_event!("api", "post", "{url} body={body}");

        let transport = |source: reqwest::Error| ClientError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(&transport)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(&transport)?;
        log_event!("api", "reply", "{endpoint} HTTP {status}, {} bytes", bytes.len());

        let value: Value = serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
            url: url.to_string(),
            preview: preview(&bytes),
            source,
        })?;

        if value.is_null() {
            return Err(ClientError::NullReply {
                url: url.to_string(),
            });
        }

        Ok(ApiResponse::from_value(value))
    }
}

/// The whole request body: a single form field `n`.
pub fn encode_body(n: &RequestNumber) -> ClientResult<String> {
    Ok(serde_urlencoded::to_string([("n", n.to_string())])?)
}

/// Parse the base URL, making sure endpoint paths are joined under it rather than beside it.
fn parse_base_url(raw: &str) -> ClientResult<Url> {
    let mut url = Url::parse(raw).map_err(|e| ClientError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl {
            url: raw.to_string(),
            reason: "cannot be used as a base".to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

fn preview(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.char_indices().nth(BODY_PREVIEW_LEN) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.into_owned(),
    }
}
