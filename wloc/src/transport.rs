//! Transport adapter for the location service.
//!
//! The wire protocol rides a single HTTP POST per lookup. The trait seam
//! exists so the codec and lookup flow can be exercised against a test
//! double without any network access.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::Result;
use crate::constants::{endpoint, timeouts};
use crate::models::LookupError;

/// Carrier for an encoded query.
///
/// One call per lookup, no retries. Every failure is reported as
/// [`LookupError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Posts the encoded query body and returns the raw response body.
    async fn post(&self, body: Vec<u8>) -> Result<Vec<u8>>;
}

/// HTTPS transport talking to the production endpoint.
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    /// Builds a client with the service's header set and timeouts.
    ///
    /// `Accept-Encoding` is left to the client, which negotiates gzip and
    /// deflate and decompresses transparently.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(timeouts::request_timeout())
            .connect_timeout(timeouts::connect_timeout())
            .user_agent(endpoint::USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            url: endpoint::URL.to_string(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, body: Vec<u8>) -> Result<Vec<u8>> {
        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", endpoint::CONTENT_TYPE)
            .header("Accept", endpoint::ACCEPT)
            .header("Accept-Charset", endpoint::ACCEPT_CHARSET)
            .header("Accept-Language", endpoint::ACCEPT_LANGUAGE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Transport(format!(
                "{} returned {status}",
                self.url
            )));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(LookupError::Transport("empty response body".into()));
        }

        debug!("received {} byte response", bytes.len());
        Ok(bytes.to_vec())
    }
}
