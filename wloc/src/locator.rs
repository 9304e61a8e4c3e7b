use crate::Result;
use crate::decode::decode_response;
use crate::encode::encode_request;
use crate::models::{Coordinates, LookupRequest, MacAddress};
use crate::select::select_coordinates;
use crate::transport::{HttpTransport, Transport};

/// High-level interface to the location service.
///
/// Validates a BSSID, encodes the query, posts it, and picks the matching
/// coordinates out of the response. Each lookup is self-contained: the
/// locator keeps no state between calls and may be shared across tasks.
pub struct WifiLocator {
    transport: Box<dyn Transport>,
}

impl WifiLocator {
    /// Creates a locator backed by the HTTPS transport.
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(Box::new(HttpTransport::new()?)))
    }

    /// Creates a locator over a custom transport (e.g. a test double).
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Resolves a BSSID to coordinates.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidFormat` for a malformed BSSID (before
    /// any network activity), `Transport` if the single HTTP attempt
    /// fails, `Decode` for a malformed response, and `NotFound` when the
    /// service has no location for the address.
    pub async fn lookup(&self, bssid: &str) -> Result<Coordinates> {
        let target: MacAddress = bssid.trim().parse()?;
        let request = LookupRequest::new(target);
        let body = encode_request(&request);
        let raw = self.transport.post(body).await?;
        let observations = decode_response(&raw)?;
        select_coordinates(&observations, &target)
    }
}
