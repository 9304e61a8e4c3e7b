use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{coord, query};

/// A Wi-Fi hardware address (BSSID): six octets.
///
/// Parsing is strict: exactly six colon-separated two-digit hexadecimal
/// groups, case-insensitive. `Display` renders the canonical lowercase
/// form (`aa:bb:cc:dd:ee:ff`), which is also the form carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Builds an address from its six octets.
    pub fn from_octets(octets: [u8; 6]) -> Self {
        MacAddress(octets)
    }

    /// The six octets of the address.
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Parses vendor-formatted BSSID text, which may strip leading zeros
    /// from each group (`0:1b:63:...`). Still requires six groups of one
    /// or two hex digits.
    pub(crate) fn parse_lenient(s: &str) -> Option<Self> {
        let mut octets = [0u8; 6];
        let mut count = 0;
        for group in s.split(':') {
            if count == 6
                || group.is_empty()
                || group.len() > 2
                || !group.bytes().all(|b| b.is_ascii_hexdigit())
            {
                return None;
            }
            octets[count] = u8::from_str_radix(group, 16).ok()?;
            count += 1;
        }
        (count == 6).then_some(MacAddress(octets))
    }
}

impl FromStr for MacAddress {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 6];
        let mut groups = s.split(':');
        for slot in &mut octets {
            let group = groups.next().ok_or(LookupError::InvalidFormat)?;
            if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(LookupError::InvalidFormat);
            }
            *slot = u8::from_str_radix(group, 16).map_err(|_| LookupError::InvalidFormat)?;
        }
        if groups.next().is_some() {
            return Err(LookupError::InvalidFormat);
        }
        Ok(MacAddress(octets))
    }
}

impl Display for MacAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let o = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            o[0], o[1], o[2], o[3], o[4], o[5]
        )
    }
}

/// A single location query, created fresh per lookup.
///
/// The identifier fields default to the values the service expects from a
/// stock client; they are public so a caller may present different ones.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    /// The access point being located.
    pub bssid: MacAddress,
    /// Locale tag sent in the query header.
    pub locale: String,
    /// Client identifier sent in the query header.
    pub client_id: String,
    /// Client version string sent in the query header.
    pub client_version: String,
}

impl LookupRequest {
    /// Builds a request for `bssid` with the stock client identifiers.
    pub fn new(bssid: MacAddress) -> Self {
        Self {
            bssid,
            locale: query::LOCALE.to_string(),
            client_id: query::CLIENT_ID.to_string(),
            client_version: query::CLIENT_VERSION.to_string(),
        }
    }
}

/// One access point reported in a response.
///
/// Coordinates are kept in the vendor's raw fixed-point form; use
/// [`coordinates`](Self::coordinates) for degrees. A record the service
/// could not place carries the unknown-location sentinel instead of a
/// position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessPointObservation {
    /// Reported BSSID in canonical lowercase form.
    pub bssid: String,
    /// Latitude as a fixed-point integer (degrees × 10^7).
    pub latitude: i64,
    /// Longitude as a fixed-point integer (degrees × 10^7).
    pub longitude: i64,
    /// Horizontal accuracy, if reported.
    pub horizontal_accuracy: Option<i64>,
    /// Altitude, if reported.
    pub altitude: Option<i64>,
    /// Vertical accuracy, if reported.
    pub vertical_accuracy: Option<i64>,
}

impl AccessPointObservation {
    /// Whether the record carries the unknown-location sentinel.
    pub fn is_unresolved(&self) -> bool {
        self.latitude == coord::UNKNOWN && self.longitude == coord::UNKNOWN
    }

    /// The position in floating-point degrees, or `None` for an
    /// unresolved record.
    pub fn coordinates(&self) -> Option<Coordinates> {
        if self.is_unresolved() {
            return None;
        }
        let scale = coord::DEGREE_SCALE as f64;
        Some(Coordinates {
            latitude: self.latitude as f64 / scale,
            longitude: self.longitude as f64 / scale,
        })
    }
}

/// A resolved position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Errors that can occur during a lookup.
///
/// Every variant is terminal for the current lookup; nothing is retried
/// automatically. A caller retries by issuing a fresh lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The supplied BSSID is not six colon-separated hex octets.
    #[error("invalid BSSID format (expected xx:xx:xx:xx:xx:xx)")]
    InvalidFormat,

    /// The request could not be sent, returned a non-success status, or
    /// carried no body.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response bytes do not match the expected wire layout.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The response holds no resolvable location for the queried BSSID.
    #[error("no location found for this BSSID")]
    NotFound,
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Transport(err.to_string())
    }
}
