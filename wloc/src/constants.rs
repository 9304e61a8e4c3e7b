//! Constants for the location service's wire protocol.
//!
//! The protocol is reverse-engineered, so every layout-bearing value —
//! header fields, framed field numbers, the coordinate scale, the
//! unknown-location sentinel — lives here as a versioned table. A vendor
//! change should be a one-line edit in this file.

/// Service endpoint and HTTP header values.
pub mod endpoint {
    pub const URL: &str = "https://gs-loc.apple.com/clls/wloc";

    pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
    pub const ACCEPT: &str = "*/*";
    pub const ACCEPT_CHARSET: &str = "utf-8";
    pub const ACCEPT_LANGUAGE: &str = "en-us";
    pub const USER_AGENT: &str = "locationd/1753.17 CFNetwork/711.1.12 Darwin/14.0.0";
}

/// Query header fields and fixed values.
pub mod query {
    pub const FORMAT_VERSION: u16 = 1;
    pub const LOCALE: &str = "en_US";
    pub const CLIENT_ID: &str = "com.apple.locationd";
    pub const CLIENT_VERSION: &str = "8.1.12B411";
    /// Fixed bytes between the header strings and the payload length.
    pub const TRAILER: [u8; 7] = [0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00];
    /// Noise value sent with the queried BSSID.
    pub const NOISE: u64 = 0;
    /// Signal value sent with the queried BSSID.
    pub const SIGNAL: u64 = 1;
}

/// Response framing.
pub mod response {
    /// Fixed-size header preceding the framed result set.
    pub const HEADER_LEN: usize = 10;
}

/// Field numbers inside the framed payloads.
pub mod fields {
    /// Access-point record (repeated in responses).
    pub const ACCESS_POINT: u32 = 2;
    /// BSSID text inside an access-point record.
    pub const AP_BSSID: u32 = 1;
    /// Position sub-record inside an access-point record.
    pub const AP_POSITION: u32 = 2;
    /// Top-level noise value in a query.
    pub const NOISE: u32 = 3;
    /// Top-level signal value in a query.
    pub const SIGNAL: u32 = 4;

    /// Position sub-record fields.
    pub const POS_LATITUDE: u32 = 1;
    pub const POS_LONGITUDE: u32 = 2;
    pub const POS_HORIZONTAL_ACCURACY: u32 = 3;
    pub const POS_ALTITUDE: u32 = 5;
    pub const POS_VERTICAL_ACCURACY: u32 = 6;
}

/// Coordinate encoding.
pub mod coord {
    /// Fixed-point scale: degrees × 10^7.
    pub const DEGREE_SCALE: i64 = 10_000_000;
    /// Raw value reported in both coordinates when the service has no
    /// location for a BSSID. Out of range under any plausible scale.
    pub const UNKNOWN: i64 = 18_000_000_000;
}

/// Timeout constants (one attempt per lookup, never retried).
pub mod timeouts {
    use std::time::Duration;

    pub const REQUEST_TIMEOUT_SECS: u64 = 15;
    pub const CONNECT_TIMEOUT_SECS: u64 = 4;

    pub fn request_timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }

    pub fn connect_timeout() -> Duration {
        Duration::from_secs(CONNECT_TIMEOUT_SECS)
    }
}

/// Map presentation values.
pub mod map {
    pub const MIN_ZOOM: u8 = 1;
    pub const MAX_ZOOM: u8 = 20;
    pub const DEFAULT_ZOOM: u8 = 15;
    pub const TILE_SIZE: u32 = 256;
    pub const TILE_SERVERS: [&str; 3] = [
        "a.tile.openstreetmap.org",
        "b.tile.openstreetmap.org",
        "c.tile.openstreetmap.org",
    ];
    /// Web-mercator latitude limit.
    pub const LATITUDE_LIMIT: f64 = 85.051_128_78;
}
