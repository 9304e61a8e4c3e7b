//! A Rust client for resolving Wi-Fi BSSIDs to coordinates.
//!
//! This crate asks Apple's location service where an access point is,
//! speaking the service's binary wire protocol directly:
//!
//! - Validating and normalizing BSSIDs
//! - Encoding the query body and decoding the framed response
//! - One timeout-bounded HTTPS POST per lookup, never retried
//! - Picking the queried access point out of the result set
//!
//! # Example
//!
//! ```no_run
//! use wloc::WifiLocator;
//!
//! # async fn example() -> wloc::Result<()> {
//! let locator = WifiLocator::new()?;
//! let coords = locator.lookup("aa:bb:cc:dd:ee:ff").await?;
//! println!("{:.6}, {:.6}", coords.latitude, coords.longitude);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, LookupError>`: `InvalidFormat` for
//! bad input (rejected before any network activity), `Transport` for a
//! failed HTTP attempt, `Decode` for a malformed response, and `NotFound`
//! when the service has no location for the address. Every failure is
//! terminal for the current lookup; a caller retries by looking up again.
//!
//! # Testing without a network
//!
//! The codec ([`encode`], [`decode`], [`select`]) is pure, and the HTTP
//! layer sits behind the [`Transport`] trait, so the whole lookup flow
//! can run against a test double.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade. To see log
//! output, install a logging implementation such as `env_logger`.

// Internal implementation modules
mod wire;

// Public API modules
pub mod constants;
pub mod decode;
pub mod encode;
pub mod locator;
pub mod maps;
pub mod models;
pub mod select;
pub mod transport;

// Re-exported public API
pub use locator::WifiLocator;
pub use models::{AccessPointObservation, Coordinates, LookupError, LookupRequest, MacAddress};
pub use transport::{HttpTransport, Transport};

/// A specialized `Result` type for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
