//! Query encoding.
//!
//! A query body is a fixed header carrying the client identifiers,
//! followed by a one-byte payload length and a framed payload naming the
//! BSSID of interest. Field order and the header layout are load-bearing:
//! the service matches them byte-for-byte.

use log::debug;

use crate::constants::{fields, query};
use crate::models::LookupRequest;
use crate::wire::{put_len_field, put_varint_field};

/// Appends a big-endian `u16`-length-prefixed string.
fn put_short_string(out: &mut Vec<u8>, value: &str) {
    out.extend_from_slice(&(value.len() as u16).to_be_bytes());
    out.extend_from_slice(value.as_bytes());
}

/// Builds the framed payload naming the target BSSID.
fn build_query_payload(request: &LookupRequest) -> Vec<u8> {
    let mut record = Vec::new();
    put_len_field(
        &mut record,
        fields::AP_BSSID,
        request.bssid.to_string().as_bytes(),
    );

    let mut payload = Vec::new();
    put_len_field(&mut payload, fields::ACCESS_POINT, &record);
    put_varint_field(&mut payload, fields::NOISE, query::NOISE);
    put_varint_field(&mut payload, fields::SIGNAL, query::SIGNAL);
    payload
}

/// Serializes a lookup request into the service's query body.
///
/// Identical requests always produce identical bytes. Infallible: the
/// only malformed input (a bad BSSID) is unrepresentable in a
/// [`LookupRequest`].
pub fn encode_request(request: &LookupRequest) -> Vec<u8> {
    let payload = build_query_payload(request);

    let mut body = Vec::with_capacity(64 + payload.len());
    body.extend_from_slice(&query::FORMAT_VERSION.to_be_bytes());
    put_short_string(&mut body, &request.locale);
    put_short_string(&mut body, &request.client_id);
    put_short_string(&mut body, &request.client_version);
    body.extend_from_slice(&query::TRAILER);
    body.push(payload.len() as u8);
    body.extend_from_slice(&payload);

    debug!("encoded {} byte query for {}", body.len(), request.bssid);
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacAddress;

    fn request(bssid: &str) -> LookupRequest {
        LookupRequest::new(bssid.parse::<MacAddress>().unwrap())
    }

    #[test]
    fn payload_matches_known_layout() {
        let payload = build_query_payload(&request("aa:bb:cc:dd:ee:ff"));
        let mut expected = vec![0x12, 0x13, 0x0a, 0x11];
        expected.extend_from_slice(b"aa:bb:cc:dd:ee:ff");
        expected.extend_from_slice(&[0x18, 0x00, 0x20, 0x01]);
        assert_eq!(payload, expected);
    }

    #[test]
    fn encoding_is_deterministic() {
        let req = request("aa:bb:cc:dd:ee:ff");
        assert_eq!(encode_request(&req), encode_request(&req));
    }

    #[test]
    fn bssid_case_does_not_change_the_bytes() {
        assert_eq!(
            encode_request(&request("AA:BB:CC:DD:EE:FF")),
            encode_request(&request("aa:bb:cc:dd:ee:ff"))
        );
    }

    #[test]
    fn different_bssids_produce_different_bytes() {
        assert_ne!(
            encode_request(&request("aa:bb:cc:dd:ee:ff")),
            encode_request(&request("aa:bb:cc:dd:ee:fe"))
        );
    }
}
