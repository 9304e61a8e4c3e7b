//! Response decoding.
//!
//! A response mirrors the query shape: a fixed header, then a framed
//! result set of access-point records. Decoding is strict — a truncated
//! or malformed record aborts the whole decode rather than yielding a
//! partial list. Unknown fields are skipped by wire shape.

use log::debug;

use crate::Result;
use crate::constants::{coord, fields, response};
use crate::models::{AccessPointObservation, LookupError, MacAddress};
use crate::wire::{Reader, WireType};

/// Raw position sub-record. Defaults to the unknown-location sentinel so
/// a record the service could not place decodes as unresolved.
#[derive(Debug, Clone, Copy)]
struct Position {
    latitude: i64,
    longitude: i64,
    horizontal_accuracy: Option<i64>,
    altitude: Option<i64>,
    vertical_accuracy: Option<i64>,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            latitude: coord::UNKNOWN,
            longitude: coord::UNKNOWN,
            horizontal_accuracy: None,
            altitude: None,
            vertical_accuracy: None,
        }
    }
}

fn decode_position(bytes: &[u8]) -> Result<Position> {
    let mut reader = Reader::new(bytes);
    let mut position = Position::default();
    while !reader.is_empty() {
        let (field, wire) = reader.read_tag()?;
        match (field, wire) {
            (fields::POS_LATITUDE, WireType::Varint) => {
                position.latitude = reader.read_varint()? as i64;
            }
            (fields::POS_LONGITUDE, WireType::Varint) => {
                position.longitude = reader.read_varint()? as i64;
            }
            (fields::POS_HORIZONTAL_ACCURACY, WireType::Varint) => {
                position.horizontal_accuracy = Some(reader.read_varint()? as i64);
            }
            (fields::POS_ALTITUDE, WireType::Varint) => {
                position.altitude = Some(reader.read_varint()? as i64);
            }
            (fields::POS_VERTICAL_ACCURACY, WireType::Varint) => {
                position.vertical_accuracy = Some(reader.read_varint()? as i64);
            }
            (_, wire) => reader.skip(wire)?,
        }
    }
    Ok(position)
}

fn decode_access_point(bytes: &[u8]) -> Result<AccessPointObservation> {
    let mut reader = Reader::new(bytes);
    let mut bssid: Option<MacAddress> = None;
    let mut position = Position::default();
    while !reader.is_empty() {
        let (field, wire) = reader.read_tag()?;
        match (field, wire) {
            (fields::AP_BSSID, WireType::LengthDelimited) => {
                let text = std::str::from_utf8(reader.read_bytes()?)
                    .map_err(|e| LookupError::Decode(format!("BSSID is not UTF-8: {e}")))?;
                // The service strips leading zeros from BSSID groups.
                bssid = Some(MacAddress::parse_lenient(text).ok_or_else(|| {
                    LookupError::Decode(format!("unparseable BSSID {text:?}"))
                })?);
            }
            (fields::AP_POSITION, WireType::LengthDelimited) => {
                position = decode_position(reader.read_bytes()?)?;
            }
            (_, wire) => reader.skip(wire)?,
        }
    }
    let bssid =
        bssid.ok_or_else(|| LookupError::Decode("access-point record without a BSSID".into()))?;
    Ok(AccessPointObservation {
        bssid: bssid.to_string(),
        latitude: position.latitude,
        longitude: position.longitude,
        horizontal_accuracy: position.horizontal_accuracy,
        altitude: position.altitude,
        vertical_accuracy: position.vertical_accuracy,
    })
}

/// Decodes a raw response body into access-point observations.
///
/// Strips the fixed response header, then reads zero or more access-point
/// records. Anything structurally wrong — a body shorter than the header,
/// a bad wire type, a length prefix past the end — is [`LookupError::Decode`].
pub fn decode_response(raw: &[u8]) -> Result<Vec<AccessPointObservation>> {
    if raw.len() < response::HEADER_LEN {
        return Err(LookupError::Decode(format!(
            "response shorter than its {} byte header",
            response::HEADER_LEN
        )));
    }

    let mut reader = Reader::new(&raw[response::HEADER_LEN..]);
    let mut observations = Vec::new();
    while !reader.is_empty() {
        let (field, wire) = reader.read_tag()?;
        match (field, wire) {
            (fields::ACCESS_POINT, WireType::LengthDelimited) => {
                observations.push(decode_access_point(reader.read_bytes()?)?);
            }
            (_, wire) => reader.skip(wire)?,
        }
    }

    debug!("decoded {} access point(s)", observations.len());
    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{put_len_field, put_varint_field};

    fn position_record(lat: i64, lon: i64) -> Vec<u8> {
        let mut pos = Vec::new();
        put_varint_field(&mut pos, fields::POS_LATITUDE, lat as u64);
        put_varint_field(&mut pos, fields::POS_LONGITUDE, lon as u64);
        pos
    }

    fn access_point(bssid: &str, lat: i64, lon: i64) -> Vec<u8> {
        let mut record = Vec::new();
        put_len_field(&mut record, fields::AP_BSSID, bssid.as_bytes());
        put_len_field(&mut record, fields::AP_POSITION, &position_record(lat, lon));
        record
    }

    fn response_of(records: &[Vec<u8>]) -> Vec<u8> {
        let mut body = vec![0u8; response::HEADER_LEN];
        for record in records {
            put_len_field(&mut body, fields::ACCESS_POINT, record);
        }
        body
    }

    #[test]
    fn decodes_one_record() {
        let raw = response_of(&[access_point("aa:bb:cc:dd:ee:ff", 378_097_000, -1_224_098_000)]);
        let observations = decode_response(&raw).unwrap();
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].bssid, "aa:bb:cc:dd:ee:ff");
        assert_eq!(observations[0].latitude, 378_097_000);
        assert_eq!(observations[0].longitude, -1_224_098_000);
    }

    #[test]
    fn normalizes_zero_stripped_bssids() {
        let raw = response_of(&[access_point("0:1b:63:4:5:f", 1, 2)]);
        let observations = decode_response(&raw).unwrap();
        assert_eq!(observations[0].bssid, "00:1b:63:04:05:0f");
    }

    #[test]
    fn empty_result_set_decodes_to_no_observations() {
        let raw = response_of(&[]);
        assert!(decode_response(&raw).unwrap().is_empty());
    }

    #[test]
    fn record_without_position_is_unresolved() {
        let mut record = Vec::new();
        put_len_field(&mut record, fields::AP_BSSID, b"aa:bb:cc:dd:ee:ff");
        let observations = decode_response(&response_of(&[record])).unwrap();
        assert!(observations[0].is_unresolved());
    }

    #[test]
    fn record_without_bssid_is_malformed() {
        let mut record = Vec::new();
        put_len_field(&mut record, fields::AP_POSITION, &position_record(1, 2));
        let err = decode_response(&response_of(&[record])).unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[test]
    fn short_body_is_malformed() {
        let err = decode_response(&[0u8; 4]).unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[test]
    fn truncated_record_is_malformed() {
        let raw = response_of(&[access_point("aa:bb:cc:dd:ee:ff", 378_097_000, -1_224_098_000)]);
        let err = decode_response(&raw[..raw.len() - 5]).unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[test]
    fn unknown_fields_are_skipped() {
        let mut record = access_point("aa:bb:cc:dd:ee:ff", 7, 8);
        put_varint_field(&mut record, 15, 99);
        let mut body = response_of(&[record]);
        put_varint_field(&mut body, 4, 1);
        let observations = decode_response(&body).unwrap();
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].latitude, 7);
    }

    #[test]
    fn optional_accuracy_fields_decode() {
        let mut pos = position_record(10, 20);
        put_varint_field(&mut pos, fields::POS_HORIZONTAL_ACCURACY, 25);
        put_varint_field(&mut pos, fields::POS_ALTITUDE, 52);
        put_varint_field(&mut pos, fields::POS_VERTICAL_ACCURACY, 4);
        let mut record = Vec::new();
        put_len_field(&mut record, fields::AP_BSSID, b"aa:bb:cc:dd:ee:ff");
        put_len_field(&mut record, fields::AP_POSITION, &pos);

        let observations = decode_response(&response_of(&[record])).unwrap();
        assert_eq!(observations[0].horizontal_accuracy, Some(25));
        assert_eq!(observations[0].altitude, Some(52));
        assert_eq!(observations[0].vertical_accuracy, Some(4));
    }
}
