//! Picks the queried access point out of a decoded result set.

use log::debug;

use crate::Result;
use crate::models::{AccessPointObservation, Coordinates, LookupError, MacAddress};

/// Returns the coordinates of the first observation matching `target`.
///
/// Matching is by canonical BSSID text (octet equality, so case never
/// matters). A BSSID appears at most once per response, so first match is
/// enough. An observation carrying the unknown-location sentinel means
/// the service knows the BSSID but not its position; that and a missing
/// record are both [`LookupError::NotFound`].
pub fn select_coordinates(
    observations: &[AccessPointObservation],
    target: &MacAddress,
) -> Result<Coordinates> {
    let canonical = target.to_string();
    match observations
        .iter()
        .find(|obs| obs.bssid.eq_ignore_ascii_case(&canonical))
    {
        Some(observation) => observation.coordinates().ok_or(LookupError::NotFound),
        None => {
            debug!(
                "no record for {canonical} among {} observation(s)",
                observations.len()
            );
            Err(LookupError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::coord;

    fn observation(bssid: &str, latitude: i64, longitude: i64) -> AccessPointObservation {
        AccessPointObservation {
            bssid: bssid.into(),
            latitude,
            longitude,
            horizontal_accuracy: None,
            altitude: None,
            vertical_accuracy: None,
        }
    }

    fn target() -> MacAddress {
        "aa:bb:cc:dd:ee:ff".parse().unwrap()
    }

    #[test]
    fn finds_the_matching_record() {
        let observations = vec![
            observation("11:22:33:44:55:66", 10, 20),
            observation("aa:bb:cc:dd:ee:ff", 378_097_000, -1_224_098_000),
        ];
        let coords = select_coordinates(&observations, &target()).unwrap();
        assert!((coords.latitude - 37.8097).abs() < 1e-9);
        assert!((coords.longitude + 122.4098).abs() < 1e-9);
    }

    #[test]
    fn matching_ignores_case() {
        let observations = vec![observation("AA:BB:CC:DD:EE:FF", 10, 20)];
        assert!(select_coordinates(&observations, &target()).is_ok());
    }

    #[test]
    fn empty_result_set_is_not_found() {
        let err = select_coordinates(&[], &target()).unwrap_err();
        assert!(matches!(err, LookupError::NotFound));
    }

    #[test]
    fn other_bssids_only_is_not_found() {
        let observations = vec![observation("11:22:33:44:55:66", 10, 20)];
        let err = select_coordinates(&observations, &target()).unwrap_err();
        assert!(matches!(err, LookupError::NotFound));
    }

    #[test]
    fn sentinel_position_is_not_found() {
        let observations = vec![observation("aa:bb:cc:dd:ee:ff", coord::UNKNOWN, coord::UNKNOWN)];
        let err = select_coordinates(&observations, &target()).unwrap_err();
        assert!(matches!(err, LookupError::NotFound));
    }
}
