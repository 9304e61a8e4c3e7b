//! Map URLs and slippy-map tile math for presenting a resolved location.
//!
//! Pure helpers for a presentation layer: deep links into Google Maps and
//! OpenStreetMap, OSM tile addressing, and coordinate display formatting.
//! No fetching or rendering happens here.

use crate::constants::map;
use crate::models::Coordinates;

/// Clamps a zoom level into the supported range.
pub fn clamp_zoom(zoom: u8) -> u8 {
    zoom.clamp(map::MIN_ZOOM, map::MAX_ZOOM)
}

/// Deep link to Google Maps with a pin at the coordinates.
pub fn google_maps_url(coords: Coordinates, zoom: u8) -> String {
    let zoom = clamp_zoom(zoom);
    format!(
        "https://www.google.com/maps/place/{lat},{lon}/@{lat},{lon},{zoom}z",
        lat = coords.latitude,
        lon = coords.longitude
    )
}

/// Deep link to OpenStreetMap with a marker at the coordinates.
pub fn osm_url(coords: Coordinates, zoom: u8) -> String {
    let zoom = clamp_zoom(zoom);
    format!(
        "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={zoom}/{lat}/{lon}",
        lat = coords.latitude,
        lon = coords.longitude
    )
}

/// Fractional web-mercator tile coordinates for a position at `zoom`.
///
/// Latitude is clamped to the mercator limit before projection. The
/// integer parts address the tile; the fractional parts give the pixel
/// offset within it (× tile size).
pub fn tile_coordinates(coords: Coordinates, zoom: u8) -> (f64, f64) {
    let zoom = clamp_zoom(zoom);
    let lat = coords
        .latitude
        .clamp(-map::LATITUDE_LIMIT, map::LATITUDE_LIMIT);
    let n = f64::from(1u32 << zoom);
    let x = (coords.longitude + 180.0) / 360.0 * n;
    let lat_rad = lat.to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0 * n;
    (x, y)
}

/// URL of an OSM tile, rotating deterministically over the mirror hosts.
pub fn osm_tile_url(zoom: u8, x: u32, y: u32) -> String {
    let zoom = clamp_zoom(zoom);
    let host = map::TILE_SERVERS[((x + y) as usize) % map::TILE_SERVERS.len()];
    format!("https://{host}/{zoom}/{x}/{y}.png")
}

/// Coordinates in the 8-decimal form used for copy/paste.
pub fn format_coordinates(coords: Coordinates) -> String {
    format!("{:.8},{:.8}", coords.latitude, coords.longitude)
}
