use std::env;

use wloc::constants::map;
use wloc::{WifiLocator, maps};

#[tokio::main]
async fn main() -> wloc::Result<()> {
    let bssid = env::args()
        .nth(1)
        .unwrap_or_else(|| "aa:bb:cc:dd:ee:ff".to_string());

    let locator = WifiLocator::new()?;

    println!("Looking up {bssid}...");
    match locator.lookup(&bssid).await {
        Ok(coords) => {
            println!("Location: {coords}");
            println!("Copy:     {}", maps::format_coordinates(coords));
            println!("OSM:      {}", maps::osm_url(coords, map::DEFAULT_ZOOM));
            println!(
                "Google:   {}",
                maps::google_maps_url(coords, map::DEFAULT_ZOOM)
            );
        }
        Err(err) => eprintln!("Lookup failed: {err}"),
    }

    Ok(())
}
