//! Great-circle distance between coordinates.

use crate::models::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points (haversine).
///
/// No range checking is done; NaN inputs yield NaN.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = ((d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
