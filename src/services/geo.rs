/// Mean Earth radius in km.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Fixed reference point for distance filtering and the initial map region:
/// the dataset's town-centre centroid, not the device's live location.
pub const REFERENCE_LAT: f64 = -36.89614437791492;
pub const REFERENCE_LNG: f64 = 174.81271314232896;

/// Great-circle distance between two coordinates via the haversine formula.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance from the fixed reference point.
pub fn distance_from_reference_km(lat: f64, lon: f64) -> f64 {
    haversine_km(REFERENCE_LAT, REFERENCE_LNG, lat, lon)
}
