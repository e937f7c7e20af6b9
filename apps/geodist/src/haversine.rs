/// Equatorial radius in meters, matching the course's distance scripts.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

pub fn deg_to_rad(degree: f64) -> f64 {
    degree * std::f64::consts::PI / 180.0
}

/// Haversine distance in meters between two (lon, lat) points in degrees.
/// Identical coordinates short-circuit to zero.
pub fn distance_m(xlon: f64, xlat: f64, ylon: f64, ylat: f64) -> f64 {
    if xlon == ylon && xlat == ylat {
        return 0.0;
    }

    let xlon = deg_to_rad(xlon);
    let xlat = deg_to_rad(xlat);
    let ylon = deg_to_rad(ylon);
    let ylat = deg_to_rad(ylat);

    let d1 = ((ylat - xlat) / 2.0).sin();
    let d2 = ((ylon - xlon) / 2.0).sin();
    2.0 * EARTH_RADIUS_M * d2.mul_add(d2 * xlat.cos() * ylat.cos(), d1 * d1).sqrt().asin()
}
