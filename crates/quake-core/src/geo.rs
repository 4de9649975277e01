//! Great-circle distance on a spherical Earth.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Haversine distance in kilometers between two lon/lat points given in
/// decimal degrees.
///
/// Coordinates are not range checked; out-of-range input yields a defined but
/// meaningless distance.
pub fn distance_km(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let rad_lat1 = to_radians(lat1);
    let rad_lon1 = to_radians(lon1);
    let rad_lat2 = to_radians(lat2);
    let rad_lon2 = to_radians(lon2);

    let d_lat = rad_lat2 - rad_lat1;
    let d_lon = rad_lon2 - rad_lon1;

    let a = ((d_lat / 2.0).sin().powi(2)
        + rad_lat1.cos() * rad_lat2.cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coincident_points() {
        assert_eq!(distance_km(103.9668967771, 28.5956549725, 103.9668967771, 28.5956549725), 0.0);
        assert_eq!(distance_km(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ((119.05, -10.30), (103.9668967771, 28.5956549725)),
            ((104.0, 28.6), (104.2501485126, 28.6521888424)),
            ((-73.9857, 40.7484), (139.6917, 35.6895)),
            ((0.0, 89.9), (180.0, -89.9)),
        ];
        for ((lon1, lat1), (lon2, lat2)) in pairs {
            assert_eq!(
                distance_km(lon1, lat1, lon2, lat2),
                distance_km(lon2, lat2, lon1, lat1)
            );
        }
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = distance_km(104.0, 28.0, 104.0, 29.0);
        assert!((d - 111.195).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let d = distance_km(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111.195).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_never_negative() {
        for lon in [-180.0, -45.5, 0.0, 12.25, 179.9] {
            for lat in [-89.0, -10.3, 0.0, 28.6, 89.0] {
                assert!(distance_km(lon, lat, 104.0, 28.6) >= 0.0);
            }
        }
    }
}
