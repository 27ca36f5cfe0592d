//! Geographic multipliers applied to a sensor's base pass rate.
//!
//! Coordinates are not range checked: out-of-range latitudes fall into the
//! polar band because only `|lat|` is compared.

/// Orbital convergence: sun-synchronous tracks bunch up towards the poles.
pub fn latitude_factor(latitude: f64) -> f64 {
    let abs_lat = latitude.abs();

    if abs_lat < 30.0 {
        0.8
    } else if abs_lat < 45.0 {
        1.0
    } else if abs_lat < 60.0 {
        1.3
    } else {
        1.6
    }
}

/// Regional air-traffic density, only meaningful for ADS-B collection.
pub fn air_traffic_factor(latitude: f64, longitude: f64) -> f64 {
    let north_america = longitude > -140.0 && longitude < -60.0;
    let europe = longitude > -15.0 && longitude < 50.0;
    let east_asia = longitude > 100.0 && longitude < 150.0;

    let high_traffic =
        latitude > 25.0 && latitude < 75.0 && (north_america || europe || east_asia);

    if high_traffic {
        1.4
    } else if latitude.abs() < 60.0 {
        1.0
    } else {
        0.6
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 0.8)]
    #[case(29.999, 0.8)]
    #[case(-29.0, 0.8)]
    #[case(30.0, 1.0)]
    #[case(-44.9, 1.0)]
    #[case(45.0, 1.3)]
    #[case(-59.9, 1.3)]
    #[case(60.0, 1.6)]
    #[case(-90.0, 1.6)]
    // not validated, lands in the polar band
    #[case(200.0, 1.6)]
    fn test_latitude_factor(#[case] lat: f64, #[case] factor: f64) {
        assert_eq!(factor, latitude_factor(lat));
    }

    #[rstest]
    #[case(45.0, -90.0, 1.4)]
    #[case(48.8, 2.3, 1.4)]
    #[case(35.6, 139.7, 1.4)]
    // open intervals on every edge
    #[case(25.0, -90.0, 1.0)]
    #[case(45.0, -140.0, 1.0)]
    #[case(45.0, -60.0, 1.0)]
    #[case(45.0, 50.0, 1.0)]
    #[case(45.0, 100.0, 1.0)]
    #[case(0.0, 0.0, 1.0)]
    #[case(-33.9, 151.2, 1.0)]
    #[case(75.0, 0.0, 0.6)]
    #[case(70.0, 170.0, 0.6)]
    #[case(-70.0, 0.0, 0.6)]
    fn test_air_traffic_factor(#[case] lat: f64, #[case] lon: f64, #[case] factor: f64) {
        assert_eq!(factor, air_traffic_factor(lat, lon));
    }
}
