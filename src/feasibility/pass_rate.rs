use super::factors::{air_traffic_factor, latitude_factor};
use super::sensor::SensorType;

/// Expected number of passes over `days` calendar days.
pub fn expected_passes(sensor: SensorType, latitude: f64, longitude: f64, days: i64) -> u32 {
    let profile = sensor.profile();
    let mut passes = days as f64 * profile.base_daily_rate * latitude_factor(latitude);
    if profile.air_traffic_dependent {
        passes *= air_traffic_factor(latitude, longitude);
    }
    round_half_up(passes)
}

fn round_half_up(v: f64) -> u32 {
    (v + 0.5).floor().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(SensorType::Asap, 40.0, -100.0, 10, 45)]
    #[case(SensorType::Sar, 70.0, 0.0, 5, 17)]
    #[case(SensorType::AdsB, 45.0, -90.0, 2, 10)]
    #[case(SensorType::Eo, 0.0, 0.0, 10, 26)]
    #[case(SensorType::Other, 0.0, 0.0, 10, 24)]
    #[case(SensorType::Eo, 40.0, 0.0, 1, 3)]
    #[case(SensorType::Other, 40.0, 0.0, 1, 3)]
    // ADS-B outside the busy regions ignores the traffic bonus
    #[case(SensorType::AdsB, -10.0, 20.0, 10, 22)]
    #[case(SensorType::AdsB, 80.0, 170.0, 10, 27)]
    fn test_expected_passes(
        #[case] sensor: SensorType,
        #[case] lat: f64,
        #[case] lon: f64,
        #[case] days: i64,
        #[case] passes: u32,
    ) {
        assert_eq!(passes, expected_passes(sensor, lat, lon, days));
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.49, 0)]
    #[case(0.5, 1)]
    #[case(2.5, 3)]
    #[case(16.8, 17)]
    #[case(10.192, 10)]
    fn test_round_half_up(#[case] v: f64, #[case] r: u32) {
        assert_eq!(r, round_half_up(v));
    }

    #[test]
    fn test_traffic_factor_only_for_adsb() {
        // Europe at 50N is a busy region; EO must not pick up the 1.4 multiplier
        assert_eq!(42, expected_passes(SensorType::Eo, 50.0, 10.0, 10));
        assert_eq!(51, expected_passes(SensorType::AdsB, 50.0, 10.0, 10));
    }
}
