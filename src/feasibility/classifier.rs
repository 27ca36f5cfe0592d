use super::sensor::SensorType;
use super::types::FeasibilityLevel;

/// Rate `expected_passes` over `days` against the sensor's thresholds.
///
/// `days` must be positive; the estimator rejects empty windows before
/// getting here.
pub fn classify(sensor: SensorType, expected_passes: u32, days: i64) -> FeasibilityLevel {
    let passes_per_day = expected_passes as f64 / days as f64;
    let t = &sensor.profile().thresholds;

    if passes_per_day >= t.excellent {
        FeasibilityLevel::Excellent
    } else if passes_per_day >= t.good {
        FeasibilityLevel::Good
    } else if passes_per_day >= t.fair {
        FeasibilityLevel::Fair
    } else {
        FeasibilityLevel::Poor
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use FeasibilityLevel::*;

    #[rstest]
    #[case(SensorType::Asap, 45, 10, Excellent)]
    #[case(SensorType::Asap, 40, 10, Excellent)]
    #[case(SensorType::Asap, 39, 10, Good)]
    #[case(SensorType::Asap, 25, 10, Good)]
    #[case(SensorType::Asap, 15, 10, Fair)]
    #[case(SensorType::Asap, 14, 10, Poor)]
    #[case(SensorType::Sar, 17, 5, Excellent)]
    #[case(SensorType::Sar, 3, 2, Good)]
    #[case(SensorType::Sar, 1, 1, Fair)]
    #[case(SensorType::Sar, 9, 10, Poor)]
    #[case(SensorType::AdsB, 3, 1, Excellent)]
    #[case(SensorType::AdsB, 2, 1, Good)]
    #[case(SensorType::AdsB, 6, 5, Fair)]
    #[case(SensorType::AdsB, 1, 1, Poor)]
    #[case(SensorType::Eo, 7, 2, Excellent)]
    #[case(SensorType::Eo, 3, 1, Good)]
    #[case(SensorType::Eo, 12, 10, Fair)]
    #[case(SensorType::Eo, 0, 10, Poor)]
    #[case(SensorType::Other, 7, 2, Excellent)]
    #[case(SensorType::Other, 24, 10, Good)]
    #[case(SensorType::Other, 11, 10, Poor)]
    fn test_classify(
        #[case] sensor: SensorType,
        #[case] passes: u32,
        #[case] days: i64,
        #[case] level: FeasibilityLevel,
    ) {
        assert_eq!(level, classify(sensor, passes, days));
    }
}
