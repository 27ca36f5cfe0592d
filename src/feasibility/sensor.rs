use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};
use utoipa::ToSchema;

/// Sensor families the tasking service accepts. Anything unrecognized is `Other`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema, Display, IntoStaticStr,
)]
pub enum SensorType {
    #[strum(serialize = "ASAP")]
    #[serde(rename = "ASAP")]
    Asap,
    #[strum(serialize = "EO")]
    #[serde(rename = "EO")]
    Eo,
    #[strum(serialize = "SAR")]
    #[serde(rename = "SAR")]
    Sar,
    #[strum(serialize = "ADS-B")]
    #[serde(rename = "ADS-B")]
    AdsB,
    #[strum(serialize = "OTHER")]
    #[serde(rename = "OTHER")]
    Other,
}

/// Minimum passes/day for each level, checked in descending order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct LevelThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct SensorProfile {
    pub sensor: SensorType,
    /// Passes/day at the mid-latitude baseline
    pub base_daily_rate: f64,
    pub thresholds: LevelThresholds,
    pub air_traffic_dependent: bool,
}

static PROFILES: [SensorProfile; 5] = [
    SensorProfile {
        sensor: SensorType::Asap,
        base_daily_rate: 4.5,
        thresholds: LevelThresholds {
            excellent: 4.0,
            good: 2.5,
            fair: 1.5,
        },
        air_traffic_dependent: false,
    },
    SensorProfile {
        sensor: SensorType::Eo,
        base_daily_rate: 3.2,
        thresholds: LevelThresholds {
            excellent: 3.5,
            good: 2.0,
            fair: 1.2,
        },
        air_traffic_dependent: false,
    },
    SensorProfile {
        sensor: SensorType::Sar,
        base_daily_rate: 2.1,
        thresholds: LevelThresholds {
            excellent: 2.5,
            good: 1.5,
            fair: 1.0,
        },
        air_traffic_dependent: false,
    },
    SensorProfile {
        sensor: SensorType::AdsB,
        base_daily_rate: 2.8,
        thresholds: LevelThresholds {
            excellent: 3.0,
            good: 2.0,
            fair: 1.2,
        },
        air_traffic_dependent: true,
    },
    // Falls back to EO thresholds but with a lower base rate than EO proper.
    SensorProfile {
        sensor: SensorType::Other,
        base_daily_rate: 3.0,
        thresholds: LevelThresholds {
            excellent: 3.5,
            good: 2.0,
            fair: 1.2,
        },
        air_traffic_dependent: false,
    },
];

impl SensorType {
    /// Case-insensitive; never fails.
    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "ASAP" => SensorType::Asap,
            "EO" => SensorType::Eo,
            "SAR" => SensorType::Sar,
            "ADS-B" => SensorType::AdsB,
            _ => SensorType::Other,
        }
    }

    pub fn profile(&self) -> &'static SensorProfile {
        let idx = match self {
            SensorType::Asap => 0,
            SensorType::Eo => 1,
            SensorType::Sar => 2,
            SensorType::AdsB => 3,
            SensorType::Other => 4,
        };
        &PROFILES[idx]
    }

    pub fn profiles() -> &'static [SensorProfile] {
        &PROFILES
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("ASAP", SensorType::Asap)]
    #[case("asap", SensorType::Asap)]
    #[case("EO", SensorType::Eo)]
    #[case("eo", SensorType::Eo)]
    #[case("Sar", SensorType::Sar)]
    #[case("ADS-B", SensorType::AdsB)]
    #[case("ads-b", SensorType::AdsB)]
    #[case("ADSB", SensorType::Other)]
    #[case("XYZ", SensorType::Other)]
    #[case("", SensorType::Other)]
    fn test_parse(#[case] inp: &str, #[case] sensor: SensorType) {
        assert_eq!(sensor, SensorType::parse(inp));
    }

    #[test]
    fn test_profiles_are_indexed_by_sensor() {
        for p in SensorType::profiles() {
            assert_eq!(p.sensor, p.sensor.profile().sensor);
        }
    }

    #[test]
    fn test_other_is_not_eo() {
        assert_eq!(3.2, SensorType::Eo.profile().base_daily_rate);
        assert_eq!(3.0, SensorType::Other.profile().base_daily_rate);
        assert_eq!(
            SensorType::Eo.profile().thresholds,
            SensorType::Other.profile().thresholds
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!("ADS-B", SensorType::AdsB.to_string());
        assert_eq!("OTHER", SensorType::Other.to_string());
    }
}
