use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};
use utoipa::ToSchema;

pub const UNKNOWN_SENSOR: &str = "UNKNOWN";
pub const UNKNOWN_DATE_RANGE: &str = "Unknown";
pub const UNKNOWN_EXPLANATION: &str = "Unable to calculate feasibility. Please check inputs.";

/// Categorical rating of how likely a tasking order is to be fulfilled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema, Display, IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeasibilityLevel {
    #[strum(serialize = "Excellent")]
    Excellent,
    #[strum(serialize = "Good")]
    Good,
    #[strum(serialize = "Fair")]
    Fair,
    #[strum(serialize = "Poor")]
    Poor,
}

impl FeasibilityLevel {
    pub fn display_name(&self) -> &'static str {
        self.into()
    }

    /// Display colour as 0xAARRGGBB.
    pub fn color_argb(&self) -> u32 {
        match self {
            FeasibilityLevel::Excellent => 0xFF4C_AF50,
            FeasibilityLevel::Good => 0xFF8B_C34A,
            FeasibilityLevel::Fair => 0xFFFF_9800,
            FeasibilityLevel::Poor => 0xFFF4_4336,
        }
    }

    pub fn color_hex(&self) -> String {
        format!("#{:06X}", self.color_argb() & 0x00FF_FFFF)
    }
}

/// Outcome of a feasibility estimate for one target point and date window
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FeasibilityResult {
    pub expected_passes: u32,
    pub level: FeasibilityLevel,
    pub sensor_type: String,
    pub explanation: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date_range: String,
}

impl FeasibilityResult {
    /// Result returned whenever the inputs cannot be evaluated.
    pub fn unknown() -> Self {
        Self {
            expected_passes: 0,
            level: FeasibilityLevel::Poor,
            sensor_type: UNKNOWN_SENSOR.to_string(),
            explanation: UNKNOWN_EXPLANATION.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            date_range: UNKNOWN_DATE_RANGE.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::unknown()
    }
}
