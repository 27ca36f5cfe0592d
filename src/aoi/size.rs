use serde::Serialize;
use utoipa::ToSchema;

pub const MAX_AOI_SQ_KM: f64 = 2000.0;
const FALLBACK_MINIMUM_SQ_KM: f64 = 25.0;
const MIN_COMPATIBLE_FOR_OK: usize = 3;

/// Imagery provider order-size limits, km²
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderLimits {
    pub provider: &'static str,
    pub minimum_sq_km: f64,
    pub recommended_sq_km: f64,
}

static PROVIDERS: [ProviderLimits; 6] = [
    ProviderLimits {
        provider: "siwei",
        minimum_sq_km: 25.0,
        recommended_sq_km: 36.0,
    },
    ProviderLimits {
        provider: "satellogic",
        minimum_sq_km: 100.0,
        recommended_sq_km: 121.0,
    },
    ProviderLimits {
        provider: "umbra",
        minimum_sq_km: 16.0,
        recommended_sq_km: 25.0,
    },
    ProviderLimits {
        provider: "geosat",
        minimum_sq_km: 25.0,
        recommended_sq_km: 36.0,
    },
    ProviderLimits {
        provider: "planet",
        minimum_sq_km: 100.0,
        recommended_sq_km: 121.0,
    },
    ProviderLimits {
        provider: "impro",
        minimum_sq_km: 64.0,
        recommended_sq_km: 81.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SizeLevel {
    Ok,
    Warning,
    Error,
}

impl SizeLevel {
    /// Display colour as 0xAARRGGBB.
    pub fn color_argb(&self) -> u32 {
        match self {
            SizeLevel::Ok => 0xFF4C_AF50,
            SizeLevel::Warning => 0xFFFF_9800,
            SizeLevel::Error => 0xFFF4_4336,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProviderCompatibility {
    pub provider: String,
    pub compatible: bool,
    pub reason: String,
    pub minimum_sq_km: f64,
    pub recommended_sq_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SizeValidation {
    pub has_compatible_providers: bool,
    pub providers: Vec<ProviderCompatibility>,
    pub level: SizeLevel,
    pub message: String,
}

pub fn providers() -> &'static [ProviderLimits] {
    &PROVIDERS
}

fn find_provider(provider: &str) -> Option<&'static ProviderLimits> {
    let provider = provider.to_lowercase();
    PROVIDERS.iter().find(|p| p.provider == provider)
}

/// Minimum order size for `provider`, 25 km² when the provider is unknown.
pub fn provider_minimum_sq_km(provider: &str) -> f64 {
    find_provider(provider)
        .map(|p| p.minimum_sq_km)
        .unwrap_or(FALLBACK_MINIMUM_SQ_KM)
}

pub fn is_provider_compatible(provider: &str, area_sq_km: f64) -> bool {
    find_provider(provider).is_some_and(|p| area_sq_km >= p.minimum_sq_km)
}

/// Check an AOI area against every provider's order-size limits.
pub fn validate_size(area_sq_km: f64) -> SizeValidation {
    let providers: Vec<_> = PROVIDERS
        .iter()
        .map(|p| check_provider(p, area_sq_km))
        .collect();
    let compatible = providers.iter().filter(|p| p.compatible).count();

    let (level, message) = if area_sq_km > MAX_AOI_SQ_KM {
        (
            SizeLevel::Error,
            format!(
                "Area too large! Maximum allowed is {} km² (current: {} km²)",
                MAX_AOI_SQ_KM,
                no_decimals(area_sq_km)
            ),
        )
    } else if compatible == 0 {
        (
            SizeLevel::Error,
            "Area too small for all providers! Increase AOI size.".to_string(),
        )
    } else if compatible < MIN_COMPATIBLE_FOR_OK {
        (
            SizeLevel::Warning,
            format!(
                "Limited provider options ({} of {} compatible)",
                compatible,
                PROVIDERS.len()
            ),
        )
    } else {
        (
            SizeLevel::Ok,
            format!("Good compatibility ({} providers available)", compatible),
        )
    };

    SizeValidation {
        has_compatible_providers: compatible > 0,
        providers,
        level,
        message,
    }
}

fn check_provider(limits: &ProviderLimits, area_sq_km: f64) -> ProviderCompatibility {
    let compatible = area_sq_km >= limits.minimum_sq_km;
    let reason = if !compatible {
        format!(
            "Too small (need {} km² more)",
            no_decimals(limits.minimum_sq_km - area_sq_km)
        )
    } else if area_sq_km >= limits.recommended_sq_km {
        "Excellent coverage".to_string()
    } else {
        format!("Minimum met ({} km² min)", no_decimals(limits.minimum_sq_km))
    };

    ProviderCompatibility {
        provider: limits.provider.to_string(),
        compatible,
        reason,
        minimum_sq_km: limits.minimum_sq_km,
        recommended_sq_km: limits.recommended_sq_km,
    }
}

// rounds ties up, `{:.0}` alone would round them to even
fn no_decimals(v: f64) -> String {
    format!("{:.0}", v.round())
}
