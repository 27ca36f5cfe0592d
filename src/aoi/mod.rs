mod area;
mod error;
mod size;

pub use area::{estimated_cost_usd, Aoi, GeoPoint, DEFAULT_COST_PER_SQ_KM_USD};
pub use error::AoiError;
pub use size::{
    is_provider_compatible, provider_minimum_sq_km, providers, validate_size,
    ProviderCompatibility, ProviderLimits, SizeLevel, SizeValidation, MAX_AOI_SQ_KM,
};
