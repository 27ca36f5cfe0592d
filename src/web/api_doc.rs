use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use super::api::error::ErrorResponse;
use super::api::feasibility::{AoiFeasibilityRequest, AoiFeasibilityResponse};
use super::api::sensors::SensorsResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::feasibility::estimate,
        super::api::feasibility::estimate_aoi,
        super::api::sensors::list_sensors,
    ),
    components(
        schemas(
            AoiFeasibilityRequest,
            AoiFeasibilityResponse,
            SensorsResponse,
            ErrorResponse,
            crate::aoi::GeoPoint,
            crate::aoi::SizeValidation,
            crate::aoi::ProviderCompatibility,
            crate::aoi::SizeLevel,
            crate::feasibility::FeasibilityResult,
            crate::feasibility::FeasibilityLevel,
            crate::feasibility::SensorProfile,
            crate::feasibility::SensorType,
            crate::feasibility::LevelThresholds,
        )
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Tasking Feasibility API",
        description = "Estimate satellite pass counts and tasking feasibility for a target",
        version = "0.1.0"
    ),
    tags(
        (name = "feasibility", description = "Feasibility estimates")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}
