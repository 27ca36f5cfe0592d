use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::aoi::{estimated_cost_usd, validate_size, Aoi, GeoPoint, SizeValidation};
use crate::feasibility::{calculate_feasibility, FeasibilityResult};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::auth::{require_permission, AppState, AuthenticatedUser};
use crate::web::config::Permission;

#[derive(Debug, Deserialize, ToSchema)]
pub struct FeasibilityQuery {
    #[serde(default)]
    pub sensor: Option<String>,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/feasibility",
    tag = "feasibility",
    params(
        ("sensor" = Option<String>, Query, description = "Sensor type: ASAP, EO, SAR, ADS-B"),
        ("lat" = f64, Query, description = "Target latitude (degrees)"),
        ("lon" = f64, Query, description = "Target longitude (degrees)"),
        ("start" = Option<String>, Query, description = "Window start (YYYY-MM-DD)"),
        ("end" = Option<String>, Query, description = "Window end (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Feasibility estimate, UNKNOWN when inputs are unusable", body = FeasibilityResult),
        (status = 400, description = "Missing or non-numeric coordinates"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Insufficient permissions")
    ),
    security(("api_key" = []))
)]
pub async fn estimate(
    user: AuthenticatedUser,
    Query(query): Query<FeasibilityQuery>,
) -> ApiResult<impl IntoResponse> {
    require_permission(&user, Permission::EstimateFeasibility)?;

    let result = calculate_feasibility(
        query.sensor.as_deref(),
        query.lat,
        query.lon,
        query.start.as_deref(),
        query.end.as_deref(),
    );

    Ok((StatusCode::OK, Json(result)))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AoiFeasibilityRequest {
    #[serde(default)]
    pub sensor: Option<String>,
    pub points: Vec<GeoPoint>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AoiFeasibilityResponse {
    pub area_sq_km: f64,
    pub estimated_cost_usd: f64,
    /// Order-size check against provider minimums and the maximum AOI size
    pub size: SizeValidation,
    pub centroid: GeoPoint,
    pub feasibility: FeasibilityResult,
}

#[utoipa::path(
    post,
    path = "/api/feasibility/aoi",
    tag = "feasibility",
    request_body = AoiFeasibilityRequest,
    responses(
        (status = 200, description = "Area, cost and feasibility at the AOI centroid", body = AoiFeasibilityResponse),
        (status = 400, description = "Invalid area of interest or malformed body", body = ErrorResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Insufficient permissions")
    ),
    security(("api_key" = []))
)]
pub async fn estimate_aoi(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<AoiFeasibilityRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    require_permission(&user, Permission::EstimateFeasibility)?;
    let Json(request) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let aoi = Aoi::new(request.points).map_err(|e| ApiError::Validation(e.to_string()))?;
    let area_sq_km = aoi.area_sq_km();
    let centroid = aoi.centroid();

    let feasibility = calculate_feasibility(
        request.sensor.as_deref(),
        centroid.latitude,
        centroid.longitude,
        request.start.as_deref(),
        request.end.as_deref(),
    );

    Ok((
        StatusCode::OK,
        Json(AoiFeasibilityResponse {
            area_sq_km,
            estimated_cost_usd: estimated_cost_usd(area_sq_km, state.config.aoi.cost_per_sq_km_usd),
            size: validate_size(area_sq_km),
            centroid,
            feasibility,
        }),
    ))
}
