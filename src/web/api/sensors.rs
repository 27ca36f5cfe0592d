use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::feasibility::{SensorProfile, SensorType};
use crate::web::api::error::ApiResult;
use crate::web::auth::{require_permission, AuthenticatedUser};
use crate::web::config::Permission;

#[derive(Debug, Serialize, ToSchema)]
pub struct SensorsResponse {
    pub sensors: Vec<SensorProfile>,
}

#[utoipa::path(
    get,
    path = "/api/sensors",
    tag = "feasibility",
    responses(
        (status = 200, description = "Pass-rate model per sensor type", body = SensorsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Insufficient permissions")
    ),
    security(("api_key" = []))
)]
pub async fn list_sensors(user: AuthenticatedUser) -> ApiResult<impl IntoResponse> {
    require_permission(&user, Permission::ListSensors)?;

    Ok((
        StatusCode::OK,
        Json(SensorsResponse {
            sensors: SensorType::profiles().to_vec(),
        }),
    ))
}
