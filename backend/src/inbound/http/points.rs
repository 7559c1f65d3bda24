//! Point HTTP handlers.
//!
//! ```text
//! POST /points
//! GET  /points
//! PUT  /points/{id}
//! ```

use actix_web::{get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, NewPoint, PointPatch, PointRecord};
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_coordinate, parse_optional_coordinate};

/// Request payload for creating a point.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePointRequestBody {
    /// Display name, required and non-blank.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Longitude in [-180, 180].
    pub longitude: f64,
    /// Latitude in [-90, 90].
    pub latitude: f64,
}

/// Request payload for partially updating a point. Absent fields leave the
/// stored values untouched; longitude and latitude must come together.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdatePointRequestBody {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement longitude (requires `latitude`).
    pub longitude: Option<f64>,
    /// Replacement latitude (requires `longitude`).
    pub latitude: Option<f64>,
}

/// Point view returned by every point endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointResponseBody {
    /// Store-assigned identity.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Longitude decomposed from the stored geometry.
    pub longitude: f64,
    /// Latitude decomposed from the stored geometry.
    pub latitude: f64,
    /// WKT form of the stored geometry.
    pub geom: String,
    /// Creation timestamp (RFC 3339).
    #[schema(format = "date-time")]
    pub created_at: String,
    /// Last mutation timestamp (RFC 3339).
    #[schema(format = "date-time")]
    pub updated_at: String,
}

impl From<PointRecord> for PointResponseBody {
    fn from(record: PointRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            longitude: record.longitude,
            latitude: record.latitude,
            geom: record.geom_wkt,
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

fn map_name_error(error: crate::domain::PointValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({ "field": "name" }))
}

/// Create a point, rejecting exact-coordinate duplicates.
#[utoipa::path(
    post,
    path = "/points",
    request_body = CreatePointRequestBody,
    responses(
        (status = 201, description = "Point created", body = PointResponseBody),
        (status = 400, description = "Validation failure or duplicate geometry", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["points"],
    operation_id = "createPoint"
)]
#[post("/points")]
pub async fn create_point(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePointRequestBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let coordinate = parse_coordinate(body.longitude, body.latitude)?;
    let draft = NewPoint::new(body.name, body.description, coordinate).map_err(map_name_error)?;

    let record = state.points.create_point(draft).await?;
    Ok(HttpResponse::Created().json(PointResponseBody::from(record)))
}

/// List all points.
#[utoipa::path(
    get,
    path = "/points",
    responses(
        (status = 200, description = "All points", body = [PointResponseBody]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["points"],
    operation_id = "listPoints"
)]
#[get("/points")]
pub async fn list_points(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<PointResponseBody>>> {
    let records = state.points_query.list_points().await?;
    Ok(web::Json(
        records.into_iter().map(PointResponseBody::from).collect(),
    ))
}

/// Partially update a point. Geometry changes re-run the duplicate check,
/// excluding the point itself.
#[utoipa::path(
    put,
    path = "/points/{id}",
    request_body = UpdatePointRequestBody,
    params(("id" = i32, Path, description = "Point identity")),
    responses(
        (status = 200, description = "Updated point", body = PointResponseBody),
        (status = 400, description = "Validation failure or duplicate geometry", body = Error),
        (status = 404, description = "Point not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["points"],
    operation_id = "updatePoint"
)]
#[put("/points/{id}")]
pub async fn update_point(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UpdatePointRequestBody>,
) -> ApiResult<web::Json<PointResponseBody>> {
    let id = path.into_inner();
    let body = payload.into_inner();

    let patch = PointPatch {
        name: body.name,
        description: body.description,
        coordinate: parse_optional_coordinate(body.longitude, body.latitude)?,
    };
    patch.validate().map_err(map_name_error)?;

    let record = state.points.update_point(id, patch).await?;
    Ok(web::Json(record.into()))
}
