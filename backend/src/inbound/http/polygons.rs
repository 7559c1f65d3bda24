//! Polygon HTTP handlers.
//!
//! ```text
//! POST /polygons
//! GET  /polygons
//! PUT  /polygons/{id}
//! ```

use actix_web::{get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, NewPolygon, PolygonPatch, PolygonRecord, PolygonValidationError};
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_ring;

/// Request payload for creating a polygon.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePolygonRequestBody {
    /// Display name, required and non-blank.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Ring vertices as `[x, y]` pairs, in order. Not auto-closed: repeat
    /// the first vertex to close the ring.
    #[schema(value_type = Vec<Vec<f64>>)]
    pub coordinates: Vec<(f64, f64)>,
    /// Optional non-negative density figure.
    pub population_density: Option<f64>,
}

/// Request payload for partially updating a polygon. Absent fields leave
/// the stored values untouched.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdatePolygonRequestBody {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement ring vertices.
    #[schema(value_type = Option<Vec<Vec<f64>>>)]
    pub coordinates: Option<Vec<(f64, f64)>>,
    /// Replacement density figure.
    pub population_density: Option<f64>,
}

/// Polygon view returned by every polygon endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PolygonResponseBody {
    /// Store-assigned identity.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// WKT form of the stored geometry.
    pub geom: String,
    /// Optional density figure.
    pub population_density: Option<f64>,
    /// Creation timestamp (RFC 3339).
    #[schema(format = "date-time")]
    pub created_at: String,
    /// Last mutation timestamp (RFC 3339).
    #[schema(format = "date-time")]
    pub updated_at: String,
}

impl From<PolygonRecord> for PolygonResponseBody {
    fn from(record: PolygonRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            geom: record.geom_wkt,
            population_density: record.population_density,
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

fn map_polygon_validation_error(error: PolygonValidationError) -> Error {
    let field = match &error {
        PolygonValidationError::EmptyName => "name",
        PolygonValidationError::NegativePopulationDensity(_) => "population_density",
    };
    Error::invalid_request(error.to_string()).with_details(json!({ "field": field }))
}

/// Create a polygon, rejecting shape-equal duplicates.
#[utoipa::path(
    post,
    path = "/polygons",
    request_body = CreatePolygonRequestBody,
    responses(
        (status = 201, description = "Polygon created", body = PolygonResponseBody),
        (status = 400, description = "Validation failure or duplicate geometry", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["polygons"],
    operation_id = "createPolygon"
)]
#[post("/polygons")]
pub async fn create_polygon(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePolygonRequestBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let ring = parse_ring(body.coordinates)?;
    let draft = NewPolygon::new(body.name, body.description, ring, body.population_density)
        .map_err(map_polygon_validation_error)?;

    let record = state.polygons.create_polygon(draft).await?;
    Ok(HttpResponse::Created().json(PolygonResponseBody::from(record)))
}

/// List all polygons.
#[utoipa::path(
    get,
    path = "/polygons",
    responses(
        (status = 200, description = "All polygons", body = [PolygonResponseBody]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["polygons"],
    operation_id = "listPolygons"
)]
#[get("/polygons")]
pub async fn list_polygons(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PolygonResponseBody>>> {
    let records = state.polygons_query.list_polygons().await?;
    Ok(web::Json(
        records.into_iter().map(PolygonResponseBody::from).collect(),
    ))
}

/// Partially update a polygon. Geometry changes re-run the duplicate
/// check, excluding the polygon itself.
#[utoipa::path(
    put,
    path = "/polygons/{id}",
    request_body = UpdatePolygonRequestBody,
    params(("id" = i32, Path, description = "Polygon identity")),
    responses(
        (status = 200, description = "Updated polygon", body = PolygonResponseBody),
        (status = 400, description = "Validation failure or duplicate geometry", body = Error),
        (status = 404, description = "Polygon not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["polygons"],
    operation_id = "updatePolygon"
)]
#[put("/polygons/{id}")]
pub async fn update_polygon(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UpdatePolygonRequestBody>,
) -> ApiResult<web::Json<PolygonResponseBody>> {
    let id = path.into_inner();
    let body = payload.into_inner();

    let patch = PolygonPatch {
        name: body.name,
        description: body.description,
        ring: body.coordinates.map(parse_ring).transpose()?,
        population_density: body.population_density,
    };
    patch.validate().map_err(map_polygon_validation_error)?;

    let record = state.polygons.update_polygon(id, patch).await?;
    Ok(web::Json(record.into()))
}
