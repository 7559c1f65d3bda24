//! OpenAPI document assembled from the handler annotations.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::points::{
    CreatePointRequestBody, PointResponseBody, UpdatePointRequestBody,
};
use crate::inbound::http::polygons::{
    CreatePolygonRequestBody, PolygonResponseBody, UpdatePolygonRequestBody,
};

/// Public OpenAPI surface used by Swagger UI and tooling.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::points::create_point,
        crate::inbound::http::points::list_points,
        crate::inbound::http::points::update_point,
        crate::inbound::http::polygons::create_polygon,
        crate::inbound::http::polygons::list_polygons,
        crate::inbound::http::polygons::update_polygon,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        CreatePointRequestBody,
        UpdatePointRequestBody,
        PointResponseBody,
        CreatePolygonRequestBody,
        UpdatePolygonRequestBody,
        PolygonResponseBody,
    )),
    tags(
        (name = "points", description = "Point records with exact-coordinate-unique geometry"),
        (name = "polygons", description = "Polygon records with shape-unique geometry"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;
