//! Shared validation helpers for inbound HTTP adapters.
//!
//! Coordinate and field validation happens here, before any store
//! interaction, producing `invalid_request` errors with a field-level
//! `details` payload.

use serde_json::json;

use crate::domain::{Coordinate, Error, GeometryError, Ring};

/// Map a geometry builder failure to a client error with field context.
pub(crate) fn map_geometry_error(error: GeometryError) -> Error {
    let field = match &error {
        GeometryError::NotFinite { axis } => *axis,
        GeometryError::LongitudeOutOfRange(_) => "longitude",
        GeometryError::LatitudeOutOfRange(_) => "latitude",
        GeometryError::TooFewVertices(_) => "coordinates",
    };
    Error::invalid_request(error.to_string()).with_details(json!({ "field": field }))
}

/// Build a coordinate from a create request's required pair.
pub(crate) fn parse_coordinate(longitude: f64, latitude: f64) -> Result<Coordinate, Error> {
    Coordinate::new(longitude, latitude).map_err(map_geometry_error)
}

/// Build a coordinate from an update request, where the pair is optional
/// but indivisible: a lone half is malformed, not a partial update.
pub(crate) fn parse_optional_coordinate(
    longitude: Option<f64>,
    latitude: Option<f64>,
) -> Result<Option<Coordinate>, Error> {
    match (longitude, latitude) {
        (None, None) => Ok(None),
        (Some(lon), Some(lat)) => parse_coordinate(lon, lat).map(Some),
        (Some(_), None) => Err(Error::invalid_request(
            "longitude and latitude must be provided together",
        )
        .with_details(json!({ "field": "latitude", "code": "missing_field" }))),
        (None, Some(_)) => Err(Error::invalid_request(
            "longitude and latitude must be provided together",
        )
        .with_details(json!({ "field": "longitude", "code": "missing_field" }))),
    }
}

/// Build a ring from a request's coordinate list. Vertices are validated
/// individually; ring closure is deliberately not enforced here.
pub(crate) fn parse_ring(pairs: Vec<(f64, f64)>) -> Result<Ring, Error> {
    let mut vertices = Vec::with_capacity(pairs.len());
    for (index, (x, y)) in pairs.into_iter().enumerate() {
        let vertex = Coordinate::new(x, y).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({
                "field": "coordinates",
                "index": index,
            }))
        })?;
        vertices.push(vertex);
    }
    Ring::new(vertices).map_err(map_geometry_error)
}
