//! Domain primitives and services.
//!
//! Purpose: strongly typed entities for the point and polygon pipelines,
//! geometry construction, the error taxonomy, and the ports that bound the
//! hexagon. Transport and persistence details stay in the adapters.

pub mod error;
pub mod geometry;
pub mod point;
pub mod points_service;
pub mod polygon;
pub mod polygons_service;
pub mod ports;

pub use self::error::{Error, ErrorCode};
pub use self::geometry::{Coordinate, GeometryError, Ring, SRID};
pub use self::point::{NewPoint, PointPatch, PointRecord, PointValidationError};
pub use self::points_service::{PointCommandService, PointQueryService};
pub use self::polygon::{NewPolygon, PolygonPatch, PolygonRecord, PolygonValidationError};
pub use self::polygons_service::{PolygonCommandService, PolygonQueryService};
