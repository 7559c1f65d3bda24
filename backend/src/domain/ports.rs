//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports describe what the domain needs from the persistence adapter;
//! driving ports are the use-cases HTTP handlers call. Each trait exposes
//! strongly typed errors so adapters map their failures into predictable
//! variants.

use async_trait::async_trait;
use thiserror::Error;

use super::point::{NewPoint, PointPatch, PointRecord};
use super::polygon::{NewPolygon, PolygonPatch, PolygonRecord};
use super::Error;

/// Errors surfaced by the persistence adapter.
///
/// `Duplicate` covers both the in-transaction exists pre-check and a
/// store-level unique-constraint violation on write; callers cannot tell
/// which guard fired, by design of the create/update protocol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Pool checkout or connection-level failure.
    #[error("store connection failed: {message}")]
    Connection {
        /// Driver-level detail, logged but never shown to clients.
        message: String,
    },
    /// The candidate geometry collides with an existing record.
    #[error("geometry duplicates an existing record")]
    Duplicate,
    /// The mutation target does not exist; no write was attempted.
    #[error("record not found")]
    NotFound,
    /// Query construction or execution failure.
    #[error("store query failed: {message}")]
    Query {
        /// Driver-level detail, logged but never shown to clients.
        message: String,
    },
}

impl RepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Driven port: point persistence.
///
/// Implementations must run the duplicate check and the mutation inside one
/// transaction, and roll the transaction back on any failure so callers
/// never observe partial state.
#[async_trait]
pub trait PointRepository: Send + Sync {
    /// Insert a new point, rejecting geometry that exactly matches an
    /// existing record's coordinates.
    async fn insert(&self, draft: NewPoint) -> Result<PointRecord, RepositoryError>;

    /// List all points.
    async fn list(&self) -> Result<Vec<PointRecord>, RepositoryError>;

    /// Apply a partial update. The duplicate check excludes `id` itself and
    /// runs only when the patch carries a replacement geometry.
    async fn update(&self, id: i32, patch: PointPatch) -> Result<PointRecord, RepositoryError>;
}

/// Driven port: polygon persistence.
///
/// Same transactional contract as [`PointRepository`], with spatial-shape
/// equality (not vertex-list equality) deciding duplicates.
#[async_trait]
pub trait PolygonRepository: Send + Sync {
    /// Insert a new polygon, rejecting geometry spatially equal to an
    /// existing record's shape.
    async fn insert(&self, draft: NewPolygon) -> Result<PolygonRecord, RepositoryError>;

    /// List all polygons.
    async fn list(&self) -> Result<Vec<PolygonRecord>, RepositoryError>;

    /// Apply a partial update. The duplicate check excludes `id` itself and
    /// runs only when the patch carries a replacement geometry.
    async fn update(&self, id: i32, patch: PolygonPatch) -> Result<PolygonRecord, RepositoryError>;
}

/// Driving port: point mutations.
#[async_trait]
pub trait PointsCommand: Send + Sync {
    /// Create a point from a validated draft.
    async fn create_point(&self, draft: NewPoint) -> Result<PointRecord, Error>;

    /// Partially update an existing point.
    async fn update_point(&self, id: i32, patch: PointPatch) -> Result<PointRecord, Error>;
}

/// Driving port: point reads.
#[async_trait]
pub trait PointsQuery: Send + Sync {
    /// List all points.
    async fn list_points(&self) -> Result<Vec<PointRecord>, Error>;
}

/// Driving port: polygon mutations.
#[async_trait]
pub trait PolygonsCommand: Send + Sync {
    /// Create a polygon from a validated draft.
    async fn create_polygon(&self, draft: NewPolygon) -> Result<PolygonRecord, Error>;

    /// Partially update an existing polygon.
    async fn update_polygon(&self, id: i32, patch: PolygonPatch)
        -> Result<PolygonRecord, Error>;
}

/// Driving port: polygon reads.
#[async_trait]
pub trait PolygonsQuery: Send + Sync {
    /// List all polygons.
    async fn list_polygons(&self) -> Result<Vec<PolygonRecord>, Error>;
}
