//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain's driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{PointsCommand, PointsQuery, PolygonsCommand, PolygonsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Point mutations (create, partial update).
    pub points: Arc<dyn PointsCommand>,
    /// Point reads.
    pub points_query: Arc<dyn PointsQuery>,
    /// Polygon mutations.
    pub polygons: Arc<dyn PolygonsCommand>,
    /// Polygon reads.
    pub polygons_query: Arc<dyn PolygonsQuery>,
}
