//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and are
//! never exposed to the domain. Geometry is read back as derived columns
//! (`ST_AsText`, `ST_X`/`ST_Y`), so the rows carry text and numbers rather
//! than raw geometry values.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{PointRecord, PolygonRecord};

/// Row produced by the point selection: base columns plus the decomposed
/// and serialised geometry. Field order matches the select tuple.
#[derive(Debug, Clone, Queryable)]
pub(crate) struct PointRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub longitude: f64,
    pub latitude: f64,
    pub geom_wkt: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PointRow> for PointRecord {
    fn from(row: PointRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            longitude: row.longitude,
            latitude: row.latitude,
            geom_wkt: row.geom_wkt,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Row produced by the polygon selection. Field order matches the select
/// tuple.
#[derive(Debug, Clone, Queryable)]
pub(crate) struct PolygonRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub geom_wkt: String,
    pub population_density: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PolygonRow> for PolygonRecord {
    fn from(row: PolygonRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            geom_wkt: row.geom_wkt,
            population_density: row.population_density,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
