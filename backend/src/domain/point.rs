//! Point entity, create draft, and partial-update patch.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::geometry::Coordinate;

/// A persisted point record as read back from the store.
///
/// `geom_wkt` and the decomposed `longitude`/`latitude` are re-derived from
/// the stored geometry during response assembly, so they reflect what was
/// actually persisted rather than echoing the request.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    /// Store-assigned identity, immutable.
    pub id: i32,
    /// Display name, required.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Longitude decomposed from the stored geometry.
    pub longitude: f64,
    /// Latitude decomposed from the stored geometry.
    pub latitude: f64,
    /// Canonical WKT form of the stored geometry.
    pub geom_wkt: String,
    /// Set once at insert.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation.
    pub updated_at: DateTime<Utc>,
}

/// Validation failures for point drafts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointValidationError {
    /// Name is empty after trimming whitespace.
    #[error("name must not be empty")]
    EmptyName,
}

/// Validated input for creating a point.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPoint {
    name: String,
    description: Option<String>,
    coordinate: Coordinate,
}

impl NewPoint {
    /// Validate and build a create draft.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        coordinate: Coordinate,
    ) -> Result<Self, PointValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PointValidationError::EmptyName);
        }
        Ok(Self {
            name,
            description,
            coordinate,
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Candidate geometry.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

/// Partial update: absent fields leave the stored value untouched.
///
/// When `coordinate` is absent the duplicate-geometry query is skipped
/// entirely and the stored geometry is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointPatch {
    /// Replacement name, when present.
    pub name: Option<String>,
    /// Replacement description, when present.
    pub description: Option<String>,
    /// Replacement geometry, when present.
    pub coordinate: Option<Coordinate>,
}

impl PointPatch {
    /// Validate the patch fields that carry values.
    pub fn validate(&self) -> Result<(), PointValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(PointValidationError::EmptyName);
            }
        }
        Ok(())
    }
}
