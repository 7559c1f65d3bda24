//! Polygon entity, create draft, and partial-update patch.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::geometry::Ring;

/// A persisted polygon record as read back from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonRecord {
    /// Store-assigned identity, immutable.
    pub id: i32,
    /// Display name, required.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Canonical WKT form of the stored geometry.
    pub geom_wkt: String,
    /// Optional non-negative density figure.
    pub population_density: Option<f64>,
    /// Set once at insert.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation.
    pub updated_at: DateTime<Utc>,
}

/// Validation failures for polygon drafts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolygonValidationError {
    /// Name is empty after trimming whitespace.
    #[error("name must not be empty")]
    EmptyName,
    /// Population density must be non-negative when present.
    #[error("population_density must be non-negative, got {0}")]
    NegativePopulationDensity(f64),
}

/// Validated input for creating a polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPolygon {
    name: String,
    description: Option<String>,
    ring: Ring,
    population_density: Option<f64>,
}

impl NewPolygon {
    /// Validate and build a create draft.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        ring: Ring,
        population_density: Option<f64>,
    ) -> Result<Self, PolygonValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PolygonValidationError::EmptyName);
        }
        if let Some(density) = population_density {
            if !density.is_finite() || density < 0.0 {
                return Err(PolygonValidationError::NegativePopulationDensity(density));
            }
        }
        Ok(Self {
            name,
            description,
            ring,
            population_density,
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

    /// Candidate ring geometry.
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Optional density figure.
    pub fn population_density(&self) -> Option<f64> {
        self.population_density
    }
}

/// Partial update: absent fields leave the stored value untouched.
///
/// When `ring` is absent the duplicate-geometry query is skipped entirely
/// and the stored geometry is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonPatch {
    /// Replacement name, when present.
    pub name: Option<String>,
    /// Replacement description, when present.
    pub description: Option<String>,
    /// Replacement geometry, when present.
    pub ring: Option<Ring>,
    /// Replacement density, when present.
    pub population_density: Option<f64>,
}

impl PolygonPatch {
    /// Validate the patch fields that carry values.
    pub fn validate(&self) -> Result<(), PolygonValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(PolygonValidationError::EmptyName);
            }
        }
        if let Some(density) = self.population_density {
            if !density.is_finite() || density < 0.0 {
                return Err(PolygonValidationError::NegativePopulationDensity(density));
            }
        }
        Ok(())
    }
}
