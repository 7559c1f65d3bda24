//! Geometry builder: canonical geometry values and their WKT serialisation.
//!
//! All geometries share one fixed spatial reference system ([`SRID`],
//! WGS84). The builder is a pure transformation: it validates the numeric
//! input and produces the canonical textual form consumed by the duplicate
//! check and mutation queries. It never talks to the store.

use thiserror::Error;

/// Spatial reference system identifier shared by every stored geometry.
pub const SRID: i32 = 4326;

/// Validation failures raised while building a geometry value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A coordinate component is NaN or infinite.
    #[error("{axis} must be a finite number")]
    NotFinite {
        /// Axis name, `longitude` or `latitude`.
        axis: &'static str,
    },
    /// Longitude outside [-180, 180].
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    /// Latitude outside [-90, 90].
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// A polygon ring needs at least three vertices.
    #[error("polygon ring needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}

/// A validated (longitude, latitude) pair in the fixed reference system.
///
/// Out-of-range and non-finite components are rejected here, before any
/// store interaction. Range checks are a policy choice: the store would
/// accept some out-of-range values silently, and rejecting early gives the
/// caller a field-level validation error instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
}

impl Coordinate {
    /// Validate and build a coordinate pair.
    ///
    /// # Examples
    /// ```
    /// use geolayer::domain::geometry::Coordinate;
    ///
    /// let c = Coordinate::new(12.5, -3.25).expect("valid coordinate");
    /// assert_eq!(c.longitude(), 12.5);
    /// assert!(Coordinate::new(181.0, 0.0).is_err());
    /// ```
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, GeometryError> {
        if !longitude.is_finite() {
            return Err(GeometryError::NotFinite { axis: "longitude" });
        }
        if !latitude.is_finite() {
            return Err(GeometryError::NotFinite { axis: "latitude" });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeometryError::LongitudeOutOfRange(longitude));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeometryError::LatitudeOutOfRange(latitude));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Longitude component.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude component.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Canonical WKT form, `POINT(x y)`.
    pub fn to_wkt(&self) -> String {
        format!("POINT({} {})", self.longitude, self.latitude)
    }
}

/// An ordered polygon ring of validated coordinate pairs.
///
/// The builder enforces only arity (three or more vertices); it does not
/// auto-close an open ring. A ring whose last vertex does not repeat the
/// first is serialised as-is and the store's rejection surfaces to the
/// caller rather than being masked here.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring(Vec<Coordinate>);

impl Ring {
    /// Validate and build a ring from ordered vertices.
    ///
    /// # Examples
    /// ```
    /// use geolayer::domain::geometry::{Coordinate, Ring};
    ///
    /// let square: Vec<Coordinate> = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]
    ///     .into_iter()
    ///     .map(|(x, y)| Coordinate::new(x, y).expect("valid vertex"))
    ///     .collect();
    /// let ring = Ring::new(square).expect("valid ring");
    /// assert_eq!(ring.vertices().len(), 5);
    /// ```
    pub fn new(vertices: Vec<Coordinate>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }
        Ok(Self(vertices))
    }

    /// Ordered vertices, exactly as supplied.
    pub fn vertices(&self) -> &[Coordinate] {
        &self.0
    }

    /// Canonical WKT form, `POLYGON((x1 y1,x2 y2,…))`.
    pub fn to_wkt(&self) -> String {
        let pairs: Vec<String> = self
            .0
            .iter()
            .map(|c| format!("{} {}", c.longitude, c.latitude))
            .collect();
        format!("POLYGON(({}))", pairs.join(","))
    }
}
