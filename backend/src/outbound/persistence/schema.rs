//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly. Timestamps carry no
//! column defaults on purpose: both are assigned explicitly by the
//! repositories at insert/update time.

diesel::table! {
    use diesel::sql_types::*;
    use crate::outbound::persistence::spatial::sql_types::Geometry;

    /// Point records with exact-coordinate-unique geometry.
    points (id) {
        /// Primary key, store-assigned serial.
        id -> Int4,
        /// Display name.
        name -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// PostGIS `geometry(Point, 4326)`, unique under `=`.
        geom -> Geometry,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    use diesel::sql_types::*;
    use crate::outbound::persistence::spatial::sql_types::Geometry;

    /// Polygon records with shape-unique geometry.
    polygons (id) {
        /// Primary key, store-assigned serial.
        id -> Int4,
        /// Display name.
        name -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// PostGIS `geometry(Polygon, 4326)`, unique under `ST_Normalize`.
        geom -> Geometry,
        /// Optional non-negative density figure.
        population_density -> Nullable<Double>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
