//! PostGIS SQL bindings for Diesel.
//!
//! Diesel ships no PostGIS support, so the `geometry` column type and the
//! handful of spatial functions the repositories need are declared here.
//! Geometry values never cross into Rust: every read goes through
//! `ST_AsText`/`ST_X`/`ST_Y` and every write through `ST_GeomFromText`, so
//! no `FromSql`/`ToSql` impl is required for the opaque type.

use diesel::define_sql_function;
use diesel::sql_types::{Integer, Text};

use self::sql_types::Geometry;

pub mod sql_types {
    //! Custom SQL types used by the table definitions.

    use diesel::query_builder::QueryId;
    use diesel::sql_types::SqlType;

    /// The PostGIS `geometry` column type. Opaque on the Rust side.
    #[derive(SqlType, QueryId)]
    #[diesel(postgres_type(name = "geometry"))]
    pub struct Geometry;
}

define_sql_function! {
    /// Parse WKT into a geometry tagged with the given SRID.
    #[sql_name = "ST_GeomFromText"]
    fn st_geomfromtext(wkt: Text, srid: Integer) -> Geometry;
}

define_sql_function! {
    /// Canonical WKT serialisation of a stored geometry.
    #[sql_name = "ST_AsText"]
    fn st_astext(geom: Geometry) -> Text;
}

define_sql_function! {
    /// X ordinate (longitude) of a point geometry.
    #[sql_name = "ST_X"]
    fn st_x(geom: Geometry) -> Double;
}

define_sql_function! {
    /// Y ordinate (latitude) of a point geometry.
    #[sql_name = "ST_Y"]
    fn st_y(geom: Geometry) -> Double;
}

define_sql_function! {
    /// True spatial-shape equality, independent of vertex order and
    /// representation. Used for the polygon duplicate check.
    #[sql_name = "ST_Equals"]
    fn st_equals(a: Geometry, b: Geometry) -> Bool;
}
