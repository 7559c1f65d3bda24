//! Geospatial layer service: uniqueness-checked point and polygon records
//! over HTTP, backed by PostgreSQL/PostGIS.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
