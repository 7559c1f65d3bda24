//! Persistence adapters backed by PostgreSQL/PostGIS via Diesel.

pub mod diesel_point_repository;
pub mod diesel_polygon_repository;
mod error_mapping;
pub mod migrations;
pub mod pool;
mod rows;
pub mod schema;
pub mod spatial;

pub use diesel_point_repository::DieselPointRepository;
pub use diesel_polygon_repository::DieselPolygonRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
