//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod points;
pub mod polygons;
pub mod state;
mod validation;

pub use error::ApiResult;
pub use state::HttpState;
