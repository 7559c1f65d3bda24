//! Server assembly: route registration and adapter wiring.

pub mod config;

use std::sync::Arc;

use actix_web::web;

use crate::domain::{
    PointCommandService, PointQueryService, PolygonCommandService, PolygonQueryService,
};
use crate::inbound::http::{health, points, polygons, HttpState};
use crate::outbound::persistence::{DbPool, DieselPointRepository, DieselPolygonRepository};

/// Register every REST route on the given service config.
///
/// The [`HttpState`] and [`health::HealthState`] app data must be attached
/// by the caller.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(points::create_point)
        .service(points::list_points)
        .service(points::update_point)
        .service(polygons::create_polygon)
        .service(polygons::list_polygons)
        .service(polygons::update_polygon)
        .service(health::ready)
        .service(health::live);
}

/// Wire the Diesel repositories and domain services into handler state.
pub fn build_state(pool: &DbPool) -> HttpState {
    let point_repo = Arc::new(DieselPointRepository::new(pool.clone()));
    let polygon_repo = Arc::new(DieselPolygonRepository::new(pool.clone()));

    HttpState {
        points: Arc::new(PointCommandService::new(point_repo.clone())),
        points_query: Arc::new(PointQueryService::new(point_repo)),
        polygons: Arc::new(PolygonCommandService::new(polygon_repo.clone())),
        polygons_query: Arc::new(PolygonQueryService::new(polygon_repo)),
    }
}
