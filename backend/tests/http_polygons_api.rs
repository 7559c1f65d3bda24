//! HTTP surface tests for the polygon endpoints.

mod support;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use geolayer::inbound::http::health::HealthState;
use geolayer::inbound::http::polygons::PolygonResponseBody;
use geolayer::server::routes;

macro_rules! stub_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::Data::new(HealthState::new()))
                .configure(routes),
        )
        .await
    };
}

fn square_payload() -> Value {
    json!({
        "name": "square",
        "coordinates": [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]],
        "population_density": 12.5
    })
}

#[actix_web::test]
async fn create_polygon_returns_created_view() {
    let (state, _) = support::stub_state();
    let app = stub_app!(state);

    let req = test::TestRequest::post()
        .uri("/polygons")
        .set_json(square_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: PolygonResponseBody = test::read_body_json(resp).await;
    assert_eq!(body.id, 1);
    assert_eq!(body.geom, "POLYGON((0 0,4 0,4 4,0 4,0 0))");
    assert_eq!(body.population_density, Some(12.5));
}

#[actix_web::test]
async fn rotated_ring_is_rejected_as_duplicate() {
    let (state, _) = support::stub_state();
    let app = stub_app!(state);

    let first = test::TestRequest::post()
        .uri("/polygons")
        .set_json(square_payload())
        .to_request();
    assert_eq!(
        test::call_service(&app, first).await.status(),
        StatusCode::CREATED
    );

    // Same shape, different starting vertex.
    let second = test::TestRequest::post()
        .uri("/polygons")
        .set_json(json!({
            "name": "same square",
            "coordinates": [[0.0, 4.0], [0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]
        }))
        .to_request();
    let resp = test::call_service(&app, second).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], json!("duplicate_geometry"));
}

#[actix_web::test]
async fn too_short_ring_is_a_validation_error() {
    let (state, _) = support::stub_state();
    let app = stub_app!(state);

    let req = test::TestRequest::post()
        .uri("/polygons")
        .set_json(json!({ "name": "line", "coordinates": [[0.0, 0.0], [1.0, 1.0]] }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], json!("invalid_request"));
    assert_eq!(body["details"]["field"], json!("coordinates"));
}

#[actix_web::test]
async fn negative_density_is_a_validation_error() {
    let (state, _) = support::stub_state();
    let app = stub_app!(state);

    let req = test::TestRequest::post()
        .uri("/polygons")
        .set_json(json!({
            "name": "borough",
            "coordinates": [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]],
            "population_density": -1.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["details"]["field"], json!("population_density"));
}

#[actix_web::test]
async fn update_refreshes_density_and_keeps_geometry() {
    let (state, _) = support::stub_state();
    let app = stub_app!(state);

    let create = test::TestRequest::post()
        .uri("/polygons")
        .set_json(square_payload())
        .to_request();
    let created: PolygonResponseBody =
        test::read_body_json(test::call_service(&app, create).await).await;

    let update = test::TestRequest::put()
        .uri(&format!("/polygons/{}", created.id))
        .set_json(json!({ "population_density": 99.0 }))
        .to_request();
    let resp = test::call_service(&app, update).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: PolygonResponseBody = test::read_body_json(resp).await;
    assert_eq!(body.population_density, Some(99.0));
    assert_eq!(body.geom, created.geom);
    assert_ne!(body.updated_at, created.updated_at);
}

#[actix_web::test]
async fn update_of_unknown_id_returns_not_found() {
    let (state, _) = support::stub_state();
    let app = stub_app!(state);

    let req = test::TestRequest::put()
        .uri("/polygons/7")
        .set_json(json!({ "name": "ghost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], json!("not_found"));
    assert_eq!(body["message"], json!("Polygon not found"));
}

#[actix_web::test]
async fn list_polygons_returns_all_rows() {
    let (state, _) = support::stub_state();
    let app = stub_app!(state);

    let first = test::TestRequest::post()
        .uri("/polygons")
        .set_json(square_payload())
        .to_request();
    assert_eq!(
        test::call_service(&app, first).await.status(),
        StatusCode::CREATED
    );
    let second = test::TestRequest::post()
        .uri("/polygons")
        .set_json(json!({
            "name": "triangle",
            "coordinates": [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, second).await.status(),
        StatusCode::CREATED
    );

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/polygons").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<PolygonResponseBody> = test::read_body_json(resp).await;
    assert_eq!(body.len(), 2);
}
