//! Service entry-point: wires config, migrations, the connection pool, and
//! the REST endpoints.

use actix_web::{web, App, HttpServer};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use geolayer::ApiDoc;
use geolayer::inbound::http::health::HealthState;
use geolayer::outbound::persistence::{migrations, DbPool, PoolConfig};
use geolayer::server::config::AppConfig;
use geolayer::server::{build_state, routes};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env();

    let migration_url = config.database_url().to_owned();
    tokio::task::spawn_blocking(move || migrations::run_pending(&migration_url))
        .await
        .map_err(std::io::Error::other)?
        .map_err(std::io::Error::other)?;

    let pool = DbPool::new(PoolConfig::new(config.database_url()))
        .await
        .map_err(std::io::Error::other)?;

    let state = web::Data::new(build_state(&pool));
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(state.clone())
            .app_data(server_health_state.clone())
            .configure(routes);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(config.bind_addr())?;

    health_state.mark_ready();
    server.run().await
}
