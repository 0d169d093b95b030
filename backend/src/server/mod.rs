//! HTTP server assembly.

pub mod config;

pub use self::config::{AppConfig, ConfigError};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::health::{self, HealthState};
use crate::inbound::http::{self, AppState};

/// Assemble the application with its routes and shared state.
pub fn build_app(
    state: web::Data<AppState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(state)
        .app_data(health_state)
        .service(http::api_scope())
        .service(health::ready)
        .service(health::live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the server, mark readiness, and run until shutdown.
pub async fn run(config: AppConfig, state: AppState) -> std::io::Result<()> {
    let state = web::Data::new(state);
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness flag stays reachable.
    let factory_state = state.clone();
    let factory_health = health_state.clone();

    let server = HttpServer::new(move || build_app(factory_state.clone(), factory_health.clone()))
        .bind(config.bind_addr())?;

    health_state.mark_ready();
    server.run().await
}
