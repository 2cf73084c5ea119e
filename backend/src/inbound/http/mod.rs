//! HTTP inbound adapter exposing the registry's REST endpoints.

use actix_web::web;

pub mod cache_control;
pub mod error;
pub mod health;
pub mod licence_holders;
pub mod schemas;
pub mod state;

pub use error::{ApiResult, ErrorBody};

/// Register the query and health routes, and the query-string error handler.
///
/// Callers supply `web::Data<HttpState>` and `web::Data<HealthState>` and
/// wrap the app in [`crate::Trace`].
///
/// ```ignore
/// App::new()
///     .app_data(http_state)
///     .app_data(health_state)
///     .wrap(Trace)
///     .configure(registry_backend::inbound::http::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(
            web::scope("/api")
                .service(licence_holders::search_holders)
                .service(licence_holders::list_firearms),
        )
        .service(health::health)
        .service(health::ready)
        .service(health::live);
}
