//! Health endpoints.
//!
//! - `GET /health` pings the store and reports `healthy` with a timestamp, or
//!   503 `unhealthy`.
//! - `GET /health/ready` and `GET /health/live` are bodiless orchestration
//!   probes driven by [`HealthState`] flags.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, web};
use chrono::SecondsFormat;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::StoreHealth;
use crate::domain::{HEALTH_CHECK_FAILED_MESSAGE, TraceId};
use crate::inbound::http::cache_control::no_store_header;

/// Shared health state for the store check and the orchestration probes.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    store: Arc<dyn StoreHealth>,
    clock: Arc<dyn Clock>,
}

impl HealthState {
    /// Create a state that starts live but not ready.
    pub fn new(store: Arc<dyn StoreHealth>, clock: Arc<dyn Clock>) -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            store,
            clock,
        }
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response.insert_header(no_store_header()).finish()
    }
}

/// Overall status reported by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    pub status: HealthStatus,
    /// RFC 3339 UTC time of the check, present when healthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "2026-01-15T12:00:00.000Z")]
    pub timestamp: Option<String>,
    /// Failure description, present when unhealthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Health check failed")]
    pub error: Option<String>,
}

/// Store health check.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Store reachable", body = HealthReport),
        (status = 503, description = "Store unreachable", body = HealthReport)
    )
)]
#[get("/health")]
pub async fn health(state: web::Data<HealthState>) -> HttpResponse {
    match state.store.ping().await {
        Ok(()) => HttpResponse::Ok()
            .insert_header(no_store_header())
            .json(HealthReport {
                status: HealthStatus::Healthy,
                timestamp: Some(state.clock.utc().to_rfc3339_opts(SecondsFormat::Millis, true)),
                error: None,
            }),
        Err(err) => {
            error!(trace_id = ?TraceId::current(), error = %err, "store health check failed");
            HttpResponse::ServiceUnavailable()
                .insert_header(no_store_header())
                .json(HealthReport {
                    status: HealthStatus::Unhealthy,
                    timestamp: None,
                    error: Some(HEALTH_CHECK_FAILED_MESSAGE.to_owned()),
                })
        }
    }
}

/// Readiness probe. Returns 200 once start-up has completed, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe. Returns 200 while alive and 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}
