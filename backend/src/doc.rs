//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the query and health endpoints together with the
//! schema mirrors from [`crate::inbound::http::schemas`]. Swagger UI serves
//! it in debug builds; `cargo run --bin openapi-dump` prints it.

use utoipa::OpenApi;

use crate::inbound::http::ErrorBody;
use crate::inbound::http::health::{HealthReport, HealthStatus};
use crate::inbound::http::licence_holders::{FirearmsResponse, HoldersResponse};
use crate::inbound::http::schemas::{
    FirearmSchema, LicenceHolderSchema, LicenceTypeSchema, TransferStatusSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Firearms licence registry API",
        description = "Read-only search over licence holders and their registered firearms."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::licence_holders::search_holders,
        crate::inbound::http::licence_holders::list_firearms,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        LicenceHolderSchema,
        LicenceTypeSchema,
        FirearmSchema,
        TransferStatusSchema,
        HoldersResponse,
        FirearmsResponse,
        ErrorBody,
        HealthReport,
        HealthStatus,
    )),
    tags(
        (name = "licence-holders", description = "Holder search and firearm lookup"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
