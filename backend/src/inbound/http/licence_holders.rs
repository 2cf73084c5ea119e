//! Licence holder query endpoints.
//!
//! ```text
//! GET /api/licence-holders/search?q=smith
//! GET /api/licence-holders/{holderId}/firearms
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Firearm, LicenceHolder};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::no_store_header;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::{FirearmSchema, LicenceHolderSchema};
use crate::inbound::http::state::HttpState;

/// Query string for the holder search.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Partial name; fewer than two characters yields an empty list.
    #[param(example = "smith")]
    pub q: Option<String>,
}

impl SearchParams {
    /// Keep the first `q` when the parameter is repeated.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "q").then_some(value));
        Self { q }
    }
}

/// Response payload for the holder search.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HoldersResponse {
    /// Matching holders ordered by full name, at most 50.
    #[schema(value_type = Vec<LicenceHolderSchema>)]
    pub holders: Vec<LicenceHolder>,
}

/// Response payload for the firearm lookup.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FirearmsResponse {
    /// Firearms owned by the holder ordered by make then model.
    #[schema(value_type = Vec<FirearmSchema>)]
    pub firearms: Vec<Firearm>,
}

/// Search licence holders by partial name.
#[utoipa::path(
    get,
    path = "/api/licence-holders/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching holders", body = HoldersResponse),
        (status = 400, description = "Unparsable query string", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["licence-holders"],
    operation_id = "searchLicenceHolders"
)]
#[get("/licence-holders/search")]
pub async fn search_holders(
    state: web::Data<HttpState>,
    query: web::Query<Vec<(String, String)>>,
) -> ApiResult<HttpResponse> {
    let term = SearchParams::from_pairs(query.into_inner()).q.unwrap_or_default();
    let holders = state.holder_search.search_holders(&term).await?;
    Ok(HttpResponse::Ok()
        .insert_header(no_store_header())
        .json(HoldersResponse { holders }))
}

/// List the firearms registered to a holder.
#[utoipa::path(
    get,
    path = "/api/licence-holders/{holderId}/firearms",
    params(("holderId" = String, Path, description = "Holder identifier")),
    responses(
        (status = 200, description = "Firearms owned by the holder; empty when unknown", body = FirearmsResponse),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["licence-holders"],
    operation_id = "listHolderFirearms"
)]
#[get("/licence-holders/{holder_id}/firearms")]
pub async fn list_firearms(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let holder_id = path.into_inner();
    let firearms = state.firearm_lookup.firearms_for_holder(&holder_id).await?;
    Ok(HttpResponse::Ok()
        .insert_header(no_store_header())
        .json(FirearmsResponse { firearms }))
}

#[cfg(test)]
#[path = "licence_holders_tests.rs"]
mod tests;
