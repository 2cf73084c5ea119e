//! Tests for the licence holder HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use rstest::rstest;
use serde_json::Value;

use super::*;
use crate::Trace;
use crate::domain::Error;
use crate::domain::ports::{
    FixtureFirearmLookupQuery, FixtureHolderSearchQuery, MockFirearmLookupQuery,
    MockHolderSearchQuery,
};
use crate::test_support::{InMemoryRegistry, StoreFailure, firearm, holder, holder_id, http_state_for};

const ANNA: u128 = 1;

async fn get_json(state: HttpState, uri: &str) -> (StatusCode, Option<String>, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .service(web::scope("/api").service(search_holders).service(list_firearms)),
    )
    .await;
    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = res.status();
    let cache_control = res
        .headers()
        .get("Cache-Control")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body: Value = test::read_body_json(res).await;
    (status, cache_control, body)
}

fn seeded_registry() -> Arc<InMemoryRegistry> {
    let registry = Arc::new(InMemoryRegistry::new());
    registry.insert_holder(holder(holder_id(2), "Bandana", "Joe"));
    registry.insert_holder(holder(holder_id(ANNA), "Anna", "Smith"));
    registry.insert_holder(holder(holder_id(3), "Carl", "Oswald"));
    registry.insert_firearm(firearm(11, holder_id(ANNA), "Glock", "19"));
    registry.insert_firearm(firearm(10, holder_id(ANNA), "Beretta", "92"));
    registry.insert_firearm(firearm(12, holder_id(2), "Browning", "Citori"));
    registry
}

fn names(body: &Value) -> Vec<&str> {
    body["holders"]
        .as_array()
        .expect("holders array")
        .iter()
        .map(|h| h["full_name"].as_str().expect("full_name"))
        .collect()
}

#[actix_web::test]
async fn search_returns_matches_in_full_name_order() {
    let registry = seeded_registry();

    let (status, cache_control, body) =
        get_json(http_state_for(&registry), "/api/licence-holders/search?q=an").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("no-store"));
    assert_eq!(names(&body), ["Anna Smith", "Bandana Joe"]);
}

#[actix_web::test]
async fn search_serialises_holders_with_snake_case_fields() {
    let registry = seeded_registry();

    let (_, _, body) =
        get_json(http_state_for(&registry), "/api/licence-holders/search?q=smith").await;

    let anna = &body["holders"][0];
    assert_eq!(anna["holder_id"], "00000000-0000-0000-0000-000000000001");
    assert_eq!(anna["licence_type"], "firearm_certificate");
    assert_eq!(anna["dob"], "1979-08-21");
    assert_eq!(anna["email"], Value::Null);
}

#[rstest]
#[case("/api/licence-holders/search?q=a")]
#[case("/api/licence-holders/search?q=")]
#[case("/api/licence-holders/search")]
#[actix_web::test]
async fn short_or_missing_terms_return_empty_without_store_read(#[case] uri: &str) {
    let registry = seeded_registry();

    let (status, _, body) = get_json(http_state_for(&registry), uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "holders": [] }));
    assert_eq!(registry.holder_reads(), 0);
}

#[actix_web::test]
async fn search_forwards_the_decoded_term() {
    let mut search = MockHolderSearchQuery::new();
    search
        .expect_search_holders()
        .withf(|term| term == "o'neil 50%")
        .times(1)
        .returning(|_| Ok(Vec::new()));
    let state = HttpState::new(Arc::new(search), Arc::new(FixtureFirearmLookupQuery));

    let (status, _, _) = get_json(state, "/api/licence-holders/search?q=o%27neil%2050%25").await;

    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[case::repeated("/api/licence-holders/search?q=an&q=zz", &["Anna Smith", "Bandana Joe"])]
#[case::after_other_keys("/api/licence-holders/search?page=2&q=smith&q=", &["Anna Smith"])]
#[actix_web::test]
async fn repeated_term_uses_the_first_value(#[case] uri: &str, #[case] expected: &[&str]) {
    let registry = seeded_registry();

    let (status, _, body) = get_json(http_state_for(&registry), uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), expected);
}

#[rstest]
#[case(StoreFailure::Connection)]
#[case(StoreFailure::Query)]
#[actix_web::test]
async fn search_store_failure_returns_generic_error(#[case] failure: StoreFailure) {
    let registry = seeded_registry();
    registry.fail_with(failure);

    let (status, _, body) =
        get_json(http_state_for(&registry), "/api/licence-holders/search?q=smith").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Search failed" }));
}

#[actix_web::test]
async fn firearms_are_ordered_by_make_then_model() {
    let registry = seeded_registry();
    let uri = format!("/api/licence-holders/{}/firearms", holder_id(ANNA));

    let (status, cache_control, body) = get_json(http_state_for(&registry), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("no-store"));
    let makes: Vec<_> = body["firearms"]
        .as_array()
        .expect("firearms array")
        .iter()
        .map(|f| (f["make"].as_str(), f["model"].as_str(), f["type"].as_str()))
        .collect();
    assert_eq!(
        makes,
        [
            (Some("Beretta"), Some("92"), Some("pistol")),
            (Some("Glock"), Some("19"), Some("pistol")),
        ]
    );
}

#[rstest]
#[case::no_firearms(holder_id(3).to_string())]
#[case::unknown_holder(holder_id(99).to_string())]
#[case::not_a_uuid("H1".to_owned())]
#[actix_web::test]
async fn holders_without_firearms_yield_empty_list(#[case] raw_id: String) {
    let registry = seeded_registry();
    let uri = format!("/api/licence-holders/{raw_id}/firearms");

    let (status, _, body) = get_json(http_state_for(&registry), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "firearms": [] }));
}

#[actix_web::test]
async fn lookup_failure_returns_generic_error() {
    let mut lookup = MockFirearmLookupQuery::new();
    lookup
        .expect_firearms_for_holder()
        .times(1)
        .returning(|_| Err(Error::lookup_failed()));
    let state = HttpState::new(Arc::new(FixtureHolderSearchQuery), Arc::new(lookup));
    let uri = format!("/api/licence-holders/{}/firearms", holder_id(ANNA));

    let (status, _, body) = get_json(state, &uri).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Failed to fetch firearms" }));
}

#[actix_web::test]
async fn repeated_searches_are_idempotent() {
    let registry = seeded_registry();
    let state = http_state_for(&registry);

    let (_, _, first) = get_json(state.clone(), "/api/licence-holders/search?q=an").await;
    let (_, _, second) = get_json(state, "/api/licence-holders/search?q=an").await;

    assert_eq!(first, second);
}
