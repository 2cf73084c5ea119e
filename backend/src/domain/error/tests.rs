//! Tests for domain error construction and trace capture.

use super::*;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::search_failed(), ErrorCode::SearchFailed, SEARCH_FAILED_MESSAGE)]
#[case(Error::lookup_failed(), ErrorCode::LookupFailed, LOOKUP_FAILED_MESSAGE)]
#[case(
    Error::invalid_request("Invalid query string"),
    ErrorCode::InvalidRequest,
    "Invalid query string"
)]
fn constructors_set_code_and_generic_message(
    #[case] error: Error,
    #[case] code: ErrorCode,
    #[case] message: &str,
) {
    assert_eq!(error.code(), code);
    assert_eq!(error.message(), message);
    assert_eq!(error.to_string(), message);
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async { Error::search_failed() }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn with_trace_id_overrides_captured_value() {
    let error = Error::lookup_failed().with_trace_id("abc");
    assert_eq!(error.trace_id(), Some("abc"));
}

#[rstest]
fn error_codes_serialise_as_snake_case() {
    let value = serde_json::to_value(ErrorCode::LookupFailed).expect("serialise code");
    assert_eq!(value, serde_json::json!("lookup_failed"));
}
