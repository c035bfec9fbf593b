//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::{App, test as actix_test};
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no auth"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::upstream("github said no"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::service_unavailable("db down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn envelope_of(error: Error) -> (StatusCode, Option<String>, ErrorEnvelope) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("header is ascii").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let envelope = serde_json::from_slice(&bytes).expect("envelope deserialises");
    (status, header, envelope)
}

#[rstest]
#[actix_web::test]
async fn client_errors_use_message_key(expected_trace_id: String) {
    let error = Error::invalid_request("bad")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"field": "name"}));

    let (status, header, envelope) = envelope_of(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert!(!envelope.success);
    assert_eq!(envelope.message.as_deref(), Some("bad"));
    assert!(envelope.error.is_none());
    assert_eq!(envelope.trace_id, Some(expected_trace_id));
    assert_eq!(envelope.details, Some(json!({"field": "name"})));
}

#[rstest]
#[actix_web::test]
async fn upstream_errors_pass_message_through_under_error_key() {
    let (status, _, envelope) =
        envelope_of(Error::upstream("commit source returned status 403: rate limited")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope.code, ErrorCode::UpstreamFailure);
    assert!(envelope.message.is_none());
    assert_eq!(
        envelope.error.as_deref(),
        Some("commit source returned status 403: rate limited")
    );
}

#[rstest]
#[case(Error::internal("db password wrong"), "Internal server error")]
#[case(
    Error::service_unavailable("user repository unavailable: host pg-1 refused"),
    "Service unavailable"
)]
#[actix_web::test]
async fn server_errors_are_redacted(#[case] error: Error, #[case] visible: &str) {
    let error = error
        .with_trace_id(TRACE_ID)
        .with_details(json!({"secret": "x"}));

    let (_, header, envelope) = envelope_of(error).await;

    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(envelope.error.as_deref(), Some(visible));
    assert!(envelope.details.is_none());
    assert_eq!(envelope.trace_id.as_deref(), Some(TRACE_ID));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let (_, header, envelope) = envelope_of(Error::not_found("missing")).await;
    assert!(header.is_none());
    assert!(envelope.trace_id.is_none());
    assert_eq!(envelope.text(), Some("missing"));
}

#[rstest]
#[actix_web::test]
async fn malformed_json_becomes_invalid_request_envelope() {
    #[derive(serde::Deserialize)]
    struct Body {
        #[expect(dead_code, reason = "only deserialised")]
        name: String,
    }

    let app = actix_test::init_service(App::new().app_data(json_config()).route(
        "/",
        web::post().to(|_: web::Json<Body>| async { HttpResponse::Ok().finish() }),
    ))
    .await;
    let req = actix_test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let envelope: ErrorEnvelope = actix_test::read_body_json(res).await;
    assert_eq!(envelope.code, ErrorCode::InvalidRequest);
    assert!(envelope.message.is_some());
}
