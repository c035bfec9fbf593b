//! Tests for credential API handlers.

use super::*;
use crate::domain::{ErrorCode, INVALID_CREDENTIALS_MESSAGE};
use crate::inbound::http::test_utils::{TestPorts, test_app};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::Value;

const USER_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

fn profile_fixture() -> UserProfile {
    UserProfile {
        id: USER_ID.to_owned(),
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        age: 36,
        city: "London".to_owned(),
        contact: "0123456789".to_owned(),
    }
}

async fn call(ports: TestPorts, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(ports)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON body");
    (status, value)
}

#[rstest]
#[case(json!(36), "36")]
#[case(json!("36"), "36")]
#[case(json!(-1), "-1")]
#[case(json!(36.0), "36")]
#[case(json!(36.5), "36.5")]
fn age_input_renders_as_text(#[case] raw: Value, #[case] expected: &str) {
    let age: AgeInput = serde_json::from_value(raw).expect("age parses");
    assert_eq!(age.into_text(), expected);
}

#[actix_web::test]
async fn signup_acknowledges_without_echoing_credentials() {
    let mut ports = TestPorts::default();
    ports
        .signup
        .expect_register()
        .withf(|candidate| {
            candidate.age.as_deref() == Some("36")
                && candidate.password.as_ref().map(|p| p.as_str()) == Some("secret1")
        })
        .times(1)
        .returning(|_| Ok(UserId::random()));

    let (status, body) = call(
        ports,
        actix_test::TestRequest::post().uri("/signup").set_json(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "password": "secret1",
            "age": 36,
            "city": "London",
            "contact": "0123456789",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": SIGNUP_SUCCESS_MESSAGE})
    );
}

#[rstest]
#[case(Error::invalid_request("Email is invalid"), StatusCode::BAD_REQUEST, "message")]
#[case(Error::conflict("email is already registered"), StatusCode::CONFLICT, "message")]
#[case(Error::internal("pool exhausted"), StatusCode::INTERNAL_SERVER_ERROR, "error")]
#[actix_web::test]
async fn signup_failures_use_error_envelope(
    #[case] failure: Error,
    #[case] expected_status: StatusCode,
    #[case] text_key: &str,
) {
    let mut ports = TestPorts::default();
    ports
        .signup
        .expect_register()
        .return_once(move |_| Err(failure));

    let (status, body) = call(
        ports,
        actix_test::TestRequest::post()
            .uri("/signup")
            .set_json(json!({"email": "ada@example.com"})),
    )
    .await;

    assert_eq!(status, expected_status);
    assert_eq!(body["success"], json!(false));
    assert!(body[text_key].is_string());
}

#[actix_web::test]
async fn signup_rejects_non_numeric_age_type_as_bad_request() {
    let (status, body) = call(
        TestPorts::default(),
        actix_test::TestRequest::post()
            .uri("/signup")
            .set_json(json!({"age": true})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("invalid_request"));
}

#[actix_web::test]
async fn login_returns_profile_without_password() {
    let mut ports = TestPorts::default();
    ports
        .login
        .expect_authenticate()
        .withf(|creds| creds.email() == "ada@example.com" && creds.password() == "secret1")
        .times(1)
        .returning(|_| Ok(profile_fixture()));

    let (status, body) = call(
        ports,
        actix_test::TestRequest::post().uri("/login").set_json(&LoginRequest {
            email: Some("ada@example.com".into()),
            password: Some("secret1".into()),
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["email"], json!("ada@example.com"));
    let user = body["user"].as_object().expect("user object");
    assert!(!user.contains_key("password"));
    assert!(!user.contains_key("passwordHash"));
}

#[actix_web::test]
async fn login_rejection_is_401_with_generic_message() {
    let mut ports = TestPorts::default();
    ports
        .login
        .expect_authenticate()
        .returning(|_| Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE)));

    let (status, body) = call(
        ports,
        actix_test::TestRequest::post().uri("/login").set_json(&LoginRequest {
            email: Some("ada@example.com".into()),
            password: Some("wrong".into()),
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], json!(INVALID_CREDENTIALS_MESSAGE));
    assert_eq!(body["code"], json!("unauthorized"));
}

#[rstest]
#[case(None, Some("secret1"), "email is required", "email")]
#[case(Some("   "), Some("secret1"), "email is required", "email")]
#[case(Some("ada@example.com"), None, "password is required", "password")]
#[actix_web::test]
async fn login_validates_before_calling_the_service(
    #[case] email: Option<&str>,
    #[case] password: Option<&str>,
    #[case] message: &str,
    #[case] field: &str,
) {
    let (status, body) = call(
        TestPorts::default(),
        actix_test::TestRequest::post().uri("/login").set_json(&LoginRequest {
            email: email.map(str::to_owned),
            password: password.map(str::to_owned),
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!(message));
    assert_eq!(body["details"]["field"], json!(field));
    assert_eq!(body["details"]["code"], json!("missing_field"));
}

#[actix_web::test]
async fn profile_returns_user() {
    let mut ports = TestPorts::default();
    ports
        .profile
        .expect_fetch_profile()
        .withf(|id| id.to_string() == USER_ID)
        .times(1)
        .returning(|_| Ok(profile_fixture()));

    let (status, body) = call(
        ports,
        actix_test::TestRequest::get().uri(&format!("/profile/{USER_ID}")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: UserResponse = serde_json::from_value(body).expect("user response");
    assert_eq!(response.user, profile_fixture());
}

#[actix_web::test]
async fn profile_maps_unknown_user_to_404() {
    let mut ports = TestPorts::default();
    ports
        .profile
        .expect_fetch_profile()
        .returning(|_| Err(Error::not_found("User not found")));

    let (status, body) = call(
        ports,
        actix_test::TestRequest::get().uri(&format!("/profile/{USER_ID}")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("User not found"));
}

#[actix_web::test]
async fn profile_treats_malformed_id_as_not_found() {
    let (status, body) = call(
        TestPorts::default(),
        actix_test::TestRequest::get().uri("/profile/42"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], json!(ErrorCode::NotFound));
}
