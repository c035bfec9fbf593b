//! Credential API handlers.
//!
//! ```text
//! POST /signup {"name":"Ada","email":"ada@example.com","password":"secret1","age":36,"city":"London","contact":"0123456789"}
//! POST /login {"email":"ada@example.com","password":"secret1"}
//! GET /profile/3fa85f64-5717-4562-b3fc-2c963f66afa6
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Number, json};
use utoipa::ToSchema;
use zeroize::Zeroizing;

use crate::domain::{
    Error, LoginCredentials, LoginValidationError, SignupCandidate, UserId, UserProfile,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::state::HttpState;

/// Acknowledgement text returned after a successful signup.
pub const SIGNUP_SUCCESS_MESSAGE: &str = "User registered successfully!";

/// Age as posted by clients: forms send text, API clients send numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Number(Number),
    Text(String),
}

impl AgeInput {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => match (number.as_u64(), number.as_i64(), number.as_f64()) {
                (Some(value), _, _) => value.to_string(),
                (None, Some(value), _) => value.to_string(),
                (None, None, Some(value)) if value.is_finite() && value.fract() == 0.0 => {
                    format!("{value:.0}")
                }
                _ => number.to_string(),
            },
        }
    }
}

/// Signup request body for `POST /signup`. Missing fields are reported by
/// validation rather than by the JSON extractor.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[serde(default)]
    #[schema(example = "secret1")]
    pub password: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<u32>, example = 36)]
    pub age: Option<AgeInput>,
    #[serde(default)]
    #[schema(example = "London")]
    pub city: Option<String>,
    #[serde(default)]
    #[schema(example = "0123456789")]
    pub contact: Option<String>,
}

impl From<SignupRequest> for SignupCandidate {
    fn from(value: SignupRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            password: value.password.map(Zeroizing::new),
            age: value.age.map(AgeInput::into_text),
            city: value.city,
            contact: value.contact,
        }
    }
}

/// Body returned by `POST /signup`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignupResponse {
    pub success: bool,
    #[schema(example = "User registered successfully!")]
    pub message: String,
}

/// Login request body for `POST /login`.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        let password = Zeroizing::new(value.password.unwrap_or_default());
        Self::try_from_parts(value.email.as_deref().unwrap_or_default(), &password)
    }
}

/// Body returned by `POST /login` and `GET /profile/{id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserProfile,
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyEmail => Error::invalid_request("email is required")
            .with_details(json!({ "field": "email", "code": "missing_field" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password is required")
            .with_details(json!({ "field": "password", "code": "missing_field" })),
    }
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User registered", body = SignupResponse),
        (status = 400, description = "Validation failed", body = ErrorEnvelope),
        (status = 409, description = "Email already registered", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "signup"
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<web::Json<SignupResponse>> {
    state.signup.register(payload.into_inner().into()).await?;
    Ok(web::Json(SignupResponse {
        success: true,
        message: SIGNUP_SUCCESS_MESSAGE.to_owned(),
    }))
}

/// Authenticate a user and return their profile.
///
/// Unknown emails and wrong passwords produce the same 401 response.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 401, description = "Invalid credentials", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let user = state.login.authenticate(&credentials).await?;
    Ok(web::Json(UserResponse {
        success: true,
        user,
    }))
}

/// Fetch a user profile by id.
#[utoipa::path(
    get,
    path = "/profile/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "getProfile"
)]
#[get("/profile/{id}")]
pub async fn profile(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let user_id = UserId::new(path.into_inner()).map_err(|_| Error::not_found("User not found"))?;
    let user = state.profile.fetch_profile(&user_id).await?;
    Ok(web::Json(UserResponse {
        success: true,
        user,
    }))
}

#[cfg(test)]
mod tests;
