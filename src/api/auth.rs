use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use once_cell::sync::Lazy;
use serde_json::{Value, json};
use tracing::info;

use crate::error::ApiError;
use crate::models::LoginReq;

/// The one token this mock ever issues.
pub const MOCK_TOKEN: &str = "hrm-mock-token";

static MOCK_USER: Lazy<Value> = Lazy::new(|| {
    json!({
        "id": "usr-0001",
        "name": "Admin User",
        "email": "admin@hrm.local",
        "role": "ADMIN"
    })
});

/* =========================
Stub login
========================= */
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Fixed token plus a mock user", body = Object, example = json!({
            "token": "hrm-mock-token",
            "user": { "id": "usr-0001", "name": "Admin User", "email": "admin@hrm.local", "role": "ADMIN" }
        })),
        (status = 400, description = "Missing credentials")
    ),
    tag = "Auth"
)]
pub async fn login(payload: web::Json<LoginReq>) -> Result<HttpResponse, ApiError> {
    let email = payload
        .email
        .as_deref()
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Email and password are required".into()))?;
    payload
        .password
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Email and password are required".into()))?;

    // Any credentials pass; the user blob just echoes the email back.
    let mut user = MOCK_USER.clone();
    if let Some(obj) = user.as_object_mut() {
        obj.insert("email".into(), json!(email));
    }
    info!(email, "Mock login");

    Ok(HttpResponse::Ok().json(json!({ "token": MOCK_TOKEN, "user": user })))
}

/* =========================
Current user
========================= */
#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "The mock user"),
        (status = 401, description = "Missing or wrong bearer token")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn me(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.strip_prefix("Bearer ") == Some(MOCK_TOKEN));
    if !authorized {
        return Err(ApiError::Unauthorized("Invalid or missing token".into()));
    }
    Ok(HttpResponse::Ok().json(MOCK_USER.clone()))
}
