use actix_web::HttpResponse;
use serde_json::json;

pub mod attendance;
pub mod auth;
pub mod leave_request;
pub mod mentoring;
pub mod payroll;
pub mod policy;
pub mod resources;

/// Default service: the dispatcher 404s anything no route claimed.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "message": "Not found" }))
}
