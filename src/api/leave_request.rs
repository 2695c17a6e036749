use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use serde_json::{Map, json};
use tracing::info;

use crate::error::ApiError;
use crate::models::{CreateLeave, LeaveStatus};
use crate::store::Store;

const COLLECTION: &str = "leaveRequests";

/* =========================
Create leave request
========================= */
#[utoipa::path(
    post,
    path = "/api/leave-requests",
    request_body = CreateLeave,
    responses(
        (status = 201, description = "The stored request, status PENDING"),
        (status = 400, description = "startDate after endDate or unparseable dates")
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    store: web::Data<Store>,
    payload: web::Json<CreateLeave>,
) -> Result<HttpResponse, ApiError> {
    if payload.start_date > payload.end_date {
        return Err(ApiError::BadRequest("startDate cannot be after endDate".into()));
    }
    let days = payload
        .days
        .unwrap_or_else(|| ((payload.end_date - payload.start_date).num_days() + 1) as f64);

    let mut fields = Map::new();
    fields.insert("employeeId".into(), json!(payload.employee_id));
    fields.insert("leaveTypeId".into(), json!(payload.leave_type_id));
    fields.insert("startDate".into(), json!(payload.start_date.to_string()));
    fields.insert("endDate".into(), json!(payload.end_date.to_string()));
    fields.insert("days".into(), json!(days));
    fields.insert("reason".into(), json!(payload.reason));
    fields.insert("status".into(), json!(LeaveStatus::Pending.to_string()));

    let record = store.insert(COLLECTION, fields);
    info!(employee_id = %payload.employee_id, days, "Leave request submitted");
    Ok(HttpResponse::Created().json(record))
}

/// GET delegate so the literal /leave-requests resource still lists.
pub async fn list_leave(
    store: web::Data<Store>,
    query: web::Query<HashMap<String, String>>,
) -> HttpResponse {
    HttpResponse::Ok().json(store.list_filtered(COLLECTION, &query))
}

fn set_status(store: &Store, id: &str, status: LeaveStatus) -> Result<HttpResponse, ApiError> {
    // No transition table: the new literal is applied unconditionally.
    match store.update_with(COLLECTION, id, |rec| {
        rec.insert("status".into(), json!(status.to_string()));
    }) {
        Some(record) => {
            info!(leave_id = id, status = %status, "Leave status set");
            Ok(HttpResponse::Ok().json(record))
        }
        None => Err(ApiError::NotFound("Leave request not found".into())),
    }
}

/* =========================
Approve / reject / cancel
========================= */
#[utoipa::path(
    put,
    path = "/api/leave-requests/{id}/approve",
    params(("id" = String, Path, description = "Leave request id")),
    responses(
        (status = 200, description = "Request with status APPROVED"),
        (status = 404, description = "Leave request not found")
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    set_status(&store, &path, LeaveStatus::Approved)
}

#[utoipa::path(
    put,
    path = "/api/leave-requests/{id}/reject",
    params(("id" = String, Path, description = "Leave request id")),
    responses(
        (status = 200, description = "Request with status REJECTED"),
        (status = 404, description = "Leave request not found")
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    set_status(&store, &path, LeaveStatus::Rejected)
}

#[utoipa::path(
    put,
    path = "/api/leave-requests/{id}/cancel",
    params(("id" = String, Path, description = "Leave request id")),
    responses(
        (status = 200, description = "Request with status CANCELLED"),
        (status = 404, description = "Leave request not found")
    ),
    tag = "Leave"
)]
pub async fn cancel_leave(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    set_status(&store, &path, LeaveStatus::Cancelled)
}
