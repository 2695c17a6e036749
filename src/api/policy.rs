use actix_web::{HttpResponse, web};
use serde_json::{Map, Value, json};
use tracing::info;

use crate::error::ApiError;
use crate::models::AcknowledgeReq;
use crate::store::{self, Store};

/* =========================
Acknowledge a policy
========================= */
#[utoipa::path(
    post,
    path = "/api/policies/{id}/acknowledge",
    params(("id" = String, Path, description = "Policy id")),
    request_body = AcknowledgeReq,
    responses(
        (status = 201, description = "The acknowledgment record"),
        (status = 400, description = "employeeId is required"),
        (status = 404, description = "Policy not found")
    ),
    tag = "Policy"
)]
pub async fn acknowledge_policy(
    store: web::Data<Store>,
    path: web::Path<String>,
    payload: web::Json<AcknowledgeReq>,
) -> Result<HttpResponse, ApiError> {
    let policy_id = path.into_inner();
    let policy = store
        .find("policies", &policy_id)
        .ok_or_else(|| ApiError::NotFound("Policy not found".into()))?;
    let employee_id = payload
        .employee_id
        .clone()
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::BadRequest("employeeId is required".into()))?;

    // No duplicate prevention; acknowledging twice appends twice.
    let mut fields = Map::new();
    fields.insert("policyId".into(), json!(policy_id));
    fields.insert("policyTitle".into(), policy.get("title").cloned().unwrap_or(Value::Null));
    fields.insert("employeeId".into(), json!(employee_id));
    fields.insert("acknowledgedAt".into(), json!(store::now_iso()));

    let record = store.insert("policyAcknowledgments", fields);
    info!(policy_id = %record["policyId"], "Policy acknowledged");
    Ok(HttpResponse::Created().json(record))
}
