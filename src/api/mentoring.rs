use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use serde_json::{Map, Value, json};
use tracing::info;

use crate::models::CreateMentoring;
use crate::store::Store;

const COLLECTION: &str = "mentoringRelationships";

/* =========================
Create a mentoring relationship
========================= */
#[utoipa::path(
    post,
    path = "/api/mentoring-relationships",
    request_body = CreateMentoring,
    responses(
        (status = 201, description = "Relationship with denormalized mentor/mentee copies")
    ),
    tag = "Mentoring"
)]
pub async fn create_mentoring(
    store: web::Data<Store>,
    payload: web::Json<CreateMentoring>,
) -> HttpResponse {
    // Copies are embedded as-of now; nothing validates the referenced ids.
    let mentor = store.find("employees", &payload.mentor_id).unwrap_or(Value::Null);
    let mentee = store.find("employees", &payload.mentee_id).unwrap_or(Value::Null);

    let mut fields = Map::new();
    fields.insert("mentorId".into(), json!(payload.mentor_id));
    fields.insert("menteeId".into(), json!(payload.mentee_id));
    fields.insert("mentor".into(), mentor);
    fields.insert("mentee".into(), mentee);
    fields.insert("focusArea".into(), json!(payload.focus_area));
    fields.insert(
        "status".into(),
        json!(payload.status.clone().unwrap_or_else(|| "ACTIVE".to_string())),
    );

    let record = store.insert(COLLECTION, fields);
    info!(mentor_id = %payload.mentor_id, mentee_id = %payload.mentee_id, "Mentoring relationship created");
    HttpResponse::Created().json(record)
}

/// GET delegate so the literal /mentoring-relationships resource still lists.
pub async fn list_mentoring(
    store: web::Data<Store>,
    query: web::Query<HashMap<String, String>>,
) -> HttpResponse {
    HttpResponse::Ok().json(store.list_filtered(COLLECTION, &query))
}
