use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use serde_json::Value;
use tracing::debug;

use crate::collections;
use crate::error::ApiError;
use crate::store::Store;

fn collection_key(segment: &str) -> Result<&'static str, ApiError> {
    collections::key_for(segment)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown resource: {segment}")))
}

/// List a collection, optionally narrowed by field-equality query params.
#[utoipa::path(
    get,
    path = "/api/{collection}",
    params(
        ("collection" = String, Path, description = "Collection route segment, e.g. employees")
    ),
    responses(
        (status = 200, description = "Full or filtered collection as a plain JSON array"),
        (status = 404, description = "Unknown collection")
    ),
    tag = "Resources"
)]
pub async fn list_resources(
    store: web::Data<Store>,
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError> {
    let key = collection_key(&path)?;
    let records = store.list_filtered(key, &query);
    debug!(collection = key, count = records.len(), "List");
    Ok(HttpResponse::Ok().json(records))
}

/// Fetch one record by id.
#[utoipa::path(
    get,
    path = "/api/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "Collection route segment"),
        ("id" = String, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "The record"),
        (status = 404, description = "Unknown collection or absent record")
    ),
    tag = "Resources"
)]
pub async fn get_resource(
    store: web::Data<Store>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (segment, id) = path.into_inner();
    let key = collection_key(&segment)?;
    match store.find(key, &id) {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Err(ApiError::NotFound("Record not found".into())),
    }
}

/// Create a record: id and timestamps are assigned server-side.
#[utoipa::path(
    post,
    path = "/api/{collection}",
    params(
        ("collection" = String, Path, description = "Collection route segment")
    ),
    request_body(content = Object, description = "Arbitrary record fields"),
    responses(
        (status = 201, description = "The stored record, with generated id and timestamps"),
        (status = 400, description = "Body is not a JSON object"),
        (status = 404, description = "Unknown collection")
    ),
    tag = "Resources"
)]
pub async fn create_resource(
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let key = collection_key(&path)?;
    let Value::Object(fields) = body.into_inner() else {
        return Err(ApiError::BadRequest("Request body must be a JSON object".into()));
    };
    let record = store.insert(key, fields);
    Ok(HttpResponse::Created().json(record))
}

/// Shallow-merge a partial body over the record and restamp `updatedAt`.
#[utoipa::path(
    patch,
    path = "/api/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "Collection route segment"),
        ("id" = String, Path, description = "Record id")
    ),
    request_body(content = Object, description = "Partial record fields"),
    responses(
        (status = 200, description = "The merged record"),
        (status = 400, description = "Body is not a JSON object"),
        (status = 404, description = "Unknown collection or absent record")
    ),
    tag = "Resources"
)]
pub async fn update_resource(
    store: web::Data<Store>,
    path: web::Path<(String, String)>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let (segment, id) = path.into_inner();
    let key = collection_key(&segment)?;
    let Value::Object(patch) = body.into_inner() else {
        return Err(ApiError::BadRequest("Request body must be a JSON object".into()));
    };
    match store.merge(key, &id, patch) {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Err(ApiError::NotFound("Record not found".into())),
    }
}

/// Splice the record out of its collection.
#[utoipa::path(
    delete,
    path = "/api/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "Collection route segment"),
        ("id" = String, Path, description = "Record id")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Unknown collection or absent record")
    ),
    tag = "Resources"
)]
pub async fn delete_resource(
    store: web::Data<Store>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (segment, id) = path.into_inner();
    let key = collection_key(&segment)?;
    if store.remove(key, &id) {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::NotFound("Record not found".into()))
    }
}
