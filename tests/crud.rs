mod common;

use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use hrm_mock::routes;
use serde_json::{Value, json};

macro_rules! test_app {
    ($store:expr, $config:expr) => {
        test::init_service(
            App::new()
                .app_data($store.clone())
                .configure(|cfg| routes::configure(cfg, &$config)),
        )
        .await
    };
}

#[actix_web::test]
async fn end_to_end_employee_scenario() {
    let store = common::temp_store();
    let config = common::test_config();
    let app = test_app!(store, config);

    // Create
    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(json!({ "name": "X" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 8);
    assert_eq!(created["name"], "X");
    assert!(created["createdAt"].is_string());
    assert_eq!(created["createdAt"], created["updatedAt"]);

    // List includes it
    let req = test::TestRequest::get().uri("/api/employees").to_request();
    let listed: Vec<Value> = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(listed.iter().any(|e| e["id"] == json!(id)));

    // Patch merges and advances updatedAt
    actix_web::rt::time::sleep(Duration::from_millis(10)).await;
    let req = test::TestRequest::patch()
        .uri(&format!("/api/employees/{id}"))
        .set_json(json!({ "salary": 9000 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let patched: Value = test::read_body_json(resp).await;
    assert_eq!(patched["salary"], json!(9000));
    assert_eq!(patched["name"], "X");
    assert_eq!(patched["createdAt"], created["createdAt"]);
    assert_ne!(patched["updatedAt"], created["updatedAt"]);

    // Delete, then 404
    let req = test::TestRequest::delete()
        .uri(&format!("/api/employees/{id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
    let req = test::TestRequest::get()
        .uri(&format!("/api/employees/{id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn unknown_collection_is_404() {
    let store = common::temp_store();
    let config = common::test_config();
    let app = test_app!(store, config);

    let req = test::TestRequest::get().uri("/api/widgets").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/widgets")
        .set_json(json!({ "name": "nope" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn non_object_body_is_400() {
    let store = common::temp_store();
    let config = common::test_config();
    let app = test_app!(store, config);

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .set_json(json!([1, 2, 3]))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn list_filters_by_query_equality() {
    let store = common::temp_store();
    let config = common::test_config();
    let app = test_app!(store, config);

    let req = test::TestRequest::get()
        .uri("/api/leave-requests?status=PENDING")
        .to_request();
    let pending: Vec<Value> = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(!pending.is_empty());
    assert!(pending.iter().all(|r| r["status"] == "PENDING"));

    let req = test::TestRequest::get()
        .uri("/api/employees?department=Engineering")
        .to_request();
    let engineers: Vec<Value> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(engineers.len(), 1);
    assert_eq!(engineers[0]["id"], "emp-0001");
}
