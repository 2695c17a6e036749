mod common;

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
async fn login_without_credentials_is_400() {
    let store = common::temp_store();
    let config = common::test_config();
    let app = test_app!(store, config);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "admin@hrm.local" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn login_returns_the_fixed_token() {
    let store = common::temp_store();
    let config = common::test_config();
    let app = test_app!(store, config);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "someone@hrm.local", "password": "whatever" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token"], "hrm-mock-token");
    assert_eq!(body["user"]["email"], "someone@hrm.local");
}

#[actix_web::test]
async fn me_requires_the_fixed_token() {
    let store = common::temp_store();
    let config = common::test_config();
    let app = test_app!(store, config);

    let req = test::TestRequest::get().uri("/auth/me").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/auth/me")
        .insert_header(("Authorization", "Bearer hrm-mock-token"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn acknowledge_policy_appends_a_record() {
    let store = common::temp_store();
    let config = common::test_config();
    let app = test_app!(store, config);

    let req = test::TestRequest::post()
        .uri("/api/policies/pol-9999/acknowledge")
        .set_json(json!({ "employeeId": "emp-0001" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/policies/pol-0001/acknowledge")
        .set_json(json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/policies/pol-0001/acknowledge")
        .set_json(json!({ "employeeId": "emp-0001" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let ack: Value = test::read_body_json(resp).await;
    assert_eq!(ack["policyId"], "pol-0001");
    assert_eq!(ack["policyTitle"], "Code of Conduct");
    assert!(ack["acknowledgedAt"].is_string());

    let req = test::TestRequest::get()
        .uri("/api/policy-acknowledgments?employeeId=emp-0001")
        .to_request();
    let acks: Vec<Value> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(acks.len(), 1);
}

#[actix_web::test]
async fn processing_a_cycle_writes_totals_and_payslips() {
    let store = common::temp_store();
    let config = common::test_config();
    let app = test_app!(store, config);

    let req = test::TestRequest::post()
        .uri("/api/payroll-cycles/pc-0002/process")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cycle: Value = test::read_body_json(resp).await;

    // Seeded ACTIVE salaries: 9500 + 5200 + 6100 (the TERMINATED one is skipped).
    assert_eq!(cycle["status"], "PROCESSED");
    assert_eq!(cycle["employeeCount"], json!(3));
    assert_eq!(cycle["totalGross"], json!(20800.0));
    assert_eq!(cycle["totalDeductions"], json!(3744.0));
    assert_eq!(cycle["totalNet"], json!(17056.0));
    assert!(cycle["processedAt"].is_string());

    let req = test::TestRequest::get()
        .uri("/api/payslips?payrollCycleId=pc-0002")
        .to_request();
    let payslips: Vec<Value> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(payslips.len(), 3);
    let alice = payslips.iter().find(|p| p["employeeId"] == "emp-0001").unwrap();
    assert_eq!(alice["grossPay"], json!(9500.0));
    assert_eq!(alice["incomeTax"], json!(950.0));
    assert_eq!(alice["socialSecurity"], json!(760.0));
    assert_eq!(alice["netPay"], json!(7790.0));
}

#[actix_web::test]
async fn unknown_cycle_is_404() {
    let store = common::temp_store();
    let config = common::test_config();
    let app = test_app!(store, config);

    let req = test::TestRequest::post()
        .uri("/api/payroll-cycles/nope/process")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn mentoring_creation_embeds_employee_copies() {
    let store = common::temp_store();
    let config = common::test_config();
    let app = test_app!(store, config);

    let req = test::TestRequest::post()
        .uri("/api/mentoring-relationships")
        .set_json(json!({ "mentorId": "emp-0001", "menteeId": "ghost-999" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let rel: Value = test::read_body_json(resp).await;

    assert_eq!(rel["status"], "ACTIVE");
    assert_eq!(rel["mentor"]["name"], "Alice Johnson");
    // Foreign keys are never validated; an unknown mentee embeds as null.
    assert!(rel["mentee"].is_null());
    assert_eq!(rel["menteeId"], "ghost-999");
}
