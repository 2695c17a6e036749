mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use chrono::{DateTime, Utc};
use hrm_mock::api::attendance::work_hours;
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

fn parse(ts: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(ts.as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

#[actix_web::test]
async fn duplicate_check_in_is_400() {
    let store = common::temp_store();
    let config = common::test_config();
    let app = test_app!(store, config);

    let req = test::TestRequest::post()
        .uri("/api/attendance/check-in")
        .set_json(json!({ "employeeId": "emp-0001" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/attendance/check-in")
        .set_json(json!({ "employeeId": "emp-0001" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn check_out_without_check_in_is_400() {
    let store = common::temp_store();
    let config = common::test_config();
    let app = test_app!(store, config);

    let req = test::TestRequest::post()
        .uri("/api/attendance/check-out")
        .set_json(json!({ "employeeId": "emp-0002" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn check_out_derives_work_hours_from_the_stored_stamps() {
    let store = common::temp_store();
    let config = common::test_config();
    let app = test_app!(store, config);

    let req = test::TestRequest::post()
        .uri("/api/attendance/check-in")
        .set_json(json!({ "employeeId": "emp-0003" }))
        .to_request();
    let checked_in: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(checked_in["status"], "PRESENT");
    assert!(checked_in["checkOut"].is_null());

    let req = test::TestRequest::post()
        .uri("/api/attendance/check-out")
        .set_json(json!({ "employeeId": "emp-0003" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let checked_out: Value = test::read_body_json(resp).await;

    let check_in = parse(&checked_out["checkIn"]);
    let check_out = parse(&checked_out["checkOut"]);
    let expected = work_hours(check_in, check_out);
    assert_eq!(checked_out["workHours"], json!(expected));
    assert!(expected >= 0.0);

    // A second check-out finds no open record.
    let req = test::TestRequest::post()
        .uri("/api/attendance/check-out")
        .set_json(json!({ "employeeId": "emp-0003" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}
