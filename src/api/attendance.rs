use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use tracing::info;

use crate::error::ApiError;
use crate::models::{AttendanceStatus, CheckInReq, CheckOutReq};
use crate::store::{self, Store};

/// Millisecond difference over an hour, exactly as the store file records it.
pub fn work_hours(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> f64 {
    (check_out - check_in).num_milliseconds() as f64 / 3_600_000.0
}

fn is_for_today(rec: &Map<String, Value>, employee_id: &str, today: &str) -> bool {
    rec.get("employeeId").and_then(Value::as_str) == Some(employee_id)
        && rec.get("date").and_then(Value::as_str) == Some(today)
}

/* =========================
Check-in
========================= */
#[utoipa::path(
    post,
    path = "/api/attendance/check-in",
    request_body = CheckInReq,
    responses(
        (status = 201, description = "Today's attendance record"),
        (status = 400, description = "Already checked in today", body = Object, example = json!({
            "message": "Already checked in today"
        }))
    ),
    tag = "Attendance"
)]
pub async fn check_in(
    store: web::Data<Store>,
    payload: web::Json<CheckInReq>,
) -> Result<HttpResponse, ApiError> {
    let today = Utc::now().date_naive().to_string();

    if store
        .find_first("attendance", |rec| is_for_today(rec, &payload.employee_id, &today))
        .is_some()
    {
        return Err(ApiError::BadRequest("Already checked in today".into()));
    }

    let mut fields = Map::new();
    fields.insert("employeeId".into(), json!(payload.employee_id));
    fields.insert("date".into(), json!(today));
    fields.insert("checkIn".into(), json!(store::now_iso()));
    fields.insert("checkOut".into(), Value::Null);
    fields.insert("status".into(), json!(AttendanceStatus::Present.to_string()));

    let record = store.insert("attendance", fields);
    info!(employee_id = %payload.employee_id, "Checked in");
    Ok(HttpResponse::Created().json(record))
}

/* =========================
Check-out
========================= */
#[utoipa::path(
    post,
    path = "/api/attendance/check-out",
    request_body = CheckOutReq,
    responses(
        (status = 200, description = "Attendance record with checkOut and derived workHours"),
        (status = 400, description = "No check-in found for today", body = Object, example = json!({
            "message": "No check-in found for today"
        }))
    ),
    tag = "Attendance"
)]
pub async fn check_out(
    store: web::Data<Store>,
    payload: web::Json<CheckOutReq>,
) -> Result<HttpResponse, ApiError> {
    let today = Utc::now().date_naive().to_string();

    let open = store
        .find_first("attendance", |rec| {
            is_for_today(rec, &payload.employee_id, &today)
                && rec.get("checkIn").and_then(Value::as_str).is_some()
                && rec.get("checkOut").map_or(true, Value::is_null)
        })
        .ok_or_else(|| ApiError::BadRequest("No check-in found for today".into()))?;

    let check_in = open
        .get("checkIn")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|d| d.with_timezone(&Utc))
        .ok_or_else(|| ApiError::BadRequest("No check-in found for today".into()))?;

    let id = open
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::BadRequest("No check-in found for today".into()))?
        .to_string();

    // Stamp first, then parse the stamp back, so the stored workHours is
    // exactly derivable from the stored checkIn/checkOut strings.
    let check_out_iso = store::now_iso();
    let check_out_at = DateTime::parse_from_rfc3339(&check_out_iso)
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());
    let hours = work_hours(check_in, check_out_at);

    let updated = store
        .update_with("attendance", &id, |rec| {
            rec.insert("checkOut".into(), json!(check_out_iso));
            rec.insert("workHours".into(), json!(hours));
        })
        .ok_or_else(|| ApiError::BadRequest("No check-in found for today".into()))?;

    info!(employee_id = %payload.employee_id, hours, "Checked out");
    Ok(HttpResponse::Ok().json(updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn work_hours_is_millis_over_an_hour() {
        let check_in = Utc.with_ymd_and_hms(2025, 1, 3, 9, 0, 0).unwrap();
        let check_out = Utc.with_ymd_and_hms(2025, 1, 3, 17, 30, 0).unwrap();
        assert_eq!(work_hours(check_in, check_out), 8.5);

        let check_out = check_in + chrono::Duration::milliseconds(90_000);
        assert_eq!(work_hours(check_in, check_out), 90_000.0 / 3_600_000.0);
    }
}
