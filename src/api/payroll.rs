use actix_web::{HttpResponse, web};
use serde_json::{Map, Value, json};
use tracing::info;

use crate::error::ApiError;
use crate::models::PayrollCycleStatus;
use crate::store::{self, Store};

// Stub rates; real tax computation is out of scope.
const INCOME_TAX_RATE: f64 = 0.10;
const SOCIAL_SECURITY_RATE: f64 = 0.08;

fn round_money(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/* =========================
Process a payroll cycle
========================= */
#[utoipa::path(
    post,
    path = "/api/payroll-cycles/{id}/process",
    params(("id" = String, Path, description = "Payroll cycle id")),
    responses(
        (status = 200, description = "Cycle set to PROCESSED with aggregated totals"),
        (status = 404, description = "Payroll cycle not found")
    ),
    tag = "Payroll"
)]
pub async fn process_cycle(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let cycle_id = path.into_inner();
    let cycle = store
        .find("payrollCycles", &cycle_id)
        .ok_or_else(|| ApiError::NotFound("Payroll cycle not found".into()))?;
    let reference_month = cycle
        .get("referenceMonth")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let mut total_gross = 0.0;
    let mut total_deductions = 0.0;
    let mut total_net = 0.0;
    let mut employee_count = 0u64;

    for employee in store.list("employees") {
        if employee.get("status").and_then(Value::as_str) != Some("ACTIVE") {
            continue;
        }
        let gross = employee.get("salary").and_then(Value::as_f64).unwrap_or(0.0);
        let income_tax = round_money(gross * INCOME_TAX_RATE);
        let social_security = round_money(gross * SOCIAL_SECURITY_RATE);
        let net = round_money(gross - income_tax - social_security);

        let mut payslip = Map::new();
        payslip.insert("payrollCycleId".into(), json!(cycle_id));
        payslip.insert("referenceMonth".into(), json!(reference_month));
        payslip.insert("employeeId".into(), employee.get("id").cloned().unwrap_or(Value::Null));
        payslip.insert("employeeName".into(), employee.get("name").cloned().unwrap_or(Value::Null));
        payslip.insert("grossPay".into(), json!(gross));
        payslip.insert("incomeTax".into(), json!(income_tax));
        payslip.insert("socialSecurity".into(), json!(social_security));
        payslip.insert("netPay".into(), json!(net));
        store.insert("payslips", payslip);

        total_gross += gross;
        total_deductions += income_tax + social_security;
        total_net += net;
        employee_count += 1;
    }

    let processed = store
        .update_with("payrollCycles", &cycle_id, |rec| {
            rec.insert("status".into(), json!(PayrollCycleStatus::Processed.to_string()));
            rec.insert("totalGross".into(), json!(round_money(total_gross)));
            rec.insert("totalDeductions".into(), json!(round_money(total_deductions)));
            rec.insert("totalNet".into(), json!(round_money(total_net)));
            rec.insert("employeeCount".into(), json!(employee_count));
            rec.insert("processedAt".into(), json!(store::now_iso()));
        })
        .ok_or_else(|| ApiError::NotFound("Payroll cycle not found".into()))?;

    info!(cycle_id = %cycle_id, employee_count, "Payroll cycle processed");
    Ok(HttpResponse::Ok().json(processed))
}
