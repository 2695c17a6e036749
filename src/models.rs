use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayrollCycleStatus {
    Draft,
    Calculating,
    Calculated,
    PendingApproval,
    Approved,
    Processing,
    Processed,
    Paid,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Present,
    Absent,
    OnLeave,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginReq {
    #[schema(example = "admin@hrm.local")]
    pub email: Option<String>,
    #[schema(example = "secret")]
    pub password: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckInReq {
    #[schema(example = "emp-0001")]
    pub employee_id: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutReq {
    #[schema(example = "emp-0001")]
    pub employee_id: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeave {
    #[schema(example = "emp-0001")]
    pub employee_id: String,
    #[schema(example = "lt-0001")]
    pub leave_type_id: Option<String>,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-07", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    /// Taken from the body when given, otherwise derived from the range.
    pub days: Option<f64>,
    pub reason: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcknowledgeReq {
    #[schema(example = "emp-0001")]
    pub employee_id: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMentoring {
    #[schema(example = "emp-0001")]
    pub mentor_id: String,
    #[schema(example = "emp-0003")]
    pub mentee_id: String,
    pub focus_area: Option<String>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_literals_match_the_store_format() {
        assert_eq!(LeaveStatus::Pending.to_string(), "PENDING");
        assert_eq!(LeaveStatus::Cancelled.to_string(), "CANCELLED");
        assert_eq!(PayrollCycleStatus::PendingApproval.to_string(), "PENDING_APPROVAL");
        assert_eq!(AttendanceStatus::OnLeave.to_string(), "ON_LEAVE");
    }

    #[test]
    fn status_literals_parse_back() {
        assert_eq!(LeaveStatus::from_str("APPROVED").unwrap(), LeaveStatus::Approved);
        assert_eq!(
            PayrollCycleStatus::from_str("PROCESSED").unwrap(),
            PayrollCycleStatus::Processed
        );
    }
}
