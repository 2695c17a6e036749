use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Route segment (kebab-case) to store key (camelCase), one entry per
/// collection served by the generic CRUD routes.
pub static COLLECTIONS: &[(&str, &str)] = &[
    ("employees", "employees"),
    ("departments", "departments"),
    ("positions", "positions"),
    ("leave-types", "leaveTypes"),
    ("leave-requests", "leaveRequests"),
    ("leave-balances", "leaveBalances"),
    ("attendance", "attendance"),
    ("holidays", "holidays"),
    ("payroll-cycles", "payrollCycles"),
    ("payslips", "payslips"),
    ("performance-reviews", "performanceReviews"),
    ("goals", "goals"),
    ("feedbacks", "feedbacks"),
    ("job-openings", "jobOpenings"),
    ("candidates", "candidates"),
    ("applications", "applications"),
    ("interviews", "interviews"),
    ("benefit-plans", "benefitPlans"),
    ("benefit-enrollments", "benefitEnrollments"),
    ("trainings", "trainings"),
    ("training-enrollments", "trainingEnrollments"),
    ("policies", "policies"),
    ("policy-acknowledgments", "policyAcknowledgments"),
    ("announcements", "announcements"),
    ("documents", "documents"),
    ("expense-claims", "expenseClaims"),
    ("assets", "assets"),
    ("asset-assignments", "assetAssignments"),
    ("onboarding-tasks", "onboardingTasks"),
    ("mentoring-relationships", "mentoringRelationships"),
    ("surveys", "surveys"),
];

static ROUTE_TO_KEY: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| COLLECTIONS.iter().copied().collect());

pub fn key_for(segment: &str) -> Option<&'static str> {
    ROUTE_TO_KEY.get(segment).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_segments_resolve() {
        assert_eq!(key_for("leave-requests"), Some("leaveRequests"));
        assert_eq!(key_for("employees"), Some("employees"));
        assert_eq!(key_for("payslips"), Some("payslips"));
    }

    #[test]
    fn unknown_segment_is_none() {
        assert_eq!(key_for("leaveRequests"), None);
        assert_eq!(key_for("nope"), None);
    }
}
