use serde_json::json;

use crate::store::Collections;

const SEEDED_AT: &str = "2025-01-06T09:00:00.000Z";

/// Fixed fallback dataset, written out whenever the store file is absent
/// or unparseable. Ids are stable so demos and tests can reference them.
pub fn dataset() -> Collections {
    let root = json!({
        "employees": [
            {
                "id": "emp-0001",
                "name": "Alice Johnson",
                "email": "alice.johnson@hrm.local",
                "position": "Senior Software Engineer",
                "department": "Engineering",
                "hireDate": "2021-03-15",
                "status": "ACTIVE",
                "salary": 9500.0,
                "skills": ["Rust", "SQL", "Kubernetes"],
                "createdAt": SEEDED_AT,
                "updatedAt": SEEDED_AT
            },
            {
                "id": "emp-0002",
                "name": "Bruno Costa",
                "email": "bruno.costa@hrm.local",
                "position": "HR Analyst",
                "department": "People",
                "hireDate": "2022-08-01",
                "status": "ACTIVE",
                "salary": 5200.0,
                "skills": ["Recruiting", "Payroll"],
                "createdAt": SEEDED_AT,
                "updatedAt": SEEDED_AT
            },
            {
                "id": "emp-0003",
                "name": "Carla Mendes",
                "email": "carla.mendes@hrm.local",
                "position": "Product Designer",
                "department": "Design",
                "hireDate": "2023-01-09",
                "status": "ACTIVE",
                "salary": 6100.0,
                "skills": ["Figma", "Research"],
                "createdAt": SEEDED_AT,
                "updatedAt": SEEDED_AT
            },
            {
                "id": "emp-0004",
                "name": "Diego Ferraz",
                "email": "diego.ferraz@hrm.local",
                "position": "Sales Representative",
                "department": "Sales",
                "hireDate": "2020-11-23",
                "status": "TERMINATED",
                "salary": 4300.0,
                "skills": ["CRM"],
                "createdAt": SEEDED_AT,
                "updatedAt": SEEDED_AT
            }
        ],
        "departments": [
            { "id": "dep-0001", "name": "Engineering", "managerId": "emp-0001", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "dep-0002", "name": "People", "managerId": "emp-0002", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "dep-0003", "name": "Design", "managerId": "emp-0003", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "dep-0004", "name": "Sales", "managerId": null, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "positions": [
            { "id": "pos-0001", "title": "Senior Software Engineer", "level": "IC4", "departmentId": "dep-0001", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "pos-0002", "title": "HR Analyst", "level": "IC2", "departmentId": "dep-0002", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "pos-0003", "title": "Product Designer", "level": "IC3", "departmentId": "dep-0003", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "leaveTypes": [
            { "id": "lt-0001", "name": "Annual Leave", "daysPerYear": 22, "paid": true, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "lt-0002", "name": "Sick Leave", "daysPerYear": 10, "paid": true, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "lt-0003", "name": "Unpaid Leave", "daysPerYear": 30, "paid": false, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "leaveRequests": [
            {
                "id": "lr-0001",
                "employeeId": "emp-0001",
                "leaveTypeId": "lt-0001",
                "startDate": "2025-02-10",
                "endDate": "2025-02-14",
                "days": 5.0,
                "reason": "Family trip",
                "status": "PENDING",
                "createdAt": SEEDED_AT,
                "updatedAt": SEEDED_AT
            },
            {
                "id": "lr-0002",
                "employeeId": "emp-0003",
                "leaveTypeId": "lt-0002",
                "startDate": "2025-01-02",
                "endDate": "2025-01-03",
                "days": 2.0,
                "reason": "Flu",
                "status": "APPROVED",
                "createdAt": SEEDED_AT,
                "updatedAt": SEEDED_AT
            }
        ],
        "leaveBalances": [
            { "id": "lb-0001", "employeeId": "emp-0001", "leaveTypeId": "lt-0001", "year": 2025, "entitled": 22, "taken": 0, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "lb-0002", "employeeId": "emp-0003", "leaveTypeId": "lt-0002", "year": 2025, "entitled": 10, "taken": 2, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "attendance": [
            {
                "id": "att-0001",
                "employeeId": "emp-0001",
                "date": "2025-01-03",
                "checkIn": "2025-01-03T08:58:12.000Z",
                "checkOut": "2025-01-03T17:31:42.000Z",
                "workHours": 8.558333333333334,
                "status": "PRESENT",
                "createdAt": SEEDED_AT,
                "updatedAt": SEEDED_AT
            }
        ],
        "holidays": [
            { "id": "hol-0001", "name": "New Year's Day", "date": "2025-01-01", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "hol-0002", "name": "Labour Day", "date": "2025-05-01", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "payrollCycles": [
            { "id": "pc-0001", "referenceMonth": "2025-01", "status": "APPROVED", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "pc-0002", "referenceMonth": "2025-02", "status": "DRAFT", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "payslips": [],
        "performanceReviews": [
            { "id": "pr-0001", "employeeId": "emp-0001", "reviewerId": "emp-0002", "period": "2024-H2", "rating": 4.5, "status": "COMPLETED", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "goals": [
            { "id": "goal-0001", "employeeId": "emp-0001", "title": "Ship payroll integration", "weight": 60, "progress": 35, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "goal-0002", "employeeId": "emp-0003", "title": "Design system refresh", "weight": 40, "progress": 70, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "feedbacks": [
            { "id": "fb-0001", "fromId": "emp-0002", "toId": "emp-0001", "text": "Great cross-team collaboration on the audit.", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "jobOpenings": [
            { "id": "job-0001", "title": "Backend Engineer", "departmentId": "dep-0001", "status": "OPEN", "headcount": 2, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "job-0002", "title": "Account Executive", "departmentId": "dep-0004", "status": "ON_HOLD", "headcount": 1, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "candidates": [
            { "id": "cand-0001", "name": "Elena Novak", "email": "elena.novak@mail.test", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "cand-0002", "name": "Farid Khan", "email": "farid.khan@mail.test", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "applications": [
            { "id": "app-0001", "candidateId": "cand-0001", "jobOpeningId": "job-0001", "stage": "INTERVIEW", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "interviews": [
            { "id": "int-0001", "applicationId": "app-0001", "interviewerId": "emp-0001", "scheduledAt": "2025-01-20T14:00:00.000Z", "status": "SCHEDULED", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "benefitPlans": [
            { "id": "ben-0001", "name": "Health Plus", "monthlyCost": 180.0, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "ben-0002", "name": "Meal Allowance", "monthlyCost": 220.0, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "benefitEnrollments": [
            { "id": "be-0001", "employeeId": "emp-0001", "benefitPlanId": "ben-0001", "since": "2021-04-01", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "trainings": [
            { "id": "tr-0001", "title": "Security Awareness", "hours": 4, "mandatory": true, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "tr-0002", "title": "Advanced SQL", "hours": 12, "mandatory": false, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "trainingEnrollments": [
            { "id": "te-0001", "employeeId": "emp-0002", "trainingId": "tr-0001", "status": "IN_PROGRESS", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "policies": [
            { "id": "pol-0001", "title": "Code of Conduct", "version": "2.1", "effectiveDate": "2024-06-01", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "pol-0002", "title": "Remote Work Policy", "version": "1.0", "effectiveDate": "2023-02-15", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "policyAcknowledgments": [],
        "announcements": [
            { "id": "ann-0001", "title": "Office closed on May 1st", "body": "National holiday, see you on the 2nd.", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "ann-0002", "title": "New benefits portal", "body": "Enrollment reopens next week.", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "documents": [
            { "id": "doc-0001", "employeeId": "emp-0001", "name": "Employment contract", "category": "CONTRACT", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "expenseClaims": [
            { "id": "exp-0001", "employeeId": "emp-0003", "amount": 84.9, "currency": "EUR", "description": "Client lunch", "status": "SUBMITTED", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "assets": [
            { "id": "ast-0001", "name": "MacBook Pro 14\"", "serialNumber": "C02XL0AAJHD3", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "ast-0002", "name": "Dell U2723QE", "serialNumber": "CN-0F4XJ2", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "assetAssignments": [
            { "id": "aa-0001", "assetId": "ast-0001", "employeeId": "emp-0001", "assignedAt": "2021-03-15", "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "onboardingTasks": [
            { "id": "ob-0001", "employeeId": "emp-0003", "title": "Set up workstation", "done": true, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT },
            { "id": "ob-0002", "employeeId": "emp-0003", "title": "Meet the team", "done": false, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ],
        "mentoringRelationships": [
            {
                "id": "mr-0001",
                "mentorId": "emp-0001",
                "menteeId": "emp-0003",
                "focusArea": "Technical leadership",
                "status": "ACTIVE",
                "mentor": { "id": "emp-0001", "name": "Alice Johnson", "position": "Senior Software Engineer" },
                "mentee": { "id": "emp-0003", "name": "Carla Mendes", "position": "Product Designer" },
                "createdAt": SEEDED_AT,
                "updatedAt": SEEDED_AT
            }
        ],
        "surveys": [
            { "id": "sur-0001", "title": "Engagement Pulse Q1", "status": "OPEN", "responses": 11, "createdAt": SEEDED_AT, "updatedAt": SEEDED_AT }
        ]
    });
    serde_json::from_value(root).expect("seed dataset is an object of record arrays")
}
