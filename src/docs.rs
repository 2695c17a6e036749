use utoipa::OpenApi;
use utoipa::openapi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::Modify;

use crate::models::{
    AcknowledgeReq, CheckInReq, CheckOutReq, CreateLeave, CreateMentoring, LoginReq,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Mock API",
        version = "1.0.0",
        description = "Mock HR management backend: a JSON file acts as the database, \
every resource gets plain CRUD routes, and a handful of domain actions \
(leave approval, attendance check-in/out, payroll processing stub) sit on top."
    ),
    paths(
        crate::api::auth::login,
        crate::api::auth::me,

        crate::api::resources::list_resources,
        crate::api::resources::get_resource,
        crate::api::resources::create_resource,
        crate::api::resources::update_resource,
        crate::api::resources::delete_resource,

        crate::api::leave_request::create_leave,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,
        crate::api::leave_request::cancel_leave,

        crate::api::attendance::check_in,
        crate::api::attendance::check_out,

        crate::api::payroll::process_cycle,
        crate::api::policy::acknowledge_policy,
        crate::api::mentoring::create_mentoring
    ),
    components(
        schemas(
            LoginReq,
            CheckInReq,
            CheckOutReq,
            CreateLeave,
            AcknowledgeReq,
            CreateMentoring
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Stub authentication"),
        (name = "Resources", description = "Generic per-collection CRUD"),
        (name = "Leave", description = "Leave request actions"),
        (name = "Attendance", description = "Check-in / check-out"),
        (name = "Payroll", description = "Payroll cycle processing stub"),
        (name = "Policy", description = "Policy acknowledgment"),
        (name = "Mentoring", description = "Mentoring relationships"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("opaque")
                        .build(),
                ),
            );
        }
    }
}
