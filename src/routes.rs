use actix_web::web;

use crate::api::{attendance, auth, leave_request, mentoring, payroll, policy, resources};
use crate::config::Config;

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    // Public routes
    cfg.service(
        web::scope("/auth")
            .service(web::resource("/login").route(web::post().to(auth::login)))
            .service(web::resource("/me").route(web::get().to(auth::me))),
    );

    cfg.service(
        web::scope(&config.api_prefix)
            // Domain actions are registered first so they win over the
            // generic /{collection} routes.
            .service(
                web::resource("/attendance/check-in").route(web::post().to(attendance::check_in)),
            )
            .service(
                web::resource("/attendance/check-out").route(web::post().to(attendance::check_out)),
            )
            .service(
                web::resource("/leave-requests")
                    .route(web::get().to(leave_request::list_leave))
                    .route(web::post().to(leave_request::create_leave)),
            )
            .service(
                web::resource("/leave-requests/{id}/approve")
                    .route(web::put().to(leave_request::approve_leave)),
            )
            .service(
                web::resource("/leave-requests/{id}/reject")
                    .route(web::put().to(leave_request::reject_leave)),
            )
            .service(
                web::resource("/leave-requests/{id}/cancel")
                    .route(web::put().to(leave_request::cancel_leave)),
            )
            .service(
                web::resource("/payroll-cycles/{id}/process")
                    .route(web::post().to(payroll::process_cycle)),
            )
            .service(
                web::resource("/policies/{id}/acknowledge")
                    .route(web::post().to(policy::acknowledge_policy)),
            )
            .service(
                web::resource("/mentoring-relationships")
                    .route(web::get().to(mentoring::list_mentoring))
                    .route(web::post().to(mentoring::create_mentoring)),
            )
            // Generic per-collection CRUD
            .service(
                web::resource("/{collection}")
                    .route(web::get().to(resources::list_resources))
                    .route(web::post().to(resources::create_resource)),
            )
            .service(
                web::resource("/{collection}/{id}")
                    .route(web::get().to(resources::get_resource))
                    .route(web::patch().to(resources::update_resource))
                    .route(web::delete().to(resources::delete_resource)),
            ),
    );
}
