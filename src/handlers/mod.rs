pub mod activity;
pub mod auth;
pub mod course;
pub mod employee;
pub mod report;
pub mod session;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{web, HttpRequest};

use crate::errors::AppError;
use crate::session::Session;
use crate::state::AppState;
use crate::utils;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(rejected_body))
        .app_data(web::QueryConfig::default().error_handler(rejected_query))
        .app_data(web::PathConfig::default().error_handler(rejected_path))
        .service(web::resource("/v1/auth/login").route(web::post().to(auth::login)))
        .service(web::resource("/v1/session").route(web::get().to(session::get_session)))
        .service(web::resource("/v1/session/screen").route(web::post().to(session::navigate)))
        .service(web::resource("/v1/session/logout").route(web::post().to(session::logout)))
        .service(
            web::resource("/v1/employee")
                .route(web::get().to(employee::get_employees))
                .route(web::post().to(employee::create_employee)),
        )
        .service(web::resource("/v1/employee/options").route(web::get().to(employee::get_employee_options)))
        .service(web::resource("/v1/employee/{id}/edit").route(web::get().to(employee::get_edit_form)))
        .service(web::resource("/v1/employee/{id}").route(web::patch().to(employee::update_employee)))
        .service(
            web::resource("/v1/course")
                .route(web::get().to(course::get_courses))
                .route(web::post().to(course::create_course)),
        )
        .service(web::resource("/v1/course/options").route(web::get().to(course::get_course_options)))
        .service(web::resource("/v1/course/{id}").route(web::patch().to(course::update_course)))
        .service(
            web::resource("/v1/sign-in")
                .route(web::get().to(activity::get_sign_in_form))
                .route(web::post().to(activity::submit_sign_in)),
        )
        .service(web::resource("/v1/report/history").route(web::get().to(report::employee_history)))
        .service(web::resource("/v1/report/attendance").route(web::get().to(report::course_attendance)));
}

fn rejected_body(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected body for {} - {}", req.path(), err);
    AppError::Validation("Invalid request body.".to_string()).into()
}

fn rejected_query(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected selection for {} - {}", req.path(), err);
    AppError::Validation("Invalid selection.".to_string()).into()
}

fn rejected_path(err: PathError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected path {} - {}", req.path(), err);
    AppError::Validation("Invalid record id.".to_string()).into()
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|auth| auth.to_str().ok())
        .and_then(|auth| auth.split_whitespace().nth(1))
}

/// Session carried by the request, or an anonymous one when no token is sent.
pub fn session_from_request(req: &HttpRequest, state: &AppState) -> Result<Session, AppError> {
    match bearer_token(req) {
        None => Ok(Session::default()),
        Some(token) => utils::jwt::validate_token(token, &state.config.jwt_secret).map_err(|err| {
            log::warn!("Rejected session token - {}", err);
            AppError::Unauthorized("Invalid token".to_string())
        }),
    }
}

/// Gate for every screen but login.
pub fn require_session(req: &HttpRequest, state: &AppState) -> Result<Session, AppError> {
    let session = session_from_request(req, state)?;
    session.require_auth()?;
    Ok(session)
}

pub fn issue_token(session: &Session, state: &AppState) -> Result<String, AppError> {
    let username = session.require_auth()?;
    utils::jwt::generate_token(username, session.screen, &state.config.jwt_secret, state.config.session_ttl_hours)
        .map_err(|err| {
            log::error!("Token generation error - {}", err);
            AppError::InternalServerError("Token generation error".to_string())
        })
}

pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
