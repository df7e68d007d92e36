use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::errors::AppError;
use crate::forms::sign_in::{plan_sign_in, sign_in_view, SignInPlan, SignInSelection, SignInSubmission};
use crate::handlers::require_session;
use crate::services::{activity, catalog, roster};
use crate::state::AppState;
use crate::utils::validation::validate_payload;

pub async fn get_sign_in_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    selection: web::Query<SignInSelection>,
) -> Result<HttpResponse, AppError> {
    require_session(&req, &state)?;

    let client = state.client.as_ref();
    let employees = roster::list_employees(client)
        .await
        .map_err(|err| AppError::query_failed("Failed to fetch data from the database.", err))?;
    let courses = catalog::list_courses(client)
        .await
        .map_err(|err| AppError::query_failed("Failed to fetch data from the database.", err))?;

    Ok(HttpResponse::Ok().json(sign_in_view(&selection, &courses, &employees)))
}

pub async fn submit_sign_in(
    req: HttpRequest,
    state: web::Data<AppState>,
    submission: web::Json<SignInSubmission>,
) -> Result<HttpResponse, AppError> {
    require_session(&req, &state)?;
    validate_payload(&submission.0)?;

    let client = state.client.as_ref();
    let employees = roster::list_employees(client)
        .await
        .map_err(|err| AppError::query_failed("Failed to sign employee into course", err))?;
    let courses = catalog::list_courses(client)
        .await
        .map_err(|err| AppError::query_failed("Failed to sign employee into course", err))?;

    match plan_sign_in(submission.into_inner(), &courses, &employees) {
        SignInPlan::Skipped(warning) => {
            log::warn!("Sign-in skipped: {}", warning);
            Err(AppError::Validation(warning))
        }
        SignInPlan::Ready {
            course_id,
            employees,
            details,
        } => {
            let inserted = activity::record_sign_ins(client, course_id, &employees, &details)
                .await
                .map_err(|err| AppError::query_failed("Failed to sign employee into course", err))?;
            Ok(HttpResponse::Created().json(json!({
                "message": "Employee signed into course!",
                "records": inserted,
            })))
        }
    }
}
