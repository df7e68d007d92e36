use actix_web::{web, HttpRequest, HttpResponse};

use crate::errors::AppError;
use crate::forms::attendance::{resolve_scope, AttendanceRequest};
use crate::forms::history::{resolve_employee, HistoryRequest};
use crate::handlers::require_session;
use crate::reports::attendance::build_attendance_report;
use crate::reports::history::build_history_report;
use crate::services::{activity, catalog, roster};
use crate::state::AppState;

pub async fn employee_history(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<HistoryRequest>,
) -> Result<HttpResponse, AppError> {
    require_session(&req, &state)?;

    let client = state.client.as_ref();
    let employees = roster::list_employees(client)
        .await
        .map_err(|err| AppError::query_failed("Failed to fetch employees from the database.", err))?;
    let employee = resolve_employee(&query, &employees).map_err(AppError::Validation)?;

    let records = activity::employee_history(client, employee.id, query.range(), state.config.page_size)
        .await
        .map_err(|err| AppError::query_failed("Failed to fetch employee history", err))?;
    if records.is_empty() {
        return Err(AppError::NoData("No records found for the specified criteria.".to_string()));
    }
    let courses = catalog::list_courses(client)
        .await
        .map_err(|err| AppError::query_failed("Failed to fetch employee history", err))?;

    let report = build_history_report(&format!("{} - {}", employee.id, employee.full_name()), &records, &courses);
    log::debug!("Employee history\n{}", report.table.render());
    Ok(HttpResponse::Ok().json(report))
}

pub async fn course_attendance(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<AttendanceRequest>,
) -> Result<HttpResponse, AppError> {
    require_session(&req, &state)?;

    let client = state.client.as_ref();
    let courses = catalog::list_courses(client)
        .await
        .map_err(|err| AppError::query_failed("Failed to fetch courses", err))?;
    if courses.is_empty() {
        return Err(AppError::NoData("No courses found in the database. Please add courses first.".to_string()));
    }
    let scope = resolve_scope(&query, &courses).map_err(AppError::Validation)?;

    let records = activity::course_attendance(client, &scope.course_ids, query.range(), state.config.page_size)
        .await
        .map_err(|err| AppError::query_failed("Failed to fetch course attendance", err))?;
    if records.is_empty() {
        return Err(AppError::NoData("No attendance records found for the selected course.".to_string()));
    }

    let report = build_attendance_report(&scope.label, &records, &courses);
    log::debug!("Course attendance\n{}", report.table.render());
    Ok(HttpResponse::Ok().json(report))
}
