use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::AppError;
use crate::forms::employee_edit::{EmployeeEditForm, EmployeeEditSubmission};
use crate::handlers::{require_session, today};
use crate::models::employee::{EmployeeStatus, NewEmployee};
use crate::models::options::SelectOption;
use crate::reports::listing::employees_table;
use crate::reports::DisplayTable;
use crate::services::roster;
use crate::state::AppState;

#[derive(Serialize)]
struct EmployeeTableResponse {
    table: DisplayTable,
    warning: Option<String>,
}

#[derive(Deserialize)]
pub struct EmployeeOptionsQuery {
    active_only: Option<bool>,
}

#[derive(Deserialize)]
pub struct EditFormQuery {
    status: Option<EmployeeStatus>,
}

pub async fn get_employees(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    require_session(&req, &state)?;

    let employees = roster::list_employees(state.client.as_ref())
        .await
        .map_err(|err| AppError::query_failed("Failed to fetch employees", err))?;
    let warning = employees
        .is_empty()
        .then(|| "No employees found in the database.".to_string());

    Ok(HttpResponse::Ok().json(EmployeeTableResponse {
        table: employees_table(&employees),
        warning,
    }))
}

pub async fn create_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    require_session(&req, &state)?;

    let employee = roster::add_employee(state.client.as_ref(), new_employee.into_inner())
        .await
        .map_err(|err| AppError::query_failed("Failed to add employee", err))?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Employee added!",
        "employee": employee,
    })))
}

pub async fn get_employee_options(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<EmployeeOptionsQuery>,
) -> Result<HttpResponse, AppError> {
    require_session(&req, &state)?;

    let employees = roster::list_employees(state.client.as_ref())
        .await
        .map_err(|err| AppError::query_failed("Failed to fetch employees", err))?;
    let options: Vec<SelectOption> = roster::employee_options(&employees, query.active_only.unwrap_or(false));

    Ok(HttpResponse::Ok().json(options))
}

pub async fn get_edit_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    employee_id: web::Path<i64>,
    query: web::Query<EditFormQuery>,
) -> Result<HttpResponse, AppError> {
    require_session(&req, &state)?;

    let employee = roster::find_employee(state.client.as_ref(), employee_id.into_inner())
        .await
        .map_err(|err| AppError::query_failed("Failed to fetch employees", err))?
        .ok_or_else(|| AppError::NoData("No matching employee found.".to_string()))?;

    let mut form = EmployeeEditForm::prefill(&employee, today());
    if let Some(status) = query.status {
        form = form.with_status(status);
    }

    Ok(HttpResponse::Ok().json(form))
}

pub async fn update_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    employee_id: web::Path<i64>,
    submission: web::Json<EmployeeEditSubmission>,
) -> Result<HttpResponse, AppError> {
    require_session(&req, &state)?;
    let employee_id = employee_id.into_inner();

    let employee = roster::find_employee(state.client.as_ref(), employee_id)
        .await
        .map_err(|err| AppError::query_failed("Failed to update employee", err))?
        .ok_or_else(|| AppError::NoData("No matching employee found.".to_string()))?;

    let changes = EmployeeEditForm::prefill(&employee, today()).submit(submission.into_inner());
    roster::update_employee(state.client.as_ref(), employee_id, &changes)
        .await
        .map_err(|err| AppError::query_failed("Failed to update employee", err))?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee updated successfully!",
        "changes": changes,
    })))
}
