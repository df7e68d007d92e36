use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers::require_session;
use crate::models::course::{CourseInput, TrainingCategory};
use crate::reports::listing::courses_table;
use crate::reports::DisplayTable;
use crate::services::catalog;
use crate::state::AppState;
use crate::utils::validation::validate_payload;

#[derive(Serialize)]
struct CourseTableResponse {
    table: DisplayTable,
    warning: Option<String>,
}

#[derive(Deserialize)]
pub struct CourseOptionsQuery {
    category: Option<TrainingCategory>,
}

pub async fn get_courses(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    require_session(&req, &state)?;

    let courses = catalog::list_courses(state.client.as_ref())
        .await
        .map_err(|err| AppError::query_failed("Failed to fetch courses", err))?;
    let warning = courses
        .is_empty()
        .then(|| "No courses found in the database. Please add courses first.".to_string());

    Ok(HttpResponse::Ok().json(CourseTableResponse {
        table: courses_table(&courses),
        warning,
    }))
}

pub async fn create_course(
    req: HttpRequest,
    state: web::Data<AppState>,
    input: web::Json<CourseInput>,
) -> Result<HttpResponse, AppError> {
    require_session(&req, &state)?;
    validate_payload(&input.0)?;

    let course = catalog::add_course(state.client.as_ref(), input.into_inner())
        .await
        .map_err(|err| AppError::query_failed("Failed to add course", err))?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Course added!",
        "course": course,
    })))
}

pub async fn update_course(
    req: HttpRequest,
    state: web::Data<AppState>,
    course_id: web::Path<i64>,
    input: web::Json<CourseInput>,
) -> Result<HttpResponse, AppError> {
    require_session(&req, &state)?;
    validate_payload(&input.0)?;
    let course_id = course_id.into_inner();

    let touched = catalog::update_course(state.client.as_ref(), course_id, input.into_inner())
        .await
        .map_err(|err| AppError::query_failed("Failed to update course", err))?;
    if touched == 0 {
        return Err(AppError::NoData("No matching course found.".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Course updated successfully!",
        "courseId": course_id,
    })))
}

pub async fn get_course_options(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<CourseOptionsQuery>,
) -> Result<HttpResponse, AppError> {
    require_session(&req, &state)?;

    let courses = catalog::list_courses(state.client.as_ref())
        .await
        .map_err(|err| AppError::query_failed("Failed to fetch courses", err))?;

    Ok(HttpResponse::Ok().json(catalog::course_options(&courses, query.category)))
}
