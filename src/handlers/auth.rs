use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::errors::AppError;
use crate::handlers::issue_token;
use crate::models::user::LoginRequest;
use crate::services;
use crate::session::Session;
use crate::state::AppState;
use crate::utils::validation::validate_payload;

#[derive(Serialize)]
pub struct SessionResponse {
    pub session: Session,
    pub token: Option<String>,
    pub message: String,
}

pub async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&req.0)?;

    let authenticated = services::auth::authenticate(state.client.as_ref(), &req.username, &req.password)
        .await
        .map_err(|err| AppError::query_failed("Failed to authenticate.", err))?;
    if !authenticated {
        return Err(AppError::Unauthorized("Invalid username or password.".to_string()));
    }

    let session = Session::after_login(&req.username);
    let token = issue_token(&session, &state)?;
    log::info!("User {} logged in", req.username);

    Ok(HttpResponse::Ok().json(SessionResponse {
        session,
        token: Some(token),
        message: "Login successful!".to_string(),
    }))
}
