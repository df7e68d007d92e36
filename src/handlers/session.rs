use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::errors::AppError;
use crate::handlers::auth::SessionResponse;
use crate::handlers::{issue_token, require_session, session_from_request};
use crate::session::Screen;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NavigateRequest {
    pub screen: Screen,
}

pub async fn get_session(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = session_from_request(&req, &state)?;
    Ok(HttpResponse::Ok().json(session))
}

pub async fn navigate(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<NavigateRequest>,
) -> Result<HttpResponse, AppError> {
    let mut session = require_session(&req, &state)?;
    session.navigate(body.screen)?;
    let token = issue_token(&session, &state)?;

    Ok(HttpResponse::Ok().json(SessionResponse {
        session,
        token: Some(token),
        message: "Screen changed".to_string(),
    }))
}

/// Tokens are stateless; the client drops its token and continues anonymously.
pub async fn logout(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let mut session = require_session(&req, &state)?;
    session.logout();
    Ok(HttpResponse::Ok().json(SessionResponse {
        session,
        token: None,
        message: "Logged out".to_string(),
    }))
}
