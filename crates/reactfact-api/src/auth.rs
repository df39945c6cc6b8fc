use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use reactfact_types::api::{LoginRequest, SessionView};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::{JsonBody, WithRejection};

pub async fn session(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let user = state.ctx.session.current()?;
    Ok(Json(SessionView::from_user(user)))
}

/// No password: any non-blank username is accepted.
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(req), _): JsonBody<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.ctx.session.login(&req.username, req.email.as_deref())?;
    Ok(Json(SessionView::from_user(Some(user))))
}

pub async fn guest(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let user = state.ctx.session.login_anonymously()?;
    Ok(Json(SessionView::from_user(Some(user))))
}

pub async fn logout(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.ctx.session.logout()?;
    Ok(StatusCode::NO_CONTENT)
}
