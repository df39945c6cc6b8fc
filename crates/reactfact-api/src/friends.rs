use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use reactfact_types::api::{AddFriendRequest, IncomingFriendRequest};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::{JsonBody, PathParam, WithRejection};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.ctx.friends.snapshot()?))
}

pub async fn add(
    State(state): State<AppState>,
    WithRejection(Json(req), _): JsonBody<AddFriendRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.ctx.friends.add_friend(req.user_id.trim())?;
    Ok(Json(state.ctx.friends.snapshot()?))
}

pub async fn incoming(
    State(state): State<AppState>,
    WithRejection(Json(req), _): JsonBody<IncomingFriendRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .ctx
        .friends
        .receive_request(req.user_id.trim(), req.username.as_deref())?;
    Ok(Json(state.ctx.friends.snapshot()?))
}

pub async fn accept(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): PathParam<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.ctx.friends.accept_friend_request(&user_id)?;
    Ok(Json(state.ctx.friends.snapshot()?))
}

pub async fn reject(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): PathParam<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.ctx.friends.reject_friend_request(&user_id)?;
    Ok(Json(state.ctx.friends.snapshot()?))
}

pub async fn remove(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): PathParam<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.ctx.friends.remove_friend(&user_id)?;
    Ok(Json(state.ctx.friends.snapshot()?))
}
