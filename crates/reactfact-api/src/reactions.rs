use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use reactfact_state::Draft;
use reactfact_types::api::{ComposeRequest, LikeResponse};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::{JsonBody, PathParam, WithRejection};

/// POST /facts/{fact_id}/reactions. Blank text with no GIF is refused and
/// nothing is posted.
pub async fn create_reaction(
    State(state): State<AppState>,
    WithRejection(Path(fact_id), _): PathParam<String>,
    WithRejection(Json(req), _): JsonBody<ComposeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let reaction = state.ctx.react(&fact_id, &Draft::from(req))?;
    Ok((StatusCode::CREATED, Json(reaction)))
}

pub async fn create_comment(
    State(state): State<AppState>,
    WithRejection(Path(reaction_id), _): PathParam<String>,
    WithRejection(Json(req), _): JsonBody<ComposeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let comment = state.ctx.reply(&reaction_id, &Draft::from(req))?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn like_reaction(
    State(state): State<AppState>,
    WithRejection(Path(reaction_id), _): PathParam<String>,
) -> Result<impl IntoResponse, ApiError> {
    let (likes, is_liked) = state.ctx.catalogue.toggle_reaction_like(&reaction_id)?;
    Ok(Json(LikeResponse { likes, is_liked }))
}

pub async fn like_comment(
    State(state): State<AppState>,
    WithRejection(Path((reaction_id, comment_id)), _): PathParam<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let (likes, is_liked) = state
        .ctx
        .catalogue
        .toggle_comment_like(&reaction_id, &comment_id)?;
    Ok(Json(LikeResponse { likes, is_liked }))
}
