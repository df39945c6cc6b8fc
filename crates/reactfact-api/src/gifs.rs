use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

use reactfact_types::api::{GifSearchQuery, GifTab};

use crate::AppState;
use crate::extract::{PathParam, QueryParams, WithRejection};

// Lookup failures already degrade to an empty list; only bad input is refused.

pub async fn panel(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.gifs.panel())
}

pub async fn trending(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.gifs.select_tab(GifTab::Trending).await)
}

pub async fn select_tab(
    State(state): State<AppState>,
    WithRejection(Path(tab), _): PathParam<GifTab>,
) -> impl IntoResponse {
    Json(state.gifs.select_tab(tab).await)
}

pub async fn search(
    State(state): State<AppState>,
    WithRejection(Query(query), _): QueryParams<GifSearchQuery>,
) -> impl IntoResponse {
    Json(state.gifs.search(&query.q).await)
}

pub async fn refresh(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.gifs.refresh().await)
}
