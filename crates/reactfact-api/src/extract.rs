//! Extractors whose rejections come back as [`ApiError`] JSON instead of
//! axum's plain-text bodies.

use axum::{
    Json,
    extract::{Path, Query},
};

pub use axum_extra::extract::WithRejection;

use crate::error::ApiError;

pub type JsonBody<T> = WithRejection<Json<T>, ApiError>;
pub type PathParam<T> = WithRejection<Path<T>, ApiError>;
pub type QueryParams<T> = WithRejection<Query<T>, ApiError>;
