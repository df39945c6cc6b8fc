use axum::{Extension, Json, extract::State, response::IntoResponse};

use reactfact_types::User;
use reactfact_types::api::{ProfileView, UpdateProfileRequest};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::{JsonBody, WithRejection};

/// Preset avatars offered on the profile page.
pub const AVATAR_CHOICES: [&str; 6] = [
    "https://api.dicebear.com/7.x/avataaars/svg?seed=profile1",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=profile2",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=profile3",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=profile4",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=profile5",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=profile6",
];

fn view(state: &AppState, user: User) -> Result<ProfileView, ApiError> {
    Ok(ProfileView {
        user,
        friends: state.ctx.friends.snapshot()?,
        avatar_choices: AVATAR_CHOICES.iter().map(|a| a.to_string()).collect(),
    })
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(view(&state, user)?))
}

pub async fn update_profile(
    State(state): State<AppState>,
    WithRejection(Json(req), _): JsonBody<UpdateProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .ctx
        .session
        .update_profile(&req.username, req.avatar.as_deref())?;
    Ok(Json(view(&state, user)?))
}
