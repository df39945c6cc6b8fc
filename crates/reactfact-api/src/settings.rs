use axum::{Json, extract::State, response::IntoResponse};

use reactfact_state::settings::{APP_NAME, APP_VERSION};
use reactfact_types::Theme;
use reactfact_types::api::SettingsView;

use crate::AppState;
use crate::error::ApiError;

fn view(theme: Theme) -> SettingsView {
    SettingsView {
        theme,
        app_name: APP_NAME.to_string(),
        version: APP_VERSION.to_string(),
    }
}

pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(view(state.ctx.settings.theme()?)))
}

pub async fn toggle_theme(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(view(state.ctx.settings.toggle_theme()?)))
}
