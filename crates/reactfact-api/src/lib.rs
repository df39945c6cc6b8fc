pub mod auth;
pub mod error;
pub mod extract;
pub mod feed;
pub mod friends;
pub mod gifs;
pub mod middleware;
pub mod profile;
pub mod reactions;
pub mod settings;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::debug;

use reactfact_gif::{GifLookup, GifSelector};
use reactfact_state::Context;
use reactfact_types::api::ErrorBody;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub ctx: Context,
    pub gifs: GifSelector<GifLookup>,
}

/// Every view and action. Routes that act on behalf of the user sit
/// behind [`middleware::require_session`].
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(feed::feed))
        .route("/reactions", get(feed::global_reactions))
        .route("/my-reactions", get(feed::my_reactions))
        .route("/facts/{fact_id}/reactions", get(feed::fact_reactions))
        .route("/auth/session", get(auth::session))
        .route("/auth/login", post(auth::login))
        .route("/auth/guest", post(auth::guest))
        .route("/auth/logout", post(auth::logout))
        .route("/settings", get(settings::get_settings))
        .route("/settings/theme", post(settings::toggle_theme))
        .route("/gifs", get(gifs::panel))
        .route("/gifs/trending", get(gifs::trending))
        .route("/gifs/search", get(gifs::search))
        .route("/gifs/tabs/{tab}", get(gifs::select_tab))
        .route("/gifs/refresh", post(gifs::refresh));

    let protected_routes = Router::new()
        .route("/profile", get(profile::get_profile).put(profile::update_profile))
        .route("/facts/{fact_id}/reactions", post(reactions::create_reaction))
        .route("/reactions/{reaction_id}/like", post(reactions::like_reaction))
        .route("/reactions/{reaction_id}/comments", post(reactions::create_comment))
        .route(
            "/reactions/{reaction_id}/comments/{comment_id}/like",
            post(reactions::like_comment),
        )
        .route("/friends", get(friends::list).post(friends::add))
        .route("/friends/incoming", post(friends::incoming))
        .route("/friends/{user_id}/accept", post(friends::accept))
        .route("/friends/{user_id}/reject", post(friends::reject))
        .route("/friends/{user_id}", axum::routing::delete(friends::remove))
        .route_layer(from_fn_with_state(state.clone(), middleware::require_session));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    debug!("No route for {}", uri);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "not found".to_string(),
        }),
    )
}
