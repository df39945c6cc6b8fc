use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppState;
use crate::error::ApiError;

/// Reject the request unless someone is signed in on this device; the
/// user is handed to the handler as an `Extension<User>`.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = state.ctx.session.require_user()?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
