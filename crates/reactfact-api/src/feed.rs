use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

use reactfact_types::api::{
    FactCard, FeedView, GlobalReaction, GlobalReactionsView, MyReactionsView, ReactionsQuery,
    SessionView,
};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::{PathParam, QueryParams, WithRejection};

const UNKNOWN_FACT: &str = "Unknown Fact";

/// GET /: every fact with its reactions, newest reaction first.
pub async fn feed(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let ctx = &state.ctx;
    let session = SessionView::from_user(ctx.session.current()?);

    let facts = ctx
        .catalogue
        .facts()?
        .into_iter()
        .map(|fact| -> Result<FactCard, ApiError> {
            let reactions = ctx.catalogue.reactions_for_fact(&fact.id)?;
            Ok(FactCard {
                reaction_count: reactions.len(),
                reactions,
                fact,
            })
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    Ok(Json(FeedView { session, facts }))
}

pub async fn fact_reactions(
    State(state): State<AppState>,
    WithRejection(Path(fact_id), _): PathParam<String>,
) -> Result<impl IntoResponse, ApiError> {
    let ctx = &state.ctx;
    if ctx.catalogue.fact(&fact_id)?.is_none() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(ctx.catalogue.reactions_for_fact(&fact_id)?))
}

/// GET /reactions?sort=newest|popular: all reactions across all facts.
pub async fn global_reactions(
    State(state): State<AppState>,
    WithRejection(Query(query), _): QueryParams<ReactionsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let ctx = &state.ctx;
    let titles: HashMap<String, String> = ctx
        .catalogue
        .facts()?
        .into_iter()
        .map(|f| (f.id, f.title))
        .collect();

    let reactions = ctx
        .catalogue
        .sorted_reactions(query.sort)?
        .into_iter()
        .map(|reaction| GlobalReaction {
            fact_title: titles
                .get(&reaction.fact_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_FACT.to_string()),
            reaction,
        })
        .collect();

    Ok(Json(GlobalReactionsView {
        sort: query.sort,
        reactions,
    }))
}

/// GET /my-reactions. Empty when nobody is signed in.
pub async fn my_reactions(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let ctx = &state.ctx;
    let reactions = match ctx.session.current()? {
        Some(user) => ctx.catalogue.reactions_by_user(&user.id)?,
        None => Vec::new(),
    };
    Ok(Json(MyReactionsView { reactions }))
}
