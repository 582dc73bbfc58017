//! Routes and handlers for the `/activities` resource.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;

use mergington_core::Activity;
use mergington_db::repositories::ActivityRepo;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Query parameters for signup and unregister. A missing `email` fails the
/// extractor with 400 before the handler runs.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// GET /activities -- the full catalog keyed by activity name.
async fn list_activities(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, Activity>>> {
    let activities = ActivityRepo::list(&state.pool).await?;
    Ok(Json(activities))
}

/// POST /activities/{name}/signup?email=...
async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<MessageResponse>> {
    ActivityRepo::signup(&state.pool, &name, &query.email).await?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, name),
    }))
}

/// DELETE /activities/{name}/unregister?email=...
async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<MessageResponse>> {
    ActivityRepo::unregister(&state.pool, &name, &query.email).await?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, name),
    }))
}

/// Mount the activities routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{name}/signup", post(signup))
        .route("/activities/{name}/unregister", delete(unregister))
}
