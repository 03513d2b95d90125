//! Project endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tokio::sync::RwLock;

use crate::mock_server::fixtures::Fixtures;
use crate::mock_server::state::MockState;

/// GET /v2/project/{id|slug}
pub async fn get_project(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id_or_slug): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let mut state = state.write().await;
    state.seen_auth.push(auth.clone());

    if !state.is_authorized(auth.as_deref()) {
        return (StatusCode::UNAUTHORIZED, Json(Fixtures::unauthorized())).into_response();
    }

    match state.get_project(&id_or_slug) {
        Some(project) => (StatusCode::OK, Json(project.clone())).into_response(),
        None => (StatusCode::NOT_FOUND, Json(Fixtures::not_found())).into_response(),
    }
}
