use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};

use super::error::ApiError;
use super::state::AppState;
use crate::reply::{Reply, ReplyRequest};

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<usize>,
}

/// `limit=` with no value means "use the default", same as leaving it out.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Social media reply generator is running",
        "api_prefix": "/api",
        "platforms": state.service.supported_platforms(),
    }))
}

pub async fn create_reply(
    State(state): State<AppState>,
    payload: Result<Json<ReplyRequest>, JsonRejection>,
) -> Result<Json<Reply>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::validation(e.body_text()))?;
    let reply = state.service.generate(request).await?;
    Ok(Json(reply))
}

pub async fn recent_replies(
    State(state): State<AppState>,
    query: Result<Query<RecentQuery>, QueryRejection>,
) -> Result<Json<Vec<Reply>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::validation(e.body_text()))?;
    let replies = state
        .service
        .recent(query.platform.as_deref(), query.limit)
        .await?;
    Ok(Json(replies))
}
