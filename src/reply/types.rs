use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::analysis::Analysis;

#[derive(Debug, Clone, Deserialize)]
pub struct ReplyRequest {
    pub platform: String,
    pub post_text: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub include_analysis: Option<bool>,
}

/// One generated reply. Persisted once and never updated, so `created_at`
/// keeps the value stamped at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: Uuid,
    pub reply_text: String,
    pub platform: String,
    pub post_text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}
