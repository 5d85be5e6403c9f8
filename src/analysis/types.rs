use serde::{Deserialize, Serialize};

use super::intent::{Intent, ResponseType, Sentiment};

/// Incoming post, platform already normalized.
#[derive(Debug, Clone)]
pub struct Post {
    pub platform: String,
    pub text: String,
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub intent: Intent,
    pub sentiment: Sentiment,
    /// Never empty; `["general"]` when nothing matched
    pub topics: Vec<String>,
    pub response_type: ResponseType,
}
