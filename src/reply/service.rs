use chrono::Utc;
use serde_json::{json, Map};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::{Post, PostAnalyzer};
use crate::compose::ReplyComposer;
use crate::config::AppConfig;
use crate::error::Result;
use crate::storage::ReplyStore;

use super::types::{Reply, ReplyRequest};

const ENGINE: &str = "keyword-templates";

/// Runs one request through analysis, composition and persistence.
pub struct ReplyService {
    analyzer: PostAnalyzer,
    composer: ReplyComposer,
    store: Arc<dyn ReplyStore>,
    default_limit: usize,
    max_limit: usize,
}

impl ReplyService {
    pub fn new(config: &AppConfig, store: Arc<dyn ReplyStore>) -> Self {
        Self {
            analyzer: PostAnalyzer::new(&config.analysis),
            composer: ReplyComposer::new(&config.composer),
            store,
            default_limit: config.web.default_recent_limit,
            max_limit: config.web.max_recent_limit,
        }
    }

    pub fn supported_platforms(&self) -> &[String] {
        self.composer.supported_platforms()
    }

    pub async fn generate(&self, request: ReplyRequest) -> Result<Reply> {
        let started = Instant::now();

        let platform = self.composer.resolve_platform(&request.platform)?;
        let context = request.context.filter(|c| !c.trim().is_empty());
        let analysis = self
            .analyzer
            .analyze(&request.post_text, context.as_deref())?;
        debug!(
            "Analysis for {} post: intent={} sentiment={} topics={:?}",
            platform, analysis.intent, analysis.sentiment, analysis.topics
        );

        let post = Post {
            platform,
            text: request.post_text,
            context,
        };
        let reply_text = self.composer.compose(&post, Some(&analysis))?;
        let response_type = analysis.response_type;

        let mut metadata = Map::new();
        metadata.insert(
            "generation_time".to_string(),
            json!(started.elapsed().as_secs_f64()),
        );
        metadata.insert(
            "strategy".to_string(),
            json!(response_type.strategy()),
        );
        metadata.insert(
            "response_type".to_string(),
            json!(response_type.label()),
        );
        metadata.insert("engine".to_string(), json!(ENGINE));

        let reply = Reply {
            id: Uuid::new_v4(),
            reply_text,
            platform: post.platform,
            post_text: post.text,
            created_at: Utc::now(),
            analysis: request.include_analysis.unwrap_or(false).then_some(analysis),
            metadata,
        };

        self.store.append(&reply).await?;
        info!(
            "Generated {} reply {} ({})",
            reply.platform, reply.id, response_type
        );

        Ok(reply)
    }

    /// `limit` defaults to the configured value and is clamped to the
    /// configured maximum; `0` yields nothing.
    pub async fn recent(&self, platform: Option<&str>, limit: Option<usize>) -> Result<Vec<Reply>> {
        let platform = platform
            .filter(|p| !p.trim().is_empty())
            .map(|p| self.composer.resolve_platform(p))
            .transpose()?;
        let limit = limit.unwrap_or(self.default_limit).min(self.max_limit);
        if limit == 0 {
            return Ok(Vec::new());
        }

        Ok(self.store.recent(platform.as_deref(), limit).await?)
    }
}
