pub mod jsonl;
pub mod memory;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::config::StorageConfig;
use crate::reply::Reply;

pub use jsonl::JsonlReplyStore;
pub use memory::MemoryReplyStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("reply store unavailable: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode reply document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("unknown storage backend '{0}', expected 'jsonl' or 'memory'")]
    UnknownBackend(String),
}

/// Document store for generated replies. Append-only: there is no update or
/// delete path.
#[async_trait]
pub trait ReplyStore: Send + Sync {
    async fn append(&self, reply: &Reply) -> Result<(), StorageError>;

    /// Most recent first, at most `limit` documents.
    async fn recent(&self, platform: Option<&str>, limit: usize)
        -> Result<Vec<Reply>, StorageError>;

    fn backend(&self) -> &'static str;
}

pub async fn open_store(config: &StorageConfig) -> Result<Arc<dyn ReplyStore>, StorageError> {
    match config.backend.as_str() {
        "jsonl" => Ok(Arc::new(JsonlReplyStore::open(&config.data_dir).await?)),
        "memory" => Ok(Arc::new(MemoryReplyStore::new())),
        other => Err(StorageError::UnknownBackend(other.to_string())),
    }
}

/// Newest first, then cut to `limit`.
fn newest_first(mut replies: Vec<Reply>, limit: usize) -> Vec<Reply> {
    replies.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    replies.truncate(limit);
    replies
}
