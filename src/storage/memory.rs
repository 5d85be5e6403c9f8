use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{newest_first, ReplyStore, StorageError};
use crate::reply::Reply;

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryReplyStore {
    replies: RwLock<Vec<Reply>>,
}

impl MemoryReplyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReplyStore for MemoryReplyStore {
    async fn append(&self, reply: &Reply) -> Result<(), StorageError> {
        self.replies.write().await.push(reply.clone());
        Ok(())
    }

    async fn recent(
        &self,
        platform: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Reply>, StorageError> {
        let replies = self.replies.read().await;
        let matching = replies
            .iter()
            .filter(|r| platform.map_or(true, |p| r.platform == p))
            .cloned()
            .collect();
        Ok(newest_first(matching, limit))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::fixtures::{minutes_ago, reply_at};

    #[tokio::test]
    async fn recent_orders_by_created_at_not_insertion() {
        let store = MemoryReplyStore::new();
        store.append(&reply_at("linkedin", "middle", minutes_ago(5))).await.unwrap();
        store.append(&reply_at("linkedin", "oldest", minutes_ago(10))).await.unwrap();
        store.append(&reply_at("linkedin", "newest", minutes_ago(1))).await.unwrap();
        store.append(&reply_at("twitter", "elsewhere", minutes_ago(0))).await.unwrap();

        let recent = store.recent(Some("linkedin"), 2).await.unwrap();
        let texts: Vec<_> = recent.iter().map(|r| r.post_text.as_str()).collect();
        assert_eq!(texts, vec!["newest", "middle"]);

        assert!(store.recent(None, 0).await.unwrap().is_empty());
        assert_eq!(store.recent(None, 50).await.unwrap().len(), 4);
    }
}
