use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::{newest_first, ReplyStore, StorageError};
use crate::reply::Reply;

const FILE_PREFIX: &str = "replies_";
const FILE_SUFFIX: &str = ".jsonl";

/// Append-only JSON-lines store, one file per UTC day, one document per line.
pub struct JsonlReplyStore {
    data_dir: PathBuf,
    /// Held by appends and reads so a reader never sees a half-written line.
    file_lock: Mutex<()>,
}

impl JsonlReplyStore {
    pub async fn open(data_dir: &Path) -> Result<Self, StorageError> {
        tokio::fs::create_dir_all(data_dir).await?;
        info!("JSONL reply store at {}", data_dir.display());
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            file_lock: Mutex::new(()),
        })
    }

    fn path_for(&self, reply: &Reply) -> PathBuf {
        let date_str = reply.created_at.format("%Y-%m-%d");
        self.data_dir
            .join(format!("{}{}{}", FILE_PREFIX, date_str, FILE_SUFFIX))
    }

    /// Day files sorted newest first. Names embed the date, so lexical order is
    /// chronological.
    async fn day_files(&self) -> Result<Vec<PathBuf>, StorageError> {
        let mut files = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.data_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with(FILE_PREFIX) && name.ends_with(FILE_SUFFIX) {
                files.push(entry.path());
            }
        }
        files.sort();
        files.reverse();
        Ok(files)
    }
}

#[async_trait]
impl ReplyStore for JsonlReplyStore {
    async fn append(&self, reply: &Reply) -> Result<(), StorageError> {
        let json = serde_json::to_string(reply)?;
        let line = format!("{}\n", json);
        let path = self.path_for(reply);

        let _guard = self.file_lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        debug!("Stored reply {} in {}", reply.id, path.display());
        Ok(())
    }

    async fn recent(
        &self,
        platform: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Reply>, StorageError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let _guard = self.file_lock.lock().await;
        let mut found = Vec::new();
        for path in self.day_files().await? {
            let raw = tokio::fs::read_to_string(&path).await?;
            let mut skipped = 0usize;
            for line in raw.lines().filter(|l| !l.trim().is_empty()) {
                match serde_json::from_str::<Reply>(line) {
                    Ok(reply) if platform.map_or(true, |p| reply.platform == p) => {
                        found.push(reply)
                    }
                    Ok(_) => {}
                    Err(_) => skipped += 1,
                }
            }
            if skipped > 0 {
                warn!("Skipped {} unreadable lines in {}", skipped, path.display());
            }
            // Older day files cannot hold anything newer than what we have.
            if found.len() >= limit {
                break;
            }
        }

        Ok(newest_first(found, limit))
    }

    fn backend(&self) -> &'static str {
        "jsonl"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::fixtures::{minutes_ago, reply_at};
    use chrono::Duration;
    use std::sync::Arc;

    #[tokio::test]
    async fn appends_one_line_per_reply() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = JsonlReplyStore::open(temp.path()).await.expect("open");

        let reply = reply_at("twitter", "first", minutes_ago(0));
        store.append(&reply).await.expect("append");
        store
            .append(&reply_at("twitter", "second", minutes_ago(0)))
            .await
            .expect("append");

        let raw = std::fs::read_to_string(store.path_for(&reply)).expect("read");
        assert_eq!(raw.lines().count(), 2);
        let first: Reply = serde_json::from_str(raw.lines().next().unwrap()).expect("decode");
        assert_eq!(first, reply);
    }

    #[tokio::test]
    async fn recent_spans_day_files_newest_first() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = JsonlReplyStore::open(temp.path()).await.expect("open");

        let now = minutes_ago(0);
        let two_days_ago = now - Duration::days(2);
        store.append(&reply_at("reddit", "old", two_days_ago)).await.unwrap();
        store
            .append(&reply_at("reddit", "older", two_days_ago - Duration::minutes(5)))
            .await
            .unwrap();
        store.append(&reply_at("twitter", "other platform", now)).await.unwrap();
        store.append(&reply_at("reddit", "new", now)).await.unwrap();

        let recent = store.recent(Some("reddit"), 2).await.expect("recent");
        let texts: Vec<_> = recent.iter().map(|r| r.post_text.as_str()).collect();
        assert_eq!(texts, vec!["new", "old"]);

        let all = store.recent(None, 10).await.expect("recent");
        assert_eq!(all.len(), 4);
        assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn unreadable_lines_are_skipped() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = JsonlReplyStore::open(temp.path()).await.expect("open");
        let reply = reply_at("facebook", "kept", minutes_ago(1));
        store.append(&reply).await.unwrap();

        let path = store.path_for(&reply);
        let mut raw = std::fs::read_to_string(&path).unwrap();
        raw.push_str("{not json\n");
        std::fs::write(&path, raw).unwrap();

        let recent = store.recent(None, 5).await.expect("recent");
        assert_eq!(recent, vec![reply]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn reads_during_appends_see_only_whole_lines() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = Arc::new(JsonlReplyStore::open(temp.path()).await.expect("open"));
        let padding = "x".repeat(16 * 1024);

        let mut writers = Vec::new();
        for n in 0..40 {
            let store = Arc::clone(&store);
            let text = format!("{n} {padding}");
            writers.push(tokio::spawn(async move {
                store
                    .append(&reply_at("reddit", &text, minutes_ago(0)))
                    .await
                    .expect("append");
            }));
        }

        let reader = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                let mut seen = 0;
                for _ in 0..20 {
                    let recent = store.recent(None, 100).await.expect("recent");
                    assert!(recent.len() >= seen, "reads went backwards");
                    assert!(recent.iter().all(|r| r.post_text.ends_with(&padding)));
                    seen = recent.len();
                    tokio::task::yield_now().await;
                }
            })
        };

        for writer in writers {
            writer.await.expect("writer task");
        }
        reader.await.expect("reader task");
        assert_eq!(store.recent(None, 100).await.expect("recent").len(), 40);
    }

    #[tokio::test]
    async fn missing_directory_is_a_storage_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = temp.path().join("replies");
        let store = JsonlReplyStore::open(&dir).await.expect("open");
        std::fs::remove_dir_all(&dir).unwrap();

        let err = store
            .append(&reply_at("twitter", "lost", minutes_ago(0)))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
        assert!(store.recent(None, 1).await.is_err());
    }
}
