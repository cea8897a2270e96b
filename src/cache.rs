// src/cache.rs
//
// Memoizes query results by the literal SQL text. Row sets are stored as
// JSON so a single cache serves every row type; callers deserialize back
// into their own structs. The query set is fixed, so the map stays
// bounded and no eviction beyond TTL expiry is needed.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

pub struct QueryCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, Entry>>,
}

struct Entry {
    fetched_at: Instant,
    rows: serde_json::Value,
}

impl QueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Fresh rows for this exact query text, or `None` when absent or
    /// past the TTL. Expired entries are never served.
    pub async fn get(&self, sql: &str) -> Option<serde_json::Value> {
        let entries = self.entries.read().await;
        let entry = entries.get(sql)?;
        if entry.fetched_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.rows.clone())
    }

    pub async fn put(&self, sql: &str, rows: serde_json::Value) {
        let mut entries = self.entries.write().await;
        entries.insert(
            sql.to_owned(),
            Entry {
                fetched_at: Instant::now(),
                rows,
            },
        );
    }
}
