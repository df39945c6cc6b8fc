use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::Database;

/// The persistence port every store writes through.
///
/// Values are opaque strings (JSON in practice). Implementations must be
/// safe to share across handler tasks.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_value(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.remove_value(key)
    }
}

/// In-process store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|e| anyhow::anyhow!("Store lock poisoned: {}", e))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|e| anyhow::anyhow!("Store lock poisoned: {}", e))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|e| anyhow::anyhow!("Store lock poisoned: {}", e))?;
        entries.remove(key);
        Ok(())
    }
}

/// Read and decode a JSON record. A record that no longer decodes is
/// logged and reported as absent.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!("Ignoring undecodable record '{}': {}", key, e);
            Ok(None)
        }
    }
}

pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use reactfact_types::{Friend, FriendStatus};

    fn sample_friends() -> Vec<Friend> {
        vec![Friend {
            id: "u7".into(),
            username: "user_u7".into(),
            avatar: None,
            status: FriendStatus::Accepted,
        }]
    }

    #[test]
    fn json_records_survive_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("device.db");

        {
            let db = Database::open(&path).unwrap();
            save_json(&db, &keys::friends("me"), &sample_friends()).unwrap();
        }

        let db = Database::open(&path).unwrap();
        let loaded: Option<Vec<Friend>> = load_json(&db, &keys::friends("me")).unwrap();
        assert_eq!(loaded, Some(sample_friends()));
    }

    #[test]
    fn corrupt_record_reads_as_absent() {
        let store = MemoryStore::new();
        store.set(keys::USER, "{not json").unwrap();

        let loaded: Option<Vec<Friend>> = load_json(&store, keys::USER).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn memory_store_behaves_like_the_database() {
        let stores: Vec<Box<dyn KeyValueStore>> = vec![
            Box::new(MemoryStore::new()),
            Box::new(Database::open_in_memory().unwrap()),
        ];

        for store in stores {
            assert_eq!(store.get("k").unwrap(), None);
            store.set("k", "v1").unwrap();
            store.set("k", "v2").unwrap();
            assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
            store.remove("k").unwrap();
            assert_eq!(store.get("k").unwrap(), None);
        }
    }

    #[test]
    fn per_user_keys_are_distinct() {
        assert_eq!(keys::friends("42"), "friends_42");
        assert_eq!(keys::pending_requests("42"), "pending_requests_42");
        assert_eq!(keys::sent_requests("42"), "sent_requests_42");
    }
}
