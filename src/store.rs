use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value, json};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::seed;

/// The whole database: one named array of records per collection.
pub type Collections = BTreeMap<String, Vec<Value>>;

/// Current time in the ISO-8601 millisecond format the store file uses.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Short random record id: the first 8 hex chars of a v4 UUID.
pub fn new_id() -> String {
    Uuid::new_v4().to_simple().to_string()[..8].to_string()
}

/// In-memory JSON store mirrored to a single file on disk.
///
/// Every mutating call rewrites the whole file. A failed write is logged
/// and the in-memory mutation stands, so memory and disk can diverge.
pub struct Store {
    path: PathBuf,
    inner: RwLock<Collections>,
}

impl Store {
    /// Loads the store file, falling back to the seed dataset when the
    /// file is absent or unparseable.
    pub fn open(path: impl Into<PathBuf>) -> Store {
        let path = path.into();
        let data = match Self::read_file(&path) {
            Ok(data) => {
                info!(path = %path.display(), collections = data.len(), "Store loaded");
                data
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Store file unusable, regenerating seed data");
                seed::dataset()
            }
        };
        let store = Store {
            path,
            inner: RwLock::new(data),
        };
        {
            let guard = store.inner.read().unwrap_or_else(|e| e.into_inner());
            store.persist(&guard);
        }
        store
    }

    fn read_file(path: &Path) -> anyhow::Result<Collections> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let data = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(data)
    }

    /// Full-file write-through. Errors are logged, never surfaced.
    fn persist(&self, data: &Collections) {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(dir) {
                    error!(error = %e, dir = %dir.display(), "Failed to create store directory");
                    return;
                }
            }
        }
        match serde_json::to_string_pretty(data) {
            Ok(raw) => {
                if let Err(e) = fs::write(&self.path, raw) {
                    error!(error = %e, path = %self.path.display(), "Failed to write store file");
                }
            }
            Err(e) => error!(error = %e, "Failed to serialize store"),
        }
    }

    /// Clone of the entire store, collection keys included.
    pub fn snapshot(&self) -> Collections {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn list(&self, collection: &str) -> Vec<Value> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.get(collection).cloned().unwrap_or_default()
    }

    /// Full collection, narrowed by string-equality on each filter pair.
    pub fn list_filtered(&self, collection: &str, filters: &HashMap<String, String>) -> Vec<Value> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|rec| {
                        filters
                            .iter()
                            .all(|(field, expected)| field_matches(rec.get(field), expected))
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn find(&self, collection: &str, id: &str) -> Option<Value> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard
            .get(collection)?
            .iter()
            .find(|rec| record_id(rec) == Some(id))
            .cloned()
    }

    /// First record matching the predicate, linear scan.
    pub fn find_first<P>(&self, collection: &str, pred: P) -> Option<Value>
    where
        P: Fn(&Map<String, Value>) -> bool,
    {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard
            .get(collection)?
            .iter()
            .find(|rec| rec.as_object().is_some_and(&pred))
            .cloned()
    }

    /// Assigns an id and timestamps, appends, persists, returns the record.
    pub fn insert(&self, collection: &str, mut body: Map<String, Value>) -> Value {
        body.insert("id".into(), json!(new_id()));
        let now = now_iso();
        body.insert("createdAt".into(), json!(now));
        body.insert("updatedAt".into(), json!(now));
        let record = Value::Object(body);

        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        guard
            .entry(collection.to_string())
            .or_default()
            .push(record.clone());
        self.persist(&guard);
        record
    }

    /// Shallow merge of `patch` over the record; the stored id is kept and
    /// `updatedAt` is restamped. Returns the merged record, `None` if absent.
    pub fn merge(&self, collection: &str, id: &str, patch: Map<String, Value>) -> Option<Value> {
        self.mutate(collection, id, |rec| {
            for (field, value) in patch {
                if field == "id" {
                    continue;
                }
                rec.insert(field, value);
            }
        })
    }

    /// Applies `f` to the record and restamps `updatedAt`; the domain-action
    /// counterpart of `merge`. Returns the updated record, `None` if absent.
    pub fn update_with<F>(&self, collection: &str, id: &str, f: F) -> Option<Value>
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        self.mutate(collection, id, f)
    }

    fn mutate<F>(&self, collection: &str, id: &str, f: F) -> Option<Value>
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let record = guard
            .get_mut(collection)?
            .iter_mut()
            .find(|rec| record_id(rec) == Some(id))?;
        let obj = record.as_object_mut()?;
        f(obj);
        obj.insert("updatedAt".into(), json!(now_iso()));
        let updated = record.clone();
        self.persist(&guard);
        Some(updated)
    }

    /// Splices the record out. Returns false when it was never there.
    pub fn remove(&self, collection: &str, id: &str) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let Some(records) = guard.get_mut(collection) else {
            return false;
        };
        let Some(idx) = records.iter().position(|rec| record_id(rec) == Some(id)) else {
            return false;
        };
        records.remove(idx);
        self.persist(&guard);
        true
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

fn field_matches(field: Option<&Value>, expected: &str) -> bool {
    match field {
        Some(Value::String(s)) => s == expected,
        Some(Value::Number(n)) => n.to_string() == expected,
        Some(Value::Bool(b)) => b.to_string() == expected,
        _ => false,
    }
}
