use std::{collections::HashMap, path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Generic JSON file-backed document collection.
///
/// Persists a set of documents to a single JSON file, each keyed by a
/// store-assigned `Uuid` that never leaves the storage layer. Matching is
/// predicate-based, so duplicate documents (by any caller-visible field) can
/// coexist. Intended for lightweight record sets where a database is overkill.
#[derive(Clone)]
pub struct JsonDocStore<V> {
    inner: Arc<RwLock<HashMap<Uuid, V>>>,
    file_path: PathBuf,
}

impl<V> JsonDocStore<V>
where
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Initialize the store from a path. Creates the file with an empty
    /// collection if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let docs: HashMap<Uuid, V> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty: HashMap<Uuid, V> = HashMap::new();
                fs::write(&file_path, serde_json::to_vec(&empty).map_err(|e| ServiceError::Db(e.to_string()))?)
                    .await
                    .map_err(|e| ServiceError::Db(e.to_string()))?;
                empty
            }
        };

        debug!(docs = docs.len(), path = %file_path.display(), "loaded document store");
        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(docs)), file_path }))
    }

    async fn save(&self) -> Result<(), ServiceError> {
        let docs = self.inner.read().await;
        let data = serde_json::to_vec(&*docs).map_err(|e| ServiceError::Db(e.to_string()))?;
        fs::write(&self.file_path, data).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    /// List all documents in the store's natural iteration order.
    pub async fn find_all(&self) -> Vec<V> {
        let docs = self.inner.read().await;
        docs.values().cloned().collect()
    }

    /// First document matching the predicate, if any.
    pub async fn find_one<F>(&self, pred: F) -> Option<V>
    where
        F: Fn(&V) -> bool,
    {
        let docs = self.inner.read().await;
        docs.values().find(|&v| pred(v)).cloned()
    }

    fn match_key<F>(docs: &HashMap<Uuid, V>, pred: F) -> Option<Uuid>
    where
        F: Fn(&V) -> bool,
    {
        docs.iter().find(|&(_, v)| pred(v)).map(|(k, _)| *k)
    }

    /// Insert a document under a fresh internal id and persist.
    pub async fn insert_one(&self, value: V) -> Result<Uuid, ServiceError> {
        let id = Uuid::new_v4();
        let mut docs = self.inner.write().await;
        docs.insert(id, value);
        drop(docs);
        self.save().await?;
        Ok(id)
    }

    /// Replace the first document matching the predicate and persist.
    /// Match and replace happen under one write guard, so no concurrent
    /// writer can slip in between the check and the mutation. Returns
    /// whether a match existed.
    pub async fn replace_one<F>(&self, pred: F, value: V) -> Result<bool, ServiceError>
    where
        F: Fn(&V) -> bool,
    {
        let mut docs = self.inner.write().await;
        let matched = Self::match_key(&docs, &pred);
        let replaced = match matched {
            Some(k) => {
                docs.insert(k, value);
                true
            }
            None => false,
        };
        drop(docs);
        if replaced {
            self.save().await?;
        }
        Ok(replaced)
    }

    /// Replace the first matching document, or insert a new one if nothing
    /// matches. Persists either way.
    pub async fn replace_one_upsert<F>(&self, pred: F, value: V) -> Result<(), ServiceError>
    where
        F: Fn(&V) -> bool,
    {
        let mut docs = self.inner.write().await;
        let key = Self::match_key(&docs, &pred).unwrap_or_else(Uuid::new_v4);
        docs.insert(key, value);
        drop(docs);
        self.save().await
    }

    /// Delete the first document matching the predicate and persist.
    /// Returns whether anything was deleted.
    pub async fn delete_one<F>(&self, pred: F) -> Result<bool, ServiceError>
    where
        F: Fn(&V) -> bool,
    {
        let mut docs = self.inner.write().await;
        let matched = Self::match_key(&docs, &pred);
        let deleted = match matched {
            Some(k) => docs.remove(&k).is_some(),
            None => false,
        };
        drop(docs);
        if deleted {
            self.save().await?;
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    struct Doc {
        tag: u32,
        body: String,
    }

    fn tmp_path() -> PathBuf {
        std::env::temp_dir().join(format!("json_doc_store_{}.json", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn doc_store_crud_persists() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonDocStore::<Doc>::new(&tmp).await?;

        // initially empty
        assert_eq!(store.find_all().await.len(), 0);

        store.insert_one(Doc { tag: 1, body: "a".into() }).await?;
        store.insert_one(Doc { tag: 2, body: "b".into() }).await?;
        assert_eq!(store.find_all().await.len(), 2);
        assert_eq!(store.find_one(|d| d.tag == 1).await.unwrap().body, "a");
        assert!(store.find_one(|d| d.tag == 9).await.is_none());

        // replace existing
        let replaced = store
            .replace_one(|d| d.tag == 1, Doc { tag: 1, body: "a2".into() })
            .await?;
        assert!(replaced);
        assert_eq!(store.find_one(|d| d.tag == 1).await.unwrap().body, "a2");

        // replace miss leaves the collection alone
        let replaced = store
            .replace_one(|d| d.tag == 9, Doc { tag: 9, body: "x".into() })
            .await?;
        assert!(!replaced);
        assert_eq!(store.find_all().await.len(), 2);

        // delete then reload from disk
        assert!(store.delete_one(|d| d.tag == 2).await?);
        assert!(!store.delete_one(|d| d.tag == 2).await?);
        let reloaded = JsonDocStore::<Doc>::new(&tmp).await?;
        let all = reloaded.find_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].tag, 1);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn insert_allows_duplicate_documents() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonDocStore::<Doc>::new(&tmp).await?;

        let doc = Doc { tag: 7, body: "dup".into() };
        store.insert_one(doc.clone()).await?;
        store.insert_one(doc.clone()).await?;
        assert_eq!(store.find_all().await.len(), 2);

        // delete_one removes exactly one of the duplicates
        assert!(store.delete_one(|d| d.tag == 7).await?);
        assert_eq!(store.find_all().await.len(), 1);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn upsert_inserts_on_miss_and_replaces_on_hit() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonDocStore::<Doc>::new(&tmp).await?;

        store
            .replace_one_upsert(|d| d.tag == 3, Doc { tag: 3, body: "new".into() })
            .await?;
        assert_eq!(store.find_all().await.len(), 1);

        store
            .replace_one_upsert(|d| d.tag == 3, Doc { tag: 3, body: "newer".into() })
            .await?;
        assert_eq!(store.find_all().await.len(), 1);
        assert_eq!(store.find_one(|d| d.tag == 3).await.unwrap().body, "newer");

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
