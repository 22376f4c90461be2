use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::storage::json_doc_store::JsonDocStore;

/// The shape record as clients see it. The store's internal document id is
/// assigned below this type and never appears here, so responses need no
/// field stripping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shape {
    pub name: String,
    pub no_of_sides: i64,
    pub id: i64,
}

/// File-backed store of shape documents.
///
/// `id` is an intended-unique caller-side identifier, but inserts are raw:
/// nothing stops two documents from carrying the same `id`. Lookups and
/// mutations act on the first matching document.
#[derive(Clone)]
pub struct ShapeStore {
    store: Arc<JsonDocStore<Shape>>,
}

impl ShapeStore {
    /// Initialize the store from the given file path. Creates the file if missing.
    pub async fn new<P: Into<std::path::PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonDocStore::<Shape>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }

    /// All stored shapes, in the store's natural iteration order.
    pub async fn list(&self) -> Vec<Shape> {
        self.store.find_all().await
    }

    /// First shape whose `id` matches, if any.
    pub async fn find_by_id(&self, id: i64) -> Option<Shape> {
        self.store.find_one(|s| s.id == id).await
    }

    /// Raw insert, no duplicate-id check.
    pub async fn insert(&self, shape: Shape) -> Result<(), ServiceError> {
        self.store.insert_one(shape).await?;
        Ok(())
    }

    /// Replace the first shape matching `id` with `shape`. The replacement's
    /// own `id` field is taken as-is and may differ from the matched one.
    pub async fn replace(&self, id: i64, shape: Shape) -> Result<Shape, ServiceError> {
        let replaced = self.store.replace_one(|s| s.id == id, shape.clone()).await?;
        if replaced {
            Ok(shape)
        } else {
            Err(ServiceError::NotFound(format!("No shape with id {id} found")))
        }
    }

    /// Replace the first shape matching `id`, or insert `shape` if none exists.
    pub async fn upsert(&self, id: i64, shape: Shape) -> Result<Shape, ServiceError> {
        self.store.replace_one_upsert(|s| s.id == id, shape.clone()).await?;
        Ok(shape)
    }

    /// Delete the first shape matching `id`; returns whether one existed.
    pub async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        self.store.delete_one(|s| s.id == id).await
    }
}
